//! # 注文確認設定
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TABLE_NAME` | **Yes** | 注文と顧客を保存しているテーブル名 |
//! | `OFFLINE` | No | 空でない値が設定されていれば DynamoDB Local（`http://localhost:8000`）に接続 |
//! | `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` | No | `OFFLINE` 時の認証情報（未設定なら `local`） |
//! | `SOURCE_EMAIL` | **Yes** | 送信元メールアドレス |
//! | `NOTIFICATION_BACKEND` | No | `ses`（デフォルト）/ `smtp` / `noop` |
//! | `SMTP_HOST` / `SMTP_PORT` | No | backend=smtp の接続先（`localhost` / `1025`） |

use std::env;

use subnotify_infra::{
    dynamodb::DynamoDbConnection,
    notification::{NotificationBackend, NotificationConfig},
};
pub use subnotify_shared::config::ConfigError;
use subnotify_shared::config::{parse_or, required};

/// DynamoDB Local はどんな認証情報でも受け付ける
const LOCAL_CREDENTIAL: &str = "local";

/// 注文確認ハンドラの設定
#[derive(Debug, Clone)]
pub struct OrderConfirmationConfig {
    pub table_name:   String,
    pub store:        DynamoDbConnection,
    pub notification: NotificationConfig,
}

impl OrderConfirmationConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の変数ソースから設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = required(&lookup, "TABLE_NAME")?;

        let store = if lookup("OFFLINE").is_some_and(|v| !v.is_empty()) {
            let credential = |name| {
                required(&lookup, name).unwrap_or_else(|_| LOCAL_CREDENTIAL.to_string())
            };
            DynamoDbConnection::local(
                credential("AWS_ACCESS_KEY_ID"),
                credential("AWS_SECRET_ACCESS_KEY"),
            )
        } else {
            DynamoDbConnection::Deployed
        };

        let notification = NotificationConfig {
            backend:      parse_or(&lookup, "NOTIFICATION_BACKEND", NotificationBackend::default())?,
            from_address: required(&lookup, "SOURCE_EMAIL")?,
            smtp_host:    lookup("SMTP_HOST")
                .unwrap_or_else(|| NotificationConfig::DEFAULT_SMTP_HOST.to_string()),
            smtp_port:    parse_or(&lookup, "SMTP_PORT", NotificationConfig::DEFAULT_SMTP_PORT)?,
        };

        Ok(Self {
            table_name,
            store,
            notification,
        })
    }
}
