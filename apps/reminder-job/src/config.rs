//! # リマインダージョブ設定
//!
//! 環境変数からジョブの設定を 1 度だけ読み込み、各コンポーネントへ明示的に渡す。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `DYNAMO_TABLE` | **Yes** | スキャン対象のテーブル名 |
//! | `IS_OFFLINE` | No | 空でない値が設定されていれば（`false` でも）DynamoDB Local（`http://localhost:8000`）に接続 |
//! | `AWS_ACCESS_KEY_ID` | `IS_OFFLINE` 時のみ | DynamoDB Local の認証情報 |
//! | `AWS_SECRET_ACCESS_KEY` | `IS_OFFLINE` 時のみ | DynamoDB Local の認証情報 |
//! | `SENDER` | **Yes** | 送信元メールアドレス |
//! | `NOTIFICATION_BACKEND` | No | `ses`（デフォルト）/ `smtp` / `noop` |
//! | `SMTP_HOST` / `SMTP_PORT` | No | backend=smtp の接続先（`localhost` / `1025`） |

use std::env;

use subnotify_infra::{
    dynamodb::DynamoDbConnection,
    notification::{NotificationBackend, NotificationConfig},
};
pub use subnotify_shared::config::ConfigError;
use subnotify_shared::config::{parse_or, required};

/// リマインダージョブの設定
#[derive(Debug, Clone)]
pub struct ReminderConfig {
    /// スキャン対象のテーブル名
    pub table_name:   String,
    /// DynamoDB の接続先
    pub store:        DynamoDbConnection,
    /// 通知設定
    pub notification: NotificationConfig,
}

impl ReminderConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の変数ソースから設定を読み込む
    ///
    /// テストではプロセスの環境変数を書き換えずにこちらを使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = required(&lookup, "DYNAMO_TABLE")?;

        let store = if lookup("IS_OFFLINE").is_some_and(|v| !v.is_empty()) {
            DynamoDbConnection::local(
                required(&lookup, "AWS_ACCESS_KEY_ID")?,
                required(&lookup, "AWS_SECRET_ACCESS_KEY")?,
            )
        } else {
            DynamoDbConnection::Deployed
        };

        Ok(Self {
            table_name,
            store,
            notification: notification_from_lookup(&lookup)?,
        })
    }
}

fn notification_from_lookup(
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<NotificationConfig, ConfigError> {
    Ok(NotificationConfig {
        backend:      parse_or(lookup, "NOTIFICATION_BACKEND", NotificationBackend::default())?,
        from_address: required(lookup, "SENDER")?,
        smtp_host:    lookup("SMTP_HOST")
            .unwrap_or_else(|| NotificationConfig::DEFAULT_SMTP_HOST.to_string()),
        smtp_port:    parse_or(lookup, "SMTP_PORT", NotificationConfig::DEFAULT_SMTP_PORT)?,
    })
}
