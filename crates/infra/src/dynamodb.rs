//! # DynamoDB 接続管理
//!
//! サブスクリプションテーブルを保持する DynamoDB への接続管理を行う。
//!
//! ## 設計方針
//!
//! - **ローカル実行**: DynamoDB Local（`http://localhost:8000`）に明示的な認証情報で接続
//! - **デプロイ環境**: デフォルトのエンドポイントと認証情報チェーン（IAM ロール等）を使用
//! - **クエリは共通**: 接続先が変わるだけで、スキャンの内容はどちらも同じ
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use subnotify_infra::dynamodb::{self, DynamoDbConnection};
//!
//! async fn setup() {
//!     let connection = DynamoDbConnection::local("local", "local");
//!     let client = dynamodb::create_client(&connection).await;
//! }
//! ```

use std::fmt;

use aws_sdk_dynamodb::{Client, config::Credentials};

/// DynamoDB Local のエンドポイント
pub const LOCAL_ENDPOINT: &str = "http://localhost:8000";

/// DynamoDB Local 接続時のリージョン
const LOCAL_REGION: &str = "localhost";

/// DynamoDB への接続先
#[derive(Clone, PartialEq, Eq)]
pub enum DynamoDbConnection {
    /// AWS のデフォルトエンドポイント（認証情報はデフォルトチェーンから解決）
    Deployed,
    /// ローカルエンドポイント（明示的な認証情報が必要）
    Local {
        endpoint:          String,
        access_key_id:     String,
        secret_access_key: String,
    },
}

impl DynamoDbConnection {
    /// [`LOCAL_ENDPOINT`] へのローカル接続を作成する
    pub fn local(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self::Local {
            endpoint:          LOCAL_ENDPOINT.to_string(),
            access_key_id:     access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }

    /// エンドポイントの上書き先を返す（デプロイ環境では `None`）
    pub fn endpoint_url(&self) -> Option<&str> {
        match self {
            Self::Deployed => None,
            Self::Local { endpoint, .. } => Some(endpoint),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }
}

impl fmt::Debug for DynamoDbConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deployed => f.write_str("Deployed"),
            Self::Local {
                endpoint,
                access_key_id,
                ..
            } => f
                .debug_struct("Local")
                .field("endpoint", endpoint)
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"***")
                .finish(),
        }
    }
}

/// DynamoDB クライアントを作成する
///
/// # 引数
///
/// * `connection` - 接続先（ローカル / デプロイ環境）
pub async fn create_client(connection: &DynamoDbConnection) -> Client {
    let config = match connection {
        DynamoDbConnection::Deployed => {
            aws_config::defaults(aws_config::BehaviorVersion::latest())
                .load()
                .await
        }
        DynamoDbConnection::Local {
            endpoint,
            access_key_id,
            secret_access_key,
        } => {
            tracing::debug!(endpoint = %endpoint, "DynamoDB Local に接続します");
            aws_config::defaults(aws_config::BehaviorVersion::latest())
                .endpoint_url(endpoint)
                .region(aws_config::Region::new(LOCAL_REGION))
                .credentials_provider(Credentials::new(
                    access_key_id,
                    secret_access_key,
                    None,
                    None,
                    "subnotify-local",
                ))
                .load()
                .await
        }
    };

    Client::new(&config)
}
