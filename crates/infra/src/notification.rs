//! # 通知送信
//!
//! ジョブが送るメール（リマインダー、注文確認）の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **3 つの実装**: SES（本番用）、SMTP（Mailpit 開発用）、Noop（ドライラン）
//! - **設定から構築**: [`NotificationConfig::build_sender`] が `NOTIFICATION_BACKEND` に応じた実装を返す
//! - **再送しない**: 送信失敗はそのまま返す

mod noop;
mod ses;
mod smtp;

use std::sync::Arc;

use async_trait::async_trait;
pub use noop::NoopNotificationSender;
pub use ses::SesNotificationSender;
pub use smtp::SmtpNotificationSender;
use strum::{Display, EnumString};
use subnotify_domain::notification::{EmailMessage, NotificationError};

/// メール送信トレイト
///
/// 1 回の呼び出しで 1 通だけ送信する。送信元アドレスは実装が保持する。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}

/// 送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationBackend {
    /// Amazon SES v2
    #[default]
    Ses,
    /// SMTP（Mailpit 等）
    Smtp,
    /// 送信しない（ログ出力のみ）
    Noop,
}

/// 送信バックエンドの設定
///
/// 環境変数の読み込みは各ジョブの設定モジュールが行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    pub backend:      NotificationBackend,
    /// 送信元メールアドレス
    pub from_address: String,
    /// SMTP ホスト（backend=smtp の場合に使用）
    pub smtp_host:    String,
    /// SMTP ポート（backend=smtp の場合に使用）
    pub smtp_port:    u16,
}

impl NotificationConfig {
    pub const DEFAULT_SMTP_HOST: &'static str = "localhost";
    pub const DEFAULT_SMTP_PORT: u16 = 1025;

    /// 設定されたバックエンドの送信実装を構築する
    ///
    /// SES は既定の認証情報チェーンを使う（DynamoDB Local 用の設定には影響されない）。
    pub async fn build_sender(&self) -> Arc<dyn NotificationSender> {
        match self.backend {
            NotificationBackend::Ses => {
                Arc::new(SesNotificationSender::from_env(self.from_address.clone()).await)
            }
            NotificationBackend::Smtp => Arc::new(SmtpNotificationSender::new(
                &self.smtp_host,
                self.smtp_port,
                self.from_address.clone(),
            )),
            NotificationBackend::Noop => Arc::new(NoopNotificationSender::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ses", NotificationBackend::Ses)]
    #[case("smtp", NotificationBackend::Smtp)]
    #[case("noop", NotificationBackend::Noop)]
    fn test_バックエンド名をパースできる(#[case] value: &str, #[case] expected: NotificationBackend) {
        assert_eq!(value.parse::<NotificationBackend>().unwrap(), expected);
        assert_eq!(expected.to_string(), value);
    }

    #[test]
    fn test_未知のバックエンド名はエラーになる() {
        assert!("sendgrid".parse::<NotificationBackend>().is_err());
    }

    #[tokio::test]
    async fn test_noopバックエンドは送信せず成功を返す() {
        let config = NotificationConfig {
            backend:      NotificationBackend::Noop,
            from_address: "noreply@example.com".to_string(),
            smtp_host:    NotificationConfig::DEFAULT_SMTP_HOST.to_string(),
            smtp_port:    NotificationConfig::DEFAULT_SMTP_PORT,
        };
        let sender = config.build_sender().await;

        let result = sender
            .send_email(&EmailMessage {
                to:        "a@x.com".to_string(),
                subject:   "Order Confirmation".to_string(),
                text_body: "Hello".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }
}
