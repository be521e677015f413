//! SES 通知送信実装
//!
//! AWS SES v2 API を使用してプレーンテキストのメールを送信する。
//! デプロイ環境で使用する。

use async_trait::async_trait;
use aws_sdk_sesv2::{
    Client,
    types::{Body, Content, Destination, EmailContent, Message},
};
use subnotify_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// SES 通知送信
///
/// `aws_sdk_sesv2::Client` をラップする。
pub struct SesNotificationSender {
    client:       Client,
    from_address: String,
}

impl SesNotificationSender {
    /// 新しい SES 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `client`: AWS SES v2 クライアント
    /// - `from_address`: 送信元メールアドレス（SES で検証済みであること）
    pub fn new(client: Client, from_address: String) -> Self {
        Self {
            client,
            from_address,
        }
    }

    /// 既定の認証情報チェーンから SES クライアントを構築する
    pub async fn from_env(from_address: String) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;
        Self::new(Client::new(&config), from_address)
    }
}

/// SES の送信内容を組み立てる
///
/// 宛先は常に 1 件、本文は Text パートのみ。
fn build_content(email: &EmailMessage) -> Result<(Destination, EmailContent), NotificationError> {
    let destination = Destination::builder().to_addresses(&email.to).build();

    let subject = Content::builder()
        .data(&email.subject)
        .build()
        .map_err(|e| NotificationError::SendFailed(format!("件名構築失敗: {e}")))?;
    let text = Content::builder()
        .data(&email.text_body)
        .build()
        .map_err(|e| NotificationError::SendFailed(format!("テキスト本文構築失敗: {e}")))?;

    let content = EmailContent::builder()
        .simple(
            Message::builder()
                .subject(subject)
                .body(Body::builder().text(text).build())
                .build(),
        )
        .build();

    Ok((destination, content))
}

#[async_trait]
impl NotificationSender for SesNotificationSender {
    #[tracing::instrument(skip_all, level = "debug", fields(to = %email.to))]
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let (destination, content) = build_content(email)?;

        self.client
            .send_email()
            .from_email_address(&self.from_address)
            .destination(destination)
            .content(content)
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SES 送信失敗: {e}")))?;

        Ok(())
    }
}
