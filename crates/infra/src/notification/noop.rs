//! ドライラン用の送信実装
//!
//! 宛先と件名をログに残すだけで、外部へは何も送らない。
//! `NOTIFICATION_BACKEND=noop` で対象件数や本文だけを確かめたいときに使う。

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use subnotify_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// 送信をスキップする実装
///
/// スキップした件数を数え、ジョブ終了時のログと突き合わせられるようにする。
#[derive(Debug, Default)]
pub struct NoopNotificationSender {
    skipped: AtomicUsize,
}

impl NoopNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// これまでにスキップした通数
    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let skipped = self.skipped.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(
            notification.recipient = %email.to,
            notification.subject = %email.subject,
            dry_run.skipped = skipped,
            "ドライラン: メールは送信しません"
        );
        tracing::debug!(body = %email.text_body, "ドライラン本文");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn reminder_to(to: &str) -> EmailMessage {
        EmailMessage {
            to:        to.to_string(),
            subject:   "Subscription Reminder".to_string(),
            text_body: "Hola Ana".to_string(),
        }
    }

    #[tokio::test]
    async fn test_送信のたびにスキップ件数が増える() {
        let sender = NoopNotificationSender::new();

        sender.send_email(&reminder_to("a@x.com")).await.unwrap();
        sender.send_email(&reminder_to("b@x.com")).await.unwrap();

        assert_eq!(sender.skipped(), 2);
    }

    #[test]
    fn test_新規作成時のスキップ件数は0() {
        assert_eq!(NoopNotificationSender::new().skipped(), 0);
    }
}
