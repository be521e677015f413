//! # リマインダー送信
//!
//! テンプレートレンダリング → メール送信 → ビジネスイベントログを 1 レコード単位で行う。
//!
//! 送信失敗は呼び出し元へそのまま返す。後続レコードを送るかどうかは
//! ジョブ側（[`crate::handler::ReminderJob`]）が決める。

use std::sync::Arc;

use subnotify_domain::{notification::NotificationError, subscription::Subscription};
use subnotify_infra::notification::NotificationSender;
use subnotify_shared::{event_log::event, log_business_event};

use super::TemplateRenderer;

/// リマインダーメールの送信者
pub struct ReminderDispatcher {
    sender:            Arc<dyn NotificationSender>,
    template_renderer: TemplateRenderer,
}

impl ReminderDispatcher {
    pub fn new(sender: Arc<dyn NotificationSender>, template_renderer: TemplateRenderer) -> Self {
        Self {
            sender,
            template_renderer,
        }
    }

    /// 1 件のサブスクリプションにリマインダーメールを送る
    ///
    /// 宛先は `subscription.email` のみ。レンダリング・送信のいずれかが失敗したら
    /// その `NotificationError` を返す。
    pub async fn send_reminder(&self, subscription: &Subscription) -> Result<(), NotificationError> {
        let email = self.template_renderer.render(subscription).inspect_err(|e| {
            tracing::error!(
                error = %e,
                notification.recipient = %subscription.email,
                "リマインダーテンプレートのレンダリングに失敗"
            );
        })?;

        match self.sender.send_email(&email).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.entity_type = event::entity_type::SUBSCRIPTION,
                    event.result = event::result::SUCCESS,
                    notification.recipient = %email.to,
                    subscription.expiration_date = %subscription.expiration_date,
                    "リマインダーメール送信成功"
                );
                Ok(())
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.entity_type = event::entity_type::SUBSCRIPTION,
                    event.result = event::result::FAILURE,
                    notification.recipient = %email.to,
                    subscription.expiration_date = %subscription.expiration_date,
                    error = %e,
                    "リマインダーメール送信失敗"
                );
                Err(e)
            }
        }
    }
}
