//! # 注文確認
//!
//! 注文 → 顧客の順に取得し、顧客のアドレスに確認メールを 1 通送る。
//! どちらかが見つからなければメールは送らない。

use std::sync::Arc;

use subnotify_domain::order::{CustomerId, OrderId};
use subnotify_infra::{notification::NotificationSender, repository::OrderRepository};
use subnotify_shared::{event_log::event, log_business_event};

use super::TemplateRenderer;
use crate::error::OrderConfirmationError;

/// 送信済みの注文確認
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationReceipt {
    pub order_id:    OrderId,
    pub customer_id: CustomerId,
}

/// 注文確認ユースケース
pub struct OrderConfirmation {
    repository:        Arc<dyn OrderRepository>,
    sender:            Arc<dyn NotificationSender>,
    template_renderer: TemplateRenderer,
}

impl OrderConfirmation {
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        sender: Arc<dyn NotificationSender>,
        template_renderer: TemplateRenderer,
    ) -> Self {
        Self {
            repository,
            sender,
            template_renderer,
        }
    }

    #[tracing::instrument(skip_all, fields(%order_id))]
    pub async fn confirm(
        &self,
        order_id: &OrderId,
    ) -> Result<ConfirmationReceipt, OrderConfirmationError> {
        let order = self
            .repository
            .find_order(order_id)
            .await?
            .ok_or_else(|| OrderConfirmationError::OrderNotFound(order_id.clone()))?;

        let customer = self
            .repository
            .find_customer(&order.customer_id)
            .await?
            .ok_or_else(|| OrderConfirmationError::CustomerNotFound(order.customer_id.clone()))?;

        let email = self.template_renderer.render(&order, &customer)?;

        if let Err(e) = self.sender.send_email(&email).await {
            log_business_event!(
                event.category = event::category::NOTIFICATION,
                event.action = event::action::NOTIFICATION_FAILED,
                event.entity_type = event::entity_type::ORDER,
                event.entity_id = %order.order_id,
                event.result = event::result::FAILURE,
                notification.recipient = %email.to,
                error = %e,
                "注文確認メール送信失敗"
            );
            return Err(e.into());
        }

        log_business_event!(
            event.category = event::category::NOTIFICATION,
            event.action = event::action::NOTIFICATION_SENT,
            event.entity_type = event::entity_type::ORDER,
            event.entity_id = %order.order_id,
            event.result = event::result::SUCCESS,
            notification.recipient = %email.to,
            "注文確認メール送信成功"
        );

        Ok(ConfirmationReceipt {
            order_id:    order.order_id,
            customer_id: order.customer_id,
        })
    }
}
