//! # 注文確認メールのレンダラー
//!
//! 本文は 1 行の英文で、末尾の改行は落とす。

use subnotify_domain::{
    notification::{EmailMessage, NotificationError},
    order::{Customer, ORDER_CONFIRMATION_SUBJECT, Order},
};
use tera::{Context, Tera};

const ORDER_CONFIRMATION_TEMPLATE: &str = "order_confirmation.txt";

/// テンプレートレンダラー
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_template(
                ORDER_CONFIRMATION_TEMPLATE,
                include_str!("../../templates/notifications/order_confirmation.txt"),
            )
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 顧客宛ての注文確認メールを生成する
    pub fn render(&self, order: &Order, customer: &Customer) -> Result<EmailMessage, NotificationError> {
        let mut context = Context::new();
        context.insert("customer_name", &customer.name);
        context.insert("order_id", order.order_id.as_str());

        let text_body = self
            .engine
            .render(ORDER_CONFIRMATION_TEMPLATE, &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to:        customer.email.clone(),
            subject:   ORDER_CONFIRMATION_SUBJECT.to_string(),
            text_body: text_body.trim_end().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use subnotify_domain::order::{CustomerId, OrderId};

    use super::*;

    #[test]
    fn test_顧客名と注文idを埋め込んだ1行の本文になる() {
        let renderer = TemplateRenderer::new().unwrap();
        let order = Order {
            order_id:    OrderId::new("123"),
            customer_id: CustomerId::new("456"),
        };
        let customer = Customer {
            customer_id: CustomerId::new("456"),
            name:        "John Doe".to_string(),
            email:       "john@example.com".to_string(),
        };

        let email = renderer.render(&order, &customer).unwrap();

        assert_eq!(
            email,
            EmailMessage {
                to:        "john@example.com".to_string(),
                subject:   "Order Confirmation".to_string(),
                text_body: "Hello John Doe, your order 123 has been confirmed.".to_string(),
            }
        );
    }
}
