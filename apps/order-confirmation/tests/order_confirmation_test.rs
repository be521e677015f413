//! 注文確認ハンドラのシナリオテスト
//!
//! インメモリのリポジトリと送信モックでイベントから HTTP レスポンスまでを通す。

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use subnotify_domain::order::{Customer, CustomerId, Order, OrderId};
use subnotify_infra::mock::{MockNotificationSender, MockOrderRepository};
use subnotify_order_confirmation::{
    handler::{self, ApiResponse, InvocationContext},
    usecase::{OrderConfirmation, TemplateRenderer},
};

fn order_event(order_id: &str) -> serde_json::Value {
    json!({ "pathParameters": { "orderId": order_id } })
}

fn order(order_id: &str, customer_id: &str) -> Order {
    Order {
        order_id:    OrderId::new(order_id),
        customer_id: CustomerId::new(customer_id),
    }
}

fn john_doe() -> Customer {
    Customer {
        customer_id: CustomerId::new("456"),
        name:        "John Doe".to_string(),
        email:       "john@example.com".to_string(),
    }
}

async fn handle(
    repo: MockOrderRepository,
    sender: MockNotificationSender,
    event: serde_json::Value,
) -> ApiResponse {
    let usecase = OrderConfirmation::new(
        Arc::new(repo),
        Arc::new(sender),
        TemplateRenderer::new().unwrap(),
    );
    handler::run(&usecase, event, InvocationContext::new("req-1")).await
}

fn error_response(status_code: u16, message: &str) -> ApiResponse {
    ApiResponse {
        status_code,
        body: json!({ "error": message }).to_string(),
    }
}

#[tokio::test]
async fn test_注文と顧客があれば確認メールを送り200を返す() {
    let repo = MockOrderRepository::new();
    repo.add_order(order("123", "456"));
    repo.add_customer(john_doe());
    let sender = MockNotificationSender::new();

    let response = handle(repo, sender.clone(), order_event("123")).await;

    assert_eq!(response.status_code, 200);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(
        body,
        json!({
            "message": "Email sent successfully",
            "orderId": "123",
            "customerId": "456"
        })
    );

    let sent = sender.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "john@example.com");
    assert_eq!(sent[0].subject, "Order Confirmation");
    assert_eq!(sent[0].text_body, "Hello John Doe, your order 123 has been confirmed.");
}

#[tokio::test]
async fn test_注文がなければ404を返し送信しない() {
    let sender = MockNotificationSender::new();

    let response = handle(MockOrderRepository::new(), sender.clone(), order_event("123")).await;

    assert_eq!(response, error_response(404, "Order not found"));
    assert!(sender.attempted_recipients().is_empty());
}

#[tokio::test]
async fn test_顧客がなければ404を返し送信しない() {
    let repo = MockOrderRepository::new();
    repo.add_order(order("123", "456"));
    let sender = MockNotificationSender::new();

    let response = handle(repo, sender.clone(), order_event("123")).await;

    assert_eq!(response, error_response(404, "Customer not found"));
    assert!(sender.attempted_recipients().is_empty());
}

#[tokio::test]
async fn test_データベースエラーは500を返す() {
    let repo = MockOrderRepository::new();
    repo.add_order(order("123", "456"));
    repo.fail_with("Database error");

    let response = handle(repo, MockNotificationSender::new(), order_event("123")).await;

    assert_eq!(response, error_response(500, "Internal Server Error"));
}

#[tokio::test]
async fn test_メール送信失敗は500を返す() {
    let repo = MockOrderRepository::new();
    repo.add_order(order("123", "456"));
    repo.add_customer(john_doe());
    let sender = MockNotificationSender::new();
    sender.fail_for("john@example.com");

    let response = handle(repo, sender.clone(), order_event("123")).await;

    assert_eq!(response, error_response(500, "Internal Server Error"));
    assert_eq!(sender.attempted_recipients(), vec!["john@example.com".to_string()]);
}

#[tokio::test]
async fn test_パスパラメータがなければ500を返す() {
    let sender = MockNotificationSender::new();

    let response = handle(MockOrderRepository::new(), sender.clone(), json!({})).await;

    assert_eq!(response, error_response(500, "Internal Server Error"));
    assert!(sender.attempted_recipients().is_empty());
}
