//! # リクエストハンドラ
//!
//! API Gateway 形式のイベントを受け取り、`{statusCode, body}` を返す。
//! `body` は JSON 文字列で、失敗時は `{"error": ...}` になる。
//!
//! `run` 自体は失敗しない。すべてのエラーはステータスコード付きのレスポンスに変換する。

use serde::Serialize;
use subnotify_domain::order::OrderId;
pub use subnotify_shared::invocation::InvocationContext;
use subnotify_shared::{event_log::event, log_business_event};

use crate::{
    error::OrderConfirmationError,
    usecase::{ConfirmationReceipt, OrderConfirmation},
};

/// 成功時の `message`
pub const SUCCESS_MESSAGE: &str = "Email sent successfully";

/// ハンドラのレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body:        String,
}

impl ApiResponse {
    fn confirmed(receipt: &ConfirmationReceipt) -> Self {
        let body = serde_json::json!({
            "message": SUCCESS_MESSAGE,
            "orderId": receipt.order_id,
            "customerId": receipt.customer_id,
        });
        Self {
            status_code: 200,
            body:        body.to_string(),
        }
    }

    fn from_error(err: &OrderConfirmationError) -> Self {
        Self {
            status_code: err.status_code(),
            body:        serde_json::json!({ "error": err.public_message() }).to_string(),
        }
    }
}

/// `pathParameters.orderId` を取り出す
fn order_id_from_event(event: &serde_json::Value) -> Result<OrderId, OrderConfirmationError> {
    event
        .get("pathParameters")
        .and_then(|params| params.get("orderId"))
        .and_then(serde_json::Value::as_str)
        .map(OrderId::new)
        .ok_or(OrderConfirmationError::MissingOrderId)
}

/// リクエストを 1 件処理する
#[tracing::instrument(skip_all, fields(request_id = %context.request_id))]
pub async fn run(
    usecase: &OrderConfirmation,
    event: serde_json::Value,
    context: InvocationContext,
) -> ApiResponse {
    let result = match order_id_from_event(&event) {
        Ok(order_id) => usecase.confirm(&order_id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(receipt) => {
            log_business_event!(
                event.category = event::category::ORDER_CONFIRMATION,
                event.action = event::action::ORDER_CONFIRMED,
                event.entity_type = event::entity_type::ORDER,
                event.entity_id = %receipt.order_id,
                event.result = event::result::SUCCESS,
                order.customer_id = %receipt.customer_id,
                "注文確認完了"
            );
            ApiResponse::confirmed(&receipt)
        }
        Err(e) => {
            let (error_category, error_kind) = e.log_context();
            log_business_event!(
                event.category = event::category::ORDER_CONFIRMATION,
                event.action = event::action::ORDER_CONFIRMATION_FAILED,
                event.entity_type = event::entity_type::ORDER,
                event.result = event::result::FAILURE,
                error.category = error_category,
                error.kind = error_kind,
                error = %e,
                "注文確認失敗"
            );
            ApiResponse::from_error(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_イベントから注文idを取り出す() {
        let event = json!({ "pathParameters": { "orderId": "123" } });

        assert_eq!(order_id_from_event(&event).unwrap(), OrderId::new("123"));
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!({}))]
    #[case(json!({ "pathParameters": null }))]
    #[case(json!({ "pathParameters": { "orderId": 123 } }))]
    fn test_注文idがなければmissing_order_idになる(#[case] event: serde_json::Value) {
        assert!(matches!(
            order_id_from_event(&event),
            Err(OrderConfirmationError::MissingOrderId)
        ));
    }

    #[test]
    fn test_レスポンスはstatus_codeとbodyの2フィールドになる() {
        let response = ApiResponse::from_error(&OrderConfirmationError::MissingOrderId);

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "statusCode": 500,
                "body": "{\"error\":\"Internal Server Error\"}"
            })
        );
    }
}
