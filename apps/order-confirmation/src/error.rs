//! # 注文確認のエラー定義
//!
//! 各エラーはそのまま HTTP ステータスとレスポンス本文に対応する。
//! 「見つからない」以外の失敗は、詳細を隠して 500 の固定本文を返す。

use subnotify_domain::{
    notification::NotificationError,
    order::{CustomerId, OrderId},
};
use subnotify_infra::InfraError;
use subnotify_shared::event_log::error;
use thiserror::Error;

/// 内部エラー時の本文
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// 注文確認で発生するエラー
#[derive(Debug, Error)]
pub enum OrderConfirmationError {
    /// イベントに `pathParameters.orderId` がない
    #[error("イベントに注文 ID が含まれていない")]
    MissingOrderId,

    #[error("注文が見つからない: {0}")]
    OrderNotFound(OrderId),

    #[error("顧客が見つからない: {0}")]
    CustomerNotFound(CustomerId),

    /// 注文・顧客の取得に失敗
    #[error("注文情報の取得に失敗: {0}")]
    Lookup(#[from] InfraError),

    /// 確認メールの生成・送信に失敗
    #[error("注文確認メールの送信に失敗: {0}")]
    Notification(#[from] NotificationError),
}

impl OrderConfirmationError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::OrderNotFound(_) | Self::CustomerNotFound(_) => 404,
            Self::MissingOrderId | Self::Lookup(_) | Self::Notification(_) => 500,
        }
    }

    /// レスポンス本文の `error` に入れるメッセージ
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::OrderNotFound(_) => "Order not found",
            Self::CustomerNotFound(_) => "Customer not found",
            Self::MissingOrderId | Self::Lookup(_) | Self::Notification(_) => {
                INTERNAL_ERROR_MESSAGE
            }
        }
    }

    /// 失敗イベントに付与する `(error.category, error.kind)`
    pub fn log_context(&self) -> (&'static str, &'static str) {
        match self {
            Self::MissingOrderId => (error::category::REQUEST, error::kind::MISSING_ORDER_ID),
            Self::OrderNotFound(_) | Self::CustomerNotFound(_) => {
                (error::category::REQUEST, error::kind::NOT_FOUND)
            }
            Self::Lookup(_) => (error::category::INFRASTRUCTURE, error::kind::ORDER_LOOKUP),
            Self::Notification(_) => (error::category::EXTERNAL_SERVICE, error::kind::EMAIL_SEND),
        }
    }
}
