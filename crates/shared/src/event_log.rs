//! # ビジネスイベントログとエラーコンテキストの構造化ヘルパー
//!
//! `jq` でジョブの実行結果を追えるよう、ログフィールドの命名規約と
//! ヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`event.category`、`error.kind`）を使用。tracing の
//! `$($field:ident).+` パターンでサポートされ、JSON 出力でフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。呼び出し側クレートは `tracing` に依存すること。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
///
/// ## 推奨フィールド
///
/// - `event.entity_type`: エンティティ種別（[`event::entity_type`] の定数を使用）
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const REMINDER_JOB: &str = "reminder_job";
        pub const ORDER_CONFIRMATION: &str = "order_confirmation";
        pub const NOTIFICATION: &str = "notification";
    }

    /// イベントアクション
    pub mod action {
        // リマインダージョブ
        pub const JOB_COMPLETED: &str = "reminder_job.completed";
        pub const JOB_FAILED: &str = "reminder_job.failed";

        // 注文確認
        pub const ORDER_CONFIRMED: &str = "order_confirmation.completed";
        pub const ORDER_CONFIRMATION_FAILED: &str = "order_confirmation.failed";

        // 通知
        pub const NOTIFICATION_SENT: &str = "notification.sent";
        pub const NOTIFICATION_FAILED: &str = "notification.failed";
    }

    /// エンティティ種別
    pub mod entity_type {
        pub const SUBSCRIPTION: &str = "subscription";
        pub const ORDER: &str = "order";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// エラーコンテキストフィールドの定数
///
/// 失敗イベントに `error.category` と `error.kind` として付与する。
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// インフラストラクチャ（DynamoDB）
        pub const INFRASTRUCTURE: &str = "infrastructure";
        /// 外部サービス呼び出し（SES、SMTP）
        pub const EXTERNAL_SERVICE: &str = "external_service";
        /// 呼び出し元の入力・参照先の欠落
        pub const REQUEST: &str = "request";
    }

    /// エラー種別
    pub mod kind {
        pub const SUBSCRIPTION_SCAN: &str = "subscription_scan";
        pub const ORDER_LOOKUP: &str = "order_lookup";
        pub const EMAIL_SEND: &str = "email_send";
        pub const MISSING_ORDER_ID: &str = "missing_order_id";
        pub const NOT_FOUND: &str = "not_found";
    }
}

#[cfg(test)]
mod tests {
    use super::{error, event};

    #[test]
    fn log_business_eventはsubscriber未設定でも呼び出せる() {
        crate::log_business_event!(
            event.category = event::category::REMINDER_JOB,
            event.action = event::action::JOB_FAILED,
            event.result = event::result::FAILURE,
            error.category = error::category::EXTERNAL_SERVICE,
            error.kind = error::kind::EMAIL_SEND,
            "リマインダージョブ失敗"
        );
    }
}
