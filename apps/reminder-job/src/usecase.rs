//! # ユースケース層
//!
//! リマインダージョブのアプリケーションロジックを実装する。
//!
//! - [`subscription_query`] - 期限 7 日前の有効なサブスクリプションの取得
//! - [`reminder`] - リマインダーメールの生成と送信

pub mod reminder;
pub mod subscription_query;

pub use reminder::{ReminderDispatcher, TemplateRenderer};
pub use subscription_query::SubscriptionQuery;
