//! # リマインダー通知
//!
//! サブスクリプション 1 件分のリマインダーメールの生成と送信を担う。
//!
//! ## モジュール構成
//!
//! - [`template_renderer`] - tera テンプレートエンジンによるメール生成
//! - [`dispatcher`] - テンプレートレンダリング + 送信 + イベントログの統合

pub mod dispatcher;
pub mod template_renderer;

pub use dispatcher::ReminderDispatcher;
pub use template_renderer::TemplateRenderer;
