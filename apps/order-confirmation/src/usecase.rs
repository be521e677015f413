//! # ユースケース層
//!
//! - [`order_confirmation`] - 注文・顧客の取得と確認メール送信
//! - [`template_renderer`] - 確認メール本文の生成

pub mod order_confirmation;
pub mod template_renderer;

pub use order_confirmation::{ConfirmationReceipt, OrderConfirmation};
pub use template_renderer::TemplateRenderer;
