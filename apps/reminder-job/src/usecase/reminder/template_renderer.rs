//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンでリマインダーメールのプレーンテキスト本文を生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **エスケープなし**: `.txt` テンプレートは tera の自動エスケープ対象外で、値はそのまま入る
//! - **件名固定**: `Subscription Reminder`

use subnotify_domain::{
    notification::{EmailMessage, NotificationError, REMINDER_SUBJECT},
    subscription::Subscription,
};
use tera::{Context, Tera};

const REMINDER_TEMPLATE: &str = "subscription_reminder.txt";

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、`Subscription` から `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_template(
                REMINDER_TEMPLATE,
                include_str!("../../../templates/notifications/subscription_reminder.txt"),
            )
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// サブスクリプションからリマインダーメールを生成する
    pub fn render(&self, subscription: &Subscription) -> Result<EmailMessage, NotificationError> {
        let mut context = Context::new();
        context.insert("customer_name", &subscription.customer_name);
        context.insert("product_name", &subscription.product_name);
        context.insert("expiration_date", subscription.expiration_date.as_str());

        let text_body = self
            .engine
            .render(REMINDER_TEMPLATE, &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to:      subscription.email.clone(),
            subject: REMINDER_SUBJECT.to_string(),
            text_body,
        })
    }
}
