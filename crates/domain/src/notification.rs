//! # 通知
//!
//! ジョブが送るメール（リマインダー、注文確認）のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **テキストのみ**: どのメールもプレーンテキスト 1 通で、HTML パートを持たない
//! - **テンプレート分離**: メール生成（TemplateRenderer）は各ジョブ側に置く
//! - **再送しない**: 送信失敗はそのまま呼び出し元へ返す

use thiserror::Error;

/// リマインダーメールの件名
pub const REMINDER_SUBJECT: &str = "Subscription Reminder";

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
/// 送信元アドレスは送信実装側が保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス（常に 1 件）
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// プレーンテキスト本文
    pub text_body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_failedのメッセージに原因が含まれる() {
        let err = NotificationError::SendFailed("MessageRejected".to_string());
        assert_eq!(err.to_string(), "メール送信に失敗: MessageRejected");
    }

    #[test]
    fn template_failedのメッセージに原因が含まれる() {
        let err = NotificationError::TemplateFailed("unknown variable".to_string());
        assert_eq!(
            err.to_string(),
            "テンプレートレンダリングに失敗: unknown variable"
        );
    }
}
