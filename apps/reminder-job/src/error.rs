//! # リマインダージョブのエラー定義
//!
//! ジョブ実行を中断させるエラーを定義する。どちらの場合もジョブは成功レスポンスを返さない。

use subnotify_domain::notification::NotificationError;
use subnotify_infra::InfraError;
use subnotify_shared::event_log::error;
use thiserror::Error;

/// リマインダージョブで発生するエラー
#[derive(Debug, Error)]
pub enum ReminderJobError {
    /// サブスクリプションの取得に失敗（メールは 1 通も送っていない）
    #[error("サブスクリプションの取得に失敗: {0}")]
    Fetch(#[from] InfraError),

    /// メール送信に失敗（以降のレコードには送らない）
    #[error("{recipient} へのリマインダー送信に失敗（{sent}/{candidates} 件送信済み）: {source}")]
    Dispatch {
        recipient:  String,
        sent:       usize,
        candidates: usize,
        #[source]
        source:     NotificationError,
    },
}

impl ReminderJobError {
    /// 失敗イベントに付与する `(error.category, error.kind)`
    pub fn log_context(&self) -> (&'static str, &'static str) {
        match self {
            Self::Fetch(_) => (error::category::INFRASTRUCTURE, error::kind::SUBSCRIPTION_SCAN),
            Self::Dispatch { .. } => (error::category::EXTERNAL_SERVICE, error::kind::EMAIL_SEND),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dispatchのメッセージに宛先と送信済み件数が含まれる() {
        let err = ReminderJobError::Dispatch {
            recipient:  "b@x.com".to_string(),
            sent:       1,
            candidates: 3,
            source:     NotificationError::SendFailed("MessageRejected".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "b@x.com へのリマインダー送信に失敗（1/3 件送信済み）: メール送信に失敗: MessageRejected"
        );
    }

    #[test]
    fn test_fetchはinfra_errorから変換できる() {
        let err: ReminderJobError = InfraError::dynamo_db("ResourceNotFoundException").into();

        assert!(matches!(err, ReminderJobError::Fetch(_)));
        assert!(err.to_string().starts_with("サブスクリプションの取得に失敗: "));
    }

    #[test]
    fn test_log_contextは失敗箇所ごとのカテゴリと種別を返す() {
        let fetch: ReminderJobError = InfraError::dynamo_db("AccessDeniedException").into();
        let dispatch = ReminderJobError::Dispatch {
            recipient:  "a@x.com".to_string(),
            sent:       0,
            candidates: 1,
            source:     NotificationError::SendFailed("MessageRejected".to_string()),
        };

        assert_eq!(fetch.log_context(), ("infrastructure", "subscription_scan"));
        assert_eq!(dispatch.log_context(), ("external_service", "email_send"));
    }
}
