//! # ジョブハンドラ
//!
//! スケジューラから呼び出されるエントリーポイント。
//!
//! ## 処理フロー
//!
//! ```text
//! Idle → Fetching → Dispatching(0..N) → Done
//!            │             │
//!            └─────────────┴──→ Failed
//! ```
//!
//! 1. 期限 7 日前の有効なサブスクリプションを取得する
//! 2. 取得順に 1 件ずつリマインダーメールを送る
//! 3. 最初の送信失敗で残りを打ち切り、エラーを返す
//!
//! 送信件数にかかわらず、成功時のレスポンスは固定値になる。

use serde::Serialize;
pub use subnotify_shared::invocation::InvocationContext;
use subnotify_shared::{event_log::event, log_business_event};

use crate::{
    error::ReminderJobError,
    usecase::{ReminderDispatcher, SubscriptionQuery},
};

/// 成功時のステータスコード
pub const SUCCESS_STATUS_CODE: u16 = 200;

/// 成功時の本文
pub const SUCCESS_BODY: &str = "Emails sent successfully";

/// ジョブのレスポンス
///
/// `{"statusCode":200,"body":"Emails sent successfully"}` としてシリアライズされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub status_code: u16,
    pub body:        String,
}

impl JobResponse {
    pub fn success() -> Self {
        Self {
            status_code: SUCCESS_STATUS_CODE,
            body:        SUCCESS_BODY.to_string(),
        }
    }
}

/// 1 回の実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderRunReport {
    /// 取得したレコード数
    pub candidates: usize,
    /// 送信に成功した件数
    pub sent:       usize,
}

/// リマインダージョブ
///
/// 取得と送信の 2 つのユースケースを順に実行する。
pub struct ReminderJob {
    query:      SubscriptionQuery,
    dispatcher: ReminderDispatcher,
}

impl ReminderJob {
    pub fn new(query: SubscriptionQuery, dispatcher: ReminderDispatcher) -> Self {
        Self { query, dispatcher }
    }

    /// 対象レコードを取得し、取得順に 1 件ずつ送信する
    ///
    /// 送信は逐次で、最初の失敗で残りを送らずに `Dispatch` エラーを返す。
    pub async fn execute(&self) -> Result<ReminderRunReport, ReminderJobError> {
        let subscriptions = self.query.fetch_expiring_active_subscriptions().await?;
        let candidates = subscriptions.len();
        tracing::info!(candidates, "リマインダー対象を取得しました");

        let mut sent = 0;
        for subscription in &subscriptions {
            self.dispatcher
                .send_reminder(subscription)
                .await
                .map_err(|source| ReminderJobError::Dispatch {
                    recipient: subscription.email.clone(),
                    sent,
                    candidates,
                    source,
                })?;
            sent += 1;
        }

        Ok(ReminderRunReport { candidates, sent })
    }
}

/// ジョブを 1 回実行する
///
/// `event` の内容は使わない。成功時は固定の [`JobResponse`] を返す。
#[tracing::instrument(skip_all, fields(request_id = %context.request_id))]
pub async fn run(
    job: &ReminderJob,
    event: serde_json::Value,
    context: InvocationContext,
) -> Result<JobResponse, ReminderJobError> {
    tracing::debug!(%event, "リマインダージョブを開始します");

    match job.execute().await {
        Ok(report) => {
            log_business_event!(
                event.category = event::category::REMINDER_JOB,
                event.action = event::action::JOB_COMPLETED,
                event.result = event::result::SUCCESS,
                job.candidates = report.candidates,
                job.sent = report.sent,
                "リマインダージョブ完了"
            );
            Ok(JobResponse::success())
        }
        Err(e) => {
            let (error_category, error_kind) = e.log_context();
            log_business_event!(
                event.category = event::category::REMINDER_JOB,
                event.action = event::action::JOB_FAILED,
                event.result = event::result::FAILURE,
                error.category = error_category,
                error.kind = error_kind,
                error = %e,
                "リマインダージョブ失敗"
            );
            Err(e)
        }
    }
}
