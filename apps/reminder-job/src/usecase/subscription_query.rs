//! # サブスクリプション取得
//!
//! 現在時刻から対象の期限日時を決め、リポジトリに問い合わせる。

use std::sync::Arc;

use subnotify_domain::{
    clock::Clock,
    subscription::{ExpirationDate, Subscription},
};
use subnotify_infra::{InfraError, repository::SubscriptionRepository};

/// 期限間近のサブスクリプションを取得するクエリ
pub struct SubscriptionQuery {
    repository: Arc<dyn SubscriptionRepository>,
    clock:      Arc<dyn Clock>,
}

impl SubscriptionQuery {
    pub fn new(repository: Arc<dyn SubscriptionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// 期限日時がちょうど `now + 7 日` で、有効なサブスクリプションを取得する
    ///
    /// 取得順はストアが返した順のまま。該当がなければ空の `Vec` を返す。
    pub async fn fetch_expiring_active_subscriptions(&self) -> Result<Vec<Subscription>, InfraError> {
        let target = ExpirationDate::reminder_target(self.clock.now());
        tracing::debug!(expiration_date = %target, "リマインダー対象の期限日時");

        self.repository.find_active_by_expiration_date(&target).await
    }
}
