//! # テスト用モック
//!
//! ユースケーステストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! subnotify-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use subnotify_domain::{
    notification::{EmailMessage, NotificationError},
    order::{Customer, CustomerId, Order, OrderId},
    subscription::{ExpirationDate, Subscription},
};

use crate::{
    error::InfraError,
    notification::NotificationSender,
    repository::{OrderRepository, SubscriptionRepository},
};

// ===== MockSubscriptionRepository =====

/// インメモリのサブスクリプションストア
///
/// DynamoDB のフィルタと同じく、期限日時の完全一致かつ `active == true` のレコードを
/// 登録順に返す。
#[derive(Clone, Default)]
pub struct MockSubscriptionRepository {
    subscriptions:   Arc<Mutex<Vec<Subscription>>>,
    requested_dates: Arc<Mutex<Vec<ExpirationDate>>>,
    failure:         Arc<Mutex<Option<String>>>,
}

impl MockSubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_subscription(&self, subscription: Subscription) {
        self.subscriptions.lock().unwrap().push(subscription);
    }

    /// 以降のスキャンを DynamoDB エラーで失敗させる
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// スキャンで要求された期限日時の一覧
    pub fn requested_dates(&self) -> Vec<ExpirationDate> {
        self.requested_dates.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscriptionRepository for MockSubscriptionRepository {
    async fn find_active_by_expiration_date(
        &self,
        expiration_date: &ExpirationDate,
    ) -> Result<Vec<Subscription>, InfraError> {
        self.requested_dates
            .lock()
            .unwrap()
            .push(expiration_date.clone());

        if let Some(message) = self.failure.lock().unwrap().as_ref() {
            return Err(InfraError::dynamo_db(message.clone()));
        }

        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.active && &s.expiration_date == expiration_date)
            .cloned()
            .collect())
    }
}

// ===== MockOrderRepository =====

/// 注文と顧客をキーで引けるインメモリストア
#[derive(Clone, Default)]
pub struct MockOrderRepository {
    orders:    Arc<Mutex<HashMap<OrderId, Order>>>,
    customers: Arc<Mutex<HashMap<CustomerId, Customer>>>,
    failure:   Arc<Mutex<Option<String>>>,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_order(&self, order: Order) {
        self.orders
            .lock()
            .unwrap()
            .insert(order.order_id.clone(), order);
    }

    pub fn add_customer(&self, customer: Customer) {
        self.customers
            .lock()
            .unwrap()
            .insert(customer.customer_id.clone(), customer);
    }

    /// 以降の読み出しを DynamoDB エラーで失敗させる
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    fn check_failure(&self) -> Result<(), InfraError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(InfraError::dynamo_db(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn find_order(&self, order_id: &OrderId) -> Result<Option<Order>, InfraError> {
        self.check_failure()?;
        Ok(self.orders.lock().unwrap().get(order_id).cloned())
    }

    async fn find_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Option<Customer>, InfraError> {
        self.check_failure()?;
        Ok(self.customers.lock().unwrap().get(customer_id).cloned())
    }
}

// ===== MockNotificationSender =====

/// 送信内容を記録するメール送信モック
///
/// `fail_for` で指定した宛先への送信は `SendFailed` を返す。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent:              Arc<Mutex<Vec<EmailMessage>>>,
    attempted:         Arc<Mutex<Vec<String>>>,
    failing_addresses: Arc<Mutex<HashSet<String>>>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した宛先への送信を失敗させる
    pub fn fail_for(&self, address: impl Into<String>) {
        self.failing_addresses
            .lock()
            .unwrap()
            .insert(address.into());
    }

    /// 送信に成功したメール
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// 送信を試みた宛先（失敗を含む、呼び出し順）
    pub fn attempted_recipients(&self) -> Vec<String> {
        self.attempted.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        self.attempted.lock().unwrap().push(email.to.clone());

        if self.failing_addresses.lock().unwrap().contains(&email.to) {
            return Err(NotificationError::SendFailed(format!(
                "MessageRejected: {}",
                email.to
            )));
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
