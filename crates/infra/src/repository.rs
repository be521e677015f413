//! # リポジトリ実装
//!
//! サブスクリプション・注文・顧客のストアへの読み取りアクセスを提供する。
//!
//! ## 設計方針
//!
//! - **読み取り専用**: レコードの作成・更新・削除は外部システムの責務
//! - **テスタビリティ**: トレイト経由でモック可能な設計
//! - **形式不正は失敗扱い**: 属性の欠落・型違いは `MalformedItem` として返す

mod attribute;
pub mod order_repository;
pub mod subscription_repository;

pub use order_repository::{DynamoDbOrderRepository, OrderRepository};
pub use subscription_repository::{
    DynamoDbSubscriptionRepository,
    ExpirationScan,
    SubscriptionRepository,
};
