//! # Subnotify インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **ストア接続**: DynamoDB クライアントの構築（ローカル / デプロイ環境）
//! - **リポジトリ実装**: サブスクリプションのフィルタ付きスキャン、注文・顧客のキー取得
//! - **通知送信**: SES / SMTP / Noop によるメール送信
//!
//! ## 依存関係
//!
//! ```text
//! reminder-job / order-confirmation → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`dynamodb`] - DynamoDB 接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`notification`] - メール送信トレイトと実装
//! - [`repository`] - リポジトリ実装
//! - `mock` - インメモリモック（`test-utils` feature）

pub mod dynamodb;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
