//! # Subnotify ドメイン層
//!
//! サブスクリプション期限リマインダーと注文確認メールのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 期限日時は [`subscription::ExpirationDate`] で包み、
//!   ストアに保存された文字列をそのまま保持する
//! - **時刻の抽象化**: 現在時刻は [`clock::Clock`] 経由で取得する
//! - **外部依存なし**: DynamoDB や SES の型はこのクレートに現れない
//!
//! ## 依存関係の方向
//!
//! ```text
//! reminder-job / order-confirmation → infra → domain
//!                  ↘
//!                   shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダ
//! - [`notification`] - メールメッセージと送信エラー
//! - [`order`] - 注文と顧客
//! - [`subscription`] - サブスクリプションレコードと期限日時
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use subnotify_domain::subscription::ExpirationDate;
//!
//! let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let target = ExpirationDate::reminder_target(now);
//! assert_eq!(target.as_str(), "2025-01-08T00:00:00");
//! ```

pub mod clock;
pub mod notification;
pub mod order;
pub mod subscription;

pub use notification::{EmailMessage, NotificationError};
pub use subscription::{ExpirationDate, Subscription};
