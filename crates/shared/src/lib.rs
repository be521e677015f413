//! # Subnotify 共有ユーティリティ
//!
//! ジョブ全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - トレーシング関連の依存は `observability` feature で有効化する

pub mod config;
pub mod event_log;
pub mod invocation;
pub mod observability;
