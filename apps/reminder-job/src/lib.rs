//! # サブスクリプションリマインダージョブ
//!
//! 期限の 7 日前を迎えた有効なサブスクリプションに、リマインダーメールを 1 通ずつ送る
//! スケジュールジョブ。
//!
//! ## モジュール構成
//!
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - ジョブのエラー定義
//! - [`handler`] - エントリーポイント（`run`）とジョブ本体
//! - [`usecase`] - サブスクリプション取得とリマインダー送信

pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
