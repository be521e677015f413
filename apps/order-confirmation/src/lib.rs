//! # 注文確認メール送信
//!
//! パスパラメータの注文 ID から注文と顧客を引き、顧客に注文確認メールを 1 通送る
//! リクエスト駆動のハンドラ。
//!
//! ## モジュール構成
//!
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - エラー定義と HTTP ステータスへの対応
//! - [`handler`] - エントリーポイント（`run`）とレスポンス
//! - [`usecase`] - 注文・顧客の取得と確認メール送信

pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
