//! # サブスクリプション
//!
//! 期限リマインダーの対象となるサブスクリプションレコードを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`Subscription`] | サブスクリプションレコード | 顧客 1 人の製品契約。外部ストアが所有し、本システムは読むだけ |
//! | [`ExpirationDate`] | 期限日時 | `YYYY-MM-DDTHH:MM:SS` 形式の文字列。検索条件と表示の両方に使う |
//!
//! ## 不変条件
//!
//! ストア上の `expirationDate` は [`EXPIRATION_DATE_FORMAT`] で保存されている。
//! 検索は範囲ではなく文字列の完全一致で行うため、秒単位で一致するレコードのみが対象になる。

use chrono::{DateTime, Duration, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// リマインダーを送る期限までの日数
pub const REMINDER_LOOKAHEAD_DAYS: i64 = 7;

/// 期限日時の書式（タイムゾーン・小数秒なし）
pub const EXPIRATION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// 期限日時（値オブジェクト）
///
/// ストアに保存された文字列をそのまま保持する。表示時にも再フォーマットしない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpirationDate(String);

impl ExpirationDate {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 現在時刻からリマインダー対象となる期限日時を計算する
    ///
    /// `now + 7 日` を秒精度で切り捨てた文字列を返す。
    pub fn reminder_target(now: DateTime<Utc>) -> Self {
        let target = now + Duration::days(REMINDER_LOOKAHEAD_DAYS);
        Self(target.format(EXPIRATION_DATE_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// サブスクリプションレコード
///
/// 属性名はストア側の camelCase に合わせてシリアライズする。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// 送信先メールアドレス
    pub email:           String,
    /// 顧客名（挨拶に使用）
    pub customer_name:   String,
    /// 製品名（本文に使用）
    pub product_name:    String,
    /// 期限日時
    pub expiration_date: ExpirationDate,
    /// 有効フラグ
    pub active:          bool,
}
