//! # 時刻の注入
//!
//! リマインダー対象日時は「実行時刻 + 7 日」の秒精度の文字列一致で決まるため、
//! 実行時刻は必ず [`Clock`] 経由で受け取る。本番は [`SystemClock`]、テストは
//! [`FixedClock`] で秒まで固定する。

use chrono::{DateTime, TimeZone, Utc};

/// ジョブの実行時刻（UTC）を返す
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// OS の時計
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 常に同じ時刻を返す時計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    /// UTC の年月日時分秒から作る（存在しない日時なら `None`）
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
