//! # ジョブのトレーシング設定
//!
//! 各ジョブバイナリは起動直後に [`init_tracing`] を呼び、[`TracingConfig::root_span`] に
//! 入ってから処理を始める。JSON 出力では全行にジョブ名（`span.job`）が付く。
//!
//! | 変数名 | 既定値 | 説明 |
//! |--------|--------|------|
//! | `LOG_FORMAT` | `pretty` | `json` / `pretty`（大文字小文字は区別しない） |
//! | `RUST_LOG` | `info,subnotify=debug` | `EnvFilter` の書式 |

use std::str::FromStr;

use strum::{Display, EnumString};

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// 1 行 1 JSON（スケジューラ側のログ収集向け）
    Json,
    /// ローカル実行向け
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する
    ///
    /// 未設定なら既定値。解釈できない値は stderr に警告を出して既定値に倒す
    /// （トレーシング初期化前なので `tracing` は使えない）。
    pub fn from_value(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        Self::from_str(value.trim()).unwrap_or_else(|_| {
            eprintln!("WARNING: LOG_FORMAT={value:?} は解釈できないため pretty で出力します");
            Self::default()
        })
    }

    pub fn from_env() -> Self {
        Self::from_value(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// ジョブ名（ルートスパンの `job` フィールド）
    pub job_name:   String,
    pub log_format: LogFormat,
}

impl TracingConfig {
    pub fn new(job_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            job_name: job_name.into(),
            log_format,
        }
    }

    pub fn from_env(job_name: impl Into<String>) -> Self {
        Self::new(job_name, LogFormat::from_env())
    }

    /// ジョブ 1 回分のルートスパン
    #[cfg(feature = "observability")]
    pub fn root_span(&self) -> tracing::Span {
        tracing::info_span!("job", job = %self.job_name)
    }
}

/// グローバル subscriber を登録する
///
/// `ErrorLayer` も登録するので、`InfraError` の SpanTrace にスパン情報が残る。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,subnotify=debug".into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}
