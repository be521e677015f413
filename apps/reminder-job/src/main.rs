//! # サブスクリプションリマインダー
//!
//! スケジューラから起動され、ジョブを 1 回実行してレスポンスを標準出力に書き出す。
//! 失敗時は非ゼロで終了する。

use std::sync::Arc;

use anyhow::Context as _;
use subnotify_domain::clock::SystemClock;
use subnotify_infra::{dynamodb, repository::DynamoDbSubscriptionRepository};
use subnotify_reminder_job::{
    config::ReminderConfig,
    handler::{self, InvocationContext, ReminderJob},
    usecase::{ReminderDispatcher, SubscriptionQuery, TemplateRenderer},
};
use subnotify_shared::observability::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("subscription-reminder");
    init_tracing(&tracing_config);
    let _root_span = tracing_config.root_span().entered();

    let config = ReminderConfig::from_env().context("設定の読み込みに失敗しました")?;
    tracing::info!(
        table = %config.table_name,
        local = config.store.is_local(),
        backend = %config.notification.backend,
        "リマインダージョブを起動します"
    );

    let client = dynamodb::create_client(&config.store).await;
    let repository = DynamoDbSubscriptionRepository::new(client, config.table_name.clone());

    let job = ReminderJob::new(
        SubscriptionQuery::new(Arc::new(repository), Arc::new(SystemClock)),
        ReminderDispatcher::new(
            config.notification.build_sender().await,
            TemplateRenderer::new().context("テンプレートの読み込みに失敗しました")?,
        ),
    );

    let response = handler::run(&job, serde_json::Value::Null, InvocationContext::default())
        .await
        .context("リマインダージョブが失敗しました")?;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
