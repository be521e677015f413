//! # 注文確認メール送信
//!
//! 標準入力からイベント JSON を 1 件読み、処理結果のレスポンスを標準出力に書き出す。
//! 入力が空ならイベントなしとして扱う。

use std::{io::Read as _, sync::Arc};

use anyhow::Context as _;
use subnotify_infra::{dynamodb, repository::DynamoDbOrderRepository};
use subnotify_order_confirmation::{
    config::OrderConfirmationConfig,
    handler::{self, InvocationContext},
    usecase::{OrderConfirmation, TemplateRenderer},
};
use subnotify_shared::observability::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("order-confirmation");
    init_tracing(&tracing_config);
    let _root_span = tracing_config.root_span().entered();

    let config = OrderConfirmationConfig::from_env().context("設定の読み込みに失敗しました")?;
    tracing::info!(
        table = %config.table_name,
        local = config.store.is_local(),
        backend = %config.notification.backend,
        "注文確認ハンドラを起動します"
    );

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("イベントの読み込みに失敗しました")?;
    let event = if input.trim().is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(&input).context("イベントが JSON ではありません")?
    };

    let client = dynamodb::create_client(&config.store).await;
    let usecase = OrderConfirmation::new(
        Arc::new(DynamoDbOrderRepository::new(client, config.table_name.clone())),
        config.notification.build_sender().await,
        TemplateRenderer::new().context("テンプレートの読み込みに失敗しました")?,
    );

    let response = handler::run(&usecase, event, InvocationContext::default()).await;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
