use std::env;
use std::sync::Arc;

use stagegate_core::impls::JsonFileStore;
use stagegate_core::{
    DashboardBuilder, DashboardConfig, PipelineStage, Role, TaskDetailPatch, TaskId, User,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_STATE_DIR: &str = ".stagegate";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stagegate_core=info,stagegate_cli=info")),
        )
        .init();

    // (A) 設定と永続化先（<dir>/<key>.json）
    let config = match env::var("STAGEGATE_CONFIG") {
        Ok(path) => DashboardConfig::load(path)?,
        Err(_) => DashboardConfig::default(),
    };
    let state_dir = env::var("STAGEGATE_STATE_DIR").unwrap_or_else(|_| DEFAULT_STATE_DIR.to_string());
    let store = Arc::new(JsonFileStore::new(&state_dir));

    let mut dashboard = DashboardBuilder::new(store).with_config(config).build().await?;
    tracing::info!(state_dir = %state_dir, "dashboard ready");

    // (B) alpha-sales のユーザーとして操作
    let user = User::new(Role::AlphaSales);
    let row = Role::AlphaSales;

    let blocked = dashboard.set_task_completed(Some(&user), TaskId::new(2), row, true).await;
    tracing::info!(
        denial = ?blocked.denial(),
        waiting_for = ?dashboard.blocking_prerequisites(TaskId::new(2), row),
        "complete task 2 first"
    );

    // (C) タスク 1 を開いて保存・完了 → タスク 2 が開く
    if let Some(mut session) = dashboard.open_task(Some(&user), TaskId::new(1), row).await.applied() {
        session.set_notes("primer contacto realizado");
        session.set_completed(true);
        let saved = dashboard.commit_session(Some(&user), &session).await?;
        tracing::info!(applied = saved.is_applied(), "save task 1");
    }
    let result = dashboard.set_task_completed(Some(&user), TaskId::new(2), row, true).await;
    tracing::info!(applied = result.is_applied(), "complete task 2 after task 1");

    dashboard
        .save_task(TaskId::new(2), TaskDetailPatch::notes("calificación completada"))
        .await?;

    // (D) 結果
    let count = dashboard.task_count(row, PipelineStage::Acquisition);
    println!(
        "{} / {}: {}/{} ({}%)",
        row.label(),
        PipelineStage::Acquisition.label(),
        count.completed,
        count.total,
        count.percentage().unwrap_or(0)
    );
    for stage in dashboard.sales_stages() {
        let marker = if stage.current {
            ">"
        } else if stage.completed {
            "x"
        } else {
            " "
        };
        println!("  [{marker}] {} {}", stage.id, stage.name);
    }

    println!("{}", serde_json::to_string_pretty(&dashboard.status(Some(&user)))?);
    Ok(())
}
