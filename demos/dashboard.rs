//! Dashboard management example: webhooks, projects, activity, account export.
//!
//! Run with: PUTPUT_TOKEN=pp_... cargo run --example dashboard

use putput_client::{ActivityOptions, Config, PutPutClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let token = std::env::var("PUTPUT_TOKEN")
        .map_err(|_| anyhow::anyhow!("set PUTPUT_TOKEN to an API token"))?;
    let base_url =
        std::env::var("PUTPUT_BASE_URL").unwrap_or_else(|_| "https://putput.io".to_string());
    let client = PutPutClient::new(Config::new(base_url).with_token(token))?;

    // ==================== Webhooks ====================

    println!("🔔 Webhooks");
    let webhook = client
        .create_webhook(
            "https://example.com/hooks/putput",
            Some(vec!["upload".to_string(), "delete".to_string()]),
        )
        .await?;
    println!("   created {} for {:?}", webhook.id, webhook.events);
    for hook in client.list_webhooks().await? {
        println!("   - {} (active: {})", hook.url, hook.active);
    }
    client.delete_webhook(webhook.id).await?;
    println!("   cleaned up\n");

    // ==================== Projects ====================

    println!("📁 Projects");
    let project = client.create_project("Marketing Assets").await?;
    println!("   created '{}' ({})", project.name, project.id);
    for p in client.list_projects().await? {
        println!("   - {}", p.name);
    }
    client.delete_project(project.id).await?;
    println!("   cleaned up\n");

    // ==================== Activity ====================

    println!("🕒 Recent activity");
    let page = client
        .get_activity(Some(ActivityOptions {
            limit: Some(10),
            ..Default::default()
        }))
        .await?;
    for entry in &page.activity {
        println!("   {} {} {:?}", entry.created_at, entry.action, entry.resource_id);
    }
    if page.has_more {
        println!("   (more available, cursor: {:?})", page.cursor);
    }

    // ==================== Export ====================

    println!("\n📦 Account export");
    let export = client.export_data().await?;
    println!("   profile: {}", serde_json::to_string_pretty(&export.user)?);
    println!("   {} tokens, {} files", export.tokens.len(), export.files.len());

    Ok(())
}
