//! Basic usage example for the PutPut file-storage API
//!
//! This example demonstrates:
//! - Creating a guest token (no signup)
//! - Uploading a file via the presigned flow
//! - Listing files
//! - Fetching a download URL and file stats
//! - Deleting a file
//!
//! Run with: cargo run --example basic_usage

use putput_client::{Config, ListFilesOptions, PutPutClient, UploadOptions, Visibility};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("🚀 PutPut - Basic Usage Example\n");

    // Point PUTPUT_BASE_URL at a local server for dev; defaults to production.
    let base_url =
        std::env::var("PUTPUT_BASE_URL").unwrap_or_else(|_| "https://putput.io".to_string());
    let mut client = PutPutClient::new(Config::new(base_url))?;

    // ==================== Guest Account ====================

    println!("🔑 Creating a guest token...");
    let guest = client.create_guest_token().await?;
    println!("   ✅ claim your account at: {}", guest.claim_url);
    println!(
        "   limits: {} bytes storage, {} bytes per file, {} files",
        guest.limits.storage_bytes, guest.limits.max_file_size_bytes, guest.limits.max_files
    );
    client.set_token(guest.token);

    // ==================== Upload ====================

    println!("\n📤 Uploading 'hello.txt'...");
    let uploaded = client
        .upload(
            &b"Hello from the PutPut Rust SDK!"[..],
            "hello.txt",
            Some("text/plain"),
            Some(
                UploadOptions::new()
                    .with_visibility(Visibility::Public)
                    .with_tag("demo")
                    .with_metadata("source", "basic_usage"),
            ),
        )
        .await?;
    println!("   ✅ id: {}", uploaded.id);
    if let Some(url) = &uploaded.url {
        println!("   ✅ url: {url}");
    }

    // ==================== Listing ====================

    println!("\n📋 Listing files tagged 'demo'...");
    let page = client
        .list_files(Some(ListFilesOptions {
            tag: Some("demo".to_string()),
            ..Default::default()
        }))
        .await?;
    for file in &page.files {
        println!("   - {} ({} bytes)", file.original_name, file.size_bytes);
    }
    if page.has_more {
        println!("   (more pages available)");
    }

    // ==================== Download & Stats ====================

    println!("\n📥 Fetching a download URL...");
    let download = client.download_file(uploaded.id).await?;
    println!("   {}", download.download_url);

    println!("\n📊 File stats...");
    let stats = client.file_stats(uploaded.id).await?;
    println!("   downloaded {} times", stats.download_count);

    // ==================== Cleanup ====================

    println!("\n🗑️  Deleting the file...");
    client.delete_file(uploaded.id).await?;
    println!("   ✅ deleted");

    Ok(())
}
