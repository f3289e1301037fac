//! # PutPut Client SDK
//!
//! A client SDK for the PutPut file-storage API: presigned uploads, file
//! listing and deletion, webhooks, projects, and account management.
//!
//! ## Features
//!
//! - **No-signup start**: create a guest token and upload immediately
//! - **Direct uploads**: file bytes go straight to storage via presigned URLs,
//!   never through the API servers
//! - **Typed results**: every operation returns typed records or a structured
//!   error carrying the API's status, code, message, and hint
//!
//! ## Example
//!
//! ```rust,ignore
//! use putput_client::{Config, PutPutClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Start as a guest, no signup required
//!     let mut client = PutPutClient::default_production()?;
//!     let guest = client.create_guest_token().await?;
//!     client.set_token(guest.token);
//!
//!     // Upload a file
//!     let file = client
//!         .upload(&b"hello world"[..], "hello.txt", Some("text/plain"), None)
//!         .await?;
//!     println!("uploaded: {:?}", file.url);
//!
//!     // List what we have
//!     let page = client.list_files(None).await?;
//!     println!("{} files", page.files.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod types;
mod upload;

pub use client::PutPutClient;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use types::*;
