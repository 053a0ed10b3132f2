//! Example: Get information about a file or folder
//!
//! Usage:
//!   cargo run --example stat -- --username USER --password PASSWORD <PATH>

mod cli;

use cli::{init_tracing, parse_credentials, usage_and_exit};
use opendrive_fs::{FilesystemAdapter, OpenDriveError};
use std::process;

const USAGE: &str = "Usage: cargo run --example stat -- --username USER --password PASSWORD [--proxy PROXY] <PATH>";

#[tokio::main]
async fn main() {
    init_tracing();
    let creds = parse_credentials(USAGE);
    if creds.positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let path = &creds.positionals[0];

    println!("Logging in...");
    let adapter = match creds.adapter().await {
        Ok(adapter) => adapter,
        Err(e) => {
            eprintln!("Login failed: {}", e);
            process::exit(1);
        }
    };

    println!("Getting info for: {}", path);
    match adapter.get_metadata(path).await {
        Ok(entry) => {
            println!("\n🔍 Entry Information:");
            println!("  Path:      /{}", entry.path);
            println!("  Type:      {:?}", entry.entry_type);
            if let Some(size) = entry.size {
                println!("  Size:      {}", format_size(size));
            }
            if let Some(mimetype) = &entry.mimetype {
                println!("  Mimetype:  {}", mimetype);
            }
            println!("  Id:        {}", entry.id);
            println!("  Timestamp: {}", entry.timestamp);
        }
        Err(OpenDriveError::NotFound { path }) => {
            eprintln!("❌ Not found: {}", path);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Failed: {}", e);
            process::exit(1);
        }
    }
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else if bytes < 1_073_741_824 {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    } else {
        format!("{:.2} GB", bytes as f64 / 1_073_741_824.0)
    }
}
