//! Example: List files in an OpenDrive account
//!
//! Usage:
//!   cargo run --example ls -- --username USER --password PASSWORD [--recursive] [PATH]

mod cli;

use cli::{ArgParser, credentials_from_parser, init_tracing, usage_and_exit};
use opendrive_fs::{FilesystemAdapter, Result};

const USAGE: &str = "Usage: cargo run --example ls -- --username USER --password PASSWORD [--proxy PROXY] [--recursive] [PATH]";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let creds = credentials_from_parser(&mut parser, USAGE);
    let recursive = parser.take_flag(&["--recursive", "-r"]);
    let positionals = parser.remaining();
    if positionals.len() > 1 {
        usage_and_exit(USAGE);
    }
    let path = positionals.first().cloned().unwrap_or_default();

    println!("Logging in...");
    let adapter = creds.adapter().await?;

    println!("\nListing: /{}\n", path);
    let entries = adapter.list_contents(&path, recursive).await?;
    if entries.is_empty() {
        println!("  (empty)");
    }
    for entry in entries {
        let (type_icon, size_str) = match entry.size {
            Some(size) => ("📄", format_size(size)),
            None => ("📁", String::new()),
        };
        println!("  {} {} {}", type_icon, entry.path, size_str);
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}B", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.1}KB", bytes as f64 / 1024.0)
    } else if bytes < 1_073_741_824 {
        format!("{:.1}MB", bytes as f64 / 1_048_576.0)
    } else {
        format!("{:.2}GB", bytes as f64 / 1_073_741_824.0)
    }
}
