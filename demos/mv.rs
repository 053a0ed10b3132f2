//! Example: Move or rename a file
//!
//! Usage:
//!   cargo run --example mv -- --username USER --password PASSWORD <SOURCE> <DEST>

mod cli;

use cli::{init_tracing, parse_credentials, usage_and_exit};
use opendrive_fs::{FilesystemAdapter, Result};

const USAGE: &str = "Usage: cargo run --example mv -- --username USER --password PASSWORD [--proxy PROXY] <SOURCE> <DEST>";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let creds = parse_credentials(USAGE);
    let [source, dest] = creds.positionals.as_slice() else {
        usage_and_exit(USAGE);
    };

    println!("Logging in...");
    let adapter = creds.adapter().await?;

    println!("Moving {} to {}...", source, dest);
    adapter.rename(source, dest).await?;

    println!("Move complete!");

    Ok(())
}
