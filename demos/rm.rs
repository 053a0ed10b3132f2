mod cli;

use cli::{init_tracing, parse_credentials, usage_and_exit};
use opendrive_fs::{FilesystemAdapter, OpenDriveError, Result};

const USAGE: &str = "Usage: cargo run --example rm -- --username USER --password PASSWORD [--proxy PROXY] <PATH>";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let creds = parse_credentials(USAGE);
    if creds.positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let target = creds.positionals[0].clone();

    println!("Logging in...");
    let adapter = creds.adapter().await?;

    let entry = adapter.get_metadata(&target).await?;
    println!("Removing: {}", target);
    let result = if entry.is_dir() {
        adapter.delete_dir(&target).await
    } else {
        adapter.delete(&target).await
    };

    match result {
        Ok(()) => {
            println!("Removed successfully!");
        }
        Err(OpenDriveError::PurgeFailed { item, source }) => {
            eprintln!("Moved to trash, purge failed: {}", source);
            println!("Retrying purge...");
            adapter.client().purge(&item).await?;
            println!("Removed successfully!");
        }
        Err(e) => {
            eprintln!("Failed to remove: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
