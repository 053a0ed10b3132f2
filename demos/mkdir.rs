mod cli;

use cli::{ArgParser, credentials_from_parser, init_tracing, usage_and_exit};
use opendrive_fs::{Config, FilesystemAdapter, Result};

const USAGE: &str = "Usage: cargo run --example mkdir -- --username USER --password PASSWORD [--proxy PROXY] [--public] [--description TEXT] <PATH>";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let creds = credentials_from_parser(&mut parser, USAGE);
    let public = parser.take_flag(&["--public"]);
    let description = parser.take_value(&["--description"]);
    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let target = &positionals[0];

    let mut config = Config::new().with("public", public);
    if let Some(description) = description {
        config.set("description", description);
    }

    println!("Logging in...");
    let adapter = creds.adapter().await?;

    println!("Creating directory: {}", target);
    match adapter.create_dir(target, &config).await {
        Ok(entry) => {
            println!("Directory created successfully!");
            println!("Path: {}", entry.path);
            println!("Id: {}", entry.id);
        }
        Err(e) => {
            eprintln!("Failed to create directory: {}", e);
        }
    }

    Ok(())
}
