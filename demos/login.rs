//! Example: Login to an OpenDrive account
//!
//! Usage:
//!   cargo run --example login -- --username USER --password PASSWORD [--proxy PROXY]

mod cli;

use cli::{init_tracing, parse_credentials, usage_and_exit};

const USAGE: &str =
    "Usage: cargo run --example login -- --username USER --password PASSWORD [--proxy PROXY]";

#[tokio::main]
async fn main() {
    init_tracing();
    let creds = parse_credentials(USAGE);
    if !creds.positionals.is_empty() {
        usage_and_exit(USAGE);
    }

    println!("Logging in as: {}", creds.username);
    println!();

    match creds.login().await {
        Ok(client) => {
            let session = client.session();
            println!("Login successful!");
            println!();
            println!("User: {}", session.username());
            println!("API: {}", client.api().base_url());
            let id = session.id();
            println!("Session ID: {}...", &id[..id.len().min(8)]);
        }
        Err(e) => {
            eprintln!("Login failed: {}", e);
            std::process::exit(1);
        }
    }
}
