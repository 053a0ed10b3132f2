#![allow(dead_code)] // Each demo uses a different subset of these helpers.

use std::env;
use std::process;

use opendrive_fs::{ClientConfig, OpenDriveAdapter, OpenDriveClient};
use tracing_subscriber::{EnvFilter, fmt};

pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{usage}");
    process::exit(1);
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("opendrive_fs=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

pub struct ArgParser {
    args: Vec<String>,
    usage: &'static str,
}

impl ArgParser {
    pub fn new(usage: &'static str) -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{usage}");
            process::exit(0);
        }

        Self { args, usage }
    }

    pub fn take_value(&mut self, names: &[&str]) -> Option<String> {
        let mut i = 0;
        while i < self.args.len() {
            if names.contains(&self.args[i].as_str()) {
                let value = self.args.get(i + 1).cloned();
                if value.is_none() {
                    usage_and_exit(self.usage);
                }
                self.args.drain(i..=i + 1);
                return value;
            }
            i += 1;
        }
        None
    }

    pub fn take_flag(&mut self, names: &[&str]) -> bool {
        match self.args.iter().position(|a| names.contains(&a.as_str())) {
            Some(i) => {
                self.args.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remaining(self) -> Vec<String> {
        self.args
    }
}

pub struct Credentials {
    pub username: String,
    pub password: String,
    pub proxy: Option<String>,
    pub positionals: Vec<String>,
}

pub fn parse_credentials(usage: &'static str) -> Credentials {
    let mut parser = ArgParser::new(usage);
    let mut credentials = credentials_from_parser(&mut parser, usage);
    credentials.positionals = parser.remaining();
    credentials
}

pub fn credentials_from_parser(parser: &mut ArgParser, usage: &'static str) -> Credentials {
    let username = parser
        .take_value(&["--username", "-u"])
        .unwrap_or_else(|| usage_and_exit(usage));
    let password = parser
        .take_value(&["--password", "-p"])
        .unwrap_or_else(|| usage_and_exit(usage));
    let proxy = parser.take_value(&["--proxy"]);

    Credentials {
        username,
        password,
        proxy,
        positionals: Vec::new(),
    }
}

impl Credentials {
    /// Login using `OPENDRIVE_*` environment settings, with `--proxy` on top.
    pub async fn login(&self) -> opendrive_fs::Result<OpenDriveClient> {
        let mut config = ClientConfig::from_env();
        if let Some(proxy) = &self.proxy {
            config = config.with_proxy(proxy.as_str());
        }
        OpenDriveClient::login_with_config(&self.username, &self.password, &config).await
    }

    pub async fn adapter(&self) -> opendrive_fs::Result<OpenDriveAdapter> {
        Ok(OpenDriveAdapter::new(self.login().await?))
    }
}
