//! Capture replay example
//!
//! Polls one ONU against a directory of saved CLI captures instead of a live
//! OLT, then prints the snapshot as JSON. Each capture file is named after
//! the command it answers with spaces, `/` and `:` replaced by `_`, e.g.
//! `show_epon_onu-information_interface_EPON0_8_15.txt`. Missing captures
//! answer empty, the same as an offline ONU.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example parse_capture -- --dir captures/ --vendor bdcom --port 0/8 --onu 15
//! ```

use std::env;
use std::fs;
use std::path::PathBuf;

use oltscope::session::{OnuPoller, Session};
use oltscope::{ParserConfig, VendorRegistry};

/// Session that answers from capture files.
struct ReplaySession {
    dir: PathBuf,
}

impl ReplaySession {
    fn capture_path(&self, command: &str) -> PathBuf {
        let name: String = command
            .chars()
            .map(|c| if matches!(c, ' ' | '/' | ':') { '_' } else { c })
            .collect();
        self.dir.join(format!("{name}.txt"))
    }
}

impl Session for ReplaySession {
    async fn execute(&mut self, commands: &[String]) -> oltscope::Result<Vec<String>> {
        Ok(commands
            .iter()
            .map(|command| {
                let path = self.capture_path(command);
                log::debug!("replaying {}", path.display());
                fs::read_to_string(path).unwrap_or_default()
            })
            .collect())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let registry = VendorRegistry::builder()
        .builtin_vendors()
        .config(ParserConfig::new().with_raw_snippet_limit(args.snippet))
        .build()?;
    let poller = OnuPoller::new(&registry, &args.vendor)?;
    println!(
        "=== oltscope capture replay ({}, capabilities: {:?}) ===\n",
        poller.vendor().name(),
        poller.vendor().capabilities()
    );

    let mut session = ReplaySession { dir: args.dir };
    let snapshot = poller
        .poll_snapshot(&mut session, &args.port, &args.onu)
        .await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

struct Args {
    dir: PathBuf,
    vendor: String,
    port: String,
    onu: String,
    snippet: usize,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut dir = PathBuf::from(".");
        let mut vendor = "auto".to_string();
        let mut port = "0/1".to_string();
        let mut onu = "1".to_string();
        let mut snippet = 500usize;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--dir" | "-d" => {
                    i += 1;
                    if i < args.len() {
                        dir = PathBuf::from(&args[i]);
                    }
                }
                "--vendor" | "-v" => {
                    i += 1;
                    if i < args.len() {
                        vendor = args[i].clone();
                    }
                }
                "--port" | "-p" => {
                    i += 1;
                    if i < args.len() {
                        port = args[i].clone();
                    }
                }
                "--onu" | "-o" => {
                    i += 1;
                    if i < args.len() {
                        onu = args[i].clone();
                    }
                }
                "--snippet" => {
                    i += 1;
                    if i < args.len() {
                        snippet = args[i].parse().unwrap_or(500);
                    }
                }
                "--help" => {
                    Self::print_help();
                    std::process::exit(0);
                }
                _ => {}
            }
            i += 1;
        }

        Self {
            dir,
            vendor,
            port,
            onu,
            snippet,
        }
    }

    fn print_help() {
        println!("Usage: parse_capture [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --dir <DIR>        Capture directory (default: .)");
        println!("  -v, --vendor <KEY>     Vendor key or 'auto' (default: auto)");
        println!("  -p, --port <PORT>      PON port (default: 0/1)");
        println!("  -o, --onu <ID>         ONU id (default: 1)");
        println!("      --snippet <N>      Raw snippet limit (default: 500)");
        println!("      --help             Print help");
    }
}
