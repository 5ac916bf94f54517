//! Nginxsmith - programmatic nginx configuration generator
//!
//! This is the main entry point for the nginxsmith CLI.

use clap::{Parser, Subcommand};
use nginxsmith_core::{Document, adapter::JsonAdapter, document};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Nginxsmith - build nginx configuration files programmatically
#[derive(Parser)]
#[command(name = "nginxsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in sample configuration
    Sample {
        /// Write the rendered config to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Emit the document tree as JSON instead of nginx syntax
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Sample { output, json } => {
            let conf = sample_document();

            let text = if json {
                JsonAdapter::serialize(&conf)?
            } else {
                conf.to_text()
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    tracing::info!("Wrote configuration to {}", path.display());
                    println!("✅ Wrote configuration to {}", path.display());
                }
                None => println!("{text}"),
            }
        }

        Commands::Version => {
            println!("Nginxsmith v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Sample config serving two hosts: one static site and one reverse
/// proxy forwarding to a local service on port 3000.
fn sample_document() -> Document {
    let mut conf = document();
    conf.directive("user", "www-data")
        .directive("worker_processes", "4")
        .directive("pid", "/run/nginx.pid")
        .clause("events", |events| {
            events.directive("worker_connections", 768);
        })
        .clause("http", |http| {
            http.directive("sendfile", "on")
                .directive("tcp_nopush", "on")
                .directive("tcp_nodelay", "on")
                .directive("keepalive_timeout", 65)
                .directive("types_hash_max_size", 2048)
                .directive("include", "/etc/nginx/mime.types")
                .directive("default_type", "application/octet-stream")
                .directive("access_log", "/var/log/nginx/access.log")
                .directive("error_log", "/var/log/nginx/error.log")
                .directive("gzip", "on")
                .directive("gzip_disable", "msie6")
                .clause("server", |server| {
                    server
                        .directive("listen", 80)
                        .directive("server_name", "example.com")
                        .directive("client_max_body_size", "50M")
                        .directive("root", "/var/www/example.com")
                        .location("/", |loc| {
                            loc.directive("index", "index.html");
                        });
                })
                .clause("server", |server| {
                    server
                        .directive("listen", 80)
                        .directive("server_name", "api.example.com")
                        .directive("client_max_body_size", "50M")
                        .location("/", |loc| {
                            loc.directive("proxy_pass", "http://127.0.0.1:3000")
                                .directive("proxy_http_version", "1.1")
                                .directive("proxy_set_header", "Upgrade $http_upgrade")
                                .directive("proxy_set_header", "Connection 'upgrade'")
                                .directive("proxy_set_header", "X-Forwarded-For $remote_addr");
                        })
                        .location("/objects", |loc| {
                            loc.directive("proxy_pass", "http://127.0.0.1:3000")
                                .directive("proxy_http_version", "1.1");
                        });
                });
        });
    conf
}
