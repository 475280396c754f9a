// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mazeway CLI entrypoint.
//!
//! By default this serves the maze HTTP API at `http://127.0.0.1:<port>/maze` with MCP over
//! streamable HTTP nested at `/mcp`.
//!
//! Use `--mcp` to run the MCP server over stdio instead (intended for tool integrations).

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use mazeway::mcp::MazewayMcp;
use mazeway::service::{GridLimits, MazeService, ServiceConfig};
use mazeway::store::{MazeCatalog, MazeFolder, WriteDurability};
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_HTTP_PORT: u16 = 27436;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<store-dir>] [--durable-writes] [--http-port <port>] [limits]\n  {program} [--store <dir>] [--durable-writes] [--http-port <port>] [limits]\n  {program} --memory [--http-port <port>] [limits]\n  {program} [<store-dir> | --store <dir> | --memory] --mcp [limits]\n\nlimits: [--cache-ttl-secs <secs>] [--max-rows <n>] [--max-cols <n>]\n\nHTTP mode (default) serves the maze API at `http://127.0.0.1:<port>/maze` and MCP over\nstreamable HTTP at `http://127.0.0.1:<port>/mcp`.\n--http-port selects the port (0 = ephemeral; default {DEFAULT_HTTP_PORT}).\n\nIf store-dir/--store is omitted, the current working directory is used.\n--memory keeps mazes in memory only and cannot be combined with store-dir/--store.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\n\nLogs go to stderr; set RUST_LOG to adjust the filter (default `info`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    mcp: bool,
    memory: bool,
    store_dir: Option<String>,
    http_port: Option<u16>,
    durable_writes: bool,
    cache_ttl_secs: Option<u64>,
    max_rows: Option<usize>,
    max_cols: Option<usize>,
}

impl CliOptions {
    fn service_config(&self) -> ServiceConfig {
        let defaults = ServiceConfig::default();
        ServiceConfig {
            cache_ttl: self.cache_ttl_secs.map_or(defaults.cache_ttl, Duration::from_secs),
            limits: GridLimits {
                max_rows: self.max_rows.unwrap_or(defaults.limits.max_rows),
                max_cols: self.max_cols.unwrap_or(defaults.limits.max_cols),
            },
        }
    }
}

fn parse_positive(raw: Option<String>) -> Result<usize, ()> {
    let value: usize = raw.ok_or(())?.parse().map_err(|_| ())?;
    if value == 0 {
        return Err(());
    }
    Ok(value)
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mcp" => {
                if options.mcp {
                    return Err(());
                }
                options.mcp = true;
            }
            "--memory" => {
                if options.memory {
                    return Err(());
                }
                options.memory = true;
            }
            "--store" => {
                if options.store_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.store_dir = Some(dir);
            }
            "--http-port" => {
                if options.http_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.http_port = Some(port);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--cache-ttl-secs" => {
                if options.cache_ttl_secs.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.cache_ttl_secs = Some(raw.parse().map_err(|_| ())?);
            }
            "--max-rows" => {
                if options.max_rows.is_some() {
                    return Err(());
                }
                options.max_rows = Some(parse_positive(args.next())?);
            }
            "--max-cols" => {
                if options.max_cols.is_some() {
                    return Err(());
                }
                options.max_cols = Some(parse_positive(args.next())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.store_dir.is_some() {
                    return Err(());
                }
                options.store_dir = Some(arg);
            }
        }
    }

    if options.memory && (options.store_dir.is_some() || options.durable_writes) {
        return Err(());
    }

    if options.mcp && options.http_port.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn open_service(options: &CliOptions) -> Result<MazeService, Box<dyn Error>> {
    let config = options.service_config();
    if options.memory {
        tracing::info!("serving mazes from memory only");
        return Ok(MazeService::new(MazeCatalog::new(), config));
    }

    let dir = options.store_dir.clone().unwrap_or_else(|| ".".to_owned());
    let folder = if options.durable_writes {
        MazeFolder::new(dir).with_durability(WriteDurability::Durable)
    } else {
        MazeFolder::new(dir)
    };
    Ok(MazeService::open(folder, config)?)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "mazeway".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();
        let service = open_service(&options)?;
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        if options.mcp {
            runtime.block_on(MazewayMcp::new(service).serve_stdio())?;
            return Ok(());
        }

        let http_port = options.http_port.unwrap_or(DEFAULT_HTTP_PORT);
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", http_port)).await?;

            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..StreamableHttpServerConfig::default()
            };
            let shutdown_token = config.cancellation_token.clone();

            let session_manager = Arc::new(LocalSessionManager::default());
            let mcp_service = {
                let mcp = MazewayMcp::new(service.clone());
                StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config)
            };

            let purge_cache = service.cache().clone();
            let purge_every = service.config().cache_ttl.max(Duration::from_secs(1));
            let purge_handle = tokio::spawn(async move {
                let mut ticker = tokio::time::interval(purge_every);
                loop {
                    ticker.tick().await;
                    let cached = purge_cache.purge_expired();
                    tracing::debug!(cached, "grid cache purged");
                }
            });

            let router = mazeway::http::router(service).nest_service("/mcp", mcp_service);
            tracing::info!(addr = %listener.local_addr()?, "serving maze API and MCP");

            let server_shutdown = shutdown_token.clone();
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    tokio::select! {
                        _ = tokio::signal::ctrl_c() => {
                            tracing::info!("shutdown requested");
                            server_shutdown.cancel();
                        }
                        _ = server_shutdown.cancelled() => {}
                    }
                })
                .await?;

            purge_handle.abort();
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("mazeway: {err}");
        std::process::exit(1);
    }
}
