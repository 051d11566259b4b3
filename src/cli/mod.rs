use anyhow::{Result, anyhow};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::config::Config;
use crate::jobs::schedule::register_scheduled_jobs;
use crate::lifecycle::LifecycleManager;
use crate::logging;
use crate::store::Storage;
use crate::web::ApiServer;

const USAGE: &str = "pottikadai - storefront commerce core

USAGE:
    pottikadai serve [--config <path>] [--api-host <host>] [--api-port <port>] [--data-dir <dir>]
    pottikadai help";

pub async fn run_main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None | Some("serve") => serve(&args).await,
        Some("help") | Some("--help") | Some("-h") => {
            println!("{USAGE}");
            Ok(())
        }
        Some(other) => Err(anyhow!("unknown command '{}'\n\n{}", other, USAGE)),
    }
}

async fn serve(args: &[String]) -> Result<()> {
    logging::init();

    let mut config_path: Option<PathBuf> = None;
    let mut api_host: Option<String> = None;
    let mut api_port: Option<u16> = None;
    let mut data_dir: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    i += 1;
                }
            }
            "--api-host" => {
                if i + 1 < args.len() {
                    api_host = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    i += 1;
                }
            }
            "--api-port" => {
                if i + 1 < args.len() {
                    api_port = args[i + 1].parse().ok();
                    i += 2;
                } else {
                    i += 1;
                }
            }
            "--data-dir" => {
                if i + 1 < args.len() {
                    data_dir = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }

    let mut config = Config::load(config_path.as_deref())?;
    if let Some(host) = api_host {
        config.api_host = host;
    }
    if let Some(port) = api_port {
        config.api_port = port;
    }
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    let config = Arc::new(config);

    info!("Starting pottikadai commerce core...");
    let storage = Arc::new(Storage::new(&config.data_dir).await?);

    let mut lifecycle = LifecycleManager::new().await?;
    lifecycle.attach(Arc::new(Mutex::new(ApiServer::new(
        storage.clone(),
        config.clone(),
    ))));
    register_scheduled_jobs(&lifecycle.scheduler, storage.clone(), config.clone()).await?;

    lifecycle.start().await?;

    tokio::signal::ctrl_c().await?;
    lifecycle.shutdown().await?;
    Ok(())
}
