mod app;
mod commands;
mod config;
mod effects;
mod persistence;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;
use nexora_engine::{ensure_data_dir, ReqwestApi};
use nexora_logging::{nexora_info, nexora_warn, LogDestination};

use crate::Cli;
use app::App;
use config::{AppConfig, ConfigOverrides};
use effects::EffectRunner;
use persistence::Storage;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .global
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);
    let loaded = AppConfig::load(&config_path);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    }
    .apply(ConfigOverrides {
        api_url: cli.global.api_url.clone(),
        data_dir: cli.global.data_dir.clone(),
        catalog_path: cli.global.catalog.clone(),
    });

    ensure_data_dir(&config.data_dir)
        .with_context(|| format!("cannot use data directory {:?}", config.data_dir))?;
    let destination =
        LogDestination::from_name(&config.log_destination).unwrap_or(LogDestination::File);
    let level = if cli.global.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    nexora_logging::initialize(destination, level, &config.data_dir);
    if let Err(err) = loaded {
        nexora_warn!("{}; using defaults", err);
    }
    nexora_info!("nexora {} starting, api {}", env!("CARGO_PKG_VERSION"), config.api_url);

    let storage = Storage::open(&config.data_dir)?;
    let api = ReqwestApi::new(&config.api_settings(), storage.tokens())
        .with_context(|| format!("invalid api_url {:?}", config.api_url))?;
    let runner = EffectRunner::new(Arc::new(api), storage)?;
    let mut app = App::new(runner);
    app.restore();

    let settle_limit =
        Duration::from_secs(2 * (config.connect_timeout_secs + config.request_timeout_secs) + 1);
    commands::execute(&mut app, &config, settle_limit, cli.command)
}
