//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, API_URL_ENV, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    if std::env::var(API_URL_ENV).is_ok() {
        ctx.output.kv("override", API_URL_ENV);
    }

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output.kv("timeout_ms", &ctx.config.api.timeout_ms.to_string());
    ctx.output.kv("user_agent", &ctx.config.api.user_agent);

    let paging = &ctx.config.paging;
    ctx.output.info("[paging]");
    ctx.output.kv("deals_page_size", &paging.deals_page_size.to_string());
    ctx.output.kv("deals_limit", &paging.deals_limit.to_string());
    ctx.output.kv("products_page_size", &paging.products_page_size.to_string());
    ctx.output.kv("stores_page_size", &paging.stores_page_size.to_string());
    ctx.output.kv("home_deals_limit", &paging.home_deals_limit.to_string());

    let directory = ctx.config.directory();
    ctx.output.info("[stores]");
    ctx.output.kv("default", directory.default_store().as_str());
    for store in directory.stores() {
        ctx.output.list_item(store.as_str());
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.validate();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
