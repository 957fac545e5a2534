//! CLI command implementations.

pub mod config;
pub mod deals;
pub mod home;
pub mod open;
pub mod products;
pub mod stores;

use clap::{Args, Subcommand};
use grocer_views::PageSnapshot;

use crate::context::Context;
use crate::output::page_caption;

/// Arguments for the home command.
#[derive(Args)]
pub struct HomeArgs {
    /// Search from the home page and show the results.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the deals command.
#[derive(Args)]
pub struct DealsArgs {
    /// Page to show (1-based).
    #[arg(short, long, default_value = "1")]
    pub page: usize,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Free-text search; takes precedence over filters.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category filter.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum price.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Store filter (repeatable).
    #[arg(long = "store")]
    pub stores: Vec<String>,

    /// Only in-stock products.
    #[arg(long)]
    pub in_stock: bool,

    /// Only products on sale.
    #[arg(long)]
    pub sale_only: bool,

    /// Page to show (1-based).
    #[arg(short, long, default_value = "1")]
    pub page: usize,
}

/// Arguments for the stores command.
#[derive(Args)]
pub struct StoresArgs {
    /// Store to browse. Lists stores when omitted.
    pub store: Option<String>,

    /// Page to show (1-based).
    #[arg(short, long, default_value = "1")]
    pub page: usize,
}

/// Arguments for the open command.
#[derive(Args)]
pub struct OpenArgs {
    /// Route path, e.g. `/search?query=milk` or `/stores?store=Metro`.
    pub route: String,

    /// Page to show (1-based).
    #[arg(short, long, default_value = "1")]
    pub page: usize,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Advance with `next` until `page` (1-based) is reached or `next` refuses.
///
/// Returns the 1-based page actually reached.
pub fn walk_to(page: usize, mut next: impl FnMut() -> bool) -> usize {
    let mut reached = 1;
    while reached < page && next() {
        reached += 1;
    }
    reached
}

/// Print a page of products, or the empty-state message.
pub fn render_page(ctx: &Context, title: &str, snapshot: &PageSnapshot, empty: &str) {
    if ctx.output.is_json() {
        ctx.output.json(snapshot);
        return;
    }

    ctx.output.header(title);
    if snapshot.items.is_empty() {
        ctx.output.info(empty);
    } else {
        ctx.output.products(&snapshot.items);
    }

    match (snapshot.total_pages, snapshot.total) {
        (Some(total_pages), Some(total)) if total > 0 => {
            ctx.output.info(&page_caption(
                snapshot.page,
                total_pages,
                snapshot.items.len(),
                total,
            ));
        }
        (None, None) => ctx.output.info(&format!("Page {}", snapshot.page)),
        _ => {}
    }

    let mut hints = Vec::new();
    if snapshot.has_prev {
        hints.push(format!("--page {} for previous", snapshot.page - 1));
    }
    if snapshot.has_next {
        hints.push(format!("--page {} for next", snapshot.page + 1));
    }
    if !hints.is_empty() {
        ctx.output.kv("more", &hints.join(", "));
    }
}

/// Warn when `--page` asked for more pages than exist.
pub fn note_short_walk(ctx: &Context, requested: usize, reached: usize) {
    if reached < requested {
        ctx.output
            .warn(&format!("Page {} is not available; showing page {}", requested, reached));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_to_stops_when_next_refuses() {
        let mut remaining = 2;
        let reached = walk_to(5, || {
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
            true
        });
        assert_eq!(reached, 3);
    }

    #[test]
    fn test_walk_to_first_page_never_calls_next() {
        let reached = walk_to(1, || panic!("next called"));
        assert_eq!(reached, 1);
    }

    #[test]
    fn test_walk_to_zero_is_first_page() {
        assert_eq!(walk_to(0, || true), 1);
    }
}
