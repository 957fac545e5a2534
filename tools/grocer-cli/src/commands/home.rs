//! Landing page command.

use anyhow::Result;
use grocer_views::{HomeView, ProductsView};

use super::{products, HomeArgs};
use crate::context::Context;
use crate::output::{deal_badge, price_cell};

/// Run the home command.
pub async fn run(args: HomeArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let mut view = HomeView::new(&ctx.config.paging);

    if let Some(text) = args.search {
        let route = view.search(&text);
        tracing::debug!(route = %route, "home search submitted");
        if !ctx.output.is_json() {
            ctx.output.kv("route", &route.to_href());
        }
        let mut products_view = ProductsView::new(&ctx.config.paging);
        let spinner = ctx.output.spinner("Searching...");
        products_view.open(&api, &route).await;
        spinner.finish_and_clear();
        products::show(&mut products_view, 1, ctx);
        return Ok(());
    }

    let spinner = ctx.output.spinner("Loading trending deals...");
    view.load(&api).await;
    spinner.finish_and_clear();

    show(&view, ctx);
    Ok(())
}

/// Render the trending deals teaser.
pub fn show(view: &HomeView, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "view": "home",
            "items": view.deals(),
        }));
        return;
    }

    ctx.output.header("Compare grocery prices across stores");
    ctx.output.info("Trending deals");
    if view.deals().is_empty() {
        ctx.output.info("No deals available right now.");
    } else {
        for product in view.deals() {
            let badge = product.deal_badge().map(deal_badge).unwrap_or_default();
            ctx.output.list_item(&format!(
                "{} at {}  {}  {}",
                product.product_name,
                product.store_name,
                price_cell(&product.price_display()),
                badge
            ));
        }
    }
    ctx.output.kv("search", "grocer home --search <text>");
}
