//! Open a route path, the way a bookmark or shared link would.

use anyhow::{bail, Result};
use grocer_core::Route;
use grocer_views::{DealsView, HomeView, StoresView};

use super::{deals, home, products, stores, OpenArgs};
use crate::context::Context;

/// Run the open command.
pub async fn run(args: OpenArgs, ctx: &Context) -> Result<()> {
    let route = Route::parse(&args.route);
    tracing::debug!(route = %route, "opening route");

    match &route {
        Route::Home => {
            let api = ctx.api()?;
            let mut view = HomeView::new(&ctx.config.paging);
            let spinner = ctx.output.spinner("Loading trending deals...");
            view.load(&api).await;
            spinner.finish_and_clear();
            home::show(&view, ctx);
        }
        Route::Products { .. } => products::open(&route, args.page, ctx).await?,
        Route::Deals => {
            let api = ctx.api()?;
            let mut view = DealsView::new(&ctx.config.paging);
            let spinner = ctx.output.spinner("Loading deals...");
            view.load(&api).await;
            spinner.finish_and_clear();
            deals::show(&mut view, args.page, ctx);
        }
        Route::Stores { store } => {
            let api = ctx.api()?;
            let mut view = StoresView::new(ctx.config.directory(), &ctx.config.paging);
            stores::open(&api, &mut view, store.clone(), args.page, ctx).await?;
        }
        Route::About => about(ctx),
        Route::NotFound(path) => bail!("No page at '{}'", path),
    }

    Ok(())
}

fn about(ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "view": "about",
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }));
        return;
    }

    ctx.output.header("About");
    ctx.output.info("Compare grocery prices, deals and store listings from one place.");
    ctx.output.kv("version", env!("CARGO_PKG_VERSION"));
    ctx.output.kv("api", &ctx.config.api.base_url);
}
