//! Per-store browsing command.

use anyhow::Result;
use grocer_core::StoreName;
use grocer_data::GroceryApi;
use grocer_views::StoresView;

use super::{note_short_walk, render_page, StoresArgs};
use crate::context::Context;

/// Run the stores command.
pub async fn run(args: StoresArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let mut view = StoresView::new(ctx.config.directory(), &ctx.config.paging);

    if args.store.is_none() && !ctx.output.is_json() {
        ctx.output.header("Stores");
        for store in view.stores() {
            let marker = if store == view.active_store() { " (default)" } else { "" };
            ctx.output.list_item(&format!("{}{}", store, marker));
        }
    }

    open(&api, &mut view, args.store.map(StoreName::from), args.page, ctx).await
}

/// Load `store` (or the active one) and page forward to `page`.
pub async fn open(
    api: &GroceryApi,
    view: &mut StoresView,
    store: Option<StoreName>,
    page: usize,
    ctx: &Context,
) -> Result<()> {
    let spinner = ctx.output.spinner("Loading store products...");
    match store {
        Some(store) => view.select(api, store).await,
        None => view.load(api).await,
    };

    let mut reached = 1;
    while reached < page {
        spinner.set_message(format!("Loading page {}...", reached + 1));
        if !view.next(api).await {
            break;
        }
        reached += 1;
    }
    spinner.finish_and_clear();

    note_short_walk(ctx, page, reached);
    let empty = format!("No products found for {}.", view.active_store());
    render_page(
        ctx,
        &format!("Products at {}", view.active_store()),
        &view.snapshot(),
        &empty,
    );
    Ok(())
}
