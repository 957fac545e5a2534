//! Products search and filter command.

use anyhow::{bail, Result};
use grocer_core::catalog::{filter_category, FILTER_CATEGORIES};
use grocer_core::search::FilterCriteria;
use grocer_core::Route;
use grocer_views::ProductsView;

use super::{note_short_walk, render_page, walk_to, ProductsArgs};
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let mut view = ProductsView::new(&ctx.config.paging);
    let criteria = criteria_from(&args)?;

    if let Some(category) = &args.category {
        if filter_category(category).is_none() {
            ctx.output.warn(&format!(
                "Unknown category '{}'; offered categories are {}",
                category.trim(),
                FILTER_CATEGORIES.join(", ")
            ));
        }
    }

    let spinner = ctx.output.spinner("Loading products...");
    match args.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => {
            if !criteria.is_empty() {
                ctx.output.warn("Filters are ignored while a search is active");
            }
            view.search(&api, text).await;
        }
        None if !criteria.is_empty() => {
            view.filter(&api, criteria).await;
        }
        None => {
            view.load(&api).await;
        }
    }
    spinner.finish_and_clear();

    show(&mut view, args.page, ctx);
    Ok(())
}

/// Open the products view at `route`, e.g. a bookmarked search.
pub async fn open(route: &Route, page: usize, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let mut view = ProductsView::new(&ctx.config.paging);

    let spinner = ctx.output.spinner("Loading products...");
    view.open(&api, route).await;
    spinner.finish_and_clear();

    show(&mut view, page, ctx);
    Ok(())
}

/// Render a loaded products view at a 1-based page.
pub fn show(view: &mut ProductsView, page: usize, ctx: &Context) {
    let reached = walk_to(page, || view.next());
    note_short_walk(ctx, page, reached);

    let title = if !view.search_text().is_empty() {
        format!("Results for \"{}\"", view.search_text())
    } else if view.has_active_criteria() {
        "Filtered products".to_string()
    } else {
        "All products".to_string()
    };

    render_page(ctx, &title, &view.snapshot(), "No products found.");
    if !ctx.output.is_json() {
        ctx.output.kv("link", &view.route().to_href());
    }
}

fn criteria_from(args: &ProductsArgs) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::new()
        .in_stock_only(args.in_stock)
        .sale_only(args.sale_only);

    if let Some(category) = &args.category {
        let category = filter_category(category).unwrap_or(category.as_str());
        criteria = criteria.with_category(category);
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        // Zero leaves a bound open.
        let min = args.min_price.unwrap_or(0.0);
        let max = args.max_price.unwrap_or(0.0);
        if min < 0.0 || max < 0.0 || (max > 0.0 && max < min) {
            bail!("Invalid price range: {} to {}", min, max);
        }
        criteria = criteria.with_price_range(min, max);
    }

    for store in &args.stores {
        criteria = criteria.with_store(store.as_str());
    }

    Ok(criteria.normalize())
}
