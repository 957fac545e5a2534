//! Deals listing command.

use anyhow::Result;
use grocer_views::DealsView;

use super::{note_short_walk, render_page, walk_to, DealsArgs};
use crate::context::Context;

/// Run the deals command.
pub async fn run(args: DealsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let mut view = DealsView::new(&ctx.config.paging);

    let spinner = ctx.output.spinner("Loading deals...");
    view.load(&api).await;
    spinner.finish_and_clear();

    show(&mut view, args.page, ctx);
    Ok(())
}

/// Render a loaded deals view at a 1-based page.
pub fn show(view: &mut DealsView, page: usize, ctx: &Context) {
    let reached = walk_to(page, || view.next());
    note_short_walk(ctx, page, reached);
    render_page(
        ctx,
        "Top Deals",
        &view.snapshot(),
        "No deals available right now.",
    );
}
