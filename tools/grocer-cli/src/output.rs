//! Output formatting for the CLI.

use console::{style, Term};
use grocer_core::catalog::{DealType, PriceDisplay, Product};
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
///
/// Human-readable output goes to stdout; in JSON mode only documents are
/// printed there and everything else is suppressed.
#[derive(Clone)]
pub struct Output {
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(json: bool) -> Self {
        Self {
            json,
            term: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", truncate(col, *width), width = width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Print products as a table.
    pub fn products(&self, products: &[Product]) {
        if self.json {
            return;
        }
        let name_width = (self.term_width().saturating_sub(62)).clamp(16, 48);
        let widths = [name_width, 10, 10, 20, 10];

        let header = ["Product", "Store", "Category", "Price", "Deal"];
        let header: Vec<String> = header
            .iter()
            .zip(widths.iter())
            .map(|(h, w)| format!("{:w$}", h, w = w))
            .collect();
        println!("  {}", style(header.join("  ").trim_end()).bold());

        for product in products {
            let price = price_cell(&product.price_display());
            let badge = product.deal_badge().map(deal_badge).unwrap_or_default();
            self.table_row(
                &[
                    product.product_name.as_str(),
                    product.store_name.as_str(),
                    product.category.as_str(),
                    price.as_str(),
                    badge.as_str(),
                ],
                &widths,
            );
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width.
    pub fn term_width(&self) -> usize {
        self.term.size().1 as usize
    }
}

/// Price column text: the current price, then the struck baseline when discounted.
pub fn price_cell(display: &PriceDisplay) -> String {
    match display.was_price() {
        Some(was) => format!("{} (was {})", display.current_price(), was),
        None => display.current_price(),
    }
}

/// Colored badge for a deal type.
pub fn deal_badge(deal: &DealType) -> String {
    match deal {
        DealType::Sale => style(deal.as_str()).red().to_string(),
        DealType::Clearance => style(deal.as_str()).magenta().to_string(),
        DealType::Loyalty => style(deal.as_str()).blue().to_string(),
        _ => style(deal.as_str()).dim().to_string(),
    }
}

/// Caption under a locally paged listing.
pub fn page_caption(page: usize, total_pages: usize, shown: usize, total: usize) -> String {
    format!(
        "Page {} of {}  ·  Showing {} products ({} total results)",
        page,
        total_pages.max(1),
        shown,
        total
    )
}

fn truncate(text: &str, width: usize) -> String {
    if console::measure_text_width(text) <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_cell_standard() {
        let product = Product::new("p1", "Bread", "Metro", "2.49");
        assert_eq!(price_cell(&product.price_display()), "2.49");
    }

    #[test]
    fn test_price_cell_discounted() {
        let product = Product::new("p1", "Milk", "Metro", "5.49").with_sale(DealType::Sale, "4.49");
        assert_eq!(price_cell(&product.price_display()), "$4.49 (was 5.49)");
    }

    #[test]
    fn test_page_caption() {
        assert_eq!(
            page_caption(2, 3, 15, 37),
            "Page 2 of 3  ·  Showing 15 products (37 total results)"
        );
        assert_eq!(
            page_caption(1, 0, 0, 0),
            "Page 1 of 1  ·  Showing 0 products (0 total results)"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long product name", 8), "a very …");
    }
}
