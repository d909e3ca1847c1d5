//! Plain-text views for command output.
//!
//! Each view is a `Display` wrapper, so handlers `print!` it and tests
//! compare `to_string()`.

use std::fmt;

use shopcmp_core::{
    format_price, Product, ProductDetail, ProductId, ReviewPage, SpecificationGroup, CURRENCY_UNIT,
};
use shopcmp_queue::ComparisonQueue;

/// Review pages listed in the pager at most.
const MAX_PAGE_LINKS: u32 = 10;
const MAX_REVIEWS_SHOWN: usize = 10;

pub(crate) struct SearchResults<'a>(pub &'a [Product]);

impl fmt::Display for SearchResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No products found.");
        }
        for (i, product) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{:>2}. [{}] {} | {} | {}",
                i + 1,
                product.id,
                product.name,
                product.price_label(),
                product.brand_or_unknown()
            )?;
        }
        Ok(())
    }
}

pub(crate) struct ProductView<'a> {
    pub id: &'a ProductId,
    pub detail: &'a ProductDetail,
}

impl fmt::Display for ProductView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = self.detail;
        writeln!(f, "{} (id {})", detail.name, self.id)?;
        writeln!(f, "Price: {} {CURRENCY_UNIT}", format_price(detail.price))?;
        if let Some(description) = detail
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
        {
            writeln!(f, "\n{description}")?;
        }
        writeln!(f, "\nSpecifications:")?;
        write_specifications(f, &detail.specifications)
    }
}

fn write_specifications(f: &mut fmt::Formatter<'_>, groups: &[SpecificationGroup]) -> fmt::Result {
    let attributes: Vec<_> = SpecificationGroup::flatten(groups).collect();
    if attributes.is_empty() {
        return writeln!(f, "  No specifications available");
    }
    let width = attributes
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(0);
    for attribute in attributes {
        writeln!(f, "  {:<width$}  {}", attribute.name, attribute.value)?;
    }
    Ok(())
}

pub(crate) struct ReviewsView<'a>(pub &'a ReviewPage);

impl fmt::Display for ReviewsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;
        writeln!(f, "Total reviews: {}", page.reviews_count)?;
        writeln!(f, "Average rating: {:.1}/5", page.rating_average)?;
        for star in (1..=5u8).rev() {
            let bucket = page.star(star);
            writeln!(
                f,
                "  {star} star{}: {} ({:.0}%)",
                if star == 1 { " " } else { "s" },
                bucket.count,
                bucket.percent
            )?;
        }

        if page.reviews.is_empty() {
            writeln!(f, "\nNo reviews yet.")?;
        }
        for review in page.reviews.iter().take(MAX_REVIEWS_SHOWN) {
            let date = review.created_at_utc().map_or_else(
                || "unknown date".to_owned(),
                |d| d.format("%Y-%m-%d").to_string(),
            );
            writeln!(f)?;
            writeln!(
                f,
                "{} {} ({}/5) on {date}",
                review.reviewer_name(),
                stars(review.rating),
                review.rating
            )?;
            if !review.title.is_empty() {
                writeln!(f, "  {}", review.title)?;
            }
            let content = review
                .content
                .as_deref()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or("No content");
            writeln!(f, "  {content}")?;
            if review.vote_attributes.agree.is_empty() {
                writeln!(f, "  Agreed: None")?;
            } else {
                writeln!(f, "  Agreed: {}", review.vote_attributes.agree.join(", "))?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", pager(page.paging.current_page.max(1), page.last_page()))
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "*".repeat(filled), ".".repeat(5 - filled))
}

/// `Pages: 1 [2] 3`, listing at most the first ten pages.
fn pager(current: u32, last: u32) -> String {
    let links: Vec<String> = (1..=last.min(MAX_PAGE_LINKS))
        .map(|page| {
            if page == current {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    let mut out = format!("Pages: {}", links.join(" "));
    if last > MAX_PAGE_LINKS {
        out.push_str(&format!(" ... ({last} pages)"));
    }
    out
}

/// Queue header plus the entries on the current page.
pub(crate) struct QueueView<'a>(pub &'a ComparisonQueue);

impl fmt::Display for QueueView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.0;
        writeln!(f, "Comparison Queue ({}/{})", queue.len(), queue.capacity())?;
        if queue.is_empty() {
            return writeln!(f, "  (empty)");
        }
        let offset = (queue.current_page() - 1) * queue.page_size();
        for (i, entry) in queue.visible().iter().enumerate() {
            writeln!(
                f,
                "  {}. [{}] {} | {}",
                offset + i + 1,
                entry.id(),
                entry.product.name,
                entry.product.price_label()
            )?;
        }
        writeln!(f, "  Page {}/{}", queue.current_page(), queue.total_pages())
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
