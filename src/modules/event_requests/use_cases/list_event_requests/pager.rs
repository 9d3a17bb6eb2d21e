use std::fmt;
use std::num::NonZeroUsize;

use serde::Serialize;

/// Numbered buttons never go past this many, whatever the page count.
pub const MAX_PAGE_BUTTONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: usize,
    pub current: bool,
}

/// The `Showing a-b of n results` line under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl ResultsSummary {
    pub fn new(current_page: usize, page_size: NonZeroUsize, total: usize) -> Self {
        let start = current_page.saturating_sub(1).saturating_mul(page_size.get());
        Self {
            from: start.saturating_add(1),
            to: start.saturating_add(page_size.get()).min(total),
            total,
        }
    }
}

impl fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}-{} of {} results", self.from, self.to, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    pub buttons: Vec<PageButton>,
    pub has_previous: bool,
    pub has_next: bool,
    pub summary: String,
}

impl Pager {
    pub fn new(current_page: usize, page_size: NonZeroUsize, total_matches: usize) -> Self {
        let total_pages = total_matches.div_ceil(page_size.get());
        let buttons = (1..=total_pages.min(MAX_PAGE_BUTTONS))
            .map(|number| PageButton {
                number,
                current: number == current_page,
            })
            .collect();
        Self {
            buttons,
            has_previous: previous_page(current_page).is_some(),
            has_next: next_page(current_page, total_pages).is_some(),
            summary: ResultsSummary::new(current_page, page_size, total_matches).to_string(),
        }
    }
}

/// `None` while on the first page.
pub fn previous_page(current_page: usize) -> Option<usize> {
    (current_page > 1).then(|| current_page - 1)
}

/// `None` on the last page and when there are no pages. From a page past the end (left over
/// after a narrower search) it jumps back to the last page.
pub fn next_page(current_page: usize, total_pages: usize) -> Option<usize> {
    (total_pages > 0 && current_page != total_pages)
        .then(|| current_page.saturating_add(1).min(total_pages))
}
