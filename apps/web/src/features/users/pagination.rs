//! Page-count and page-window math for the pagination bar. Up to five pages
//! are listed directly; beyond that the window keeps the first page, the last
//! page and the neighbours of the current page, with ellipses for the gaps.

/// Listings with this many pages or fewer show every page number.
const FULL_WINDOW_PAGES: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EllipsisSide {
    Start,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page { number: u32, active: bool },
    Ellipsis(EllipsisSide),
}

/// Number of pages needed to show `total` records, `limit` at a time.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(limit));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Builds the sequence of page links and ellipses for `current`.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let page = |number: u32| PageItem::Page {
        number,
        active: number == current,
    };

    if total_pages <= FULL_WINDOW_PAGES {
        return (1..=total_pages).map(page).collect();
    }

    let mut items = vec![page(1)];
    if current > 3 {
        items.push(PageItem::Ellipsis(EllipsisSide::Start));
    }

    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total_pages - 1);
    items.extend((start..=end).map(page));

    if current < total_pages - 2 {
        items.push(PageItem::Ellipsis(EllipsisSide::End));
    }
    items.push(page(total_pages));

    items
}

pub fn first() -> u32 {
    1
}

pub fn previous(page: u32) -> u32 {
    page.saturating_sub(1).max(1)
}

/// Next page, never past the last one; an empty listing stays on page 1.
pub fn next(page: u32, total_pages: u32) -> u32 {
    page.saturating_add(1).min(last(total_pages))
}

pub fn last(total_pages: u32) -> u32 {
    total_pages.max(1)
}

pub fn is_first(page: u32) -> bool {
    page <= 1
}

pub fn is_last(page: u32, total_pages: u32) -> bool {
    page >= last(total_pages)
}

/// Which navigation controls lead nowhere from `page`. First and previous
/// share the start boundary; next and last share the end one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavBounds {
    pub at_start: bool,
    pub at_end: bool,
}

impl NavBounds {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            at_start: is_first(page),
            at_end: is_last(page, total_pages),
        }
    }
}
