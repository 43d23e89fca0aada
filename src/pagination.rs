//! Page-window computation for the procurement list views.
//!
//! The purchase-order and supplier tables page through large result sets;
//! this module computes which pager controls to render for a given position
//! in the set. It is pure presentation math with no knowledge of the rows
//! being paged.

/// One control in a rendered pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    /// A numbered page link; `current` marks the page being viewed.
    Number {
        /// The page the link navigates to.
        page: u64,
        /// Whether this is the page being viewed.
        current: bool,
    },
    /// A gap between non-adjacent page numbers.
    Gap,
    /// A link to the previous page.
    Prev(u64),
    /// A link to the next page.
    Next(u64),
}

/// Computes the pager controls for one position in a paged result set.
///
/// At most `window_size` consecutive page numbers are shown around the
/// current page, with the first and last pages anchored on either side when
/// the window does not reach them. Degenerate input clamps instead of
/// panicking: zero pages yields an empty pager and an out-of-range current
/// page snaps to the nearest valid page.
pub fn page_window(current_page: u64, page_count: u64, window_size: u64) -> Vec<PageItem> {
    if page_count == 0 {
        return Vec::new();
    }

    let window = window_size.max(1);
    let current = current_page.clamp(1, page_count);
    let half = window / 2;

    let (start, end) = if page_count <= window {
        (1, page_count)
    } else if current <= half {
        (1, window)
    } else if current + half > page_count {
        (page_count - window + 1, page_count)
    } else {
        (current - half, current + half)
    };

    let mut items = Vec::new();

    if current > 1 {
        items.push(PageItem::Prev(current - 1));
    }

    if start > 1 {
        items.push(PageItem::Number {
            page: 1,
            current: false,
        });
        if start > 2 {
            items.push(PageItem::Gap);
        }
    }

    for page in start..=end {
        items.push(PageItem::Number {
            page,
            current: page == current,
        });
    }

    if end < page_count {
        if end + 1 < page_count {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Number {
            page: page_count,
            current: false,
        });
    }

    if current < page_count {
        items.push(PageItem::Next(current + 1));
    }

    items
}
