//! Page windowing for question listings.

/// Number of questions per page. Not configurable.
pub const PAGE_SIZE: usize = 10;

/// A 1-based page selection over an ordered result set.
///
/// Pages outside the available range select an empty window; deciding
/// whether that means "not found" is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Page number (1-based). Values below 1 select nothing.
    pub page: i64,
}

impl PageWindow {
    /// Create a window for the given page number.
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// The first page.
    pub fn first() -> Self {
        Self { page: 1 }
    }

    /// Build a window from a raw `page` query parameter.
    ///
    /// Absent or non-numeric values fall back to the first page.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or_else(Self::first)
    }

    /// Index of the first item on this page, if the page can hold any items.
    pub fn offset(&self) -> Option<usize> {
        if self.page < 1 {
            return None;
        }
        usize::try_from(self.page - 1)
            .ok()
            .and_then(|p| p.checked_mul(PAGE_SIZE))
    }

    /// Return the slice of `items` that falls on this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.offset() {
            Some(start) if start < items.len() => {
                let end = (start + PAGE_SIZE).min(items.len());
                &items[start..end]
            }
            _ => &[],
        }
    }

    /// Map the items on this page through `format`, preserving order.
    pub fn apply<T, U>(&self, items: &[T], format: impl Fn(&T) -> U) -> Vec<U> {
        self.slice(items).iter().map(format).collect()
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::first()
    }
}
