//! Pagination request understood by every view store engine.

use std::num::NonZeroU64;

/// A validated request for one page of views.
///
/// `offset` is the zero-based page index, so the page covers store
/// positions `[offset * size, offset * size + size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: u64,
    size: NonZeroU64,
}

impl PageRequest {
    /// Creates a request for page `offset` holding up to `size` views.
    pub fn new(offset: u64, size: NonZeroU64) -> Self {
        Self { offset, size }
    }

    /// Returns the zero-based page index.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the maximum number of views on the page.
    pub fn size(&self) -> u64 {
        self.size.get()
    }

    /// Returns the number of views preceding this page in store order.
    ///
    /// Saturates instead of overflowing; a saturated skip is always past the
    /// end of any store.
    pub fn skip(&self) -> u64 {
        self.offset.saturating_mul(self.size.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    #[test]
    fn first_page_skips_nothing() {
        let page = PageRequest::new(0, size(50));
        assert_eq!(page.skip(), 0);
        assert_eq!(page.size(), 50);
    }

    #[test]
    fn later_pages_skip_whole_pages() {
        let page = PageRequest::new(3, size(20));
        assert_eq!(page.offset(), 3);
        assert_eq!(page.skip(), 60);
    }

    #[test]
    fn skip_saturates() {
        let page = PageRequest::new(u64::MAX, size(2));
        assert_eq!(page.skip(), u64::MAX);
    }
}
