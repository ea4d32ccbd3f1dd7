//! Pagination cursor for the coin list.

use serde::{Deserialize, Serialize};

/// Zero-based page counter. The request offset is `page * page_size`.
///
/// Only moves forward on a merged page; only goes back to zero on a reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageCursor {
    page: u32,
}

impl PageCursor {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn offset(&self, page_size: u32) -> u32 {
        self.page.saturating_mul(page_size)
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }

    pub(crate) fn advance(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub(crate) fn reset(&mut self) {
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let mut cursor = PageCursor::default();
        assert!(cursor.is_first_page());
        assert_eq!(cursor.offset(20), 0);

        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.page(), 2);
        assert_eq!(cursor.offset(20), 40);
        assert!(!cursor.is_first_page());
    }

    #[test]
    fn test_reset() {
        let mut cursor = PageCursor::default();
        cursor.advance();
        cursor.reset();
        assert_eq!(cursor, PageCursor::default());
    }
}
