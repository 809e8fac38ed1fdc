//! Pagination utilities shared by the store and the HTTP layer.
//!
//! `Pagination` carries the caller's request (0-based page index, page size);
//! `Page<T>` is what a listing returns.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest offset a database will accept (`BIGINT`).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 0-based page index
    #[serde(default)]
    pub page: u64,
    /// items per page
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 { DEFAULT_PAGE_SIZE }

impl Pagination {
    pub fn new(page: u64, size: u64) -> Self { Self { page, size } }

    /// Clamp the page size into `1..=MAX_PAGE_SIZE`; returns `(page_idx, size)`.
    pub fn normalize(self) -> (u64, u64) {
        (self.page, self.size.clamp(1, MAX_PAGE_SIZE))
    }

    /// Offset of the first item of the page, after normalization.
    pub fn offset(self) -> u64 {
        let (page, size) = self.normalize();
        page.saturating_mul(size)
    }

    /// Like [`Pagination::offset`], but `None` when the offset would exceed [`MAX_OFFSET`].
    pub fn checked_offset(self) -> Option<u64> {
        let (page, size) = self.normalize();
        page.checked_mul(size).filter(|offset| *offset <= MAX_OFFSET)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 0, size: DEFAULT_PAGE_SIZE } }
}

/// One page of a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, opts: Pagination, total_items: u64) -> Self {
        let (page, size) = opts.normalize();
        Self { items, page, size, total_items, total_pages: total_items.div_ceil(size) }
    }

    /// Slice an in-memory collection the same way a database paginator would.
    pub fn from_vec(all: Vec<T>, opts: Pagination) -> Self {
        let total = all.len() as u64;
        let (_, size) = opts.normalize();
        let items = all
            .into_iter()
            .skip(opts.offset() as usize)
            .take(size as usize)
            .collect();
        Self::new(items, opts, total)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}
