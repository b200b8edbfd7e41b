//! Page-based listing shared by every list endpoint.
//!
//! The wire shape follows the Spring Data `Page` JSON the console was first
//! written against: `content`, `totalPages`, `totalElements` and a 0-based
//! `pageable.pageNumber`.

use serde::{Deserialize, Serialize};

/// Cards per page on every list screen (3 x 3 grid)
pub const DEFAULT_PAGE_SIZE: usize = 9;

pub fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: usize,
    pub total_elements: usize,
    pub pageable: Pageable,
}

impl<T> Page<T> {
    pub fn empty(page_size: usize) -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            total_elements: 0,
            pageable: Pageable {
                page_number: 0,
                page_size,
            },
        }
    }

    /// 1-based page number for pagination widgets
    pub fn display_page(&self) -> usize {
        self.pageable.page_number + 1
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            pageable: self.pageable,
        }
    }
}

/// Plain `page` + `size` query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }
}

/// Cuts one page out of an already ordered list.
///
/// A `size` of 0 is treated as 1. A page past the end yields empty content
/// with the totals still filled in.
pub fn paginate<T>(items: Vec<T>, page: usize, size: usize) -> Page<T> {
    let size = size.max(1);
    let total_elements = items.len();
    let total_pages = total_elements.div_ceil(size);
    let content = items
        .into_iter()
        .skip(page.saturating_mul(size))
        .take(size)
        .collect();

    Page {
        content,
        total_pages,
        total_elements,
        pageable: Pageable {
            page_number: page,
            page_size: size,
        },
    }
}
