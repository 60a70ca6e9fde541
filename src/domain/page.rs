//! Pagination types shared by all list queries

use serde::{Deserialize, Serialize};

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

/// A validated page request with defaults applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub order: SortOrder,
    pub limit: u32,
    pub page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            order: SortOrder::Desc,
            limit: 10,
            page: 1,
        }
    }
}

impl PageRequest {
    pub fn new(order: SortOrder, limit: u32, page: u32) -> Self {
        Self { order, limit, page }
    }

    /// Offset of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.limit as usize
    }
}

/// Pagination metadata returned alongside every list page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
}

impl PageMeta {
    pub fn new(request: &PageRequest, total: u64) -> Self {
        let last_page = (total.div_ceil(request.limit as u64) as u32).max(1);
        Self {
            current_page: request.page,
            per_page: request.limit,
            total,
            last_page,
        }
    }
}

/// One page of projected entities, serialized as `{data, meta}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self { data, meta }
    }
}
