/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use serde::{Deserialize, Serialize};

/// One page of a paginated listing
///
/// Matches the JSON shape of a Spring Data `Page`. Only `content` is
/// required; the metadata fields default to zero/false when missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items of this page
    pub content: Vec<T>,
    /// Total number of items across all pages
    #[serde(default)]
    pub total_elements: u64,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based index of this page
    #[serde(default)]
    pub number: u32,
    /// Requested page size
    #[serde(default)]
    pub size: u32,
    /// Number of items on this page
    #[serde(default)]
    pub number_of_elements: u32,
    /// Whether this is the first page
    #[serde(default)]
    pub first: bool,
    /// Whether this is the last page
    #[serde(default)]
    pub last: bool,
    /// Whether this page has no items
    #[serde(default)]
    pub empty: bool,
}

impl<T> Page<T> {
    /// Returns `true` when another page follows this one
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.last && self.number + 1 < self.total_pages
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
            number_of_elements: 0,
            first: true,
            last: true,
            empty: true,
        }
    }
}
