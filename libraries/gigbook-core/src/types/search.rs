//! Search result types

use serde::{Deserialize, Serialize};

/// A name search response: the matching rows plus their count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
