mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use axum::Json;
use serde::Deserialize;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use crate::db::Category;

use super::error::ApiError;

pub type ApiResponse<T> = Result<Json<T>, ApiError>;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Label reported as `current_category` by listings that are not scoped to
/// a single category.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Deserialize, Default)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Requested page, falling back to 1 when absent or not an integer.
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Selects the 1-based `page` window of `items`. Pages below 1 and pages past
/// the end select nothing.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    let start = match usize::try_from(page.saturating_sub(1))
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    {
        Some(start) => start,
        None => return vec![],
    };
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
