//! List-request parameter parsing.

use crate::error::AppError;
use std::collections::HashMap;

/// Rows returned per page step.
pub const PAGE_SIZE: u32 = 10;

/// Updatable/sortable fields by their JSON names, mapped to table columns.
/// Sort fields become SQL identifiers, so anything outside this set is
/// rejected rather than passed through.
const SORT_FIELDS: &[(&str, &str)] = &[
    ("title", "title"),
    ("description", "description"),
    ("price", "price"),
    ("category", "category"),
    ("createdAt", "created_at"),
];

/// A resolved list query: optional category filter, sort column and
/// direction, and a row limit.
///
/// The limit is `PAGE_SIZE * page` with no offset: page 2 returns the first
/// 20 rows, not rows 11-20. This "load more" contract is inherited from the
/// service this one replaces and is relied on by its clients.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub category: Option<String>,
    pub sort_column: &'static str,
    pub descending: bool,
    pub limit: u32,
}

impl ListQuery {
    /// Parse raw query parameters. Defaults: page 1, sort by createdAt
    /// descending, no filter. Unknown parameters are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Result<ListQuery, AppError> {
        let page = match params.get("page") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|p| *p > 0)
                .ok_or_else(|| {
                    AppError::BadRequest(format!("invalid page number: '{}'", raw))
                })?,
            None => 1,
        };

        let sort_column = match params.get("sortBy") {
            Some(field) => SORT_FIELDS
                .iter()
                .find(|(json, _)| *json == field.as_str())
                .map(|(_, col)| *col)
                .ok_or_else(|| {
                    AppError::BadRequest(format!("unknown sort field: '{}'", field))
                })?,
            None => "created_at",
        };

        let descending = match params.get("sortOrder") {
            Some(order) => order == "desc",
            None => true,
        };

        let category = params.get("category").cloned().filter(|c| !c.is_empty());

        Ok(ListQuery {
            category,
            sort_column,
            descending,
            // Saturates rather than overflows for absurdly large pages; any
            // parseable positive page stays a valid request.
            limit: PAGE_SIZE.saturating_mul(page),
        })
    }
}
