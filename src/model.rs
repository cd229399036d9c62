//! Item document, create payload validation, and partial-update merge.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single document in the items collection. The id is assigned by the
/// store at insert and never accepted from clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Create payload. All fields optional at the serde level so validation can
/// report which one is missing; a client-supplied id is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct NewItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
}

impl NewItem {
    /// Validate required fields, short-circuiting at the first missing or
    /// empty one, and stamp the creation instant.
    pub fn into_item(self, now: DateTime<Utc>) -> Result<Item, AppError> {
        let title = required("title", self.title)?;
        let description = required("description", self.description)?;
        let price = required("price", self.price)?;
        let category = required("category", self.category)?;
        Ok(Item {
            // Placeholder only; the store replaces it with the assigned id.
            id: Uuid::nil(),
            title,
            description,
            price,
            category,
            created_at: now,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("{} is required", field))),
    }
}

/// Partial-update payload: zero or more updatable fields.
#[derive(Debug, Default, Deserialize)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
}

impl ItemPatch {
    /// True when no updatable field is present and non-empty.
    pub fn is_empty(&self) -> bool {
        !non_empty(&self.title)
            && !non_empty(&self.description)
            && !non_empty(&self.price)
            && !non_empty(&self.category)
    }

    /// Overwrite fields present and non-empty in the patch onto `item`;
    /// everything else keeps its stored value.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(v) = present(&self.title) {
            item.title = v.to_string();
        }
        if let Some(v) = present(&self.description) {
            item.description = v.to_string();
        }
        if let Some(v) = present(&self.price) {
            item.price = v.to_string();
        }
        if let Some(v) = present(&self.category) {
            item.category = v.to_string();
        }
    }
}

fn non_empty(v: &Option<String>) -> bool {
    v.as_deref().is_some_and(|s| !s.is_empty())
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> NewItem {
        NewItem {
            title: Some("Widget".into()),
            description: Some("A widget".into()),
            price: Some("9.99".into()),
            category: Some("tools".into()),
        }
    }

    #[test]
    fn valid_payload_becomes_item() {
        let now = Utc::now();
        let item = payload().into_item(now).unwrap();
        assert_eq!(item.title, "Widget");
        assert_eq!(item.created_at, now);
    }

    #[test]
    fn missing_title_short_circuits() {
        let mut p = payload();
        p.title = None;
        p.description = None;
        let err = p.into_item(Utc::now()).unwrap_err();
        // Only the first missing field is reported.
        assert!(err.to_string().contains("title is required"));
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut p = payload();
        p.price = Some(String::new());
        let err = p.into_item(Utc::now()).unwrap_err();
        assert!(err.to_string().contains("price is required"));
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut item = payload().into_item(Utc::now()).unwrap();
        let patch = ItemPatch {
            price: Some("19.99".into()),
            ..Default::default()
        };
        patch.apply_to(&mut item);
        assert_eq!(item.price, "19.99");
        assert_eq!(item.title, "Widget");
        assert_eq!(item.category, "tools");
    }

    #[test]
    fn patch_ignores_empty_strings() {
        let mut item = payload().into_item(Utc::now()).unwrap();
        let patch = ItemPatch {
            title: Some(String::new()),
            description: Some("updated".into()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        patch.apply_to(&mut item);
        assert_eq!(item.title, "Widget");
        assert_eq!(item.description, "updated");
    }

    #[test]
    fn all_empty_patch_is_empty() {
        let patch = ItemPatch {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.is_empty());
        assert!(ItemPatch::default().is_empty());
    }
}
