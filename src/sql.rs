//! Parameterized SQL for the items table: identifiers come from the fixed
//! column set, values always bind as parameters.

use crate::query::ListQuery;

const TABLE: &str = "items";
const COLUMNS: &[&str] = &["id", "title", "description", "price", "category", "created_at"];

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn select_column_list() -> String {
    COLUMNS
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SQL plus the text parameters it binds, in placeholder order.
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

/// SELECT with optional category filter, requested sort, and row limit.
/// The sort column is taken from `ListQuery`, which only produces columns
/// from the fixed set.
pub fn select_list(query: &ListQuery) -> QueryBuf {
    let mut params = Vec::new();
    let where_clause = match &query.category {
        Some(category) => {
            params.push(category.clone());
            format!(" WHERE {} = $1", quoted("category"))
        }
        None => String::new(),
    };
    let direction = if query.descending { "DESC" } else { "ASC" };
    let sql = format!(
        "SELECT {} FROM {}{} ORDER BY {} {} LIMIT {}",
        select_column_list(),
        quoted(TABLE),
        where_clause,
        quoted(query.sort_column),
        direction,
        query.limit
    );
    QueryBuf { sql, params }
}

/// SELECT by id. Caller binds the id as sole parameter.
pub fn select_by_id() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        select_column_list(),
        quoted(TABLE),
        quoted("id")
    )
}

/// INSERT without id so the database assigns one; returns the full row.
/// Binds: title, description, price, category, created_at.
pub fn insert() -> String {
    format!(
        "INSERT INTO {} ({}, {}, {}, {}, {}) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
        quoted(TABLE),
        quoted("title"),
        quoted("description"),
        quoted("price"),
        quoted("category"),
        quoted("created_at"),
        select_column_list()
    )
}

/// UPDATE all mutable columns by id. Binds: title, description, price,
/// category, then id.
pub fn update() -> String {
    format!(
        "UPDATE {} SET {} = $1, {} = $2, {} = $3, {} = $4 WHERE {} = $5",
        quoted(TABLE),
        quoted("title"),
        quoted("description"),
        quoted("price"),
        quoted("category"),
        quoted("id")
    )
}

/// DELETE by id. Caller binds the id as sole parameter.
pub fn delete() -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(TABLE), quoted("id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ListQuery;

    fn base_query() -> ListQuery {
        ListQuery {
            category: None,
            sort_column: "created_at",
            descending: true,
            limit: 10,
        }
    }

    #[test]
    fn list_without_filter() {
        let q = select_list(&base_query());
        assert_eq!(
            q.sql,
            "SELECT \"id\", \"title\", \"description\", \"price\", \"category\", \"created_at\" \
             FROM \"items\" ORDER BY \"created_at\" DESC LIMIT 10"
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn list_with_category_filter() {
        let mut query = base_query();
        query.category = Some("tools".into());
        query.sort_column = "price";
        query.descending = false;
        query.limit = 20;
        let q = select_list(&query);
        assert!(q.sql.contains("WHERE \"category\" = $1"));
        assert!(q.sql.ends_with("ORDER BY \"price\" ASC LIMIT 20"));
        assert_eq!(q.params, vec!["tools".to_string()]);
    }

    #[test]
    fn insert_excludes_id() {
        let sql = insert();
        assert!(sql.starts_with("INSERT INTO \"items\" (\"title\""));
        assert!(sql.contains("RETURNING \"id\""));
    }

    #[test]
    fn update_sets_all_mutable_columns() {
        let sql = update();
        assert!(sql.contains("SET \"title\" = $1"));
        assert!(sql.contains("\"category\" = $4"));
        assert!(sql.ends_with("WHERE \"id\" = $5"));
        assert!(!sql.contains("created_at"));
    }

    #[test]
    fn delete_by_id() {
        assert_eq!(delete(), "DELETE FROM \"items\" WHERE \"id\" = $1");
    }
}
