//! Postgres persistence for authors, books, episodes, pages, rankings and
//! images.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Upper bound on a page size a caller asks for.
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Clamp a caller-supplied page size into `1..=MAX_LIST_LIMIT`.
///
/// `None` stays `None`: bound to `LIMIT $n` it returns every row, which is
/// what the admin list relies on.
pub fn clamp_limit(limit: Option<i64>) -> Option<i64> {
    limit.map(|n| n.clamp(1, MAX_LIST_LIMIT))
}

/// Clamp a caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// `ILIKE` pattern matching `text` as a literal substring.
///
/// `\`, `%` and `_` are escaped with the default `\` escape character.
pub fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_unbounded_unless_requested() {
        assert_eq!(clamp_limit(None), None);
        assert_eq!(clamp_limit(Some(0)), Some(1));
        assert_eq!(clamp_limit(Some(50_000)), Some(MAX_LIST_LIMIT));
        assert_eq!(clamp_offset(Some(-3)), 0);
        assert_eq!(clamp_offset(Some(20)), 20);
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("ねこ"), "%ねこ%");
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern(r"c:\x"), r"%c:\\x%");
    }
}
