//! The workload: the built-in pets query set, or one loaded from a JSON file.

use crate::error::{Error, Result};
use crate::sqlite::{Params, SqlQuery};
use std::path::Path;
use tracing::debug;

/// Owner whose cats the aggregate query counts.
pub const COUNTED_OWNER_ID: i64 = 1;

const PETS_STATEMENTS: &[(&str, &str)] = &[
    ("all cats", "SELECT * FROM cats;"),
    ("cats aged 5 or older", "SELECT * FROM cats WHERE age >= 5;"),
    ("cats aged 1 to 3", "SELECT * FROM cats WHERE age BETWEEN 1 AND 3;"),
    ("cats without an owner", "SELECT * FROM cats WHERE owner_id IS NULL;"),
    ("names starting with M", "SELECT * FROM cats WHERE name LIKE 'M%';"),
    (
        "four-letter names with 'a' second (pattern)",
        "SELECT * FROM cats WHERE name LIKE '_a__';",
    ),
    (
        "four-letter names with 'a' second (substr)",
        "SELECT * FROM cats WHERE length(name) = 4 AND substr(name, 2, 1) = 'a';",
    ),
];

/// Ordered queries against the `cats` table of a pets database.
pub fn pets_queries() -> Vec<SqlQuery> {
    let mut queries: Vec<SqlQuery> = PETS_STATEMENTS
        .iter()
        .map(|(label, statement)| SqlQuery::new(statement).with_label(label))
        .collect();
    queries.push(owner_cat_count(COUNTED_OWNER_ID));
    queries
}

/// `COUNT` of the cats belonging to `owner_id`.
pub fn owner_cat_count(owner_id: i64) -> SqlQuery {
    SqlQuery::new("SELECT COUNT(owner_id) FROM cats WHERE owner_id = :owner_id;")
        .with_label(&format!("cats owned by owner {owner_id}"))
        .with_params(Params::new().with_value("owner_id", owner_id))
}

/// Parse a JSON array of `{label?, statement, params?}` objects.
pub fn parse_query_set(json: &str) -> serde_json::Result<Vec<SqlQuery>> {
    let mut queries: Vec<SqlQuery> = serde_json::from_str(json)?;
    for query in &mut queries {
        if query.label.is_empty() {
            query.label = query.statement.clone();
        }
    }
    Ok(queries)
}

pub fn load_query_set(path: impl AsRef<Path>) -> Result<Vec<SqlQuery>> {
    let path = path.as_ref();
    let load_failed = |message: String| Error::QuerySetLoad {
        path: path.to_path_buf(),
        message,
    };

    let json = std::fs::read_to_string(path).map_err(|e| load_failed(e.to_string()))?;
    let queries = parse_query_set(&json).map_err(|e| load_failed(e.to_string()))?;
    debug!(path = %path.display(), count = queries.len(), "loaded query set");
    Ok(queries)
}
