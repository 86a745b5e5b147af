//! The execute-and-render loop.

use crate::error::Result;
use crate::queries::{load_query_set, pets_queries};
use crate::render::render_table;
use crate::sqlite::{SqlQuery, Store};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default store location, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "pets_database.db";

/// Where to read from and what to run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// JSON query set replacing the built-in pets queries
    pub queries_file: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

impl RunnerConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            queries_file: None,
        }
    }

    pub fn with_queries_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.queries_file = Some(path.into());
        self
    }

    pub fn queries(&self) -> Result<Vec<SqlQuery>> {
        match &self.queries_file {
            Some(path) => load_query_set(path),
            None => Ok(pets_queries()),
        }
    }

    /// Load the workload, then run it against the store on stdout.
    pub fn run(&self) -> Result<()> {
        let queries = self.queries()?;
        run(&self.db_path, &queries)
    }
}

/// Run `queries` in order against `target`, printing each result to stdout.
pub fn run(target: impl AsRef<Path>, queries: &[SqlQuery]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to(target, queries, &mut out)
}

/// Run `queries` in order against `target`, writing each rendering to `out`.
///
/// The store is opened before the first query and released after the last
/// one. The first failure stops the run; the connection is dropped with it.
pub fn run_to<W: Write>(target: impl AsRef<Path>, queries: &[SqlQuery], out: &mut W) -> Result<()> {
    let store = Store::open(target.as_ref())
        .inspect_err(|e| debug!(error = %e, "cannot open store"))?;

    for query in queries {
        let result = store
            .execute(query)
            .inspect_err(|e| debug!(error = %e, "query failed"))?;
        writeln!(out, "-- {}", query.label)?;
        writeln!(out, "{}", render_table(&result))?;
        writeln!(out)?;
    }
    out.flush()?;

    info!(queries = queries.len(), "all queries completed");
    store.close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_config_defaults() {
        let config = RunnerConfig::default();
        assert_eq!(config.db_path, PathBuf::from("pets_database.db"));
        assert_eq!(config.queries().unwrap(), pets_queries());
    }

    #[test]
    fn test_config_with_missing_queries_file() {
        let config = RunnerConfig::new("pets.db").with_queries_file("/nonexistent/q.json");
        assert!(config.queries().is_err());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failures_are_not_logged_at_warn() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let result = tracing::subscriber::with_default(subscriber, || {
            run_to(dir.path().join("missing.db"), &pets_queries(), &mut out)
        });

        assert!(result.unwrap_err().is_store_unavailable());
        assert!(logs.0.lock().unwrap().is_empty());
    }
}
