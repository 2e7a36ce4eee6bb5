//! Database metrics collection.

use metrics::histogram;
use std::time::Instant;

/// Times a database operation and records its duration to the
/// `database_query_duration_seconds` histogram, labeled by query name.
///
/// Usage:
/// ```ignore
/// let timer = QueryTimer::new("client_find_by_id");
/// let result = sqlx::query_as::<_, ClientEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: String,
    start: Instant,
}

impl QueryTimer {
    /// Create a new timer for the given query name.
    pub fn new(query_name: impl Into<String>) -> Self {
        Self {
            query_name: query_name.into(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        histogram!(
            "database_query_duration_seconds",
            "query" => self.query_name
        )
        .record(duration);
    }
}
