use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// How far ahead of their fire time the dispatch job claims
    /// notification instants, in millis. Matches the job tick so every
    /// instant is claimed by exactly one tick.
    pub dispatch_lookahead_millis: i64,
    /// Maximum number of delivery attempts for one dispatch instant when
    /// the transport reports transient failures.
    pub dispatch_retry_limit: u32,
    /// Delay between those attempts, in millis.
    pub dispatch_retry_backoff_millis: u64,
    /// Maximum allowed calendar query window in days. Avoids clients
    /// asking for day buckets over a timespan of several years, which
    /// takes a lot of time to compute and is not useful information
    /// to query about anyways.
    pub calendar_query_days_limit: i64,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        Self {
            port,
            dispatch_lookahead_millis: 1000 * 60,
            dispatch_retry_limit: 3,
            dispatch_retry_backoff_millis: 250,
            calendar_query_days_limit: 62, // two full month grids
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
