use thiserror::Error;

/// Failures of the schedule fetch-and-decode step.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("invalid {field} date {value:?} for version {version:?}: {source}")]
    InvalidDate {
        version: String,
        field: &'static str,
        value: String,
        source: chrono::ParseError,
    },
}

/// Failures surfaced by the schedule store.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The remote schedule document could not be fetched or decoded.
    /// The store is left untouched; the caller may preload again.
    #[error("failed to fetch the Node.js schedule from {url}")]
    FetchFailure {
        url: String,
        #[source]
        source: FetchError,
    },

    /// A version was queried before any successful preload.
    #[error(
        "unable to get the schedule information for Node.js version {version:?} as the cache is empty; preload first, then try again"
    )]
    EmptyCache { version: String },

    /// A version was queried that is not in the populated cache.
    #[error(
        "unable to find the schedule information for Node.js version {version:?}; version numbers that do exist are: [{}]",
        known.join(", ")
    )]
    UnknownVersion { version: String, known: Vec<String> },

    /// The identifier list was requested before any successful preload.
    #[error("the schedule identifiers have not been preloaded yet")]
    NotPreloaded,
}
