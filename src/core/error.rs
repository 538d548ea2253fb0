use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The underlying HTTP transport failed (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// An upstream service answered with a non-2xx status code.
    #[error("Failed to fetch data from {url} (status {status})")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The body of a successful response was not the JSON shape we expected.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A holding references a company id that is absent from the company index.
    ///
    /// Only raised when CSV generation is configured with [`UnresolvedCompany::Fail`](crate::UnresolvedCompany::Fail).
    #[error("holding of user {user_id} references unknown company {company_id}")]
    UnresolvedCompany {
        /// The user whose holding could not be resolved.
        user_id: String,
        /// The company id that had no entry in the index.
        company_id: String,
    },

    /// Writing a CSV record failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The service configuration is missing a value or holds an invalid one.
    #[error("invalid configuration: {0}")]
    Config(String),
}
