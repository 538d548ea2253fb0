//! The export operation: fetch companies and holdings, join them, emit CSV, and hand the
//! result to the investments service.

mod api;
mod generate;

pub use generate::{
    CsvLine, CsvOptions, Quoting, UnresolvedCompany, csv_lines, generate_holdings_csv,
    generate_holdings_csv_with,
};

use crate::core::{ExportClient, ExportError};

/// Content type for serving [`ExportResult::csv`] over HTTP.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Output of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// The CSV body, `\n`-joined, without header or trailing newline.
    pub csv: String,
    /// Number of lines in `csv` (one per holding).
    pub line_count: usize,
}

/// A builder for running one export.
///
/// ```no_run
/// # async fn demo(client: holdings_export::ExportClient) -> Result<(), holdings_export::ExportError> {
/// let result = holdings_export::ExportBuilder::new(&client).run().await?;
/// println!("{}", result.csv);
/// # Ok(())
/// # }
/// ```
pub struct ExportBuilder<'a> {
    client: &'a ExportClient,
    options: CsvOptions,
    submit: bool,
}

impl<'a> ExportBuilder<'a> {
    /// Creates a new `ExportBuilder` with default CSV options and submission enabled.
    pub fn new(client: &'a ExportClient) -> Self {
        Self {
            client,
            options: CsvOptions::default(),
            submit: true,
        }
    }

    /// Sets quoting and unresolved-company handling.
    pub fn options(mut self, options: CsvOptions) -> Self {
        self.options = options;
        self
    }

    /// Whether to POST `{"csv": ...}` to `{investmentsServiceUrl}/investments/export`
    /// after generating. Default: `true`.
    pub fn submit(mut self, yes: bool) -> Self {
        self.submit = yes;
        self
    }

    /// Runs the export.
    ///
    /// Both collections are fetched concurrently. Any fetch failure aborts before CSV
    /// generation and before anything is submitted.
    ///
    /// # Errors
    ///
    /// Propagates fetch, decode and submission failures, plus
    /// [`ExportError::UnresolvedCompany`] when configured to fail on unknown ids.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(submit = self.submit)))]
    pub async fn run(self) -> Result<ExportResult, ExportError> {
        api::run_export(self.client, &self.options, self.submit).await
    }
}

/// POSTs an already generated CSV body to the export endpoint as `{"csv": <body>}`.
///
/// # Errors
///
/// [`ExportError::Http`] on transport failure, [`ExportError::Status`] on a non-2xx answer.
pub async fn submit_export(client: &ExportClient, csv: &str) -> Result<(), ExportError> {
    api::submit_export(client, csv).await
}
