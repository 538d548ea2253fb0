//! holdings-export: joins upstream investment holdings with company names and exports CSV.
//!
//! An [`ExportClient`] is bound to two services: the investments service (user holdings,
//! export confirmation) and the financial companies service (company records). The export
//! operation fetches both collections, indexes companies by id, and writes one CSV line per
//! holding:
//!
//! ```text
//! userId,firstName,lastName,date,companyName,value
//! ```
//!
//! where `value = investmentTotal * investmentPercentage`.
//!
//! ```no_run
//! use holdings_export::{ExportClient, ServiceConfig};
//!
//! # async fn demo() -> Result<(), holdings_export::ExportError> {
//! let config = ServiceConfig::from_env()?;
//! let client = ExportClient::from_config(&config)?;
//! let result = client.export().run().await?;
//! println!("{}", result.csv);
//! # Ok(())
//! # }
//! ```

pub mod companies;
pub mod core;
pub mod export;
pub mod investments;

pub use companies::{CompaniesBuilder, Company, CompanyIndex, get_company_names};
pub use crate::core::net::fetch_and_parse;
pub use crate::core::{ExportClient, ExportClientBuilder, ExportError, ServiceConfig};
pub use export::{
    CSV_CONTENT_TYPE, CsvLine, CsvOptions, ExportBuilder, ExportResult, Quoting,
    UnresolvedCompany, csv_lines, generate_holdings_csv, generate_holdings_csv_with,
    submit_export,
};
pub use investments::{Holding, InvestmentsBuilder, UserHoldings};

impl ExportClient {
    /// Builder for the company collection.
    pub fn companies(&self) -> CompaniesBuilder<'_> {
        CompaniesBuilder::new(self)
    }

    /// Builder for the user holdings collection.
    pub fn investments(&self) -> InvestmentsBuilder<'_> {
        InvestmentsBuilder::new(self)
    }

    /// Builder for a full export run.
    pub fn export(&self) -> ExportBuilder<'_> {
        ExportBuilder::new(self)
    }
}
