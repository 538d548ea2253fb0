use serde::Serialize;

use super::generate::{CsvOptions, generate_holdings_csv_with};
use super::ExportResult;
use crate::companies::{CompaniesBuilder, CompanyIndex};
use crate::core::{ExportClient, ExportError, net};
use crate::investments::InvestmentsBuilder;

#[derive(Serialize)]
struct ExportPayload<'a> {
    csv: &'a str,
}

pub(super) async fn run_export(
    client: &ExportClient,
    options: &CsvOptions,
    submit: bool,
) -> Result<ExportResult, ExportError> {
    let companies_req = CompaniesBuilder::new(client);
    let investments_req = InvestmentsBuilder::new(client);

    // Independent reads; the first failure drops the other future.
    let (companies, users) = tokio::try_join!(companies_req.fetch(), investments_req.fetch())?;

    let index = CompanyIndex::from_companies(&companies);
    let csv = generate_holdings_csv_with(&users, &index, options)?;
    let line_count = users.iter().map(|u| u.holdings.len()).sum();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        companies = index.len(),
        users = users.len(),
        lines = line_count,
        "generated holdings csv"
    );

    if submit {
        submit_export(client, &csv).await?;
    }

    Ok(ExportResult { csv, line_count })
}

pub(super) async fn submit_export(client: &ExportClient, csv: &str) -> Result<(), ExportError> {
    net::post_json(client, client.export_url(), &ExportPayload { csv }).await
}
