use holdings_export::{CSV_CONTENT_TYPE, CsvOptions, ExportClient, Quoting, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // INVESTMENTS_SERVICE_URL / FINANCIAL_COMPANIES_URL / PORT
    let config = ServiceConfig::from_env()?;
    let client = ExportClient::from_config(&config)?;

    let dry_run = std::env::args().any(|a| a == "--dry-run");
    let result = client
        .export()
        .submit(!dry_run)
        .options(CsvOptions {
            quoting: Quoting::Never,
            ..CsvOptions::default()
        })
        .run()
        .await?;

    eprintln!("Content-Type: {CSV_CONTENT_TYPE} ({} lines)", result.line_count);
    println!("{}", result.csv);
    Ok(())
}
