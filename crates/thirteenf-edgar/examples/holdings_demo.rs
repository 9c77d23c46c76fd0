//! Walk a filer's 13F filings on EDGAR and print the extracted holdings.
//!
//! Run with: cargo run -p thirteenf-edgar --example holdings_demo -- 0001166559

use thirteenf_edgar::{
    EdgarConfig, HttpFetcher, INFORMATION_TABLE_HEADER, Identifier, Report, ResultWalker,
    WalkerConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "0001166559".to_string());
    let identifier = Identifier::parse(&raw)?;

    let edgar = EdgarConfig::default();
    let config = WalkerConfig {
        max_records: 10,
        ..WalkerConfig::default()
    };
    let walker = ResultWalker::new(HttpFetcher::new(&edgar)?, edgar, config);

    println!("Fetching 13F information tables for CIK {identifier}...");
    let reports = walker.holdings(&identifier).await?;

    for report in &reports {
        if let Report::Holdings(holdings) = report {
            println!(
                "\n{} filed {} ({} holdings)",
                holdings.filing_type,
                holdings.filing_date,
                holdings.rows.len()
            );
            println!("{}", INFORMATION_TABLE_HEADER.join("\t"));
            print!("{}", holdings.to_block());
        }
    }

    Ok(())
}
