//! thirteenf CLI binary.
//!
//! Pulls 13F holdings (or the plain filing list) for a CIK from SEC EDGAR into
//! a tab-separated file. Values missing from the command line are asked for on
//! the terminal.

mod terminal;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::process;
use std::time::Duration;
use terminal::{Terminal, TerminalPrompt};
use thirteenf::edgar::config::{DEFAULT_FILING_PREFIX, DEFAULT_RESULT_COUNT, USER_AGENT};
use thirteenf::edgar::{
    EdgarConfig, HttpFetcher, Identifier, PageFetcher, ResultWalker, WalkerConfig,
};
use thirteenf::output::{ArtifactWriter, Prompt, ScriptedPrompt, WriteOutcome, reports_to_json};
use thirteenf::{Mode, collect};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "thirteenf")]
#[command(about = "Extract 13F holdings from SEC EDGAR into TSV files", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the information tables of a filer's 13F filings
    Holdings {
        #[command(flatten)]
        common: CommonArgs,

        /// Filing type prefix to descend into (case-sensitive)
        #[arg(long, default_value = DEFAULT_FILING_PREFIX)]
        prefix: String,
    },

    /// Export a filer's filing list, keeping the given filing types
    Filings {
        #[command(flatten)]
        common: CommonArgs,

        /// Filing type prefix to keep (case-insensitive, repeatable)
        #[arg(short = 't', long = "filing-type")]
        filing_types: Vec<String>,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// CIK of the filer (digits only)
    cik: Option<String>,

    /// Output file name without extension
    #[arg(short, long)]
    output: Option<String>,

    /// Number of search results to request and walk
    #[arg(long, default_value_t = DEFAULT_RESULT_COUNT)]
    count: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "3")]
    timeout_secs: u64,

    /// User-Agent sent to EDGAR (SEC asks for contact details)
    #[arg(long, default_value = USER_AGENT)]
    user_agent: String,

    /// What to do when the output file already exists
    #[arg(long, value_enum, default_value_t = ConflictPolicy::Ask)]
    on_conflict: ConflictPolicy,

    /// Print the reports as JSON instead of writing a file
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ConflictPolicy {
    /// Ask on the terminal
    Ask,
    /// Replace the existing file
    Overwrite,
    /// Add lines to the existing file
    Append,
    /// Leave the existing file alone
    Keep,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = TerminalPrompt;

    let (common, mode, prefix, filing_types) = match cli.command {
        Commands::Holdings { common, prefix } => (common, Mode::Holdings, prefix, Vec::new()),
        Commands::Filings {
            common,
            filing_types,
        } => (
            common,
            Mode::Filings,
            DEFAULT_FILING_PREFIX.to_string(),
            filing_types,
        ),
    };

    let raw = match &common.cik {
        Some(cik) => cik.clone(),
        None => terminal.ask("Enter ticker or CIK: ")?,
    };
    // Reject bad input before asking anything else.
    let identifier = Identifier::parse(&raw)?;

    let edgar = EdgarConfig {
        timeout: Duration::from_secs(common.timeout_secs),
        user_agent: common.user_agent.clone(),
        ..EdgarConfig::default()
    };
    let config = WalkerConfig {
        max_records: common.count,
        filing_prefix: prefix,
        ..WalkerConfig::default()
    };
    let walker = ResultWalker::new(HttpFetcher::new(&edgar)?, edgar, config);

    let outcome =
        fetch_and_write(&walker, &identifier, mode, &common, filing_types, &mut terminal).await?;
    match outcome {
        Some(WriteOutcome::Written {
            path,
            mode,
            records,
        }) => println!("Wrote {} lines to \"{}\" ({:?})", records, path.display(), mode),
        Some(WriteOutcome::Unchanged { path }) => {
            println!("The file \"{}\" was not changed.", path.display())
        }
        None => {}
    }

    Ok(())
}

/// Walk EDGAR for `identifier`, then ask for whatever the command line left
/// out and write the artifact.
///
/// Every page is fetched before the first question, so an unknown CIK fails
/// without asking anything. Returns `None` when the reports were printed as
/// JSON instead.
async fn fetch_and_write<F: PageFetcher, T: Terminal>(
    walker: &ResultWalker<F>,
    identifier: &Identifier,
    mode: Mode,
    common: &CommonArgs,
    filing_types: Vec<String>,
    terminal: &mut T,
) -> Result<Option<WriteOutcome>, Box<dyn std::error::Error>> {
    let reports = collect(walker, identifier.as_str(), mode).await?;

    if common.json {
        println!("{}", reports_to_json(&reports, true)?);
        return Ok(None);
    }

    let writer = match mode {
        Mode::Holdings => ArtifactWriter::holdings(output_name(common, terminal)?),
        Mode::Filings => {
            let filing_types = if filing_types.is_empty() {
                terminal.ask_filing_types()?
            } else {
                filing_types
            };
            ArtifactWriter::filings(output_name(common, terminal)?, filing_types)
        }
    };
    info!(
        path = %writer.path().display(),
        on_conflict = ?common.on_conflict,
        reports = reports.len(),
        "writing artifact"
    );

    let mut prompt: Box<dyn Prompt + '_> = match common.on_conflict {
        ConflictPolicy::Ask => Box::new(terminal),
        ConflictPolicy::Overwrite => Box::new(ScriptedPrompt::new([true])),
        ConflictPolicy::Append => Box::new(ScriptedPrompt::new([false, true])),
        ConflictPolicy::Keep => Box::new(ScriptedPrompt::default()),
    };

    Ok(Some(writer.write(&reports, &mut *prompt)?))
}

fn output_name<T: Terminal>(common: &CommonArgs, terminal: &mut T) -> std::io::Result<String> {
    match &common.output {
        Some(name) => Ok(name.clone()),
        None => terminal.ask("Enter the filename (without file extension) to put the data in: "),
    }
}
