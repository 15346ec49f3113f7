use anyhow::Context;
use clap::Parser;
use keysweep::search::{
    run, NoProgress, ProgressBarSink, ProgressSink, SearchConfig, SearchOutcome, SourceMode,
    Verifier,
};
use keysweep::verify::{CommandVerifier, DigestAlgorithm, DigestVerifier};
use keysweep::SearchError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "keysweep")]
#[command(about = "keysweep - dictionary and brute-force search for a secret")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Path to a wordlist, one candidate per line
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Generate candidates from --charset instead of reading a wordlist
    #[arg(short, long)]
    generate: bool,

    /// Characters to brute-force with (order and repeats are kept)
    #[arg(short, long)]
    charset: Option<String>,

    /// Minimum generated length
    #[arg(long, default_value = "4", allow_hyphen_values = true)]
    min_length: i64,

    /// Maximum generated length
    #[arg(long, default_value = "6", allow_hyphen_values = true)]
    max_length: i64,

    /// Number of worker threads
    #[arg(short, long, default_value = "10")]
    threads: usize,

    #[command(flatten)]
    oracle: OracleArgs,

    /// Do not draw a progress bar
    #[arg(long)]
    no_progress: bool,

    /// Enable verbose (debug) logging
    #[arg(long, short)]
    verbose: bool,
}

/// What decides whether a candidate is right
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct OracleArgs {
    /// Hex SHA-256 digest of the secret
    #[arg(long, value_name = "HEX")]
    sha256: Option<String>,

    /// Hex SHA-1 digest of the secret
    #[arg(long, value_name = "HEX")]
    sha1: Option<String>,

    /// Hex MD5 digest of the secret
    #[arg(long, value_name = "HEX")]
    md5: Option<String>,

    /// Program run per candidate; exit 0 means accepted. `{}` in any
    /// argument is replaced by the candidate. Must be the last option.
    #[arg(long, num_args = 1.., value_name = "PROGRAM [ARGS]", allow_hyphen_values = true)]
    exec: Option<Vec<String>>,
}

// --- Setup ---

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "keysweep=debug" } else { "keysweep=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn build_config(args: &Args) -> Result<SearchConfig, SearchError> {
    let mode = if args.generate {
        let charset = args.charset.clone().ok_or_else(|| {
            SearchError::InvalidConfig("--charset is required when using --generate".to_string())
        })?;
        SourceMode::BruteForce {
            alphabet: charset,
            min_length: args.min_length,
            max_length: args.max_length,
        }
    } else if let Some(path) = &args.wordlist {
        SourceMode::Dictionary { path: path.clone() }
    } else {
        return Err(SearchError::InvalidConfig(
            "provide either a wordlist (--wordlist) or --generate with a charset (--charset)"
                .to_string(),
        ));
    };

    let config = SearchConfig::default()
        .with_mode(mode)
        .with_workers(args.threads);
    config.validate()?;
    Ok(config)
}

fn build_verifier(oracle: &OracleArgs) -> Result<Box<dyn Verifier>, SearchError> {
    let digests = [
        (DigestAlgorithm::Sha256, &oracle.sha256),
        (DigestAlgorithm::Sha1, &oracle.sha1),
        (DigestAlgorithm::Md5, &oracle.md5),
    ];
    for (algorithm, target) in digests {
        if let Some(target) = target {
            return Ok(Box::new(DigestVerifier::from_hex(algorithm, target)?));
        }
    }

    match &oracle.exec {
        Some(argv) => Ok(Box::new(CommandVerifier::from_argv(argv)?)),
        None => Err(SearchError::InvalidConfig(
            "no verifier selected (--sha256, --sha1, --md5 or --exec)".to_string(),
        )),
    }
}

fn execute(args: &Args) -> anyhow::Result<SearchOutcome> {
    let config = build_config(args).context("Error in search configuration")?;
    let verifier = build_verifier(&args.oracle).context("Error in verifier configuration")?;

    if let Some(mode) = &config.mode {
        println!("Searching with {} using {} workers", mode, config.worker_count);
    }

    let mut progress: Box<dyn ProgressSink> = if args.no_progress {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressBarSink::new())
    };

    let report = run(&config, verifier.as_ref(), progress.as_mut()).context("Search failed")?;

    eprintln!("\nSearch Statistics:");
    for line in report.statistics.format_summary().lines() {
        eprintln!("  {}", line);
    }

    Ok(report.outcome)
}

// --- Main Function ---
fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match execute(&args) {
        Ok(SearchOutcome::Found(candidate)) => {
            println!("Password found: {}", candidate);
            ExitCode::SUCCESS
        }
        Ok(SearchOutcome::Exhausted) => {
            println!("Password not found.");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
