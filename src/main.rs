use animerec::report::{render, OutputFormat};
use animerec::{CsvOptions, EngineConfig, RecommendationEngine, DEFAULT_K};
use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Recommend anime with similar score, rank, popularity and member count
#[derive(Parser, Debug)]
#[command(name = "animerec")]
#[command(about = "Nearest-neighbor anime recommendations from a CSV dataset", long_about = None)]
struct Args {
    /// Path to the CSV dataset
    #[arg(short, long, default_value = "processed_anime_dataset.csv")]
    data: PathBuf,

    /// Title to find recommendations for (repeatable)
    #[arg(short, long = "title", default_value = "Bouken Ou Beet")]
    titles: Vec<String>,

    /// Number of recommendations per title
    #[arg(short, default_value_t = DEFAULT_K)]
    k: usize,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Field delimiter of the dataset
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // RUST_LOG, when set, takes precedence over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", args.delimiter);
    }

    info!("Starting animerec v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.data);

    let config = EngineConfig {
        csv: CsvOptions {
            delimiter: args.delimiter as u8,
        },
        k: args.k,
    };
    let engine = RecommendationEngine::open(&args.data, config)
        .with_context(|| format!("could not prepare recommendations from {}", args.data.display()))?;

    let mut failed = 0usize;
    for title in &args.titles {
        match engine.recommend_default(title) {
            Ok(results) => {
                println!("{}", render(title, &results, args.format)?);
            }
            Err(e) => {
                error!(title = %title, kind = ?e.kind(), "{}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} queries failed", failed, args.titles.len());
    }
    Ok(())
}
