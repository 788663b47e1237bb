use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_parser::config::Config;
use resume_parser::{Document, ParseError, ResumeParser, ResumeSummary};

#[derive(Parser)]
#[command(name = "resume-parser")]
#[command(about = "Extract structured candidate fields from resume documents")]
struct Args {
    #[arg(required = true, help = "Resume files (.pdf or .txt)")]
    files: Vec<PathBuf>,

    #[arg(long, help = "Emit the categorised view instead of the flat record")]
    grouped: bool,

    #[arg(long, help = "Pretty-print JSON output")]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only JSON.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-parser v{}", env!("CARGO_PKG_VERSION"));

    let parser = ResumeParser::from_config(&config)?;
    info!("Entity annotator backend: {}", parser.annotator_backend());

    let mut failures = 0usize;
    for path in &args.files {
        match parse_file(&parser, path, args.grouped).await {
            Ok(value) => {
                let json = if args.pretty {
                    serde_json::to_string_pretty(&value)?
                } else {
                    serde_json::to_string(&value)?
                };
                println!("{json}");
            }
            Err(e) => {
                error!("Failed to parse {} [{}]: {e}", path.display(), e.code());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} documents failed", args.files.len());
    }
    Ok(())
}

async fn parse_file(
    parser: &ResumeParser,
    path: &Path,
    grouped: bool,
) -> Result<serde_json::Value, ParseError> {
    let document = Document::from_path(path).await?;
    let record = parser.parse(&document).await?;

    let value = if grouped {
        serde_json::to_value(ResumeSummary::new(
            record,
            document.filename.clone(),
            document.size_bytes(),
        ))
    } else {
        serde_json::to_value(&record)
    };
    value.map_err(|e| ParseError::Internal(e.into()))
}
