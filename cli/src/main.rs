mod render;
mod source;

use clap::{Parser, Subcommand};
use rubric::{Language, RubricError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] RubricError),
    #[error("unknown language `{0}`; expected zh or en")]
    InvalidLanguage(String),
}

#[derive(Parser, Debug)]
#[command(name = "acw", about = "Print the AI Consciousness Watch rubric in a terminal")]
struct Cli {
    /// URL or file path of the rubric JSON.
    #[arg(long, env = "ACW_SOURCE", default_value = source::DEFAULT_SOURCE)]
    source: String,

    #[arg(long, env = "ACW_LANG", default_value = "zh")]
    lang: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Overall score and per-level breakdown.
    Summary,
    /// Every cited paper grouped by metric.
    Papers,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("acw: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let lang = Language::from_code(&cli.lang).ok_or_else(|| CliError::InvalidLanguage(cli.lang.clone()))?;
    let doc = source::load(&cli.source).await?;
    let out = match cli.command {
        Command::Summary => render::summary(&doc, lang),
        Command::Papers => render::papers(&doc, lang),
    };
    print!("{out}");
    Ok(())
}
