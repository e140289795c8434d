use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use draftkit::{init_logging, load_script, parse_script, LogFormat, Replay, WorkspaceConfig};

#[derive(Parser, Debug)]
#[command(
    name = "draftkit",
    version = draftkit::VERSION,
    about = "Replay workspace events and print the resulting view as JSON"
)]
struct Cli {
    /// Event script (JSON array); read from stdin when omitted
    script: Option<PathBuf>,

    /// Workspace config (.toml or .json); defaults to the platform config dir
    #[arg(long, env = "DRAFTKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    })?;
    tracing::info!("draftkit {} (built {})", draftkit::VERSION, draftkit::BUILD_DATE);

    let config = match &cli.config {
        Some(path) => WorkspaceConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => match WorkspaceConfig::default_path() {
            Ok(path) => WorkspaceConfig::load_or_default(&path)
                .with_context(|| format!("loading config {}", path.display()))?,
            Err(e) => {
                tracing::warn!("{}; using default config", e);
                WorkspaceConfig::default()
            }
        },
    };

    let events = match &cli.script {
        Some(path) => load_script(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading script from stdin")?;
            parse_script(&input).context("parsing script from stdin")?
        }
    };

    let mut replay = Replay::new(config);
    replay.run(events)?;

    println!("{}", serde_json::to_string_pretty(&replay.view())?);
    Ok(())
}
