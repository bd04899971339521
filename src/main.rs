use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use vista::Mode;
use vista::core::config::{self, CliOverrides};
use vista::tui;

#[derive(Parser)]
#[command(name = "vista", about = "Terminal single-page shell with lazily loaded views")]
struct Args {
    /// Location to open first (e.g. /page2)
    path: Option<String>,

    /// Build mode; development enables debug logging
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Base URL serving <chunk>.json view bundles (default: embedded views)
    #[arg(long)]
    chunks_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to vista.log in current directory.
    // Starts verbose; narrowed once the mode is known.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("vista.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let cli = CliOverrides {
        mode: args.mode,
        initial_path: args.path,
        chunks_url: args.chunks_url,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::set_max_level(resolved.mode.log_level());

    log::info!(
        "Vista starting up in {:?} mode at {}",
        resolved.mode,
        resolved.initial_path
    );

    let router = Arc::new(config::build_router(&resolved)?);
    tui::run(resolved, router)?;
    Ok(())
}
