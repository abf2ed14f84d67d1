use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use vitrine::core::config;

#[derive(Parser)]
#[command(name = "vitrine", about = "Terminal product catalog browser")]
struct Args {
    /// Base URL of the catalog API
    #[arg(short, long)]
    base_url: Option<String>,

    /// Path to a config file (defaults to ~/.vitrine/config.toml)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to vitrine.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("vitrine.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("Vitrine starting up against {}", resolved.base_url);

    vitrine::tui::run(resolved)
}
