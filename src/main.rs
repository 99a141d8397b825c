use std::path::PathBuf;
use clap::Parser;
use ggez::{GameError, GameResult};
use brandscroll::config::PageConfig;

#[derive(Parser, Debug)]
#[command(name = "brandscroll", about = "Scroll-driven brand guidelines page viewer")]
struct Args {
    /// TOML page config, built-in brand page when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<f32>,

    #[arg(long)]
    height: Option<f32>,
}

fn main() -> GameResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PageConfig::load(path).map_err(|e| GameError::ConfigError(e.to_string()))?,
        None => PageConfig::default(),
    };
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }

    brandscroll::run(config)
}
