mod agent;
mod api;
mod llm;
mod server;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use replyguy::config::AppConfig;
use replyguy::scoring::{potential_score, viral_potential};
use replyguy::EngagementMetrics;

#[derive(Parser)]
#[command(name = "replyguy", about = "Viral tweet finder and reply generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Serve(ServeArgs),
    Score(ScoreArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8000)]
    port: u16,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct ScoreArgs {
    #[arg(long, default_value_t = 0)]
    likes: u64,
    #[arg(long, default_value_t = 0)]
    replies: u64,
    #[arg(long, default_value_t = 0)]
    retweets: u64,
    #[arg(long, default_value_t = 0)]
    views: u64,
    #[arg(long, default_value = "just now")]
    timestamp: String,
    #[arg(long)]
    verified: bool,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => {
            let (config, _) = AppConfig::load(args.config.clone())?;
            server::serve(args, config).await
        }
        Command::Score(args) => run_score(args),
    }
}

fn run_score(args: ScoreArgs) -> Result<(), String> {
    let (config, _) = AppConfig::load(args.config)?;
    let metrics = EngagementMetrics {
        likes: args.likes,
        replies: args.replies,
        retweets: args.retweets,
        views: args.views,
    };

    let normalized = viral_potential(&metrics, &args.timestamp, args.verified, &config.viral);
    let integer = potential_score(&metrics, &args.timestamp, args.verified, &config.potential);

    println!("Viral potential (normalized): {:.3}", normalized);
    println!("Viral potential (0-100): {}", integer);
    println!(
        "Weighted engagement: {} over {} views",
        metrics.weighted_engagement(),
        metrics.views
    );

    Ok(())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
