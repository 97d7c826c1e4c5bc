use clap::Parser;
use trivia_api::config::Settings;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on, overrides BIND_ADDR
    #[clap(long)]
    bind: Option<String>,
    /// SQLite database file, overrides DB_PATH
    #[clap(long)]
    db_path: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut settings = Settings::from_env()?;
    if let Some(bind) = cli.bind {
        settings.bind_addr = bind;
    }
    if let Some(db_path) = cli.db_path {
        settings.db_path = db_path;
    }

    let pool = establish_connection(&settings.db_path).await?;

    tracing::info!("Running db migrations...");
    run_migrations(&pool).await?;

    run_server(pool, &settings.bind_addr).await
}
