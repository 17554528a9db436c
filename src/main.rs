use aula::cli::{Cli, run};
use aula::logging::init_logging;
use aula_config::LoggingConfig;
use clap::Parser;
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    init_logging(&LoggingConfig::from_env());

    run(cli).await
}
