use clap::Parser;
use infrastructure::config::Config;
use presentation::cli::{Cli, CliApp};

#[tokio::main]
async fn main() -> shared::types::Result<()> {
    // Loads .env before the log filter is read.
    let config = Config::load();
    shared::logging::init("warn");

    let cli = Cli::parse();
    let mut app = CliApp::new(config);
    app.run(cli).await
}
