use anyhow::Result;
use log::LevelFilter;
use opsdesk::config::Config;
use opsdesk::logger::Logger;
use opsdesk::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        Config::generate_default_config(Config::get_default_config_path()?)?;
        return Ok(());
    }

    let config = Config::load()?;

    let logger = Logger::from_config(&config.logging);
    logger.install(LevelFilter::Debug)?;

    ui::run_app(config, logger).await?;

    Ok(())
}
