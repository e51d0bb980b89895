use anyhow::Result;

use app_navigation::Navigation;
use app_navigation::config::Config;

/// Emits the navigation manifest as JSON on stdout for the frontend build.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("app-navigation manifest build starting");

    let config = Config::from_env()?;
    config.log_startup();

    let navigation = Navigation::from_config(&config);
    tracing::info!("Emitting {} navigation links", navigation.links().len());

    println!("{}", serde_json::to_string_pretty(&navigation)?);

    Ok(())
}
