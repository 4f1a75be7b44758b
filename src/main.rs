use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bet_dashboard::api::HttpApi;
use bet_dashboard::auth::SharedToken;
use bet_dashboard::config::Config;
use bet_dashboard::notice::StderrNotifier;
use bet_dashboard::Dashboard;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging with tracing
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    info!(api_url = %config.api_url, timezone = config.timezone.name(), "Mounting dashboard");

    let api = HttpApi::new(config.api_url.clone());
    let auth = SharedToken::new(config.token.clone());
    let mut dashboard = Dashboard::mount(api, auth, StderrNotifier);
    dashboard.run_until_idle().await;

    if let Some(game_id) = config.filter_game_id {
        dashboard.select(game_id);
        dashboard.run_until_idle().await;
    }

    print!("{}", dashboard.view().render_text(config.timezone));
    Ok(())
}
