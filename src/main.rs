use iced::Application;
use sinergia_portal::client::config::ClientConfig;
use sinergia_portal::client::gui::app::{PortalApp, PortalFlags};
use sinergia_portal::client::services::api_client::ApiClient;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();

    let config = ClientConfig::from_env();
    log::info!("[PORTAL] starting, backend at {}", config.api_base_url);
    let api = ApiClient::new(&config)?;

    PortalApp::run(iced::Settings::with_flags(PortalFlags { config, api }))?;
    Ok(())
}
