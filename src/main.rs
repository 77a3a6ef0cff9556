use std::sync::Arc;
use std::time::Duration;

use jarvis_backend::app;
use jarvis_backend::config::{self, Config, env_file};
use jarvis_backend::consts::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, SERVER_HOST, SERVER_PORT};
use jarvis_backend::context::AssistantContext;
use jarvis_backend::dispatcher::Dispatcher;
use jarvis_backend::speech::{CommandSpeaker, Speaker};
use jarvis_backend::system::Platform;

fn main() -> std::io::Result<()> {
    // The env file must be applied before any thread exists.
    let env_path = env_file::default_env_path();
    let env_loaded = env_path.as_deref().map(env_file::load_env_file);

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing Jarvis backend...");

    match (env_path, env_loaded) {
        (Some(path), Some(Ok(count))) => {
            log::debug!("loaded {} variables from {}", count, path.display())
        }
        (Some(path), Some(Err(e))) => log::warn!("could not read {}: {}", path.display(), e),
        _ => {}
    }

    let config = config::load_config().expect("Failed to load config");
    if config.gemini_api_key.is_none() {
        log::warn!("GEMINI_API_KEY missing. Edit .env to add it.");
    }

    actix_web::rt::System::new().block_on(run(config))
}

async fn run(config: Config) -> std::io::Result<()> {
    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .read_timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .build()
        .map_err(std::io::Error::other)?;

    let context = AssistantContext::from_config(http_client, &config);
    let dispatcher = Arc::new(Dispatcher::new(context).map_err(std::io::Error::other)?);
    let speaker: Arc<dyn Speaker> =
        Arc::new(CommandSpeaker::new(Platform::current(), config.speech_rate));

    let app_factory = move || app::create_app(dispatcher.clone(), speaker.clone());

    log::info!(
        "Jarvis backend listening on http://{}:{}",
        SERVER_HOST,
        SERVER_PORT
    );

    actix_web::HttpServer::new(app_factory)
        .workers(1)
        .bind((SERVER_HOST, SERVER_PORT))?
        .run()
        .await
}
