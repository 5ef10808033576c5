//! Application state wiring all services together.
//!
//! AppState pins the core generics to the concrete infra implementations:
//! the SQLite connector behind the session orchestrator, the whatlang
//! detector behind the query router, and configured LLM providers behind the
//! agent, formatter, and generation dispatcher.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::Mutex;

use parlance_core::agent::SqlAgent;
use parlance_core::chat::{ResponseFormatter, SessionOrchestrator};
use parlance_core::llm::box_provider::BoxLlmProvider;
use parlance_core::router::{GenerationDispatcher, QueryRouter};
use parlance_infra::config::{load_global_config, resolve_data_dir};
use parlance_infra::detect::WhatlangDetector;
use parlance_infra::llm::{create_provider, resolve_api_key};
use parlance_infra::sqlite::SqliteConnector;
use parlance_types::config::GlobalConfig;
use parlance_types::llm::ProviderConfig;
use parlance_types::routing::ModelLabel;

/// Concrete session type: core orchestrator over the SQLite connector.
pub type ConcreteSession = SessionOrchestrator<SqliteConnector>;

/// Shared application state holding the session and the ask pipeline.
///
/// The session lives behind a mutex: chat requests serialize on it, which is
/// the explicit equivalent of a UI framework running one callback at a time.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<ConcreteSession>>,
    pub router: Arc<QueryRouter<WhatlangDetector>>,
    pub dispatcher: Arc<GenerationDispatcher>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config, wire providers.
    ///
    /// Fails fast when a configured provider has no API key in its
    /// environment variable; a server that cannot call any backend is not
    /// worth starting.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;
        let deadline = Duration::from_secs(config.request_timeout_secs);

        let agent_provider = build_provider(&config.agent)?;
        let formatter_provider = build_provider(&config.formatter)?;

        let session = SessionOrchestrator::new(
            SqliteConnector::new(data_dir.clone()),
            SqlAgent::new(agent_provider, deadline),
            ResponseFormatter::new(formatter_provider, deadline),
        );

        let dispatcher = GenerationDispatcher::new(deadline)
            .register(
                ModelLabel::Instruct,
                build_provider(&config.generation.instruct)?,
            )
            .register(
                ModelLabel::Polyglot,
                build_provider(&config.generation.polyglot)?,
            )
            .register(ModelLabel::Chat, build_provider(&config.generation.chat)?);
        debug_assert!(dispatcher.is_fully_wired());

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            router: Arc::new(QueryRouter::new(WhatlangDetector::new())),
            dispatcher: Arc::new(dispatcher),
            config: Arc::new(config),
            data_dir,
        })
    }
}

/// Construct one provider from config, resolving its API key from the
/// environment.
fn build_provider(config: &ProviderConfig) -> anyhow::Result<BoxLlmProvider> {
    let api_key = resolve_api_key(config);
    create_provider(config, api_key.as_deref()).with_context(|| {
        format!(
            "failed to build provider '{}' (model {}, key env {})",
            config.name,
            config.model,
            config.api_key_env.as_deref().unwrap_or("<none>")
        )
    })
}
