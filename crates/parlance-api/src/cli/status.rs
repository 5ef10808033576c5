//! `parlance status` -- configuration and provider readiness.
//!
//! Reads the config and checks whether each provider's API key environment
//! variable is set. With `--check`, additionally constructs each provider
//! and sends a minimal completion to verify the key and endpoint work.

use parlance_infra::config::{load_global_config, resolve_data_dir};
use parlance_infra::llm::{create_provider, resolve_api_key, test_provider_connection};
use parlance_types::llm::ProviderConfig;

/// Outcome of inspecting one configured provider.
struct ProviderStatus {
    role: &'static str,
    name: String,
    model: String,
    key_env: Option<String>,
    key_available: bool,
    /// None when `--check` was not requested.
    reachable: Option<Result<(), String>>,
}

/// Show the data directory, configured providers, and key availability.
pub async fn status(check: bool, json: bool) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir();
    let config = load_global_config(&data_dir).await;

    let providers: [(&'static str, &ProviderConfig); 5] = [
        ("agent", &config.agent),
        ("formatter", &config.formatter),
        ("generation.instruct", &config.generation.instruct),
        ("generation.polyglot", &config.generation.polyglot),
        ("generation.chat", &config.generation.chat),
    ];

    let mut statuses = Vec::with_capacity(providers.len());
    for (role, provider_config) in providers {
        let api_key = resolve_api_key(provider_config);
        let reachable = if check {
            Some(probe_provider(provider_config, api_key.as_deref()).await)
        } else {
            None
        };
        statuses.push(ProviderStatus {
            role,
            name: provider_config.name.clone(),
            model: provider_config.model.clone(),
            key_env: provider_config.api_key_env.clone(),
            key_available: api_key.is_some(),
            reachable,
        });
    }

    if json {
        let entries: Vec<serde_json::Value> = statuses
            .iter()
            .map(|s| {
                serde_json::json!({
                    "role": s.role,
                    "provider": s.name,
                    "model": s.model,
                    "key_env": s.key_env,
                    "key_available": s.key_available,
                    "reachable": s.reachable.as_ref().map(|r| r.is_ok()),
                    "error": s.reachable.as_ref().and_then(|r| r.as_ref().err().cloned()),
                })
            })
            .collect();
        let summary = serde_json::json!({
            "data_dir": data_dir.display().to_string(),
            "request_timeout_secs": config.request_timeout_secs,
            "providers": entries,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let check_mark = |ok: bool| {
        if ok {
            format!("{}", console::style("✓").green())
        } else {
            format!("{}", console::style("✗").red())
        }
    };

    println!();
    println!(
        "  {} {}",
        console::style("data dir:").dim(),
        data_dir.display()
    );
    println!(
        "  {} {}s",
        console::style("request timeout:").dim(),
        config.request_timeout_secs
    );
    println!();
    for s in &statuses {
        println!(
            "  {} {}: {}/{} (key: {})",
            check_mark(s.key_available),
            s.role,
            s.name,
            s.model,
            s.key_env.as_deref().unwrap_or("<none>"),
        );
        match &s.reachable {
            Some(Ok(())) => println!("      {} reachable", check_mark(true)),
            Some(Err(err)) => println!("      {} {}", check_mark(false), err),
            None => {}
        }
    }
    println!();

    Ok(())
}

/// Construct the provider and send a minimal completion through it.
async fn probe_provider(
    config: &ProviderConfig,
    api_key: Option<&str>,
) -> Result<(), String> {
    let provider = create_provider(config, api_key).map_err(|e| e.to_string())?;
    test_provider_connection(&provider)
        .await
        .map_err(|e| e.to_string())
}
