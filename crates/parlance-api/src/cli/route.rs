//! `parlance route` -- offline routing decisions.
//!
//! Routing is pure rule evaluation over the detected language, so it needs
//! no API keys and no providers; useful for checking where a query would
//! land before spending tokens.

use parlance_core::router::QueryRouter;
use parlance_infra::detect::WhatlangDetector;

/// Print the routing decision for one query.
pub fn route(query: &str, json: bool) -> anyhow::Result<()> {
    let router = QueryRouter::new(WhatlangDetector::new());
    let decision = router.route(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!();
        println!(
            "  {} {}",
            console::style("query:").dim(),
            console::style(query).cyan()
        );
        println!(
            "  {} {}",
            console::style("language:").dim(),
            decision.language
        );
        println!("  {} {}", console::style("rule:").dim(), decision.rule);
        println!(
            "  {} {}",
            console::style("model:").dim(),
            console::style(decision.label).green().bold()
        );
        println!();
    }

    Ok(())
}
