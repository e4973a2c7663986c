use anyhow::Result;

use crate::browser::ClientPage;

mod code_entry;
mod routes;

pub use code_entry::{EmptyCodeScenario, JoinGameScenario, RetryScenario, SmokeScenario};
pub use routes::{AdminRouteScenario, DirectLinkScenario, NotFoundScenario};

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub page: ClientPage<'a>,
    /// Game code under test; empty for scenarios that don't take one.
    pub code: String,
    pub verbose: bool,
}

/// A named check that runs against the client library (logic) and a live deployment (browser).
#[async_trait::async_trait]
pub trait Scenario: Send + Sync {
    fn key(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Scenarios that take a game code run once per `--codes` entry.
    fn uses_code(&self) -> bool {
        false
    }

    fn run_logic(&self, code: &str) -> Result<()>;

    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

pub fn all_scenarios() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(SmokeScenario),
        Box::new(EmptyCodeScenario),
        Box::new(JoinGameScenario),
        Box::new(RetryScenario),
        Box::new(DirectLinkScenario),
        Box::new(AdminRouteScenario),
        Box::new(NotFoundScenario),
    ]
}

pub fn get_scenario(key: &str) -> Option<Box<dyn Scenario>> {
    all_scenarios().into_iter().find(|s| s.key() == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    all_scenarios()
        .iter()
        .map(|s| (s.key(), s.description()))
        .collect()
}

/// Expand `all` into every catalog key, keeping any explicitly named ones.
pub fn expand_scenarios(keys: &[String]) -> Vec<String> {
    let mut expanded: Vec<String> = keys.iter().filter(|k| *k != "all").cloned().collect();
    if keys.iter().any(|k| k == "all") {
        for (key, _) in list_scenarios() {
            if !expanded.iter().any(|k| k == key) {
                expanded.push(key.to_string());
            }
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keys_are_unique() {
        let keys: Vec<_> = list_scenarios().into_iter().map(|(k, _)| k).collect();
        let mut deduped = keys.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }

    #[test]
    fn get_scenario_finds_by_key() {
        assert_eq!(get_scenario("smoke").map(|s| s.key()), Some("smoke"));
        assert!(get_scenario("missing").is_none());
    }

    #[test]
    fn expand_all_appends_catalog_once() {
        let expanded = expand_scenarios(&["not-found".to_string(), "all".to_string()]);
        assert_eq!(expanded.first().map(String::as_str), Some("not-found"));
        assert_eq!(expanded.len(), list_scenarios().len());
    }

    #[test]
    fn every_scenario_passes_logic_with_a_plain_code() {
        buzzer_web::i18n::set_lang("en");
        for scenario in all_scenarios() {
            scenario
                .run_logic("abc123")
                .unwrap_or_else(|e| panic!("{} failed: {e:#}", scenario.key()));
        }
    }
}
