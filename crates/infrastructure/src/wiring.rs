//! Service construction from an [`AppConfig`]
//!
//! Binaries call these once at startup; a configuration problem surfaces
//! here, before any workflow runs.

use std::sync::Arc;

use application::{
    DraftingAgent, EncyclopediaSource, InferencePort, PreprintSource, ResearchAggregator,
    ResearchSource, StructuringAgent, WeatherService, WebSearchSource, WorkflowService,
    error::ApplicationError,
};
use domain::SourceKind;
use tracing::info;

use crate::{
    adapters::{
        ArxivAdapter, GeminiInferenceAdapter, WeatherAdapter, WebSearchAdapter, WikipediaAdapter,
    },
    config::{AppConfig, ConfigError},
};

fn startup(component: &'static str) -> impl FnOnce(ApplicationError) -> ConfigError {
    move |e| ConfigError::Startup {
        component,
        message: e.to_string(),
    }
}

/// Build the research source for `kind` from its client settings
fn build_source(
    config: &AppConfig,
    kind: SourceKind,
) -> Result<Arc<dyn ResearchSource>, ConfigError> {
    let source: Arc<dyn ResearchSource> = match kind {
        SourceKind::WebSearch => {
            let adapter = WebSearchAdapter::new(config.websearch.to_websearch_config())
                .map_err(startup("web search"))?;
            Arc::new(WebSearchSource::new(
                Arc::new(adapter),
                config.websearch.max_results,
            ))
        },
        SourceKind::Encyclopedia => {
            let adapter =
                WikipediaAdapter::new(config.wikipedia.clone()).map_err(startup("wikipedia"))?;
            Arc::new(EncyclopediaSource::new(
                Arc::new(adapter),
                config.wikipedia.top_k,
                config.wikipedia.max_chars,
            ))
        },
        SourceKind::Preprints => {
            let adapter = ArxivAdapter::new(config.arxiv.clone()).map_err(startup("arxiv"))?;
            Arc::new(PreprintSource::new(
                Arc::new(adapter),
                config.arxiv.max_results,
                config.arxiv.max_chars,
            ))
        },
    };
    Ok(source)
}

/// Build the research workflow: enabled sources, then the two model stages
///
/// Validates the configuration first, so a missing API key fails here with
/// [`ConfigError::MissingApiKey`].
pub fn build_workflow_service(config: &AppConfig) -> Result<WorkflowService, ConfigError> {
    config.validate()?;

    let inference: Arc<dyn InferencePort> = Arc::new(
        GeminiInferenceAdapter::new(
            config.inference.to_inference_config(),
            config.api_key()?.clone(),
        )
        .map_err(startup("inference"))?,
    );

    let mut aggregator = ResearchAggregator::new();
    for kind in SourceKind::ALL {
        if !config.research.is_enabled(kind) {
            info!(source = kind.label(), "Research source disabled");
            continue;
        }
        let policy = config.research.policy(kind);
        aggregator = aggregator.with_source(build_source(config, kind)?, policy);
        info!(source = kind.label(), ?policy, "Research source enabled");
    }

    info!(
        sources = aggregator.source_count(),
        model = %inference.current_model(),
        "Research workflow ready"
    );

    Ok(WorkflowService::new(
        aggregator,
        StructuringAgent::new(Arc::clone(&inference)),
        DraftingAgent::new(inference),
    ))
}

/// Build the weather lookup service; it needs no API key
pub fn build_weather_service(config: &AppConfig) -> Result<WeatherService, ConfigError> {
    let adapter = WeatherAdapter::new(config.weather.clone()).map_err(startup("weather"))?;
    Ok(WeatherService::new(Arc::new(adapter)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_requires_api_key() {
        let mut config = AppConfig::for_testing("http://localhost:1");
        config.inference.api_key = None;
        assert!(matches!(
            build_workflow_service(&config),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn workflow_builds_from_testing_config() {
        let config = AppConfig::for_testing("http://localhost:1");
        assert!(build_workflow_service(&config).is_ok());
    }

    #[test]
    fn weather_service_builds_without_api_key() {
        let mut config = AppConfig::for_testing("http://localhost:1");
        config.inference.api_key = None;
        assert!(build_weather_service(&config).is_ok());
    }
}
