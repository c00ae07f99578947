use std::sync::Arc;
use std::time::Duration;

use harvest_core::{EntityRecognizer, ExtractionPipeline, NullRecognizer, RemoteRecognizer};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ExtractionPipeline>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let recognizer = build_recognizer(config)?;
        let pipeline = ExtractionPipeline::from_config(config.harvest.clone(), recognizer)?;

        Ok(Self::with_pipeline(pipeline))
    }

    pub fn with_pipeline(pipeline: ExtractionPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

fn build_recognizer(config: &ServerConfig) -> anyhow::Result<Arc<dyn EntityRecognizer>> {
    match &config.ner_url {
        Some(url) => {
            tracing::info!("Using NER model at {}", url);
            let timeout = Duration::from_secs(config.ner_timeout_seconds);
            let recognizer = RemoteRecognizer::new(url.clone(), timeout)?;
            Ok(Arc::new(recognizer))
        }
        None => {
            tracing::warn!("HARVEST_NER_URL not set, contacts will not be enriched");
            Ok(Arc::new(NullRecognizer))
        }
    }
}
