use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::HarvestConfig;
use crate::contact::{dedupe, ContactRecord};
use crate::enrich::{EntityEnricher, EntityRecognizer};
use crate::error::{Error, Result};
use crate::extract::CompositeExtractor;
use crate::resolve::{HttpFetcher, PageFetcher, SourceDescriptor, SourceKind, SourceResolver};

/// Body of an extraction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub source: String,
    #[serde(rename = "type", default)]
    pub kind: SourceKind,
    /// Drop repeated `(type, value)` pairs after extraction.
    #[serde(default)]
    pub dedupe: bool,
}

impl ExtractionRequest {
    pub fn text(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: SourceKind::Text,
            dedupe: false,
        }
    }

    pub fn url(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: SourceKind::Url,
            dedupe: false,
        }
    }

    #[must_use]
    pub const fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor {
            source: self.source.clone(),
            kind: self.kind,
        }
    }
}

/// Resolver, extractors and enricher wired together.
///
/// Built once at startup and shared between requests; nothing in it is
/// mutated while serving.
pub struct ExtractionPipeline {
    resolver: SourceResolver,
    extractor: CompositeExtractor,
    enricher: EntityEnricher,
}

impl ExtractionPipeline {
    pub fn new(
        resolver: SourceResolver,
        extractor: CompositeExtractor,
        enricher: EntityEnricher,
    ) -> Self {
        Self {
            resolver,
            extractor,
            enricher,
        }
    }

    /// Default extractors and an HTTP fetcher built from `config`.
    pub fn from_config(
        config: HarvestConfig,
        recognizer: Arc<dyn EntityRecognizer>,
    ) -> Result<Self> {
        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new(&config)?);
        Self::with_fetcher(config, fetcher, recognizer)
    }

    pub fn with_fetcher(
        config: HarvestConfig,
        fetcher: Arc<dyn PageFetcher>,
        recognizer: Arc<dyn EntityRecognizer>,
    ) -> Result<Self> {
        Ok(Self::new(
            SourceResolver::new(fetcher, config),
            CompositeExtractor::with_default_extractors()?,
            EntityEnricher::new(recognizer),
        ))
    }

    pub async fn run(&self, request: &ExtractionRequest) -> Result<Vec<ContactRecord>> {
        if request.source.is_empty() {
            return Err(Error::EmptySource);
        }

        let resolution = self.resolver.resolve(&request.descriptor()).await?;

        if let Some(records) = resolution.short_circuit {
            tracing::info!(count = records.len(), "returning short-circuit records");
            return Ok(records);
        }

        let text = resolution.plain_text;
        let candidates = self.extractor.extract(&text, resolution.source_id.as_deref());

        let records = if candidates.is_empty() {
            candidates
        } else {
            self.enricher.enrich(&text, candidates).await
        };

        let records = if request.dedupe { dedupe(records) } else { records };

        tracing::info!(
            kind = ?request.kind,
            count = records.len(),
            "extraction complete"
        );

        Ok(records)
    }
}
