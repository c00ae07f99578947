pub mod config;
pub mod contact;
pub mod enrich;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod resolve;

pub use config::HarvestConfig;
pub use contact::{dedupe, ContactKind, ContactRecord, AUTO_EXTRACTED_TAG};
pub use enrich::{
    EntityBucket, EntityCategory, EntityEnricher, EntityRecognizer, EntitySpan, NullRecognizer,
    RecognitionError, RemoteRecognizer,
};
pub use error::{Error, Result};
pub use extract::{
    CompositeExtractor, EmailExtractor, Extractor, PhoneExtractor, Platform, SocialExtractor,
};
pub use pipeline::{ExtractionPipeline, ExtractionRequest};
pub use resolve::{
    FetchError, FetchFailureKind, HttpFetcher, PageFetcher, Resolution, SourceDescriptor,
    SourceKind, SourceResolver,
};
