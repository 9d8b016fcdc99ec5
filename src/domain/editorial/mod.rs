pub mod dto;
pub mod duration;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod service;

pub use dto::{AnalyzeRequest, ArticleResponse, DraftResponse, PublishRequest};
pub use duration::estimate_duration_seconds;
pub use error::EditorialServiceError;
pub use model::{Article, Category};
pub use normalizer::{normalize, NormalizedResult, ParseError, ParsePath};
pub use service::{EditorialService, EditorialServiceApi};
