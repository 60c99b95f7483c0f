pub mod error;
pub mod model;
pub mod service;

pub use error::WordServiceError;
pub use model::{ExampleSentence, WordDefinition};
pub use service::{IngestReport, WordService, WordServiceApi};
