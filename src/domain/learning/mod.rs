pub mod error;
pub mod model;
pub mod service;

pub use error::LearningServiceError;
pub use model::LearningRecord;
pub use service::{LearningService, LearningServiceApi};
