pub mod error;
pub mod model;
pub mod service;

pub use error::WordListServiceError;
pub use model::WordList;
pub use service::{WordListService, WordListServiceApi};
