pub mod assistant;

pub use assistant::{TextGenerationError, TextGenerator};
