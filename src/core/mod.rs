pub mod animator;
pub mod client;
pub mod prompt;
pub mod sanitizer;

pub use crate::domain::model::{AnimationOutcome, AnimationRequest};
pub use crate::domain::ports::{ConfigProvider, ModelClient, Storage};
pub use crate::utils::error::Result;
