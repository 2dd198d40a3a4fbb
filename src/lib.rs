//! Brand brief wizard that renders logo prompts for image-generation models.

pub mod cli;
pub mod color;
pub mod config;
pub mod errors;
pub mod log;
pub mod mappings;
pub mod model;
pub mod prompt;
pub mod store;
pub mod transfer;
pub mod ux;
pub mod wizard;

pub use errors::{PromptGenError, Result};
pub use model::{BrandState, Field};
pub use prompt::build_prompt;
