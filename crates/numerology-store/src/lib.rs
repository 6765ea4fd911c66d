pub mod config;
pub mod error;
pub mod schema;
pub mod store;

pub use config::{Config, OutputFormat};
pub use error::{Result, StoreError};
pub use store::{SavedInputs, Store, default_base_dir};
