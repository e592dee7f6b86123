pub mod env;
pub mod loader;

pub use env::EnvConfig;
pub use loader::{load_document, load_document_from_str, DocumentFormat};
