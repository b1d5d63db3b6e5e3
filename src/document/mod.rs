pub mod loader;
pub mod writer;

// Re-export commonly used items
pub use loader::{load_document, parse_document};
pub use writer::{save_document, to_pretty_json};
