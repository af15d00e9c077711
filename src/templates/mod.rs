pub mod body;
pub mod categories;
pub mod header;
pub mod renderer;
mod toml;

// Re-exports for convenience
pub use categories::Kategorie;
pub use header::{DrucksacheVm, HeaderVm};
pub use renderer::PageRenderer;
