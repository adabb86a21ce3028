pub mod annotations;
pub mod data;
pub mod state;

// Re-export everything for compatibility
pub use annotations::*;
pub use data::*;
pub use state::*;
