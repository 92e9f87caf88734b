// Shared Kernel - Domain Driven Design
// Cross-cutting concerns used by every module

pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging)

// Re-exports for convenience
pub use config::SeasonsConfig;
pub use errors::{AppError, AppResult};
