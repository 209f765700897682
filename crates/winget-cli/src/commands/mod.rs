//! Command implementations for winget-cli

pub mod digest;
pub mod render;
pub mod sync;

pub use digest::run_digest;
pub use render::run_render;
pub use sync::run_sync;
