//! Memory Report Library
//!
//! Holds a fixed set of memory records (narrative text paired with metadata
//! mappings) and renders them as a confirmation line followed by labeled,
//! pretty-printed JSON blocks.
//!
//! # Architecture
//!
//! The library is intentionally small:
//! - Records are constructed once from literal constants and never mutated
//! - Metadata mappings keep their declaration order when serialized
//! - Rendering is synchronous and deterministic
//!
//! The library does NOT talk to any storage service or network endpoint.
//! Logging setup and argument handling live in the application layer
//! (memory-report-cli).
//!
//! # Example Usage
//!
//! ```
//! use memory_report::Reporter;
//!
//! let output = Reporter::new().render_to_string().unwrap();
//! assert!(output.starts_with("Memory stored successfully!\n"));
//! ```

// Public modules
pub mod config;
pub mod records;
pub mod reporter;
pub mod types;

// Re-export main types for convenience
pub use config::RenderOptions;
pub use reporter::Reporter;
pub use types::{metadata, Metadata, Record, ReportError, Result, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
