//! Makai Table Generator Library
//!
//! This library contains the components of the Makai entity match-table
//! generator: the trie core that compiles entity mappings into a flat,
//! pointer-free table, the built-in entity catalogs, and the code
//! generation glue that renders the table for embedding into firmware.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! The generator is a one-shot, synchronous pipeline:
//! - An immutable entity set is assembled from catalogs and configuration
//! - The trie builder merges shared prefixes with sorted siblings
//! - The serializer flattens the tree into byte cells, three per node
//! - The renderer escapes the cells into a constant-string declaration

// Re-export public modules
pub mod codegen;
pub mod config;
pub mod data_structures;
pub mod entities;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Makai table generator.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::MakaiResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
