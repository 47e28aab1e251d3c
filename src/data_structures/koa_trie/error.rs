// Copyright (c) 2025 Makai Tablegen Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Koa Trie.

/// Errors that can occur while building or flattening a Koa Trie.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KoaTrieError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a substitution code of 0 is provided. In the flat table,
    /// 0 in the code cell means "no match here", so 0 cannot double as a
    /// real substitution code.
    #[error("Substitution code 0 is reserved for non-terminal nodes (key '{key}')")]
    ReservedCode {
        /// The key whose code was 0, rendered lossily for display.
        key: String,
    },

    /// Error when a key exceeds the maximum depth allowed.
    #[error("Key '{key}' exceeds maximum trie depth of {max_depth}")]
    KeyTooLong {
        /// The key that was too long, rendered lossily for display.
        key: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// Error when a subtree serializes to more cells than the byte-sized
    /// skip cell can describe.
    #[error("Subtree width {width} does not fit the one-byte skip cell (max 255)")]
    WidthOverflow {
        /// The offending subtree width in cells.
        width: usize,
    },
}
