//! Code generation glue around the trie core.
//!
//! This module feeds an [`EntitySet`] through the trie builder and
//! serializer, then renders the resulting cell sequence into the textual
//! forms the firmware build consumes: a hex-escaped string literal wrapped
//! in a constant declaration, or a per-record dump for inspection.

use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::config::output::{DeclarationStyle, OutputConfig};
use crate::config::table::TableConfig;
use crate::data_structures::{KoaTrie, KoaTrieConfig, CELLS_PER_NODE};
use crate::entities::EntitySet;
use crate::error::MakaiResult;

/// Builds the flat match table for an entity set.
///
/// Every entry is inserted into a fresh trie, which is then flattened into
/// its cell sequence. The entity set's iteration order does not matter; the
/// trie orders siblings canonically.
///
/// # Arguments
///
/// * `entities` - The input mapping, assembled before generation starts.
/// * `table` - Builder limits from the configuration.
///
/// # Returns
///
/// The cell sequence, [`CELLS_PER_NODE`] cells per trie node.
pub fn build_match_table(entities: &EntitySet, table: &TableConfig) -> MakaiResult<Vec<u8>> {
    if entities.is_empty() {
        tracing::warn!("Entity set is empty; generating an empty table");
    }

    let mut trie = KoaTrie::with_config(KoaTrieConfig {
        max_depth: table.max_depth,
    });
    for (sequence, code) in entities.iter() {
        trie.insert(sequence, code)?;
    }

    let cells = trie.flatten()?;
    tracing::debug!(
        entries = entities.len(),
        nodes = trie.node_count(),
        cells = cells.len(),
        "match table built"
    );

    Ok(cells)
}

/// Escapes every cell as a two-hex-digit `\xHH` byte escape.
pub fn escape_cells(cells: &[u8]) -> String {
    let mut escaped = String::with_capacity(cells.len() * 4);
    for cell in cells {
        let _ = write!(escaped, "\\x{cell:02x}");
    }
    escaped
}

/// Wraps the escaped table in the configured source declaration.
pub fn render_declaration(cells: &[u8], output: &OutputConfig) -> String {
    let escaped = escape_cells(cells);
    match output.style {
        DeclarationStyle::FlashString => {
            format!("FLASH_STRING({}, \"{}\");", output.symbol, escaped)
        }
        DeclarationStyle::ProgmemArray => {
            format!("const char {}[] PROGMEM = \"{}\";", output.symbol, escaped)
        }
    }
}

/// One serialized node record, for the inspection dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRecord {
    /// The byte this record matches.
    pub byte: u8,

    /// Cells to advance to the next sibling record; 0 for the last sibling.
    pub skip: u8,

    /// Substitution code, 0 when no key ends here.
    pub code: u8,
}

impl fmt::Display for TableRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "byte={:#04x} skip={:<3} code={:#04x}",
            self.byte, self.skip, self.code
        )
    }
}

/// Groups a cell sequence into its node records.
///
/// Tables produced by [`build_match_table`] are always a whole number of
/// records.
pub fn records(cells: &[u8]) -> Vec<TableRecord> {
    debug_assert_eq!(cells.len() % CELLS_PER_NODE, 0);

    cells
        .chunks_exact(CELLS_PER_NODE)
        .map(|record| TableRecord {
            byte: record[0],
            skip: record[1],
            code: record[2],
        })
        .collect()
}
