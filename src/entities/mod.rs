//! Built-in entity catalog and the entity set fed into the table builder.
//!
//! Two catalogs ship with the generator: the five predefined XML character
//! entities, which substitute to their literal ASCII characters, and the
//! Latin-1 accented letters the target device cannot render natively. The
//! lowercase/uppercase æ, ø and å map to codes 1 through 6, the slots of
//! the custom glyphs in the device's character map; the umlaut vowels fold
//! to their plain ASCII base letters.
//!
//! Accented-letter keys are the UTF-8 byte sequences as they appear in the
//! incoming stream, so a multi-byte letter occupies one trie path per byte.

use std::collections::BTreeMap;

use crate::config::entities::EntitiesConfig;

/// The predefined XML character entities and their literal substitutions.
pub const XML_ENTITIES: [(&str, u8); 5] = [
    ("&amp;", b'&'),
    ("&apos;", b'\''),
    ("&gt;", b'>'),
    ("&lt;", b'<'),
    ("&quot;", b'"'),
];

/// Latin-1 accented letters: custom glyph slots for æ/ø/å, ASCII folds for
/// the umlaut vowels.
pub const LATIN1_ACCENTS: [(&str, u8); 10] = [
    ("æ", 1),
    ("ø", 2),
    ("å", 3),
    ("Æ", 4),
    ("Ø", 5),
    ("Å", 6),
    ("ä", b'a'),
    ("ö", b'o'),
    ("Ä", b'A'),
    ("Ö", b'O'),
];

/// The complete input mapping handed to the table builder.
///
/// Keys are unique byte sequences; inserting an existing key replaces its
/// code. Iteration order is the keys' byte order, though the trie imposes
/// its own canonical order anyway, so the serialized table does not depend
/// on how the set was assembled.
#[derive(Debug, Clone, Default)]
pub struct EntitySet {
    entries: BTreeMap<Vec<u8>, u8>,
}

impl EntitySet {
    /// Creates an empty entity set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding both built-in catalogs.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        set.extend_from_catalog(&XML_ENTITIES);
        set.extend_from_catalog(&LATIN1_ACCENTS);
        set
    }

    /// Assembles the set selected by the configuration: the enabled
    /// built-in catalogs plus any extra entries, with extras overriding
    /// built-ins on key collision.
    pub fn from_config(config: &EntitiesConfig) -> Self {
        let mut set = Self::new();
        if config.xml_builtin {
            set.extend_from_catalog(&XML_ENTITIES);
        }
        if config.latin1_accents {
            set.extend_from_catalog(&LATIN1_ACCENTS);
        }
        for extra in &config.extra {
            set.insert(extra.sequence.as_bytes(), extra.code);
        }
        set
    }

    /// Inserts an entry, replacing the code of an existing key.
    pub fn insert(&mut self, sequence: impl Into<Vec<u8>>, code: u8) {
        self.entries.insert(sequence.into(), code);
    }

    /// Looks up the code for a sequence.
    pub fn get(&self, sequence: &[u8]) -> Option<u8> {
        self.entries.get(sequence).copied()
    }

    /// Iterates the entries in key byte order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u8)> + '_ {
        self.entries.iter().map(|(key, code)| (key.as_slice(), *code))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn extend_from_catalog(&mut self, catalog: &[(&str, u8)]) {
        for (sequence, code) in catalog {
            self.insert(sequence.as_bytes(), *code);
        }
    }
}
