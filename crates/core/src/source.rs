//! The font collaborator used by the generator.

use std::path::Path;

use indexmap::IndexMap;

use crate::{Result, name::NameRecord};

/// Codepoint to glyph name, in the font's native order.
pub type CharacterMap = IndexMap<u32, String>;

/// Access to the parts of a font the generator needs.
pub trait FontSource {
    /// A loaded font.
    type Font;

    /// Read and parse the font at `path`.
    fn load_font(&self, path: &Path) -> Result<Self::Font>;

    /// The font's preferred character map, with subtable selection left to the source.
    fn best_character_map(&self, font: &Self::Font) -> Result<CharacterMap>;

    /// All name table records, in table order.
    fn name_records(&self, font: &Self::Font) -> Result<Vec<NameRecord>>;
}
