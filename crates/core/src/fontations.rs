//! [`FontSource`] backed by skrifa and read-fonts.

use std::{
    collections::HashMap,
    fs::read,
    path::{Path, PathBuf},
};

use log::debug;
use read_fonts::{FontRef, ReadError, TableProvider, types::GlyphId};
use skrifa::{GlyphNames, MetadataProvider};

use crate::{
    Error, Result,
    agl::glyph_name_for_codepoint,
    name::NameRecord,
    source::{CharacterMap, FontSource},
};

/// Font bytes together with the path they were read from.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
    data: Vec<u8>,
}

impl FontFile {
    /// Read and validate the font at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = read(&path).map_err(|source| Error::Read { path: path.clone(), source })?;
        Self::from_data(path, data)
    }

    /// Wrap already loaded font bytes; `path` is only used in messages.
    pub fn from_data(path: impl Into<PathBuf>, data: Vec<u8>) -> Result<Self> {
        let file = Self { path: path.into(), data };
        file.font()?;
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn font(&self) -> Result<FontRef<'_>> {
        FontRef::new(&self.data).map_err(|e| self.parse_error(e))
    }

    fn parse_error(&self, source: ReadError) -> Error {
        Error::Parse { path: self.path.clone(), source }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FontationsSource;

impl FontSource for FontationsSource {
    type Font = FontFile;

    fn load_font(&self, path: &Path) -> Result<FontFile> {
        FontFile::open(path)
    }

    fn best_character_map(&self, file: &FontFile) -> Result<CharacterMap> {
        let font = file.font()?;
        // skrifa silently yields nothing without a cmap; treat that as a parse failure
        font.cmap().map_err(|e| file.parse_error(e))?;

        let mappings: Vec<(u32, GlyphId)> = font.charmap().mappings().collect();
        let mut lowest_codepoint: HashMap<GlyphId, u32> = HashMap::new();
        for &(codepoint, gid) in &mappings {
            lowest_codepoint
                .entry(gid)
                .and_modify(|cp| *cp = (*cp).min(codepoint))
                .or_insert(codepoint);
        }

        let names = GlyphNames::new(&font);
        let mut map = CharacterMap::new();
        for (codepoint, gid) in mappings {
            map.entry(codepoint)
                .or_insert_with(|| glyph_name(&names, &lowest_codepoint, gid));
        }

        debug!("{}: {} mapped codepoints", file.path().display(), map.len());
        Ok(map)
    }

    fn name_records(&self, file: &FontFile) -> Result<Vec<NameRecord>> {
        let font = file.font()?;
        let Ok(name) = font.name() else {
            debug!("{}: no name table", file.path().display());
            return Ok(Vec::new());
        };

        let strings = name.string_data().as_bytes();
        Ok(name
            .name_record()
            .iter()
            .map(|record| {
                let start = record.string_offset().to_u32() as usize;
                let end = start + record.length() as usize;
                NameRecord::new(
                    record.name_id().to_u16(),
                    record.platform_id(),
                    record.encoding_id(),
                    strings.get(start..end).unwrap_or_default(),
                )
            })
            .collect())
    }
}

/// Glyph name from `post` or CFF.
///
/// Fonts without glyph names get names derived from the lowest codepoint
/// mapped to the glyph; `.notdef` and unmapped glyphs keep positional names.
fn glyph_name(
    names: &GlyphNames,
    lowest_codepoint: &HashMap<GlyphId, u32>,
    gid: GlyphId,
) -> String {
    match names.get(gid) {
        Some(name) if !name.is_synthesized() => name.as_str().to_owned(),
        _ if gid == GlyphId::NOTDEF => ".notdef".to_string(),
        _ => match lowest_codepoint.get(&gid) {
            Some(&codepoint) => glyph_name_for_codepoint(codepoint),
            None => format!("glyph{:05}", gid.to_u32()),
        },
    }
}
