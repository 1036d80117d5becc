//! Name table records and their text decoding.

use log::debug;

use crate::config::{NAME_ID_FAMILY, UNKNOWN_FONT_FAMILY};

const PLATFORM_UNICODE: u16 = 0;
const PLATFORM_MACINTOSH: u16 = 1;
const PLATFORM_WINDOWS: u16 = 3;

/// Text encoding of a name record payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEncoding {
    Utf16Be,
    MacRoman,
    Unknown,
}

impl NameEncoding {
    pub fn new(platform_id: u16, encoding_id: u16) -> Self {
        match (platform_id, encoding_id) {
            (PLATFORM_UNICODE, _) => Self::Utf16Be,
            (PLATFORM_WINDOWS, 0 | 1 | 10) => Self::Utf16Be,
            (PLATFORM_MACINTOSH, 0) => Self::MacRoman,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported name encoding (platform {platform_id}, encoding {encoding_id})")]
    UnsupportedEncoding { platform_id: u16, encoding_id: u16 },

    #[error("odd byte length {0} for UTF-16 name string")]
    OddLength(usize),

    #[error("unpaired surrogate 0x{0:04X} in UTF-16 name string")]
    UnpairedSurrogate(u16),
}

/// A single name table record with its raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    pub name_id: u16,
    pub platform_id: u16,
    pub encoding_id: u16,
    pub data: Vec<u8>,
}

impl NameRecord {
    pub fn new(name_id: u16, platform_id: u16, encoding_id: u16, data: impl Into<Vec<u8>>) -> Self {
        Self { name_id, platform_id, encoding_id, data: data.into() }
    }

    pub fn encoding(&self) -> NameEncoding {
        NameEncoding::new(self.platform_id, self.encoding_id)
    }

    /// Decode the payload strictly according to the record's encoding.
    pub fn to_unicode(&self) -> Result<String, DecodeError> {
        match self.encoding() {
            NameEncoding::Utf16Be => decode_utf16_be(&self.data),
            NameEncoding::MacRoman => Ok(self.data.iter().map(|&b| mac_roman_to_char(b)).collect()),
            NameEncoding::Unknown => Err(DecodeError::UnsupportedEncoding {
                platform_id: self.platform_id,
                encoding_id: self.encoding_id,
            }),
        }
    }

    /// Decode the payload, falling back to lossy UTF-8 when strict decoding fails.
    pub fn to_string_lossy(&self) -> String {
        self.to_unicode().unwrap_or_else(|e| {
            debug!("name ID {}: {e}; decoding as lossy UTF-8", self.name_id);
            String::from_utf8_lossy(&self.data).into_owned()
        })
    }
}

/// Family name from the first record with name ID 1, or [`UNKNOWN_FONT_FAMILY`].
pub fn family_name(records: &[NameRecord]) -> String {
    records
        .iter()
        .find(|r| r.name_id == NAME_ID_FAMILY)
        .map(NameRecord::to_string_lossy)
        .unwrap_or_else(|| UNKNOWN_FONT_FAMILY.to_string())
}

fn decode_utf16_be(data: &[u8]) -> Result<String, DecodeError> {
    if data.len() % 2 != 0 {
        return Err(DecodeError::OddLength(data.len()));
    }
    let units = data.chunks_exact(2).map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|r| r.map_err(|e| DecodeError::UnpairedSurrogate(e.unpaired_surrogate())))
        .collect()
}

fn mac_roman_to_char(byte: u8) -> char {
    if byte < 0x80 { byte as char } else { MAC_ROMAN_HIGH[(byte - 0x80) as usize] }
}

#[rustfmt::skip]
/// Mac Roman 0x80 - 0xFF.
static MAC_ROMAN_HIGH: [char; 128] = [
    'Ä', 'Å', 'Ç', 'É', 'Ñ', 'Ö', 'Ü', 'á',
    'à', 'â', 'ä', 'ã', 'å', 'ç', 'é', 'è',
    'ê', 'ë', 'í', 'ì', 'î', 'ï', 'ñ', 'ó',
    'ò', 'ô', 'ö', 'õ', 'ú', 'ù', 'û', 'ü',
    '†', '°', '¢', '£', '§', '•', '¶', 'ß',
    '®', '©', '™', '´', '¨', '≠', 'Æ', 'Ø',
    '∞', '±', '≤', '≥', '¥', 'µ', '∂', '∑',
    '∏', 'π', '∫', 'ª', 'º', 'Ω', 'æ', 'ø',
    '¿', '¡', '¬', '√', 'ƒ', '≈', '∆', '«',
    '»', '…', '\u{a0}', 'À', 'Ã', 'Õ', 'Œ', 'œ',
    '–', '—', '“', '”', '‘', '’', '÷', '◊',
    'ÿ', 'Ÿ', '⁄', '€', '‹', '›', 'ﬁ', 'ﬂ',
    '‡', '·', '‚', '„', '‰', 'Â', 'Ê', 'Á',
    'Ë', 'È', 'Í', 'Î', 'Ï', 'Ì', 'Ó', 'Ô',
    '\u{f8ff}', 'Ò', 'Ú', 'Û', 'Ù', 'ı', 'ˆ', '˜',
    '¯', '˘', '˙', '˚', '¸', '˝', '˛', 'ˇ',
];
