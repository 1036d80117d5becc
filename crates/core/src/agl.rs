//! Glyph names derived from codepoints, for fonts that carry no glyph names.

/// Adobe Glyph List names for printable ASCII and Latin-1, sorted by codepoint.
#[rustfmt::skip]
static AGL_NAMES: &[(u32, &str)] = &[
    (0x20, "space"), (0x21, "exclam"), (0x22, "quotedbl"), (0x23, "numbersign"),
    (0x24, "dollar"), (0x25, "percent"), (0x26, "ampersand"), (0x27, "quotesingle"),
    (0x28, "parenleft"), (0x29, "parenright"), (0x2A, "asterisk"), (0x2B, "plus"),
    (0x2C, "comma"), (0x2D, "hyphen"), (0x2E, "period"), (0x2F, "slash"),
    (0x30, "zero"), (0x31, "one"), (0x32, "two"), (0x33, "three"),
    (0x34, "four"), (0x35, "five"), (0x36, "six"), (0x37, "seven"),
    (0x38, "eight"), (0x39, "nine"), (0x3A, "colon"), (0x3B, "semicolon"),
    (0x3C, "less"), (0x3D, "equal"), (0x3E, "greater"), (0x3F, "question"),
    (0x40, "at"),
    (0x5B, "bracketleft"), (0x5C, "backslash"), (0x5D, "bracketright"), (0x5E, "asciicircum"),
    (0x5F, "underscore"), (0x60, "grave"),
    (0x7B, "braceleft"), (0x7C, "bar"), (0x7D, "braceright"), (0x7E, "asciitilde"),
    (0xA1, "exclamdown"), (0xA2, "cent"), (0xA3, "sterling"), (0xA4, "currency"),
    (0xA5, "yen"), (0xA6, "brokenbar"), (0xA7, "section"), (0xA8, "dieresis"),
    (0xA9, "copyright"), (0xAA, "ordfeminine"), (0xAB, "guillemotleft"), (0xAC, "logicalnot"),
    (0xAE, "registered"), (0xAF, "macron"), (0xB0, "degree"), (0xB1, "plusminus"),
    (0xB2, "twosuperior"), (0xB3, "threesuperior"), (0xB4, "acute"),
    (0xB6, "paragraph"), (0xB7, "periodcentered"), (0xB8, "cedilla"), (0xB9, "onesuperior"),
    (0xBA, "ordmasculine"), (0xBB, "guillemotright"), (0xBC, "onequarter"), (0xBD, "onehalf"),
    (0xBE, "threequarters"), (0xBF, "questiondown"),
    (0xC0, "Agrave"), (0xC1, "Aacute"), (0xC2, "Acircumflex"), (0xC3, "Atilde"),
    (0xC4, "Adieresis"), (0xC5, "Aring"), (0xC6, "AE"), (0xC7, "Ccedilla"),
    (0xC8, "Egrave"), (0xC9, "Eacute"), (0xCA, "Ecircumflex"), (0xCB, "Edieresis"),
    (0xCC, "Igrave"), (0xCD, "Iacute"), (0xCE, "Icircumflex"), (0xCF, "Idieresis"),
    (0xD0, "Eth"), (0xD1, "Ntilde"), (0xD2, "Ograve"), (0xD3, "Oacute"),
    (0xD4, "Ocircumflex"), (0xD5, "Otilde"), (0xD6, "Odieresis"), (0xD7, "multiply"),
    (0xD8, "Oslash"), (0xD9, "Ugrave"), (0xDA, "Uacute"), (0xDB, "Ucircumflex"),
    (0xDC, "Udieresis"), (0xDD, "Yacute"), (0xDE, "Thorn"), (0xDF, "germandbls"),
    (0xE0, "agrave"), (0xE1, "aacute"), (0xE2, "acircumflex"), (0xE3, "atilde"),
    (0xE4, "adieresis"), (0xE5, "aring"), (0xE6, "ae"), (0xE7, "ccedilla"),
    (0xE8, "egrave"), (0xE9, "eacute"), (0xEA, "ecircumflex"), (0xEB, "edieresis"),
    (0xEC, "igrave"), (0xED, "iacute"), (0xEE, "icircumflex"), (0xEF, "idieresis"),
    (0xF0, "eth"), (0xF1, "ntilde"), (0xF2, "ograve"), (0xF3, "oacute"),
    (0xF4, "ocircumflex"), (0xF5, "otilde"), (0xF6, "odieresis"), (0xF7, "divide"),
    (0xF8, "oslash"), (0xF9, "ugrave"), (0xFA, "uacute"), (0xFB, "ucircumflex"),
    (0xFC, "udieresis"), (0xFD, "yacute"), (0xFE, "thorn"), (0xFF, "ydieresis"),
];

/// Glyph name for a glyph reached from `codepoint`.
///
/// ASCII letters name themselves, other ASCII and Latin-1 characters use their
/// AGL name, everything else is `uniXXXX` (BMP) or `uXXXXX`.
pub fn glyph_name_for_codepoint(codepoint: u32) -> String {
    if let Some(c) = char::from_u32(codepoint).filter(char::is_ascii_alphabetic) {
        return c.to_string();
    }
    match AGL_NAMES.binary_search_by_key(&codepoint, |&(cp, _)| cp) {
        Ok(i) => AGL_NAMES[i].1.to_string(),
        Err(_) if codepoint <= 0xFFFF => format!("uni{codepoint:04X}"),
        Err(_) => format!("u{codepoint:X}"),
    }
}
