//! Fixed naming and output constants for generated Pascal units.

/// Family name used when the font has no family name record.
pub const UNKNOWN_FONT_FAMILY: &str = "UnknownFontFamily";

/// Name table ID of the font family name.
pub const NAME_ID_FAMILY: u16 = 1;

/// Prefix for identifiers whose glyph name starts with a digit.
pub const NUM_PREFIX: &str = "NUM_";

/// Prefix for identifiers derived from single-character glyph names.
pub const CHAR_PREFIX: &str = "CHAR_";

/// Conventional Delphi unit file prefix (`uFooBar.pas`), dropped from class names.
pub const UNIT_FILE_PREFIX: char = 'u';

/// Class name wrapping: `T<Name>Icons`.
pub const CLASS_PREFIX: &str = "T";
pub const CLASS_SUFFIX: &str = "Icons";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Name of the family-name constant emitted in every unit.
pub const FAMILY_CONSTANT: &str = "FONT_FAMILY";

/// Pascal type of the icon constants (one UTF-16 code unit).
pub const ICON_CONSTANT_TYPE: &str = "WideChar";

/// The single unit listed in the `uses` clause.
pub const USES_UNIT: &str = "System.SysUtils";

/// Delphi reserved words, uppercase and sorted for binary search.
pub const RESERVED_WORDS: &[&str] = &[
    "AND",
    "ARRAY",
    "ASM",
    "BEGIN",
    "CASE",
    "CONST",
    "CONSTRUCTOR",
    "DESTRUCTOR",
    "DIV",
    "DO",
    "DOWNTO",
    "ELSE",
    "END",
    "FILE",
    "FOR",
    "FUNCTION",
    "GOTO",
    "IF",
    "IMPLEMENTATION",
    "IN",
    "INHERITED",
    "INLINE",
    "INTERFACE",
    "IS",
    "LABEL",
    "MOD",
    "NIL",
    "NOT",
    "OBJECT",
    "OF",
    "OPERATOR",
    "OR",
    "PACKAGE",
    "PROCEDURE",
    "PROGRAM",
    "RECORD",
    "REPEAT",
    "SET",
    "SHL",
    "SHR",
    "STRING",
    "THEN",
    "TO",
    "TYPE",
    "UNIT",
    "UNTIL",
    "USES",
    "VAR",
    "VIRTUAL",
    "WHILE",
    "WITH",
    "XOR",
];
