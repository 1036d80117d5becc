//! Unit and class names derived from the output path.

use std::path::Path;

use crate::config::{CLASS_PREFIX, CLASS_SUFFIX, UNIT_FILE_PREFIX};

/// File name of `path` without its extension, unmodified.
pub fn unit_name_from_path(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Class name for the unit written to `path`.
///
/// `uFooBar.pas` becomes `TFooBarIcons` and `icons.pas` becomes `TIconsIcons`.
pub fn class_name_from_path(path: &Path) -> String {
    let stem = unit_name_from_path(path);

    let mut chars = stem.chars();
    let base = match (chars.next(), chars.next()) {
        (Some(first), Some(second))
            if first.eq_ignore_ascii_case(&UNIT_FILE_PREFIX) && second.is_uppercase() =>
        {
            &stem[first.len_utf8()..]
        }
        _ => stem.as_str(),
    };

    let mut name: String = base.chars().filter(|c| c.is_alphanumeric() || *c == '_').collect();
    if let Some(first) = name.chars().next() {
        let upper: String = first.to_uppercase().collect();
        name.replace_range(..first.len_utf8(), &upper);
    }

    format!("{CLASS_PREFIX}{name}{CLASS_SUFFIX}")
}
