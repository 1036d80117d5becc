//! Generate Delphi units of icon constants from icon font character maps.

pub mod agl;
pub mod config;
pub mod error;
pub mod fontations;
pub mod generator;
pub mod identifier;
pub mod name;
pub mod naming;
pub mod source;
pub mod unit;

pub use error::{Error, Result};
pub use fontations::{FontFile, FontationsSource};
pub use generator::{GenerationJob, GenerationReport, UnitGenerator};
pub use identifier::{glyph_name_to_identifier, identifier_map};
pub use name::{NameRecord, family_name};
pub use naming::{class_name_from_path, unit_name_from_path};
pub use source::{CharacterMap, FontSource};
pub use unit::{IconConstant, IconUnit};
