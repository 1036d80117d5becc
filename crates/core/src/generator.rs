//! Per-font unit generation.

use std::{
    fmt::{self, Display, Formatter},
    fs::write,
    path::PathBuf,
};

use log::debug;

use crate::{
    Error, Result,
    identifier::identifier_map,
    name::family_name,
    naming::{class_name_from_path, unit_name_from_path},
    source::FontSource,
    unit::{IconConstant, IconUnit},
};

/// One font paired with the unit file generated from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationJob {
    pub font: PathBuf,
    pub output: PathBuf,
}

impl GenerationJob {
    pub fn new(font: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { font: font.into(), output: output.into() }
    }
}

/// Outcome of a successful job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub class_name: String,
    pub glyph_count: usize,
}

impl Display for GenerationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} icons in {} as class {}",
            self.glyph_count,
            self.output.display(),
            self.class_name
        )
    }
}

/// Builds icon units using a [`FontSource`].
#[derive(Debug, Clone, Default)]
pub struct UnitGenerator<S> {
    source: S,
}

impl<S: FontSource> UnitGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Build the unit for `job` in memory.
    pub fn build(&self, job: &GenerationJob) -> Result<IconUnit> {
        let class_name = class_name_from_path(&job.output);
        let unit_name = unit_name_from_path(&job.output);

        let font = self.source.load_font(&job.font)?;
        let cmap = self.source.best_character_map(&font)?;

        let ids = identifier_map(cmap.iter().map(|(cp, name)| (*cp, name.as_str())));
        debug!(
            "{}: {} codepoints, {} unique identifiers",
            job.font.display(),
            cmap.len(),
            ids.len()
        );

        let mut constants: Vec<IconConstant> = ids
            .into_iter()
            .map(|(identifier, codepoint)| IconConstant { identifier, codepoint })
            .collect();
        constants.sort_unstable_by(|a, b| a.identifier.cmp(&b.identifier));

        let family_name = family_name(&self.source.name_records(&font)?);

        Ok(IconUnit { unit_name, class_name, family_name, constants })
    }

    /// Build the unit for `job` and write it to `job.output` in one write.
    pub fn generate(&self, job: &GenerationJob) -> Result<GenerationReport> {
        let unit = self.build(job)?;

        write(&job.output, unit.render())
            .map_err(|source| Error::Write { path: job.output.clone(), source })?;

        let report = GenerationReport {
            output: job.output.clone(),
            glyph_count: unit.glyph_count(),
            class_name: unit.class_name,
        };
        debug!("{}: {report}", job.font.display());
        Ok(report)
    }
}
