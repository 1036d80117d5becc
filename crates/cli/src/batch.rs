//! Sequential and parallel batch drivers.

use anyhow::{Context, Result, bail};
use iconfont_consts_core::{FontSource, GenerationJob, GenerationReport, UnitGenerator};
use log::error;
use rayon::prelude::*;

/// Result of a batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn ok_or_bail(&self, operation: &str) -> Result<()> {
        if self.failed > 0 {
            bail!("{operation} failed: {} succeeded, {} failed", self.succeeded, self.failed);
        }
        Ok(())
    }
}

fn generate_job<S: FontSource>(
    generator: &UnitGenerator<S>,
    job: &GenerationJob,
) -> Result<GenerationReport> {
    generator.generate(job).with_context(|| {
        format!("Failed to generate {} from {}", job.output.display(), job.font.display())
    })
}

/// Run jobs one after another, stopping at the first failure.
///
/// Units written before the failure are left in place.
pub fn run_sequential<S: FontSource>(
    generator: &UnitGenerator<S>,
    jobs: &[GenerationJob],
    quiet: bool,
) -> Result<BatchResult> {
    let mut result = BatchResult::default();
    for job in jobs {
        let report = generate_job(generator, job)?;
        if !quiet {
            println!("{report}");
        }
        result.succeeded += 1;
    }
    Ok(result)
}

/// Run all jobs in parallel, reporting every failure.
pub fn run_parallel<S: FontSource + Sync>(
    generator: &UnitGenerator<S>,
    jobs: &[GenerationJob],
    quiet: bool,
) -> Result<BatchResult> {
    let results: Vec<_> = jobs.par_iter().map(|job| generate_job(generator, job)).collect();

    let mut result = BatchResult::default();
    for r in results {
        match r {
            Ok(report) => {
                if !quiet {
                    println!("{report}");
                }
                result.succeeded += 1;
            }
            Err(e) => {
                error!("{e:#}");
                result.failed += 1;
            }
        }
    }

    if !quiet {
        println!("Generated {} of {} units", result.succeeded, result.total());
    }
    result.ok_or_bail("Unit generation")?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use iconfont_consts_core::{CharacterMap, Error, NameRecord};
    use tempfile::tempdir;

    use super::*;

    /// Fails to load any font whose file name starts with `bad`.
    struct StubSource;

    impl FontSource for StubSource {
        type Font = ();

        fn load_font(&self, path: &Path) -> iconfont_consts_core::Result<()> {
            let bad = path.file_name().is_some_and(|n| n.to_string_lossy().starts_with("bad"));
            if bad {
                return Err(Error::Read {
                    path: path.to_path_buf(),
                    source: std::io::ErrorKind::InvalidData.into(),
                });
            }
            Ok(())
        }

        fn best_character_map(&self, _: &()) -> iconfont_consts_core::Result<CharacterMap> {
            Ok([(0xE000, "star".to_string())].into_iter().collect())
        }

        fn name_records(&self, _: &()) -> iconfont_consts_core::Result<Vec<NameRecord>> {
            Ok(vec![NameRecord::new(1, 1, 0, b"Stub".to_vec())])
        }
    }

    #[test]
    fn test_batch_result() {
        let result = BatchResult { succeeded: 2, failed: 1 };
        assert_eq!(result.total(), 3);
        assert!(result.ok_or_bail("test").is_err());
        assert!(BatchResult { succeeded: 1, failed: 0 }.ok_or_bail("test").is_ok());
    }

    #[test]
    fn test_sequential_stops_at_first_failure() {
        let dir = tempdir().unwrap();
        let jobs = vec![
            GenerationJob::new("good.ttf", dir.path().join("first.pas")),
            GenerationJob::new("bad.ttf", dir.path().join("second.pas")),
            GenerationJob::new("good.ttf", dir.path().join("third.pas")),
        ];

        let generator = UnitGenerator::new(StubSource);
        assert!(run_sequential(&generator, &jobs, true).is_err());
        assert!(dir.path().join("first.pas").exists());
        assert!(!dir.path().join("second.pas").exists());
        assert!(!dir.path().join("third.pas").exists());
    }

    #[test]
    fn test_parallel_runs_every_job() {
        let dir = tempdir().unwrap();
        let jobs = vec![
            GenerationJob::new("good.ttf", dir.path().join("first.pas")),
            GenerationJob::new("bad.ttf", dir.path().join("second.pas")),
            GenerationJob::new("good.ttf", dir.path().join("third.pas")),
        ];

        let generator = UnitGenerator::new(StubSource);
        assert!(run_parallel(&generator, &jobs, true).is_err());
        assert!(dir.path().join("first.pas").exists());
        assert!(!dir.path().join("second.pas").exists());
        assert!(dir.path().join("third.pas").exists());
    }

    #[test]
    fn test_sequential_all_succeed() {
        let dir = tempdir().unwrap();
        let jobs = vec![GenerationJob::new("good.ttf", dir.path().join("uStub.pas"))];

        let result = run_sequential(&UnitGenerator::new(StubSource), &jobs, true).unwrap();
        assert_eq!(result, BatchResult { succeeded: 1, failed: 0 });

        let text = std::fs::read_to_string(dir.path().join("uStub.pas")).unwrap();
        assert!(text.contains("TStubIcons = class"));
        assert!(text.contains("const STAR: WideChar = #$E000;"));
    }
}
