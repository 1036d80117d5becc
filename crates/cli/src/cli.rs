//! CLI definitions and job pairing.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use iconfont_consts_core::{
    FontationsSource, GenerationJob, UnitGenerator,
    config::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER},
};

use crate::batch::{run_parallel, run_sequential};

pub const USAGE: &str = "Usage: iconfont-consts font1.otf font2.otf ... output1.pas output2.pas ...";

#[derive(Parser, Debug)]
#[command(name = "iconfont-consts", version)]
#[command(about = "Generate Delphi units with WideChar constants for every icon in OTF/TTF fonts")]
#[command(after_help = "Each output .pas file corresponds to the input font at the same index.\n\n\
    Example:\n  iconfont-consts fa-solid.otf fa-brands.otf uFaSolid.pas uFaBrands.pas")]
pub struct Cli {
    /// Font files followed by the same number of output .pas files
    #[arg(value_name = "FILES")]
    pub paths: Vec<PathBuf>,

    /// Generate all units in parallel and report every failure
    #[arg(short, long)]
    pub parallel: bool,

    /// Verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected N font files followed by N output files, got {0} argument(s)")]
pub struct ArgumentError(pub usize);

/// Pair the first half of `paths` (fonts) with the second half (outputs).
pub fn pair_jobs(paths: &[PathBuf]) -> Result<Vec<GenerationJob>, ArgumentError> {
    if paths.len() < 2 || paths.len() % 2 != 0 {
        return Err(ArgumentError(paths.len()));
    }
    let (fonts, outputs) = paths.split_at(paths.len() / 2);
    Ok(fonts.iter().zip(outputs).map(|(font, output)| GenerationJob::new(font, output)).collect())
}

impl Cli {
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER }
    }

    pub fn run(&self) -> ExitCode {
        let jobs = match pair_jobs(&self.paths) {
            Ok(jobs) => jobs,
            Err(e) => {
                eprintln!("{e}");
                eprintln!("{USAGE}");
                return ExitCode::FAILURE;
            }
        };

        let generator = UnitGenerator::new(FontationsSource);
        let result = if self.parallel {
            run_parallel(&generator, &jobs, self.quiet)
        } else {
            run_sequential(&generator, &jobs, self.quiet)
        };

        result.map_or_else(
            |e| {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            },
            |_| ExitCode::SUCCESS,
        )
    }
}
