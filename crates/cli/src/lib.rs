//! iconfont-consts CLI library.

pub mod batch;
pub mod cli;

pub use batch::{BatchResult, run_parallel, run_sequential};
pub use cli::{ArgumentError, Cli, pair_jobs};
