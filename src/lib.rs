pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod finder;
pub mod git;
pub mod gradle;
pub mod ui;

pub use error::{BumpError, Result};
