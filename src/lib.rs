//! organize - sort a directory's files into category folders
//!
//! This library classifies files by extension, moves them into category
//! subdirectories (Images, Documents, Videos, Audio, Archives, Scripts, Others)
//! with numeric suffixes on name collisions, and can preview the result as a
//! dry run.

pub mod cli;
pub mod config;
pub mod file_category;
pub mod file_organizer;
pub mod logger;
pub mod logging;
pub mod output;

pub use config::{Config, ConfigError};
pub use file_category::{CATEGORY_TABLE, Category};
pub use file_organizer::{FileOrganizer, MoveReport, OrganizeError, OrganizeResult};
pub use logger::{Logger, MemoryLogger, TracingLogger};

pub use cli::{Args, run_cli};
