pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::RenameEngine, pipeline::RenamePipeline};
pub use utils::error::{RenameError, Result};
