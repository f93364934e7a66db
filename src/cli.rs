//! Command-line interface implementation for stencil.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::build::BuildOptions;
use crate::constants::{DEFAULT_SOURCE_DIR, DEFAULT_TEMPLATE_DIR};

/// Command-line arguments structure for stencil.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "stencil: build a Jinja project template from a reference project",
    long_about = "Build the template directory from the reference directory.\n\n\
Currently replaces:\n\
- PackageName -> {{ package_name }}\n\
- package_module -> {{ package_module }}\n\
- short description -> {{ package_description }}\n\
- your name -> {{ package_author_name }}\n\
- your.name@example.com -> {{ package_author_email }}\n\
- my-github-org -> {{ package_github_org }}"
)]
pub struct Args {
    /// The source directory to process
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// The destination directory for the processed templates
    #[arg(long, value_name = "DIR", default_value = DEFAULT_TEMPLATE_DIR)]
    pub destination_dir: PathBuf,

    /// Perform a dry run without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite an existing destination directory without asking
    #[arg(short, long)]
    pub force: bool,

    /// Enable debug logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip source paths matching this glob (may be repeated)
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Vec<String>,
}

impl Args {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            source_dir: self.source_dir.clone(),
            destination_dir: self.destination_dir.clone(),
            dry_run: self.dry_run,
            force: self.force,
            exclude: self.exclude.clone(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
