//! Top-level orchestration of a template build.

use console::style;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::ignore::build_exclude_set;
use crate::processor::{validate_source_dir, Converter, ProcessedFile};
use crate::prompt::Prompter;

/// Everything a build needs besides the prompter.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub dry_run: bool,
    /// Overwrite an existing destination without asking
    pub force: bool,
    pub exclude: Vec<String>,
}

/// Builds the template directory from the reference directory.
///
/// # Flow
/// 1. Validates the source directory
/// 2. Asks before reusing an existing destination, then empties it
/// 3. Converts every source file into the destination
///
/// # Errors
/// * `Error::SourceNotFound` / `Error::NotADirectory` for a bad source
/// * `Error::Cancelled` if the user declines to overwrite the destination
pub fn build_template(options: &BuildOptions, prompt: &dyn Prompter) -> Result<Vec<ProcessedFile>> {
    validate_source_dir(&options.source_dir)?;

    let destination_dir = &options.destination_dir;
    let prefix = if options.dry_run { "[dry run] " } else { "" };

    if destination_dir.exists() {
        if !destination_dir.is_dir() {
            return Err(Error::NotADirectory(destination_dir.clone()));
        }
        println!(
            "{}",
            style(format!("Warning: The directory {} already exists.", destination_dir.display()))
                .yellow()
        );
        if !confirm_overwrite(prompt, options.force)? {
            return Err(Error::Cancelled);
        }
        empty_directory(destination_dir, options.dry_run)?;
    }

    println!(
        "{prefix}Building templates from {} to {}",
        style(options.source_dir.display()).green(),
        style(destination_dir.display()).blue()
    );

    let excludes = build_exclude_set(&options.exclude)?;
    let converter = Converter::new(BuildConfig::new(destination_dir)?).with_excludes(excludes);

    println!("{prefix}{}", style("Starting processing...").magenta());
    let files = converter.process(&options.source_dir, options.dry_run)?;

    println!("{}{} {}", prefix, style("Output directory:").blue(), destination_dir.display());
    Ok(files)
}

fn confirm_overwrite(prompt: &dyn Prompter, force: bool) -> Result<bool> {
    if force {
        debug!("Overwriting existing destination without confirmation");
        return Ok(true);
    }
    prompt.confirm("Do you want to continue and overwrite its contents?", false)
}

/// Removes every file and subdirectory of `directory`, keeping `directory` itself.
///
/// Symbolic links are removed as links, their targets are left alone.
/// In dry-run mode only reports what would be emptied.
pub fn empty_directory(directory: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{} Would empty directory {}", style("Dry run:").yellow(), directory.display());
        return Ok(());
    }
    if !directory.is_dir() {
        return Ok(());
    }

    remove_contents(directory)?;
    println!("{} {}", style("Emptied directory:").yellow(), directory.display());
    Ok(())
}

fn remove_contents(directory: &Path) -> Result<()> {
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            remove_contents(&path)?;
            fs::remove_dir(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
