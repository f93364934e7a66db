//! Core conversion of a reference project into a template tree.
//!
//! Conversion happens in two phases: [`Converter::plan`] walks the source tree
//! and computes every destination path, marker and content, then
//! [`Converter::apply`] writes the planned files (or only reports them in
//! dry-run mode). Nothing written by a run is ever read back by that run, and
//! a destination nested in the source is skipped by the walk.

use console::style;
use globset::GlobSet;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::path::TrackedPath;

/// How a planned file reaches its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOperation {
    /// The source bytes are copied unchanged
    Copy,
    /// The substituted content is written
    Write { content: String },
}

/// A source file and everything computed for its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub source: PathBuf,
    pub target: TrackedPath,
    pub operation: FileOperation,
    pub name_modified: bool,
    pub content_modified: bool,
}

/// Applies every replacement of `template_map`, in order, to `content`.
///
/// Each replacement runs over the output of the previous one, so a later
/// placeholder may match text introduced by an earlier marker.
///
/// # Returns
/// * `(String, bool)` - Replaced content and whether it differs from the input
pub fn replace_content(content: &str, template_map: &IndexMap<String, String>) -> (String, bool) {
    let mut replaced = content.to_string();
    for (old_value, new_value) in template_map {
        replaced = replaced.replace(old_value.as_str(), new_value);
    }
    let modified = replaced != content;
    (replaced, modified)
}

/// Checks that `path` exists and is a directory.
///
/// # Errors
/// * `Error::SourceNotFound` if nothing exists at `path`
/// * `Error::NotADirectory` if `path` is not a directory
pub fn validate_source_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

pub struct Converter {
    config: BuildConfig,
    template_map: IndexMap<String, String>,
    excludes: GlobSet,
}

impl Converter {
    pub fn new(config: BuildConfig) -> Self {
        let template_map = config.substitution_map();
        Self { config, template_map, excludes: GlobSet::empty() }
    }

    /// Skips source paths matching `excludes` (relative to the source root).
    pub fn with_excludes(mut self, excludes: GlobSet) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn template_map(&self) -> &IndexMap<String, String> {
        &self.template_map
    }

    pub fn template_directory(&self) -> &Path {
        self.config.template_directory()
    }

    /// Converts `source_dir` into the template directory.
    ///
    /// # Arguments
    /// * `source_dir` - Reference project root
    /// * `dry_run` - Report what would be written without touching the filesystem
    ///
    /// # Returns
    /// * `Result<Vec<ProcessedFile>>` - Every file handled, in walk order
    pub fn process(&self, source_dir: &Path, dry_run: bool) -> Result<Vec<ProcessedFile>> {
        let files = self.plan(source_dir)?;
        debug!("Planned {} files from {}", files.len(), source_dir.display());
        self.apply(&files, dry_run)?;
        Ok(files)
    }

    /// Walks `source_dir` depth-first and computes the destination of every file.
    pub fn plan(&self, source_dir: &Path) -> Result<Vec<ProcessedFile>> {
        validate_source_dir(source_dir)?;

        let destination = fs::canonicalize(self.template_directory()).ok();
        let walker = WalkDir::new(source_dir)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !self.is_destination(entry.path(), destination.as_deref())
                    && !self.is_excluded(source_dir, entry.path())
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(self.plan_file(source_dir, entry.path())?);
            }
        }
        Ok(files)
    }

    /// Writes planned files, creating parent directories and overwriting existing files.
    pub fn apply(&self, files: &[ProcessedFile], dry_run: bool) -> Result<()> {
        for file in files {
            let target = file.target.materialized();

            if dry_run {
                println!("{} Would write to {}", style("Dry run:").yellow(), target.display());
                continue;
            }

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            match &file.operation {
                FileOperation::Copy => {
                    fs::copy(&file.source, &target)?;
                }
                FileOperation::Write { content } => fs::write(&target, content)?,
            }
            println!(
                "{} {} -> {}",
                style("Processed:").green(),
                file.source.display(),
                target.display()
            );
        }
        Ok(())
    }

    /// The destination may live inside the source; its contents are never input.
    fn is_destination(&self, path: &Path, destination: Option<&Path>) -> bool {
        let template_directory = self.template_directory();
        if !template_directory.as_os_str().is_empty() && path.starts_with(template_directory) {
            return true;
        }
        match destination {
            Some(destination) if path.is_dir() => {
                fs::canonicalize(path).is_ok_and(|path| path == destination)
            }
            _ => false,
        }
    }

    fn is_excluded(&self, source_dir: &Path, path: &Path) -> bool {
        match path.strip_prefix(source_dir) {
            Ok(relative) if self.excludes.is_match(relative) => {
                debug!("Skipping {} (excluded)", relative.display());
                true
            }
            _ => false,
        }
    }

    fn plan_file(&self, source_dir: &Path, src_path: &Path) -> Result<ProcessedFile> {
        let relative = src_path
            .strip_prefix(source_dir)
            .map_err(|_| Error::InvalidPath(src_path.to_path_buf()))?;
        let relative_str =
            relative.to_str().ok_or_else(|| Error::InvalidPath(relative.to_path_buf()))?;

        let (rendered, _) = replace_content(relative_str, &self.template_map);
        let rendered = PathBuf::from(rendered);

        let mut target = TrackedPath::new(self.template_directory().join(&rendered));
        let name_modified = rendered.file_name() != relative.file_name();
        if name_modified {
            debug!("Renamed {} -> {}", relative.display(), rendered.display());
            target.mark_as_template();
        }

        let bytes = fs::read(src_path)?;
        let (operation, content_modified) = match String::from_utf8(bytes) {
            Ok(content) => {
                let (content, modified) = replace_content(&content, &self.template_map);
                if modified {
                    target.mark_as_template();
                    (FileOperation::Write { content }, true)
                } else {
                    (FileOperation::Copy, false)
                }
            }
            Err(_) => {
                debug!("{} is not UTF-8 text, copying verbatim", relative.display());
                (FileOperation::Copy, false)
            }
        };

        Ok(ProcessedFile {
            source: src_path.to_path_buf(),
            target,
            operation,
            name_modified,
            content_modified,
        })
    }
}
