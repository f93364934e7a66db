//! stencil's main application entry point.
//! Handles command-line argument parsing, settings and logging bootstrap,
//! and runs the template build.

use stencil::{
    build::build_template,
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::setup_logging_with,
    prompt::DialoguerPrompter,
    settings::Settings,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads settings from `.env` and the environment
/// 2. Configures logging (`--verbose` forces debug)
/// 3. Builds the template directory
fn run(args: Args) -> Result<()> {
    let mut settings = Settings::load()?;
    if args.verbose {
        settings.debug = true;
    }
    let logging = setup_logging_with(&settings);
    log::debug!("Resolved log level {}", logging.level());

    let prompt = DialoguerPrompter::new();
    let files = build_template(&args.build_options(), &prompt)?;

    let templates = files.iter().filter(|file| file.target.is_template()).count();
    log::info!("{} files processed, {} marked as templates", files.len(), templates);
    Ok(())
}
