//! Logging state is per process; this binary configures a custom threshold.

mod common;

use common::CapturedOutput;
use stencil::logger::{add_log_level, get_logger, setup_logging_to};
use stencil::settings::Settings;

#[test]
fn test_custom_threshold_blocks_lower_levels() {
    let notice = add_log_level("NOTICE", 25).unwrap();
    let output = CapturedOutput::default();
    let settings = Settings { debug: false, log_level: Some("notice".to_string()) };

    let state = setup_logging_to(&settings, Box::new(output.clone()));
    assert_eq!(state.level(), notice);

    assert!(!log::log_enabled!(log::Level::Info));
    assert!(log::log_enabled!(log::Level::Warn));

    let log = get_logger("custom");
    assert!(log.is_enabled_for(notice));
    assert!(!log.is_enabled_for(stencil::logger::Level::INFO));

    log.info("info message");
    log::info!("facade info message");
    log.log(notice, "notice message");

    let text = output.text();
    assert!(text.contains("notice message"), "captured: {text}");
    assert!(!text.contains("info message"), "captured: {text}");
}
