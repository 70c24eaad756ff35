//! Console mode must leave the process-wide flag untouched. Kept in its own
//! binary so nothing else in the process can probe first.

use optional_logger::{
    Availability, LoggerConfig, LoggerMode, OptionalLogger, availability, cached_availability,
};

#[test]
fn test_console_mode_never_probes() {
    let config = LoggerConfig {
        mode: LoggerMode::Console,
        console_prefix: "> ".to_string(),
    };

    for context in ["first", "second"] {
        let logger = OptionalLogger::from_config(context, &config);
        assert!(!logger.is_facility_backed());
        logger.log_info("console mode line");
    }
    assert_eq!(cached_availability(), None);

    let flag = availability();
    assert_eq!(flag, Availability::Unavailable);
    assert_eq!(cached_availability(), Some(flag));
}
