#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Level filtering is monotonic in severity.

use logfan_core::{Logger, Severity};
use proptest::prelude::*;
use tempfile::TempDir;

fn severity() -> impl Strategy<Value = Severity> {
    (0u8..6).prop_map(|raw| Severity::try_from(raw).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A record reaches the file iff its severity is at or above the level.
    #[test]
    fn emitted_iff_at_or_above_level(level in severity(), emitted in severity()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p.log");
        let mut logger = Logger::new();
        logger.disable_console();
        logger.enable_file_output(&path).unwrap();
        logger.start(level).unwrap();

        logger.log(emitted, "p.rs", 1, format_args!("x"));
        logger.destroy().unwrap();

        let written = !std::fs::read_to_string(&path).unwrap().is_empty();
        prop_assert_eq!(written, emitted >= level);
    }

    /// If a severity passes, every higher severity passes too.
    #[test]
    fn enabled_set_is_upward_closed(level in severity()) {
        let mut logger = Logger::new();
        logger.enable_profiler();
        logger.disable_console();
        logger.start(level).unwrap();

        let enabled: Vec<bool> = Severity::ALL.iter().map(|s| logger.is_enabled(*s)).collect();
        for pair in enabled.windows(2) {
            prop_assert!(!pair[0] || pair[1]);
        }
        prop_assert!(logger.is_enabled(Severity::Fatal));
    }
}
