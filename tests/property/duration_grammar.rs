use std::time::Duration;

use proptest::prelude::*;

use later::config::parse_duration;

proptest! {
    #[test]
    fn whole_milliseconds_parse_exactly(ms in 0u64..10_000_000) {
        prop_assert_eq!(parse_duration(&format!("{ms}ms")), Ok(Duration::from_millis(ms)));
    }

    #[test]
    fn minutes_and_seconds_add_up(m in 0u64..1000, s in 0u64..60) {
        prop_assert_eq!(
            parse_duration(&format!("{m}m{s}s")),
            Ok(Duration::from_secs(m * 60 + s))
        );
    }

    #[test]
    fn explicit_plus_sign_changes_nothing(s in 0u64..100_000) {
        prop_assert_eq!(parse_duration(&format!("+{s}s")), parse_duration(&format!("{s}s")));
    }

    #[test]
    fn negative_durations_clamp_to_zero(ms in 0u64..10_000_000) {
        prop_assert_eq!(parse_duration(&format!("-{ms}ms")), Ok(Duration::ZERO));
    }
}
