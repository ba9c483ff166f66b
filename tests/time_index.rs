mod tests {
    use binary_leds::time_index::{
        PREDICTION_WINDOW, elapsed_steps, is_lit, ping_pong, position, steps_until_value,
    };
    use embassy_time::{Duration, Instant};

    const LENGTH: usize = 14;
    const SEQUENCE: [u8; LENGTH] = [17, 15, 6, 2, 24, 8, 26, 25, 21, 24, 1, 15, 18, 8];

    #[test]
    fn test_position_range() {
        let mut seen = [false; LENGTH];
        for elapsed in 0..10_000 {
            let position = ping_pong(elapsed, LENGTH);
            assert!(position < LENGTH, "position {position} out of range");
            seen[position] = true;
        }
        // The falling leg starts at the last index, so every index is visited
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_ping_pong_walk() {
        let rising: [usize; 13] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        for (elapsed, expected) in rising.iter().enumerate() {
            assert_eq!(ping_pong(elapsed as u64, LENGTH), *expected);
        }
        let falling: [usize; 13] = [13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        for (i, expected) in falling.iter().enumerate() {
            assert_eq!(ping_pong(13 + i as u64, LENGTH), *expected);
        }
        assert_eq!(ping_pong(26, LENGTH), 0);
    }

    #[test]
    fn test_ping_pong_period_and_steps() {
        for elapsed in 0..10_000u64 {
            let current = ping_pong(elapsed, LENGTH);
            let next = ping_pong(elapsed + 1, LENGTH);
            assert_eq!(current.abs_diff(next), 1, "elapsed {elapsed}");
            assert_eq!(current, ping_pong(elapsed + 26, LENGTH));
        }
    }

    #[test]
    fn test_ping_pong_degenerate_length() {
        assert_eq!(ping_pong(5, 1), 0);
        assert_eq!(ping_pong(5, 0), 0);
    }

    #[test]
    fn test_elapsed_steps_truncates_before_offset() {
        let start = Instant::from_millis(0);
        let step = Duration::from_millis(1000);
        assert_eq!(elapsed_steps(Instant::from_millis(999), start, 0, step), 0);
        assert_eq!(elapsed_steps(Instant::from_millis(1000), start, 0, step), 1);
        assert_eq!(elapsed_steps(Instant::from_millis(1999), start, 3, step), 4);
    }

    #[test]
    fn test_elapsed_steps_before_start() {
        let start = Instant::from_millis(5000);
        let step = Duration::from_millis(1000);
        assert_eq!(elapsed_steps(Instant::from_millis(1000), start, 2, step), 2);
    }

    #[test]
    fn test_quick_step_is_exact() {
        let start = Instant::from_millis(0);
        let step = Duration::from_millis(660);
        assert_eq!(elapsed_steps(Instant::from_millis(659), start, 0, step), 0);
        assert_eq!(elapsed_steps(Instant::from_millis(660), start, 0, step), 1);
        assert_eq!(elapsed_steps(Instant::from_millis(6600), start, 0, step), 10);
    }

    #[test]
    fn test_position_scenarios() {
        let start = Instant::from_millis(0);
        let step = Duration::from_millis(1000);

        let a = position(Instant::from_millis(5500), start, 0, step, LENGTH);
        assert_eq!(a, 5);
        assert_eq!(SEQUENCE[a], 8);

        let b = position(Instant::from_millis(15_500), start, 0, step, LENGTH);
        assert_eq!(b, 11);
        assert_eq!(SEQUENCE[b], 15);
    }

    #[test]
    fn test_position_is_deterministic() {
        let start = Instant::from_millis(1234);
        let step = Duration::from_millis(500);
        for ms in (0..60_000).step_by(137) {
            let now = Instant::from_millis(ms);
            assert_eq!(
                position(now, start, 7, step, LENGTH),
                position(now, start, 7, step, LENGTH)
            );
        }
    }

    #[test]
    fn test_is_lit() {
        let start = Instant::from_millis(0);
        let step = Duration::from_millis(1000);
        assert!(is_lit(Instant::from_millis(999), start, step, 1000));
        assert!(is_lit(Instant::from_millis(400), start, step, 500));
        assert!(is_lit(Instant::from_millis(500), start, step, 500));
        assert!(!is_lit(Instant::from_millis(501), start, step, 500));
        assert!(is_lit(Instant::from_millis(1200), start, step, 500));
    }

    #[test]
    fn test_steps_until_value() {
        let start = Instant::from_millis(0);
        let step = Duration::from_millis(1000);
        let now = Instant::from_millis(0);

        assert_eq!(steps_until_value(&SEQUENCE, 17, now, start, 0, step, 0), Some(0));
        assert_eq!(steps_until_value(&SEQUENCE, 8, now, start, 0, step, 0), Some(5));
        // Skipping past position 5 finds the same value at position 13
        assert_eq!(steps_until_value(&SEQUENCE, 8, now, start, 0, step, 6), Some(7));
        assert_eq!(steps_until_value(&SEQUENCE, 31, now, start, 0, step, 0), None);
    }

    #[test]
    fn test_steps_until_value_finds_every_value() {
        let start = Instant::from_millis(0);
        let step = Duration::from_millis(660);
        for offset in 0..LENGTH {
            for ms in (0..30_000).step_by(331) {
                let now = Instant::from_millis(ms);
                for value in SEQUENCE {
                    let steps = steps_until_value(&SEQUENCE, value, now, start, offset, step, 0);
                    assert!(steps.is_some_and(|s| s < PREDICTION_WINDOW));
                }
            }
        }
    }
}
