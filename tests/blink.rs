mod tests {
    use binary_leds::BlinkDelay;
    use embassy_time::Duration;

    #[test]
    fn test_blink_delay_durations() {
        assert_eq!(BlinkDelay::Normal.duration(), Duration::from_millis(1000));
        assert_eq!(BlinkDelay::Quick.duration(), Duration::from_millis(660));
        assert_eq!(BlinkDelay::Fastest.duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_blink_delay_escalation_floor() {
        let mut delay = BlinkDelay::default();
        assert_eq!(delay, BlinkDelay::Normal);
        for _ in 0..10 {
            let next = delay.escalate();
            assert!(next.duration() <= delay.duration());
            assert!(next.duration() >= Duration::from_millis(500));
            delay = next;
        }
        assert_eq!(delay, BlinkDelay::Fastest);
    }
}
