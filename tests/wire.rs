mod tests {
    use binary_leds::{ColorAssignment, WireColor, WireSlot};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_wire_color_names() {
        assert_eq!(WireColor::parse_from_str("red"), Some(WireColor::Red));
        assert_eq!(WireColor::parse_from_str("g"), Some(WireColor::Green));
        assert_eq!(WireColor::parse_from_str("blue"), Some(WireColor::Blue));
        assert_eq!(WireColor::parse_from_str("yellow"), None);
        assert_eq!(WireColor::Green.as_str(), "green");
    }

    #[test]
    fn test_wire_color_from_raw() {
        assert_eq!(WireColor::from_raw(0), Some(WireColor::Red));
        assert_eq!(WireColor::from_raw(2), Some(WireColor::Blue));
        assert_eq!(WireColor::from_raw(3), None);
    }

    #[test]
    fn test_wire_slot_from_raw() {
        assert_eq!(WireSlot::from_raw(2).map(WireSlot::index), Some(2));
        assert_eq!(WireSlot::from_raw(3), None);
    }

    #[test]
    fn test_assignment_rejects_repeats() {
        assert!(
            ColorAssignment::from_colors([WireColor::Red, WireColor::Red, WireColor::Blue])
                .is_none()
        );
        let assignment =
            ColorAssignment::from_colors([WireColor::Blue, WireColor::Red, WireColor::Green])
                .unwrap();
        assert_eq!(assignment.color_of(WireSlot::ALL[0]), WireColor::Blue);
        assert_eq!(assignment.slot_of(WireColor::Green), WireSlot::ALL[2]);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let colors = ColorAssignment::shuffled(&mut rng).colors();
            assert!(ColorAssignment::from_colors(colors).is_some());
        }
    }

    #[test]
    fn test_shuffle_reaches_every_permutation() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut seen: Vec<[WireColor; 3]> = Vec::new();
        for _ in 0..2000 {
            let colors = ColorAssignment::shuffled(&mut rng).colors();
            if !seen.contains(&colors) {
                seen.push(colors);
            }
        }
        assert_eq!(seen.len(), 6);
    }
}
