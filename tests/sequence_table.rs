mod tests {
    use binary_leds::sequence::{MAX_VALUE, SEQUENCE_COUNT, SEQUENCE_LENGTH};
    use binary_leds::{SequenceId, SequenceTable, WireColor};

    #[test]
    fn test_table_dimensions() {
        assert_eq!(SequenceTable::sequence_count(), 8);
        assert_eq!(SequenceId::ALL.len(), SEQUENCE_COUNT);
        for id in SequenceId::ALL {
            assert_eq!(SequenceTable::sequence(id).values().len(), SEQUENCE_LENGTH);
        }
    }

    #[test]
    fn test_values_fit_five_lamps() {
        for id in SequenceId::ALL {
            for position in 0..SEQUENCE_LENGTH {
                assert!(SequenceTable::value_at(id, position) <= MAX_VALUE);
            }
        }
    }

    #[test]
    fn test_solutions_are_positions() {
        for id in SequenceId::ALL {
            for color in WireColor::ALL {
                assert!(SequenceTable::solution(id, color) < SEQUENCE_LENGTH);
            }
        }
    }

    #[test]
    fn test_first_sequence() {
        let id = SequenceId::from_raw(0).unwrap();
        assert_eq!(
            SequenceTable::sequence(id).values(),
            &[17, 15, 6, 2, 24, 8, 26, 25, 21, 24, 1, 15, 18, 8]
        );
        assert_eq!(SequenceTable::solution(id, WireColor::Red), 5);
        assert_eq!(SequenceTable::solution(id, WireColor::Green), 3);
        assert_eq!(SequenceTable::solution(id, WireColor::Blue), 7);
    }

    #[test]
    fn test_last_sequence() {
        let id = SequenceId::from_raw(7).unwrap();
        assert_eq!(SequenceTable::value_at(id, 0), 4);
        assert_eq!(SequenceTable::value_at(id, 13), 19);
        let solutions = SequenceTable::sequence(id).solutions();
        assert_eq!(solutions.position(WireColor::Red), 9);
        assert_eq!(solutions.position(WireColor::Green), 5);
        assert_eq!(solutions.position(WireColor::Blue), 10);
    }

    #[test]
    fn test_sequence_id_from_raw() {
        assert_eq!(SequenceId::from_raw(3).map(SequenceId::as_raw), Some(3));
        assert_eq!(SequenceId::from_raw(8), None);
        assert_eq!(SequenceId::from_raw(255), None);
    }
}
