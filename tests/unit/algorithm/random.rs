//! Tests for seeded and scripted randomness sources

#[cfg(test)]
mod tests {
    use mazeforge::MazeError;
    use mazeforge::algorithm::random::{RandomSource, RngSource, SeededSource, SequenceSource};
    use rand::{SeedableRng, rngs::StdRng};

    fn draw_three<S: RandomSource>(mut source: S) -> Vec<usize> {
        (0..3).filter_map(|_| source.choose_index(10).ok()).collect()
    }

    // Tests identical seeds replay identical draws
    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut first = SeededSource::seeded(7);
        let mut second = SeededSource::seeded(7);

        for len in 1..50 {
            let a = first.choose_index(len).ok();
            let b = second.choose_index(len).ok();
            assert_eq!(a, b);
            assert!(a.is_some_and(|index| index < len));
        }
    }

    // Tests the adapter accepts any rand generator
    #[test]
    fn test_rng_source_wraps_existing_generator() {
        let mut source = RngSource::new(StdRng::seed_from_u64(3));
        assert_eq!(source.choose_index(1).ok(), Some(0));

        let mut expected = RngSource::new(source.into_inner());
        let mut replay = RngSource::new(StdRng::seed_from_u64(3));
        assert!(replay.choose_index(1).is_ok());
        assert_eq!(expected.choose_index(100).ok(), replay.choose_index(100).ok());
    }

    // Tests choosing from an empty range is rejected
    #[test]
    fn test_empty_range_is_rejected() {
        let mut seeded = SeededSource::seeded(1);
        assert!(matches!(
            seeded.choose_index(0),
            Err(MazeError::InvalidParameter { .. })
        ));

        let mut scripted = SequenceSource::new([4]);
        assert!(scripted.choose_index(0).is_err());
        assert_eq!(scripted.remaining(), 1);
    }

    // Tests scripted values are reduced modulo the range
    #[test]
    fn test_sequence_source_replays_script() {
        let mut source = SequenceSource::new([0, 5, 7]);
        assert_eq!(source.choose_index(4).ok(), Some(0));
        assert_eq!(source.choose_index(4).ok(), Some(1));
        assert_eq!(source.choose_index(3).ok(), Some(1));
        assert_eq!(source.consumed(), 3);
        assert_eq!(source.remaining(), 0);
    }

    // Tests drawing past the script surfaces a source failure
    #[test]
    fn test_sequence_source_exhaustion() {
        let mut source = SequenceSource::new([1]);
        assert!(source.choose_index(2).is_ok());

        let error = source.choose_index(2);
        assert!(matches!(error, Err(MazeError::RandomSource { .. })));
        assert_eq!(source.consumed(), 1);
    }

    // Tests a mutable reference can stand in for the source itself
    #[test]
    fn test_mutable_reference_is_a_source() {
        let mut source = SequenceSource::new([1, 2, 3, 4]);
        assert_eq!(draw_three(&mut source), vec![1, 2, 3]);
        assert_eq!(source.remaining(), 1);
    }
}
