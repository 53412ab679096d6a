//! Tests for step records and the gated recorder

#[cfg(test)]
mod tests {
    use trominoes::algorithm::steps::{StepRecorder, TilingStep};
    use trominoes::spatial::Position;

    fn sample_step(id: u32) -> TilingStep {
        TilingStep::new(
            id,
            [Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)],
        )
    }

    // Tests the human-readable step line
    // Verified by printing cells as `[r, c]`
    #[test]
    fn test_step_display() {
        assert_eq!(
            sample_step(1).to_string(),
            "Tile 1 placed at (0,1), (1,0), (1,1)"
        );
    }

    // Tests a disabled recorder never invokes the step builder
    // Verified by calling the builder before matching on the recorder
    #[test]
    fn test_disabled_recorder_skips_builder() {
        let mut recorder = StepRecorder::new(false);
        assert!(matches!(recorder, StepRecorder::Disabled));

        recorder.record(|| unreachable!("disabled recorder must not build steps"));
        assert!(recorder.into_steps().is_empty());
    }

    // Tests recording keeps insertion order
    // Verified by inserting each step at the front
    #[test]
    fn test_recording_keeps_order() {
        let mut recorder = StepRecorder::new(true);
        assert!(matches!(recorder, StepRecorder::Recording(_)));

        for id in 1..=3 {
            recorder.record(|| sample_step(id));
        }

        let ids: Vec<_> = recorder.into_steps().iter().map(|s| s.tile_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
