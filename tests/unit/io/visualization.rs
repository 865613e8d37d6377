//! Tests for per-round frame capture and GIF export

#[cfg(test)]
mod tests {
    use image::AnimationDecoder;
    use image::codecs::gif::GifDecoder;
    use shoreline::algorithm::evolver::{GridEvolver, RoundObserver};
    use shoreline::algorithm::random::RngSource;
    use shoreline::io::configuration::MAX_CAPTURED_FRAMES;
    use shoreline::io::visualization::FrameCapture;
    use shoreline::spatial::grid::TileGrid;
    use shoreline::spatial::mask::PaintMask;
    use shoreline::spatial::tiles::{TileKind, Variant};
    use std::fs::File;
    use std::io::BufReader;
    use tempfile::TempDir;

    fn captured_run(rounds: usize) -> FrameCapture {
        let mut capture = FrameCapture::new(2, rounds);
        let mut rng = RngSource::seeded(6);
        let result = GridEvolver::for_variant(Variant::Standard4).evolve_observed(
            6,
            4,
            &PaintMask::unset(6, 4),
            rounds,
            &mut rng,
            &mut capture,
        );
        assert!(result.is_ok());
        capture
    }

    // Tests that one frame is captured per round plus the seed grid
    // Verified by skipping the round 0 notification
    #[test]
    fn test_captures_every_round() {
        let capture = captured_run(3);

        assert_eq!(capture.frame_count(), 4);
        assert_eq!(capture.rounds(), vec![0, 1, 2, 3]);
    }

    // Tests GIF export of a captured run
    #[test]
    fn test_export_gif_writes_all_frames() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("anim").join("run.gif");

        let result = captured_run(3).export_gif(&path, 100);
        assert!(result.is_ok());

        let decoder = GifDecoder::new(BufReader::new(File::open(&path).unwrap())).unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].buffer().dimensions(), (12, 8));
    }

    // Tests that frames too fast for viewers are thinned while keeping the last one
    // Verified by dropping the last-frame exception in the filter
    #[test]
    fn test_fast_animation_is_thinned() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fast.gif");

        let result = captured_run(9).export_gif(&path, 5);
        assert!(result.is_ok());

        let decoder = GifDecoder::new(BufReader::new(File::open(&path).unwrap())).unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();
        // Ten captured frames with a skip factor of four keep frames 0, 4, 8 and 9
        assert_eq!(frames.len(), 4);
    }

    // Tests that an empty capture cannot be exported
    #[test]
    fn test_empty_capture_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.gif");

        let result = FrameCapture::new(2, 0).export_gif(&path, 100);

        assert!(result.is_err());
        assert!(!path.exists());
    }

    // Tests that render failures during capture surface on export
    #[test]
    fn test_render_error_is_reported_on_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.gif");

        let mut capture = FrameCapture::new(0, 1);
        capture.on_round(0, &TileGrid::filled(2, 2, TileKind::Water));
        assert_eq!(capture.frame_count(), 1);

        assert!(capture.export_gif(&path, 100).is_err());
        assert!(!path.exists());
    }

    // Tests that long runs are sampled evenly under the frame limit and end on the last round
    // Verified by pushing every round without thinning
    #[test]
    fn test_long_runs_are_capped() {
        let grid = TileGrid::filled(4, 4, TileKind::Grass);
        let mut capture = FrameCapture::new(1, 100_000);

        for round in 0..=2001 {
            capture.on_round(round, &grid);
            assert!(capture.frame_count() <= MAX_CAPTURED_FRAMES + 1);
        }

        let rounds = capture.rounds();
        assert_eq!(rounds.first(), Some(&0));
        assert_eq!(rounds.last(), Some(&2001));
        assert!(rounds.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(rounds.len() > MAX_CAPTURED_FRAMES / 4);

        // Sampled rounds share one stride; only the final round may break it
        let sampled = &rounds[..rounds.len() - 1];
        let stride = sampled[1] - sampled[0];
        assert!(sampled.windows(2).all(|pair| pair[1] - pair[0] == stride));

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("long.gif");
        assert!(capture.export_gif(&path, 100).is_ok());
    }
}
