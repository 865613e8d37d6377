//! Per-round frame capture and GIF generation for evolution visualization

use std::path::Path;

use image::{Delay, Frame};

use crate::algorithm::evolver::RoundObserver;
use crate::io::configuration::{
    FINAL_FRAME_HOLD, MAX_CAPTURED_CELLS, MAX_CAPTURED_FRAMES, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{EvolveError, Result, file_system_error, invalid_parameter};
use crate::io::image::render_grid;
use crate::spatial::grid::TileGrid;

/// Records grids of an evolution run and renders them as an animation on export
///
/// Only compact tile grids are kept. When the kept grids exceed the frame
/// limit every other one is dropped and the capture stride doubles, so long
/// runs are sampled evenly. The most recent round is always kept so the
/// animation ends on the final grid.
pub struct FrameCapture {
    scale: u32,
    stride: usize,
    frames: Vec<(usize, TileGrid)>,
    latest: Option<(usize, TileGrid)>,
}

impl FrameCapture {
    /// Capture frames drawn with `scale × scale` pixels per tile
    pub fn new(scale: u32, expected_rounds: usize) -> Self {
        Self {
            scale,
            stride: 1,
            frames: Vec::with_capacity(expected_rounds.saturating_add(1).min(MAX_CAPTURED_FRAMES)),
            latest: None,
        }
    }

    /// Number of frames currently held
    pub fn frame_count(&self) -> usize {
        self.frames.len() + usize::from(self.latest.is_some())
    }

    /// Rounds for which a frame is held, in capture order
    pub fn rounds(&self) -> Vec<usize> {
        self.frames
            .iter()
            .chain(self.latest.as_ref())
            .map(|(round, _)| *round)
            .collect()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// Frames faster than viewers can display are dropped so the animation
    /// keeps its apparent speed; the last frame is always kept and held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - A frame cannot be rendered at the configured scale
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        let scale = self.scale;
        let captured: Vec<TileGrid> = self
            .frames
            .into_iter()
            .chain(self.latest)
            .map(|(_, grid)| grid)
            .collect();

        if captured.is_empty() {
            return Err(invalid_parameter(
                "visualize",
                &output_path.display(),
                &"no rounds were captured",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms == 0 {
            VIEWER_MIN_FRAME_DELAY_MS as usize
        } else if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = render_frames(&captured, scale, skip_factor, effective_delay_ms)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| EvolveError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }

    fn frame_limit(grid: &TileGrid) -> usize {
        let cells = grid.width().saturating_mul(grid.height()).max(1);
        (MAX_CAPTURED_CELLS / cells).clamp(2, MAX_CAPTURED_FRAMES)
    }
}

impl RoundObserver for FrameCapture {
    fn on_round(&mut self, round: usize, grid: &TileGrid) {
        if round % self.stride != 0 {
            self.latest = Some((round, grid.clone()));
            return;
        }

        self.latest = None;
        self.frames.push((round, grid.clone()));

        if self.frames.len() > Self::frame_limit(grid) {
            let mut index = 0;
            self.frames.retain(|_| {
                let keep = index % 2 == 0;
                index += 1;
                keep
            });
            self.stride = self.stride.saturating_mul(2);

            if self.frames.last().is_some_and(|(kept, _)| *kept != round) {
                self.latest = Some((round, grid.clone()));
            }
        }
    }
}

fn render_frames(
    captured: &[TileGrid],
    scale: u32,
    skip_factor: usize,
    delay_ms: u32,
) -> Result<Vec<Frame>> {
    let last_index = captured.len().saturating_sub(1);
    let delay = Delay::from_numer_denom_ms(delay_ms, 1);
    let hold = Delay::from_numer_denom_ms(delay_ms.saturating_mul(FINAL_FRAME_HOLD), 1);

    captured
        .iter()
        .enumerate()
        .filter(|(index, _)| index % skip_factor.max(1) == 0 || *index == last_index)
        .map(|(index, grid)| -> Result<Frame> {
            let frame_delay = if index == last_index { hold } else { delay };
            Ok(Frame::from_parts(render_grid(grid, scale)?, 0, 0, frame_delay))
        })
        .collect()
}
