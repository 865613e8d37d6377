//! Command-line interface for generating one terrain map per invocation

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tracing::{debug, info, warn};

use crate::algorithm::evolver::{GridEvolver, PinPolicy, RoundObserver};
use crate::algorithm::random::{RandomSource, RngSource};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_TILE_SCALE, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS, MAX_GRID_DIMENSION,
    MAX_ITERATIONS, STANDARD_ITERATIONS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::paint::load_paint_mask;
use crate::io::progress::RoundProgress;
use crate::io::request::{EvolveRequest, EvolveResponse};
use crate::io::visualization::FrameCapture;
use crate::spatial::grid::TileGrid;
use crate::spatial::mask::PaintMask;
use crate::spatial::tiles::{TileKind, Variant};

#[derive(Parser, Debug)]
#[command(name = "shoreline")]
#[command(
    author,
    version,
    about = "Grow coastal terrain maps with a stochastic cellular automaton"
)]
/// Command-line arguments for the terrain generator
pub struct Cli {
    /// Output file: `.png` renders the map, `.json` writes tile codes
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Grid width in tiles (defaults to the paint mask's width, else 64)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Grid height in tiles (defaults to the paint mask's height, else 48)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Rule table to apply
    #[arg(long, value_enum, default_value_t = Variant::Standard4)]
    pub variant: Variant,

    /// Rounds to apply; only honoured by extended5, standard4 always runs 10
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Random seed for reproducible generation (drawn and logged when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Paint mask: palette `.png` or `.json` grid of tile codes (-1 = unset)
    #[arg(short, long, value_name = "MASK")]
    pub paint: Option<PathBuf>,

    /// JSON request supplying shape, paint mask, rounds and variant
    #[arg(short, long, value_name = "REQUEST", conflicts_with = "paint")]
    pub request: Option<PathBuf>,

    /// Keep painted tiles fixed in every round instead of only seeding them
    #[arg(long)]
    pub pin_paint: bool,

    /// Write an animated GIF of every round
    #[arg(long, value_name = "GIF")]
    pub visualize: Option<PathBuf>,

    /// Pixels per tile in exported images
    #[arg(long, default_value_t = DEFAULT_TILE_SCALE)]
    pub scale: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pin policy selected by `--pin-paint`
    pub const fn pin_policy(&self) -> PinPolicy {
        if self.pin_paint {
            PinPolicy::Persistent
        } else {
            PinPolicy::SeedOnly
        }
    }
}

/// Encoding of the output file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered palette image
    Png,
    /// JSON rows of tile codes
    Json,
}

impl OutputFormat {
    /// Pick the format for `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is neither `.png` nor `.json`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("json") => Ok(Self::Json),
            _ => Err(invalid_parameter(
                "output",
                &path.display(),
                &"output must be a .png or .json file",
            )),
        }
    }
}

/// Fully resolved generation job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Grid width in tiles
    pub width: usize,
    /// Grid height in tiles
    pub height: usize,
    /// Rule table to apply
    pub variant: Variant,
    /// Rounds to apply
    pub iterations: usize,
    /// Seed tiles
    pub mask: PaintMask,
}

/// Runs one generation job described by CLI arguments
pub struct Session {
    cli: Cli,
}

struct RunObserver {
    progress: Option<RoundProgress>,
    capture: Option<FrameCapture>,
}

impl RoundObserver for RunObserver {
    fn on_round(&mut self, round: usize, grid: &TileGrid) {
        if let Some(progress) = &mut self.progress {
            progress.on_round(round, grid);
        }
        if let Some(capture) = &mut self.capture {
            capture.on_round(round, grid);
        }
    }
}

impl Session {
    /// Create a session for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve the job from a request file or from the shape options
    ///
    /// Without explicit `--width`/`--height` the grid takes the paint mask's
    /// shape, or the configured defaults when nothing is painted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request or paint mask file cannot be loaded
    /// - The grid or round count exceeds the configured limits
    pub fn plan(&self) -> Result<Job> {
        let job = if let Some(path) = &self.cli.request {
            if self.cli.iterations.is_some() {
                warn!("--iterations is ignored when a request file is given");
            }
            let request = EvolveRequest::load(path)?;
            Job {
                width: request.width,
                height: request.height,
                variant: request.variant,
                iterations: request.effective_iterations(),
                mask: request.paint_mask()?,
            }
        } else {
            let variant = self.cli.variant;
            if self.cli.iterations.is_some() && !variant.honours_iterations() {
                warn!(
                    rounds = STANDARD_ITERATIONS,
                    "--iterations is ignored by the {variant} variant"
                );
            }

            let painted = self.cli.paint.as_deref().map(load_paint_mask).transpose()?;
            let width = self
                .cli
                .width
                .or_else(|| painted.as_ref().map(PaintMask::width))
                .unwrap_or(DEFAULT_WIDTH);
            let height = self
                .cli
                .height
                .or_else(|| painted.as_ref().map(PaintMask::height))
                .unwrap_or(DEFAULT_HEIGHT);

            Job {
                width,
                height,
                variant,
                iterations: variant.rounds_for(self.cli.iterations),
                mask: painted.unwrap_or_else(|| PaintMask::unset(width, height)),
            }
        };

        check_limits(&job)?;
        Ok(job)
    }

    /// Plan, evolve and write the requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if planning, validation, evolution or any export fails.
    pub fn run(&self) -> Result<()> {
        let format = OutputFormat::from_path(&self.cli.output)?;
        let job = self.plan()?;

        let seed = self.cli.seed.unwrap_or_else(rand::random);
        info!(
            seed,
            width = job.width,
            height = job.height,
            variant = %job.variant,
            iterations = job.iterations,
            pinned = job.mask.pinned_count(),
            "Generating terrain"
        );

        let mut rng = RngSource::seeded(seed);
        let grid = self.evolve(&job, &mut rng)?;

        match format {
            OutputFormat::Png => export_grid_as_png(&grid, self.cli.scale, &self.cli.output)?,
            OutputFormat::Json => EvolveResponse::from_grid(&grid).save(&self.cli.output)?,
        }
        info!(path = %self.cli.output.display(), census = %census_summary(&grid), "Wrote terrain");

        Ok(())
    }

    /// Evolve a planned job, driving progress display and visualization capture
    ///
    /// # Errors
    ///
    /// Returns an error if the paint mask fails validation or the
    /// visualization cannot be written.
    pub fn evolve<R: RandomSource + ?Sized>(&self, job: &Job, rng: &mut R) -> Result<TileGrid> {
        let evolver = GridEvolver::for_variant(job.variant).with_pin_policy(self.cli.pin_policy());
        let mut observer = RunObserver {
            progress: self
                .cli
                .should_show_progress()
                .then(|| RoundProgress::new(job.iterations, job.variant.name())),
            capture: self
                .cli
                .visualize
                .as_ref()
                .map(|_| FrameCapture::new(self.cli.scale, job.iterations)),
        };

        let start_time = Instant::now();
        let result = evolver.evolve_observed(
            job.width,
            job.height,
            &job.mask,
            job.iterations,
            rng,
            &mut observer,
        );
        if let Some(progress) = &observer.progress {
            progress.finish();
        }
        let grid = result?;
        debug!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Evolution finished"
        );

        if let (Some(path), Some(capture)) = (&self.cli.visualize, observer.capture) {
            let frames = capture.frame_count();
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
            info!(path = %path.display(), frames, "Wrote visualization");
        }

        Ok(grid)
    }
}

fn check_limits(job: &Job) -> Result<()> {
    for (parameter, value) in [("width", job.width), ("height", job.height)] {
        if value > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
    }

    if job.iterations > MAX_ITERATIONS {
        return Err(invalid_parameter(
            "iterations",
            &job.iterations,
            &format!("must not exceed {MAX_ITERATIONS}"),
        ));
    }

    Ok(())
}

fn census_summary(grid: &TileGrid) -> String {
    TileKind::ALL
        .iter()
        .zip(grid.census())
        .filter(|(_, count)| *count > 0)
        .map(|(kind, count)| format!("{kind}={count}"))
        .collect::<Vec<_>>()
        .join(", ")
}
