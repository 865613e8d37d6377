//! Grid evolution: seed a grid from a paint mask, then relax it round by round
//!
//! Every round is a synchronous update. Neighbor counts are read from the
//! current grid only and results are written into a freshly built successor,
//! which then replaces the current grid by move. No cell ever observes another
//! cell's update from the same round.

use bitvec::slice::BitSlice;

use crate::algorithm::neighborhood::count_neighbors;
use crate::algorithm::random::RandomSource;
use crate::algorithm::rules::RuleSet;
use crate::io::error::Result;
use crate::spatial::grid::TileGrid;
use crate::spatial::mask::PaintMask;
use crate::spatial::tiles::{KindSet, TileKind, Variant};

/// How long painted cells stay fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinPolicy {
    /// Painted cells only seed the initial grid and may change afterwards
    #[default]
    SeedOnly,
    /// Painted cells keep their kind through every round
    Persistent,
}

/// Receives the grid after initialization and after every round
pub trait RoundObserver {
    /// `round` is 0 for the initial grid and `n` after the n-th round
    fn on_round(&mut self, round: usize, grid: &TileGrid);
}

struct Silent;

impl RoundObserver for Silent {
    fn on_round(&mut self, _round: usize, _grid: &TileGrid) {}
}

/// Probabilistic cellular automaton over terrain tiles
#[derive(Debug, Clone)]
pub struct GridEvolver {
    rules: RuleSet,
    pin_policy: PinPolicy,
}

impl GridEvolver {
    /// Create an evolver for a custom rule set
    pub const fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            pin_policy: PinPolicy::SeedOnly,
        }
    }

    /// Create an evolver for one of the built-in variants
    pub fn for_variant(variant: Variant) -> Self {
        Self::new(RuleSet::for_variant(variant))
    }

    /// Choose how painted cells are treated after initialization
    pub fn with_pin_policy(self, pin_policy: PinPolicy) -> Self {
        Self { pin_policy, ..self }
    }

    /// Active rule set
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Active pin policy
    pub const fn pin_policy(&self) -> PinPolicy {
        self.pin_policy
    }

    /// Check a paint mask against the requested shape and the active kind set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mask row count differs from `height` or any row length from `width`
    /// - A painted kind is outside the active kind set
    pub fn validate(&self, width: usize, height: usize, mask: &PaintMask) -> Result<()> {
        mask.validate_shape(width, height)?;
        mask.validate_kinds(self.rules.kinds())
    }

    /// Validate the mask and build the initial grid without applying any rule
    ///
    /// Painted cells take their painted kind; every other cell draws a kind
    /// uniformly from the active kind set, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`GridEvolver::validate`]; no random
    /// draw is made when validation fails.
    pub fn seed_grid<R: RandomSource + ?Sized>(
        &self,
        width: usize,
        height: usize,
        mask: &PaintMask,
        rng: &mut R,
    ) -> Result<TileGrid> {
        self.validate(width, height, mask)?;

        let kinds = self.rules.kinds();
        Ok(TileGrid::from_fn(width, height, |x, y| {
            mask.get(x, y).unwrap_or_else(|| random_kind(kinds, rng))
        }))
    }

    /// Kind the cell at `(x, y)` takes in the next round, `None` outside the grid
    pub fn next_kind<R: RandomSource + ?Sized>(
        &self,
        grid: &TileGrid,
        x: usize,
        y: usize,
        rng: &mut R,
    ) -> Option<TileKind> {
        grid.get(x, y)
            .map(|kind| self.transition(grid, x, y, kind, rng))
    }

    /// Apply one synchronous round to every cell
    pub fn step<R: RandomSource + ?Sized>(&self, grid: &TileGrid, rng: &mut R) -> TileGrid {
        self.advance(grid, None, rng)
    }

    /// Seed a grid and apply `iterations` rounds
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`GridEvolver::validate`].
    pub fn evolve<R: RandomSource + ?Sized>(
        &self,
        width: usize,
        height: usize,
        mask: &PaintMask,
        iterations: usize,
        rng: &mut R,
    ) -> Result<TileGrid> {
        self.evolve_observed(width, height, mask, iterations, rng, &mut Silent)
    }

    /// Like [`GridEvolver::evolve`], reporting every intermediate grid to `observer`
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`GridEvolver::validate`]; the
    /// observer is not called when validation fails.
    pub fn evolve_observed<R: RandomSource + ?Sized>(
        &self,
        width: usize,
        height: usize,
        mask: &PaintMask,
        iterations: usize,
        rng: &mut R,
        observer: &mut dyn RoundObserver,
    ) -> Result<TileGrid> {
        let mut current = self.seed_grid(width, height, mask, rng)?;
        let pinned = match self.pin_policy {
            PinPolicy::Persistent => Some(mask.pinned_bits()),
            PinPolicy::SeedOnly => None,
        };

        observer.on_round(0, &current);
        for round in 1..=iterations {
            current = self.advance(&current, pinned.as_deref(), rng);
            observer.on_round(round, &current);
        }

        Ok(current)
    }

    fn advance<R: RandomSource + ?Sized>(
        &self,
        current: &TileGrid,
        pinned: Option<&BitSlice>,
        rng: &mut R,
    ) -> TileGrid {
        let width = current.width();
        TileGrid::from_fn(width, current.height(), |x, y| {
            let Some(kind) = current.get(x, y) else {
                return TileKind::Land;
            };
            let held = pinned
                .and_then(|bits| bits.get(y * width + x))
                .is_some_and(|bit| *bit);
            if held {
                kind
            } else {
                self.transition(current, x, y, kind, rng)
            }
        })
    }

    fn transition<R: RandomSource + ?Sized>(
        &self,
        grid: &TileGrid,
        x: usize,
        y: usize,
        kind: TileKind,
        rng: &mut R,
    ) -> TileKind {
        let counts = count_neighbors(
            grid,
            x,
            y,
            self.rules.land_like(),
            self.rules.forest_like(),
        );
        match self.rules.first_match(kind, counts) {
            Some(rule) if rule.fires(rng) => rule.to,
            _ => kind,
        }
    }
}

/// Seed a grid and apply `iterations` rounds of the chosen variant
///
/// # Errors
///
/// Returns [`crate::EvolveError::ShapeMismatch`] when `mask` is not exactly
/// `height` rows of `width` cells, and [`crate::EvolveError::UnsupportedKind`]
/// when it paints a kind the variant does not use.
pub fn evolve<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    mask: &PaintMask,
    iterations: usize,
    variant: Variant,
    rng: &mut R,
) -> Result<TileGrid> {
    GridEvolver::for_variant(variant).evolve(width, height, mask, iterations, rng)
}

fn random_kind<R: RandomSource + ?Sized>(kinds: KindSet, rng: &mut R) -> TileKind {
    // `RuleSet` guarantees a non-empty kind set, so `nth` always finds a member
    kinds
        .nth(rng.next_index(kinds.len()))
        .unwrap_or(TileKind::Land)
}
