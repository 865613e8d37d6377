//! Data-driven transition tables
//!
//! A variant is nothing more than a [`RuleSet`]: the kinds a cell may hold,
//! which kinds count as land-like or forest-like for neighbor counting, and an
//! ordered list of rules. For a given cell the first rule whose source kind
//! and neighbor condition match is the only one considered; if its random
//! draw fails the cell stays unchanged rather than falling through.

use crate::algorithm::neighborhood::{MAX_NEIGHBORS, NeighborCounts};
use crate::algorithm::random::RandomSource;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::{KindSet, TileKind, Variant};

/// Set of accepted neighbor counts in `0..=MAX_NEIGHBORS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountSet(u8);

impl CountSet {
    /// Accepts every possible count
    pub const ANY: Self = Self::between(0, MAX_NEIGHBORS);
    /// Accepts no count
    pub const NONE: Self = Self(0);

    /// Counts in `low..=high`, clipped to the possible range
    pub const fn between(low: u8, high: u8) -> Self {
        let mut bits = 0;
        let mut n = low;
        while n <= high && n <= MAX_NEIGHBORS {
            bits |= 1 << n;
            n += 1;
        }
        Self(bits)
    }

    /// Exactly `n`
    pub const fn exactly(n: u8) -> Self {
        Self::between(n, n)
    }

    /// `n` or fewer
    pub const fn at_most(n: u8) -> Self {
        Self::between(0, n)
    }

    /// `n` or more
    pub const fn at_least(n: u8) -> Self {
        Self::between(n, MAX_NEIGHBORS)
    }

    /// Strictly fewer than `n`
    pub const fn less_than(n: u8) -> Self {
        match n.checked_sub(1) {
            Some(high) => Self::between(0, high),
            None => Self::NONE,
        }
    }

    /// Strictly more than `n`
    pub const fn greater_than(n: u8) -> Self {
        match n.checked_add(1) {
            Some(low) => Self::between(low, MAX_NEIGHBORS),
            None => Self::NONE,
        }
    }

    /// Counts accepted by either set
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether `count` is accepted
    pub const fn contains(self, count: u8) -> bool {
        count <= MAX_NEIGHBORS && self.0 & (1 << count) != 0
    }
}

/// Conjunction of accepted land and forest neighbor counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Condition {
    /// Accepted land-like neighbor counts
    pub land: CountSet,
    /// Accepted forest-like neighbor counts
    pub forest: CountSet,
}

impl Condition {
    /// Matches every neighborhood
    pub const ALWAYS: Self = Self {
        land: CountSet::ANY,
        forest: CountSet::ANY,
    };

    /// Condition on the land count only
    pub const fn land(land: CountSet) -> Self {
        Self {
            land,
            forest: CountSet::ANY,
        }
    }

    /// Condition on the forest count only
    pub const fn forest(forest: CountSet) -> Self {
        Self {
            land: CountSet::ANY,
            forest,
        }
    }

    /// Add a forest constraint to this condition
    pub const fn and_forest(self, forest: CountSet) -> Self {
        Self {
            land: self.land,
            forest,
        }
    }

    /// Whether the counts satisfy both constraints
    pub const fn matches(&self, counts: NeighborCounts) -> bool {
        self.land.contains(counts.land) && self.forest.contains(counts.forest)
    }
}

/// One row of a transition table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Kind the cell must currently hold
    pub from: TileKind,
    /// Neighborhood the cell must see
    pub when: Condition,
    /// Chance in `[0, 1]` that a matching cell transitions
    pub probability: f64,
    /// Kind the cell becomes when the transition fires
    pub to: TileKind,
}

impl Rule {
    /// Rule that always fires when it matches
    pub const fn always(from: TileKind, when: Condition, to: TileKind) -> Self {
        Self {
            from,
            when,
            probability: 1.0,
            to,
        }
    }

    /// Rule that fires with `probability` when it matches
    pub const fn chance(from: TileKind, when: Condition, probability: f64, to: TileKind) -> Self {
        Self {
            from,
            when,
            probability,
            to,
        }
    }

    /// Whether this rule applies to a cell of `kind` seeing `counts`
    pub const fn matches(&self, kind: TileKind, counts: NeighborCounts) -> bool {
        self.from as u8 == kind as u8 && self.when.matches(counts)
    }

    /// Roll for the transition
    ///
    /// Certain and impossible rules consume no draw, which keeps deterministic
    /// tables free of any dependence on the random source.
    pub fn fires<R: RandomSource + ?Sized>(&self, rng: &mut R) -> bool {
        if self.probability >= 1.0 {
            true
        } else if self.probability <= 0.0 {
            false
        } else {
            rng.next_unit() < self.probability
        }
    }
}

/// Complete configuration of one automaton variant
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    kinds: KindSet,
    land_like: KindSet,
    forest_like: KindSet,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a custom rule set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The kind set is empty
    /// - A rule's probability is outside `[0, 1]` or not a number
    /// - A rule refers to a kind outside the kind set
    pub fn new(
        kinds: KindSet,
        land_like: KindSet,
        forest_like: KindSet,
        rules: Vec<Rule>,
    ) -> Result<Self> {
        if kinds.is_empty() {
            return Err(invalid_parameter(
                "kinds",
                &"empty",
                &"a rule set needs at least one tile kind",
            ));
        }

        for (index, rule) in rules.iter().enumerate() {
            if !(0.0..=1.0).contains(&rule.probability) {
                return Err(invalid_parameter(
                    "probability",
                    &rule.probability,
                    &format!("rule {index} must have a probability within [0, 1]"),
                ));
            }
            if !kinds.contains(rule.from) || !kinds.contains(rule.to) {
                return Err(invalid_parameter(
                    "rules",
                    &format!("{} -> {}", rule.from, rule.to),
                    &format!("rule {index} refers to a kind outside the kind set"),
                ));
            }
        }

        Ok(Self {
            kinds,
            land_like,
            forest_like,
            rules,
        })
    }

    /// Table for the given variant
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Standard4 => Self::standard4(),
            Variant::Extended5 => Self::extended5(),
        }
    }

    /// Four kinds, deterministic thresholds
    pub fn standard4() -> Self {
        use TileKind::{CoastalWater, Grass, Land, Water};

        Self {
            kinds: Variant::Standard4.kinds(),
            land_like: KindSet::of(&[Land, Grass]),
            forest_like: KindSet::EMPTY,
            rules: vec![
                Rule::always(Land, Condition::land(CountSet::at_most(1)), CoastalWater),
                Rule::always(Land, Condition::land(CountSet::at_least(3)), Grass),
                Rule::always(CoastalWater, Condition::land(CountSet::at_least(3)), Land),
                Rule::always(CoastalWater, Condition::land(CountSet::less_than(1)), Water),
                Rule::always(Water, Condition::land(CountSet::greater_than(0)), CoastalWater),
            ],
        }
    }

    /// Five kinds including forest, probabilistic transitions
    pub fn extended5() -> Self {
        use TileKind::{CoastalWater, Forest, Grass, Land, Water};

        let forest_cluster = CountSet::between(1, 3);
        let forest_unstable = CountSet::at_most(2).or(CountSet::greater_than(3));

        Self {
            kinds: Variant::Extended5.kinds(),
            land_like: KindSet::of(&[Land, Grass, Forest]),
            forest_like: KindSet::of(&[Forest]),
            rules: vec![
                Rule::chance(Land, Condition::land(CountSet::at_most(1)), 0.10, CoastalWater),
                Rule::chance(Land, Condition::land(CountSet::greater_than(3)), 0.75, Grass),
                Rule::chance(Grass, Condition::land(CountSet::less_than(4)), 0.75, Land),
                Rule::chance(
                    Grass,
                    Condition::land(CountSet::greater_than(1)).and_forest(forest_cluster),
                    0.30,
                    Forest,
                ),
                Rule::chance(Forest, Condition::forest(forest_unstable), 0.40, Grass),
                Rule::chance(CoastalWater, Condition::land(CountSet::at_least(3)), 0.25, Land),
                Rule::chance(CoastalWater, Condition::land(CountSet::less_than(1)), 0.20, Water),
                Rule::chance(Water, Condition::land(CountSet::greater_than(0)), 0.30, CoastalWater),
            ],
        }
    }

    /// Kinds a cell may hold
    pub const fn kinds(&self) -> KindSet {
        self.kinds
    }

    /// Kinds counted toward the land count
    pub const fn land_like(&self) -> KindSet {
        self.land_like
    }

    /// Kinds counted toward the forest count
    pub const fn forest_like(&self) -> KindSet {
        self.forest_like
    }

    /// Ordered transition rules
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule applying to a cell of `kind` seeing `counts`
    pub fn first_match(&self, kind: TileKind, counts: NeighborCounts) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(kind, counts))
    }
}
