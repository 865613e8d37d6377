/// Grid seeding and round-by-round evolution
pub mod evolver;
/// Orthogonal neighbor enumeration and counting
pub mod neighborhood;
/// Injected randomness
pub mod random;
/// Data-driven transition tables
pub mod rules;

pub use evolver::{GridEvolver, PinPolicy, RoundObserver, evolve};
pub use random::{RandomSource, RngSource};
pub use rules::{Condition, CountSet, Rule, RuleSet};
