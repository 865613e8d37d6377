//! Repository layout checks: every source file has a unit test file and vice versa

mod coverage;
