//! Diary corpus with hand-checked deductions.
//!
//! Formats per entity:
//! - Margot, Frank, Bea: day-month-year
//! - Peter: month-day-year
//! - Elise: year-month-day
//! - Zed: never determined
//!
//! Bea only resolves in the second sweep: her February record needs the
//! month fixed by a later record before the 29 can be ruled out as a day.

use datemark_core::Corpus;

pub const DIARY: &str = "\
03-02-29: Bea
11-09-01: Margot, Bea
09-11-01: Peter
25-12-95: Margot
01-09-11: Elise, Zed
12-25-95: Peter
95-12-25: Elise
11-01-09: Frank
31-12-97: Frank
15-06-20: Bea
10-09-01: Frank
";

/// Sorted entities with an entry on 2001-09-11.
pub const DIARY_MATCHES: [&str; 4] = ["Bea", "Elise", "Margot", "Peter"];

/// Only Bea's records; converges in exactly two sweeps.
pub const BEA_ONLY: &str = "\
03-02-29: Bea
11-09-01: Bea
15-06-20: Bea
";

/// An entity whose observations are inconsistent.
pub const CONTRADICTORY: &str = "\
25-12-95: Margot
13-13-13: Odd
";

pub fn diary_corpus() -> Corpus {
    parse(DIARY)
}

pub fn bea_corpus() -> Corpus {
    parse(BEA_ONLY)
}

pub fn contradictory_corpus() -> Corpus {
    parse(CONTRADICTORY)
}

fn parse(text: &str) -> Corpus {
    Corpus::parse(text).expect("fixture corpus must parse")
}
