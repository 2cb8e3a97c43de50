use std::collections::BTreeMap;

use cubescramble::{Pattern, PatternSet, Puzzle, ScrambleError, ScrambleParams, Scrambler};
use serde::Serialize;
use strum::IntoEnumIterator;

/// Count of scrambles containing each pattern.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tally {
    pub total: usize,
    pub counts: BTreeMap<Pattern, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self {
            total: 0,
            counts: Pattern::iter().map(|p| (p, 0)).collect(),
        }
    }

    pub fn record(&mut self, patterns: PatternSet) {
        self.total += 1;
        for pattern in patterns.iter() {
            *self.counts.entry(pattern).or_default() += 1;
        }
    }

    pub fn count(&self, pattern: Pattern) -> usize {
        self.counts.get(&pattern).copied().unwrap_or(0)
    }

    /// Returns the percentage of scrambles containing `pattern`, or zero if
    /// nothing was recorded.
    pub fn percent(&self, pattern: Pattern) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(pattern) as f64 / self.total as f64 * 100.0
    }

    /// Returns one line per pattern, such as
    /// `512/1000 contained inverses (51.20%)`.
    pub fn report_lines(&self) -> Vec<String> {
        Pattern::iter()
            .map(|p| {
                let count = self.count(p);
                let total = self.total;
                let plural = p.plural();
                let percent = self.percent(p);
                format!("{count}/{total} contained {plural} ({percent:.2}%)")
            })
            .collect()
    }
}

/// Returns the seed for the `i`th scramble generated from a base seed.
pub(crate) fn sample_seed(base_seed: &str, i: usize) -> String {
    format!("{base_seed}_{i}")
}

/// Generates `samples` scrambles and counts the patterns in them.
///
/// If `seed` is given, the whole run is reproducible.
pub(crate) fn run_samples<P: Puzzle>(
    scrambler: &Scrambler<P>,
    samples: usize,
    seed: Option<&str>,
) -> Result<Tally, ScrambleError> {
    log::info!(
        "sampling {samples} scrambles of {} with policy {}",
        scrambler.puzzle().name(),
        scrambler.policy(),
    );

    let mut tally = Tally::new();
    for i in 0..samples {
        let scramble = match seed {
            Some(seed) => {
                let params = ScrambleParams::from_seed(sample_seed(seed, i));
                scrambler.generate_scramble_from_params(&params)?
            }
            None => scrambler.generate_random_scramble()?,
        };
        tally.record(PatternSet::detect(&scramble));
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use cubescramble::{FilterPolicy, NxNxN};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_report_lines() {
        let mut tally = Tally::new();
        tally.record([Pattern::Inverse, Pattern::Cancellation].into_iter().collect());
        tally.record([Pattern::Cancellation].into_iter().collect());
        tally.record(PatternSet::default());
        tally.record([Pattern::Cancellation].into_iter().collect());

        assert_eq!(
            tally.report_lines(),
            [
                "1/4 contained inverses (25.00%)",
                "3/4 contained cancellations (75.00%)",
                "0/4 contained spaced cancellations (0.00%)",
            ],
        );
    }

    #[test]
    fn test_empty_tally() {
        let tally = Tally::new();
        assert_eq!(tally.percent(Pattern::Inverse), 0.0);
        assert_eq!(tally.report_lines()[0], "0/0 contained inverses (0.00%)");
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let scrambler = Scrambler::new(NxNxN::new(3));
        let a = run_samples(&scrambler, 200, Some("seed")).unwrap();
        let b = run_samples(&scrambler, 200, Some("seed")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total, 200);
        assert!(a.count(Pattern::Cancellation) >= a.count(Pattern::Inverse));
    }

    #[test]
    fn test_filtered_run() {
        let scrambler = Scrambler::with_policy(NxNxN::new(4), FilterPolicy::ExcludeSameAxis);
        let tally = run_samples(&scrambler, 100, None).unwrap();
        assert_eq!(tally.total, 100);
        for pattern in Pattern::iter() {
            assert_eq!(tally.count(pattern), 0);
        }
    }

    #[test]
    fn test_invalid_puzzle() {
        let scrambler = Scrambler::new(NxNxN::new(1));
        assert!(matches!(
            run_samples(&scrambler, 10, None),
            Err(ScrambleError::InvalidConfiguration(_)),
        ));
        assert_eq!(run_samples(&scrambler, 0, None), Ok(Tally::new()));
    }
}
