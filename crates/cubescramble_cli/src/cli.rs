use std::io::{Read, Write};
use std::path::PathBuf;

use cubescramble::prelude::*;
use eyre::{Context, Result, eyre};
use serde::Serialize;

use crate::harness::{self, Tally};
use crate::settings::Settings;

/// Line printed after the statistics report.
const END_OF_REPORT_MARKER: &str = "pause";

/// NxNxN cube scrambler and scramble pattern statistics
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Settings file (YAML) layered over the built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

/// Options that select the puzzle and how it is scrambled.
#[derive(clap::Args, Debug, Default, Clone)]
pub(crate) struct PuzzleArgs {
    /// Cube order (N in NxNxN).
    #[arg(short = 'n', long = "size")]
    pub cube_size: Option<u16>,
    /// Which moves may follow the previous move.
    #[arg(long)]
    pub policy: Option<FilterPolicy>,
}

impl PuzzleArgs {
    fn scrambler(&self, settings: &Settings) -> Scrambler<NxNxN> {
        let n = self.cube_size.unwrap_or(settings.cube_size);
        let policy = self.policy.unwrap_or(settings.policy);
        Scrambler::with_policy(NxNxN::new(n), policy)
    }
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print random scrambles, one per line.
    Generate {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Number of scrambles to generate.
        #[arg(short, long)]
        count: Option<usize>,
        /// Seed for reproducible scrambles.
        #[arg(long)]
        seed: Option<String>,
        /// Print scrambles and their parameters as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Generate many scrambles and report how often each pattern occurs.
    Stats {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Number of scrambles to sample.
        #[arg(short, long)]
        samples: Option<usize>,
        /// Seed for a reproducible run.
        #[arg(long)]
        seed: Option<String>,
        /// Print the counts as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Find patterns in scrambles and print them as JSON.
    Analyze {
        /// Cube order (N in NxNxN).
        #[arg(short = 'n', long = "size")]
        cube_size: Option<u16>,
        /// File with one scramble per line, use '-' for stdin.
        #[arg(value_parser)]
        input: clio::Input,
    },
}

#[derive(Serialize, Debug)]
struct GeneratedScramble {
    params: ScrambleParams,
    scramble: Scramble,
}

#[derive(Serialize, Debug)]
struct StatsReport {
    puzzle: String,
    policy: FilterPolicy,
    seed: Option<String>,
    #[serde(flatten)]
    tally: Tally,
}

#[derive(Serialize, Debug)]
struct ScrambleAnalysis {
    line: usize,
    scramble: String,
    patterns: PatternSet,
    inverses: Vec<[usize; 2]>,
    cancellations: Vec<[usize; 2]>,
    spaced_cancellations: Vec<[usize; 2]>,
}

pub(crate) fn exec(subcommand: Subcommand, settings: &Settings) -> Result<()> {
    match subcommand {
        Subcommand::Generate {
            puzzle,
            count,
            seed,
            json,
        } => {
            let scrambler = puzzle.scrambler(settings);
            let count = count.unwrap_or(settings.count);
            let output = generate_scrambles(&scrambler, count, seed.as_deref())?;
            if json {
                write_json_output(&output)
            } else {
                for GeneratedScramble { scramble, .. } in &output {
                    println!("{scramble}");
                }
                Ok(())
            }
        }

        Subcommand::Stats {
            puzzle,
            samples,
            seed,
            json,
        } => {
            let scrambler = puzzle.scrambler(settings);
            let samples = samples.unwrap_or(settings.samples);

            let tally = harness::run_samples(&scrambler, samples, seed.as_deref())
                .wrap_err("error sampling scrambles")?;

            if json {
                write_json_output(&StatsReport {
                    puzzle: scrambler.puzzle().name(),
                    policy: scrambler.policy(),
                    seed,
                    tally,
                })
            } else {
                write_stats_report(&mut std::io::stdout().lock(), &tally)
                    .context("error writing to stdout")
            }
        }

        Subcommand::Analyze {
            cube_size,
            mut input,
        } => {
            let cube = NxNxN::new(cube_size.unwrap_or(settings.cube_size));
            let mut buffer = String::new();
            input
                .read_to_string(&mut buffer)
                .wrap_err("error reading scrambles")?;

            let mut output = vec![];
            for (i, line) in buffer.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let scramble = parse_scramble(&cube, line)
                    .map_err(|e| eyre!("error on line {}: {e}", i + 1))?;
                output.push(ScrambleAnalysis {
                    line: i + 1,
                    scramble: scramble.to_string(),
                    patterns: PatternSet::detect(&scramble),
                    inverses: find_inverses(&scramble),
                    cancellations: find_cancellations(&scramble),
                    spaced_cancellations: find_spaced_cancellations(&scramble),
                });
            }
            log::info!("analyzed {} scrambles of {}", output.len(), cube.name());
            write_json_output(&output)
        }
    }
}

fn generate_scrambles<P: Puzzle>(
    scrambler: &Scrambler<P>,
    count: usize,
    seed: Option<&str>,
) -> Result<Vec<GeneratedScramble>> {
    (0..count)
        .map(|i| -> Result<GeneratedScramble> {
            let params = match seed {
                Some(seed) => ScrambleParams::from_seed(harness::sample_seed(seed, i)),
                None => ScrambleParams::new(),
            };
            let scramble = scrambler
                .generate_scramble_from_params(&params)
                .wrap_err("error generating scramble")?;
            Ok(GeneratedScramble { params, scramble })
        })
        .collect()
}

/// Writes one line per pattern, then the end-of-report marker.
fn write_stats_report(w: &mut impl Write, tally: &Tally) -> std::io::Result<()> {
    for line in tally.report_lines() {
        writeln!(w, "{line}")?;
    }
    writeln!(w, "{END_OF_REPORT_MARKER}")
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_stats_args() {
        let args = Args::try_parse_from([
            "cubescramble",
            "stats",
            "-n",
            "4",
            "--policy",
            "exclude_same_face",
            "--samples",
            "10",
            "--seed",
            "abc",
        ])
        .unwrap();
        let Subcommand::Stats {
            puzzle,
            samples,
            seed,
            json,
        } = args.subcommand
        else {
            panic!("expected stats subcommand");
        };
        assert_eq!(puzzle.cube_size, Some(4));
        assert_eq!(puzzle.policy, Some(FilterPolicy::ExcludeSameFace));
        assert_eq!(samples, Some(10));
        assert_eq!(seed.as_deref(), Some("abc"));
        assert!(!json);
    }

    #[test]
    fn test_bad_policy_is_rejected() {
        assert!(Args::try_parse_from(["cubescramble", "generate", "--policy", "nope"]).is_err());
    }

    #[test]
    fn test_stats_text_report() {
        let scrambler = Scrambler::new(NxNxN::new(3));
        let tally = harness::run_samples(&scrambler, 50, Some("report")).unwrap();

        let mut out = vec![];
        write_stats_report(&mut out, &tally).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[..3].to_vec(), tally.report_lines());
        let inverses = tally.count(Pattern::Inverse);
        assert!(lines[0].starts_with(&format!("{inverses}/50 contained inverses (")));
        assert!(lines[1].contains("/50 contained cancellations ("));
        assert!(lines[2].contains("/50 contained spaced cancellations ("));
        assert_eq!(lines[3], "pause");
    }

    #[test]
    fn test_generate_seeded_scrambles() {
        let cube = NxNxN::new(4);
        let scrambler = Scrambler::new(cube);
        let a = generate_scrambles(&scrambler, 3, Some("abc")).unwrap();
        let b = generate_scrambles(&scrambler, 3, Some("abc")).unwrap();

        assert_eq!(a.len(), 3);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.scramble, y.scramble);
            let text = x.scramble.to_string();
            assert_eq!(text.split(' ').count(), 40);
            assert_eq!(parse_scramble(&cube, &text), Ok(x.scramble.clone()));
        }
        assert_eq!(a[1].params.seed, "abc_1");
        assert_ne!(a[0].scramble, a[1].scramble);
    }

    #[test]
    fn test_generate_fails_without_moves() {
        let scrambler = Scrambler::new(NxNxN::new(1));
        assert!(generate_scrambles(&scrambler, 1, None).is_err());
        assert!(generate_scrambles(&scrambler, 0, None).unwrap().is_empty());
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings {
            cube_size: 3,
            samples: 5,
            count: 1,
            policy: FilterPolicy::Unfiltered,
            log_level: "warn".to_owned(),
        };
        let scrambler = PuzzleArgs::default().scrambler(&settings);
        assert_eq!(scrambler.puzzle(), &NxNxN::new(3));
        assert_eq!(scrambler.policy(), FilterPolicy::Unfiltered);

        let puzzle_args = PuzzleArgs {
            cube_size: Some(6),
            policy: Some(FilterPolicy::ExcludeSameAxis),
        };
        let scrambler = puzzle_args.scrambler(&settings);
        assert_eq!(scrambler.puzzle(), &NxNxN::new(6));
        assert_eq!(scrambler.policy(), FilterPolicy::ExcludeSameAxis);
    }
}
