use std::time::{Duration, Instant};

use indicatif::ProgressBar;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    case::TestCase,
    config::FuzzSettings,
    error::Result,
    pair_finder::{find_pair_brute, find_pair_indexed, is_valid_pair, Algorithm, Pair},
};

/// Disagreements kept in a cross-check report; the count is always exact.
const MAX_KEPT_DISAGREEMENTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    /// The returned indices are out of range, unordered, or miss the target.
    WrongPair,
    /// A valid pair, but not the one the case expects.
    Mismatch { expected: Pair },
    /// Nothing returned although a pair exists.
    Missed,
    /// A pair returned although the case expects none.
    Unexpected,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Passed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Passed => "passed",
            Verdict::WrongPair => "wrong pair",
            Verdict::Mismatch { .. } => "mismatch",
            Verdict::Missed => "missed",
            Verdict::Unexpected => "unexpected",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub name: String,
    pub result: Option<Pair>,
    pub verdict: Verdict,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub outcomes: Vec<CaseOutcome>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.verdict.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

pub struct CaseRunner {
    algorithm: Algorithm,
}

impl CaseRunner {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    pub fn run_case(&self, case: &TestCase) -> Result<CaseOutcome> {
        let expectation = case.expectation()?;

        let start = Instant::now();
        let result = self.algorithm.find(&case.nums, case.target);
        let elapsed = start.elapsed();

        let verdict = judge(case, result, expectation);
        log::debug!(
            "{} on {}: {:?} -> {}",
            self.algorithm,
            case.name,
            result,
            verdict.label()
        );

        Ok(CaseOutcome {
            name: case.name.clone(),
            result,
            verdict,
            elapsed,
        })
    }

    pub fn run_all(&self, cases: &[TestCase]) -> Result<RunSummary> {
        let outcomes = cases
            .iter()
            .map(|case| self.run_case(case))
            .collect::<Result<Vec<_>>>()?;

        Ok(RunSummary {
            algorithm: self.algorithm,
            outcomes,
        })
    }
}

fn judge(case: &TestCase, result: Option<Pair>, expectation: Option<Option<Pair>>) -> Verdict {
    if let Some(pair) = result {
        if !is_valid_pair(&case.nums, case.target, pair) {
            return Verdict::WrongPair;
        }
    }

    match (expectation, result) {
        (Some(Some(expected)), Some(pair)) if pair == expected => Verdict::Passed,
        (Some(Some(_)), None) => Verdict::Missed,
        (Some(Some(expected)), Some(_)) => Verdict::Mismatch { expected },
        (Some(None), Some(_)) => Verdict::Unexpected,
        (Some(None), None) => Verdict::Passed,
        // Without an expectation the exhaustive scan decides existence.
        (None, Some(_)) => Verdict::Passed,
        (None, None) => match find_pair_brute(&case.nums, case.target) {
            Some(_) => Verdict::Missed,
            None => Verdict::Passed,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disagreement {
    pub nums: Vec<i32>,
    pub target: i32,
    pub brute: Option<Pair>,
    pub indexed: Option<Pair>,
}

#[derive(Debug, Clone, Default)]
pub struct CrossCheckReport {
    pub trials: usize,
    /// Trials where a pair existed.
    pub found: usize,
    /// Trials where the two algorithms disagree on whether a pair exists.
    pub disagreement_count: usize,
    /// Trials where either algorithm returned an invalid pair.
    pub invalid_count: usize,
    pub disagreements: Vec<Disagreement>,
}

impl CrossCheckReport {
    pub fn is_clean(&self) -> bool {
        self.disagreement_count == 0 && self.invalid_count == 0
    }

    fn record(&mut self, nums: &[i32], target: i32, brute: Option<Pair>, indexed: Option<Pair>) {
        self.trials += 1;
        if brute.is_some() || indexed.is_some() {
            self.found += 1;
        }

        let invalid = [brute, indexed]
            .into_iter()
            .flatten()
            .any(|pair| !is_valid_pair(nums, target, pair));
        if invalid {
            self.invalid_count += 1;
        }

        if brute.is_some() != indexed.is_some() || invalid {
            if brute.is_some() != indexed.is_some() {
                self.disagreement_count += 1;
            }
            if self.disagreements.len() < MAX_KEPT_DISAGREEMENTS {
                self.disagreements.push(Disagreement {
                    nums: nums.to_vec(),
                    target,
                    brute,
                    indexed,
                });
            }
        }
    }

    /// Run both algorithms on the same input and record how they compare.
    pub fn compare(&mut self, nums: &[i32], target: i32) {
        self.record(
            nums,
            target,
            find_pair_brute(nums, target),
            find_pair_indexed(nums, target),
        );
    }

    fn merge(&mut self, other: CrossCheckReport) {
        self.trials += other.trials;
        self.found += other.found;
        self.disagreement_count += other.disagreement_count;
        self.invalid_count += other.invalid_count;
        let room = MAX_KEPT_DISAGREEMENTS.saturating_sub(self.disagreements.len());
        self.disagreements
            .extend(other.disagreements.into_iter().take(room));
    }
}

/// Draw a random sequence and a target. Half of the targets are built from
/// two elements of the sequence so that a pair is guaranteed to exist.
/// An inverted value range is sampled as if its bounds were swapped.
pub fn random_input(rng: &mut impl Rng, settings: &FuzzSettings) -> (Vec<i32>, i32) {
    let (min_value, max_value) = settings.value_range();
    let len = rng.random_range(0..=settings.max_len);
    let nums: Vec<i32> = (0..len)
        .map(|_| rng.random_range(min_value..=max_value))
        .collect();

    let target = if nums.len() >= 2 && rng.random_bool(0.5) {
        let i = rng.random_range(0..nums.len());
        let mut j = rng.random_range(0..nums.len() - 1);
        if j >= i {
            j += 1;
        }
        i64::from(nums[i]) + i64::from(nums[j])
    } else {
        let lo = 2 * i64::from(min_value);
        let hi = 2 * i64::from(max_value);
        rng.random_range(lo..=hi)
    };
    let target = target.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

    (nums, target)
}

fn run_trials(
    trials: usize,
    settings: &FuzzSettings,
    mut rng: StdRng,
    progress: &ProgressBar,
) -> CrossCheckReport {
    let mut report = CrossCheckReport::default();
    for _ in 0..trials {
        let (nums, target) = random_input(&mut rng, settings);
        report.compare(&nums, target);
        progress.inc(1);
    }
    report
}

/// Cross-check both algorithms on `settings.trials` random inputs, spread
/// over `settings.workers` blocking tasks. Worker `w` is seeded with
/// `seed + w`, so a run is reproducible for a given seed and worker count.
pub async fn cross_check(
    settings: &FuzzSettings,
    seed: u64,
    progress: &ProgressBar,
) -> Result<CrossCheckReport> {
    let settings = settings.normalized();
    let workers = settings.workers.min(settings.trials.max(1));
    log::info!(
        "cross-checking {} trials on {} workers (seed {})",
        settings.trials,
        workers,
        seed
    );

    let mut handles = Vec::with_capacity(workers);
    for worker in 0..workers {
        let share = settings.trials / workers + usize::from(worker < settings.trials % workers);
        let settings = settings.clone();
        let progress = progress.clone();
        let rng = StdRng::seed_from_u64(seed.wrapping_add(worker as u64));
        handles.push(tokio::task::spawn_blocking(move || {
            run_trials(share, &settings, rng, &progress)
        }));
    }

    let mut report = CrossCheckReport::default();
    for handle in handles {
        report.merge(handle.await?);
    }

    if !report.is_clean() {
        log::warn!(
            "{} disagreements and {} invalid pairs in {} trials",
            report.disagreement_count,
            report.invalid_count,
            report.trials
        );
    }

    Ok(report)
}
