// Problem: Two Sum
// Difficulty: Easy
// URL: https://leetcode.com/problems/two-sum/

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{PairFinderError, Result};

/// Two distinct positions in a sequence, `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub first: usize,
    pub second: usize,
}

impl Pair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    pub fn indices(self) -> [usize; 2] {
        [self.first, self.second]
    }

    /// LeetCode output shape: `[first, second]`. Fails when an index does not
    /// fit in `i32`.
    pub fn to_vec(self) -> Result<Vec<i32>> {
        let convert = |index: usize| {
            i32::try_from(index).map_err(|_| PairFinderError::IndexOutOfRange(index))
        };
        Ok(vec![convert(self.first)?, convert(self.second)?])
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

// Time Complexity: O(n^2)
// Space Complexity: O(1)

/// Scan every `(i, j)` with `i < j` in row-major order and return the first
/// pair whose values add up to `target`.
pub fn find_pair_brute(nums: &[i32], target: i32) -> Option<Pair> {
    if nums.len() < 2 {
        return None;
    }

    let target = i64::from(target);
    for i in 0..nums.len() - 1 {
        for j in i + 1..nums.len() {
            if i64::from(nums[i]) + i64::from(nums[j]) == target {
                return Some(Pair::new(i, j));
            }
        }
    }

    None
}

// Time Complexity: O(n)
// Space Complexity: O(n)

/// Single forward scan over a value -> first index map. The complement is
/// looked up before the current value is inserted, so an index is never
/// paired with itself.
pub fn find_pair_indexed(nums: &[i32], target: i32) -> Option<Pair> {
    if nums.len() < 2 {
        return None;
    }

    let mut seen: HashMap<i32, usize> = HashMap::with_capacity(nums.len());
    for (i, &num) in nums.iter().enumerate() {
        // An unrepresentable complement cannot be in the slice.
        if let Some(complement) = target.checked_sub(num) {
            if let Some(&index) = seen.get(&complement) {
                return Some(Pair::new(index, i));
            }
        }
        seen.entry(num).or_insert(i);
    }

    None
}

/// Check that `pair` is in bounds, ordered, and sums to `target`.
pub fn is_valid_pair(nums: &[i32], target: i32, pair: Pair) -> bool {
    pair.first < pair.second
        && pair.second < nums.len()
        && i64::from(nums[pair.first]) + i64::from(nums[pair.second]) == i64::from(target)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Brute,
    #[default]
    Indexed,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Brute, Algorithm::Indexed];

    pub fn find(self, nums: &[i32], target: i32) -> Option<Pair> {
        match self {
            Algorithm::Brute => find_pair_brute(nums, target),
            Algorithm::Indexed => find_pair_indexed(nums, target),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Brute => "brute",
            Algorithm::Indexed => "indexed",
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Brute => "O(n^2) time, O(1) space",
            Algorithm::Indexed => "O(n) time, O(n) space",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PairFinderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brute" | "brute-force" => Ok(Algorithm::Brute),
            "indexed" | "hash" => Ok(Algorithm::Indexed),
            other => Err(PairFinderError::UnknownAlgorithm(other.to_string())),
        }
    }
}

pub struct Solution;

impl Solution {
    /// Given an array of integers nums and an integer target,
    /// return indices of the two numbers such that they add up to target.
    ///
    /// The `i32` indices limit this shape to inputs of at most `i32::MAX + 1`
    /// elements; a pair beyond that is reported as `[]`. Use
    /// [`find_pair_indexed`] for longer inputs.
    pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {
        find_pair_indexed(&nums, target)
            .and_then(|pair| pair.to_vec().ok())
            .unwrap_or_default()
    }

    /// Brute force variant of [`Solution::two_sum`], with the same size limit.
    pub fn two_sum_brute(nums: Vec<i32>, target: i32) -> Vec<i32> {
        find_pair_brute(&nums, target)
            .and_then(|pair| pair.to_vec().ok())
            .unwrap_or_default()
    }
}
