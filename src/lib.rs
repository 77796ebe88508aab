//! Two sum solutions and the tooling to check them.
//!
//! [`find_pair_brute`] and [`find_pair_indexed`] share one contract: given a
//! slice and a target, return two distinct indices `i < j` whose values add up
//! to the target, or `None`.
//!
//! ```
//! use pair_finder::{find_pair_indexed, Pair};
//!
//! assert_eq!(find_pair_indexed(&[2, 7, 11, 15], 9), Some(Pair::new(0, 1)));
//! assert_eq!(find_pair_indexed(&[1], 1), None);
//! ```

pub mod case;
pub mod config;
pub mod error;
pub mod pair_finder;
pub mod report;
pub mod runner;

pub use error::{PairFinderError, Result};
pub use pair_finder::{find_pair_brute, find_pair_indexed, is_valid_pair, Algorithm, Pair, Solution};
