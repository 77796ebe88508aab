use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{PairFinderError, Result},
    pair_finder::Pair,
};

/// A single input with an optional expected answer.
///
/// `expected` uses the LeetCode output shape: `[i, j]` for a pair, `[]` for
/// no pair. When it is absent only validity and existence are checked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TestCase {
    pub name: String,
    pub nums: Vec<i32>,
    pub target: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Vec<usize>>,
}

impl TestCase {
    pub fn new(name: impl Into<String>, nums: Vec<i32>, target: i32) -> Self {
        Self {
            name: name.into(),
            nums,
            target,
            expected: None,
        }
    }

    pub fn expecting(mut self, expected: Option<Pair>) -> Self {
        self.expected = Some(match expected {
            Some(pair) => vec![pair.first, pair.second],
            None => Vec::new(),
        });
        self
    }

    /// `None` when the case carries no expectation, `Some(None)` when no pair
    /// must be found.
    pub fn expectation(&self) -> Result<Option<Option<Pair>>> {
        match self.expected.as_deref() {
            None => Ok(None),
            Some([]) => Ok(Some(None)),
            Some(&[first, second]) => Ok(Some(Some(Pair::new(first, second)))),
            Some(other) => Err(PairFinderError::InvalidExpected {
                case: self.name.clone(),
                len: other.len(),
            }),
        }
    }

    /// Parse the LeetCode example format: the first non-empty line holds the
    /// numbers, the second the target.
    ///
    /// ```text
    /// [2,7,11,15]
    /// 9
    /// ```
    pub fn from_example(name: impl Into<String>, text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
        let nums = parse_nums(lines.next().unwrap_or_default())?;
        let target = match lines.next() {
            Some(line) => parse_target(line)?,
            None => return Err(PairFinderError::MissingTarget(text.trim().to_string())),
        };
        Ok(Self::new(name, nums, target))
    }
}

/// Parse `[2,7,11,15]`, `2, 7, 11, 15` or `[]`.
pub fn parse_nums(text: &str) -> Result<Vec<i32>> {
    let inner = text.trim();
    let inner = inner
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(inner);

    inner
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| PairFinderError::InvalidNumber {
                    token: token.to_string(),
                    input: text.to_string(),
                })
        })
        .collect()
}

pub fn parse_target(text: &str) -> Result<i32> {
    let token = text.trim();
    token
        .parse::<i32>()
        .map_err(|_| PairFinderError::InvalidNumber {
            token: token.to_string(),
            input: text.to_string(),
        })
}

pub fn builtin_cases() -> Vec<TestCase> {
    vec![
        TestCase::new("example_1", vec![2, 7, 11, 15], 9).expecting(Some(Pair::new(0, 1))),
        TestCase::new("example_2", vec![3, 2, 4], 6).expecting(Some(Pair::new(1, 2))),
        TestCase::new("example_3", vec![3, 3], 6).expecting(Some(Pair::new(0, 1))),
        TestCase::new("single_element", vec![1], 1).expecting(None),
        TestCase::new("unreachable_target", vec![1, 2, 3], 100).expecting(None),
    ]
}

/// On-disk list of cases, stored as pretty JSON.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaseFile {
    pub problem_title: String,
    pub test_cases: Vec<TestCase>,
}

impl CaseFile {
    pub fn new(test_cases: Vec<TestCase>) -> Self {
        Self {
            problem_title: "Two Sum".to_string(),
            test_cases,
        }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PairFinderError::io(path, e))?;
        let file: CaseFile =
            serde_json::from_str(&content).map_err(|source| PairFinderError::CaseFile {
                path: path.to_path_buf(),
                source,
            })?;

        for case in &file.test_cases {
            case.expectation()?;
        }
        log::debug!(
            "loaded {} cases from {}",
            file.test_cases.len(),
            path.display()
        );

        Ok(file)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|source| PairFinderError::CaseFile {
                path: path.to_path_buf(),
                source,
            })?;
        tokio::fs::write(path, content)
            .await
            .map_err(|e| PairFinderError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_nums() {
        assert_eq!(parse_nums("[2,7,11,15]").unwrap(), vec![2, 7, 11, 15]);
        assert_eq!(parse_nums(" 3, -2 ,4 ").unwrap(), vec![3, -2, 4]);
        assert_eq!(parse_nums("[]").unwrap(), Vec::<i32>::new());
        assert_eq!(parse_nums("").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_parse_nums_rejects_garbage() {
        let err = parse_nums("[1,two,3]").unwrap_err();
        assert!(matches!(err, PairFinderError::InvalidNumber { ref token, .. } if token == "two"));
        assert!(parse_nums("[1,99999999999]").is_err());
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(" -4 ").unwrap(), -4);
        assert!(parse_target("nine").is_err());
    }

    #[test]
    fn test_from_example() {
        let case = TestCase::from_example("ex", "[3,2,4]\n\n6\n").unwrap();
        assert_eq!(case.nums, vec![3, 2, 4]);
        assert_eq!(case.target, 6);
        assert_eq!(case.expectation().unwrap(), None);
    }

    #[test]
    fn test_from_example_missing_target() {
        let err = TestCase::from_example("ex", "[3,2,4]").unwrap_err();
        assert!(matches!(err, PairFinderError::MissingTarget(_)));
    }

    #[test]
    fn test_expectation_shapes() {
        let case = TestCase::new("a", vec![3, 3], 6).expecting(Some(Pair::new(0, 1)));
        assert_eq!(case.expectation().unwrap(), Some(Some(Pair::new(0, 1))));

        let case = TestCase::new("b", vec![1], 1).expecting(None);
        assert_eq!(case.expectation().unwrap(), Some(None));

        let mut case = TestCase::new("c", vec![1, 2, 3], 3);
        case.expected = Some(vec![0, 1, 2]);
        assert!(matches!(
            case.expectation(),
            Err(PairFinderError::InvalidExpected { len: 3, .. })
        ));
    }

    #[test]
    fn test_builtin_cases() {
        let cases = builtin_cases();
        assert_eq!(cases.len(), 5);
        assert!(cases.iter().all(|c| c.expectation().unwrap().is_some()));
    }

    #[tokio::test]
    async fn test_case_file_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cases.json");

        let file = CaseFile::new(builtin_cases());
        file.save(&path).await.unwrap();

        let loaded = CaseFile::load(&path).await.unwrap();
        assert_eq!(loaded.problem_title, "Two Sum");
        assert_eq!(loaded.test_cases, builtin_cases());
    }

    #[tokio::test]
    async fn test_case_file_without_expected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cases.json");
        std::fs::write(
            &path,
            r#"{"problem_title": "Two Sum", "test_cases": [{"name": "x", "nums": [1, 4], "target": 5}]}"#,
        )
        .unwrap();

        let loaded = CaseFile::load(&path).await.unwrap();
        assert_eq!(loaded.test_cases[0].expected, None);
    }

    #[tokio::test]
    async fn test_case_file_errors() {
        let temp_dir = TempDir::new().unwrap();

        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            CaseFile::load(&missing).await,
            Err(PairFinderError::Io { .. })
        ));

        let malformed = temp_dir.path().join("bad.json");
        std::fs::write(&malformed, "{ not json").unwrap();
        assert!(matches!(
            CaseFile::load(&malformed).await,
            Err(PairFinderError::CaseFile { .. })
        ));
    }
}
