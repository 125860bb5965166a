//! Input loader (component G): reads a problem description from a JSON file
//! and validates it before handing it to the beam driver.

use crate::domain::Problem;
use crate::error::WardSchedError;
use std::fs;
use std::path::Path;

/// Loads and validates a [`Problem`] from `path`.
///
/// I/O failures and malformed JSON are both reported as `InvalidProblem`,
/// the same as a structurally-unsatisfiable problem, since all three mean
/// the driver cannot be started.
pub fn load_problem(path: &Path) -> Result<Problem, WardSchedError> {
    let text = fs::read_to_string(path)
        .map_err(|e| WardSchedError::invalid(format!("cannot read {}: {e}", path.display())))?;
    let problem: Problem = serde_json::from_str(&text)
        .map_err(|e| WardSchedError::invalid(format!("cannot parse {}: {e}", path.display())))?;
    problem.validate()?;
    Ok(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_a_valid_problem() {
        let mut file = tempfile_with(
            r#"{
                "config": {
                    "blocks": 1,
                    "block_times": ["09:00"],
                    "min_break_block": 0,
                    "max_break_block": 0,
                    "max_on_break": 0,
                    "shift_start_blocks": [],
                    "beam_width": 2,
                    "random_seed": 1
                },
                "staffers": [
                    {"name": "Bob", "role": "assistant", "sex": "male", "available": [0]}
                ],
                "tasks": [
                    {"kind": "general_observation", "blocks": [0]}
                ]
            }"#,
        );
        let problem = load_problem(file.path()).expect("should load");
        assert_eq!(problem.staffers.len(), 1);
        file.flush().unwrap();
    }

    #[test]
    fn rejects_malformed_json() {
        let file = tempfile_with("not json");
        assert!(load_problem(file.path()).is_err());
    }

    #[test]
    fn rejects_structurally_invalid_problem() {
        let file = tempfile_with(
            r#"{
                "config": {
                    "blocks": 0,
                    "block_times": [],
                    "min_break_block": 0,
                    "max_break_block": 0,
                    "max_on_break": 0,
                    "shift_start_blocks": [],
                    "beam_width": 1,
                    "random_seed": 1
                },
                "staffers": [],
                "tasks": []
            }"#,
        );
        assert!(load_problem(file.path()).is_err());
    }

    fn tempfile_with(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }
}
