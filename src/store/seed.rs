//! Initial store contents.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Attendance, Department, Employee, SalaryRecord};

/// Initial data for a [`Store`](super::Store), typically read from JSON.
///
/// # Example
///
/// ```
/// use hr_engine::store::StoreSeed;
///
/// let seed: StoreSeed = serde_json::from_str(r#"{"employees": []}"#).unwrap();
/// assert!(seed.attendance.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSeed {
    /// Initial employees.
    pub employees: Vec<Employee>,
    /// Initial attendance records.
    pub attendance: Vec<Attendance>,
    /// Initial salary records.
    pub salary_records: Vec<SalaryRecord>,
    /// Department reference data.
    pub departments: Vec<Department>,
}

impl StoreSeed {
    /// Reads a seed from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| EngineError::SeedLoadError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::SeedLoadError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_shipped_seed() {
        let seed = StoreSeed::load("./config/seed.json").unwrap();
        assert_eq!(seed.employees.len(), 3);
        assert!(!seed.attendance.is_empty());
        assert!(!seed.salary_records.is_empty());
        assert!(seed.departments.iter().any(|d| d.name == "Engineering"));
    }

    #[test]
    fn test_load_missing_seed() {
        let result = StoreSeed::load("/nonexistent/seed.json");
        assert!(matches!(result, Err(EngineError::SeedLoadError { .. })));
    }

    #[test]
    fn test_load_malformed_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(&path, r#"{"employees": [{"id": 1}]}"#).unwrap();

        match StoreSeed::load(&path) {
            Err(EngineError::SeedLoadError { path: reported, .. }) => {
                assert!(reported.ends_with("seed.json"));
            }
            _ => panic!("Expected SeedLoadError"),
        }
    }
}
