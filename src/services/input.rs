use crate::domain::models::{Employee, PriorPair};
use crate::error::SantaError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load participant records from a CSV file.
pub fn read_employees(path: &Path) -> Result<Vec<Employee>, SantaError> {
    read_records(path)
}

/// Load prior-period pairing records from a CSV file.
pub fn read_prior_pairs(path: &Path) -> Result<Vec<PriorPair>, SantaError> {
    read_records(path)
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SantaError> {
    ensure_readable(path)?;
    let mut reader = csv::Reader::from_path(path).map_err(|e| invalid(path, e))?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| invalid(path, e))
}

/// Existence is checked before format, matching the reader contract:
/// a missing `.txt` path is a not-found error, not a format error.
fn ensure_readable(path: &Path) -> Result<(), SantaError> {
    if !path.exists() {
        return Err(SantaError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(()),
        _ => Err(SantaError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn invalid(path: &Path, err: csv::Error) -> SantaError {
    SantaError::InvalidInput {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_path_is_not_found() {
        let tmp = TempDir::new().expect("create temp dir");
        let err = read_employees(&tmp.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, SantaError::InputNotFound { .. }));
    }

    #[test]
    fn txt_extension_is_unsupported() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("employees.txt");
        fs::write(&path, "Employee_Name,Employee_EmailID\nA,a@x\n").expect("write fixture");
        let err = read_employees(&path).unwrap_err();
        assert!(matches!(err, SantaError::UnsupportedFormat { .. }));
    }

    #[test]
    fn reads_employee_rows_in_order() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("employees.csv");
        fs::write(
            &path,
            "Employee_Name,Employee_EmailID\nTEST,test@mail.com\nDEMO,demo@mail.com\n",
        )
        .expect("write fixture");

        let employees = read_employees(&path).expect("read employees");
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name, "TEST");
        assert_eq!(employees[0].email, "test@mail.com");
        assert_eq!(employees[1].name, "DEMO");
    }

    #[test]
    fn prior_rows_only_need_the_email_keys() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("previous.csv");
        fs::write(
            &path,
            "Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID\n\
             TEST,test@mail.com,DEMO,demo@mail.com\n",
        )
        .expect("write fixture");

        let pairs = read_prior_pairs(&path).expect("read prior pairs");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].employee_email, "test@mail.com");
        assert_eq!(pairs[0].child_email, "demo@mail.com");
    }

    #[test]
    fn missing_required_column_is_invalid_input() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("employees.csv");
        fs::write(&path, "Employee_Name\nTEST\n").expect("write fixture");
        let err = read_employees(&path).unwrap_err();
        assert!(matches!(err, SantaError::InvalidInput { .. }));
    }
}
