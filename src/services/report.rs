use crate::domain::models::Assignment;
use crate::error::SantaError;
use std::path::Path;

/// Write the assignment report as CSV, one row per participant in load
/// order. The header comes from the `AssignmentRow` serde renames:
/// `Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID`.
pub fn write_report(path: &Path, assignment: &Assignment) -> Result<(), SantaError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| write_failure(path, e))?;
    for row in &assignment.rows {
        writer.serialize(row).map_err(|e| write_failure(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| write_failure(path, csv::Error::from(e)))?;
    Ok(())
}

fn write_failure(path: &Path, source: csv::Error) -> SantaError {
    SantaError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AssignmentRow;
    use std::fs;
    use tempfile::TempDir;

    fn row(giver: (&str, &str), child: (&str, &str)) -> AssignmentRow {
        AssignmentRow {
            employee_name: giver.0.to_string(),
            employee_email: giver.1.to_string(),
            child_name: child.0.to_string(),
            child_email: child.1.to_string(),
        }
    }

    #[test]
    fn writes_header_and_rows_in_order() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("output.csv");
        let assignment = Assignment {
            rows: vec![
                row(("A", "a@x"), ("B", "b@x")),
                row(("B", "b@x"), ("A", "a@x")),
            ],
        };

        write_report(&path, &assignment).expect("write report");

        let raw = fs::read_to_string(&path).expect("read report back");
        let lines: Vec<&str> = raw.lines().collect();
        assert_eq!(
            lines[0],
            "Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID"
        );
        assert_eq!(lines[1], "A,a@x,B,b@x");
        assert_eq!(lines[2], "B,b@x,A,a@x");
    }

    #[test]
    fn unwritable_path_is_output_write_failure() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("no-such-dir").join("output.csv");
        let assignment = Assignment {
            rows: vec![row(("A", "a@x"), ("B", "b@x"))],
        };
        let err = write_report(&path, &assignment).unwrap_err();
        assert!(matches!(err, SantaError::OutputWriteFailure { .. }));
    }
}
