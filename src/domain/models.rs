use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrBody,
}

#[derive(Serialize)]
pub struct ErrBody {
    pub code: String,
    pub message: String,
}

/// One participant record as read from the employee file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "Employee_Name")]
    pub name: String,
    #[serde(rename = "Employee_EmailID")]
    pub email: String,
}

/// One prior-period pairing. Name columns in the prior file are
/// recognized but not needed; only the two email keys matter.
#[derive(Debug, Clone, Deserialize)]
pub struct PriorPair {
    #[serde(rename = "Employee_EmailID")]
    pub employee_email: String,
    #[serde(rename = "Secret_Child_EmailID")]
    pub child_email: String,
}

/// One denormalized report row. Field order (via serde renames) fixes
/// the CSV header: giver name/email, then assigned child name/email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    #[serde(rename = "Employee_Name")]
    pub employee_name: String,
    #[serde(rename = "Employee_EmailID")]
    pub employee_email: String,
    #[serde(rename = "Secret_Child_Name")]
    pub child_name: String,
    #[serde(rename = "Secret_Child_EmailID")]
    pub child_email: String,
}

/// A complete giver→child mapping for the current run.
///
/// Produced atomically by the generator: either every participant appears
/// exactly once as giver and once as child, or no `Assignment` exists.
/// Row order follows the participant load order.
#[derive(Debug, Serialize)]
pub struct Assignment {
    pub rows: Vec<AssignmentRow>,
}

impl Assignment {
    pub fn child_of(&self, giver_email: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.employee_email == giver_email)
            .map(|r| r.child_email.as_str())
    }
}

#[derive(Serialize)]
pub struct AssignReport {
    pub participants: usize,
    pub prior_pairs: usize,
    pub output: Option<String>,
    pub rows: Vec<AssignmentRow>,
}

#[derive(Serialize)]
pub struct ValidateReport {
    pub participants: usize,
    pub prior_pairs: usize,
}
