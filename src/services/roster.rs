use crate::domain::models::{Employee, PriorPair};
use crate::error::SantaError;
use std::collections::HashMap;

/// Participant set plus the prior-period giver→child lookup.
///
/// Populated once at the start of a run, read-only afterwards.
/// Participant order is preserved: it determines report row order.
#[derive(Debug, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    prior: HashMap<String, String>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>) -> Result<Self, SantaError> {
        if employees.len() < 2 {
            return Err(SantaError::InsufficientParticipants {
                count: employees.len(),
            });
        }
        Ok(Self {
            employees,
            prior: HashMap::new(),
        })
    }

    /// Install the prior-period pairings. An empty set means the feature
    /// is unused this run and every prior-constraint check passes.
    pub fn with_prior(mut self, pairs: Vec<PriorPair>) -> Self {
        self.prior = pairs
            .into_iter()
            .map(|p| (p.employee_email, p.child_email))
            .collect();
        self
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn prior_len(&self) -> usize {
        self.prior.len()
    }

    /// Who did this giver draw last period, if anyone?
    pub fn prior_child_of(&self, giver_email: &str) -> Option<&str> {
        self.prior.get(giver_email).map(String::as_str)
    }
}
