use crate::domain::constants::MAX_ATTEMPTS;
use crate::domain::models::{Assignment, AssignmentRow, Employee};
use crate::error::SantaError;
use crate::services::roster::Roster;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Produce a valid giver→child assignment, or fail.
///
/// Rejection sampling over full shuffles: each attempt draws a uniform
/// random permutation of the roster, pairs participant i (in load order)
/// with shuffled position i, and rejects the whole candidate on the first
/// pair that is a self-match or repeats the giver's prior-period child.
/// The attempt cap turns an infeasible instance (e.g. two participants
/// with a forced mutual prior pairing) into a deterministic failure.
///
/// The rng is injected so callers control seeding; the generator itself
/// consumes randomness but has no other side effects.
pub fn generate_assignment<R: Rng + ?Sized>(
    roster: &Roster,
    rng: &mut R,
) -> Result<Assignment, SantaError> {
    let employees = roster.employees();
    let mut order: Vec<usize> = (0..employees.len()).collect();

    for _ in 0..MAX_ATTEMPTS {
        order.shuffle(rng);
        if let Some(rows) = try_pairing(employees, &order, roster) {
            return Ok(Assignment { rows });
        }
    }

    Err(SantaError::UnsatisfiableConstraints {
        attempts: MAX_ATTEMPTS,
    })
}

fn try_pairing(
    employees: &[Employee],
    order: &[usize],
    roster: &Roster,
) -> Option<Vec<AssignmentRow>> {
    let mut rows = Vec::with_capacity(employees.len());

    for (giver, &pick) in employees.iter().zip(order) {
        let child = &employees[pick];
        if child.email == giver.email {
            return None;
        }
        if roster.prior_child_of(&giver.email) == Some(child.email.as_str()) {
            return None;
        }
        rows.push(AssignmentRow {
            employee_name: giver.name.clone(),
            employee_email: giver.email.clone(),
            child_name: child.name.clone(),
            child_email: child.email.clone(),
        });
    }

    // Pairing two permutations index-for-index already guarantees distinct
    // children; re-check explicitly so a future change to the pairing step
    // cannot silently hand out duplicates.
    let mut seen = HashSet::with_capacity(rows.len());
    if !rows.iter().all(|r| seen.insert(r.child_email.as_str())) {
        return None;
    }

    Some(rows)
}
