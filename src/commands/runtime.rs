use crate::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Assign {
            employees,
            previous,
            output,
            seed,
            dry_run,
        } => {
            let roster = load_roster(employees, previous.as_deref())?;

            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(*s),
                None => StdRng::from_os_rng(),
            };
            let assignment = generate_assignment(&roster, &mut rng)?;

            if !*dry_run {
                write_report(Path::new(output), &assignment)?;
            }

            let report = AssignReport {
                participants: roster.len(),
                prior_pairs: roster.prior_len(),
                output: (!*dry_run).then(|| output.clone()),
                rows: assignment.rows,
            };
            print_one(cli.json, report, |r| match &r.output {
                Some(path) => format!(
                    "assigned {} participants, report written to {}",
                    r.participants, path
                ),
                None => format!("assigned {} participants (dry run)", r.participants),
            })?;
        }
        Commands::Validate {
            employees,
            previous,
        } => {
            let roster = load_roster(employees, previous.as_deref())?;
            let report = ValidateReport {
                participants: roster.len(),
                prior_pairs: roster.prior_len(),
            };
            print_one(cli.json, report, |r| {
                format!(
                    "inputs valid ({} participants, {} prior pairs)",
                    r.participants, r.prior_pairs
                )
            })?;
        }
    }

    Ok(())
}

fn load_roster(employees: &str, previous: Option<&str>) -> Result<Roster, SantaError> {
    let records = read_employees(Path::new(employees))?;
    let mut roster = Roster::new(records)?;
    if let Some(prior_path) = previous {
        roster = roster.with_prior(read_prior_pairs(Path::new(prior_path))?);
    }
    Ok(roster)
}
