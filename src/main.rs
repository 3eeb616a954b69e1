use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

pub use cli::{Cli, Commands};
pub use domain::models::{
    AssignReport, Assignment, AssignmentRow, Employee, ErrBody, JsonErr, JsonOut, PriorPair,
    ValidateReport,
};
pub use error::SantaError;
pub use services::input::{read_employees, read_prior_pairs};
pub use services::matching::generate_assignment;
pub use services::output::print_one;
pub use services::report::write_report;
pub use services::roster::Roster;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::handle_commands(&cli) {
        let code = err
            .downcast_ref::<SantaError>()
            .map(SantaError::code)
            .unwrap_or("INTERNAL");
        if cli.json {
            let body = JsonErr {
                ok: false,
                error: ErrBody {
                    code: code.to_string(),
                    message: err.to_string(),
                },
            };
            match serde_json::to_string_pretty(&body) {
                Ok(out) => println!("{}", out),
                Err(_) => eprintln!("error: {}", err),
            }
        } else {
            eprintln!("error: {}", err);
        }
        std::process::exit(1);
    }
}
