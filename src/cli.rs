use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "santa", version, about = "Secret Santa assignment CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate assignments and write the CSV report
    Assign {
        /// Employee list (CSV with Employee_Name, Employee_EmailID)
        employees: String,
        #[arg(long, help = "Previous period's assignment CSV")]
        previous: Option<String>,
        #[arg(long, default_value = crate::domain::constants::DEFAULT_OUTPUT_PATH)]
        output: String,
        #[arg(long, help = "Seed the shuffle for a reproducible draw")]
        seed: Option<u64>,
        #[arg(long, default_value_t = false, help = "Generate without writing the report")]
        dry_run: bool,
    },
    /// Check that the input files load without generating anything
    Validate {
        employees: String,
        #[arg(long, help = "Previous period's assignment CSV")]
        previous: Option<String>,
    },
}
