/// Upper bound on shuffle attempts before the generator reports
/// the instance as unsatisfiable.
pub const MAX_ATTEMPTS: u32 = 1000;

/// Report path used when `assign` is run without `--output`.
pub const DEFAULT_OUTPUT_PATH: &str = "output.csv";
