use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "autodiag")]
#[command(about = "A vehicle damage scanner and diagnostic viewer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze an image for damage and record the result
    Scan(ScanArgs),

    /// List past scans, newest first
    History(HistoryArgs),

    /// Display a recorded scan by id
    Show(ShowArgs),

    /// Remove a scan from the history
    Remove(RemoveArgs),

    /// Display the diagnostic report for a vehicle subsystem
    Diagnostic(DiagnosticArgs),

    /// Display the vehicle status card
    Status(StatusArgs),

    /// Display the vehicle profile and service card
    Vehicle(VehicleArgs),
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Image to analyze (path or URL); the reference is stored as given
    pub image: String,

    /// Output as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Seed the analyzer for a reproducible result
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show detailed output including diagnostics
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Parser)]
pub struct HistoryArgs {
    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show detailed output including diagnostics
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Scan id to display
    pub scan_id: String,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show detailed output including diagnostics
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Parser)]
pub struct RemoveArgs {
    /// Scan id to remove
    pub scan_id: String,
}

#[derive(Parser)]
pub struct DiagnosticArgs {
    /// Subsystem id (e.g. brake-system)
    pub system_id: String,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct VehicleArgs {
    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
