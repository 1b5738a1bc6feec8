use crate::prelude::*;

pub mod strength;

// Re-export public data functions
pub use strength::strength_data;

#[derive(Debug, clap::Parser)]
#[command(name = "password")]
#[command(about = "Password analysis operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Estimate password strength and brute-force crack time
    #[clap(name = "strength")]
    Strength(strength::StrengthOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Strength(options) => strength::run(options, global),
    }
}
