use crate::prelude::*;

pub mod convert;

// Re-export public data functions
pub use convert::convert_data;

#[derive(Debug, clap::Parser)]
#[command(name = "base")]
#[command(about = "Integer radix conversion operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert a digit string between radices (2-64)
    #[clap(name = "convert")]
    Convert(convert::ConvertOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Convert(options) => convert::run(options, global),
    }
}
