#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod base;
mod error;
mod password;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Handy developer utilities for the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "TOOLBELT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Integer radix conversion operations
    Base(crate::base::App),

    /// Password analysis operations
    Password(crate::password::App),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Base(sub_app) => crate::base::run(sub_app, app.global),
        SubCommands::Password(sub_app) => crate::password::run(sub_app, app.global),
    }
}
