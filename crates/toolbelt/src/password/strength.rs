use crate::prelude::{println, *};
use colored::Colorize;
use serde::Serialize;
use toolbelt_core::password::{estimate_with_rate, StrengthEstimate};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct StrengthOptions {
    /// Password to analyze
    #[arg(value_name = "PASSWORD")]
    pub password: String,

    /// Adversary guess rate, in guesses per second
    #[arg(
        short,
        long,
        env = "TOOLBELT_GUESS_RATE",
        default_value = "1000000000"
    )]
    pub rate: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Strength estimate plus its rendered crack duration
#[derive(Debug, Serialize, Clone)]
pub struct StrengthOutput {
    #[serde(flatten)]
    pub estimate: StrengthEstimate,
    pub crack_duration: String,
}

pub fn run(options: StrengthOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Assuming {} guesses per second", options.rate);
        println!();
    }

    let output = strength_data(&options.password, options.rate);

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output);
    }

    Ok(())
}

/// Estimates password strength and returns it as a structured StrengthOutput
pub fn strength_data(password: &str, rate: f64) -> StrengthOutput {
    let estimate = estimate_with_rate(password, rate);

    StrengthOutput {
        crack_duration: estimate.crack_duration(),
        estimate,
    }
}

/// Convert strength output to a JSON string
fn format_strength_json(output: &StrengthOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Render the strength detail table
fn format_strength_table(output: &StrengthOutput) -> String {
    let mut table = crate::prelude::new_table();

    table.add_row(prettytable::row![
        "Charset length",
        output.estimate.charset_length
    ]);
    table.add_row(prettytable::row![
        "Password length",
        output.estimate.password_length
    ]);
    table.add_row(prettytable::row![
        "Entropy",
        f!("{:.2} bits", output.estimate.entropy)
    ]);
    table.add_row(prettytable::row![
        "Score",
        f!("{:.0}%", output.estimate.score * 100.0)
    ]);
    table.add_row(prettytable::row!["Time to crack", &output.crack_duration]);

    table.to_string()
}

fn output_json(output: &StrengthOutput) -> Result<()> {
    println!("{}", format_strength_json(output)?);
    Ok(())
}

fn output_formatted(output: &StrengthOutput) {
    println!("\n{}", "PASSWORD STRENGTH".bright_cyan().bold());
    println!("{}", format_strength_table(output));
}
