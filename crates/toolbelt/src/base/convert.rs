use crate::prelude::{println, *};
use colored::Colorize;
use serde::Serialize;
use toolbelt_core::baseconv::convert_base;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ConvertOptions {
    /// Digit string to convert
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Source radix (2-64)
    #[arg(short, long, env = "TOOLBELT_BASE_FROM", default_value = "10")]
    pub from: u32,

    /// Target radix (2-64); omit to print the value in all common radices
    #[arg(short, long, env = "TOOLBELT_BASE_TO")]
    pub to: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A single converted rendering of the input value
#[derive(Debug, Serialize, Clone)]
pub struct ConversionOutput {
    pub value: String,
    pub from_base: u32,
    pub to_base: u32,
    pub result: String,
}

/// Radices shown side by side when no explicit target is given
const COMMON_BASES: [u32; 7] = [2, 8, 10, 16, 36, 62, 64];

pub fn run(options: ConvertOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!(
            "Converting \"{}\" from base {}...",
            options.value, options.from
        );
        println!();
    }

    let outputs = convert_data(&options.value, options.from, options.to)?;

    if options.json {
        output_json(&outputs)?;
    } else {
        output_formatted(&outputs, options.to.is_some());
    }

    Ok(())
}

/// Converts the value into each requested target radix
///
/// With an explicit target this yields a single conversion; without one it
/// yields the value rendered in every common radix.
pub fn convert_data(value: &str, from: u32, to: Option<u32>) -> Result<Vec<ConversionOutput>> {
    let targets: Vec<u32> = match to {
        Some(to_base) => vec![to_base],
        None => COMMON_BASES.to_vec(),
    };

    targets
        .into_iter()
        .map(|to_base| {
            let result = convert_base(value, from, to_base)?;
            Ok(ConversionOutput {
                value: value.to_string(),
                from_base: from,
                to_base,
                result,
            })
        })
        .collect()
}

/// Human label for a radix in the common-bases table
fn base_label(base: u32) -> String {
    match base {
        2 => "Binary (2)".to_string(),
        8 => "Octal (8)".to_string(),
        10 => "Decimal (10)".to_string(),
        16 => "Hexadecimal (16)".to_string(),
        base => f!("Base {base}"),
    }
}

/// Convert conversion outputs to a JSON string
fn format_convert_json(outputs: &[ConversionOutput]) -> Result<String> {
    if let [single] = outputs {
        serde_json::to_string_pretty(single)
    } else {
        serde_json::to_string_pretty(outputs)
    }
    .map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Render the common-bases table
fn format_convert_table(outputs: &[ConversionOutput]) -> String {
    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row!["Base", "Result"]);

    for output in outputs {
        table.add_row(prettytable::row![base_label(output.to_base), &output.result]);
    }

    table.to_string()
}

fn output_json(outputs: &[ConversionOutput]) -> Result<()> {
    println!("{}", format_convert_json(outputs)?);
    Ok(())
}

fn output_formatted(outputs: &[ConversionOutput], single_target: bool) {
    if single_target {
        if let Some(output) = outputs.first() {
            println!("{}", output.result);
        }
        return;
    }

    println!(
        "\n{}",
        f!(
            "\"{}\" (base {}) in common radices",
            outputs
                .first()
                .map(|o| o.value.as_str())
                .unwrap_or_default(),
            outputs.first().map(|o| o.from_base).unwrap_or_default()
        )
        .bright_cyan()
        .bold()
    );
    println!("{}", format_convert_table(outputs));
}
