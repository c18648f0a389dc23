//! `wifq` — abjad sums, WiFiQ value tables, angel names, and numeral
//! conversion from the command line.
//!
//! **Usage:**
//! ```text
//! wifq sum <TEXT> [--json] [--arabic]
//! wifq table <TEXT> [--square <slug>] [--json]
//! wifq angels <TEXT> --square <slug>
//! wifq convert <VALUE>
//! ```
//!
//! Square slugs: mutsalas, murabba, mukhamas, musaddas, musabba,
//! musamman, mutassa.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use wifq::prelude::*;
use wifq_tables::{value_label, ANGEL_SOURCES};

/// Command-line interface for the wifq calculation core.
#[derive(Parser)]
#[command(name = "wifq", about = "Abjad and WiFiQ calculator")]
struct Args {
    /// The subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Command {
    /// Sum the abjad weights of a text and show the contribution trail.
    Sum {
        /// Arabic text to sum; unrecognized characters are skipped.
        text: String,
        /// Emit machine-readable JSON instead of plain text.
        #[arg(long)]
        json: bool,
        /// Render the total in Arabic-Indic digits.
        #[arg(long)]
        arabic: bool,
    },
    /// Derive the eight WiFiQ values for one or all square types.
    Table {
        /// Arabic text to sum and derive from.
        text: String,
        /// Restrict to one square type by slug (e.g. "murabba").
        #[arg(long)]
        square: Option<String>,
        /// Emit machine-readable JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Encode the seven angel names for a square's derived values.
    Angels {
        /// Arabic text to sum and derive from.
        text: String,
        /// Square type slug (e.g. "murabba").
        #[arg(long)]
        square: String,
    },
    /// Convert digits between Western and Arabic-Indic forms.
    Convert {
        /// A number or digit string in either form.
        value: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Sum { text, json, arabic } => run_sum(&text, json, arabic),
        Command::Table { text, square, json } => run_table(&text, square.as_deref(), json),
        Command::Angels { text, square } => run_angels(&text, &square),
        Command::Convert { value } => run_convert(&value),
    }
}

/// Resolves a square slug or fails with the list of valid slugs.
fn parse_square(slug: &str) -> Result<Square> {
    match Square::from_slug(slug) {
        Some(square) => Ok(square),
        None => {
            let valid: Vec<&str> = Square::ALL.iter().map(|s| s.slug()).collect();
            bail!("unknown square '{slug}'; expected one of: {}", valid.join(", "))
        }
    }
}

fn run_sum(text: &str, json: bool, arabic: bool) -> Result<()> {
    let report = calculate_abjad(text);

    if json {
        let out = json!({
            "total": report.total,
            "details": report.details,
            "letters": report.letters,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", report.details);
    if arabic {
        println!("= {}", numerals::to_arabic_indic(report.total));
    }
    Ok(())
}

fn run_table(text: &str, square: Option<&str>, json: bool) -> Result<()> {
    let report = calculate_abjad(text);
    let squares: Vec<Square> = match square {
        Some(slug) => vec![parse_square(slug)?],
        None => Square::ALL.to_vec(),
    };

    if json {
        let tables: Vec<_> = squares
            .iter()
            .map(|&square| {
                let set = calculate_all_values(report.total, square);
                let values: serde_json::Map<String, serde_json::Value> = set
                    .fields()
                    .map(|(field, value)| {
                        (field.as_str().to_string(), json!(value.get()))
                    })
                    .collect();
                json!({
                    "square": square.slug(),
                    "order": square.order(),
                    "values": values,
                })
            })
            .collect();
        let out = json!({ "total": report.total, "tables": tables });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}  (total {})", report.details, report.total);
    for square in squares {
        let set = calculate_all_values(report.total, square);
        println!();
        println!("{square} — {} / {}", square.day(), square.planet());
        for (field, value) in set.fields() {
            let label = value_label(field);
            println!(
                "  {:<14} {:<10} {}",
                label.transliteration,
                label.arabic,
                numerals::value_to_arabic_indic(value),
            );
        }
    }
    Ok(())
}

fn run_angels(text: &str, square: &str) -> Result<()> {
    let square = parse_square(square)?;
    let report = calculate_abjad(text);
    let set = calculate_all_values(report.total, square);

    println!("{}  (total {})", report.details, report.total);
    println!("{square}");
    for source in &ANGEL_SOURCES {
        let value = set.get(source.field);
        let label = value_label(source.field);
        println!();
        println!(
            "{} — من {}: {}",
            source.ordinal,
            label.arabic,
            numerals::value_to_arabic_indic(value),
        );
        println!("  {}", angel::name(value, Variant::Benevolent));
        println!("  {}", angel::name(value, Variant::Sufliyyah));
    }
    Ok(())
}

fn run_convert(value: &str) -> Result<()> {
    if numerals::contains_arabic_digits(value) {
        println!("{}", numerals::from_arabic_indic(value));
    } else {
        println!("{}", numerals::map_to_arabic_indic(value));
    }
    Ok(())
}
