use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use kharcha_core::{Category, ExpenseDraft, default_categories};
use kharcha_voice::parse_voice_expense;
use std::io::Read;

mod config;

#[derive(Parser, Debug)]
#[command(name = "kharcha", version, about = "Voice-transcript expense parser CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a transcript into amount / currency / category
    Parse {
        /// Transcript text; reads stdin when omitted
        text: Vec<String>,

        /// Fallback currency code (overrides config)
        #[arg(long)]
        default_currency: Option<String>,

        /// Extra category candidates as "id=Name" pairs, tried before the
        /// built-in set
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Emit the parse result and draft entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in categories
    Categories,

    /// Config management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default ~/.kharcha/config.toml if missing
    Init,
    /// Print the active config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            text,
            default_currency,
            categories,
            json,
        } => run_parse(text, default_currency, categories, json)?,

        Command::Categories => {
            for cat in default_categories() {
                println!("{:<20} {}", cat.id, cat.name);
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("{}", toml::to_string_pretty(&cfg)?);
            }
        },
    }

    Ok(())
}

fn run_parse(
    text: Vec<String>,
    default_currency: Option<String>,
    extra_categories: Vec<String>,
    json: bool,
) -> Result<()> {
    let transcript = if text.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf.trim().to_string()
    } else {
        text.join(" ")
    };

    let cfg = config::load_config()?;
    let default_currency = default_currency.or(cfg.default_currency);

    let mut categories = parse_category_args(&extra_categories)?;
    categories.extend(default_categories());

    let parsed = parse_voice_expense(&transcript, &categories, default_currency.as_deref());
    let draft = ExpenseDraft::from_parsed(&parsed, Local::now().date_naive());

    if json {
        println!(
            "{}",
            serde_json::json!({ "parsed": parsed, "draft": draft })
        );
        return Ok(());
    }

    println!("transcript: {:?}", parsed.raw_text);
    match parsed.amount {
        Some(a) => println!("amount:     {a}"),
        None => println!("amount:     (not detected — try again or enter manually)"),
    }
    match &parsed.currency {
        Some(c) => println!("currency:   {c}"),
        None => println!("currency:   (none)"),
    }
    match &parsed.category_match {
        Some(m) => println!("category:   {} ({:.0}% confident)", m.name, m.confidence * 100.0),
        None => println!("category:   (no confident match)"),
    }
    println!("draft date: {}", draft.date);

    Ok(())
}

/// Parse repeated --category "id=Name" flags.
fn parse_category_args(args: &[String]) -> Result<Vec<Category>> {
    args.iter()
        .map(|raw| {
            let (id, name) = raw
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("--category expects id=Name, got {raw:?}"))?;
            Ok(Category::new(id.trim(), name.trim()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_args() {
        let cats = parse_category_args(&["pets=Pet Supplies".to_string()]).unwrap();
        assert_eq!(cats[0].id, "pets");
        assert_eq!(cats[0].name, "Pet Supplies");
    }

    #[test]
    fn test_parse_category_args_rejects_bare_value() {
        assert!(parse_category_args(&["nope".to_string()]).is_err());
    }
}
