//! Username Forge - themed username and handle generation
//!
//! A simple CLI tool for composing randomized usernames from themed word
//! lists, either as an interactive session or as a one-shot command.

use anyhow::{anyhow, bail, Context};
use inquire::{Confirm, CustomType, Select, Text};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;
use username_forge::{generate_batch, generate_batch_with_rng, Category, History, StylePreset, UsernameOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    let result = if args.len() <= 1 {
        run_interactive()
    } else {
        parse_args(&args[1..]).and_then(run_once)
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Parsed one-shot invocation
struct CliArgs {
    options: UsernameOptions,
    seed: Option<u64>,
    json: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let mut options = UsernameOptions::default();
    let mut seed = None;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--category" | "-c" => options.category = require_value(&mut iter, arg)?.parse()?,
            "--style" | "-s" => options.style = require_value(&mut iter, arg)?.parse()?,
            "--count" | "-n" => options.batch_size = parse_number(&mut iter, arg)?,
            "--min" => options.min_length = parse_number(&mut iter, arg)?,
            "--max" => options.max_length = parse_number(&mut iter, arg)?,
            "--prefix" => options.include_prefix = true,
            "--suffix" => options.include_suffix = true,
            "--no-safe" => options.avoid_ambiguous = false,
            "--seed" => seed = Some(parse_number(&mut iter, arg)?),
            "--json" => json = true,
            value if !value.starts_with('-') => options.keyword = value.to_string(),
            other => bail!("unknown flag '{}' (use --help for usage)", other),
        }
    }

    Ok(CliArgs {
        options,
        seed,
        json,
    })
}

fn require_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> anyhow::Result<&'a String> {
    iter.next()
        .ok_or_else(|| anyhow!("flag '{}' requires a value", flag))
}

fn parse_number<T: std::str::FromStr>(
    iter: &mut std::slice::Iter<'_, String>,
    flag: &str,
) -> anyhow::Result<T> {
    require_value(iter, flag)?
        .parse()
        .map_err(|_| anyhow!("flag '{}' expects a number", flag))
}

/// One-shot mode: generate a single batch and print it
fn run_once(cli: CliArgs) -> anyhow::Result<()> {
    let batch = match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_batch_with_rng(&cli.options, &mut rng)?
        }
        None => generate_batch(&cli.options)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        display_batch(&batch);
    }

    Ok(())
}

/// Interactive session mirroring the classic generator form
fn run_interactive() -> anyhow::Result<()> {
    println!("🐱 Username Forge v{} - themed username generation", username_forge::VERSION);
    println!("═══════════════════════════════════════════════════");
    println!();

    let mut history = History::new();
    let mut options = UsernameOptions::default();

    loop {
        options = prompt_options(&options).context("prompt cancelled")?;

        match generate_batch(&options) {
            Ok(batch) => {
                display_batch(&batch);
                if let Some(first) = batch.first() {
                    history.record(first.clone());
                }
                display_history(&history);
            }
            Err(e) => eprintln!("{}", e.user_message()),
        }

        let again = Confirm::new("Generate another batch?")
            .with_default(true)
            .prompt()
            .context("prompt cancelled")?;
        if !again {
            break;
        }
    }

    Ok(())
}

/// Collect a full configuration via prompts, seeded with the previous answers
fn prompt_options(defaults: &UsernameOptions) -> anyhow::Result<UsernameOptions> {
    let category = Select::new("Category:", Category::ALL.to_vec()).prompt()?;
    let style = Select::new("Style preset:", StylePreset::ALL.to_vec()).prompt()?;
    let keyword = Text::new("Keyword (optional):")
        .with_default(&defaults.keyword)
        .prompt()?;
    let batch_size = Select::new("Batch size:", vec![1usize, 5, 10, 20, 50, 100]).prompt()?;
    let min_length = CustomType::<usize>::new("Min length:")
        .with_default(defaults.min_length)
        .prompt()?;
    let max_length = CustomType::<usize>::new("Max length:")
        .with_default(defaults.max_length)
        .prompt()?;
    let include_prefix = Confirm::new("Include prefix?")
        .with_default(defaults.include_prefix)
        .prompt()?;
    let include_suffix = Confirm::new("Include suffix?")
        .with_default(defaults.include_suffix)
        .prompt()?;
    let avoid_ambiguous = Confirm::new("Safe characters only?")
        .with_default(defaults.avoid_ambiguous)
        .prompt()?;

    Ok(UsernameOptions {
        category,
        style,
        batch_size,
        min_length,
        max_length,
        include_prefix,
        include_suffix,
        avoid_ambiguous,
        keyword,
    })
}

/// Display a batch in a compact grid format
fn display_batch(batch: &[String]) {
    println!();
    println!("🎨 Generated Usernames ({}):", batch.len());
    println!("═══════════════════════");

    let mut count = 0;
    for name in batch {
        count += 1;
        print!("{:2}. {:<22}", count, name);

        // New line every 3 names for better readability
        if count % 3 == 0 {
            println!();
        }
    }

    if batch.len() % 3 != 0 {
        println!();
    }
    println!();
}

/// Display the recent-history list, most recent first
fn display_history(history: &History) {
    if history.is_empty() {
        return;
    }

    println!("🕑 Recent picks:");
    for item in history.items() {
        println!("   {:<24} {}", item.value, item.timestamp.format("%H:%M:%S"));
    }
    println!();
}

/// Print help information
fn print_help() {
    println!("🐱 Username Forge - themed username and handle generation");
    println!("═════════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    username-forge                  # Interactive session");
    println!("    username-forge [OPTIONS] [KEYWORD]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --category <NAME>   Word category: clean, fruit, cat, anime,");
    println!("                            league, genshin, sanrio, miscellaneous");
    println!("    -s, --style <NAME>      Style preset: cute, clean, gamer, professional");
    println!("    -n, --count <N>         Batch size (default: 10)");
    println!("        --min <N>           Minimum length (default: 3)");
    println!("        --max <N>           Maximum length (default: 18)");
    println!("        --prefix            Prepend a random prefix");
    println!("        --suffix            Append a random suffix");
    println!("        --no-safe           Allow visually ambiguous characters");
    println!("        --seed <N>          Seed the RNG for reproducible output");
    println!("        --json              Print the batch as a JSON array");
    println!("    -h, --help              Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    username-forge                           # Interactive session");
    println!("    username-forge -c cat -s gamer shadow    # One-shot with keyword");
    println!("    username-forge -n 5 --seed 42 --json     # Reproducible JSON batch");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
