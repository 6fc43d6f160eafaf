//! Nullguard CLI
//!
//! This is a demonstration CLI for the nullguard library. It validates
//! `Person` records read from JSON files.

use anyhow::{bail, Context};
use nullguard::prelude::*;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::ExitCode;
use time::OffsetDateTime;

/// Record validated by the `check` command.
#[derive(Debug, Deserialize)]
struct Person {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    age: i32,
    #[serde(default = "epoch", with = "time::serde::rfc3339")]
    date_of_birth: OffsetDateTime,
}

inspect!(Person { full_name, age, date_of_birth });

fn epoch() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

/// Parsed arguments of the `check` command.
#[derive(Debug, Default)]
struct CheckArgs {
    input: PathBuf,
    ignore: Vec<String>,
    value_types: bool,
    config: Option<PathBuf>,
    json: bool,
}

/// Exit code for a valid record.
const EXIT_VALID: u8 = 0;
/// Exit code for a record with absent fields.
const EXIT_ABSENT: u8 = 1;
/// Exit code for usage, I/O and config errors.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    ExitCode::from(run(&args))
}

/// Dispatch a full command line and return the process exit code.
fn run(args: &[String]) -> u8 {
    let program = args.first().map(String::as_str).unwrap_or("nullguard");

    if args.len() < 2 {
        print_usage(program);
        return EXIT_ERROR;
    }

    let result = match args[1].as_str() {
        "demo" => run_demo().map(|_| true),
        "check" => parse_check_args(&args[2..]).and_then(|check_args| run_check(&check_args)),
        "help" | "--help" | "-h" => {
            print_usage(program);
            Ok(true)
        }
        "version" | "--version" | "-V" => {
            println!("{} v{}", nullguard::NAME, nullguard::VERSION);
            Ok(true)
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(program);
            return EXIT_ERROR;
        }
    };

    exit_code(result)
}

fn exit_code(result: anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => EXIT_VALID,
        Ok(false) => EXIT_ABSENT,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    }
}

fn print_usage(program: &str) {
    println!("Usage: {} <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  demo                  Run the built-in example scenarios");
    println!("  check <person.json>   Validate a Person record");
    println!("  help                  Show this help message");
    println!("  version               Show the version");
    println!();
    println!("Check options:");
    println!("  --ignore <field>      Skip a field (repeatable)");
    println!("  --value-types         Treat zero numbers and epoch dates as absent");
    println!("  --config <file>       Load validation options from a TOML file");
    println!("  --json                Print the full report as JSON");
    println!();
    println!("Fields: full_name, age, date_of_birth");
}

fn parse_check_args(args: &[String]) -> anyhow::Result<CheckArgs> {
    let mut parsed = CheckArgs::default();
    let mut input = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ignore" => {
                let field = iter.next().context("--ignore requires a field name")?;
                parsed.ignore.push(field.clone());
            }
            "--config" => {
                let path = iter.next().context("--config requires a file path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--value-types" => parsed.value_types = true,
            "--json" => parsed.json = true,
            flag if flag.starts_with("--") => bail!("unknown option: {}", flag),
            path => {
                if input.replace(PathBuf::from(path)).is_some() {
                    bail!("only one input file can be checked at a time");
                }
            }
        }
    }

    parsed.input = input.context("missing input file")?;
    Ok(parsed)
}

/// Validate the record named by `args`; returns whether it is valid.
fn run_check(args: &CheckArgs) -> anyhow::Result<bool> {
    let options = match &args.config {
        Some(path) => ValidationOptions::from_file(path)?,
        None => ValidationOptions::default(),
    };

    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let person: Person = serde_json::from_str(&source)
        .with_context(|| format!("{} is not a valid Person record", args.input.display()))?;

    let mut validator = check(&person).with_options(&options);
    for field in &args.ignore {
        validator = validator.ignore(field.as_str())?;
    }
    if args.value_types {
        validator = validator.allow_value_type_validation();
    }

    let report = validator.report()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(report.is_valid())
}

fn run_demo() -> anyhow::Result<()> {
    let alice = Person {
        full_name: Some("Alice".to_string()),
        age: 0,
        date_of_birth: OffsetDateTime::UNIX_EPOCH,
    };
    println!("Person {{ full_name: \"Alice\", age: 0, date_of_birth: <epoch> }}");
    println!("  validate                               -> {}", check(&alice).validate()?);
    println!(
        "  allow_value_type_validation + validate -> {}",
        check(&alice).allow_value_type_validation().validate()?
    );
    println!(
        "  ignore age, date_of_birth + value types -> {}",
        check(&alice)
            .ignore("age")?
            .ignore("date_of_birth")?
            .allow_value_type_validation()
            .validate()?
    );
    println!();

    let nameless = Person {
        full_name: None,
        age: 99,
        date_of_birth: OffsetDateTime::now_utc(),
    };
    println!("Person {{ full_name: null, age: 99, date_of_birth: <now> }}");
    println!("  validate                               -> {}", check(&nameless).validate()?);
    println!(
        "  ignore full_name + validate            -> {}",
        check(&nameless).ignore("full_name")?.validate()?
    );
    println!();

    struct Marker;
    inspect!(Marker {});

    println!("Marker {{}}");
    match check(&Marker).validate() {
        Ok(valid) => println!("  validate                               -> {}", valid),
        Err(e) => {
            println!("  validate                               -> error: {}", e);
            if let Some(fix) = e.suggested_fix() {
                println!("    → Suggestion: {}", fix);
            }
        }
    }

    Ok(())
}
