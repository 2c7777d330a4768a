use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use quizpacket_config::Config;
use quizpacket_engine::{io, parse_packet};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (input, explicit_output) = match args.len() {
        2 if args[1] == "-h" || args[1] == "--help" => {
            print_usage(&args[0]);
            return Ok(());
        }
        2 => (PathBuf::from(&args[1]), None),
        3 => (PathBuf::from(&args[1]), Some(PathBuf::from(&args[2]))),
        _ => {
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring unreadable config file: {e}");
            None
        }
    };

    let document = io::read_docx(&input)
        .with_context(|| format!("failed to read '{}'", input.display()))?;
    let packet = parse_packet(&document)
        .with_context(|| format!("failed to parse '{}'", input.display()))?;

    let pretty = config.as_ref().map(|c| c.pretty).unwrap_or(true);
    let json = if pretty {
        serde_json::to_string_pretty(&packet)?
    } else {
        serde_json::to_string(&packet)?
    };

    match explicit_output.or_else(|| default_output(config.as_ref(), &input)) {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            log::info!(
                "wrote {} tossup(s) and {} bonus(es) to {}",
                packet.tossups.len(),
                packet.bonuses.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Output path from the config's output directory, named after the input stem.
fn default_output(config: Option<&Config>, input: &Path) -> Option<PathBuf> {
    let dir = config?.output_dir.as_ref()?;
    Some(dir.join(input.file_stem()?).with_extension("json"))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <packet.docx> [output.json]");
    eprintln!("Parses a quiz packet document and emits its JSON record tree.");
    eprintln!("Without an output path, JSON goes to the configured output_dir or stdout.");
}
