//! wordladder — shortest word ladders over a dictionary.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use wordladder_core::LadderConfig;

mod commands;

fn print_usage() {
    println!("wordladder — shortest word ladders over a dictionary");
    println!();
    println!("Usage: wordladder <command> [args]");
    println!();
    println!("Commands:");
    println!("  path <dictionary> <from> <to>       Print a shortest ladder between two words");
    println!("  distance <dictionary> <from> <to>   Print the number of edits between two words");
    println!("  neighbors <dictionary> <word>       Print the words one edit away");
    println!("  stats <dictionary>                  Print graph statistics as JSON");
    println!("  help                                Show this help message");
    println!();
    println!("Environment:");
    println!("  RUST_LOG                        Log filter (default: info)");
    println!("  WORDLADDER_PARALLEL_THRESHOLD   Vertex count for parallel precomputation");
    println!("  WORDLADDER_CASE_FOLD            Upper-case words (default: true)");
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries results only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = LadderConfig::from_env();

    let Some(command) = args.get(1) else {
        print_usage();
        std::process::exit(1);
    };

    match command.as_str() {
        "path" | "distance" => {
            if args.len() != 5 {
                eprintln!("Usage: wordladder {} <dictionary> <from> <to>", command);
                std::process::exit(1);
            }
            let processor = commands::load(&PathBuf::from(&args[2]), &config)?;
            let output = if command == "path" {
                commands::path(&processor, &config, &args[3], &args[4])?
            } else {
                commands::distance(&processor, &config, &args[3], &args[4])?
            };
            println!("{}", output);
        }
        "neighbors" => {
            if args.len() != 4 {
                eprintln!("Usage: wordladder neighbors <dictionary> <word>");
                std::process::exit(1);
            }
            let processor = commands::load(&PathBuf::from(&args[2]), &config)?;
            println!("{}", commands::neighbors(&processor, &config, &args[3])?);
        }
        "stats" => {
            if args.len() != 3 {
                eprintln!("Usage: wordladder stats <dictionary>");
                std::process::exit(1);
            }
            let processor = commands::load(&PathBuf::from(&args[2]), &config)?;
            println!("{}", commands::stats(&processor)?);
        }
        "--help" | "-h" | "help" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}. Use 'wordladder help' for usage.", command);
            std::process::exit(1);
        }
    }

    Ok(())
}
