//! Byteranger CLI - Parse, validate, and inspect HTTP Range headers
//!
//! Usage:
//!   brcli [OPTIONS] --length <N> <RANGE>...
//!
//! Commands:
//!   parse     Print the merged byte intervals (default)
//!   validate  Check the range lists for errors
//!   stats     Show coverage statistics

use std::env;
use std::process;

use byteranger_core::{parse, ByteRange};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    match config.command {
        Command::Parse => cmd_parse(&config),
        Command::Validate => cmd_validate(&config),
        Command::Stats => cmd_stats(&config),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    ranges: Vec<String>,
    length: u64,
    prefix: String,
    format: OutputFormat,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Parse,
    Validate,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Parse;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut length = None;
    let mut prefix = "bytes=".to_string();
    let mut ranges = Vec::new();

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("brcli {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "-l" | "--length" => {
                i += 1;
                let value = args.get(i).ok_or("--length requires a value")?;
                let parsed = value
                    .parse::<u64>()
                    .map_err(|e| format!("invalid --length '{}': {}", value, e))?;
                length = Some(parsed);
            }
            "-p" | "--prefix" => {
                i += 1;
                let value = args.get(i).ok_or("--prefix requires a value")?;
                prefix = value.clone();
            }
            "parse" => command = Command::Parse,
            "validate" => command = Command::Validate,
            "stats" => command = Command::Stats,
            // A leading dash can also open a suffix range like "-500";
            // only treat dash-plus-non-digit as an option.
            _ if arg.starts_with('-')
                && arg.len() > 1
                && !arg[1..].starts_with(|c: char| c.is_ascii_digit()) =>
            {
                return Err(format!("unknown option: {}", arg));
            }
            _ => ranges.push(arg.clone()),
        }
        i += 1;
    }

    let length = length.ok_or("no content length specified (use --length)")?;

    if ranges.is_empty() {
        return Err("no range lists specified".to_string());
    }

    Ok(Config {
        command,
        ranges,
        length,
        prefix,
        format,
        verbose,
    })
}

fn print_help() {
    eprintln!(
        "brcli - HTTP Range header parser

USAGE:
    brcli [OPTIONS] --length <N> [COMMAND] <RANGE>...

COMMANDS:
    parse       Print the merged byte intervals (default)
    validate    Check the range lists for errors
    stats       Show coverage statistics

ARGS:
    <RANGE>...  One or more range lists, e.g. 'bytes=0-99,200-'
                Each argument models one Range header occurrence.
                Suffix forms such as '-500' are accepted; quote them or
                place them after the options.

OPTIONS:
    -l, --length <N>    Content length the ranges apply to (required)
    -p, --prefix <S>    Unit prefix to strip (default: 'bytes=')
    -j, --json          Emit JSON instead of text
    -v, --verbose       Print additional detail
    -h, --help          Show this help
    -V, --version       Show version"
    );
}

// =============================================================================
// Parse Command
// =============================================================================

#[derive(Serialize)]
struct JsonRange {
    start: u64,
    stop: u64,
    len: u64,
}

#[derive(Serialize)]
struct JsonParseOutput {
    length: u64,
    ranges: Vec<JsonRange>,
}

impl From<&ByteRange> for JsonRange {
    fn from(range: &ByteRange) -> Self {
        JsonRange {
            start: range.start,
            stop: range.stop,
            len: range.len(),
        }
    }
}

fn cmd_parse(config: &Config) -> Result<(), String> {
    let ranges = parse(&config.ranges, &config.prefix, config.length)
        .map_err(|e| e.to_string())?;

    match config.format {
        OutputFormat::Json => {
            let output = JsonParseOutput {
                length: config.length,
                ranges: ranges.iter().map(JsonRange::from).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Text => {
            if config.verbose {
                println!(
                    "{} range list(s) over length {}",
                    config.ranges.len(),
                    config.length
                );
            }
            for range in &ranges {
                println!("{}", range);
            }
        }
    }

    Ok(())
}

// =============================================================================
// Validate Command
// =============================================================================

fn cmd_validate(config: &Config) -> Result<(), String> {
    match parse(&config.ranges, &config.prefix, config.length) {
        Ok(ranges) => {
            match config.format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::json!({"valid": true, "ranges": ranges.len()})
                    );
                }
                OutputFormat::Text => {
                    println!("Valid: {} merged range(s)", ranges.len());
                    if config.verbose {
                        for range in &ranges {
                            println!("  {}", range);
                        }
                    }
                }
            }
            Ok(())
        }
        Err(e) => {
            if let OutputFormat::Json = config.format {
                println!(
                    "{}",
                    serde_json::json!({"valid": false, "error": e.to_string()})
                );
            } else {
                eprintln!("Invalid: {}", e);
            }
            Err(e.to_string())
        }
    }
}

// =============================================================================
// Stats Command
// =============================================================================

#[derive(Serialize)]
struct CoverageStats {
    length: u64,
    ranges: usize,
    bytes_covered: u64,
    coverage: f64,
    largest_gap: u64,
}

impl CoverageStats {
    fn from_ranges(ranges: &[ByteRange], length: u64) -> Self {
        let bytes_covered: u64 = ranges.iter().map(ByteRange::len).sum();

        let mut largest_gap = 0;
        for pair in ranges.windows(2) {
            largest_gap = largest_gap.max(pair[1].start - pair[0].stop - 1);
        }

        let coverage = if length == 0 {
            0.0
        } else {
            bytes_covered as f64 / length as f64
        };

        CoverageStats {
            length,
            ranges: ranges.len(),
            bytes_covered,
            coverage,
            largest_gap,
        }
    }
}

fn cmd_stats(config: &Config) -> Result<(), String> {
    let ranges = parse(&config.ranges, &config.prefix, config.length)
        .map_err(|e| e.to_string())?;

    let stats = CoverageStats::from_ranges(&ranges, config.length);

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats).unwrap());
        }
        OutputFormat::Text => {
            println!("Range Statistics");
            println!("----------------");
            println!("Content length:  {}", stats.length);
            println!("Merged ranges:   {}", stats.ranges);
            println!("Bytes covered:   {}", stats.bytes_covered);
            println!("Coverage:        {:.1}%", stats.coverage * 100.0);
            println!("Largest gap:     {}", stats.largest_gap);
        }
    }

    Ok(())
}
