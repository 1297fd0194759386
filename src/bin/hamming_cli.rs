//! Command line front end for the Hamming encoder and decoder.
//!
//! Usage:
//!   hamming_cli [-v] [--trace] encode <data bits>
//!   hamming_cli [-v] [--trace] decode <codeword bits>

use hamming::cs::ecc::hamming::{
    detect_and_correct, encode, extract_data, format_bits, parse_bits, parse_codeword,
    parity_bit_count, Decoded, DecodingTrace, EncodingTrace,
};
use hamming::Error;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::env;
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Encode,
    Decode,
}

#[derive(Debug)]
struct Options {
    action: Action,
    bits: String,
    trace: bool,
    verbose: bool,
}

fn print_help(prog_name: &str) {
    println!("Hamming single-error-correcting code");
    println!();
    println!("Usage:");
    println!("  {prog_name} [options] encode <data bits>");
    println!("  {prog_name} [options] decode <codeword bits>");
    println!();
    println!("Options:");
    println!("  --trace        Print the step-by-step parity tables");
    println!("  -v, --verbose  Enable debug logging");
    println!("  -h, --help     Show this help message");
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut trace = false;
    let mut verbose = false;
    let mut positional = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--trace" => trace = true,
            "-v" | "--verbose" => verbose = true,
            other if other.starts_with('-') => return Err(format!("Unknown option: {other}")),
            other => positional.push(other),
        }
    }

    let (action, bits) = match positional.as_slice() {
        ["encode", bits] => (Action::Encode, bits),
        ["decode", bits] => (Action::Decode, bits),
        [action, _] => return Err(format!("Unknown action: {action}")),
        _ => return Err("Expected an action and a bit string".to_string()),
    };

    Ok(Options {
        action,
        bits: bits.to_string(),
        trace,
        verbose,
    })
}

fn run_encode(options: &Options) -> Result<(), Error> {
    let data = parse_bits(&options.bits)?;
    info!(
        "encoding {} data bits with {} parity bits",
        data.len(),
        parity_bit_count(data.len())
    );

    if options.trace {
        print!("{}", EncodingTrace::new(&data));
    }
    println!("{}", format_bits(&encode(&data)));
    Ok(())
}

fn run_decode(options: &Options) -> Result<(), Error> {
    let code = parse_codeword(&options.bits)?;

    if options.trace {
        print!("{}", DecodingTrace::new(&code));
    }

    let decoded = detect_and_correct(&code);
    println!("{}", decoded.message());
    match &decoded {
        Decoded::NoError => println!("data: {}", format_bits(&extract_data(&code))),
        Decoded::Corrected { codeword, .. } => {
            println!("data: {}", format_bits(&extract_data(codeword)))
        }
        Decoded::Uncorrectable { .. } => process::exit(1),
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let prog_name = args.first().map_or("hamming_cli", String::as_str);

    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        print_help(prog_name);
        return;
    }

    let options = match parse_args(&args[1.min(args.len())..]) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            print_help(prog_name);
            process::exit(2);
        }
    };

    let level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init().ok();

    let result = match options.action {
        Action::Encode => run_encode(&options),
        Action::Decode => run_decode(&options),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(&args(&["--trace", "encode", "1011"])).unwrap();
        assert_eq!(options.action, Action::Encode);
        assert_eq!(options.bits, "1011");
        assert!(options.trace);
        assert!(!options.verbose);

        let options = parse_args(&args(&["decode", "0110111", "-v"])).unwrap();
        assert_eq!(options.action, Action::Decode);
        assert!(options.verbose);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["encode"])).is_err());
        assert!(parse_args(&args(&["flip", "101"])).is_err());
        assert!(parse_args(&args(&["--bogus", "encode", "101"])).is_err());
    }
}
