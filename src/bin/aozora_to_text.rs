//! Convert Aozora Bunko archive files to clean reading text.
//!
//! Usage:
//!   aozora_to_text -i novel.txt                      - clean to stdout
//!   aozora_to_text -i novel.txt -o clean.txt         - clean to a file
//!   aozora_to_text -i novel.txt -o clean.txt -t 20   - split into ~20-minute chunks
//!
//! The cleaned document goes to stdout or the output file; every diagnostic
//! (detected encoding, counts, reading estimate, completion notices) goes to
//! stderr so the primary text stream stays clean.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};

use aozora_oxide::{
    chunk_path, detect_and_decode, split_into_chunks, CleaningPipeline, Error, ReaderConfig,
    Result,
};

fn main() {
    env_logger::init();

    let matches = build_command().try_get_matches().unwrap_or_else(|err| {
        use clap::error::ErrorKind;
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                std::process::exit(0);
            }
            _ => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    });

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn build_command() -> Command {
    Command::new("aozora_to_text")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert an Aozora Bunko archive file into clean reading text")
        .arg(
            Arg::new("speed")
                .long("speed")
                .short('s')
                .value_name("NUM")
                .help("Reading speed in characters per minute")
                .value_parser(clap::value_parser!(u32).range(1..))
                .default_value("300"),
        )
        .arg(
            Arg::new("time")
                .long("time")
                .short('t')
                .value_name("MINUTES")
                .help("Minutes of reading per output chunk (requires --output)")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .help("Input file, repeatable; '-' or no input reads standard input")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Destination file; with --time, chunk files FILE_NNN.txt are written"),
        )
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mut config = ReaderConfig::new();
    if matches.value_source("speed") == Some(ValueSource::CommandLine) {
        let speed = *matches.get_one::<u32>("speed").expect("speed has a default");
        config = config.with_speed(speed);
    }
    if let Some(minutes) = matches.get_one::<u32>("time") {
        config = config.with_minutes_per_chunk(*minutes);
    }
    if let Some(output) = matches.get_one::<String>("output") {
        config = config.with_output(PathBuf::from(output));
    }
    config.validate()?;

    let inputs: Vec<String> = matches
        .get_many::<String>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let bytes = gather_input(&inputs)?;

    let decoded = detect_and_decode(&bytes)?;
    eprintln!("Detected encoding: {}", decoded.encoding);

    let document = CleaningPipeline::new().run(&decoded.text);
    let text = document.assemble();
    eprintln!("Total characters: {}", document.char_count());
    eprintln!(
        "Estimated reading time: {} min at {} chars/min",
        document.reading_minutes(config.speed),
        config.speed
    );

    match (&config.output, config.budget()) {
        (Some(output), Some(budget)) => {
            let chunks = split_into_chunks(&text, budget);
            let base = output.to_string_lossy();
            for chunk in &chunks {
                let path = chunk_path(&base, chunk.seq);
                fs::write(&path, &chunk.text)?;
                eprintln!("Wrote {path}");
            }
            eprintln!("Done: {} chunk(s)", chunks.len());
        }
        (Some(output), None) => {
            fs::write(output, text)?;
            eprintln!("Wrote {}", output.display());
        }
        (None, _) => {
            io::stdout().lock().write_all(text.as_bytes())?;
        }
    }

    Ok(())
}

/// Read every input source, in argument order, into one byte stream.
///
/// `-` names standard input; with no inputs at all, standard input is read
/// unless it is a terminal, which is an error rather than a silent hang.
fn gather_input(inputs: &[String]) -> Result<Vec<u8>> {
    if inputs.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Err(Error::NoInput);
        }
        let mut bytes = Vec::new();
        stdin.lock().read_to_end(&mut bytes)?;
        return Ok(bytes);
    }

    let mut bytes = Vec::new();
    for input in inputs {
        if input == "-" {
            io::stdin().lock().read_to_end(&mut bytes)?;
        } else {
            let path = Path::new(input);
            if !path.exists() {
                return Err(Error::MissingInput(path.to_path_buf()));
            }
            bytes.extend_from_slice(&fs::read(path)?);
        }
    }
    Ok(bytes)
}
