// Vortserĉo – A word search puzzle generator
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use vortserco::config::PuzzleConfig;
use vortserco::generator::{self, GenerateError, Puzzle};
use vortserco::{logging, render};

/// Generates a word search puzzle from a list of words
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File with the puzzle settings and the words to hide
    input: PathBuf,

    /// File to write the puzzle to. It is overwritten.
    output: PathBuf,

    /// Seed for the random number generator to get the same puzzle
    /// every time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the puzzle as JSON instead of text
    #[arg(short, long)]
    json: bool,

    /// Log the details of where each word was placed
    #[arg(short, long)]
    verbose: bool,
}

fn generate(
    config: &PuzzleConfig,
    seed: Option<u64>,
) -> Result<Puzzle, GenerateError> {
    match seed {
        Some(seed) => generator::generate(
            &config.words,
            config.height,
            config.width,
            config.language,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => generator::generate(
            &config.words,
            config.height,
            config.width,
            config.language,
            &mut rand::thread_rng(),
        ),
    }
}

/// Loads the config, empties the output file, generates the puzzle
/// and then writes it to both `stdout` and the output file. The output
/// file is emptied first so that a failed run doesn’t leave an old
/// puzzle behind.
fn try_main(
    cli: &Cli,
    stdout: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = PuzzleConfig::load(&cli.input)
        .map_err(|e| format!("{}: {}", cli.input.display(), e))?;

    let output_error = |e: io::Error| format!("{}: {}", cli.output.display(), e);

    let mut output = File::create(&cli.output).map_err(output_error)?;

    let puzzle = generate(&config, cli.seed)?;

    let text = if cli.json {
        serde_json::to_string_pretty(&puzzle)?
    } else {
        render::render(&puzzle, config.show_hint)
    };

    write!(stdout, "{}", text)?;
    stdout.flush()?;

    output.write_all(text.as_bytes()).map_err(output_error)?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logger(cli.verbose);

    if let Err(e) = try_main(&cli, &mut io::stdout()) {
        eprintln!("ERROR: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
