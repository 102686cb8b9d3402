#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions)]

use std::{error, io, path::PathBuf, process};

mod file;

use clap::Parser;
use log::trace;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<(), Box<dyn error::Error>> {
    let Cli {
        file,
        verbosity,
        quiet,
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    let raw = match file::read_bibliography(&file)? {
        Some(raw) => raw,
        None => {
            // A missing input file is reported, not treated as a crash.
            println!(
                "Error: Could not find '{}'. Please ensure the file exists in the same folder.",
                file.display()
            );
            return Ok(());
        }
    };

    trace!("Generating the category listing on stdout");
    let stdout = io::stdout();
    bibdata::generate(raw, &mut stdout.lock())?;

    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> Result<(), Box<dyn error::Error>> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 1 } else { verbosity + 2 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "bibdata")]
#[clap(about = "Convert a .bib bibliography into YAML-like data blocks grouped by category")]
#[clap(version, author)]
struct Cli {
    /// The name of the bibliography file to convert
    #[clap(short, long, parse(from_os_str), default_value = "papers.bib")]
    file: PathBuf,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Prevents the program from writing log output, errors will still be printed to stderr.
    #[clap(short, long)]
    quiet: bool,
}
