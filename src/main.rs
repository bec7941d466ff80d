use std::io;
use std::process;

use clap::Parser;
use tracing::Level;

use albums::{Error, MusicBrainz, report};

/// List an artist's studio albums, oldest first.
///
/// Looks the artist up on MusicBrainz, takes the best match, and prints
/// every album release group that is not a compilation, live album, remix,
/// soundtrack or similar.
///
/// Examples:
///   albums David Bowie
///   albums -v Sigur Rós
#[derive(Parser)]
#[command(name = "albums", version, about)]
struct Cli {
    /// Artist name to search for; all words are joined with spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    artist: Vec<String>,

    /// Log each API request to stderr
    #[arg(short, long)]
    verbose: bool,
}

// ── Entry point ────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli.artist) {
        Ok(()) => {}
        Err(e @ Error::MissingArtist) => {
            eprintln!("{e}");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run(words: &[String]) -> Result<(), Error> {
    let query = words.join(" ");
    let discography = albums::discography(&MusicBrainz::new(), &query)?;

    let mut stdout = io::stdout().lock();
    report::write_listing(&mut stdout, &discography)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
