use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use epd::FenPolicy;

#[derive(Parser, Debug)]
#[command(name = "epd2uci")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reads EPD lines on stdin and writes them with best moves in UCI notation")]
pub struct Args {
    /// Log the conversion to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// What to do with a line whose FEN cannot be parsed.
    #[arg(long, value_enum, default_value_t = InvalidFen::Abort)]
    pub on_invalid_fen: InvalidFen,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidFen {
    /// Stop with an error.
    Abort,
    /// Echo the line unchanged and continue.
    Skip,
}

impl From<InvalidFen> for FenPolicy {
    fn from(value: InvalidFen) -> Self {
        match value {
            InvalidFen::Abort => FenPolicy::Abort,
            InvalidFen::Skip => FenPolicy::Skip,
        }
    }
}
