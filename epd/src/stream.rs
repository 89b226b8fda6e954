use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::convert::{Converted, Converter};
use crate::error::ConvertError;
use crate::rules::ChessRules;

/// What to do with a line whose FEN cannot be parsed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FenPolicy {
    /// Stop the run with [`ConvertError::InvalidFen`].
    #[default]
    Abort,
    /// Report it, echo the line back and keep going.
    Skip,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub records: usize,
    pub passthrough: usize,
    pub blank: usize,
    pub resolved_moves: usize,
    pub unresolved_moves: usize,
    pub skipped: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines: {} records, {} passthrough, {} blank, {} skipped; {} moves resolved, {} unresolved",
            self.lines,
            self.records,
            self.passthrough,
            self.blank,
            self.skipped,
            self.resolved_moves,
            self.unresolved_moves
        )
    }
}

/// Converts `input` line by line. Every input line yields exactly one output
/// line, flushed before the next one is read. Unresolved moves are reported on
/// `diagnostics`, one line each.
pub fn run<R, I, O, D>(
    converter: &Converter<R>,
    policy: FenPolicy,
    input: I,
    mut output: O,
    mut diagnostics: D,
) -> Result<Summary, ConvertError>
where
    R: ChessRules,
    I: BufRead,
    O: Write,
    D: Write,
{
    let mut summary = Summary::default();

    for line in input.lines() {
        let line = line?;
        summary.lines += 1;
        debug!("Input: {:?}", line);

        let converted = match converter.convert(&line) {
            Ok(converted) => converted,
            Err(ConvertError::InvalidFen { fen, source }) if policy == FenPolicy::Skip => {
                let line = line.trim();
                warn!("Skipping line with invalid FEN '{}': {}", fen, source);
                writeln!(
                    diagnostics,
                    "Error parsing position '{}' in line: {} - {}",
                    fen, line, source
                )?;
                summary.skipped += 1;
                emit(&mut output, line)?;
                continue;
            }
            Err(e) => return Err(e),
        };

        match &converted {
            Converted::Blank => summary.blank += 1,
            Converted::Passthrough(_) => summary.passthrough += 1,
            Converted::Record { moves, .. } => {
                summary.records += 1;
                summary.resolved_moves += moves.iter().filter(|mv| mv.is_resolved()).count();
            }
        }

        for (san, error) in converted.failures() {
            summary.unresolved_moves += 1;
            warn!("Could not resolve '{}': {}", san, error);
            writeln!(
                diagnostics,
                "Error processing move '{}' in line: {} - {}",
                san,
                line.trim(),
                error
            )?;
        }

        emit(&mut output, &converted.to_string())?;
    }

    diagnostics.flush()?;

    Ok(summary)
}

fn emit<O: Write>(output: &mut O, line: &str) -> io::Result<()> {
    debug!("Output: {:?}", line);
    writeln!(output, "{}", line)?;
    output.flush()
}
