use std::fmt;

use log::debug;

use crate::error::{ConvertError, RulesError};
use crate::record::{EpdLine, EpdRecord};
use crate::rules::{ChessRules, StandardRules};
use crate::MOVES_SEPARATOR;

/// Outcome of resolving one SAN token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedMove {
    Uci(String),
    /// Resolution failed; the original token is kept for output.
    Unresolved { san: String, error: RulesError },
}

impl ResolvedMove {
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedMove::Uci(uci) => uci,
            ResolvedMove::Unresolved { san, .. } => san,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolvedMove::Uci(_))
    }
}

impl fmt::Display for ResolvedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A converted line. `Display` yields the text written to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converted {
    Blank,
    Passthrough(String),
    Record {
        fen: String,
        moves: Vec<ResolvedMove>,
    },
}

impl Converted {
    /// Tokens that could not be resolved, with the reason.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &RulesError)> {
        let moves: &[ResolvedMove] = match self {
            Converted::Record { moves, .. } => moves,
            _ => &[],
        };

        moves.iter().filter_map(|mv| match mv {
            ResolvedMove::Unresolved { san, error } => Some((san.as_str(), error)),
            ResolvedMove::Uci(_) => None,
        })
    }
}

impl fmt::Display for Converted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Converted::Blank => Ok(()),
            Converted::Passthrough(line) => f.write_str(line),
            Converted::Record { fen, moves } => {
                write!(f, "{}{}", fen, MOVES_SEPARATOR)?;
                for (i, mv) in moves.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", mv)?;
                }
                Ok(())
            }
        }
    }
}

/// Rewrites EPD best-move lists from SAN to UCI.
#[derive(Debug, Clone)]
pub struct Converter<R = StandardRules> {
    rules: R,
}

impl Default for Converter<StandardRules> {
    fn default() -> Self {
        Self::new(StandardRules)
    }
}

impl<R: ChessRules> Converter<R> {
    pub fn new(rules: R) -> Self {
        Self { rules }
    }

    pub fn convert(&self, line: &str) -> Result<Converted, ConvertError> {
        match EpdLine::parse(line) {
            EpdLine::Blank => Ok(Converted::Blank),
            EpdLine::Passthrough(line) => Ok(Converted::Passthrough(line.to_string())),
            EpdLine::Record(record) => self.convert_record(&record),
        }
    }

    /// Every token is resolved against the same position; the board is not
    /// advanced between them since each one is an alternative best move.
    pub fn convert_record(&self, record: &EpdRecord<'_>) -> Result<Converted, ConvertError> {
        if let Some(annotation) = record.annotation {
            debug!("Dropping annotation: {}", annotation);
        }

        let position =
            self.rules
                .parse_position(record.fen)
                .map_err(|source| ConvertError::InvalidFen {
                    fen: record.fen.to_string(),
                    source,
                })?;

        let moves = record
            .moves
            .iter()
            .map(|&san| self.resolve(&position, san))
            .collect();

        Ok(Converted::Record {
            fen: record.fen.to_string(),
            moves,
        })
    }

    fn resolve(&self, position: &R::Position, san: &str) -> ResolvedMove {
        match self.rules.resolve_move(position, san) {
            Ok(mv) => {
                let uci = mv.to_string();
                debug!("Resolved {} -> {}", san, uci);
                ResolvedMove::Uci(uci)
            }
            Err(error) => ResolvedMove::Unresolved {
                san: san.to_string(),
                error,
            },
        }
    }
}
