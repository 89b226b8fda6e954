mod convert;
mod error;
mod record;
mod rules;
mod san;
mod stream;


pub use convert::{Converted, Converter, ResolvedMove};
pub use error::{ConvertError, RulesError};
pub use record::{EpdLine, EpdRecord};
pub use rules::{ChessRules, StandardRules};
pub use san::normalize_san;
pub use stream::{run, FenPolicy, Summary};

/// Delimiter between the position and the best-move list.
pub const BEST_MOVE_OPCODE: &str = "bm";

/// Separates the FEN from the UCI moves in a converted line.
pub const MOVES_SEPARATOR: char = '#';
