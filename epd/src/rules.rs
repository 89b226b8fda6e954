use std::fmt;
use std::str::FromStr;

use chess::{
    Board, BoardBuilder, CastleRights, ChessMove, Color, File, MoveGen, Piece, Rank, Square,
};
use log::debug;

use crate::error::RulesError;
use crate::san::normalize_san;

/// The chess knowledge the converter needs: building a position from FEN and
/// resolving a SAN token against it. `Move` renders as UCI through `Display`.
pub trait ChessRules {
    type Position;
    type Move: fmt::Display;

    fn parse_position(&self, fen: &str) -> Result<Self::Position, RulesError>;

    fn resolve_move(&self, position: &Self::Position, san: &str)
        -> Result<Self::Move, RulesError>;
}

/// Rules backed by the `chess` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRules;

impl ChessRules for StandardRules {
    type Position = Board;
    type Move = ChessMove;

    /// Castling rights the pieces cannot back up are dropped instead of
    /// failing the board's sanity check; suites often carry `KQkq` on
    /// endgame positions.
    fn parse_position(&self, fen: &str) -> Result<Board, RulesError> {
        let mut builder =
            BoardBuilder::from_str(fen).map_err(|e| RulesError::InvalidPosition(e.to_string()))?;

        for color in [Color::White, Color::Black] {
            let rights = playable_castle_rights(&builder, color);
            builder.castle_rights(color, rights);
        }

        Board::try_from(&builder).map_err(|e| RulesError::InvalidPosition(e.to_string()))
    }

    fn resolve_move(&self, board: &Board, san: &str) -> Result<ChessMove, RulesError> {
        let san = normalize_san(san);

        ChessMove::from_san(board, &san).or_else(|e| {
            debug!("from_san rejected {}, matching legal moves instead", san);
            resolve_by_squares(board, &san).ok_or_else(|| RulesError::InvalidMove(e.to_string()))
        })
    }
}

fn playable_castle_rights(builder: &BoardBuilder, color: Color) -> CastleRights {
    let backrank = color.to_my_backrank();
    let has = |file: File, piece: Piece| {
        builder[Square::make_square(backrank, file)] == Some((piece, color))
    };

    let rights = builder.get_castle_rights(color);
    let king = has(File::E, Piece::King);
    let kingside = king && rights.has_kingside() && has(File::H, Piece::Rook);
    let queenside = king && rights.has_queenside() && has(File::A, Piece::Rook);

    match (kingside, queenside) {
        (true, true) => CastleRights::Both,
        (true, false) => CastleRights::KingSide,
        (false, true) => CastleRights::QueenSide,
        (false, false) => CastleRights::NoRights,
    }
}

/// A normalized SAN token broken into the squares and pieces it names.
#[derive(Debug, PartialEq, Eq)]
struct SanPattern {
    piece: Piece,
    from_file: Option<File>,
    from_rank: Option<Rank>,
    to: Square,
    promotion: Option<Piece>,
}

impl SanPattern {
    fn parse(san: &str) -> Option<Self> {
        let (piece, rest) = match san.chars().next().and_then(piece_from_char) {
            Some(piece) => (piece, &san[1..]),
            None => (Piece::Pawn, san),
        };

        let (rest, promotion) = match rest.chars().last().and_then(piece_from_char) {
            Some(promotion) if piece == Piece::Pawn && promotion != Piece::King => {
                (&rest[..rest.len() - 1], Some(promotion))
            }
            _ => (rest, None),
        };

        let squares: Vec<char> = rest.chars().filter(|&c| c != 'x').collect();
        if squares.len() < 2 {
            return None;
        }
        let (origin, dest) = squares.split_at(squares.len() - 2);
        let to = Square::make_square(rank_from_char(dest[1])?, file_from_char(dest[0])?);

        let (from_file, from_rank) = match origin {
            [] => (None, None),
            [c] => match (file_from_char(*c), rank_from_char(*c)) {
                (Some(file), _) => (Some(file), None),
                (None, Some(rank)) => (None, Some(rank)),
                (None, None) => return None,
            },
            [file, rank] => (Some(file_from_char(*file)?), Some(rank_from_char(*rank)?)),
            _ => return None,
        };

        Some(Self {
            piece,
            from_file,
            from_rank,
            to,
            promotion,
        })
    }

    fn matches(&self, board: &Board, mv: ChessMove) -> bool {
        let source = mv.get_source();

        mv.get_dest() == self.to
            && mv.get_promotion() == self.promotion
            && board.piece_on(source) == Some(self.piece)
            && self.from_file.map_or(true, |file| source.get_file() == file)
            && self.from_rank.map_or(true, |rank| source.get_rank() == rank)
    }
}

/// Matches the token against the legal moves. Picks up what `from_san` misses:
/// en passant captures and moves spelled with the full source square.
/// Ambiguous tokens resolve to nothing.
fn resolve_by_squares(board: &Board, san: &str) -> Option<ChessMove> {
    let pattern = SanPattern::parse(san)?;
    let mut candidates = MoveGen::new_legal(board).filter(|&mv| pattern.matches(board, mv));

    match (candidates.next(), candidates.next()) {
        (Some(mv), None) => Some(mv),
        _ => None,
    }
}

#[inline]
fn piece_from_char(c: char) -> Option<Piece> {
    match c {
        'N' => Some(Piece::Knight),
        'B' => Some(Piece::Bishop),
        'R' => Some(Piece::Rook),
        'Q' => Some(Piece::Queen),
        'K' => Some(Piece::King),
        _ => None,
    }
}

#[inline]
fn file_from_char(c: char) -> Option<File> {
    ('a'..='h')
        .contains(&c)
        .then(|| File::from_index(c as usize - 'a' as usize))
}

#[inline]
fn rank_from_char(c: char) -> Option<Rank> {
    ('1'..='8')
        .contains(&c)
        .then(|| Rank::from_index(c as usize - '1' as usize))
}
