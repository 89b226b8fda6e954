//! Clean-up of SAN tokens as they appear in EPD test suites.
//!
//! Suites are written by hand and carry notation the move parser of the
//! `chess` crate rejects: `=` before a promotion piece (sometimes lowercase),
//! `0-0` for castling, a check marker after castling, a trailing `e.p.`,
//! hyphenated long algebraic such as `Ng1-f3`, annotation glyphs such as
//! `!?`. None of these change which move is meant, so they are stripped
//! before resolving.

use std::borrow::Cow;

const TRAILING_MARKS: &[char] = &['!', '?', '+', '#'];

/// Normalize a SAN token for resolution. The token itself is kept for output.
pub fn normalize_san(san: &str) -> Cow<'_, str> {
    let san = san.trim_end_matches(TRAILING_MARKS);
    let san = san
        .strip_suffix("e.p.")
        .map(|s| s.trim_end_matches(TRAILING_MARKS))
        .unwrap_or(san);

    match san {
        "0-0" | "O-O" => return Cow::Borrowed("O-O"),
        "0-0-0" | "O-O-O" => return Cow::Borrowed("O-O-O"),
        _ => {}
    }

    if !san.contains(&['=', '-'][..]) {
        return Cow::Borrowed(san);
    }

    // Long algebraic `Ng1-f3` and promotions written `a8=q`.
    let mut normalized = san.replace('-', "");
    if let Some(idx) = normalized.find('=') {
        let promotion = normalized.split_off(idx + 1).to_ascii_uppercase();
        normalized.pop();
        normalized.push_str(&promotion);
    }

    Cow::Owned(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_moves_are_borrowed() {
        assert!(matches!(normalize_san("Nf3"), Cow::Borrowed("Nf3")));
        assert!(matches!(normalize_san("exd5"), Cow::Borrowed("exd5")));
    }

    #[test]
    fn test_trailing_marks() {
        assert_eq!(normalize_san("Qd1+"), "Qd1");
        assert_eq!(normalize_san("Qxf7#"), "Qxf7");
        assert_eq!(normalize_san("Nf3!?"), "Nf3");
        assert_eq!(normalize_san("Rxe8+!"), "Rxe8");
    }

    #[test]
    fn test_castling() {
        assert_eq!(normalize_san("0-0"), "O-O");
        assert_eq!(normalize_san("0-0-0"), "O-O-O");
        assert_eq!(normalize_san("O-O+"), "O-O");
        assert_eq!(normalize_san("0-0-0#"), "O-O-O");
    }

    #[test]
    fn test_promotion() {
        assert_eq!(normalize_san("e8=Q"), "e8Q");
        assert_eq!(normalize_san("bxa1=N+"), "bxa1N");
        assert_eq!(normalize_san("a8=q"), "a8Q");
        assert_eq!(normalize_san("gxh1=r#"), "gxh1R");
    }

    #[test]
    fn test_long_algebraic() {
        assert_eq!(normalize_san("e2-e4"), "e2e4");
        assert_eq!(normalize_san("Ng1-f3"), "Ng1f3");
        assert_eq!(normalize_san("Qd1-d8+"), "Qd1d8");
        assert_eq!(normalize_san("e7-e8=q"), "e7e8Q");
    }

    #[test]
    fn test_en_passant_suffix() {
        assert_eq!(normalize_san("exf6e.p."), "exf6");
        assert_eq!(normalize_san("exf6e.p.+"), "exf6");
        assert_eq!(normalize_san("exf6+"), "exf6");
    }

    #[test]
    fn test_marks_only() {
        assert_eq!(normalize_san("+"), "");
    }
}
