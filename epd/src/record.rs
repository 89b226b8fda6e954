use crate::BEST_MOVE_OPCODE;

/// Shape of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpdLine<'a> {
    Blank,
    /// No best-move opcode; echoed back as-is (already trimmed).
    Passthrough(&'a str),
    Record(EpdRecord<'a>),
}

/// Borrowed view of a line carrying a `bm` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpdRecord<'a> {
    /// Trimmed line the record was split from.
    pub line: &'a str,
    pub fen: &'a str,
    pub moves: Vec<&'a str>,
    /// Whatever follows the first `;` after the move list (id, comments).
    pub annotation: Option<&'a str>,
}

impl<'a> EpdLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return EpdLine::Blank;
        }

        let Some((position, best_moves)) = line.split_once(BEST_MOVE_OPCODE) else {
            return EpdLine::Passthrough(line);
        };

        let (move_text, annotation) = match best_moves.split_once(';') {
            Some((moves, rest)) => (moves, Some(rest.trim()).filter(|a| !a.is_empty())),
            None => (best_moves, None),
        };

        EpdLine::Record(EpdRecord {
            line,
            fen: position.trim(),
            moves: move_text.split_whitespace().collect(),
            annotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BK_01: &str =
        r#"1k1r4/pp1b1R2/3q2pp/4p3/2B5/4Q3/PPP2B2/2K5 b - - bm Qd1+; id "BK.01";"#;

    fn parse_record(line: &str) -> EpdRecord<'_> {
        match EpdLine::parse(line) {
            EpdLine::Record(record) => record,
            other => panic!("expected a record, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(EpdLine::parse(""), EpdLine::Blank);
        assert_eq!(EpdLine::parse("   \t  "), EpdLine::Blank);
        assert_eq!(EpdLine::parse("\r\n"), EpdLine::Blank);
    }

    #[test]
    fn test_passthrough_is_trimmed() {
        assert_eq!(
            EpdLine::parse("  some comment line \n"),
            EpdLine::Passthrough("some comment line")
        );
    }

    #[test]
    fn test_converted_line_is_passthrough() {
        let converted = "1k1r4/pp1b1R2/3q2pp/4p3/2B5/4Q3/PPP2B2/2K5 b - -#d6d1";
        assert_eq!(
            EpdLine::parse(&format!(" {} ", converted)),
            EpdLine::Passthrough(converted)
        );
    }

    #[test]
    fn test_record_fields() {
        let record = parse_record(BK_01);

        assert_eq!(record.fen, "1k1r4/pp1b1R2/3q2pp/4p3/2B5/4Q3/PPP2B2/2K5 b - -");
        assert_eq!(record.moves, vec!["Qd1+"]);
        assert_eq!(record.annotation, Some(r#"id "BK.01";"#));
        assert_eq!(record.line, BK_01);
    }

    #[test]
    fn test_multiple_moves_keep_order() {
        let record = parse_record("8/8/8/8/8/8/8/K6k w - - bm Kb1 Ka2  Kb2;");
        assert_eq!(record.moves, vec!["Kb1", "Ka2", "Kb2"]);
        assert_eq!(record.annotation, None);
    }

    #[test]
    fn test_missing_semicolon() {
        let record = parse_record("8/8/8/8/8/8/8/K6k w - - bm Kb1 Kb2");
        assert_eq!(record.moves, vec!["Kb1", "Kb2"]);
        assert_eq!(record.annotation, None);
    }

    #[test]
    fn test_empty_move_list() {
        let record = parse_record("8/8/8/8/8/8/8/K6k w - - bm ; id \"empty\";");
        assert!(record.moves.is_empty());
        assert_eq!(record.annotation, Some("id \"empty\";"));

        let record = parse_record("8/8/8/8/8/8/8/K6k w - - bm");
        assert!(record.moves.is_empty());
    }

    #[test]
    fn test_splits_on_first_opcode() {
        let record = parse_record("8/8/8/8/8/8/8/K6k w - - bm Kb1; c0 \"bm twice\";");
        assert_eq!(record.moves, vec!["Kb1"]);
        assert_eq!(record.annotation, Some("c0 \"bm twice\";"));
    }
}
