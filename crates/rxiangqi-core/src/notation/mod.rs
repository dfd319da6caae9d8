//! Square and move text
//!
//! Squares are written `<file a-i><row 0-9>` from Red's side, moves as the
//! two squares back to back (`"h2e2"`) with an optional promotion letter.
//! Positions store squares from the mover's side; pass the position's
//! `is_mirrored()` flag to convert.

use crate::types::{Move, Promotion, Square};
use crate::ParseError;

/// Parse a square name given in absolute orientation
pub fn parse_square(text: &str, mirrored: bool) -> Result<Square, ParseError> {
    let sq = Square::from_name(text).ok_or_else(|| {
        log::debug!("rejected square '{text}'");
        ParseError::InvalidSquare(text.to_string())
    })?;
    Ok(if mirrored { sq.mirror() } else { sq })
}

/// Parse move text given in absolute orientation
///
/// Characters after the optional promotion letter are ignored.
pub fn parse_move(text: &str, mirrored: bool) -> Result<Move, ParseError> {
    let invalid = || {
        log::debug!("rejected move '{text}'");
        ParseError::InvalidMove(text.to_string())
    };

    if !text.is_ascii() || text.len() < 4 {
        return Err(invalid());
    }

    let from = Square::from_name(&text[0..2]).ok_or_else(invalid)?;
    let to = Square::from_name(&text[2..4]).ok_or_else(invalid)?;
    let promotion = match text[4..].chars().next() {
        Some(c) => Promotion::from_char(c).ok_or_else(invalid)?,
        None => Promotion::None,
    };

    let mv = Move::with_promotion(from, to, promotion);
    Ok(if mirrored { mv.mirror() } else { mv })
}

/// Move text in absolute orientation
pub fn move_to_string(mv: Move, mirrored: bool) -> String {
    if mirrored {
        mv.mirror().to_string()
    } else {
        mv.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        assert_eq!(parse_square("e0", false), Ok(Square::E0));
        assert_eq!(parse_square("e0", true), Ok(Square::E9));
        assert_eq!(parse_square("i9", true), Ok(Square::A0));
        assert_eq!(parse_square("k1", false), Err(ParseError::InvalidSquare("k1".to_string())));
    }

    #[test]
    fn test_parse_move() {
        let mv = parse_move("h2e2", false).unwrap();
        assert_eq!(mv.from(), Square::new(2, 7));
        assert_eq!(mv.to(), Square::new(2, 4));
        assert_eq!(mv.promotion(), Promotion::None);

        let mv = parse_move("e6e7r", false).unwrap();
        assert_eq!(mv.promotion(), Promotion::Chariot);

        // trailing text is ignored
        assert_eq!(parse_move("e6e7rr", false), Ok(mv));
        assert_eq!(parse_move("e6e7r;draw", false), Ok(mv));
    }

    #[test]
    fn test_parse_move_mirrored() {
        // black cannon h7 to e7, seen from black
        let mv = parse_move("h7e7", true).unwrap();
        assert_eq!(mv.from(), Square::new(2, 1));
        assert_eq!(mv.to(), Square::new(2, 4));
        assert_eq!(move_to_string(mv, true), "h7e7");
        assert_eq!(move_to_string(mv, false), "b2e2");
    }

    #[test]
    fn test_parse_move_errors() {
        for text in ["", "e2", "e2e", "z2e3", "e2e3q", "e2e3k", "é2e3", "e2e3 r"] {
            let err = parse_move(text, false).unwrap_err();
            assert_eq!(err, ParseError::InvalidMove(text.to_string()));
        }
    }
}
