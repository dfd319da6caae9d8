//! FEN parsing and output
//!
//! Format: ten '/'-separated ranks from row 9 down to row 0, digits for runs
//! of empty squares, uppercase for Red. Then the side to move (`w`/`r` or
//! `b`) and optionally `- - <no-capture plies> <full moves>`; the two dashes
//! may be omitted.

use serde::{Deserialize, Serialize};

use super::Position;
use crate::types::{Color, PieceType, Side, Square};
use crate::ParseError;

/// Standard initial position
pub const START_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

/// Move counters carried by a FEN string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FenCounters {
    /// Plies since the last capture
    pub no_capture_ply: u32,
    /// Full move number, starting at 1
    pub full_moves: u32,
}

impl Default for FenCounters {
    fn default() -> Self {
        FenCounters {
            no_capture_ply: 0,
            full_moves: 1,
        }
    }
}

impl Position {
    /// Parse a FEN string
    pub fn from_fen(fen: &str) -> Result<Position, ParseError> {
        let mut pos = Position::empty();
        pos.set_from_fen(fen)?;
        Ok(pos)
    }

    /// Replace this position with a FEN string. On error the position is
    /// left untouched.
    pub fn set_from_fen(&mut self, fen: &str) -> Result<FenCounters, ParseError> {
        match parse_fen(fen) {
            Ok((pos, counters)) => {
                *self = pos;
                Ok(counters)
            }
            Err(reason) => {
                log::debug!("rejected FEN '{fen}': {reason}");
                Err(ParseError::InvalidPosition {
                    text: fen.to_string(),
                    reason,
                })
            }
        }
    }

    /// FEN with default counters (`0 1`)
    pub fn to_fen(&self) -> String {
        self.to_fen_with_counters(FenCounters::default())
    }

    /// FEN in absolute orientation (Red uppercase, row 9 first)
    pub fn to_fen_with_counters(&self, counters: FenCounters) -> String {
        let red_view = if self.is_mirrored() { self.mirrored() } else { *self };

        let mut board = String::with_capacity(64);
        for row in (0..Square::ROWS).rev() {
            let mut empty = 0;
            for col in 0..Square::COLS {
                match red_view.piece_at(Square::new(row, col)) {
                    Some((pt, side)) => {
                        if empty > 0 {
                            board.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        board.push(match side {
                            Side::Ours => pt.to_char(),
                            Side::Theirs => pt.to_char().to_ascii_lowercase(),
                        });
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                board.push(char::from(b'0' + empty));
            }
            if row > 0 {
                board.push('/');
            }
        }

        format!(
            "{board} {} - - {} {}",
            self.side_to_move().fen_token(),
            counters.no_capture_ply,
            counters.full_moves
        )
    }
}

/// Parse into a Red-view position, mirrored afterwards when Black is to move
fn parse_fen(fen: &str) -> Result<(Position, FenCounters), String> {
    let mut fields = fen.split_whitespace();
    let board = fields.next().ok_or("empty position string")?;

    let ranks: Vec<&str> = board.split('/').collect();
    if ranks.len() != Square::ROWS as usize {
        return Err(format!("expected 10 ranks, found {}", ranks.len()));
    }

    let mut pos = Position::empty();
    for (i, rank) in ranks.iter().enumerate() {
        let row = Square::ROWS - 1 - i as u8;
        let mut col: u8 = 0;
        for c in rank.chars() {
            if let Some(run) = c.to_digit(10) {
                if run == 0 {
                    return Err(format!("zero-length gap in rank {row}"));
                }
                if col as u32 + run > Square::COLS as u32 {
                    return Err(format!("rank {row} is wider than 9 squares"));
                }
                col += run as u8;
                continue;
            }
            let pt = PieceType::from_char(c).ok_or_else(|| format!("unknown piece '{c}'"))?;
            if col >= Square::COLS {
                return Err(format!("rank {row} is wider than 9 squares"));
            }
            let side = if c.is_ascii_uppercase() { Side::Ours } else { Side::Theirs };
            let sq = Square::new(row, col);
            if pt == PieceType::General {
                let existing = match side {
                    Side::Ours => pos.my_general(),
                    Side::Theirs => pos.their_general(),
                };
                if existing.is_some() {
                    return Err(format!("second general on {sq}"));
                }
            }
            pos.put_piece(sq, pt, side);
            col += 1;
        }
        if col != Square::COLS {
            return Err(format!("rank {row} has {col} squares, expected 9"));
        }
    }

    let token = fields.next().ok_or("missing side to move")?;
    let color = Color::from_fen_token(token).ok_or_else(|| format!("invalid side to move '{token}'"))?;

    let rest: Vec<&str> = fields.skip_while(|f| *f == "-").collect();
    let mut counters = FenCounters::default();
    match rest.as_slice() {
        [] => {}
        [ply] => counters.no_capture_ply = parse_counter(ply)?,
        [ply, full] => {
            counters.no_capture_ply = parse_counter(ply)?;
            counters.full_moves = parse_counter(full)?;
        }
        _ => return Err(format!("unexpected trailing fields '{}'", rest.join(" "))),
    }

    if color == Color::Black {
        pos.mirror();
    }
    Ok((pos, counters))
}

fn parse_counter(text: &str) -> Result<u32, String> {
    text.parse().map_err(|_| format!("invalid move counter '{text}'"))
}
