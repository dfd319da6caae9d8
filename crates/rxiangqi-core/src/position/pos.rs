//! Position core: storage, piece placement, mirroring, move application

use std::fmt;

use crate::bitboard::Bitboard;
use crate::error::PositionError;
use crate::types::{Color, Move, PieceType, Side, Square};

/// Kind set slot of a non-general kind
#[inline]
const fn slot(pt: PieceType) -> usize {
    pt.index() - 1
}

/// Xiangqi position, seen from the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Squares of the side to move (general included)
    mine: Bitboard,
    /// Squares of the opponent (general included)
    theirs: Bitboard,
    /// One set per non-general kind, both sides together
    pieces: [Bitboard; 6],
    my_general: Option<Square>,
    their_general: Option<Square>,
    /// Black is to move and the board is shown from Black's side
    mirrored: bool,
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl Position {
    /// Empty board, Red to move
    pub const fn empty() -> Self {
        Position {
            mine: Bitboard::EMPTY,
            theirs: Bitboard::EMPTY,
            pieces: [Bitboard::EMPTY; 6],
            my_general: None,
            their_general: None,
            mirrored: false,
        }
    }

    /// Standard initial position, Red to move
    pub fn startpos() -> Self {
        const BACK_RANK: [PieceType; 9] = [
            PieceType::Chariot,
            PieceType::Horse,
            PieceType::Elephant,
            PieceType::Advisor,
            PieceType::General,
            PieceType::Advisor,
            PieceType::Elephant,
            PieceType::Horse,
            PieceType::Chariot,
        ];

        let mut layout = Vec::with_capacity(16);
        for (col, pt) in BACK_RANK.iter().enumerate() {
            layout.push((Square::new(0, col as u8), *pt));
        }
        layout.push((Square::new(2, 1), PieceType::Cannon));
        layout.push((Square::new(2, 7), PieceType::Cannon));
        for col in (0..Square::COLS).step_by(2) {
            layout.push((Square::new(3, col), PieceType::Soldier));
        }

        let mut pos = Position::empty();
        for (sq, pt) in layout {
            pos.put_piece(sq, pt, Side::Ours);
            pos.put_piece(sq.mirror(), pt, Side::Theirs);
        }
        pos
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn mine(&self) -> Bitboard {
        self.mine
    }

    #[inline]
    pub fn theirs(&self) -> Bitboard {
        self.theirs
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.mine | self.theirs
    }

    #[inline]
    pub fn my_general(&self) -> Option<Square> {
        self.my_general
    }

    #[inline]
    pub fn their_general(&self) -> Option<Square> {
        self.their_general
    }

    /// Whether the position is expressed from Black's point of view
    #[inline]
    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.mirrored {
            Color::Black
        } else {
            Color::Red
        }
    }

    /// Absolute color of a relative side
    #[inline]
    pub fn color_of(&self, side: Side) -> Color {
        match side {
            Side::Ours => self.side_to_move(),
            Side::Theirs => self.side_to_move().opponent(),
        }
    }

    #[inline]
    fn side_bb(&self, side: Side) -> Bitboard {
        match side {
            Side::Ours => self.mine,
            Side::Theirs => self.theirs,
        }
    }

    /// Squares of a kind, both sides
    #[inline]
    pub fn pieces(&self, pt: PieceType) -> Bitboard {
        match pt {
            PieceType::General => self
                .my_general
                .into_iter()
                .chain(self.their_general)
                .collect(),
            _ => self.pieces[slot(pt)],
        }
    }

    /// Squares of a kind for one side
    #[inline]
    pub fn pieces_of(&self, side: Side, pt: PieceType) -> Bitboard {
        self.pieces(pt) & self.side_bb(side)
    }

    /// Kind standing on a square, either side
    pub fn kind_at(&self, sq: Square) -> Option<PieceType> {
        if self.my_general == Some(sq) || self.their_general == Some(sq) {
            return Some(PieceType::General);
        }
        PieceType::NON_GENERAL
            .into_iter()
            .find(|&pt| self.pieces[slot(pt)].test(sq))
    }

    /// Piece on a square with its owner relative to the mover
    pub fn piece_at(&self, sq: Square) -> Option<(PieceType, Side)> {
        let side = if self.mine.test(sq) {
            Side::Ours
        } else if self.theirs.test(sq) {
            Side::Theirs
        } else {
            return None;
        };
        self.kind_at(sq).map(|pt| (pt, side))
    }

    /// The 14 network input planes: my general, advisors, elephants, horses,
    /// chariots, cannons, soldiers, then the same seven for the opponent
    pub fn planes(&self) -> [Bitboard; 14] {
        let mut planes = [Bitboard::EMPTY; 14];
        for (offset, side) in [(0, Side::Ours), (7, Side::Theirs)] {
            for pt in PieceType::ALL {
                planes[offset + pt.index()] = self.pieces_of(side, pt);
            }
        }
        planes
    }

    // ------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------

    /// Place a piece, replacing whatever stood on the square. A second
    /// general for the same side replaces the first.
    pub fn put_piece(&mut self, sq: Square, pt: PieceType, side: Side) {
        self.remove_piece(sq);

        if pt == PieceType::General {
            let general = match side {
                Side::Ours => &mut self.my_general,
                Side::Theirs => &mut self.their_general,
            };
            if let Some(old) = general.replace(sq) {
                match side {
                    Side::Ours => self.mine.clear(old),
                    Side::Theirs => self.theirs.clear(old),
                }
            }
        } else {
            self.pieces[slot(pt)].set(sq);
        }

        match side {
            Side::Ours => self.mine.set(sq),
            Side::Theirs => self.theirs.set(sq),
        }
    }

    /// Remove whatever stands on a square
    pub fn remove_piece(&mut self, sq: Square) {
        self.mine.clear(sq);
        self.theirs.clear(sq);
        for bb in &mut self.pieces {
            bb.clear(sq);
        }
        if self.my_general == Some(sq) {
            self.my_general = None;
        }
        if self.their_general == Some(sq) {
            self.their_general = None;
        }
    }

    // ------------------------------------------------------------------
    // Perspective
    // ------------------------------------------------------------------

    /// Hand the point of view to the other side: swap sides, reflect every
    /// square through the board centre, toggle `mirrored`
    pub fn mirror(&mut self) {
        let mine = self.mine.mirror();
        self.mine = self.theirs.mirror();
        self.theirs = mine;
        for bb in &mut self.pieces {
            *bb = bb.mirror();
        }
        let my_general = self.my_general.map(Square::mirror);
        self.my_general = self.their_general.map(Square::mirror);
        self.their_general = my_general;
        self.mirrored = !self.mirrored;
    }

    /// Mirrored copy
    #[inline]
    pub fn mirrored(&self) -> Position {
        let mut pos = *self;
        pos.mirror();
        pos
    }

    // ------------------------------------------------------------------
    // Move application
    // ------------------------------------------------------------------

    /// Apply a move for the side to move without changing perspective.
    /// Returns whether an opposing piece was captured.
    ///
    /// The move is trusted: no legality check is made.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        let from = mv.from();
        let to = mv.to();

        let captured = self.theirs.test(to);
        if captured {
            self.theirs.clear(to);
            for bb in &mut self.pieces {
                bb.clear(to);
            }
            if self.their_general == Some(to) {
                self.their_general = None;
            }
        }

        self.mine.clear(from);
        self.mine.set(to);
        if self.my_general == Some(from) {
            self.my_general = Some(to);
        } else {
            for bb in &mut self.pieces {
                let moved = bb.test(from);
                bb.set_if(to, moved);
                bb.clear(from);
            }
        }

        if let Some(pt) = mv.promotion().piece_type() {
            if self.my_general == Some(to) {
                self.my_general = None;
            }
            for bb in &mut self.pieces {
                bb.clear(to);
            }
            self.pieces[slot(pt)].set(to);
        }

        #[cfg(feature = "diagnostics")]
        if let Err(reason) = self.validate() {
            log::warn!("[diagnostics] inconsistent position after {mv}: {reason}");
        }

        captured
    }

    /// Check the storage invariants
    ///
    /// Occupancy sets are disjoint, each kind set lies inside the occupancy,
    /// kind sets are pairwise disjoint, generals sit on their own side's
    /// squares and in no kind set, and every occupied square has a kind.
    pub fn validate(&self) -> Result<(), PositionError> {
        if self.mine.intersects(self.theirs) {
            return Err(PositionError::SidesOverlap);
        }

        let occupied = self.occupied();
        let mut kinds = Bitboard::EMPTY;
        for pt in PieceType::NON_GENERAL {
            let bb = self.pieces[slot(pt)];
            if !(bb - occupied).is_empty() {
                return Err(PositionError::KindOutsideOccupancy(pt));
            }
            if bb.intersects(kinds) {
                return Err(PositionError::KindOverlap(pt));
            }
            kinds |= bb;
        }

        for (general, side) in [(self.my_general, Side::Ours), (self.their_general, Side::Theirs)] {
            if let Some(sq) = general {
                if !self.side_bb(side).test(sq) {
                    return Err(PositionError::GeneralNotOccupied { side, square: sq });
                }
                if kinds.test(sq) {
                    return Err(PositionError::GeneralInKindSet { side, square: sq });
                }
                kinds.set(sq);
            }
        }

        if kinds != occupied {
            return Err(PositionError::UntypedSquare);
        }
        Ok(())
    }

    /// Board dump for logs (not a stable format)
    pub fn debug_string(&self) -> String {
        self.to_string()
    }
}

/// Board from Red's side, row 9 on top, followed by side to move and hash
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Square::ROWS).rev() {
            write!(f, "{row} ")?;
            for col in 0..Square::COLS {
                let abs = Square::new(row, col);
                let sq = if self.mirrored { abs.mirror() } else { abs };
                let c = match self.piece_at(sq) {
                    Some((pt, side)) => match self.color_of(side) {
                        Color::Red => pt.to_char(),
                        Color::Black => pt.to_char().to_ascii_lowercase(),
                    },
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  abcdefghi")?;
        writeln!(f, "to move: {:?}{}", self.side_to_move(), if self.mirrored { " (mirrored)" } else { "" })?;
        write!(f, "hash: {:016x}", self.hash())
    }
}
