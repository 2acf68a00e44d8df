//! Rotation recovery near the side walls.
//!
//! When a clockwise rotation pushes a piece into a side wall, the piece is shifted
//! away from that wall by each offset of [`kick_offsets`] in turn, until one fits.
//! A shift that lands on a block does not stop the search. Rotations that overlap
//! landed blocks before any shift are never shifted.

use log::debug;

use crate::core::{Board, Collision, PieceKind, Tetromino};

/// Returns the column offsets to try, in order, after a rotation hits `wall`.
///
/// Offsets are relative to the rotated position, not cumulative. The I piece can
/// reach two columns past a wall, so it gets a second offset.
#[must_use]
pub const fn kick_offsets(kind: PieceKind, wall: Collision) -> &'static [i16] {
    match (kind, wall) {
        (PieceKind::I, Collision::LeftWall) => &[1, 2],
        (PieceKind::I, Collision::RightWall) => &[-1, -2],
        (_, Collision::LeftWall) => &[1],
        (_, Collision::RightWall) => &[-1],
        (_, Collision::Occupied) => &[],
    }
}

/// Rotates `piece` clockwise, shifting it off a side wall if needed.
///
/// Returns `None` when no valid placement was found. The caller keeps the original
/// piece in that case, which restores the pre-rotation index and position.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, PiecePosition, PieceKind, Tetromino, wall_kick};
///
/// let board = Board::new();
/// let mut piece = Tetromino::with_position(PieceKind::I, PiecePosition::new(5, 0));
/// piece.rotate_clockwise();
///
/// // Flat again, two columns to the right of the wall.
/// let kicked = wall_kick::rotate_with_recovery(&board, piece).unwrap();
/// assert_eq!(kicked.position(), PiecePosition::new(5, 2));
/// ```
#[must_use]
pub fn rotate_with_recovery(board: &Board, piece: Tetromino) -> Option<Tetromino> {
    let mut rotated = piece;
    rotated.rotate_clockwise();

    let Some(wall) = board.collide(&rotated) else {
        return Some(rotated);
    };
    for &offset in kick_offsets(piece.kind(), wall) {
        let mut candidate = rotated;
        candidate.shift(offset);
        match board.collide(&candidate) {
            None => {
                debug!("{:?} kicked {offset:+} off {wall:?}", piece.kind());
                return Some(candidate);
            }
            Some(_) => {}
        }
    }
    None
}
