use super::{
    PLAYABLE_WIDTH, SENTINEL_MARGIN_LEFT, SENTINEL_MARGIN_TOP,
    board::Block,
    shape::{PieceKind, PieceRotation, PieceShape},
    signed,
};

/// Grid position of a piece's 4×4 bounding box, top-left corner.
///
/// Coordinates include the sentinel border, so the first visible row and column
/// are both at index 2. They are signed so that a box may hang past the left edge
/// of the grid while its filled cells are still inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PiecePosition {
    row: i16,
    col: i16,
}

impl PiecePosition {
    /// Default spawn position: top of the visible area, horizontally centered.
    pub const SPAWN: Self = Self::new(
        signed(SENTINEL_MARGIN_TOP),
        signed(SENTINEL_MARGIN_LEFT + (PLAYABLE_WIDTH - 4) / 2),
    );

    #[must_use]
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> i16 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> i16 {
        self.col
    }
}

/// A falling piece: kind, rotation, and position plus its decoded rotation states.
///
/// All four rotation states are decoded once when the piece is created. The
/// movement and rotation methods are unchecked; use
/// [`Board::collide`](super::Board::collide) to validate the result.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, PieceKind, Tetromino};
///
/// let board = Board::new();
/// let mut piece = Tetromino::new(PieceKind::T);
/// assert!(board.can_place(&piece));
///
/// piece.move_down();
/// piece.rotate_clockwise();
/// assert!(board.can_place(&piece));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    kind: PieceKind,
    rotation: PieceRotation,
    position: PiecePosition,
    shapes: [PieceShape; 4],
}

impl Tetromino {
    /// Creates a piece of `kind` in its spawn rotation at [`PiecePosition::SPAWN`].
    #[must_use]
    pub fn new(kind: PieceKind) -> Self {
        Self::with_position(kind, PiecePosition::SPAWN)
    }

    /// Creates a piece of `kind` in its spawn rotation at `position`.
    #[must_use]
    pub fn with_position(kind: PieceKind, position: PiecePosition) -> Self {
        Self {
            kind,
            rotation: PieceRotation::default(),
            position,
            shapes: [0, 1, 2, 3].map(|index| kind.shape(PieceRotation::new(index))),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    #[must_use]
    pub fn position(&self) -> PiecePosition {
        self.position
    }

    /// Returns the cell matrix of the current rotation.
    #[must_use]
    pub fn shape(&self) -> &PieceShape {
        &self.shapes[self.rotation.index()]
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotation = self.rotation.rotated_right();
    }

    pub fn set_rotation(&mut self, rotation: PieceRotation) {
        self.rotation = rotation;
    }

    pub fn move_left(&mut self) {
        self.shift(-1);
    }

    pub fn move_right(&mut self) {
        self.shift(1);
    }

    pub fn move_down(&mut self) {
        self.position.row += 1;
    }

    pub fn move_up(&mut self) {
        self.position.row -= 1;
    }

    /// Moves the piece horizontally by `cols` columns (negative is left).
    pub fn shift(&mut self, cols: i16) {
        self.position.col += cols;
    }

    /// Returns the grid coordinates and color of each filled cell, row-major.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i16, i16, Block)> + '_ {
        let PiecePosition { row, col } = self.position;
        self.shape()
            .iter()
            .zip(0i16..)
            .flat_map(move |(cells, dy)| {
                cells
                    .iter()
                    .zip(0i16..)
                    .filter(|(block, _)| !block.is_empty())
                    .map(move |(&block, dx)| (row + dy, col + dx, block))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(piece: &Tetromino) -> Vec<(i16, i16)> {
        piece.occupied_cells().map(|(row, col, _)| (row, col)).collect()
    }

    #[test]
    fn test_spawn_position() {
        let piece = Tetromino::new(PieceKind::O);
        assert_eq!(piece.position(), PiecePosition::new(2, 5));
        assert_eq!(piece.rotation(), PieceRotation::default());
        // Centered: visible columns 4 and 5 of 0..10.
        assert_eq!(cells(&piece), [(2, 6), (2, 7), (3, 6), (3, 7)]);
    }

    #[test]
    fn test_moves_are_unchecked() {
        let mut piece = Tetromino::new(PieceKind::I);
        for _ in 0..10 {
            piece.move_left();
        }
        assert_eq!(piece.position().col(), -5);
        piece.move_right();
        piece.move_down();
        piece.move_down();
        piece.move_up();
        assert_eq!(piece.position(), PiecePosition::new(3, -4));
    }

    #[test]
    fn test_four_rotations_restore_piece() {
        for kind in PieceKind::ALL {
            let original = Tetromino::new(kind);
            let mut piece = original;
            for _ in 0..4 {
                piece.rotate_clockwise();
            }
            assert_eq!(piece, original, "{kind:?} did not return to its spawn state");
            assert_eq!(cells(&piece), cells(&original));
        }
    }

    #[test]
    fn test_shapes_match_rotation() {
        let mut piece = Tetromino::new(PieceKind::L);
        for index in 0..4 {
            assert_eq!(
                *piece.shape(),
                PieceKind::L.shape(PieceRotation::new(index))
            );
            piece.rotate_clockwise();
        }
    }

    #[test]
    fn test_occupied_cells_follow_position() {
        let piece = Tetromino::with_position(PieceKind::I, PiecePosition::new(10, 0));
        assert_eq!(cells(&piece), [(11, 0), (11, 1), (11, 2), (11, 3)]);
        assert!(
            piece
                .occupied_cells()
                .all(|(_, _, block)| block == Block::Cyan)
        );
    }
}
