use std::fmt;

use super::{
    PLAYABLE_HEIGHT, PLAYABLE_WIDTH, SENTINEL_MARGIN_BOTTOM, SENTINEL_MARGIN_LEFT,
    SENTINEL_MARGIN_RIGHT, SENTINEL_MARGIN_TOP, TOTAL_HEIGHT, TOTAL_WIDTH,
    shape::PieceKind,
    signed,
    tetromino::Tetromino,
};

const LEFT_WALL_END: i16 = signed(SENTINEL_MARGIN_LEFT);
const RIGHT_WALL_START: i16 = signed(SENTINEL_MARGIN_LEFT + PLAYABLE_WIDTH);

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(u8)]
pub enum Block {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// Sentinel border.
    Wall,
    /// Filler color not tied to a piece kind.
    Gray,
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl Block {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Block::Empty
    }

    /// Returns the character used for this block in ASCII board art.
    ///
    /// Piece colors use the letter of the kind they belong to.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Block::Empty => '.',
            Block::Wall => '=',
            Block::Gray => '#',
            Block::Cyan => PieceKind::I.as_char(),
            Block::Blue => PieceKind::J.as_char(),
            Block::Orange => PieceKind::L.as_char(),
            Block::Yellow => PieceKind::O.as_char(),
            Block::Green => PieceKind::S.as_char(),
            Block::Purple => PieceKind::T.as_char(),
            Block::Red => PieceKind::Z.as_char(),
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Block::Empty),
            '=' => Some(Block::Wall),
            '#' => Some(Block::Gray),
            _ => match PieceKind::from_char(c) {
                Some(kind) => Some(kind.color()),
                None => None,
            },
        }
    }
}

/// Result of a failed placement test.
///
/// Wall hits are reported separately from overlaps so that rotation can try to
/// recover from the former by shifting away from the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    LeftWall,
    RightWall,
    Occupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlockRow {
    cells: [Block; TOTAL_WIDTH],
}

impl BlockRow {
    const EMPTY: Self = {
        use Block::{Empty as E, Wall as W};
        assert!(SENTINEL_MARGIN_LEFT == 2);
        assert!(SENTINEL_MARGIN_RIGHT == 2);
        BlockRow {
            cells: [W, W, E, E, E, E, E, E, E, E, E, E, W, W],
        }
    };
    const WALL: Self = BlockRow {
        cells: [Block::Wall; TOTAL_WIDTH],
    };

    fn playable_cells(&self) -> &[Block] {
        &self.cells[SENTINEL_MARGIN_LEFT..][..PLAYABLE_WIDTH]
    }

    fn is_filled(&self) -> bool {
        self.playable_cells().iter().all(|b| !b.is_empty())
    }
}

/// The playing field: a 10×20 visible grid surrounded by a 2-cell wall border.
///
/// Every border cell holds [`Block::Wall`], so a piece leaving the visible area
/// collides exactly like it would with a landed block. Only the interior is ever
/// written by [`land`](Self::land) and scanned by
/// [`clear_full_lines`](Self::clear_full_lines).
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, PieceKind, Tetromino};
///
/// let mut board = Board::new();
/// let mut piece = Tetromino::new(PieceKind::O);
/// while board.can_place(&piece) {
///     piece.move_down();
/// }
/// piece.move_up();
///
/// assert_eq!(board.land(&piece), 0);
/// assert_eq!(board.occupied_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [BlockRow; TOTAL_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Board {
    pub const PLAYABLE_WIDTH: usize = PLAYABLE_WIDTH;
    pub const PLAYABLE_HEIGHT: usize = PLAYABLE_HEIGHT;

    pub const INITIAL: Self = {
        assert!(SENTINEL_MARGIN_TOP == 2);
        assert!(SENTINEL_MARGIN_BOTTOM == 2);
        let mut rows = [BlockRow::EMPTY; TOTAL_HEIGHT];
        rows[0] = BlockRow::WALL;
        rows[1] = BlockRow::WALL;
        rows[TOTAL_HEIGHT - 2] = BlockRow::WALL;
        rows[TOTAL_HEIGHT - 1] = BlockRow::WALL;
        Self { rows }
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::INITIAL
    }

    /// Empties the interior and repaints the border.
    pub fn reset(&mut self) {
        *self = Self::INITIAL;
    }

    /// Returns the cell at grid coordinates `(row, col)`.
    ///
    /// Coordinates outside the grid read as [`Block::Wall`].
    #[must_use]
    pub fn cell(&self, row: i16, col: i16) -> Block {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return Block::Wall;
        };
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(col))
            .copied()
            .unwrap_or(Block::Wall)
    }

    /// Tests whether `piece` fits at its current position and rotation.
    ///
    /// Side-wall membership is checked over all filled cells before any overlap
    /// check, so a piece that is both past a side wall and over a landed block
    /// reports the wall even when the overlapping cell comes first in row-major
    /// order. This is not a per-cell first-hit scan. Within the wall pass the
    /// first wall cell in row-major order decides left or right.
    #[must_use]
    pub fn collide(&self, piece: &Tetromino) -> Option<Collision> {
        let wall = piece.occupied_cells().find_map(|(_, col, _)| {
            if col < LEFT_WALL_END {
                Some(Collision::LeftWall)
            } else if col >= RIGHT_WALL_START {
                Some(Collision::RightWall)
            } else {
                None
            }
        });
        if wall.is_some() {
            return wall;
        }
        piece
            .occupied_cells()
            .any(|(row, col, _)| !self.cell(row, col).is_empty())
            .then_some(Collision::Occupied)
    }

    #[must_use]
    pub fn can_place(&self, piece: &Tetromino) -> bool {
        self.collide(piece).is_none()
    }

    /// Writes the visible cells of `piece` into the grid without clearing lines.
    ///
    /// Cells falling on the border are skipped.
    pub fn paint_piece(&mut self, piece: &Tetromino) {
        for (row, col, block) in piece.occupied_cells() {
            if let Some(cell) = self.interior_cell_mut(row, col) {
                *cell = block;
            }
        }
    }

    /// Commits `piece` to the grid and clears any completed rows.
    ///
    /// The piece must be at a valid placement. Returns the number of rows cleared.
    pub fn land(&mut self, piece: &Tetromino) -> usize {
        self.paint_piece(piece);
        self.clear_full_lines()
    }

    /// Removes every full interior row and returns how many were removed.
    ///
    /// Rows are scanned top to bottom. Each full row is dropped as soon as it is
    /// found, the rows above it move down by one, and the top visible row is
    /// emptied. Because every row above the scan point moves together, the result
    /// is the same as removing all full rows at once and compacting.
    pub fn clear_full_lines(&mut self) -> usize {
        let top = SENTINEL_MARGIN_TOP;
        let mut count = 0;
        for y in top..top + PLAYABLE_HEIGHT {
            if self.rows[y].is_filled() {
                count += 1;
                self.rows.copy_within(top..y, top + 1);
                self.rows[top] = BlockRow::EMPTY;
            }
        }
        count
    }

    /// Returns an iterator over the visible rows, top to bottom.
    pub fn playable_rows(&self) -> impl Iterator<Item = &[Block]> {
        self.rows[SENTINEL_MARGIN_TOP..][..PLAYABLE_HEIGHT]
            .iter()
            .map(BlockRow::playable_cells)
    }

    /// Returns the number of non-empty visible cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.playable_rows()
            .flatten()
            .filter(|block| !block.is_empty())
            .count()
    }

    /// Builds a board from ASCII art, aligned to the bottom of the visible area.
    ///
    /// Each non-blank line is one row of exactly 10 cells using the characters of
    /// [`Block::from_char`]. The last line is the bottom row.
    ///
    /// # Example
    ///
    /// ```
    /// use blockfall_engine::{Block, Board};
    ///
    /// let board = Board::from_ascii(
    ///     "
    ///     ..........
    ///     #####.#####
    ///     ",
    /// );
    /// assert_eq!(board.occupied_count(), 9);
    /// assert_eq!(board.cell(21, 6), Block::Empty);
    /// ```
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut board = Self::INITIAL;
        let lines: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert!(
            lines.len() <= PLAYABLE_HEIGHT,
            "At most {PLAYABLE_HEIGHT} rows are allowed, got {}",
            lines.len()
        );

        let first_row = SENTINEL_MARGIN_TOP + PLAYABLE_HEIGHT - lines.len();
        for (y, line) in lines.iter().enumerate() {
            let blocks: Vec<Block> = line
                .chars()
                .map(|c| Block::from_char(c).unwrap_or_else(|| panic!("Unknown cell {c:?}")))
                .collect();
            assert_eq!(
                blocks.len(),
                PLAYABLE_WIDTH,
                "Each row must have exactly {PLAYABLE_WIDTH} cells, got {} at row {y}",
                blocks.len()
            );
            board.rows[first_row + y].cells[SENTINEL_MARGIN_LEFT..][..PLAYABLE_WIDTH]
                .copy_from_slice(&blocks);
        }
        board
    }

    fn interior_cell_mut(&mut self, row: i16, col: i16) -> Option<&mut Block> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        let rows = SENTINEL_MARGIN_TOP..SENTINEL_MARGIN_TOP + PLAYABLE_HEIGHT;
        let cols = SENTINEL_MARGIN_LEFT..SENTINEL_MARGIN_LEFT + PLAYABLE_WIDTH;
        if rows.contains(&row) && cols.contains(&col) {
            Some(&mut self.rows[row].cells[col])
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.playable_rows() {
            for block in row {
                write!(f, "{}", block.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
