use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::board::Block;

/// A decoded 4×4 rotation state, indexed `[row][col]`.
pub type PieceShape = [[Block; 4]; 4];

/// The seven tetromino kinds.
///
/// Each kind has one fixed color and four rotation states stored as 16-bit masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I = 0,
    J = 1,
    L = 2,
    O = 3,
    S = 4,
    T = 5,
    Z = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// All kinds in declaration order.
    pub const ALL: [Self; Self::LEN] = [
        Self::I,
        Self::J,
        Self::L,
        Self::O,
        Self::S,
        Self::T,
        Self::Z,
    ];

    /// Returns the four rotation masks of this kind, clockwise from the spawn state.
    #[must_use]
    pub const fn masks(self) -> [u16; 4] {
        SHAPE_MASKS[self as usize]
    }

    /// Returns the block color cells of this kind are painted with.
    #[must_use]
    pub const fn color(self) -> Block {
        match self {
            Self::I => Block::Cyan,
            Self::J => Block::Blue,
            Self::L => Block::Orange,
            Self::O => Block::Yellow,
            Self::S => Block::Green,
            Self::T => Block::Purple,
            Self::Z => Block::Red,
        }
    }

    /// Decodes the shape of this kind in the given rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::{Block, PieceKind, PieceRotation};
    ///
    /// let shape = PieceKind::I.shape(PieceRotation::default());
    /// assert_eq!(shape[1], [Block::Cyan; 4]);
    /// assert_eq!(shape[0], [Block::Empty; 4]);
    /// ```
    #[must_use]
    pub const fn shape(self, rotation: PieceRotation) -> PieceShape {
        decode_mask(self.masks()[rotation.index()], self.color())
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::J => 'J',
            Self::L => 'L',
            Self::O => 'O',
            Self::S => 'S',
            Self::T => 'T',
            Self::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::I),
            'J' => Some(Self::J),
            'L' => Some(Self::L),
            'O' => Some(Self::O),
            'S' => Some(Self::S),
            'T' => Some(Self::T),
            'Z' => Some(Self::Z),
            _ => None,
        }
    }
}

/// Rotation index in `0..4`, advancing clockwise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRotation(u8);

impl PieceRotation {
    /// Creates a rotation from an index, wrapping modulo 4.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn new(index: usize) -> Self {
        Self((index % 4) as u8)
    }

    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Decodes a 16-bit rotation mask into a 4×4 cell matrix.
///
/// Bit `i`, counted from the most significant bit, maps to row `i / 4` and
/// column `i % 4`. Set bits become `color`, clear bits become [`Block::Empty`].
#[must_use]
pub const fn decode_mask(mask: u16, color: Block) -> PieceShape {
    let mut shape = [[Block::Empty; 4]; 4];
    let mut i = 0;
    while i < 16 {
        if mask & (0x8000 >> i) != 0 {
            shape[i / 4][i % 4] = color;
        }
        i += 1;
    }
    shape
}

const SHAPE_MASKS: [[u16; 4]; PieceKind::LEN] = [
    [0x0F00, 0x2222, 0x00F0, 0x4444], // I
    [0x44C0, 0x8E00, 0x6440, 0x0E20], // J
    [0x4460, 0x0E80, 0xC440, 0x2E00], // L
    [0x6600, 0x6600, 0x6600, 0x6600], // O
    [0x06C0, 0x8C40, 0x6C00, 0x4620], // S
    [0x0E40, 0x4C40, 0x4E00, 0x4640], // T
    [0x0C60, 0x4C80, 0xC600, 0x2640], // Z
];

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_rows(kind: PieceKind, rotation: usize) -> [String; 4] {
        kind.shape(PieceRotation::new(rotation))
            .map(|row| row.iter().map(|block| block.as_char()).collect())
    }

    #[test]
    fn test_every_rotation_has_four_cells() {
        for kind in PieceKind::ALL {
            for rotation in 0..4 {
                let count = kind
                    .shape(PieceRotation::new(rotation))
                    .iter()
                    .flatten()
                    .filter(|block| !block.is_empty())
                    .count();
                assert_eq!(count, 4, "{kind:?} rotation {rotation} has {count} cells");
            }
        }
    }

    #[test]
    fn test_cells_use_kind_color() {
        for kind in PieceKind::ALL {
            for rotation in 0..4 {
                for block in kind.shape(PieceRotation::new(rotation)).iter().flatten() {
                    assert!(
                        block.is_empty() || *block == kind.color(),
                        "{kind:?} rotation {rotation} got {block:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_decode_is_deterministic() {
        for kind in PieceKind::ALL {
            for mask in kind.masks() {
                assert_eq!(
                    decode_mask(mask, kind.color()),
                    decode_mask(mask, kind.color())
                );
            }
        }
    }

    #[test]
    fn test_i_rotations() {
        assert_eq!(shape_rows(PieceKind::I, 0), ["....", "IIII", "....", "...."]);
        assert_eq!(shape_rows(PieceKind::I, 1), ["..I.", "..I.", "..I.", "..I."]);
        assert_eq!(shape_rows(PieceKind::I, 2), ["....", "....", "IIII", "...."]);
        assert_eq!(shape_rows(PieceKind::I, 3), [".I..", ".I..", ".I..", ".I.."]);
    }

    #[test]
    fn test_t_rotations_go_clockwise() {
        assert_eq!(shape_rows(PieceKind::T, 0), ["....", "TTT.", ".T..", "...."]);
        assert_eq!(shape_rows(PieceKind::T, 1), [".T..", "TT..", ".T..", "...."]);
        assert_eq!(shape_rows(PieceKind::T, 2), [".T..", "TTT.", "....", "...."]);
        assert_eq!(shape_rows(PieceKind::T, 3), [".T..", ".TT.", ".T..", "...."]);
    }

    #[test]
    fn test_spawn_shapes() {
        assert_eq!(shape_rows(PieceKind::J, 0), [".J..", ".J..", "JJ..", "...."]);
        assert_eq!(shape_rows(PieceKind::L, 0), [".L..", ".L..", ".LL.", "...."]);
        assert_eq!(shape_rows(PieceKind::O, 0), [".OO.", ".OO.", "....", "...."]);
        assert_eq!(shape_rows(PieceKind::S, 0), ["....", ".SS.", "SS..", "...."]);
        assert_eq!(shape_rows(PieceKind::Z, 0), ["....", "ZZ..", ".ZZ.", "...."]);
    }

    #[test]
    fn test_o_is_rotation_invariant() {
        let spawn = PieceKind::O.shape(PieceRotation::default());
        for rotation in 1..4 {
            assert_eq!(PieceKind::O.shape(PieceRotation::new(rotation)), spawn);
        }
    }

    #[test]
    fn test_rotation_wraps() {
        let mut rotation = PieceRotation::default();
        for _ in 0..4 {
            rotation = rotation.rotated_right();
        }
        assert_eq!(rotation, PieceRotation::default());
        assert_eq!(PieceRotation::new(6).index(), 2);
    }

    #[test]
    fn test_char_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('X'), None);
    }
}
