pub use self::{board::*, shape::*, tetromino::*};

pub(crate) mod board;
pub(crate) mod shape;
pub(crate) mod tetromino;

const SENTINEL_MARGIN_TOP: usize = 2;
const SENTINEL_MARGIN_BOTTOM: usize = 2;
const SENTINEL_MARGIN_LEFT: usize = 2;
const SENTINEL_MARGIN_RIGHT: usize = 2;
const PLAYABLE_WIDTH: usize = 10;
const PLAYABLE_HEIGHT: usize = 20;
const TOTAL_WIDTH: usize = PLAYABLE_WIDTH + SENTINEL_MARGIN_LEFT + SENTINEL_MARGIN_RIGHT;
const TOTAL_HEIGHT: usize = PLAYABLE_HEIGHT + SENTINEL_MARGIN_TOP + SENTINEL_MARGIN_BOTTOM;

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn signed(n: usize) -> i16 {
    n as i16
}
