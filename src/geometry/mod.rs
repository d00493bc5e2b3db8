pub mod board;
pub mod rect;

pub use board::{BoardConfig, BoardPiece, InstallationDirection, MIN_BOARD_DIMENSION};
pub use rect::Rect;
