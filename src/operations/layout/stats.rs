use serde::Serialize;

use crate::geometry::BoardPiece;

/// Summary of a packed layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStats {
    pub count: usize,
    pub cut_count: usize,
    /// Sum of `length × width` over all pieces, in m².
    pub total_area: f64,
}

impl LayoutStats {
    #[must_use]
    pub fn from_pieces(pieces: &[BoardPiece]) -> Self {
        pieces.iter().fold(Self::default(), |mut acc, piece| {
            acc.count += 1;
            acc.cut_count += usize::from(piece.is_cut);
            acc.total_area += piece.area();
            acc
        })
    }

    #[must_use]
    pub fn full_count(&self) -> usize {
        self.count - self.cut_count
    }

    /// Fraction of `room_area` covered by boards; `0.0` for an empty room.
    #[must_use]
    pub fn coverage_of(&self, room_area: f64) -> f64 {
        if room_area <= 0.0 {
            return 0.0;
        }
        self.total_area / room_area
    }
}
