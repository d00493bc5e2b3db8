use tracing::{debug, trace};

use crate::geometry::{BoardConfig, BoardPiece, InstallationDirection, Rect};
use crate::math::polygon_2d::rectangle_in_polygon;
use crate::math::Point2;

/// Default step used to shrink infeasible candidates and to skip ahead
/// after abandoning one.
pub const DEFAULT_SEARCH_STEP: f64 = 0.1;

/// Smallest accepted search step. Smaller requests are raised to this.
pub const MIN_SEARCH_STEP: f64 = 1e-3;

/// Upper bound on shrink attempts for a single candidate.
pub const MAX_SHRINK_STEPS: usize = 10_000;

/// Spans at or below this are treated as empty.
const SPAN_EPSILON: f64 = 1e-9;

/// Maps layout coordinates to room coordinates.
///
/// `u` runs along the boards, `v` across them (the row axis).
#[derive(Debug, Clone, Copy)]
struct Frame {
    direction: InstallationDirection,
}

impl Frame {
    fn to_room(self, u: f64, v: f64) -> Point2 {
        match self.direction {
            InstallationDirection::AlongWidth => Point2::new(u, v),
            InstallationDirection::AlongLength => Point2::new(v, u),
        }
    }

    /// Room-space `(width, height)` of a `length × width` board.
    fn size(self, length: f64, width: f64) -> (f64, f64) {
        match self.direction {
            InstallationDirection::AlongWidth => (length, width),
            InstallationDirection::AlongLength => (width, length),
        }
    }

    /// `(start, end)` spans of `rect` along `u` and `v`.
    fn spans(self, rect: &Rect) -> ((f64, f64), (f64, f64)) {
        let x = (rect.min.x, rect.max.x);
        let y = (rect.min.y, rect.max.y);
        match self.direction {
            InstallationDirection::AlongWidth => (x, y),
            InstallationDirection::AlongLength => (y, x),
        }
    }
}

/// A row of the layout: its `v` offset, its width and its `u` span.
#[derive(Debug, Clone, Copy)]
struct Row {
    index: u32,
    v: f64,
    width: f64,
    u_end: f64,
    /// Bounding box shrunk by the expansion gap, in room coordinates.
    floor: Rect,
}

/// Fills a bounding rectangle with boards, row by row.
///
/// Every emitted piece lies inside the bounding rectangle shrunk by the
/// expansion gap and passes the corner-sampling containment test against
/// `polygon`. Infeasible regions yield fewer pieces; the operation never fails.
#[derive(Debug)]
pub struct PackBoards<'a> {
    polygon: &'a [Point2],
    bounds: Rect,
    config: &'a BoardConfig,
    step: f64,
}

impl<'a> PackBoards<'a> {
    /// Creates a new packing operation.
    #[must_use]
    pub fn new(polygon: &'a [Point2], bounds: Rect, config: &'a BoardConfig) -> Self {
        Self {
            polygon,
            bounds,
            config,
            step: DEFAULT_SEARCH_STEP,
        }
    }

    /// Overrides the search step. Values below [`MIN_SEARCH_STEP`] are raised
    /// to it; non-finite values fall back to [`DEFAULT_SEARCH_STEP`].
    #[must_use]
    pub fn with_search_step(mut self, step: f64) -> Self {
        self.step = if step.is_finite() {
            step.max(MIN_SEARCH_STEP)
        } else {
            DEFAULT_SEARCH_STEP
        };
        self
    }

    /// Executes the packing, returning pieces in row-major order.
    #[must_use]
    pub fn execute(&self) -> Vec<BoardPiece> {
        if self.polygon.len() < 3 {
            debug!(vertices = self.polygon.len(), "polygon too small for layout");
            return Vec::new();
        }
        if let Err(err) = self.config.validate() {
            debug!(%err, "board configuration rejected");
            return Vec::new();
        }

        let frame = Frame {
            direction: self.config.installation_direction,
        };
        let floor = self.bounds.shrink(self.config.expansion_gap);
        let ((u_start, u_end), (v_start, v_end)) = frame.spans(&floor);

        let mut pieces = Vec::new();
        let mut index = 0u32;
        loop {
            let v = v_start + f64::from(index) * self.config.board_width;
            if v_end - v <= SPAN_EPSILON {
                break;
            }
            let row = Row {
                index,
                v,
                width: self.config.board_width.min(v_end - v),
                u_end,
                floor,
            };
            self.fill_row(frame, row, u_start, &mut pieces);
            let Some(next) = index.checked_add(1) else {
                debug!(rows = index, "row limit reached");
                break;
            };
            index = next;
        }

        debug!(rows = index, pieces = pieces.len(), "board layout packed");
        pieces
    }

    fn fill_row(&self, frame: Frame, row: Row, u_start: f64, out: &mut Vec<BoardPiece>) {
        let mut cursor = u_start;

        if row.index % 2 == 1 {
            if let Some(piece) = self.starter(frame, row, cursor) {
                if !Self::accept(row, piece, &mut cursor, out) {
                    return;
                }
            }
        }

        while row.u_end - cursor > SPAN_EPSILON {
            let advanced = match self.candidate(frame, row, cursor) {
                Some(piece) => Self::accept(row, piece, &mut cursor, out),
                None => {
                    let next = cursor + self.step;
                    let moved = next > cursor;
                    cursor = next;
                    moved
                }
            };
            if !advanced {
                debug!(row = row.index, cursor, "cursor stalled, row abandoned");
                return;
            }
        }
    }

    /// Emits `piece` if it lies within the floor and moves the cursor past it.
    ///
    /// Returns `false` when the cursor could not move forward.
    fn accept(row: Row, piece: BoardPiece, cursor: &mut f64, out: &mut Vec<BoardPiece>) -> bool {
        let next = *cursor + piece.length;
        if next <= *cursor {
            return false;
        }
        if row.floor.contains_rect(&piece.footprint(), SPAN_EPSILON) {
            out.push(piece);
        } else {
            trace!(row = row.index, cursor = *cursor, "piece outside floor");
        }
        *cursor = next;
        true
    }

    /// Piece of length `row_joint_offset` laid at the head of a staggered row.
    fn starter(&self, frame: Frame, row: Row, cursor: f64) -> Option<BoardPiece> {
        let offset = self.config.row_joint_offset;
        if offset <= SPAN_EPSILON || row.u_end - cursor <= SPAN_EPSILON {
            return None;
        }
        let mut length = offset.min(row.u_end - cursor);
        if self.config.min_cut_length.is_some_and(|min| length < min) {
            trace!(row = row.index, length, "starter below minimum cut");
            return None;
        }
        if let Some(max) = self.config.max_cut_length {
            length = length.min(max);
        }
        if !self.fits(frame, row, cursor, length) {
            trace!(row = row.index, length, "starter outside room");
            return None;
        }
        Some(self.piece(frame, row, cursor, length, true))
    }

    /// Next piece at `cursor`, or `None` if the position must be skipped.
    fn candidate(&self, frame: Frame, row: Row, cursor: f64) -> Option<BoardPiece> {
        let nominal = self.config.board_length;
        let remaining = row.u_end - cursor;
        let (mut length, mut cut) = if nominal > remaining {
            (remaining, remaining < nominal - SPAN_EPSILON)
        } else {
            (nominal, false)
        };

        let mut shrinks = 0;
        while !self.fits(frame, row, cursor, length) {
            length -= self.step;
            cut = true;
            shrinks += 1;
            if length <= self.step || shrinks >= MAX_SHRINK_STEPS {
                trace!(row = row.index, cursor, "no feasible length");
                return None;
            }
        }

        if let Some(max) = self.config.max_cut_length {
            if length > max {
                length = max;
                cut = true;
                if !self.fits(frame, row, cursor, length) {
                    return None;
                }
            }
        }
        if cut && self.config.min_cut_length.is_some_and(|min| length < min) {
            trace!(row = row.index, cursor, length, "cut below minimum");
            return None;
        }

        Some(self.piece(frame, row, cursor, length, cut))
    }

    fn fits(&self, frame: Frame, row: Row, u: f64, length: f64) -> bool {
        let (w, h) = frame.size(length, row.width);
        rectangle_in_polygon(&frame.to_room(u, row.v), w, h, self.polygon)
    }

    fn piece(&self, frame: Frame, row: Row, u: f64, length: f64, is_cut: bool) -> BoardPiece {
        BoardPiece {
            length,
            width: row.width,
            position: frame.to_room(u, row.v),
            is_cut,
            original_length: is_cut.then_some(self.config.board_length),
            direction: frame.direction,
        }
    }
}
