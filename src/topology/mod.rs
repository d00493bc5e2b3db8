pub mod wall;

pub use wall::{snap_orthogonal, WallData, WallId};

use crate::error::{Result, TopologyError};
use crate::math::Point2;
use crate::operations::path::{ClosingSegment, ResolveVertices};
use slotmap::SlotMap;

/// Ordered arena of walls forming a floor plan path.
///
/// Walls are owned by a slot map and referenced by generational IDs, so IDs
/// stay valid across edits of other walls. A separate order vector defines
/// adjacency and traversal order.
#[derive(Debug, Default)]
pub struct FloorPlan {
    walls: SlotMap<WallId, WallData>,
    order: Vec<WallId>,
    orthogonal: bool,
}

impl FloorPlan {
    /// Creates a new, empty floor plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// In orthogonal mode every incoming angle is snapped to a multiple of 90°.
    pub fn set_orthogonal(&mut self, orthogonal: bool) {
        self.orthogonal = orthogonal;
    }

    #[must_use]
    pub fn is_orthogonal(&self) -> bool {
        self.orthogonal
    }

    fn prepare(&self, length: f64, angle: f64) -> Result<WallData> {
        let angle = if self.orthogonal {
            snap_orthogonal(angle)
        } else {
            angle
        };
        Ok(WallData::new(length, angle)?)
    }

    /// Appends a wall to the end of the path and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError` if the length or angle is invalid.
    pub fn add_wall(&mut self, length: f64, angle: f64) -> Result<WallId> {
        let data = self.prepare(length, angle)?;
        let id = self.walls.insert(data);
        self.order.push(id);
        Ok(id)
    }

    /// Inserts a wall directly after `after` and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if `after` is unknown or the values are invalid.
    pub fn insert_wall_after(&mut self, after: WallId, length: f64, angle: f64) -> Result<WallId> {
        let index = self.index_of(after)?;
        let data = self.prepare(length, angle)?;
        let id = self.walls.insert(data);
        self.order.insert(index + 1, id);
        Ok(id)
    }

    /// Returns the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn wall(&self, id: WallId) -> Result<&WallData> {
        Ok(self
            .walls
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("wall".into()))?)
    }

    fn wall_mut(&mut self, id: WallId) -> Result<&mut WallData> {
        Ok(self
            .walls
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("wall".into()))?)
    }

    /// Updates the length of a wall in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is unknown or the length invalid.
    pub fn set_length(&mut self, id: WallId, length: f64) -> Result<()> {
        let angle = self.wall(id)?.angle;
        let updated = WallData::new(length, angle)?;
        *self.wall_mut(id)? = updated;
        Ok(())
    }

    /// Updates the angle of a wall in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is unknown or the angle invalid.
    pub fn set_angle(&mut self, id: WallId, angle: f64) -> Result<()> {
        let length = self.wall(id)?.length;
        let updated = self.prepare(length, angle)?;
        *self.wall_mut(id)? = updated;
        Ok(())
    }

    /// Removes a wall and returns its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is unknown.
    pub fn remove_wall(&mut self, id: WallId) -> Result<WallData> {
        let index = self.index_of(id)?;
        self.order.remove(index);
        Ok(self
            .walls
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("wall".into()))?)
    }

    fn index_of(&self, id: WallId) -> Result<usize> {
        Ok(self
            .order
            .iter()
            .position(|&w| w == id)
            .ok_or_else(|| TopologyError::EntityNotFound("wall".into()))?)
    }

    /// Wall IDs in path order.
    #[must_use]
    pub fn ids(&self) -> &[WallId] {
        &self.order
    }

    /// Wall data in path order.
    #[must_use]
    pub fn walls(&self) -> Vec<WallData> {
        self.order
            .iter()
            .filter_map(|&id| self.walls.get(id).copied())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolves the path into `len() + 1` vertices.
    #[must_use]
    pub fn vertices(&self, auto_close: bool) -> Vec<Point2> {
        ResolveVertices::new(&self.walls())
            .auto_close(auto_close)
            .execute()
    }

    /// Rewrites the last wall so the stored path ends exactly at the origin.
    ///
    /// Returns the ID of the rewritten wall, or `None` when no closing wall
    /// exists (fewer than two walls, or the replacement would be degenerate).
    /// Orthogonal snapping is not applied to the closing angle.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan's internal order references a missing wall.
    pub fn close_path(&mut self) -> Result<Option<WallId>> {
        let Some(closing) = ClosingSegment::new(&self.walls()).execute() else {
            return Ok(None);
        };
        let Some(&last) = self.order.last() else {
            return Ok(None);
        };
        *self.wall_mut(last)? = closing;
        Ok(Some(last))
    }
}
