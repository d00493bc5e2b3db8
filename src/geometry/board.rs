use serde::{Deserialize, Serialize};

use super::Rect;
use crate::error::{check_positive, check_range, GeometryError};
use crate::math::Point2;

/// Smallest accepted board length or width (1 mm).
pub const MIN_BOARD_DIMENSION: f64 = 1e-3;

/// Axis the boards run parallel to.
///
/// `AlongWidth` lays boards with their length on X and stacks rows along Y.
/// `AlongLength` is the same layout with the axes swapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallationDirection {
    #[default]
    AlongWidth,
    AlongLength,
}

/// Board dimensions and layout rules, all in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    pub board_length: f64,
    pub board_width: f64,
    /// Margin left unfilled along every side of the bounding box.
    pub expansion_gap: f64,
    pub min_cut_length: Option<f64>,
    pub max_cut_length: Option<f64>,
    /// Length of the starter piece laid at the head of every odd row.
    pub row_joint_offset: f64,
    pub installation_direction: InstallationDirection,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_length: 1.2,
            board_width: 0.2,
            expansion_gap: 0.01,
            min_cut_length: None,
            max_cut_length: None,
            row_joint_offset: 0.0,
            installation_direction: InstallationDirection::AlongWidth,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration for boards of the given size with default rules.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError` if either dimension is non-finite or below
    /// [`MIN_BOARD_DIMENSION`].
    pub fn new(board_length: f64, board_width: f64) -> Result<Self, GeometryError> {
        let config = Self {
            board_length,
            board_width,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_expansion_gap(mut self, gap: f64) -> Self {
        self.expansion_gap = gap;
        self
    }

    #[must_use]
    pub fn with_row_joint_offset(mut self, offset: f64) -> Self {
        self.row_joint_offset = offset;
        self
    }

    #[must_use]
    pub fn with_cut_limits(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_cut_length = min;
        self.max_cut_length = max;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: InstallationDirection) -> Self {
        self.installation_direction = direction;
        self
    }

    /// Checks every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` or `GeometryError::ParameterOutOfRange`
    /// for the first offending field, or `GeometryError::Degenerate` when the
    /// minimum cut length exceeds the maximum.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let min = MIN_BOARD_DIMENSION;
        check_range("board_length", self.board_length, min, f64::MAX)?;
        check_range("board_width", self.board_width, min, f64::MAX)?;
        check_range("expansion_gap", self.expansion_gap, 0.0, f64::MAX)?;
        check_range("row_joint_offset", self.row_joint_offset, 0.0, f64::MAX)?;
        if let Some(min) = self.min_cut_length {
            check_positive("min_cut_length", min)?;
        }
        if let Some(max) = self.max_cut_length {
            check_positive("max_cut_length", max)?;
        }
        if let (Some(min), Some(max)) = (self.min_cut_length, self.max_cut_length) {
            if min > max {
                return Err(GeometryError::Degenerate(format!(
                    "min_cut_length {min} exceeds max_cut_length {max}"
                )));
            }
        }
        Ok(())
    }
}

/// A placed board, possibly cut to length.
///
/// `length` runs along the installation axis, `width` across it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPiece {
    pub length: f64,
    pub width: f64,
    /// Minimum corner of the piece in room coordinates.
    pub position: Point2,
    pub is_cut: bool,
    /// Nominal length of the board this piece was cut from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_length: Option<f64>,
    pub direction: InstallationDirection,
}

impl BoardPiece {
    /// Room-space rectangle covered by this piece.
    #[must_use]
    pub fn footprint(&self) -> Rect {
        match self.direction {
            InstallationDirection::AlongWidth => {
                Rect::from_origin_size(self.position, self.length, self.width)
            }
            InstallationDirection::AlongLength => {
                Rect::from_origin_size(self.position, self.width, self.length)
            }
        }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn new_rejects_bad_dimensions() {
        assert!(BoardConfig::new(1.2, 0.2).is_ok());
        assert!(BoardConfig::new(0.0, 0.2).is_err());
        assert!(BoardConfig::new(1.2, f64::NAN).is_err());
    }

    #[test]
    fn new_rejects_sub_millimeter_dimensions() {
        assert!(matches!(
            BoardConfig::new(1e-16, 0.2),
            Err(GeometryError::ParameterOutOfRange { parameter: "board_length", .. })
        ));
        assert!(BoardConfig::new(1.2, 1e-300).is_err());
        assert!(BoardConfig::new(MIN_BOARD_DIMENSION, MIN_BOARD_DIMENSION).is_ok());
    }

    #[test]
    fn validate_cut_limits() {
        let config = BoardConfig::default().with_cut_limits(Some(0.5), Some(0.3));
        assert!(matches!(config.validate(), Err(GeometryError::Degenerate(_))));

        let config = BoardConfig::default().with_cut_limits(Some(0.0), None);
        assert!(config.validate().is_err());

        let config = BoardConfig::default().with_cut_limits(Some(0.3), Some(0.9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_negative_gap() {
        assert!(BoardConfig::default()
            .with_expansion_gap(-0.01)
            .validate()
            .is_err());
        assert!(BoardConfig::default()
            .with_row_joint_offset(-0.4)
            .validate()
            .is_err());
    }

    #[test]
    fn config_from_json() {
        let json = r#"{
            "boardLength": 1.38,
            "boardWidth": 0.193,
            "expansionGap": 0.008,
            "minCutLength": 0.3,
            "rowJointOffset": 0.4,
            "installationDirection": "along-length"
        }"#;
        let config: BoardConfig = serde_json::from_str(json).unwrap();
        assert_abs_diff_eq!(config.board_length, 1.38);
        assert_eq!(config.min_cut_length, Some(0.3));
        assert_eq!(config.max_cut_length, None);
        assert_eq!(
            config.installation_direction,
            InstallationDirection::AlongLength
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: BoardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn footprint_follows_direction() {
        let mut piece = BoardPiece {
            length: 1.2,
            width: 0.2,
            position: Point2::new(0.5, 1.0),
            is_cut: false,
            original_length: None,
            direction: InstallationDirection::AlongWidth,
        };
        let r = piece.footprint();
        assert_abs_diff_eq!(r.width(), 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(r.height(), 0.2, epsilon = 1e-12);

        piece.direction = InstallationDirection::AlongLength;
        let r = piece.footprint();
        assert_abs_diff_eq!(r.width(), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(r.height(), 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(piece.area(), 0.24, epsilon = 1e-12);
    }

    #[test]
    fn uncut_piece_omits_original_length() {
        let piece = BoardPiece {
            length: 1.2,
            width: 0.2,
            position: Point2::origin(),
            is_cut: false,
            original_length: None,
            direction: InstallationDirection::AlongWidth,
        };
        let json = serde_json::to_string(&piece).unwrap();
        assert!(!json.contains("originalLength"));
        assert!(json.contains("\"isCut\":false"));
        assert!(json.contains("\"direction\":\"along-width\""));
    }
}
