use thiserror::Error;

/// Top-level error type for the floor plan engine.
#[derive(Debug, Error)]
pub enum FloorlayError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors related to numeric input and geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} is not a finite number")]
    NonFinite { parameter: &'static str },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to the wall arena.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Convenience type alias for results using [`FloorlayError`].
pub type Result<T> = std::result::Result<T, FloorlayError>;

/// Checks that `value` is finite and lies in `[min, max]`.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` or `GeometryError::ParameterOutOfRange`.
pub(crate) fn check_range(
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> std::result::Result<f64, GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { parameter });
    }
    if value < min || value > max {
        return Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Checks that `value` is finite and strictly positive.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` or `GeometryError::ParameterOutOfRange`.
pub(crate) fn check_positive(
    parameter: &'static str,
    value: f64,
) -> std::result::Result<f64, GeometryError> {
    check_range(parameter, value, f64::MIN_POSITIVE, f64::MAX)
}
