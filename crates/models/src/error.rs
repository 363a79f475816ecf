use thiserror::Error;

/// Errors raised when per-plant inputs do not line up.
///
/// Checked once, before a landscape run starts. The dynamics themselves never
/// validate shapes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("`{field}` has {found} values but {expected} were expected")]
    Mismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
}

impl DimensionError {
    /// Checks that `field` has `expected` entries.
    pub(crate) fn check(field: &'static str, expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            tracing::warn!(field, expected, found, "dimension mismatch");
            Err(Self::Mismatch {
                field,
                expected,
                found,
            })
        }
    }
}
