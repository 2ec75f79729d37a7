//! Utility functions for tessellation entities.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during UUID validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UuidValidationError {
    /// The UUID is nil (all zeros).
    #[error("UUID is nil")]
    NilUuid,
    /// The UUID is not version 4.
    #[error("UUID is not version 4: found version {version}")]
    InvalidVersion {
        /// The version number found.
        version: usize,
    },
}

/// Generates a fresh version-4 UUID.
///
/// # Examples
///
/// ```
/// use voronoi::core::util::make_uuid;
///
/// let uuid = make_uuid();
/// assert_eq!(uuid.get_version_num(), 4);
/// ```
#[must_use]
pub fn make_uuid() -> Uuid {
    Uuid::new_v4()
}

/// Validates that a UUID is a non-nil version-4 identifier.
///
/// # Errors
///
/// Returns [`UuidValidationError::NilUuid`] for the nil UUID and
/// [`UuidValidationError::InvalidVersion`] for any version other than 4.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use voronoi::core::util::{make_uuid, validate_uuid};
///
/// assert!(validate_uuid(&make_uuid()).is_ok());
/// assert!(validate_uuid(&Uuid::nil()).is_err());
/// ```
pub fn validate_uuid(uuid: &Uuid) -> Result<(), UuidValidationError> {
    if uuid.is_nil() {
        return Err(UuidValidationError::NilUuid);
    }
    let version = uuid.get_version_num();
    if version != 4 {
        return Err(UuidValidationError::InvalidVersion { version });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_uuid_is_unique_v4() {
        let a = make_uuid();
        let b = make_uuid();
        assert_ne!(a, b);
        assert_eq!(a.get_version_num(), 4);
    }

    #[test]
    fn validate_uuid_rejects_nil_and_wrong_version() {
        assert!(validate_uuid(&make_uuid()).is_ok());
        assert_eq!(
            validate_uuid(&Uuid::nil()),
            Err(UuidValidationError::NilUuid)
        );

        let v1 = Uuid::parse_str("550e8400-e29b-11d4-a716-446655440000").unwrap();
        assert_eq!(
            validate_uuid(&v1),
            Err(UuidValidationError::InvalidVersion { version: 1 })
        );
    }
}
