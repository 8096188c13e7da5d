//! Pre-mutation checks.
//!
//! Everything here is pure: no check may touch the store, and a failing check
//! stops the job before any store call is issued.

use thiserror::Error;

use crate::{EntityKind, ObjectIdentity, ObjectReferences, WellReference, WellboreReference};

pub const EMPTY_PAYLOAD: &str = "payload cannot be empty";
pub const EMPTY_NAME: &str = "Name cannot be empty";
pub const EMPTY_UID: &str = "Uid cannot be empty";
pub const EMPTY_MNEMONIC: &str = "Mnemonic cannot be empty";
pub const EMPTY_NEW_MNEMONIC: &str = "New mnemonic cannot be empty";
pub const SAME_MNEMONIC: &str = "New mnemonic must differ from the current mnemonic";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

fn check(condition: bool, reason: &str) -> Result<(), ValidationError> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::new(reason))
    }
}

pub fn require_targets<T>(targets: &[T]) -> Result<(), ValidationError> {
    check(!targets.is_empty(), EMPTY_PAYLOAD)
}

/// The new name of a rename-style job must be present and non-empty.
pub fn require_name(name: Option<&str>) -> Result<(), ValidationError> {
    check(name.is_some_and(|x| !x.is_empty()), EMPTY_NAME)
}

/// A name that is sent must not be empty, but it may be left out.
pub fn optional_name(name: Option<&str>) -> Result<(), ValidationError> {
    check(!matches!(name, Some("")), EMPTY_NAME)
}

pub fn require_uid(uid: &str) -> Result<(), ValidationError> {
    check(!uid.is_empty(), EMPTY_UID)
}

/// Every uid an object payload carries must be populated.
pub fn require_object_identity(identity: &ObjectIdentity) -> Result<(), ValidationError> {
    require_uid(&identity.uid)?;
    require_uid(&identity.uid_well)?;
    require_uid(&identity.uid_wellbore)
}

pub fn require_mnemonics(mnemonic: &str, new_mnemonic: Option<&str>) -> Result<(), ValidationError> {
    check(!mnemonic.is_empty(), EMPTY_MNEMONIC)?;

    let new_mnemonic = new_mnemonic.unwrap_or_default();
    check(!new_mnemonic.is_empty(), EMPTY_NEW_MNEMONIC)?;
    check(new_mnemonic != mnemonic, SAME_MNEMONIC)
}

pub fn require_well_reference(reference: &WellReference) -> Result<(), ValidationError> {
    check(reference.is_addressable(), "well must be addressed by uid or name")
}

pub fn require_wellbore_reference(reference: &WellboreReference) -> Result<(), ValidationError> {
    require_well_reference(&reference.well())?;
    check(
        reference.is_addressable(),
        "wellbore must be addressed by uid or name",
    )
}

/// Checks a multi-object reference and returns the kind it addresses.
///
/// `forced` is the kind implied by the job itself; a conflicting explicit
/// `object_type` is rejected rather than silently overridden.
pub fn require_object_references(
    references: &ObjectReferences,
    forced: Option<EntityKind>,
) -> Result<EntityKind, ValidationError> {
    require_targets(&references.object_uids)?;

    if references.object_uids.iter().any(String::is_empty) {
        return Err(ValidationError::new(EMPTY_UID));
    }

    require_wellbore_reference(&references.parent)?;

    let kind = match (forced, references.object_type) {
        (Some(forced), Some(given)) if forced != given => {
            return Err(ValidationError::new(format!(
                "object type {given} does not match a {forced} job"
            )));
        }
        (Some(kind), _) | (None, Some(kind)) => kind,
        (None, None) => return Err(ValidationError::new("object type is required")),
    };

    check(
        kind.is_wellbore_object(),
        "object type must be a wellbore object",
    )?;

    Ok(kind)
}
