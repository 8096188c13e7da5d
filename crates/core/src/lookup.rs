//! Resolution of name-addressed references into uids.
//!
//! A lookup issues a header-only fetch of the parent scope and matches names
//! locally. Exactly one match is required; an ambiguous name is an error,
//! never a silent pick of the first candidate.

use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    builder, EntityKey, EntityKind, LogCurveInfo, LogObject, ReturnElements, StoreClient,
    StoreError, StoreQuery, Well, WellReference, Wellbore, WellboreReference,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("no {kind} named '{name}'")]
    Missing { kind: EntityKind, name: String },

    #[error("{count} {kind}s named '{name}', expected exactly one")]
    Ambiguous {
        kind: EntityKind,
        name: String,
        count: usize,
    },

    #[error("{kind} {key} does not exist")]
    Unknown { kind: EntityKind, key: String },

    #[error("log {log} has no curve with mnemonic '{mnemonic}'")]
    Mnemonic { log: String, mnemonic: String },
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn single<T>(
    kind: EntityKind,
    name: &str,
    mut matches: Vec<T>,
) -> Result<T, NotFoundError> {
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(NotFoundError::Missing {
            kind,
            name: name.to_owned(),
        }),
        count => Err(NotFoundError::Ambiguous {
            kind,
            name: name.to_owned(),
            count,
        }),
    }
}

pub struct LookupResolver<'a, C> {
    client: &'a C,
}

impl<'a, C: StoreClient> LookupResolver<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    async fn headers(&self, template: StoreQuery) -> Result<StoreQuery, StoreError> {
        self.client
            .fetch(template, ReturnElements::HeaderOnly)
            .await
    }

    /// Returns the well a reference points at.
    ///
    /// A reference carrying a uid is trusted as-is and costs no store call.
    #[instrument(skip_all)]
    pub async fn resolve_well(&self, reference: &WellReference) -> Result<Well, LookupError> {
        if let Some(uid) = reference.uid() {
            return Ok(Well {
                uid: uid.to_owned(),
                name: reference.name().map(str::to_owned),
                ..Default::default()
            });
        }

        let name = reference.name().unwrap_or_default();

        let wells = self
            .headers(builder::all_wells())
            .await?
            .into_items::<Well>()?;

        let matches: Vec<_> = wells
            .into_iter()
            .filter(|x| x.name.as_deref() == Some(name))
            .collect();

        let well = single(EntityKind::Well, name, matches)?;
        debug!(uid = %well.uid, name, "resolved well by name");

        Ok(well)
    }

    /// Returns the wellbore a reference points at, resolving the parent well
    /// first when needed.
    #[instrument(skip_all)]
    pub async fn resolve_wellbore(
        &self,
        reference: &WellboreReference,
    ) -> Result<Wellbore, LookupError> {
        let well = self.resolve_well(&reference.well()).await?;

        if let Some(uid) = reference.uid() {
            return Ok(Wellbore {
                uid: uid.to_owned(),
                uid_well: well.uid,
                name: reference.name().map(str::to_owned),
                name_well: well.name,
                ..Default::default()
            });
        }

        let name = reference.name().unwrap_or_default();

        let wellbores = self
            .headers(builder::wellbores_of(&well.uid))
            .await?
            .into_items::<Wellbore>()?;

        let matches: Vec<_> = wellbores
            .into_iter()
            .filter(|x| x.uid_well == well.uid && x.name.as_deref() == Some(name))
            .collect();

        let mut wellbore = single(EntityKind::Wellbore, name, matches)?;
        if wellbore.name_well.is_none() {
            wellbore.name_well = well.name;
        }

        debug!(uid = %wellbore.uid, name, "resolved wellbore by name");

        Ok(wellbore)
    }

    /// Fills the missing uids of a wellbore reference in place.
    pub async fn complete_wellbore(
        &self,
        reference: &mut WellboreReference,
    ) -> Result<Wellbore, LookupError> {
        let wellbore = self.resolve_wellbore(reference).await?;

        reference.well_uid = Some(wellbore.uid_well.clone());
        reference.wellbore_uid = Some(wellbore.uid.clone());

        Ok(wellbore)
    }

    /// Finds the curve of a log carrying the given mnemonic.
    #[instrument(skip_all, fields(log = %log, mnemonic = mnemonic))]
    pub async fn resolve_curve(
        &self,
        log: &EntityKey,
        mnemonic: &str,
    ) -> Result<(LogObject, LogCurveInfo), LookupError> {
        let logs = self
            .headers(builder::confirm(EntityKind::Log, log))
            .await?
            .into_items::<LogObject>()?;

        let header = logs
            .into_iter()
            .find(|x| x.identity.key() == *log)
            .ok_or_else(|| NotFoundError::Unknown {
                kind: EntityKind::Log,
                key: log.to_string(),
            })?;

        let curve = header
            .log_curve_info
            .iter()
            .find(|x| x.mnemonic.as_deref() == Some(mnemonic))
            .cloned()
            .ok_or_else(|| NotFoundError::Mnemonic {
                log: log.to_string(),
                mnemonic: mnemonic.to_owned(),
            })?;

        Ok((header, curve))
    }
}
