//! One worker per job kind.

mod batch;
mod create;
mod delete;
mod mnemonic;
mod modify;

pub use batch::*;
pub use create::*;
pub use delete::*;
pub use mnemonic::*;
pub use modify::*;

use crate::{EntityKind, ObjectIdentity, WellboreReference};

/// Name when there is one, uid otherwise.
fn label(name: Option<&str>, uid: &str) -> String {
    match name {
        Some(x) if !x.is_empty() => x.to_owned(),
        _ => uid.to_owned(),
    }
}

/// "1 log", "3 trajectories".
fn counted(count: usize, kind: EntityKind) -> String {
    let label = kind.label();

    match count {
        1 => format!("1 {label}"),
        _ => match label.strip_suffix('y') {
            Some(stem) => format!("{count} {stem}ies"),
            None => format!("{count} {label}s"),
        },
    }
}

fn present(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Parent wellbore of an object payload, by whatever it carries.
fn parent_reference(identity: &ObjectIdentity) -> WellboreReference {
    WellboreReference {
        well_uid: present(&identity.uid_well),
        well_name: identity.name_well.clone(),
        wellbore_uid: present(&identity.uid_wellbore),
        wellbore_name: identity.name_wellbore.clone(),
    }
}
