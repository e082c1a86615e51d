//! Tooth designations and per-procedure tooth requirements.
//!
//! Teeth are written in FDI two-digit notation: the first digit is the
//! quadrant, the second the position counted from the midline.
//!
//! - Permanent dentition: quadrants 1–4, positions 1–8 (codes 11–48)
//! - Primary dentition: quadrants 5–8, positions 1–5 (codes 51–85)
//!
//! Every sub-treatment in the catalog declares which designation it needs:
//! a cleaning applies to no tooth in particular, a root canal to exactly
//! one, a bridge to several. The designation is part of the identity of a
//! treatment instance — the same procedure on tooth 11 and on tooth 21 is
//! two instances.

use serde::{Deserialize, Serialize};

/// How many teeth a sub-treatment instance must designate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToothRequirement {
    /// Not tied to any tooth (e.g. whole-mouth cleaning)
    None,
    /// Exactly one tooth per instance
    Single,
    /// One or more teeth per instance
    Multiple,
}

impl std::fmt::Display for ToothRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToothRequirement::None => write!(f, "none"),
            ToothRequirement::Single => write!(f, "single"),
            ToothRequirement::Multiple => write!(f, "multiple"),
        }
    }
}

/// Error type for tooth designation checks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ToothError {
    /// Not a valid FDI code
    InvalidCode(u8),
    /// The same tooth listed more than once
    DuplicateCode(u8),
    /// Selection size contradicts the sub-treatment's requirement
    CountMismatch {
        requirement: ToothRequirement,
        found: usize,
    },
}

impl std::fmt::Display for ToothError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToothError::InvalidCode(code) => {
                write!(f, "{} is not a valid FDI tooth designation", code)
            }
            ToothError::DuplicateCode(code) => {
                write!(f, "Tooth {} is designated more than once", code)
            }
            ToothError::CountMismatch { requirement, found } => write!(
                f,
                "Selection of {} teeth does not satisfy the '{}' tooth requirement",
                found, requirement
            ),
        }
    }
}

/// True for a valid FDI two-digit tooth code.
pub fn is_valid_fdi(code: u8) -> bool {
    let quadrant = code / 10;
    let position = code % 10;
    match quadrant {
        1..=4 => (1..=8).contains(&position),
        5..=8 => (1..=5).contains(&position),
        _ => false,
    }
}

/// Validate a tooth selection against a sub-treatment's requirement.
///
/// Checks, in order: every code is valid FDI, no duplicates, and the
/// selection size matches the requirement (`None` ⇒ empty, `Single` ⇒
/// exactly one, `Multiple` ⇒ at least one).
pub fn validate_teeth(teeth: &[u8], requirement: ToothRequirement) -> Result<(), ToothError> {
    for (i, code) in teeth.iter().enumerate() {
        if !is_valid_fdi(*code) {
            return Err(ToothError::InvalidCode(*code));
        }
        if teeth[..i].contains(code) {
            return Err(ToothError::DuplicateCode(*code));
        }
    }

    let found = teeth.len();
    let count_ok = match requirement {
        ToothRequirement::None => found == 0,
        ToothRequirement::Single => found == 1,
        ToothRequirement::Multiple => found >= 1,
    };
    if !count_ok {
        return Err(ToothError::CountMismatch { requirement, found });
    }

    Ok(())
}

/// Canonical form of a tooth selection: sorted ascending, duplicates
/// removed. Two selections naming the same teeth in any order normalize to
/// the same vector, so the resumability index can key on it.
pub fn normalize_teeth(teeth: &[u8]) -> Vec<u8> {
    let mut normalized = teeth.to_vec();
    normalized.sort_unstable();
    normalized.dedup();
    normalized
}
