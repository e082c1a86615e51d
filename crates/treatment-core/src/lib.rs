//! Core domain logic for multi-appointment dental treatments.
//!
//! A sub-treatment (say, a root canal variant) defines an ordered list of
//! steps. A treatment instance is performed against a patient across one or
//! more appointments; each session marks some subset of the steps done. The
//! instance is complete exactly when every defined step has been marked in
//! *some* session — never just the current one.
//!
//! This crate is deliberately free of any persistence or host dependency so
//! the rules can be tested natively:
//!
//! - [`completion`] — the completion predicate and the cross-session union
//!   of completed steps.
//! - [`state`] — the two-state record lifecycle (`InProgress` / `Completed`).
//! - [`tooth`] — FDI tooth designations and per-procedure tooth requirements.
//! - [`ledger`] — the derived patient balance (charges minus payments).
//! - [`validation`] — input checks shared by every write path.

pub mod completion;
pub mod ledger;
pub mod state;
pub mod tooth;
pub mod validation;

pub use completion::{is_complete, missing_orders, pending_orders, union_completed, StepOrder};
pub use ledger::balance;
pub use state::{RecordState, StateError};
pub use tooth::{is_valid_fdi, normalize_teeth, validate_teeth, ToothError, ToothRequirement};
pub use validation::{
    validate_amount, validate_execution_input, validate_step_selection, AmountError,
    ExecutionInputError, StepSelectionError,
};
