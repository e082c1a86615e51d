//! Input validation shared by every treatment write path.
//!
//! All checks run before the first storage write, so a rejected request
//! leaves no trace. Amounts are plain f64 values supplied by the catalog or
//! by staff; the rules here only require them to be finite and
//! non-negative — pricing policy is somebody else's problem.

use serde::{Deserialize, Serialize};

use crate::completion::StepOrder;
use crate::tooth::{validate_teeth, ToothError, ToothRequirement};

/// Error type for monetary amounts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AmountError {
    /// NaN or infinite
    NotFinite(f64),
    /// Negative charge or payment
    Negative(f64),
}

impl std::fmt::Display for AmountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountError::NotFinite(value) => {
                write!(f, "Amount {} is not a finite number", value)
            }
            AmountError::Negative(value) => {
                write!(f, "Amount {} must not be negative", value)
            }
        }
    }
}

/// Error type for step selections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum StepSelectionError {
    /// Selected orders that the catalog does not define
    UnknownOrders(Vec<StepOrder>),
}

impl std::fmt::Display for StepSelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepSelectionError::UnknownOrders(orders) => {
                let listed: Vec<String> = orders.iter().map(|o| o.to_string()).collect();
                write!(
                    f,
                    "Step orders [{}] are not defined for this sub-treatment",
                    listed.join(", ")
                )
            }
        }
    }
}

/// Combined validation failure for an execution request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ExecutionInputError {
    Tooth(ToothError),
    Amount(AmountError),
    Steps(StepSelectionError),
}

impl std::fmt::Display for ExecutionInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionInputError::Tooth(e) => write!(f, "{}", e),
            ExecutionInputError::Amount(e) => write!(f, "{}", e),
            ExecutionInputError::Steps(e) => write!(f, "{}", e),
        }
    }
}

impl From<ToothError> for ExecutionInputError {
    fn from(e: ToothError) -> Self {
        ExecutionInputError::Tooth(e)
    }
}

impl From<AmountError> for ExecutionInputError {
    fn from(e: AmountError) -> Self {
        ExecutionInputError::Amount(e)
    }
}

impl From<StepSelectionError> for ExecutionInputError {
    fn from(e: StepSelectionError) -> Self {
        ExecutionInputError::Steps(e)
    }
}

/// Validate a charge or payment amount: finite and non-negative.
pub fn validate_amount(amount: f64) -> Result<(), AmountError> {
    if !amount.is_finite() {
        return Err(AmountError::NotFinite(amount));
    }
    if amount < 0.0 {
        return Err(AmountError::Negative(amount));
    }
    Ok(())
}

/// Every selected order must exist in the catalog's step set for the
/// sub-treatment. Reported orders are deduplicated and ascending.
pub fn validate_step_selection(
    catalog_orders: &[StepOrder],
    selected: &[StepOrder],
) -> Result<(), StepSelectionError> {
    let mut unknown: Vec<StepOrder> = selected
        .iter()
        .filter(|order| !catalog_orders.contains(order))
        .copied()
        .collect();
    unknown.sort_unstable();
    unknown.dedup();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(StepSelectionError::UnknownOrders(unknown))
    }
}

/// Full pre-write validation for recording or executing a treatment.
///
/// Checks the tooth selection against the sub-treatment's requirement, the
/// actual cost, the optional payment amount, and that the selected steps
/// all exist in the catalog. The first failure wins; nothing is written
/// before this passes.
pub fn validate_execution_input(
    requirement: ToothRequirement,
    teeth: &[u8],
    actual_cost: f64,
    payment_amount: Option<f64>,
    catalog_orders: &[StepOrder],
    selected: &[StepOrder],
) -> Result<(), ExecutionInputError> {
    validate_teeth(teeth, requirement)?;
    validate_amount(actual_cost)?;
    if let Some(amount) = payment_amount {
        validate_amount(amount)?;
    }
    validate_step_selection(catalog_orders, selected)?;
    Ok(())
}
