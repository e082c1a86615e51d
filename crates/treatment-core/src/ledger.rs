//! Derived patient balance.
//!
//! The balance is never stored: it is recomputed from the charge and
//! payment facts every time it is asked for, so it cannot drift from the
//! underlying history. A negative balance simply means the patient has
//! overpaid.

/// Outstanding balance: total charged minus total paid.
pub fn balance(costs: &[f64], payments: &[f64]) -> f64 {
    let charged: f64 = costs.iter().sum();
    let paid: f64 = payments.iter().sum();
    charged - paid
}
