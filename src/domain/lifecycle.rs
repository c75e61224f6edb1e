//! Order status guard.
//!
//! Statuses run `pending -> preparing -> out-for-delivery -> delivered`, but
//! progression is not enforced: an update may set any of the four values,
//! regressions included. Only two rules hold:
//!
//! * `delivered` is terminal, so a delivered order rejects every update.
//! * deletion is allowed only while the order is `pending`.

use super::errors::DomainError;
use super::order::OrderStatus;

pub fn ensure_editable(current: OrderStatus) -> Result<(), DomainError> {
    if current == OrderStatus::Delivered {
        return Err(DomainError::Conflict(
            "A delivered order cannot be changed".to_string(),
        ));
    }
    Ok(())
}

pub fn ensure_deletable(current: OrderStatus) -> Result<(), DomainError> {
    if current != OrderStatus::Pending {
        return Err(DomainError::Conflict(
            "An order cannot be deleted unless it is pending".to_string(),
        ));
    }
    Ok(())
}
