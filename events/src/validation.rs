//! Event validation logic.
//!
//! Checks run immediately before a record is appended, against the payer's
//! live balance. A failure means no event is created and no state changes.

use crate::error::ValidationError;
use crate::{BurnRequest, MintRequest, TransferRequest};
use florin_types::Amount;

/// Validate a transfer against the fee in force and the sender's balance.
///
/// The sender must cover `amount + fee`; the fee was computed by the
/// coordinator from the current fee rate before calling here.
pub fn validate_transfer(
    req: &TransferRequest,
    fee: Amount,
    available: Amount,
) -> Result<(), ValidationError> {
    if req.amount.is_zero() {
        return Err(ValidationError::ZeroAmount { op: "transfer" });
    }
    if req.from.is_reserved() {
        return Err(ValidationError::MissingSender { op: "transfer" });
    }
    if req.to.is_reserved() {
        return Err(ValidationError::MissingRecipient { op: "transfer" });
    }
    if req.from == req.to {
        return Err(ValidationError::SelfTransfer {
            from: req.from,
            to: req.to,
        });
    }
    if req.note.is_empty() {
        return Err(ValidationError::MissingNote { op: "transfer" });
    }
    if req.link.is_empty() {
        return Err(ValidationError::MissingLink { op: "transfer" });
    }
    let required = req
        .amount
        .checked_add(fee)
        .ok_or(ValidationError::AmountOverflow)?;
    if available < required {
        return Err(ValidationError::InsufficientBalance {
            available,
            required,
        });
    }
    Ok(())
}

/// Validate a mint. Unconditional creation: no balance check.
pub fn validate_mint(req: &MintRequest) -> Result<(), ValidationError> {
    if req.amount.is_zero() {
        return Err(ValidationError::ZeroAmount { op: "mint" });
    }
    if req.to.is_reserved() {
        return Err(ValidationError::MissingRecipient { op: "mint" });
    }
    if req.note.is_empty() {
        return Err(ValidationError::MissingNote { op: "mint" });
    }
    Ok(())
}

/// Validate a burn against the holder's balance.
pub fn validate_burn(req: &BurnRequest, available: Amount) -> Result<(), ValidationError> {
    if req.amount.is_zero() {
        return Err(ValidationError::ZeroAmount { op: "burn" });
    }
    if req.from.is_reserved() {
        return Err(ValidationError::MissingSender { op: "burn" });
    }
    if available < req.amount {
        return Err(ValidationError::InsufficientBalance {
            available,
            required: req.amount,
        });
    }
    if req.note.is_empty() {
        return Err(ValidationError::MissingNote { op: "burn" });
    }
    if req.link.is_empty() {
        return Err(ValidationError::MissingLink { op: "burn" });
    }
    Ok(())
}
