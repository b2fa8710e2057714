use anchor_lang::prelude::*;

#[error_code]
pub enum ShipmentError {
    #[msg("Caller does not hold the role required for this operation")]
    Unauthorized,

    #[msg("Target address is the null address or is not a valid customer here")]
    InvalidAddress,

    #[msg("Pin must be a four-digit code between 1000 and 9999")]
    InvalidPin,

    #[msg("Customer already has an order in flight")]
    OrderAlreadyInFlight,

    #[msg("This pin is already pending for the customer")]
    DuplicatePendingPin,

    #[msg("Pin does not match any order in flight for the caller")]
    PinMismatch,

    #[msg("Order has already been delivered")]
    AlreadyDelivered,

    // ========== Account Errors ==========

    #[msg("Customer has reached the maximum number of pending orders")]
    PendingCapacityExceeded,

    #[msg("Order account layout does not match the service variant")]
    VariantMismatch,

    #[msg("Arithmetic overflow in calculation")]
    CalculationOverflow,
}

/// Assert that `result` failed with exactly `expected`.
#[cfg(test)]
pub(crate) fn assert_rejected<T>(result: Result<T>, expected: ShipmentError) {
    match result {
        Ok(_) => panic!("expected {:?}, but the operation succeeded", expected),
        Err(anchor_lang::error::Error::AnchorError(err)) => {
            assert_eq!(
                err.error_code_number,
                u32::from(expected),
                "expected {:?}, got {}",
                expected,
                err.error_name
            );
        }
        Err(other) => panic!("expected {:?}, got {:?}", expected, other),
    }
}
