use anchor_lang::prelude::*;
use crate::errors::ShipmentError;

/// Smallest accepted pin (four digits, no leading zero)
pub const PIN_MIN: u16 = 1000;

/// Largest accepted pin
pub const PIN_MAX: u16 = 9999;

/// Returns true if `pin` is a genuine four-digit code
pub fn is_valid_pin(pin: u16) -> bool {
    (PIN_MIN..=PIN_MAX).contains(&pin)
}

/// Per-customer order record shared by both ledger variants.
///
/// Implementations only enforce their own state rules (conflicting
/// dispatch, pin match, already delivered). Role and address checks
/// belong to the caller, see `crate::access`.
///
/// Every method that returns an error leaves the record untouched.
pub trait ShipmentRecord {
    /// What `check_status` reports for this record shape
    type Status;

    /// Mark a new order as shipped under `pin`
    fn dispatch(&mut self, pin: u16) -> Result<()>;

    /// Confirm receipt of the order shipped under `pin`
    fn accept(&mut self, pin: u16) -> Result<()>;

    fn status(&self) -> Self::Status;

    /// Lifetime count of accepted orders
    fn completed_deliveries(&self) -> u64;
}

/// Increment a lifetime counter without wrapping
pub(crate) fn bump_counter(count: u64) -> Result<u64> {
    count
        .checked_add(1)
        .ok_or_else(|| ShipmentError::CalculationOverflow.into())
}

/// Convert a collection length to a reported count, clamping at `u32::MAX`
pub(crate) fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_rejected;

    #[test]
    fn test_pin_bounds() {
        assert!(!is_valid_pin(0));
        assert!(!is_valid_pin(100));
        assert!(!is_valid_pin(999));
        assert!(is_valid_pin(1000));
        assert!(is_valid_pin(1234));
        assert!(is_valid_pin(9999));
        assert!(!is_valid_pin(10000));
        assert!(!is_valid_pin(u16::MAX));
    }

    #[test]
    fn test_bump_counter_overflow() {
        assert_eq!(bump_counter(0).unwrap(), 1);
        assert_rejected(bump_counter(u64::MAX), ShipmentError::CalculationOverflow);
    }

    #[test]
    fn test_saturating_count() {
        assert_eq!(saturating_count(0), 0);
        assert_eq!(saturating_count(16), 16);
        assert_eq!(saturating_count(u32::MAX as usize), u32::MAX);
        assert_eq!(saturating_count(usize::MAX), u32::MAX);
    }
}
