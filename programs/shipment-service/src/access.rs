use anchor_lang::prelude::*;
use crate::errors::ShipmentError;
use crate::state::is_valid_pin;

/// Roles recognised by the shipment service.
///
/// There is exactly one owner per service; every other non-null
/// address acts as a customer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Warehouse owner fixed when the service is initialized
    Owner,
    /// Any address other than the owner
    Customer,
}

impl Role {
    pub fn of(caller: &Pubkey, owner: &Pubkey) -> Self {
        if caller == owner {
            Role::Owner
        } else {
            Role::Customer
        }
    }
}

/// Reject `caller` unless it holds `required`
pub fn authorize(caller: &Pubkey, owner: &Pubkey, required: Role) -> Result<()> {
    require!(Role::of(caller, owner) == required, ShipmentError::Unauthorized);
    Ok(())
}

/// Access rule for the two read operations.
///
/// The owner may inspect any customer, a customer may only inspect
/// itself. The owner's own address and the null address are never
/// customers.
pub fn authorize_query(caller: &Pubkey, owner: &Pubkey, customer: &Pubkey) -> Result<()> {
    require!(customer != owner, ShipmentError::InvalidAddress);
    require!(*customer != Pubkey::default(), ShipmentError::InvalidAddress);
    require!(
        caller == owner || caller == customer,
        ShipmentError::Unauthorized
    );
    Ok(())
}

/// Dispatch preconditions that do not depend on the customer's record.
///
/// Checked in order:
/// 1. caller is the owner
/// 2. customer is not the caller
/// 3. pin is a four-digit code
/// 4. customer is not the null address
pub fn check_dispatch(caller: &Pubkey, owner: &Pubkey, customer: &Pubkey, pin: u16) -> Result<()> {
    authorize(caller, owner, Role::Owner)?;
    require!(customer != caller, ShipmentError::InvalidAddress);
    require!(is_valid_pin(pin), ShipmentError::InvalidPin);
    require!(*customer != Pubkey::default(), ShipmentError::InvalidAddress);
    Ok(())
}
