pub mod customer_orders;
pub mod ledger;
pub mod order_state;
pub mod pending_state;
pub mod record;
pub mod service_state;

pub use customer_orders::*;
pub use ledger::*;
pub use order_state::*;
pub use pending_state::*;
pub use record::*;
pub use service_state::*;
