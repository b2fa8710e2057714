pub mod init_service;
pub mod ship_with_pin;
pub mod accept_order;
pub mod check_status;
pub mod total_completed_deliveries;

pub use init_service::*;
pub use ship_with_pin::*;
pub use accept_order::*;
pub use check_status::*;
pub use total_completed_deliveries::*;
