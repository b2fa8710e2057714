use anchor_lang::prelude::*;
use crate::errors::ShipmentError;
use crate::state::order_state::SingleOrder;
use crate::state::pending_state::PendingOrders;
use crate::state::record::ShipmentRecord;
use crate::state::service_state::LedgerVariant;

/// PDA seed prefix for per-customer order accounts
pub const ORDERS_SEED: &[u8] = b"orders";

/// Pending pins one on-chain order account can hold (account space is fixed)
pub const MAX_PENDING_ORDERS: usize = 16;

/// Result of `check_status`, returned to clients as instruction return data
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub enum StatusReport {
    /// Single-slot services report a status token
    Label(String),
    /// Counting services report the number of orders in flight
    InFlight(u32),
}

/// Order record stored on chain, tagged with the service variant.
///
/// Tag 0 is `Single`, so a freshly allocated (zeroed) account decodes as
/// an empty single-slot record.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub enum OrderBook {
    Single(SingleOrder),
    Counting(PendingOrders),
}

impl OrderBook {
    const SINGLE_SIZE: usize = SingleOrder::SIZE;
    const COUNTING_SIZE: usize = PendingOrders::size_for(MAX_PENDING_ORDERS);

    /// 1 (tag) + largest variant
    pub const SIZE: usize = 1 + if Self::SINGLE_SIZE > Self::COUNTING_SIZE {
        Self::SINGLE_SIZE
    } else {
        Self::COUNTING_SIZE
    };

    pub fn new(variant: LedgerVariant) -> Self {
        match variant {
            LedgerVariant::SingleSlot => OrderBook::Single(SingleOrder::default()),
            LedgerVariant::Counting => OrderBook::Counting(PendingOrders::default()),
        }
    }

    pub fn variant(&self) -> LedgerVariant {
        match self {
            OrderBook::Single(_) => LedgerVariant::SingleSlot,
            OrderBook::Counting(_) => LedgerVariant::Counting,
        }
    }

    /// Orders shipped and not yet accepted
    pub fn in_flight(&self) -> u32 {
        match self {
            OrderBook::Single(order) => u32::from(order.is_in_flight()),
            OrderBook::Counting(orders) => orders.status(),
        }
    }
}

impl ShipmentRecord for OrderBook {
    type Status = StatusReport;

    fn dispatch(&mut self, pin: u16) -> Result<()> {
        match self {
            OrderBook::Single(order) => order.dispatch(pin),
            OrderBook::Counting(orders) => {
                // Conflict check first so a duplicate pin reports as such
                require!(!orders.is_pending(pin), ShipmentError::DuplicatePendingPin);
                require!(
                    orders.in_flight() < MAX_PENDING_ORDERS,
                    ShipmentError::PendingCapacityExceeded
                );
                orders.dispatch(pin)
            }
        }
    }

    fn accept(&mut self, pin: u16) -> Result<()> {
        match self {
            OrderBook::Single(order) => order.accept(pin),
            OrderBook::Counting(orders) => orders.accept(pin),
        }
    }

    fn status(&self) -> StatusReport {
        match self {
            OrderBook::Single(order) => StatusReport::Label(order.status().label().to_string()),
            OrderBook::Counting(orders) => StatusReport::InFlight(orders.status()),
        }
    }

    fn completed_deliveries(&self) -> u64 {
        match self {
            OrderBook::Single(order) => order.completed_deliveries(),
            OrderBook::Counting(orders) => orders.completed_deliveries(),
        }
    }
}

/// Per-customer order PDA
///
/// Seeds: ["orders", service, customer]
///
/// Created by the owner on the first dispatch to a customer and never
/// closed. The PDA address space is the map from customer to record.
#[account]
pub struct CustomerOrders {
    /// Service this record belongs to
    pub service: Pubkey,

    /// Customer the orders are addressed to
    pub customer: Pubkey,

    /// PDA bump seed
    pub bump: u8,

    /// Order record, variant matches the service
    pub book: OrderBook,
}

impl CustomerOrders {
    /// 8 (discriminator) + 32 (service) + 32 (customer) + 1 (bump) + book
    pub const SIZE: usize = 8 + 32 + 32 + 1 + OrderBook::SIZE;

    /// False until the first dispatch writes the header
    pub fn is_initialized(&self) -> bool {
        self.service != Pubkey::default()
    }

    /// Fill in a freshly allocated account
    pub fn open(&mut self, service: Pubkey, customer: Pubkey, variant: LedgerVariant, bump: u8) {
        self.service = service;
        self.customer = customer;
        self.bump = bump;
        self.book = OrderBook::new(variant);
    }

    /// Reject a record created under a different variant
    pub fn ensure_variant(&self, variant: LedgerVariant) -> Result<()> {
        require!(self.book.variant() == variant, ShipmentError::VariantMismatch);
        Ok(())
    }

    /// Read the order book behind an order PDA that may not exist yet.
    ///
    /// The caller must already have pinned `info` to the customer's PDA
    /// address. An account this program does not own, or one with no
    /// data, has never received a dispatch and yields an empty book.
    pub fn load_book(info: &AccountInfo, variant: LedgerVariant) -> Result<OrderBook> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(OrderBook::new(variant));
        }

        let data = info.try_borrow_data()?;
        let orders = CustomerOrders::try_deserialize(&mut &data[..])?;
        orders.ensure_variant(variant)?;
        Ok(orders.book)
    }
}
