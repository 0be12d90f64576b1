pub mod slots;
pub mod store;
pub mod booking;

pub use booking::BookingService;
pub use store::BookingStore;
