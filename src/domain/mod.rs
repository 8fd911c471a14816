pub mod booking;
pub mod draft;
pub mod filter;
pub mod listing;
pub mod query;

pub use booking::{Booking, BookingRequest, RequestAction};
pub use filter::{FilterSpec, SortOrder};
pub use listing::{Listing, Owner, RoomType};
pub use query::query;
