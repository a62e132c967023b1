pub mod booking;
pub mod movie;
pub mod seat;
pub mod show;
pub mod social;
pub mod user;

pub use booking::{Booking, PaymentOrder};
pub use movie::{Movie, TvShow};
pub use seat::{SeatId, SeatStatus};
pub use show::{SeatRow, Show, Theatre};
pub use user::{Role, User};
