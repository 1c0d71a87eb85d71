mod health_check;
mod helpers;
mod waitlist;

pub use health_check::health_check;
pub use waitlist::join_waitlist;
