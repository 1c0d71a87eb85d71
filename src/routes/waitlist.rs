mod errors;
mod helpers;
mod waitlist_handler;

pub use waitlist_handler::join_waitlist;
