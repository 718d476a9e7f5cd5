//! Client for the arsha.io Black Desert market API.
//! It covers the bidding info and world market waitlist endpoints and the
//! records they decode into.
mod client;
mod endpoint;
mod error;
mod http;
mod region;
mod schema;

pub use client::MarketClient;
pub use error::Error;
pub use http::{HttpClient, BASE_URL};
pub use region::Region;
pub use schema::{MarketListing, MarketOrder, TrackedItem, WaitlistEntry};

pub type Result<T> = std::result::Result<T, Error>;
