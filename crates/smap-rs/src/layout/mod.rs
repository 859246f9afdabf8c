//! Stripe descriptors and chain-walk utilities backing the map container.

pub mod chain;
pub mod stripe;
