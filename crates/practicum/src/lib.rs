//! Client and response contract for the Practicum homework status API.
//!
//! [`client`] owns the HTTP conversation, [`response`] owns the shape checks
//! on what comes back. The split keeps transport failures and contract
//! violations distinguishable all the way up to the poll loop, which reports
//! them differently.

pub mod client;
pub mod response;
