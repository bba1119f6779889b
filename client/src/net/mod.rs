//! Networking: the single static document fetch.

pub mod api;
