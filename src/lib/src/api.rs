//! # API - talking to the remote drive
//!
//! `RemoteStore` is the seam the listing code is written against, `RemoteDrive`
//! implements it over HTTP with the functions in `api::client`.
//!

pub mod client;
pub mod endpoint;
pub mod remote_store;

pub use crate::api::remote_store::RemoteStore;
