//! Browser-side collaborators of the state container.
//!
//! This module provides:
//! - [`wallet`] - EIP-1193 wallet connection and events
//! - [`minting`] - Mint transaction submission and receipt polling
//! - [`collection`] - Collection index loading
//! - [`creator_store`] - Creator draft persistence

pub mod collection;
pub mod creator_store;
pub mod error;
pub mod minting;
pub mod wallet;
