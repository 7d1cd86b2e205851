//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`header`] - Navigation bar and wallet connector
//! - [`banner`] - Network error banner
//! - [`minting_modal`] - Minting progress overlay
//! - [`home`], [`collection`], [`creator`], [`detail`] - The four screens
//! - [`icons`] - Centralized icon definitions

pub mod banner;
pub mod collection;
pub mod creator;
pub mod detail;
pub mod header;
pub mod home;
pub mod icons;
pub mod minting_modal;
pub mod router;

pub use router::AppRouter;
