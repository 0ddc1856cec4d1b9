#![deny(clippy::all, clippy::pedantic)]
//! # Pile Runtime
//!
//! Headless host for the pile simulation. It plays the part a renderer's
//! frame loop would: it owns the [`physics::Simulation`], feeds it the
//! current parameters once per frame and reads the transforms back.
//!
//! -   [`app`] runs the frame loop and applies settings reloads between
//!     steps.
//! -   [`watcher`] watches the settings file and sends re-parsed documents to
//!     the loop.
//! -   [`dump`] writes the final transforms as JSON.

pub mod app;
pub mod dump;
pub mod watcher;

pub use app::{run, RunConfig, RunSummary};
