//! Core library components.
//!
//! This module contains the sync engine: fetching bundles from the secret
//! store, rendering them into shell files, and writing those files.

pub mod bundle;
pub mod config;
pub mod constants;
pub mod domain;
pub mod source;
pub mod sync;
pub mod writer;
