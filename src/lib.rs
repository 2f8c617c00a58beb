//! Core library for the vocab-tools command line application.
//!
//! The library exposes the two offline operations behind the CLI: importing a
//! vocabulary spreadsheet into the app's JSON bundle ([`import`]) and checking
//! a bundle plus its mirrored dataset copy before it ships ([`validate`]).
//! IO adapters live under [`io`], the persisted entry shape inside [`model`].

pub mod error;
pub mod import;
pub mod io;
pub mod model;
pub mod validate;

pub use error::{Result, ToolError};
