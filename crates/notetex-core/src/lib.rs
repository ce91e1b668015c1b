//! Notetex Core
//!
//! This crate provides the types shared by the notetex converter,
//! previewer and host.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`HeadingLevel`], [`BlockKind`] - Structural markers understood by both transforms
//! - [`ViewMode`] - Host-side choice between preview HTML and raw LaTeX
//! - [`NotetexError`] - Error types

pub mod enums;
pub mod error;

pub use enums::{BlockKind, HeadingLevel, ViewMode};
pub use error::{NotetexError, Result};
