//! keyward library - cli commands and authorized_keys rendering.
//!
//! - [`cli`]: command-line interface implementation
//! - [`render`]: turns resolved access into `authorized_keys` files

#![warn(missing_docs)]

/// command-line interface implementation.
pub mod cli;
/// authorized_keys rendering.
pub mod render;
