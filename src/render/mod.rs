//! Text output for family trees.
//!
//! [`ascii`] draws a base person's descendants as a block diagram; [`summary`]
//! produces per-person profiles and the tree overview used by `Display`.

pub mod ascii;
pub mod summary;
