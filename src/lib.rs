//! # ascii-pedigree
//!
//! Family relationship graph with shortest-relation queries and ASCII
//! family-tree rendering.
//!
//! ## Features
//!
//! - **Consistent**: relatives share group objects, so adding one relation
//!   updates every affected person at once
//! - **Queries**: shortest relation path between any two people
//! - **Rendering**: centered, aligned descendant trees as plain text
//! - **no_std**: works with `alloc` only
//!
//! ## Quick Start
//!
//! ```rust
//! use ascii_pedigree::{Relation, Tree};
//!
//! let mut tree = Tree::new();
//! let alice = tree.new_person("Alice");
//! let bob = tree.new_person("Bob");
//! let cy = tree.new_person("Cy");
//!
//! tree.add_via_relation(alice, bob, Relation::Partners)?;
//! tree.add_via_relation(alice, cy, Relation::Parents)?;
//!
//! assert_eq!(tree.get_relation(bob, cy)?, "parents");
//! println!("{}", tree.render(alice)?);
//! # Ok::<(), ascii_pedigree::FamilyError>(())
//! ```
//!
//! ## Relations
//!
//! A relation always reads "the first person is one of the second person's
//! `relation`": `add_via_relation(a, b, Relation::Parents)` makes `a` a parent
//! of `b`, and `get_relation(a, b)` then answers `"parents"`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod group;
pub mod layout;
mod merge;
pub mod person;
pub mod relation;
pub mod render;
pub mod search;
pub mod tree;

pub use error::{FamilyError, Result};
pub use group::{Group, GroupFull, GroupId, Insertion};
pub use layout::{Layout, TextBlock};
pub use person::{Person, PersonId};
pub use relation::{Relation, RelationPath};
pub use search::NO_RELATION;
pub use tree::Tree;
