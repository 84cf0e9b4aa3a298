//! People and their four relationship-group references.

use alloc::string::String;
use core::fmt;

use crate::group::GroupId;
use crate::relation::Relation;

/// Handle to a person stored in a [`Tree`](crate::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub(crate) usize);

impl PersonId {
    /// Position of the person in the tree's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "person #{}", self.0)
    }
}

/// A named individual.
///
/// A person owns nothing but references to four shared groups. Only the
/// relation engine reassigns them, and it always swaps whole groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    parents: GroupId,
    siblings: GroupId,
    partners: GroupId,
    children: GroupId,
}

impl Person {
    pub(crate) fn new(
        name: String,
        parents: GroupId,
        siblings: GroupId,
        partners: GroupId,
        children: GroupId,
    ) -> Self {
        Self {
            name,
            parents,
            siblings,
            partners,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group currently playing `relation` for this person.
    pub fn group(&self, relation: Relation) -> GroupId {
        match relation {
            Relation::Parents => self.parents,
            Relation::Siblings => self.siblings,
            Relation::Partners => self.partners,
            Relation::Children => self.children,
        }
    }

    pub(crate) fn set_group(&mut self, relation: Relation, group: GroupId) {
        let slot = match relation {
            Relation::Parents => &mut self.parents,
            Relation::Siblings => &mut self.siblings,
            Relation::Partners => &mut self.partners,
            Relation::Children => &mut self.children,
        };
        *slot = group;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
