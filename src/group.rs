//! Shared relationship groups.
//!
//! A [`Group`] holds every person that plays one role together: a set of
//! siblings, or a couple. The same group object is referenced by all of its
//! members, so "Ann's siblings" and "Ben's siblings" are one group when Ann and
//! Ben are siblings. Couples double as the parents group of their children,
//! and sibling sets double as the children group of their parents.

use alloc::vec::Vec;
use core::fmt;

use crate::person::PersonId;

/// Handle to a group stored in a [`Tree`](crate::Tree)'s group arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub(crate) usize);

/// Maximum size of parents and partners groups.
pub const COUPLE_CAPACITY: usize = 2;

/// Outcome of a successful [`Group::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The person was not a member before.
    Inserted,
    /// The person was already a member; nothing changed.
    AlreadyPresent,
}

/// Returned when a bounded group is full and the person is new.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupFull {
    pub capacity: usize,
}

impl fmt::Display for GroupFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "maximum of {} people exceeded", self.capacity)
    }
}

/// Unordered collection of people sharing one relation category.
///
/// Members keep insertion order; only couples care, and even there index 0
/// and 1 carry no meaning on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    members: Vec<PersonId>,
    capacity: Option<usize>,
}

impl Group {
    /// A group with no size limit (siblings, children).
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A group holding at most `capacity` people (parents, partners).
    pub fn bounded(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Add `person`, reporting whether it was new.
    ///
    /// ```
    /// use ascii_pedigree::{Group, Insertion};
    /// # use ascii_pedigree::Tree;
    /// # let mut tree = Tree::new();
    /// # let (a, b, c) = (tree.new_person("A"), tree.new_person("B"), tree.new_person("C"));
    ///
    /// let mut couple = Group::bounded(2);
    /// assert_eq!(couple.insert(a), Ok(Insertion::Inserted));
    /// assert_eq!(couple.insert(a), Ok(Insertion::AlreadyPresent));
    /// assert_eq!(couple.insert(b), Ok(Insertion::Inserted));
    /// assert!(couple.insert(c).is_err());
    /// ```
    pub fn insert(&mut self, person: PersonId) -> Result<Insertion, GroupFull> {
        if self.contains(person) {
            return Ok(Insertion::AlreadyPresent);
        }
        if let Some(capacity) = self.capacity {
            if self.members.len() >= capacity {
                return Err(GroupFull { capacity });
            }
        }
        self.members.push(person);
        Ok(Insertion::Inserted)
    }

    /// Members in insertion order. The iterator is `Clone`, so it can be
    /// restarted without touching the group again.
    pub fn members(&self) -> impl Iterator<Item = PersonId> + Clone + '_ {
        self.members.iter().copied()
    }

    pub fn contains(&self, person: PersonId) -> bool {
        self.members.contains(&person)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// First member inserted, if any.
    pub fn first(&self) -> Option<PersonId> {
        self.members.first().copied()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn is_bounded(&self) -> bool {
        self.capacity.is_some()
    }

    /// Drop all members so the slot can be handed out again.
    pub(crate) fn reset(&mut self, capacity: Option<usize>) {
        self.members.clear();
        self.capacity = capacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut group = Group::unbounded();
        assert_eq!(group.insert(PersonId(1)), Ok(Insertion::Inserted));
        assert_eq!(group.insert(PersonId(1)), Ok(Insertion::AlreadyPresent));
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_bounded_group_rejects_third_member() {
        let mut group = Group::bounded(COUPLE_CAPACITY);
        group.insert(PersonId(0)).unwrap();
        group.insert(PersonId(1)).unwrap();

        assert_eq!(group.insert(PersonId(2)), Err(GroupFull { capacity: 2 }));
        // Re-adding a member of a full group is still fine
        assert_eq!(group.insert(PersonId(1)), Ok(Insertion::AlreadyPresent));
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_unbounded_group_grows() {
        let mut group = Group::unbounded();
        for i in 0..50 {
            group.insert(PersonId(i)).unwrap();
        }
        assert_eq!(group.len(), 50);
        assert!(!group.is_bounded());
        assert_eq!(group.capacity(), None);
    }

    #[test]
    fn test_members_keep_insertion_order_and_restart() {
        let mut group = Group::unbounded();
        group.insert(PersonId(3)).unwrap();
        group.insert(PersonId(1)).unwrap();
        group.insert(PersonId(2)).unwrap();

        let members = group.members();
        let first_pass: Vec<_> = members.clone().collect();
        let second_pass: Vec<_> = members.collect();
        assert_eq!(first_pass, [PersonId(3), PersonId(1), PersonId(2)]);
        assert_eq!(first_pass, second_pass);
        assert_eq!(group.first(), Some(PersonId(3)));
    }

    #[test]
    fn test_reset_clears_members() {
        let mut group = Group::bounded(2);
        group.insert(PersonId(0)).unwrap();
        group.reset(None);
        assert!(group.is_empty());
        assert!(!group.is_bounded());
    }
}
