//! Shortest relation path between two people.
//!
//! The search walks outward from the second person one relation hop at a
//! time. At every visited person it scans the four categories in
//! [`Relation::SEARCH_ORDER`]; the first category containing the first person
//! ends the search. Because layers are expanded in order, the path found is
//! never longer than the shortest one, and equal-length ties resolve
//! deterministically by scan order within the earliest-queued person.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet as HashSet;

use tracing::trace;

use crate::error::Result;
use crate::person::PersonId;
use crate::relation::{Relation, RelationPath};
use crate::tree::Tree;

/// Returned by [`Tree::get_relation`] when the people share no component.
pub const NO_RELATION: &str = "No Relation";

impl Tree {
    /// Shortest chain of relations describing `relative1` from `relative2`'s
    /// side, or `None` when they are not connected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_pedigree::{Relation, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let gran = tree.new_person("Gran");
    /// let mum = tree.new_person("Mum");
    /// let kid = tree.new_person("Kid");
    /// tree.add_via_relation(gran, mum, Relation::Parents).unwrap();
    /// tree.add_via_relation(mum, kid, Relation::Parents).unwrap();
    ///
    /// let path = tree.relation_path(gran, kid).unwrap().unwrap();
    /// assert_eq!(path.hops(), &[Relation::Parents, Relation::Parents]);
    /// ```
    pub fn relation_path(
        &self,
        relative1: PersonId,
        relative2: PersonId,
    ) -> Result<Option<RelationPath>> {
        self.check_registered(relative1)?;
        self.check_registered(relative2)?;

        if relative1 == relative2 {
            return Ok(Some(RelationPath::default()));
        }

        let mut seen: HashSet<PersonId> = HashSet::new();
        seen.insert(relative1);
        seen.insert(relative2);

        // Each entry is a person reached from relative2 and the hops taken
        let mut queue: VecDeque<(PersonId, Vec<Relation>)> = VecDeque::new();
        queue.push_back((relative2, Vec::new()));

        while let Some((current, path)) = queue.pop_front() {
            trace!(at = %self.people[current.0].name(), depth = path.len(), "expanding");
            let person = &self.people[current.0];

            for relation in Relation::SEARCH_ORDER {
                let group = &self.groups[person.group(relation).0];

                if group.contains(relative1) {
                    let mut hops = path;
                    hops.push(relation);
                    return Ok(Some(RelationPath::from_hops(hops)));
                }

                for next in group.members() {
                    if seen.insert(next) {
                        let mut hops = path.clone();
                        hops.push(relation);
                        queue.push_back((next, hops));
                    }
                }
            }
        }

        Ok(None)
    }

    /// The relation of `relative1` to `relative2` as text: hop labels joined
    /// by spaces (`"parents parents"` for a grandparent), `"Self"` for the same
    /// person, or [`NO_RELATION`].
    ///
    /// Fails with [`FamilyError::PersonNotFound`](crate::FamilyError::PersonNotFound)
    /// if either person is not registered.
    pub fn get_relation(&self, relative1: PersonId, relative2: PersonId) -> Result<String> {
        Ok(match self.relation_path(relative1, relative2)? {
            Some(path) => path.to_string(),
            None => NO_RELATION.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FamilyError;

    /// Gran and Gramps with children Mum and Uncle; Mum has Kid.
    fn three_generations() -> (Tree, [PersonId; 5]) {
        let mut tree = Tree::new();
        let gran = tree.new_person("Gran");
        let gramps = tree.new_person("Gramps");
        let mum = tree.new_person("Mum");
        let uncle = tree.new_person("Uncle");
        let kid = tree.new_person("Kid");
        tree.add_via_relation(gran, gramps, Relation::Partners).unwrap();
        tree.add_via_relation(gran, mum, Relation::Parents).unwrap();
        tree.add_via_relation(uncle, mum, Relation::Siblings).unwrap();
        tree.add_via_relation(mum, kid, Relation::Parents).unwrap();
        (tree, [gran, gramps, mum, uncle, kid])
    }

    #[test]
    fn test_direct_relations_match_labels() {
        let (tree, [gran, gramps, mum, uncle, kid]) = three_generations();
        assert_eq!(tree.get_relation(gran, gramps).unwrap(), "partners");
        assert_eq!(tree.get_relation(gran, mum).unwrap(), "parents");
        assert_eq!(tree.get_relation(mum, gran).unwrap(), "children");
        assert_eq!(tree.get_relation(uncle, mum).unwrap(), "siblings");
        assert_eq!(tree.get_relation(kid, mum).unwrap(), "children");
    }

    #[test]
    fn test_grandparent_resolves_in_two_hops() {
        let (tree, [gran, gramps, _, uncle, kid]) = three_generations();
        assert_eq!(tree.get_relation(gran, kid).unwrap(), "parents parents");
        assert_eq!(tree.get_relation(gramps, kid).unwrap(), "parents parents");
        assert_eq!(tree.get_relation(kid, gran).unwrap(), "children children");
        assert_eq!(tree.get_relation(uncle, kid).unwrap(), "parents siblings");

        let path = tree.relation_path(gran, kid).unwrap().unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_unconnected_people() {
        let (mut tree, [gran, ..]) = three_generations();
        let stranger = tree.new_person("Stranger");
        tree.add_person(stranger).unwrap();

        assert_eq!(tree.get_relation(gran, stranger).unwrap(), NO_RELATION);
        assert_eq!(tree.relation_path(stranger, gran).unwrap(), None);
    }

    #[test]
    fn test_unregistered_person() {
        let (mut tree, [gran, ..]) = three_generations();
        let ghost = tree.new_person("Ghost");

        assert_eq!(
            tree.get_relation(gran, ghost).unwrap_err(),
            FamilyError::PersonNotFound(ghost)
        );
        assert_eq!(
            tree.get_relation(ghost, gran).unwrap_err(),
            FamilyError::PersonNotFound(ghost)
        );
    }

    #[test]
    fn test_self_relation() {
        let (tree, [gran, ..]) = three_generations();
        assert_eq!(tree.get_relation(gran, gran).unwrap(), "Self");
    }

    /// Put `member` into `owner`'s `relation` group without touching
    /// `member`'s own groups, so one person can be reached along two paths.
    fn force_member(tree: &mut Tree, owner: PersonId, relation: Relation, member: PersonId) {
        let id = tree.person(owner).unwrap().group(relation);
        tree.groups[id.0].insert(member).unwrap();
    }

    #[test]
    fn test_scan_order_breaks_direct_ties() {
        let mut tree = Tree::new();
        let ann = tree.new_person("Ann");
        let ben = tree.new_person("Ben");
        tree.add_via_relation(ann, ben, Relation::Partners).unwrap();
        force_member(&mut tree, ben, Relation::Siblings, ann);

        // Partners are scanned before siblings
        assert_eq!(tree.get_relation(ann, ben).unwrap(), "partners");
    }

    #[test]
    fn test_scan_order_breaks_two_hop_ties() {
        let mut tree = Tree::new();
        let mum = tree.new_person("Mum");
        let kid = tree.new_person("Kid");
        let pat = tree.new_person("Pat");
        let x = tree.new_person("X");
        tree.add_via_relation(mum, kid, Relation::Parents).unwrap();
        tree.add_via_relation(pat, kid, Relation::Partners).unwrap();
        tree.add_person(x).unwrap();

        force_member(&mut tree, mum, Relation::Siblings, x);
        assert_eq!(tree.get_relation(x, kid).unwrap(), "parents siblings");

        // Kid's partner is queued before Kid's parents, so that path wins
        force_member(&mut tree, pat, Relation::Siblings, x);
        assert_eq!(tree.get_relation(x, kid).unwrap(), "partners siblings");
        assert_eq!(
            tree.relation_path(x, kid).unwrap().unwrap().hops(),
            &[Relation::Partners, Relation::Siblings]
        );
    }
}
