//! Group merging when a new relation joins two components.
//!
//! Every relation boils down to joining one pair of couple groups and one pair
//! of sibling groups:
//!
//! | relation   | couple groups joined            | sibling groups joined           |
//! |------------|---------------------------------|---------------------------------|
//! | `siblings` | p1.parents + p2.parents         | p1.siblings + p2.siblings       |
//! | `partners` | p1.partners + p2.partners       | p1.children + p2.children       |
//! | `parents`  | p1.partners + p2.parents        | p1.children + p2.siblings       |
//! | `children` | p1.parents + p2.partners        | p1.siblings + p2.children       |
//!
//! The groups on `person1`'s side survive. Members of `person2`'s groups are
//! moved over and repointed, which carries the merge to their whole family.

use alloc::vec::Vec;

use tracing::trace;

use crate::error::{FamilyError, Result};
use crate::group::{GroupId, Insertion};
use crate::person::PersonId;
use crate::relation::Relation;
use crate::tree::Tree;

/// The four groups touched by one merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MergePlan {
    couple_keep: GroupId,
    couple_absorb: GroupId,
    siblings_keep: GroupId,
    siblings_absorb: GroupId,
}

impl Tree {
    /// Pick the groups that must be joined so `person1` becomes one of
    /// `person2`'s `relation`.
    fn merge_plan(&self, person1: PersonId, person2: PersonId, relation: Relation) -> MergePlan {
        let p1 = &self.people[person1.0];
        let p2 = &self.people[person2.0];

        let (couple, siblings) = match relation {
            Relation::Siblings => (
                (Relation::Parents, Relation::Parents),
                (Relation::Siblings, Relation::Siblings),
            ),
            Relation::Partners => (
                (Relation::Partners, Relation::Partners),
                (Relation::Children, Relation::Children),
            ),
            Relation::Parents => (
                (Relation::Partners, Relation::Parents),
                (Relation::Children, Relation::Siblings),
            ),
            Relation::Children => (
                (Relation::Parents, Relation::Partners),
                (Relation::Siblings, Relation::Children),
            ),
        };

        MergePlan {
            couple_keep: p1.group(couple.0),
            couple_absorb: p2.group(couple.1),
            siblings_keep: p1.group(siblings.0),
            siblings_absorb: p2.group(siblings.1),
        }
    }

    /// Join the groups of two people from different components.
    ///
    /// Fails with [`FamilyError::CapacityExceeded`] before touching anything if
    /// the joined couple group would hold more than two people.
    pub(crate) fn add_relation(
        &mut self,
        person1: PersonId,
        person2: PersonId,
        relation: Relation,
    ) -> Result<()> {
        let plan = self.merge_plan(person1, person2, relation);

        let keep = &self.groups[plan.couple_keep.0];
        let absorb = &self.groups[plan.couple_absorb.0];
        if let Some(capacity) = keep.capacity() {
            let incoming: Vec<PersonId> = absorb.members().filter(|&p| !keep.contains(p)).collect();
            if keep.len() + incoming.len() > capacity {
                let overflow = incoming[capacity.saturating_sub(keep.len())];
                return Err(FamilyError::CapacityExceeded {
                    person: self.people[overflow.0].name().into(),
                    capacity,
                });
            }
        }

        let couple: Vec<PersonId> = self.groups[plan.couple_absorb.0].members().collect();
        for member in couple {
            if self.insert_member(plan.couple_keep, member)? == Insertion::Inserted {
                let person = &mut self.people[member.0];
                person.set_group(Relation::Partners, plan.couple_keep);
                person.set_group(Relation::Children, plan.siblings_keep);
                trace!(member = %person.name(), "joined couple group");
            }
        }

        let siblings: Vec<PersonId> = self.groups[plan.siblings_absorb.0].members().collect();
        for member in siblings {
            if self.insert_member(plan.siblings_keep, member)? == Insertion::Inserted {
                let person = &mut self.people[member.0];
                person.set_group(Relation::Parents, plan.couple_keep);
                person.set_group(Relation::Siblings, plan.siblings_keep);
                trace!(member = %person.name(), "joined sibling group");
            }
        }

        // Every member of the absorbed groups now points at the kept ones
        self.release_group(plan.couple_absorb);
        self.release_group(plan.siblings_absorb);
        Ok(())
    }

    fn insert_member(&mut self, group: GroupId, person: PersonId) -> Result<Insertion> {
        self.groups[group.0]
            .insert(person)
            .map_err(|full| FamilyError::CapacityExceeded {
                person: self.people[person.0].name().into(),
                capacity: full.capacity,
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::FamilyError;
    use crate::relation::Relation;
    use crate::tree::Tree;
    use alloc::vec::Vec;

    #[test]
    fn test_parent_and_child_share_groups() {
        let mut tree = Tree::new();
        let mum = tree.new_person("Mum");
        let kid = tree.new_person("Kid");
        tree.add_via_relation(mum, kid, Relation::Parents).unwrap();

        let kid_parents = tree.person(kid).unwrap().group(Relation::Parents);
        let mum_partners = tree.person(mum).unwrap().group(Relation::Partners);
        assert_eq!(kid_parents, mum_partners);

        let kid_siblings = tree.person(kid).unwrap().group(Relation::Siblings);
        let mum_children = tree.person(mum).unwrap().group(Relation::Children);
        assert_eq!(kid_siblings, mum_children);
    }

    #[test]
    fn test_child_relation_points_the_other_way() {
        let mut tree = Tree::new();
        let dad = tree.new_person("Dad");
        let kid = tree.new_person("Kid");
        // Kid is one of Dad's children
        tree.add_via_relation(kid, dad, Relation::Children).unwrap();

        assert!(tree.group_of(dad, Relation::Children).unwrap().contains(kid));
        assert!(tree.group_of(kid, Relation::Parents).unwrap().contains(dad));
    }

    #[test]
    fn test_partner_joins_existing_children() {
        let mut tree = Tree::new();
        let mum = tree.new_person("Mum");
        let dad = tree.new_person("Dad");
        let kid = tree.new_person("Kid");
        tree.add_via_relation(mum, kid, Relation::Parents).unwrap();
        tree.add_via_relation(dad, mum, Relation::Partners).unwrap();

        let parents: Vec<_> = tree.members_of(kid, Relation::Parents).unwrap().collect();
        assert!(parents.contains(&mum));
        assert!(parents.contains(&dad));
        assert!(tree.group_of(dad, Relation::Children).unwrap().contains(kid));
    }

    #[test]
    fn test_siblings_share_parents() {
        let mut tree = Tree::new();
        let mum = tree.new_person("Mum");
        let ann = tree.new_person("Ann");
        let ben = tree.new_person("Ben");
        tree.add_via_relation(mum, ann, Relation::Parents).unwrap();
        tree.add_via_relation(ben, ann, Relation::Siblings).unwrap();

        assert!(tree.group_of(ben, Relation::Parents).unwrap().contains(mum));
        let children: Vec<_> = tree.members_of(mum, Relation::Children).unwrap().collect();
        // Ben's side of the merge survives, so Ben is listed first
        assert_eq!(children, [ben, ann]);
    }

    #[test]
    fn test_sibling_sets_merge_transitively() {
        let mut tree = Tree::new();
        let a = tree.new_person("A");
        let b = tree.new_person("B");
        let c = tree.new_person("C");
        let d = tree.new_person("D");
        tree.add_via_relation(a, b, Relation::Siblings).unwrap();
        tree.add_via_relation(c, d, Relation::Siblings).unwrap();
        tree.add_via_relation(b, c, Relation::Siblings).unwrap();

        let group = tree.person(a).unwrap().group(Relation::Siblings);
        for person in [b, c, d] {
            assert_eq!(tree.person(person).unwrap().group(Relation::Siblings), group);
        }
        assert_eq!(tree.group_of(d, Relation::Siblings).unwrap().len(), 4);
    }

    #[test]
    fn test_third_parent_is_rejected() {
        let mut tree = Tree::new();
        let mum = tree.new_person("Mum");
        let dad = tree.new_person("Dad");
        let other = tree.new_person("Other");
        let kid = tree.new_person("Kid");
        tree.add_via_relation(mum, kid, Relation::Parents).unwrap();
        tree.add_via_relation(dad, kid, Relation::Parents).unwrap();

        let err = tree
            .add_via_relation(other, kid, Relation::Parents)
            .unwrap_err();
        assert!(matches!(err, FamilyError::CapacityExceeded { capacity: 2, .. }));
        assert_eq!(tree.group_of(kid, Relation::Parents).unwrap().len(), 2);
        assert!(!tree.group_of(kid, Relation::Parents).unwrap().contains(other));
    }

    #[test]
    fn test_second_partner_is_rejected_without_side_effects() {
        let mut tree = Tree::new();
        let ann = tree.new_person("Ann");
        let ben = tree.new_person("Ben");
        let cal = tree.new_person("Cal");
        tree.add_via_relation(ann, ben, Relation::Partners).unwrap();
        tree.add_person(cal).unwrap();
        let groups_before = tree.groups.clone();

        let err = tree
            .add_via_relation(cal, ann, Relation::Partners)
            .unwrap_err();
        assert!(matches!(err, FamilyError::CapacityExceeded { capacity: 2, .. }));
        assert_eq!(tree.groups, groups_before);
        assert_eq!(tree.num_components(), 2);
        assert_eq!(tree.partner(ann).unwrap(), Some(ben));
    }

    #[test]
    fn test_capacity_checked_transitively() {
        // Siblings with different parent couples cannot be joined
        let mut tree = Tree::new();
        let p1 = tree.new_person("P1");
        let p2 = tree.new_person("P2");
        let p3 = tree.new_person("P3");
        let a = tree.new_person("A");
        let b = tree.new_person("B");
        tree.add_via_relation(p1, a, Relation::Parents).unwrap();
        tree.add_via_relation(p2, a, Relation::Parents).unwrap();
        tree.add_via_relation(p3, b, Relation::Parents).unwrap();

        let err = tree.add_via_relation(a, b, Relation::Siblings).unwrap_err();
        assert!(matches!(err, FamilyError::CapacityExceeded { .. }));
    }

    #[test]
    fn test_absorbed_groups_are_recycled() {
        let mut tree = Tree::new();
        let ann = tree.new_person("Ann");
        let ben = tree.new_person("Ben");
        let arena_before = tree.groups.len();
        tree.add_via_relation(ann, ben, Relation::Siblings).unwrap();

        // Two groups were freed, so the next person allocates only two new ones
        tree.new_person("Cal");
        assert_eq!(tree.groups.len(), arena_before + 2);
    }
}
