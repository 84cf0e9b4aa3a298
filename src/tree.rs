//! The person/group registry and connected-component tracking.
//!
//! ## Storage
//!
//! People and groups live in two arenas indexed by [`PersonId`] and
//! [`GroupId`]. A person refers to its groups by id, so merging two groups is a
//! matter of pointing every member at the surviving id. Groups abandoned by a
//! merge are parked on a free list and reused by later allocations.
//!
//! ## Components
//!
//! Each registered person maps to one component slot. Components are created
//! as singletons when a person is registered and only ever merged; the slot of
//! the absorbed component is emptied and no longer counted.

use alloc::{string::String, vec::Vec};

#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap as HashMap;

use tracing::debug;

use crate::error::{FamilyError, Result};
use crate::group::{COUPLE_CAPACITY, Group, GroupId};
use crate::person::{Person, PersonId};
use crate::relation::Relation;

/// A family graph: every constructed person, the shared groups between them
/// and the connected components formed by registered people.
///
/// # Examples
///
/// ```
/// use ascii_pedigree::{Relation, Tree};
///
/// let mut tree = Tree::new();
/// let ann = tree.new_person("Ann");
/// let ben = tree.new_person("Ben");
/// tree.add_via_relation(ann, ben, Relation::Siblings).unwrap();
///
/// assert_eq!(tree.size(), 2);
/// assert!(tree.is_connected());
/// assert_eq!(tree.get_relation(ann, ben).unwrap(), "siblings");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tree {
    pub(crate) people: Vec<Person>,
    pub(crate) groups: Vec<Group>,
    free_groups: Vec<GroupId>,
    /// Registered people, in registration order.
    registered: Vec<PersonId>,
    person_component: HashMap<PersonId, usize>,
    /// Component slots; `None` once absorbed by another component.
    components: Vec<Option<Vec<PersonId>>>,
    live_components: usize,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a person with their own singleton sibling and partner groups.
    ///
    /// The person is not registered until it is passed to
    /// [`add_person`](Self::add_person) or
    /// [`add_via_relation`](Self::add_via_relation).
    pub fn new_person(&mut self, name: impl Into<String>) -> PersonId {
        let id = PersonId(self.people.len());
        let parents = self.alloc_group(Some(COUPLE_CAPACITY));
        let siblings = self.alloc_group(None);
        let partners = self.alloc_group(Some(COUPLE_CAPACITY));
        let children = self.alloc_group(None);

        // Fresh groups cannot be full
        let _ = self.groups[siblings.0].insert(id);
        let _ = self.groups[partners.0].insert(id);

        self.people
            .push(Person::new(name.into(), parents, siblings, partners, children));
        id
    }

    /// Register `person`. Registering twice is a no-op.
    pub fn add_person(&mut self, person: PersonId) -> Result<()> {
        self.check_exists(person)?;
        if self.person_component.contains_key(&person) {
            return Ok(());
        }

        #[cfg(feature = "warnings")]
        {
            let name = self.people[person.0].name();
            if self
                .registered
                .iter()
                .any(|&other| self.people[other.0].name() == name)
            {
                tracing::warn!(
                    name,
                    "a person with this name is already registered; names are used for display and may become ambiguous"
                );
            }
        }

        let slot = self.components.len();
        self.components.push(Some(alloc::vec![person]));
        self.person_component.insert(person, slot);
        self.registered.push(person);
        self.live_components += 1;
        debug!(person = %self.people[person.0].name(), component = slot, "registered person");
        Ok(())
    }

    /// Relate two people: afterwards `person1` is one of `person2`'s `relation`.
    ///
    /// Both people are registered first if needed. When they already share a
    /// component the call succeeds only if the relation is already in place;
    /// otherwise it fails with [`FamilyError::ConflictingRelation`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_pedigree::{Relation, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let mum = tree.new_person("Mum");
    /// let kid = tree.new_person("Kid");
    /// tree.add_via_relation(mum, kid, Relation::Parents).unwrap();
    ///
    /// assert!(tree.members_of(kid, Relation::Parents).unwrap().any(|p| p == mum));
    /// assert!(tree.members_of(mum, Relation::Children).unwrap().any(|p| p == kid));
    /// ```
    pub fn add_via_relation(
        &mut self,
        person1: PersonId,
        person2: PersonId,
        relation: Relation,
    ) -> Result<()> {
        self.add_person(person1)?;
        self.add_person(person2)?;

        let comp1 = self.person_component[&person1];
        let comp2 = self.person_component[&person2];

        if comp1 == comp2 {
            let group = self.people[person2.0].group(relation);
            if self.groups[group.0].contains(person1) {
                return Ok(());
            }
            return Err(FamilyError::ConflictingRelation {
                first: self.people[person1.0].name().into(),
                second: self.people[person2.0].name().into(),
            });
        }

        self.add_relation(person1, person2, relation)?;
        self.merge_components(comp1, comp2);
        Ok(())
    }

    /// Like [`add_via_relation`](Self::add_via_relation), taking the relation
    /// as one of the labels `parents`, `siblings`, `partners`, `children`.
    pub fn add_via_relation_str(
        &mut self,
        person1: PersonId,
        person2: PersonId,
        relation: &str,
    ) -> Result<()> {
        let relation = relation.parse()?;
        self.add_via_relation(person1, person2, relation)
    }

    /// Move every member of `absorbed` into `keep`.
    fn merge_components(&mut self, keep: usize, absorbed: usize) {
        let moved = self.components[absorbed].take().unwrap_or_default();
        debug!(keep, absorbed, moved = moved.len(), "merging components");
        for &person in &moved {
            self.person_component.insert(person, keep);
        }
        if let Some(members) = self.components[keep].as_mut() {
            members.extend(moved);
        }
        self.live_components -= 1;
    }

    pub(crate) fn alloc_group(&mut self, capacity: Option<usize>) -> GroupId {
        if let Some(id) = self.free_groups.pop() {
            self.groups[id.0].reset(capacity);
            return id;
        }
        let id = GroupId(self.groups.len());
        self.groups.push(match capacity {
            Some(capacity) => Group::bounded(capacity),
            None => Group::unbounded(),
        });
        id
    }

    /// Hand a group no person refers to any more back to the arena.
    pub(crate) fn release_group(&mut self, id: GroupId) {
        self.groups[id.0].reset(None);
        self.free_groups.push(id);
    }

    fn check_exists(&self, person: PersonId) -> Result<()> {
        if person.0 < self.people.len() {
            Ok(())
        } else {
            Err(FamilyError::PersonNotFound(person))
        }
    }

    /// Error unless `person` is registered.
    pub(crate) fn check_registered(&self, person: PersonId) -> Result<()> {
        if self.contains(person) {
            Ok(())
        } else {
            Err(FamilyError::PersonNotFound(person))
        }
    }

    /// Whether `person` has been registered.
    pub fn contains(&self, person: PersonId) -> bool {
        self.person_component.contains_key(&person)
    }

    /// The person behind a handle, registered or not.
    pub fn person(&self, person: PersonId) -> Result<&Person> {
        self.people
            .get(person.0)
            .ok_or(FamilyError::PersonNotFound(person))
    }

    pub fn name(&self, person: PersonId) -> Result<&str> {
        self.person(person).map(Person::name)
    }

    /// The group playing `relation` for `person`.
    pub fn group_of(&self, person: PersonId, relation: Relation) -> Result<&Group> {
        let id = self.person(person)?.group(relation);
        Ok(&self.groups[id.0])
    }

    /// Members of `person`'s `relation` group. Siblings and partners groups
    /// include `person` themself.
    pub fn members_of(
        &self,
        person: PersonId,
        relation: Relation,
    ) -> Result<impl Iterator<Item = PersonId> + Clone + '_> {
        Ok(self.group_of(person, relation)?.members())
    }

    /// The other member of `person`'s partners group, if there is one.
    pub fn partner(&self, person: PersonId) -> Result<Option<PersonId>> {
        let mut others = self
            .members_of(person, Relation::Partners)?
            .filter(|&p| p != person);
        match (others.next(), others.next()) {
            (Some(partner), None) => Ok(Some(partner)),
            _ => Ok(None),
        }
    }

    pub fn has_partner(&self, person: PersonId) -> Result<bool> {
        Ok(self.group_of(person, Relation::Partners)?.len() == COUPLE_CAPACITY)
    }

    /// Number of registered people.
    pub fn size(&self) -> usize {
        self.registered.len()
    }

    pub fn num_components(&self) -> usize {
        self.live_components
    }

    /// True for a non-empty tree with exactly one component.
    pub fn is_connected(&self) -> bool {
        self.live_components == 1
    }

    /// Registered people, in registration order.
    pub fn people(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.registered.iter().copied()
    }

    /// Live components, each listing its members.
    pub fn components(&self) -> impl Iterator<Item = &[PersonId]> + '_ {
        self.components.iter().filter_map(|c| c.as_deref())
    }

    /// Members of the component holding `person`.
    pub fn component_of(&self, person: PersonId) -> Result<&[PersonId]> {
        let slot = self
            .person_component
            .get(&person)
            .ok_or(FamilyError::PersonNotFound(person))?;
        Ok(self.components[*slot].as_deref().unwrap_or_default())
    }
}
