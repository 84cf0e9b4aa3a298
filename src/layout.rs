//! Block layout for descendant trees.
//!
//! A [`Layout`] holds one [`TextBlock`] per person in the descendant closure
//! of a base person. Blocks are stored in an arena in pre-order, so every
//! child comes after its parent and a reverse sweep visits children first.
//! Both passes below are iterative; deep pedigrees never grow the call stack.

use alloc::vec::Vec;

use crate::error::{FamilyError, Result};
use crate::group::COUPLE_CAPACITY;
use crate::person::PersonId;
use crate::relation::Relation;
use crate::tree::Tree;

/// Separator drawn between the two names of a couple.
pub(crate) const COUPLE_LINK: &str = " --- ";

/// Columns a lone name needs beyond its own length.
const SINGLE_MARGIN: usize = 2;

/// Layout node for one person and, if any, their partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    /// The descendant this block is rooted at; drawn first on the couple line.
    pub person: PersonId,
    /// Their partner, drawn after the link.
    pub partner: Option<PersonId>,
    /// Indices of child blocks in the layout arena, in children-group order.
    pub children: Vec<usize>,
    width: usize,
}

impl TextBlock {
    /// Columns this block occupies, wide enough for its names and for every
    /// descendant block side by side.
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Geometry of a whole descendant tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub(crate) blocks: Vec<TextBlock>,
}

impl Layout {
    /// Lay out `base` and all of their descendants.
    ///
    /// Fails with [`FamilyError::PersonNotFound`] if `base` is not registered,
    /// and with [`FamilyError::MalformedPartnerGroup`] if any partners group
    /// met on the way holds neither one nor two people.
    pub fn build(tree: &Tree, base: PersonId) -> Result<Self> {
        tree.check_registered(base)?;

        let mut blocks: Vec<TextBlock> = Vec::new();
        let mut name_widths: Vec<usize> = Vec::new();
        // (person, parent block index)
        let mut stack: Vec<(PersonId, Option<usize>)> = alloc::vec![(base, None)];

        while let Some((person, parent)) = stack.pop() {
            let partners = tree.group_of(person, Relation::Partners)?;
            let partner = match partners.len() {
                1 => None,
                COUPLE_CAPACITY => partners.members().find(|&p| p != person),
                size => {
                    return Err(FamilyError::MalformedPartnerGroup {
                        person: tree.name(person)?.into(),
                        size,
                    });
                }
            };

            let longest = partners
                .members()
                .map(|p| tree.name(p).map(|name| name.chars().count()))
                .collect::<Result<Vec<_>>>()?
                .into_iter()
                .max()
                .unwrap_or(0);
            let name_width = if partner.is_some() {
                COUPLE_CAPACITY * longest + SINGLE_MARGIN + COUPLE_LINK.len()
            } else {
                longest + SINGLE_MARGIN
            };

            let index = blocks.len();
            blocks.push(TextBlock {
                person,
                partner,
                children: Vec::new(),
                width: 0,
            });
            name_widths.push(name_width);
            if let Some(parent) = parent {
                blocks[parent].children.push(index);
            }

            // Reversed so the first child is popped, and numbered, first
            let children: Vec<PersonId> = tree.members_of(person, Relation::Children)?.collect();
            for &child in children.iter().rev() {
                stack.push((child, Some(index)));
            }
        }

        // Children sit after their parent, so a reverse sweep sees them first
        for index in (0..blocks.len()).rev() {
            let below: usize = blocks[index]
                .children
                .iter()
                .map(|&child| blocks[child].width)
                .sum();
            blocks[index].width = below.max(name_widths[index]);
        }

        Ok(Self { blocks })
    }

    /// The block of the base person.
    pub fn root(&self) -> &TextBlock {
        &self.blocks[0]
    }

    pub fn block(&self, index: usize) -> Option<&TextBlock> {
        self.blocks.get(index)
    }

    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    /// Width of block `index`: the larger of its own names and the sum of its
    /// children's widths.
    pub fn required_width(&self, index: usize) -> Option<usize> {
        self.blocks.get(index).map(TextBlock::width)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
