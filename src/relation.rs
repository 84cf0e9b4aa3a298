//! Relation categories and the typed paths returned by relation queries.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::FamilyError;

/// One of the four role-based groupings a person belongs to.
///
/// A relation `r` between `a` and `b` always reads "`a` is one of `b`'s `r`",
/// so `Parents` means `a` is a parent of `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relation {
    Parents,
    Siblings,
    Partners,
    Children,
}

impl Relation {
    /// Every relation, in declaration order.
    pub const ALL: [Relation; 4] = [
        Relation::Parents,
        Relation::Siblings,
        Relation::Partners,
        Relation::Children,
    ];

    /// Scan order used by the relation search. Ties between equally short
    /// paths resolve to whichever category comes first here.
    pub const SEARCH_ORDER: [Relation; 4] = [
        Relation::Partners,
        Relation::Parents,
        Relation::Children,
        Relation::Siblings,
    ];

    /// The label used in relation paths and accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Parents => "parents",
            Relation::Siblings => "siblings",
            Relation::Partners => "partners",
            Relation::Children => "children",
        }
    }

    /// The relation seen from the other side: if `a` is `b`'s parent,
    /// `b` is `a`'s child.
    ///
    /// ```
    /// use ascii_pedigree::Relation;
    ///
    /// assert_eq!(Relation::Parents.inverse(), Relation::Children);
    /// assert_eq!(Relation::Siblings.inverse(), Relation::Siblings);
    /// ```
    pub fn inverse(self) -> Relation {
        match self {
            Relation::Parents => Relation::Children,
            Relation::Children => Relation::Parents,
            other => other,
        }
    }

    /// Capacity-2 categories. Parents and partners share group objects.
    pub fn is_bounded(self) -> bool {
        matches!(self, Relation::Parents | Relation::Partners)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = FamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parents" => Ok(Relation::Parents),
            "siblings" => Ok(Relation::Siblings),
            "partners" => Ok(Relation::Partners),
            "children" => Ok(Relation::Children),
            other => Err(FamilyError::InvalidRelation(other.to_string())),
        }
    }
}

/// The hops found by [`Tree::relation_path`](crate::Tree::relation_path).
///
/// Hops are read outward from the second person: `[Parents, Parents]` for
/// `(a, b)` means `a` is a parent of one of `b`'s parents. An empty path
/// means both handles name the same person.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationPath {
    hops: Vec<Relation>,
}

impl RelationPath {
    pub(crate) fn from_hops(hops: Vec<Relation>) -> Self {
        Self { hops }
    }

    pub fn hops(&self) -> &[Relation] {
        &self.hops
    }

    /// Number of hops, which the search keeps minimal.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
}

impl fmt::Display for RelationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hops.is_empty() {
            return f.write_str("Self");
        }
        for (i, hop) in self.hops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(hop.as_str())?;
        }
        Ok(())
    }
}
