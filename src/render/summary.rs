//! Plain-text summaries of a single person and of the whole tree.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::error::Result;
use crate::person::PersonId;
use crate::relation::Relation;
use crate::tree::Tree;

/// Row captions for [`Tree::profile`], in print order.
const PROFILE_ROWS: [(&str, Relation); 4] = [
    ("Parents:  ", Relation::Parents),
    ("Siblings: ", Relation::Siblings),
    ("Partner:  ", Relation::Partners),
    ("Children: ", Relation::Children),
];

impl Tree {
    /// Four-line overview of one person's relatives. Each list leaves the
    /// person out; captions line up under the name.
    ///
    /// ```
    /// use ascii_pedigree::{Relation, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let ann = tree.new_person("Ann");
    /// let ben = tree.new_person("Ben");
    /// tree.add_via_relation(ann, ben, Relation::Siblings).unwrap();
    ///
    /// let profile = tree.profile(ann).unwrap();
    /// assert!(profile.starts_with("Ann: Parents:  []"));
    /// assert!(profile.contains("     Siblings: [Ben]"));
    /// ```
    pub fn profile(&self, person: PersonId) -> Result<String> {
        let name = self.name(person)?;
        let indent = name.chars().count() + 2;

        let mut out = String::new();
        for (row, (caption, relation)) in PROFILE_ROWS.into_iter().enumerate() {
            if row == 0 {
                write!(out, "{}: ", name).ok();
            } else {
                out.extend(core::iter::repeat_n(' ', indent));
            }
            out.push_str(caption);
            self.write_names(&mut out, person, relation)?;
            out.push('\n');
        }
        Ok(out)
    }

    /// `[A, B]` listing of `person`'s `relation` group without `person`.
    fn write_names(&self, out: &mut String, person: PersonId, relation: Relation) -> Result<()> {
        out.push('[');
        let others = self.members_of(person, relation)?.filter(|&p| p != person);
        for (i, other) in others.enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(self.name(other)?);
        }
        out.push(']');
        Ok(())
    }

    fn write_name_list(
        &self,
        f: &mut fmt::Formatter<'_>,
        people: impl Iterator<Item = PersonId>,
    ) -> fmt::Result {
        f.write_str("[")?;
        for (i, person) in people.enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(self.people[person.0].name())?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Tree {
    /// People in registration order, then each component on its own line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("People: ")?;
        self.write_name_list(f, self.people())?;
        writeln!(f)?;
        writeln!(f, "Size: {}", self.size())?;
        writeln!(f, "Components: {}", self.num_components())?;
        for component in self.components() {
            f.write_str("  ")?;
            self.write_name_list(f, component.iter().copied())?;
            writeln!(f)?;
        }
        Ok(())
    }
}
