//! ASCII rendering of descendant trees.
//!
//! Every block contributes four rows above its children:
//!
//! ```text
//!    |            upper stem, up to the block's own parents
//!  Alice --- Bob  couple line (or a lone, centered name)
//!        |        lower stem, down to the children (blank without children)
//!       ---       connector spanning the children's upper stems
//! ```
//!
//! followed by the children's blocks side by side. The last two rows of the
//! finished tree are always blank and are dropped.

use alloc::{string::String, vec::Vec};

use tracing::debug;

use crate::error::Result;
use crate::layout::{COUPLE_LINK, Layout};
use crate::person::PersonId;
use crate::tree::Tree;

pub(crate) const V_STEM: char = '|';
pub(crate) const H_LINE: char = '-';

/// Columns from the block midpoint back to the end of the first name of a couple.
const LINK_OFFSET: usize = 3;

/// Always-blank rows at the bottom of a rendered tree.
const TRAILING_BLANK_ROWS: usize = 2;

impl Tree {
    /// Render `base` and their descendants as ASCII art, one line per row,
    /// without a trailing newline.
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
    /// let text = tree.render(mum).unwrap();
    /// assert_eq!(text.lines().count(), 6);
    /// assert!(text.contains("Kid"));
    /// ```
    pub fn render(&self, base: PersonId) -> Result<String> {
        let mut buf = String::new();
        self.render_to(base, &mut buf)?;
        Ok(buf)
    }

    /// Render into a provided buffer.
    pub fn render_to(&self, base: PersonId, output: &mut String) -> Result<()> {
        let layout = Layout::build(self, base)?;
        debug!(
            base = %self.people[base.0].name(),
            blocks = layout.len(),
            width = layout.root().width(),
            "rendering tree"
        );
        let rows = layout.rows(self)?;
        output.reserve(layout.estimate_size());
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(row);
        }
        Ok(())
    }
}

impl Layout {
    /// Rows of the rendered tree, top to bottom, each exactly as wide as the
    /// root block. Trailing blank rows are already removed.
    pub fn rows(&self, tree: &Tree) -> Result<Vec<String>> {
        let mut rendered: Vec<Option<Vec<String>>> = alloc::vec![None; self.blocks.len()];

        // Children always follow their parent in the arena
        for index in (0..self.blocks.len()).rev() {
            let children: Vec<Vec<String>> = self.blocks[index]
                .children
                .iter()
                .map(|&child| rendered[child].take().unwrap_or_default())
                .collect();
            rendered[index] = Some(self.block_rows(tree, index, children)?);
        }

        let mut rows = rendered
            .first_mut()
            .and_then(Option::take)
            .unwrap_or_default();
        rows.truncate(rows.len().saturating_sub(TRAILING_BLANK_ROWS));
        Ok(rows)
    }

    /// Rough size of the joined output, for buffer pre-allocation.
    pub fn estimate_size(&self) -> usize {
        let width = self.blocks.first().map_or(0, |b| b.width());
        // Four rows per generation, at most one generation per block
        (width + 1) * 4 * self.blocks.len()
    }

    fn block_rows(
        &self,
        tree: &Tree,
        index: usize,
        children: Vec<Vec<String>>,
    ) -> Result<Vec<String>> {
        let block = &self.blocks[index];
        let width = block.width();
        let center = (width + 1) / 2;

        let name = tree.name(block.person)?;
        let name_len = name.chars().count();

        let (upper, couple_line) = match block.partner {
            Some(partner) => {
                let partner_name = tree.name(partner)?;
                let name_center = center.saturating_sub(LINK_OFFSET + name_len / 2);
                let left = center.saturating_sub(LINK_OFFSET + name_len);
                let used = left + name_len + COUPLE_LINK.len() + partner_name.chars().count();
                let mut line = spaces(left);
                line.push_str(name);
                line.push_str(COUPLE_LINK);
                line.push_str(partner_name);
                // Even widths leave the spare column on the right
                push_spaces(&mut line, width.saturating_sub(used));
                (stem_at(name_center.saturating_sub(1), width), line)
            }
            None => {
                let left = width.saturating_sub(name_len) / 2;
                let mut line = spaces(left);
                line.push_str(name);
                push_spaces(&mut line, width.saturating_sub(left + name_len));
                (stem_at(center.saturating_sub(1), width), line)
            }
        };

        let lower = if block.children.is_empty() {
            spaces(width)
        } else {
            stem_at(center.saturating_sub(1), width)
        };

        let below = pad_to_width(join_side_by_side(children), width);
        let connector = match below.first() {
            Some(first) => connector_row(first, width, block.children.len() == 1),
            None => spaces(width),
        };

        let mut rows = Vec::with_capacity(4 + below.len());
        rows.push(upper);
        rows.push(couple_line);
        rows.push(lower);
        rows.push(connector);
        rows.extend(below);
        Ok(rows)
    }
}

/// Concatenate sibling blocks row by row. Shallower blocks are extended by
/// repeating their last row, which is always blank.
fn join_side_by_side(blocks: Vec<Vec<String>>) -> Vec<String> {
    let depth = blocks.iter().map(Vec::len).max().unwrap_or(0);
    (0..depth)
        .map(|row| {
            let mut line = String::new();
            for block in &blocks {
                if let Some(text) = block.get(row).or_else(|| block.last()) {
                    line.push_str(text);
                }
            }
            line
        })
        .collect()
}

/// Center rows inside `width`, giving the odd column to the left.
fn pad_to_width(rows: Vec<String>, width: usize) -> Vec<String> {
    let Some(first) = rows.first() else {
        return rows;
    };
    let missing = width.saturating_sub(first.chars().count());
    if missing == 0 {
        return rows;
    }
    let left = (missing + 1) / 2;
    let right = missing - left;
    rows.into_iter()
        .map(|row| {
            let mut line = spaces(left);
            line.push_str(&row);
            push_spaces(&mut line, right);
            line
        })
        .collect()
}

/// Horizontal line between the outermost stems of the children's top row.
/// A single child gets a plain vertical stem instead.
fn connector_row(children_top: &str, width: usize, single_child: bool) -> String {
    let mut stems = children_top
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == V_STEM)
        .map(|(i, _)| i);
    let Some(first) = stems.next() else {
        return spaces(width);
    };
    let last = stems.last().unwrap_or(first);

    if single_child {
        return stem_at(first, width);
    }

    let mut line = spaces(first + 1);
    line.extend(core::iter::repeat_n(H_LINE, last.saturating_sub(first + 1)));
    push_spaces(&mut line, width.saturating_sub(last));
    line
}

/// A blank row of `width` columns with a stem at `column`.
fn stem_at(column: usize, width: usize) -> String {
    let mut line = spaces(column);
    line.push(V_STEM);
    push_spaces(&mut line, width.saturating_sub(column + 1));
    line
}

fn spaces(n: usize) -> String {
    let mut line = String::with_capacity(n);
    push_spaces(&mut line, n);
    line
}

fn push_spaces(line: &mut String, n: usize) {
    line.extend(core::iter::repeat_n(' ', n));
}
