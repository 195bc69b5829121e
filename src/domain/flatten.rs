//! Option hierarchy flattening.
//!
//! Virtualization indexes rows by a single integer, so the two-level option
//! hierarchy (and the rendered nodes mirroring it) must be expanded into one
//! ordered sequence. Both expansions follow the same rule: a group header is
//! immediately followed by its children, leaves pass through unchanged.

use crate::option::{SelectOption, SelectableValue};

/// Role of a row in the flattened sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Top-level option without children
    Leaf,
    /// Top-level option owning a group
    GroupHeader,
    /// Child of the preceding group header
    GroupChild,
}

/// One row of the flattened option sequence.
///
/// Stores an index path into the hierarchy rather than a copy of the option,
/// so a cached flattening stays valid as long as the shape is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlatEntry {
    /// Index of the top-level option
    pub top: usize,
    /// Index within the group's children, if this row is a child
    pub child: Option<usize>,
    pub kind: EntryKind,
}

impl FlatEntry {
    /// Resolves this entry against the option set it was produced from.
    pub fn resolve<'a, T>(&self, options: &'a [SelectOption<T>]) -> Option<&'a SelectableValue<T>> {
        let option = options.get(self.top)?;
        match self.child {
            Some(child) => option.children().get(child),
            None => Some(option.data()),
        }
    }

    /// Whether this row is a group header (not a pickable option).
    pub fn is_header(&self) -> bool {
        self.kind == EntryKind::GroupHeader
    }
}

/// Flattens the option hierarchy into index paths.
///
/// `len(result) == top-level count + sum of child counts`.
pub fn flatten_options<T>(options: &[SelectOption<T>]) -> Vec<FlatEntry> {
    let total = options.iter().map(SelectOption::flattened_len).sum();
    let mut entries = Vec::with_capacity(total);

    for (top, option) in options.iter().enumerate() {
        match option {
            SelectOption::Leaf(_) => entries.push(FlatEntry {
                top,
                child: None,
                kind: EntryKind::Leaf,
            }),
            SelectOption::Group { children, .. } => {
                entries.push(FlatEntry {
                    top,
                    child: None,
                    kind: EntryKind::GroupHeader,
                });
                entries.extend((0..children.len()).map(|child| FlatEntry {
                    top,
                    child: Some(child),
                    kind: EntryKind::GroupChild,
                }));
            }
        }
    }

    entries
}

/// Flattens the option hierarchy into borrowed values, in row order.
pub fn flatten_values<T>(options: &[SelectOption<T>]) -> Vec<&SelectableValue<T>> {
    options
        .iter()
        .flat_map(|option| std::iter::once(option.data()).chain(option.children().iter()))
        .collect()
}

/// A caller-rendered node, mirroring the shape of a [`SelectOption`].
#[derive(Debug, Clone)]
pub enum RenderedNode<N> {
    Node(N),
    Group { heading: N, children: Vec<N> },
}

/// The rendered children handed to a menu.
///
/// Only `Many` is a sequence; the other variants mean the host has not
/// composed the list yet and the menu renders nothing.
#[derive(Debug, Clone)]
pub enum MenuChildren<N> {
    Empty,
    Single(N),
    Many(Vec<RenderedNode<N>>),
}

impl<N> MenuChildren<N> {
    /// Returns the node sequence, or `None` when not ready.
    pub fn as_sequence(&self) -> Option<&[RenderedNode<N>]> {
        match self {
            MenuChildren::Many(nodes) => Some(nodes),
            MenuChildren::Empty | MenuChildren::Single(_) => None,
        }
    }
}

impl<N> Default for MenuChildren<N> {
    fn default() -> Self {
        MenuChildren::Empty
    }
}

impl<N> From<Vec<RenderedNode<N>>> for MenuChildren<N> {
    fn from(nodes: Vec<RenderedNode<N>>) -> Self {
        MenuChildren::Many(nodes)
    }
}

/// Flattens rendered nodes with the same rule as [`flatten_options`].
///
/// Returns `None` if `children` is not a sequence.
pub fn flatten_children<N>(children: &MenuChildren<N>) -> Option<Vec<&N>> {
    let nodes = children.as_sequence()?;
    let mut flat = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            RenderedNode::Node(n) => flat.push(n),
            RenderedNode::Group { heading, children } => {
                flat.push(heading);
                flat.extend(children.iter());
            }
        }
    }

    Some(flat)
}
