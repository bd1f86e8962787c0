//! Reordering of elements in place
//!
//! Each sortable node keeps a slot: its parent and its index among its
//! siblings at the time of the call. After a stable sort, the i-th sorted
//! element's node is moved into the i-th slot. Only those slots change;
//! every other sibling stays where it was.

use super::error::SortError;
use super::tree::OrderedChildren;
use indexmap::{IndexMap, IndexSet};
use std::cmp::Ordering;

/// Sort `elements` and move their nodes into sorted positions
///
/// `sortable` maps an element to the node that actually moves (a row for a
/// cell, say). The comparator receives the tree so it can read node content.
/// Returns the elements in sorted order.
///
/// Nothing moves when an error is returned.
pub fn sort_elements<T, E, C, S>(
    tree: &mut T,
    elements: &[E],
    mut compare: C,
    mut sortable: S,
) -> Result<Vec<E>, SortError>
where
    T: OrderedChildren,
    E: Clone,
    C: FnMut(&T, &E, &E) -> Ordering,
    S: FnMut(&T, &E) -> T::Node,
{
    let mut items: Vec<(E, T::Node)> = Vec::with_capacity(elements.len());
    let mut slots: Vec<(T::Node, usize)> = Vec::with_capacity(elements.len());
    let mut seen: IndexSet<T::Node> = IndexSet::with_capacity(elements.len());

    for element in elements {
        let node = sortable(&*tree, element);
        if !seen.insert(node) {
            return Err(SortError::Duplicate);
        }
        let slot = tree.position(node).ok_or(SortError::Detached)?;
        slots.push(slot);
        items.push((element.clone(), node));
    }

    for &node in &seen {
        let mut current = tree.parent(node);
        while let Some(parent) = current {
            if seen.contains(&parent) {
                return Err(SortError::DescendantConflict);
            }
            current = tree.parent(parent);
        }
    }

    {
        let view: &T = tree;
        items.sort_by(|a, b| compare(view, &a.0, &b.0));
    }

    let mut rebuilt: IndexMap<T::Node, Vec<T::Node>> = IndexMap::new();
    for (&(parent, index), (_, node)) in slots.iter().zip(&items) {
        let children = rebuilt
            .entry(parent)
            .or_insert_with(|| tree.children(parent).to_vec());
        children[index] = *node;
    }

    let parents = rebuilt.len();
    for (parent, children) in rebuilt {
        tree.replace_children(parent, children);
    }

    tracing::debug!(elements = items.len(), parents, "reordered elements");
    Ok(items.into_iter().map(|(element, _)| element).collect())
}

/// Sort nodes that are themselves the nodes to move
pub fn sort_in_place<T, C>(
    tree: &mut T,
    nodes: &[T::Node],
    mut compare: C,
) -> Result<Vec<T::Node>, SortError>
where
    T: OrderedChildren,
    C: FnMut(&T, T::Node, T::Node) -> Ordering,
{
    sort_elements(tree, nodes, |t, a, b| compare(t, *a, *b), |_, node| *node)
}
