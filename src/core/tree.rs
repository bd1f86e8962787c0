//! Ordered node trees
//!
//! [`OrderedChildren`] is the only capability the reordering utility needs
//! from a UI framework: parent lookup and replacement of a parent's child
//! list. [`NodeTree`] is a small arena implementation of it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A tree whose nodes keep their children in order
pub trait OrderedChildren {
    type Node: Copy + Eq + Hash + fmt::Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn children(&self, node: Self::Node) -> &[Self::Node];

    /// Replace the child list of `parent`
    ///
    /// Every listed node becomes a child of `parent`. Nodes are moved, so
    /// their content and any state attached to them is preserved.
    fn replace_children(&mut self, parent: Self::Node, children: Vec<Self::Node>);

    /// Check if `ancestor` is a strict ancestor of `node`
    fn is_ancestor(&self, ancestor: Self::Node, node: Self::Node) -> bool {
        let mut current = self.parent(node);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Parent of `node` and the node's index among its siblings
    fn position(&self, node: Self::Node) -> Option<(Self::Node, usize)> {
        let parent = self.parent(node)?;
        let index = self.children(parent).iter().position(|&c| c == node)?;
        Some((parent, index))
    }
}

/// Handle of a node in a [`NodeTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct NodeData<T> {
    value: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed tree of values
#[derive(Debug, Clone)]
pub struct NodeTree<T> {
    nodes: Vec<NodeData<T>>,
}

impl<T> Default for NodeTree<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> NodeTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node without a parent
    pub fn add_root(&mut self, value: T) -> NodeId {
        self.nodes.push(NodeData {
            value,
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Add a node as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, value: T) -> NodeId {
        let id = self.add_root(value);
        self.nodes[id.0].parent = Some(parent);
        if let Some(data) = self.nodes.get_mut(parent.0) {
            data.children.push(id);
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).map(|n| &n.value)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).map(|n| &mut n.value)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Values of the children of `parent`, in order
    pub fn child_values(&self, parent: NodeId) -> Vec<&T> {
        self.children(parent)
            .iter()
            .filter_map(|&c| self.get(c))
            .collect()
    }
}

impl<T> OrderedChildren for NodeTree<T> {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    fn replace_children(&mut self, parent: NodeId, children: Vec<NodeId>) {
        for &child in &children {
            if let Some(data) = self.nodes.get_mut(child.0) {
                data.parent = Some(parent);
            }
        }
        if let Some(data) = self.nodes.get_mut(parent.0) {
            data.children = children;
        }
    }
}
