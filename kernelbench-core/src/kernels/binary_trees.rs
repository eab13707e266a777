// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Binary tree allocation.
//!
//! Builds a perfect binary tree top-down, counts its nodes once and drops it.

/// Depth of the tree built by the suite.
pub const TREE_DEPTH: u32 = 18;

/// Immutable node of a perfect binary tree.
///
/// Each node exclusively owns its children; dropping a node drops its subtree.
#[derive(Debug, PartialEq, Eq)]
pub enum BinaryTreeNode {
    Leaf,
    Internal(Box<BinaryTreeNode>, Box<BinaryTreeNode>),
}

impl BinaryTreeNode {
    /// Build a perfect tree of the given depth. Depth 0 is a single leaf.
    pub fn with_depth(depth: u32) -> Self {
        if depth == 0 {
            return BinaryTreeNode::Leaf;
        }
        BinaryTreeNode::Internal(
            Box::new(Self::with_depth(depth - 1)),
            Box::new(Self::with_depth(depth - 1)),
        )
    }

    /// Number of nodes in this subtree.
    pub fn check(&self) -> u64 {
        match self {
            BinaryTreeNode::Leaf => 1,
            BinaryTreeNode::Internal(left, right) => 1 + left.check() + right.check(),
        }
    }

    /// True for a node without children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, BinaryTreeNode::Leaf)
    }
}

/// Build a tree of depth `n` and return its node count, `2^(n+1) - 1`.
pub fn binary_trees(n: u32) -> u64 {
    BinaryTreeNode::with_depth(n).check()
}
