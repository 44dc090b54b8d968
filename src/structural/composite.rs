//! Composite: group objects into a tree and treat the whole like a single node.
//!
//! Nodes live in a generational arena. A composite owns the ordered list of its
//! children's ids; the parent reference is a plain id kept for bookkeeping and
//! never followed by [`CompositeTree::operation`].

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::{debug, instrument};

use crate::errors::{PatternError, PatternResult};
use crate::util::transcript::Transcript;

pub const LEAF_RESULT: &str = "Leaf";

static NEXT_TREE_ID: AtomicUsize = AtomicUsize::new(0);

/// Handle to a node, tagged with the tree that created it.
///
/// An arena index alone says nothing about which arena it came from; the tag
/// lets a tree reject handles minted by another tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    tree: usize,
    index: Index,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.index.into_raw_parts();
        write!(f, "{}:{slot}.{generation}", self.tree)
    }
}

/// What a node is. Leaves are terminal by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Composite,
}

/// A component in the arena.
#[derive(Debug)]
pub struct Component {
    pub kind: NodeKind,
    /// Composite currently holding this node, None while detached
    pub parent: Option<NodeId>,
    /// Children in insertion order; always empty for leaves
    pub children: Vec<NodeId>,
}

impl Component {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena of leaves and composites.
///
/// Nodes are created detached and wired together with [`add`](Self::add).
/// Several independent trees may share one arena. Ids handed out by another
/// `CompositeTree` are rejected with [`PatternError::NodeNotFound`].
#[derive(Debug)]
pub struct CompositeTree {
    id: usize,
    arena: Arena<Component>,
}

impl Default for CompositeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeTree {
    pub fn new() -> Self {
        Self {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            arena: Arena::new(),
        }
    }

    fn insert(&mut self, kind: NodeKind) -> NodeId {
        NodeId {
            tree: self.id,
            index: self.arena.insert(Component::new(kind)),
        }
    }

    /// Create a detached leaf.
    #[instrument(level = "trace", skip(self))]
    pub fn leaf(&mut self) -> NodeId {
        self.insert(NodeKind::Leaf)
    }

    /// Create a detached, empty composite.
    #[instrument(level = "trace", skip(self))]
    pub fn composite(&mut self) -> NodeId {
        self.insert(NodeKind::Composite)
    }

    pub fn get(&self, idx: NodeId) -> PatternResult<&Component> {
        if idx.tree != self.id {
            return Err(PatternError::NodeNotFound(idx));
        }
        self.arena.get(idx.index).ok_or(PatternError::NodeNotFound(idx))
    }

    fn get_mut(&mut self, idx: NodeId) -> PatternResult<&mut Component> {
        if idx.tree != self.id {
            return Err(PatternError::NodeNotFound(idx));
        }
        self.arena
            .get_mut(idx.index)
            .ok_or(PatternError::NodeNotFound(idx))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn is_composite(&self, idx: NodeId) -> PatternResult<bool> {
        Ok(self.get(idx)?.kind == NodeKind::Composite)
    }

    pub fn parent(&self, idx: NodeId) -> PatternResult<Option<NodeId>> {
        Ok(self.get(idx)?.parent)
    }

    pub fn children(&self, idx: NodeId) -> PatternResult<&[NodeId]> {
        Ok(&self.get(idx)?.children)
    }

    /// Attach `child` under `parent`.
    ///
    /// A no-op when `parent` is a leaf. Duplicates are not checked: adding the
    /// same child twice yields two entries, and the parent reference is
    /// overwritten each time. Fails with [`PatternError::CycleDetected`] if
    /// `parent` is `child` itself or lies in `child`'s subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> PatternResult<()> {
        self.get(child)?;
        if !self.is_composite(parent)? {
            debug!("add on a leaf ignored");
            return Ok(());
        }
        if self.descendants(child).any(|(idx, _)| idx == parent) {
            return Err(PatternError::CycleDetected(child));
        }

        self.get_mut(parent)?.children.push(child);
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Detach the first occurrence of `child` from `parent` and clear its parent.
    ///
    /// A no-op when `parent` is a leaf. Fails with
    /// [`PatternError::ComponentNotFound`] if `child` is not among the children.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, parent: NodeId, child: NodeId) -> PatternResult<()> {
        self.get(child)?;
        let node = self.get_mut(parent)?;
        if node.kind == NodeKind::Leaf {
            debug!("remove on a leaf ignored");
            return Ok(());
        }
        let pos = node
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or(PatternError::ComponentNotFound {
                parent,
                component: child,
            })?;
        node.children.remove(pos);

        self.get_mut(child)?.parent = None;
        Ok(())
    }

    /// Recursively describe the subtree rooted at `idx`.
    ///
    /// Leaves yield `"Leaf"`; composites yield `"Branch(a+b+...)"` over their
    /// children in insertion order, `"Branch()"` when empty.
    #[instrument(level = "trace", skip(self))]
    pub fn operation(&self, idx: NodeId) -> PatternResult<String> {
        let node = self.get(idx)?;
        match node.kind {
            NodeKind::Leaf => Ok(LEAF_RESULT.to_string()),
            NodeKind::Composite => {
                let results: Vec<String> = node
                    .children
                    .iter()
                    .map(|&child| self.operation(child))
                    .collect::<PatternResult<_>>()?;
                Ok(format!("Branch({})", results.join("+")))
            }
        }
    }

    /// Pre-order walk of the subtree rooted at `idx`, `idx` included.
    pub fn descendants(&self, idx: NodeId) -> Descendants<'_> {
        Descendants::new(self, idx)
    }

    /// Depth of the subtree rooted at `idx`; a single node has depth 1.
    pub fn depth(&self, idx: NodeId) -> PatternResult<usize> {
        let node = self.get(idx)?;
        let mut max = 0;
        for &child in &node.children {
            max = max.max(self.depth(child)?);
        }
        Ok(1 + max)
    }

    /// Render the subtree as a `termtree` for terminal display.
    pub fn render(&self, idx: NodeId) -> PatternResult<Tree<String>> {
        let node = self.get(idx)?;
        let label = match node.kind {
            NodeKind::Leaf => LEAF_RESULT.to_string(),
            NodeKind::Composite => "Branch".to_string(),
        };
        let leaves: Vec<Tree<String>> = node
            .children
            .iter()
            .map(|&child| self.render(child))
            .collect::<PatternResult<_>>()?;
        Ok(Tree::new(label).with_leaves(leaves))
    }
}

pub struct Descendants<'a> {
    tree: &'a CompositeTree,
    stack: Vec<NodeId>,
}

impl<'a> Descendants<'a> {
    fn new(tree: &'a CompositeTree, start: NodeId) -> Self {
        Self {
            tree,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Component);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Ok(node) = self.tree.get(current) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current, node));
            }
        }
        None
    }
}

/// Build the reference tree: `[[leaf, leaf], [leaf]]`. Returns the arena and root.
pub fn reference_tree() -> PatternResult<(CompositeTree, NodeId)> {
    let mut tree = CompositeTree::new();
    let root = tree.composite();

    let branch1 = tree.composite();
    let l1 = tree.leaf();
    let l2 = tree.leaf();
    tree.add(branch1, l1)?;
    tree.add(branch1, l2)?;

    let branch2 = tree.composite();
    let l3 = tree.leaf();
    tree.add(branch2, l3)?;

    tree.add(root, branch1)?;
    tree.add(root, branch2)?;
    Ok((tree, root))
}

/// Client code that only ever sees the uniform component interface.
fn client_code(tree: &CompositeTree, component: NodeId, out: &mut Transcript) -> PatternResult<()> {
    out.line(format!("RESULT: {}", tree.operation(component)?));
    Ok(())
}

/// Adds `other` to `component` only if the component says it can hold children.
fn client_code2(
    tree: &mut CompositeTree,
    component: NodeId,
    other: NodeId,
    out: &mut Transcript,
) -> PatternResult<()> {
    if tree.is_composite(component)? {
        tree.add(component, other)?;
    }
    out.line(format!("RESULT: {}", tree.operation(component)?));
    Ok(())
}

#[instrument(level = "debug")]
pub fn demo() -> PatternResult<Transcript> {
    let mut out = Transcript::new();

    let (mut tree, root) = reference_tree()?;
    let simple = tree.leaf();
    out.line("Client: I've got a simple component:");
    client_code(&tree, simple, &mut out)?;
    out.blank();

    out.line("Client: Now I've got a composite tree:");
    client_code(&tree, root, &mut out)?;
    out.blank();

    out.line("Client: I don't need to check the components classes even when managing the tree:");
    client_code2(&mut tree, root, simple, &mut out)?;
    Ok(out)
}
