use std::fmt::{self, Debug, Formatter};

use generational_box::{AnyStorage, UnsyncStorage};
use log::{debug, trace};
use slab::Slab;

use crate::map::{HashSetExt, Set};
use crate::{purity, Key, Node, RenderError, Result, Root, Scope};

/// Index of a node in the arena of the pass that created it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl Debug for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Debug)]
pub(crate) enum Kind {
    Root,
    Element(String),
    Text(String),
}

#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) kind: Kind,
    pub(crate) key: Option<Key>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) keys: Set<Key>,
}

impl Entry {
    fn new(kind: Kind, key: Option<Key>) -> Self {
        Self {
            kind,
            key,
            children: Vec::new(),
            keys: Set::new(),
        }
    }
}

/// Scratch state of a single render pass.
///
/// A composer only lives inside [`Composer::render`]: it is created when the
/// pass starts and dropped when it returns, so nothing written here can leak
/// into another pass.
pub struct Composer {
    pub(crate) nodes: Slab<Entry>,
    pub(crate) pending_key: Option<Key>,
}

impl Composer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            pending_key: None,
        }
    }

    /// Runs `root` against a fresh arena and returns what it built.
    ///
    /// The root's children come back wrapped in a [`Node::Fragment`]. If
    /// `root` fails the partially built tree is dropped with the arena.
    pub fn render<F>(root: F) -> Result<Node>
    where
        F: FnOnce(Scope<Root>) -> Result<()>,
    {
        let owner = UnsyncStorage::owner();
        let composer = owner.insert(Composer::with_capacity(64));
        let root_id = composer.write().start_root();
        root(Scope::new(root_id, composer))?;
        let mut c = composer.write();
        debug!("render pass finished with {} nodes", c.nodes.len());
        Ok(c.finish(root_id))
    }

    /// Renders twice and fails with [`RenderError::Impure`] if the passes disagree.
    pub fn render_strict<F>(component: &'static str, mut root: F) -> Result<Node>
    where
        F: FnMut(Scope<Root>) -> Result<()>,
    {
        purity::check_pure(component, || Composer::render(&mut root))
    }

    #[inline(always)]
    pub(crate) fn start_root(&mut self) -> NodeId {
        NodeId(self.nodes.insert(Entry::new(Kind::Root, None)))
    }

    pub(crate) fn create_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId> {
        let key = self.pending_key.take();
        if let Some(key) = key {
            let siblings = &mut self.nodes[parent.0].keys;
            if !siblings.insert(key) {
                return Err(RenderError::DuplicateKey { key });
            }
        }
        let id = NodeId(
            self.nodes
                .insert(Entry::new(Kind::Element(tag.to_string()), key)),
        );
        trace!("{:?} <{}> under {:?} key={:?}", id, tag, parent, key);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    pub(crate) fn create_text(&mut self, parent: NodeId, text: String) -> NodeId {
        let id = NodeId(self.nodes.insert(Entry::new(Kind::Text(text), None)));
        trace!("{:?} text under {:?}", id, parent);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Moves the subtree under `id` out of the arena.
    pub(crate) fn finish(&mut self, id: NodeId) -> Node {
        let entry = self.nodes.remove(id.0);
        let children = entry
            .children
            .into_iter()
            .map(|child| self.finish(child))
            .collect();
        match entry.kind {
            Kind::Root => Node::Fragment(children),
            Kind::Text(text) => Node::Text(text),
            Kind::Element(tag) => Node::Element(crate::Element {
                tag,
                key: entry.key,
                children,
            }),
        }
    }
}

impl Debug for Composer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
            .field("nodes", &self.nodes.len())
            .field("pending_key", &self.pending_key)
            .finish()
    }
}
