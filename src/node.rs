use std::fmt::{self, Debug, Display, Formatter};

/// Identity of a node among its siblings.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key(u64);

impl Key {
    #[inline(always)]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Key::new(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::new(value as u64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::new(value as u64)
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.0)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output of a render pass. Two passes over equal inputs produce equal trees.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub tag: String,
    pub key: Option<Key>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element {
            tag: tag.into(),
            key: None,
            children,
        })
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Same node with `key` attached. Only elements carry keys.
    pub fn with_key(self, key: impl Into<Key>) -> Self {
        match self {
            Node::Element(mut el) => {
                el.key = Some(key.into());
                Node::Element(el)
            }
            other => other,
        }
    }

    pub fn key(&self) -> Option<Key> {
        match self {
            Node::Element(el) => el.key,
            _ => None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element(el) => Some(&el.tag),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            Node::Fragment(children) => children,
            Node::Text(_) => &[],
        }
    }

    pub fn into_children(self) -> Vec<Node> {
        match self {
            Node::Element(el) => el.children,
            Node::Fragment(children) => children,
            Node::Text(_) => Vec::new(),
        }
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// One entry of a collection's output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyed {
    pub key: Key,
    pub node: Node,
}

impl Keyed {
    /// Pairs every keyed child of `parent` with its key, in order.
    pub fn collect(parent: Node) -> Vec<Keyed> {
        parent
            .into_children()
            .into_iter()
            .filter_map(|node| node.key().map(|key| Keyed { key, node }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_walks_descendants() {
        let tree = Node::Fragment(vec![
            Node::element("h2", vec![Node::text("a"), Node::text("b")]),
            Node::text("c"),
        ]);
        assert_eq!(tree.text_content(), "abc");
    }

    #[test]
    fn keys_only_attach_to_elements() {
        assert_eq!(Node::text("x").with_key(1u32).key(), None);
        assert_eq!(
            Node::element("li", vec![]).with_key(7u32).key(),
            Some(Key::new(7))
        );
    }

    #[test]
    fn collect_keeps_order_and_skips_unkeyed() {
        let parent = Node::Fragment(vec![
            Node::element("h2", vec![]).with_key(2u32),
            Node::text("loose"),
            Node::element("h2", vec![]).with_key(1u32),
        ]);
        let keys: Vec<u64> = Keyed::collect(parent).iter().map(|k| k.key.get()).collect();
        assert_eq!(keys, vec![2, 1]);
    }
}
