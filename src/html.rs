use crate::{Node, Result, Scope};

#[derive(Debug, Clone, Copy)]
pub struct Section;
#[derive(Debug, Clone, Copy)]
pub struct Heading;
#[derive(Debug, Clone, Copy)]
pub struct OrderedList;
#[derive(Debug, Clone, Copy)]
pub struct ListItem;

pub trait Html {
    fn section<C>(&self, content: C) -> Result<()>
    where
        C: FnOnce(Scope<Section>) -> Result<()>;

    fn h1<T>(&self, text: T) -> Result<()>
    where
        T: Into<String>;

    fn h2<T>(&self, text: T) -> Result<()>
    where
        T: Into<String>;

    fn ol<C>(&self, content: C) -> Result<()>
    where
        C: FnOnce(Scope<OrderedList>) -> Result<()>;
}

impl<S> Html for Scope<S>
where
    S: 'static,
{
    fn section<C>(&self, content: C) -> Result<()>
    where
        C: FnOnce(Scope<Section>) -> Result<()>,
    {
        self.create_node("section", content)
    }

    fn h1<T>(&self, text: T) -> Result<()>
    where
        T: Into<String>,
    {
        self.create_node::<Heading, _>("h1", move |s| s.text(text))
    }

    fn h2<T>(&self, text: T) -> Result<()>
    where
        T: Into<String>,
    {
        self.create_node::<Heading, _>("h2", move |s| s.text(text))
    }

    fn ol<C>(&self, content: C) -> Result<()>
    where
        C: FnOnce(Scope<OrderedList>) -> Result<()>,
    {
        self.create_node("ol", content)
    }
}

impl Scope<OrderedList> {
    pub fn li<T>(&self, text: T) -> Result<()>
    where
        T: Into<String>,
    {
        self.create_node::<ListItem, _>("li", move |s| s.text(text))
    }
}

/// Serializes a tree to markup. Fragments emit their children bare and keys
/// are not part of the output.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_into(text, out),
        Node::Fragment(children) => {
            for child in children {
                write_node(child, out);
            }
        }
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);
            out.push('>');
            for child in &el.children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
    }
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
