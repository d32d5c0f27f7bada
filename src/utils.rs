use crate::Node;

/// Prints `node` as an indented tree on stdout.
pub fn print_tree(node: &Node) {
    print!("{}", format_tree(node));
}

pub fn format_tree(node: &Node) -> String {
    let mut out = String::from("Root\n");
    format_node(node, false, String::new(), &mut out);
    out
}

fn format_node(node: &Node, has_sibling: bool, lines_string: String, out: &mut String) {
    let fork_string = if has_sibling {
        "├── "
    } else {
        "└── "
    };
    let display = match node {
        Node::Element(el) => match el.key {
            Some(key) => format!("<{}> [key={}]", el.tag, key),
            None => format!("<{}>", el.tag),
        },
        Node::Text(text) => format!("{:?}", text),
        Node::Fragment(_) => String::from("<>"),
    };
    out.push_str(&format!(
        "{lines}{fork}{display}\n",
        lines = lines_string,
        fork = fork_string,
        display = display,
    ));
    let bar = if has_sibling { "│   " } else { "    " };
    let new_string = lines_string + bar;
    let children = node.children();
    for (index, child) in children.iter().enumerate() {
        let has_sibling = index < children.len() - 1;
        format_node(child, has_sibling, new_string.clone(), out);
    }
}
