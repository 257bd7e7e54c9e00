mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Concatenate every text node under `root`, depth first, separated by spaces.
pub fn text_content(root: &Element) -> String {
    let mut parts = Vec::new();
    collect_text(root, &mut parts);
    parts.join(" ")
}

fn collect_text<'a>(element: &'a Element, parts: &mut Vec<&'a str>) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => parts.push(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, parts);
            }
        }
    }
}
