use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the topmost enabled clickable element at the given coordinates.
///
/// "Topmost" follows paint order: higher z-index wins, then later tree order.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    topmost(layout, root, x, y, |e| e.clickable && !e.disabled)
}

/// Find the topmost element of any kind at the given coordinates.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    topmost(layout, root, x, y, |_| true)
}

fn topmost(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
    accept: impl Fn(&Element) -> bool,
) -> Option<String> {
    let mut best: Option<((i16, usize), &str)> = None;
    let mut order = 0;
    visit(layout, root, x, y, root.z_index, &mut order, &accept, &mut best);
    best.map(|(_, id)| id.to_string())
}

#[allow(clippy::too_many_arguments)]
fn visit<'a>(
    layout: &LayoutResult,
    element: &'a Element,
    x: u16,
    y: u16,
    parent_z: i16,
    order: &mut usize,
    accept: &impl Fn(&Element) -> bool,
    best: &mut Option<((i16, usize), &'a str)>,
) {
    let z = element.z_index.max(parent_z);
    let key = (z, *order);
    *order += 1;

    if let Some(rect) = layout.get(&element.id) {
        if rect.contains(x, y) && accept(element) && best.map_or(true, |(k, _)| key > k) {
            *best = Some((key, element.id.as_str()));
        }
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            visit(layout, child, x, y, z, order, accept, best);
        }
    }
}
