use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Justify, Position, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out `root` inside `viewport`, returning a rect per element id.
pub fn layout(root: &Element, viewport: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    if root.position == Position::Absolute {
        place_absolute(root, viewport, &mut result);
        return result;
    }

    let (width, height) = measure(root);
    let rect = Rect::new(
        viewport.x,
        viewport.y,
        resolve(root.width, width, viewport.width),
        resolve(root.height, height, viewport.height),
    );
    place(root, rect, viewport, &mut result);
    result
}

/// Intrinsic (width, height) of an element, including padding and border.
pub fn measure(element: &Element) -> (u16, u16) {
    let border = element.style.border.size() * 2;
    let frame_w = element.padding.width() + border;
    let frame_h = element.padding.height() + border;

    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => {
            let lines: Vec<&str> = text.split('\n').collect();
            let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
            (clamp_u16(width), clamp_u16(lines.len()))
        }
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children
                .iter()
                .filter(|c| c.position != Position::Absolute)
                .map(measure)
                .collect();
            let gaps = element.gap.saturating_mul(sizes.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Row => (
                    sizes
                        .iter()
                        .fold(0u16, |acc, (w, _)| acc.saturating_add(*w))
                        .saturating_add(gaps),
                    sizes.iter().map(|(_, h)| *h).max().unwrap_or(0),
                ),
                Direction::Column => (
                    sizes.iter().map(|(w, _)| *w).max().unwrap_or(0),
                    sizes
                        .iter()
                        .fold(0u16, |acc, (_, h)| acc.saturating_add(*h))
                        .saturating_add(gaps),
                ),
            }
        }
    };

    let width = match element.width {
        Size::Fixed(n) => n,
        _ => content_w.saturating_add(frame_w),
    };
    let height = match element.height {
        Size::Fixed(n) => n,
        _ => content_h.saturating_add(frame_h),
    };
    (width, height)
}

fn clamp_u16(n: usize) -> u16 {
    n.min(u16::MAX as usize) as u16
}

fn resolve(size: Size, measured: u16, available: u16) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => measured.min(available),
    }
}

fn place(element: &Element, rect: Rect, viewport: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };

    let border = element.style.border.size();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let flow: Vec<&Element> = children
        .iter()
        .filter(|c| c.position != Position::Absolute)
        .collect();

    if !flow.is_empty() {
        match element.direction {
            Direction::Row => place_row(element, &flow, inner, viewport, result),
            Direction::Column => place_column(element, &flow, inner, viewport, result),
        }
    }

    for child in children.iter().filter(|c| c.position == Position::Absolute) {
        place_absolute(child, viewport, result);
    }
}

/// Main-axis start offset and extra per-gap spacing for the given justification.
fn distribute(justify: Justify, free: u16, count: usize) -> (u16, u16) {
    match justify {
        Justify::Start => (0, 0),
        Justify::End => (free, 0),
        Justify::Center => (free / 2, 0),
        Justify::SpaceBetween if count > 1 => (0, free / (count as u16 - 1)),
        Justify::SpaceBetween => (0, 0),
    }
}

fn place_row(
    element: &Element,
    flow: &[&Element],
    inner: Rect,
    viewport: Rect,
    result: &mut LayoutResult,
) {
    let sizes: Vec<(u16, u16)> = flow.iter().map(|c| measure(c)).collect();
    let gap_total = element.gap.saturating_mul(flow.len().saturating_sub(1) as u16);
    let fill_count = flow.iter().filter(|c| c.width == Size::Fill).count() as u16;
    let fixed_total = flow
        .iter()
        .zip(&sizes)
        .filter(|(c, _)| c.width != Size::Fill)
        .fold(0u16, |acc, (_, (w, _))| acc.saturating_add(*w));

    let remaining = inner.width.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_each = if fill_count > 0 { remaining / fill_count } else { 0 };
    let used = fixed_total
        .saturating_add(fill_each * fill_count)
        .saturating_add(gap_total);
    let (offset, extra) = distribute(
        element.justify,
        inner.width.saturating_sub(used),
        flow.len(),
    );

    let mut x = inner.x.saturating_add(offset);
    for (child, (w, h)) in flow.iter().zip(&sizes) {
        let width = if child.width == Size::Fill { fill_each } else { *w };
        let width = width.min(inner.right().saturating_sub(x));
        let height = match child.height {
            Size::Fill => inner.height,
            _ => (*h).min(inner.height),
        };
        place(child, Rect::new(x, inner.y, width, height), viewport, result);
        x = x
            .saturating_add(width)
            .saturating_add(element.gap)
            .saturating_add(extra);
    }
}

fn place_column(
    element: &Element,
    flow: &[&Element],
    inner: Rect,
    viewport: Rect,
    result: &mut LayoutResult,
) {
    let sizes: Vec<(u16, u16)> = flow.iter().map(|c| measure(c)).collect();
    let gap_total = element.gap.saturating_mul(flow.len().saturating_sub(1) as u16);
    let fill_count = flow.iter().filter(|c| c.height == Size::Fill).count() as u16;
    let fixed_total = flow
        .iter()
        .zip(&sizes)
        .filter(|(c, _)| c.height != Size::Fill)
        .fold(0u16, |acc, (_, (_, h))| acc.saturating_add(*h));

    let remaining = inner.height.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_each = if fill_count > 0 { remaining / fill_count } else { 0 };
    let used = fixed_total
        .saturating_add(fill_each * fill_count)
        .saturating_add(gap_total);
    let (offset, extra) = distribute(
        element.justify,
        inner.height.saturating_sub(used),
        flow.len(),
    );

    let mut y = inner.y.saturating_add(offset);
    for (child, (w, h)) in flow.iter().zip(&sizes) {
        let height = if child.height == Size::Fill { fill_each } else { *h };
        let height = height.min(inner.bottom().saturating_sub(y));
        let width = match child.width {
            Size::Fill => inner.width,
            _ => (*w).min(inner.width),
        };
        place(child, Rect::new(inner.x, y, width, height), viewport, result);
        y = y
            .saturating_add(height)
            .saturating_add(element.gap)
            .saturating_add(extra);
    }
}

fn place_absolute(element: &Element, viewport: Rect, result: &mut LayoutResult) {
    let (measured_w, measured_h) = measure(element);

    let width = match (element.width, element.left, element.right) {
        (Size::Fixed(n), _, _) => n,
        (Size::Fill, l, r) | (Size::Auto, l @ Some(_), r @ Some(_)) => viewport
            .width
            .saturating_sub(l.unwrap_or(0).saturating_add(r.unwrap_or(0))),
        (Size::Auto, _, _) => measured_w,
    };
    let height = match (element.height, element.top, element.bottom) {
        (Size::Fixed(n), _, _) => n,
        (Size::Fill, t, b) | (Size::Auto, t @ Some(_), b @ Some(_)) => viewport
            .height
            .saturating_sub(t.unwrap_or(0).saturating_add(b.unwrap_or(0))),
        (Size::Auto, _, _) => measured_h,
    };

    let x = match (element.left, element.right) {
        (Some(left), _) => viewport.x.saturating_add(left),
        (None, Some(right)) => viewport.right().saturating_sub(right.saturating_add(width)),
        (None, None) => viewport.x,
    };
    let y = match (element.top, element.bottom) {
        (Some(top), _) => viewport.y.saturating_add(top),
        (None, Some(bottom)) => viewport.bottom().saturating_sub(bottom.saturating_add(height)),
        (None, None) => viewport.y,
    };

    let rect = Rect::new(x, y, width, height).intersect(viewport);
    place(element, rect, viewport, result);
}
