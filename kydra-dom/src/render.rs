use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, Color, ColorContext, Rgb, Style};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);

/// An element queued for painting, with its stacking order and inherited foreground.
struct RenderItem<'a> {
    element: &'a Element,
    style: Style,
    z_index: i16,
    tree_order: usize,
    inherited_fg: Option<Color>,
}

/// Paint `root` into `buf` using a layout previously computed for it.
///
/// Elements are painted in z-index order; equal z-index preserves tree order,
/// so later siblings paint over earlier ones. Text without an explicit
/// foreground inherits the nearest ancestor's.
pub fn render_to_buffer(
    root: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    color_ctx: &ColorContext,
) {
    let mut items = Vec::new();
    collect(root, &mut items, root.z_index, None);

    // Stable sort keeps tree order for equal z_index.
    items.sort_by_key(|item| (item.z_index, item.tree_order));
    log::trace!("render: {} elements", items.len());

    for item in &items {
        let Some(rect) = layout.get(&item.element.id) else {
            continue;
        };
        let rect = rect.intersect(Rect::from_size(buf.width(), buf.height()));
        if rect.is_empty() {
            continue;
        }

        if let Some(bg) = &item.style.background {
            let (rgb, alpha) = color_ctx.resolve_rgb(bg);
            fill_rect(buf, rect, rgb, alpha);
        }

        let fg = item
            .style
            .foreground
            .as_ref()
            .or(item.inherited_fg.as_ref())
            .map(|c| color_ctx.resolve_rgb(c).0)
            .unwrap_or(DEFAULT_FG);

        let border_fg = item
            .style
            .border_color
            .as_ref()
            .map(|c| color_ctx.resolve_rgb(c).0)
            .unwrap_or(fg);
        render_border(item.style.border, rect, border_fg, buf);

        if let Content::Text(text) = &item.element.content {
            render_text(text, item.element, &item.style, rect, fg, buf);
        }
    }
}

fn collect<'a>(
    element: &'a Element,
    list: &mut Vec<RenderItem<'a>>,
    parent_z: i16,
    parent_fg: Option<Color>,
) {
    let style = element.effective_style();
    let z_index = element.z_index.max(parent_z);
    let own_fg = style.foreground.clone().or(parent_fg.clone());

    list.push(RenderItem {
        element,
        style,
        z_index,
        tree_order: list.len(),
        inherited_fg: parent_fg,
    });

    if let Content::Children(children) = &element.content {
        for child in children {
            collect(child, list, z_index, own_fg.clone());
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb, alpha: f32) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = if alpha >= 1.0 { bg } else { bg.blend(cell.bg, alpha) };
                cell.char = ' ';
                cell.wide_continuation = false;
            }
        }
    }
}

fn render_text(text: &str, element: &Element, style: &Style, rect: Rect, fg: Rgb, buf: &mut Buffer) {
    let border = style.border.size();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );
    let available = inner.width as usize;

    for (row, line) in text.split('\n').enumerate() {
        let y = inner.y.saturating_add(row as u16);
        if y >= inner.bottom() {
            break;
        }

        let line = truncate_to_width(line, available);
        let offset = align_offset(display_width(&line), available, element.text_align);
        let mut x = inner.x.saturating_add(offset as u16);

        for ch in line.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if x.saturating_add(width) > inner.right() {
                break;
            }
            // Text keeps whatever background is already painted underneath.
            let bg = buf.get(x, y).map(|c| c.bg).unwrap_or_default();
            buf.set(
                x,
                y,
                Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style.text_style),
            );
            if width == 2 {
                if let Some(cell) = buf.get_mut(x + 1, y) {
                    cell.char = ' ';
                    cell.wide_continuation = true;
                }
            }
            x += width;
        }
    }
}

fn render_border(border: Border, rect: Rect, fg: Rgb, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Dotted => ('┌', '┐', '└', '┘', '┄', '┆'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        cell.wide_continuation = false;
    }
}
