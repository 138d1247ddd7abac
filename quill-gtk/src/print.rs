use gtk4::pango;
use gtk4::prelude::*;

use std::cell::Cell;
use std::rc::Rc;

use quill_core::fonts::FontSpec;

use crate::window::dialogs;
use crate::window::WindowState;

/// Print the document through a `PrintOperation`: paginate by layout lines
/// in begin-print, draw each page by clipping and translating the full
/// layout in draw-page. The document's font carries over to paper.
pub(crate) fn print_document(state: &Rc<WindowState>) {
    let (text, title, font) = {
        let doc = state.document.borrow();
        (doc.text().to_string(), doc.title(), doc.font().clone())
    };

    let op = gtk4::PrintOperation::new();
    op.set_job_name(&title);
    op.set_unit(gtk4::Unit::Points);

    let lines_per_page = Rc::new(Cell::new(1usize));

    {
        let text = text.clone();
        let font = font.clone();
        let lines_per_page = lines_per_page.clone();
        op.connect_begin_print(move |op, context| {
            let layout = layout_for_context(context, &font, &text);
            let line_count = (layout.line_count().max(1)) as usize;
            let line_height = layout_line_height(&layout, line_count);
            let per_page = ((context.height() / line_height).floor() as usize).max(1);
            lines_per_page.set(per_page);
            op.set_n_pages(line_count.div_ceil(per_page) as i32);
        });
    }

    {
        let lines_per_page = lines_per_page.clone();
        op.connect_draw_page(move |_op, context, page_nr| {
            let cr = context.cairo_context();
            let layout = layout_for_context(context, &font, &text);
            let line_count = (layout.line_count().max(1)) as usize;
            let line_height = layout_line_height(&layout, line_count);
            let page_height = lines_per_page.get() as f64 * line_height;

            // Clip to one page worth of lines and slide the layout up so
            // this page's slice lands inside the clip.
            let _ = cr.save();
            cr.rectangle(0.0, 0.0, context.width(), page_height);
            cr.clip();
            cr.translate(0.0, -(page_nr as f64) * page_height);
            pangocairo::functions::show_layout(&cr, &layout);
            let _ = cr.restore();
        });
    }

    match op.run(
        gtk4::PrintOperationAction::PrintDialog,
        Some(&state.window),
    ) {
        Ok(gtk4::PrintOperationResult::Error) | Err(_) => {
            log::warn!("Print of \"{}\" failed", title);
            dialogs::message_dialog(
                Some(state.window.upcast_ref()),
                "Print",
                "Could not print.",
            );
        }
        Ok(_) => {}
    }
}

fn layout_for_context(
    context: &gtk4::PrintContext,
    font: &FontSpec,
    text: &str,
) -> pango::Layout {
    let cr = context.cairo_context();
    let layout = pangocairo::functions::create_layout(&cr);

    let mut desc = pango::FontDescription::new();
    desc.set_family(&font.family);
    desc.set_size(font.size * pango::SCALE);
    desc.set_weight(if font.bold {
        pango::Weight::Bold
    } else {
        pango::Weight::Normal
    });
    desc.set_style(if font.italic {
        pango::Style::Italic
    } else {
        pango::Style::Normal
    });
    layout.set_font_description(Some(&desc));
    layout.set_width((context.width() * pango::SCALE as f64) as i32);
    layout.set_wrap(pango::WrapMode::WordChar);
    layout.set_text(text);
    layout
}

/// Average line height in points. The document is a single uniform font,
/// so every line is the same height.
fn layout_line_height(layout: &pango::Layout, line_count: usize) -> f64 {
    let (_, total_height) = layout.size();
    let height = total_height as f64 / pango::SCALE as f64 / line_count as f64;
    if height > 0.0 {
        height
    } else {
        12.0
    }
}
