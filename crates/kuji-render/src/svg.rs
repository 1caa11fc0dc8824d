//! Headless SVG emitter for seating chart layouts.
//!
//! Connectors are drawn first (lowest layer), then seat shapes, then text.

use crate::model::{
    BoardLayout, DoubleRingLayout, InfoLabelLayout, SeatingLayout, SingleRingLayout,
};
use std::fmt::Write;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Overrides the themed background color. `None` uses the palette.
    pub background: Option<String>,
}

pub fn render_svg(layout: &SeatingLayout, options: &SvgRenderOptions) -> String {
    match layout {
        SeatingLayout::SingleRing(layout) => render_single_ring(layout, options),
        SeatingLayout::DoubleRing(layout) => render_double_ring(layout, options),
    }
}

fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn open_svg(out: &mut String, width: f64, height: f64, background: &str) {
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"Arial\">",
        w = fmt_number(width),
        h = fmt_number(height),
    );
    let _ = write!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        fmt_number(width),
        fmt_number(height),
        xml_escape(background),
    );
}

fn push_centered_rect(
    out: &mut String,
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
    fill: &str,
    stroke: &str,
    stroke_width: f64,
) {
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
        fmt_number(cx - width / 2.0),
        fmt_number(cy - height / 2.0),
        fmt_number(width),
        fmt_number(height),
        xml_escape(fill),
        xml_escape(stroke),
        fmt_number(stroke_width),
    );
}

#[allow(clippy::too_many_arguments)]
fn push_text(
    out: &mut String,
    x: f64,
    y: f64,
    text: &str,
    fill: &str,
    size: f64,
    bold: bool,
    anchor: &str,
    rotation: f64,
) {
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    let transform = if rotation != 0.0 {
        format!(
            " transform=\"rotate({} {} {})\"",
            fmt_number(rotation),
            fmt_number(x),
            fmt_number(y),
        )
    } else {
        String::new()
    };
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"{}\" text-anchor=\"{}\" dominant-baseline=\"central\"{}{}>{}</text>",
        fmt_number(x),
        fmt_number(y),
        xml_escape(fill),
        fmt_number(size),
        anchor,
        weight,
        transform,
        xml_escape(text),
    );
}

fn push_board(out: &mut String, board: &BoardLayout) {
    push_centered_rect(
        out,
        board.x,
        board.y,
        board.width,
        board.height,
        &board.fill,
        &board.outline,
        2.0,
    );
    push_text(
        out, board.x, board.y, &board.label, &board.text_color, 16.0, true, "middle", 0.0,
    );
}

fn push_info(out: &mut String, info: &InfoLabelLayout) {
    let label = format!("Total: {}", info.total);
    push_text(out, info.x, info.y, &label, &info.color, 14.0, true, "end", 0.0);
}

fn render_single_ring(layout: &SingleRingLayout, options: &SvgRenderOptions) -> String {
    let background = options
        .background
        .as_deref()
        .unwrap_or(&layout.palette.background);

    let mut out = String::new();
    open_svg(&mut out, layout.width, layout.height, background);
    if let Some(board) = &layout.board {
        push_board(&mut out, board);
    }
    if let Some(info) = &layout.info {
        push_info(&mut out, info);
    }

    for seat in &layout.seats {
        push_centered_rect(
            &mut out,
            seat.x,
            seat.y,
            seat.width,
            seat.height,
            &seat.fill,
            &layout.palette.seat_outline,
            1.5,
        );
        let label = format!("{}. {}", seat.number, seat.name);
        push_text(
            &mut out,
            seat.x,
            seat.y,
            &label,
            &layout.palette.name_text_color,
            11.0,
            false,
            "middle",
            seat.rotation,
        );
    }

    out.push_str("</svg>");
    out
}

fn render_double_ring(layout: &DoubleRingLayout, options: &SvgRenderOptions) -> String {
    let background = options
        .background
        .as_deref()
        .unwrap_or(&layout.palette.background);

    let mut out = String::new();
    open_svg(&mut out, layout.width, layout.height, background);
    if let Some(board) = &layout.board {
        push_board(&mut out, board);
    }
    if let Some(info) = &layout.info {
        push_info(&mut out, info);
    }

    for seat in &layout.seats {
        let c = &seat.connector;
        let _ = write!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
            fmt_number(c.x1),
            fmt_number(c.y1),
            fmt_number(c.x2),
            fmt_number(c.y2),
            xml_escape(&c.color),
        );
    }

    for seat in &layout.seats {
        let _ = write!(
            out,
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.5\"/>",
            fmt_number(seat.number_x),
            fmt_number(seat.number_y),
            fmt_number(seat.seat_width / 2.0),
            fmt_number(seat.seat_height / 2.0),
            xml_escape(&seat.fill),
            xml_escape(&layout.palette.seat_outline),
        );
        push_text(
            &mut out,
            seat.number_x,
            seat.number_y,
            &seat.number.to_string(),
            &layout.palette.number_color,
            12.0,
            true,
            "middle",
            0.0,
        );

        push_centered_rect(
            &mut out,
            seat.name_x,
            seat.name_y,
            seat.name_width,
            seat.name_height,
            &layout.palette.name_fill,
            &layout.palette.name_outline,
            1.5,
        );
        push_text(
            &mut out,
            seat.name_x,
            seat.name_y,
            &seat.name,
            &layout.palette.name_text_color,
            11.0,
            false,
            "middle",
            seat.rotation,
        );
    }

    out.push_str("</svg>");
    out
}
