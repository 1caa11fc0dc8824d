//! Circular seating chart layout.
//!
//! Seats are distributed at equal angular steps around a circle, starting at
//! 12 o'clock (pi/2 in standard math convention) and proceeding clockwise as
//! the index increases.

use crate::model::{
    BoardLayout, Bounds, ChartPalette, ConnectorLayout, DoubleRingLayout, DoubleRingSeatLayout,
    GroupBandLayout, InfoLabelLayout, SingleRingLayout, SingleRingSeatLayout,
};
use crate::{Error, LabelOrientation, LayoutOptions, Result};
use kuji_core::Assignment;
use kuji_core::groups::{self, Group};
use serde_json::Value;
use std::f64::consts::{FRAC_PI_2, TAU};

pub(crate) fn config_f64(cfg: &Value, path: &[&str], default: f64) -> f64 {
    let mut cur = cfg;
    for key in path {
        cur = match cur.get(*key) {
            Some(v) => v,
            None => return default,
        };
    }
    cur.as_f64()
        .or_else(|| cur.as_i64().map(|n| n as f64))
        .or_else(|| cur.as_u64().map(|n| n as f64))
        .unwrap_or(default)
}

pub(crate) fn config_i64(cfg: &Value, path: &[&str]) -> Option<i64> {
    let mut cur = cfg;
    for key in path {
        cur = cur.get(*key)?;
    }
    cur.as_i64()
}

pub(crate) fn config_str(cfg: &Value, path: &[&str], default: &str) -> String {
    let mut cur = cfg;
    for key in path {
        cur = match cur.get(*key) {
            Some(v) => v,
            None => return default.to_string(),
        };
    }
    cur.as_str().unwrap_or(default).to_string()
}

fn polar_xy(center_x: f64, center_y: f64, radius: f64, angle: f64) -> (f64, f64) {
    (
        center_x + radius * angle.cos(),
        center_y - radius * angle.sin(),
    )
}

/// Converts a math-convention angle to a compass-style rotation in degrees
/// (0 at 12 o'clock, increasing clockwise, normalized to 0..360).
fn compass_rotation(angle: f64) -> f64 {
    (90.0 - angle.to_degrees()).rem_euclid(360.0)
}

/// The text-upright rotation: rotations strictly between 90 and 270 degrees
/// would render text upside down, so flip them by 180.
fn upright_rotation(angle: f64) -> f64 {
    let deg = compass_rotation(angle);
    if deg > 90.0 && deg < 270.0 {
        (deg + 180.0) % 360.0
    } else {
        deg
    }
}

fn applied_rotation(angle: f64, orientation: LabelOrientation) -> f64 {
    match orientation {
        LabelOrientation::FixedHorizontal => 0.0,
        LabelOrientation::Upright => upright_rotation(angle),
    }
}

fn validate_assignment(assignment: &Assignment) -> Result<()> {
    let n = assignment.seats.len();
    let mut seen = vec![false; n];
    for seat in &assignment.seats {
        let number = seat.number as usize;
        if number < 1 || number > n || seen[number - 1] {
            return Err(Error::InvalidAssignment {
                message: format!(
                    "seat numbers must cover 1..={n} exactly once (saw {})",
                    seat.number
                ),
            });
        }
        seen[number - 1] = true;
    }
    Ok(())
}

fn palette(cfg: &Value) -> ChartPalette {
    ChartPalette {
        background: config_str(cfg, &["theme", "background"], "#FFFFFF"),
        seat_outline: config_str(cfg, &["theme", "seatOutline"], "#1976D2"),
        number_color: config_str(cfg, &["theme", "numberColor"], "#1976D2"),
        name_fill: config_str(cfg, &["theme", "nameFill"], "#FFFFFF"),
        name_outline: config_str(cfg, &["theme", "nameOutline"], "#1976D2"),
        name_text_color: config_str(cfg, &["theme", "nameTextColor"], "#000000"),
        line_color: config_str(cfg, &["theme", "lineColor"], "#1976D2"),
    }
}

fn group_color(cfg: &Value, label: &str, neutral: &str) -> String {
    config_str(cfg, &["theme", "groupColors", label], neutral)
}

fn group_bands(cfg: &Value, active_groups: &[Group], neutral: &str) -> Vec<GroupBandLayout> {
    active_groups
        .iter()
        .map(|g| GroupBandLayout {
            label: g.label.clone(),
            start: g.start,
            end: g.end,
            fill: group_color(cfg, &g.label, neutral),
        })
        .collect()
}

fn seat_fill(
    cfg: &Value,
    active_groups: &[Group],
    number: u32,
    show_groups: bool,
    neutral: &str,
) -> (String, Option<String>) {
    if !show_groups {
        return (neutral.to_string(), None);
    }
    match groups::group_for(active_groups, number) {
        Some(group) => {
            let color = group_color(cfg, &group.label, neutral);
            (color.clone(), Some(color))
        }
        None => (neutral.to_string(), None),
    }
}

fn board_layout(cfg: &Value, center_x: f64, center_y: f64, top_radius: f64) -> BoardLayout {
    BoardLayout {
        x: center_x,
        y: center_y - top_radius - config_f64(cfg, &["seating", "boardGap"], 100.0),
        width: config_f64(cfg, &["seating", "boardWidth"], 200.0),
        height: config_f64(cfg, &["seating", "boardHeight"], 40.0),
        label: config_str(cfg, &["seating", "boardLabel"], "Board"),
        fill: config_str(cfg, &["theme", "boardFill"], "#2E7D32"),
        outline: config_str(cfg, &["theme", "boardOutline"], "#81C784"),
        text_color: config_str(cfg, &["theme", "boardTextColor"], "#FFFFFF"),
    }
}

fn info_layout(cfg: &Value, width: f64, total: usize) -> InfoLabelLayout {
    InfoLabelLayout {
        x: width - 20.0,
        y: 20.0,
        total,
        color: config_str(cfg, &["theme", "infoTextColor"], "#1B5E20"),
    }
}

fn active_groups(cfg: &Value, total: usize, show_groups: bool) -> Vec<Group> {
    if !show_groups {
        return Vec::new();
    }
    groups::resolve_groups(total as u32, config_i64(cfg, &["seating", "groupSize"]))
}

pub fn layout_single_ring(
    assignment: &Assignment,
    effective_config: &Value,
    options: &LayoutOptions,
) -> Result<SingleRingLayout> {
    validate_assignment(assignment)?;

    let cfg = effective_config;
    let width = config_f64(cfg, &["seating", "canvasWidth"], 1000.0);
    let height = config_f64(cfg, &["seating", "canvasHeight"], 900.0);
    let center_x = width / 2.0;
    let center_y = height / 2.0 + config_f64(cfg, &["seating", "centerYOffset"], 50.0);
    let radius = config_f64(cfg, &["seating", "radius"], 270.0);
    let neutral = config_str(cfg, &["theme", "neutralFill"], "#E3F2FD");

    let total = assignment.seats.len();
    let mut layout = SingleRingLayout {
        bounds: Some(Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: width,
            max_y: height,
        }),
        width,
        height,
        center_x,
        center_y,
        radius,
        start_angle: FRAC_PI_2,
        angle_step: 0.0,
        palette: palette(cfg),
        board: None,
        info: None,
        groups: Vec::new(),
        seats: Vec::new(),
    };
    if total == 0 {
        return Ok(layout);
    }

    let groups = active_groups(cfg, total, options.show_groups);
    layout.angle_step = TAU / (total as f64);
    layout.board = Some(board_layout(cfg, center_x, center_y, radius));
    layout.info = Some(info_layout(cfg, width, total));
    layout.groups = group_bands(cfg, &groups, &neutral);

    let per_char = config_f64(cfg, &["seating", "perCharWidth"], 11.0);
    let padding = config_f64(cfg, &["seating", "namePadding"], 10.0);
    let name_height = config_f64(cfg, &["seating", "nameHeight"], 26.0);

    for (i, seat) in assignment.seats.iter().enumerate() {
        let angle = FRAC_PI_2 - (i as f64) * layout.angle_step;
        let (x, y) = polar_xy(center_x, center_y, radius, angle);
        let (fill, _) = seat_fill(cfg, &groups, seat.number, options.show_groups, &neutral);
        layout.seats.push(SingleRingSeatLayout {
            number: seat.number,
            name: seat.name.clone(),
            angle,
            rotation: applied_rotation(angle, options.orientation),
            upright_rotation: upright_rotation(angle),
            x,
            y,
            width: (seat.name.chars().count() as f64) * per_char + padding,
            height: name_height,
            fill,
        });
    }

    Ok(layout)
}

pub fn layout_double_ring(
    assignment: &Assignment,
    effective_config: &Value,
    options: &LayoutOptions,
) -> Result<DoubleRingLayout> {
    validate_assignment(assignment)?;

    let cfg = effective_config;
    let width = config_f64(cfg, &["seating", "canvasWidth"], 1000.0);
    let height = config_f64(cfg, &["seating", "canvasHeight"], 900.0);
    let center_x = width / 2.0;
    let center_y = height / 2.0 + config_f64(cfg, &["seating", "centerYOffset"], 50.0);
    let inner_radius = config_f64(cfg, &["seating", "innerRadius"], 250.0);
    let outer_radius = config_f64(cfg, &["seating", "outerRadius"], 290.0);
    let neutral = config_str(cfg, &["theme", "neutralFill"], "#E3F2FD");
    let chart_palette = palette(cfg);

    let total = assignment.seats.len();
    let mut layout = DoubleRingLayout {
        bounds: Some(Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: width,
            max_y: height,
        }),
        width,
        height,
        center_x,
        center_y,
        inner_radius,
        outer_radius,
        start_angle: FRAC_PI_2,
        angle_step: 0.0,
        palette: chart_palette.clone(),
        board: None,
        info: None,
        groups: Vec::new(),
        seats: Vec::new(),
    };
    if total == 0 {
        return Ok(layout);
    }

    let groups = active_groups(cfg, total, options.show_groups);
    layout.angle_step = TAU / (total as f64);
    // The board is anchored off the inner ring even though name labels
    // extend further out.
    layout.board = Some(board_layout(cfg, center_x, center_y, inner_radius));
    layout.info = Some(info_layout(cfg, width, total));
    layout.groups = group_bands(cfg, &groups, &neutral);

    let seat_width = config_f64(cfg, &["seating", "seatWidth"], 28.0);
    let seat_height = config_f64(cfg, &["seating", "seatHeight"], 28.0);
    let name_max_width = config_f64(cfg, &["seating", "nameWidth"], 80.0);
    let name_height = config_f64(cfg, &["seating", "nameHeight"], 26.0);
    let per_char = config_f64(cfg, &["seating", "perCharWidth"], 11.0);
    let padding = config_f64(cfg, &["seating", "namePadding"], 10.0);

    for (i, seat) in assignment.seats.iter().enumerate() {
        let angle = FRAC_PI_2 - (i as f64) * layout.angle_step;
        let (number_x, number_y) = polar_xy(center_x, center_y, inner_radius, angle);
        let (name_x, name_y) = polar_xy(center_x, center_y, outer_radius, angle);
        let (fill, group_line) =
            seat_fill(cfg, &groups, seat.number, options.show_groups, &neutral);

        // Inset the connector endpoints so the line touches the shape edges
        // rather than their centers.
        let direction = (name_y - number_y).atan2(name_x - number_x);
        let connector = ConnectorLayout {
            x1: number_x + (seat_width / 2.0) * direction.cos(),
            y1: number_y + (seat_width / 2.0) * direction.sin(),
            x2: name_x - (name_height / 2.0) * direction.cos(),
            y2: name_y - (name_height / 2.0) * direction.sin(),
            color: group_line.unwrap_or_else(|| chart_palette.line_color.clone()),
        };

        layout.seats.push(DoubleRingSeatLayout {
            number: seat.number,
            name: seat.name.clone(),
            angle,
            rotation: applied_rotation(angle, options.orientation),
            upright_rotation: upright_rotation(angle),
            number_x,
            number_y,
            seat_width,
            seat_height,
            name_x,
            name_y,
            name_width: ((seat.name.chars().count() as f64) * per_char + padding)
                .min(name_max_width),
            name_height,
            fill,
            connector,
        });
    }

    Ok(layout)
}
