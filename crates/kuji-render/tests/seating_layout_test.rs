use kuji_core::{Assignment, Engine, Seat};
use kuji_render::model::SeatingLayout;
use kuji_render::{LabelOrientation, LayoutOptions, RingVariant, layout_seating};
use std::f64::consts::{FRAC_PI_2, TAU};

fn effective_config() -> serde_json::Value {
    Engine::new().effective_config().as_value().clone()
}

fn assignment_of(n: usize) -> Assignment {
    Assignment::from_order((1..=n).map(|i| format!("Name{i}")))
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn double_ring_spaces_seats_at_equal_angles_from_the_top() {
    let cfg = effective_config();
    let out = layout_seating(&assignment_of(8), &cfg, &LayoutOptions::default()).unwrap();
    let SeatingLayout::DoubleRing(layout) = out else {
        panic!("expected double-ring layout");
    };

    approx(layout.start_angle, FRAC_PI_2);
    approx(layout.angle_step, TAU / 8.0);
    for (i, seat) in layout.seats.iter().enumerate() {
        approx(seat.angle, FRAC_PI_2 - (i as f64) * (TAU / 8.0));

        let inner = ((seat.number_x - layout.center_x).powi(2)
            + (seat.number_y - layout.center_y).powi(2))
        .sqrt();
        let outer = ((seat.name_x - layout.center_x).powi(2)
            + (seat.name_y - layout.center_y).powi(2))
        .sqrt();
        approx(inner, layout.inner_radius);
        approx(outer, layout.outer_radius);
    }
}

#[test]
fn layout_is_deterministic_for_identical_inputs() {
    let cfg = effective_config();
    let assignment = assignment_of(12);
    let options = LayoutOptions::default();

    let first = layout_seating(&assignment, &cfg, &options).unwrap();
    let second = layout_seating(&assignment, &cfg, &options).unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn connector_endpoints_are_inset_between_the_two_rings() {
    let cfg = effective_config();
    let out = layout_seating(&assignment_of(10), &cfg, &LayoutOptions::default()).unwrap();
    let SeatingLayout::DoubleRing(layout) = out else {
        panic!("expected double-ring layout");
    };

    for seat in &layout.seats {
        let c = &seat.connector;
        let start = ((c.x1 - layout.center_x).powi(2) + (c.y1 - layout.center_y).powi(2)).sqrt();
        let end = ((c.x2 - layout.center_x).powi(2) + (c.y2 - layout.center_y).powi(2)).sqrt();
        assert!(start > layout.inner_radius, "start must clear the number circle");
        assert!(end < layout.outer_radius, "end must stop at the name box");
        assert!(start < end);
    }
}

#[test]
fn seats_take_their_group_color_from_the_partition() {
    let cfg = effective_config();
    let out = layout_seating(&assignment_of(43), &cfg, &LayoutOptions::default()).unwrap();
    let SeatingLayout::DoubleRing(layout) = out else {
        panic!("expected double-ring layout");
    };

    // Default group size 6: seat 1 is in group A, seat 43 in the short group H.
    let seat1 = layout.seats.iter().find(|s| s.number == 1).unwrap();
    let seat43 = layout.seats.iter().find(|s| s.number == 43).unwrap();
    assert_eq!(seat1.fill, "#FFB6C1");
    assert_eq!(seat43.fill, "#FFE4B5");
    assert_eq!(seat1.connector.color, "#FFB6C1");
    assert_eq!(layout.groups.len(), 8);
}

#[test]
fn hiding_groups_falls_back_to_the_neutral_fill() {
    let cfg = effective_config();
    let options = LayoutOptions {
        show_groups: false,
        ..LayoutOptions::default()
    };
    let out = layout_seating(&assignment_of(43), &cfg, &options).unwrap();
    let SeatingLayout::DoubleRing(layout) = out else {
        panic!("expected double-ring layout");
    };

    assert!(layout.groups.is_empty());
    for seat in &layout.seats {
        assert_eq!(seat.fill, "#E3F2FD");
        assert_eq!(seat.connector.color, "#1976D2");
    }
}

#[test]
fn upright_orientation_flips_labels_in_the_lower_half() {
    let cfg = effective_config();
    let options = LayoutOptions {
        variant: RingVariant::SingleRing,
        orientation: LabelOrientation::Upright,
        ..LayoutOptions::default()
    };
    let out = layout_seating(&assignment_of(8), &cfg, &options).unwrap();
    let SeatingLayout::SingleRing(layout) = out else {
        panic!("expected single-ring layout");
    };

    // Seat index 3 sits at compass 135 degrees, strictly inside (90, 270),
    // so the upright policy flips it to 315.
    approx(layout.seats[0].rotation, 0.0);
    approx(layout.seats[3].rotation, 315.0);
}

#[test]
fn fixed_horizontal_keeps_rotation_zero_but_still_emits_the_upright_value() {
    let cfg = effective_config();
    let options = LayoutOptions {
        variant: RingVariant::SingleRing,
        ..LayoutOptions::default()
    };
    let out = layout_seating(&assignment_of(8), &cfg, &options).unwrap();
    let SeatingLayout::SingleRing(layout) = out else {
        panic!("expected single-ring layout");
    };

    for seat in &layout.seats {
        approx(seat.rotation, 0.0);
    }
    approx(layout.seats[3].upright_rotation, 315.0);
}

#[test]
fn single_ring_places_seats_on_the_configured_radius() {
    let cfg = effective_config();
    let options = LayoutOptions {
        variant: RingVariant::SingleRing,
        ..LayoutOptions::default()
    };
    let out = layout_seating(&assignment_of(6), &cfg, &options).unwrap();
    let SeatingLayout::SingleRing(layout) = out else {
        panic!("expected single-ring layout");
    };

    for seat in &layout.seats {
        let dist =
            ((seat.x - layout.center_x).powi(2) + (seat.y - layout.center_y).powi(2)).sqrt();
        approx(dist, layout.radius);
    }

    let board = layout.board.as_ref().unwrap();
    approx(board.y, layout.center_y - layout.radius - 100.0);
    approx(board.x, layout.center_x);
}

#[test]
fn name_boxes_scale_with_name_length_and_clamp_in_double_ring_mode() {
    let cfg = effective_config();
    let assignment = Assignment::from_order(["Jo", "Verylongname"]);

    let out = layout_seating(&assignment, &cfg, &LayoutOptions::default()).unwrap();
    let SeatingLayout::DoubleRing(layout) = out else {
        panic!("expected double-ring layout");
    };
    // 2 chars * 11 + 10 padding = 32; 12 chars would be 142 but clamps to 80.
    approx(layout.seats[0].name_width, 32.0);
    approx(layout.seats[1].name_width, 80.0);

    let options = LayoutOptions {
        variant: RingVariant::SingleRing,
        ..LayoutOptions::default()
    };
    let out = layout_seating(&assignment, &cfg, &options).unwrap();
    let SeatingLayout::SingleRing(layout) = out else {
        panic!("expected single-ring layout");
    };
    approx(layout.seats[1].width, 142.0);
}

#[test]
fn empty_assignment_yields_an_empty_chart() {
    let cfg = effective_config();
    let assignment = Assignment { seats: Vec::new() };
    let out = layout_seating(&assignment, &cfg, &LayoutOptions::default()).unwrap();
    let SeatingLayout::DoubleRing(layout) = out else {
        panic!("expected double-ring layout");
    };

    assert!(layout.seats.is_empty());
    assert!(layout.board.is_none());
    assert!(layout.info.is_none());
}

#[test]
fn non_contiguous_seat_numbers_are_rejected() {
    let cfg = effective_config();
    let assignment = Assignment {
        seats: vec![
            Seat {
                number: 1,
                name: "Kim".to_string(),
            },
            Seat {
                number: 3,
                name: "Lee".to_string(),
            },
        ],
    };
    let err = layout_seating(&assignment, &cfg, &LayoutOptions::default()).unwrap_err();
    assert!(matches!(err, kuji_render::Error::InvalidAssignment { .. }));
}
