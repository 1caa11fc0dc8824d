#![forbid(unsafe_code)]

pub mod model;
pub mod results;
pub mod seating;
pub mod svg;

use kuji_core::Assignment;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid assignment: {message}")]
    InvalidAssignment { message: String },
    #[error("layout JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two supported chart shapes to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingVariant {
    /// One ring: each seat is a single label at one radius.
    SingleRing,
    /// Numbers on the inner ring, names on the outer ring, joined by connectors.
    #[default]
    DoubleRing,
}

/// Label rotation policy.
///
/// Every layout computes a text-upright rotation per seat; this only controls
/// which rotation the renderer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelOrientation {
    /// Every label is emitted with rotation 0.
    #[default]
    FixedHorizontal,
    /// Labels follow the seat angle, flipped by 180 degrees between 90 and 270
    /// so text never reads upside down.
    Upright,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub variant: RingVariant,
    pub orientation: LabelOrientation,
    /// When false, every seat uses the neutral fill and no group bands are emitted.
    pub show_groups: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            variant: RingVariant::DoubleRing,
            orientation: LabelOrientation::FixedHorizontal,
            show_groups: true,
        }
    }
}

/// Lays out a seating chart. Pure and deterministic: the same assignment,
/// config and options always produce identical geometry.
pub fn layout_seating(
    assignment: &Assignment,
    effective_config: &Value,
    options: &LayoutOptions,
) -> Result<model::SeatingLayout> {
    match options.variant {
        RingVariant::SingleRing => Ok(model::SeatingLayout::SingleRing(
            seating::layout_single_ring(assignment, effective_config, options)?,
        )),
        RingVariant::DoubleRing => Ok(model::SeatingLayout::DoubleRing(
            seating::layout_double_ring(assignment, effective_config, options)?,
        )),
    }
}
