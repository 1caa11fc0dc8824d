use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Chart-level colors shared by every seat (per-seat fills live on the seats).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPalette {
    pub background: String,
    pub seat_outline: String,
    pub number_color: String,
    pub name_fill: String,
    pub name_outline: String,
    pub name_text_color: String,
    pub line_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant")]
pub enum SeatingLayout {
    #[serde(rename = "singleRing")]
    SingleRing(SingleRingLayout),
    #[serde(rename = "doubleRing")]
    DoubleRing(DoubleRingLayout),
}

impl SeatingLayout {
    pub fn seat_count(&self) -> usize {
        match self {
            Self::SingleRing(layout) => layout.seats.len(),
            Self::DoubleRing(layout) => layout.seats.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleRingLayout {
    pub bounds: Option<Bounds>,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub angle_step: f64,
    pub palette: ChartPalette,
    pub board: Option<BoardLayout>,
    pub info: Option<InfoLabelLayout>,
    pub groups: Vec<GroupBandLayout>,
    pub seats: Vec<SingleRingSeatLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleRingSeatLayout {
    pub number: u32,
    pub name: String,
    /// Seat angle in radians, standard math convention.
    pub angle: f64,
    /// Rotation actually applied to the label (degrees, clockwise).
    pub rotation: f64,
    /// The text-upright rotation derived from the angle, emitted even when the
    /// fixed-horizontal policy leaves it unapplied.
    pub upright_rotation: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleRingLayout {
    pub bounds: Option<Bounds>,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub angle_step: f64,
    pub palette: ChartPalette,
    pub board: Option<BoardLayout>,
    pub info: Option<InfoLabelLayout>,
    pub groups: Vec<GroupBandLayout>,
    pub seats: Vec<DoubleRingSeatLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleRingSeatLayout {
    pub number: u32,
    pub name: String,
    pub angle: f64,
    pub rotation: f64,
    pub upright_rotation: f64,
    /// Center of the numeric label on the inner ring.
    pub number_x: f64,
    pub number_y: f64,
    pub seat_width: f64,
    pub seat_height: f64,
    /// Center of the name label on the outer ring.
    pub name_x: f64,
    pub name_y: f64,
    pub name_width: f64,
    pub name_height: f64,
    pub fill: String,
    pub connector: ConnectorLayout,
}

/// The line joining a seat's number and name labels. Endpoints are inset from
/// the shape boundaries, not the shape centers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorLayout {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Center of the board rectangle.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub fill: String,
    pub outline: String,
    pub text_color: String,
}

/// The participant-count note in the top-right corner of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoLabelLayout {
    pub x: f64,
    pub y: f64,
    pub total: usize,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBandLayout {
    pub label: String,
    pub start: u32,
    pub end: u32,
    pub fill: String,
}

/// The results listing: a fixed-column grid filled column-major with seats
/// sorted by number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsGridLayout {
    pub total: usize,
    pub columns: usize,
    pub rows: usize,
    pub cells: Vec<ResultsCellLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsCellLayout {
    pub number: u32,
    pub name: String,
    pub row: usize,
    pub column: usize,
}
