//! Group banding: contiguous sub-ranges of seat numbers sharing a display color.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Labels available for dynamically partitioned groups. Seats past the last
/// label belong to no group and render with the neutral fill.
pub const GROUP_LABELS: [&str; 11] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"];

/// An inclusive band of seat numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub label: String,
    pub start: u32,
    pub end: u32,
}

impl Group {
    pub fn contains(&self, number: u32) -> bool {
        (self.start..=self.end).contains(&number)
    }
}

/// The built-in seven-group table over seats 1-43. Label `A` covers the
/// highest numbers.
pub fn fixed_groups() -> Vec<Group> {
    [
        ("A", 37, 43),
        ("B", 31, 36),
        ("C", 25, 30),
        ("D", 19, 24),
        ("E", 13, 18),
        ("F", 7, 12),
        ("G", 1, 6),
    ]
    .into_iter()
    .map(|(label, start, end)| Group {
        label: label.to_string(),
        start,
        end,
    })
    .collect()
}

/// Partitions `1..=total_seats` into chunks of `group_size`, labeled `A, B, C, ...`
/// in order. The last group may be short. At most [`GROUP_LABELS`] groups are
/// produced; remaining seats stay ungrouped.
pub fn groups_from_size(total_seats: u32, group_size: u32) -> Result<Vec<Group>> {
    if group_size < 1 {
        return Err(Error::InvalidGroupSize {
            size: i64::from(group_size),
        });
    }

    let mut groups = Vec::new();
    let mut labels = GROUP_LABELS.iter();
    let mut start = 1u32;
    while start <= total_seats {
        let Some(label) = labels.next() else {
            break;
        };
        let end = (start + group_size - 1).min(total_seats);
        groups.push(Group {
            label: (*label).to_string(),
            start,
            end,
        });
        start = end + 1;
    }
    Ok(groups)
}

/// Resolves the active group table from a configured size. An absent size
/// falls back to the fixed table silently; a present-but-invalid one warns
/// first.
pub fn resolve_groups(total_seats: u32, requested_size: Option<i64>) -> Vec<Group> {
    match requested_size {
        None => fixed_groups(),
        Some(size) if size >= 1 => groups_from_size(total_seats, size as u32)
            .unwrap_or_else(|err| {
                tracing::warn!("group partition failed ({err}); using the fixed group table");
                fixed_groups()
            }),
        Some(size) => {
            tracing::warn!(
                requested = size,
                "invalid group size; falling back to the fixed group table"
            );
            fixed_groups()
        }
    }
}

/// The first group whose range contains `number`, if any.
pub fn group_for(groups: &[Group], number: u32) -> Option<&Group> {
    groups.iter().find(|g| g.contains(number))
}
