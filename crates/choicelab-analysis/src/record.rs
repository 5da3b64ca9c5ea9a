//! Fixed-shape experiment records for the two category families.
//!
//! The ingestion format is a JSON object per experiment with `Doors`,
//! `Total`, and `Directions` entries. Each family is modeled as a struct
//! with one named field per category: missing labels default to zero and
//! unknown labels are ignored during deserialization, so a record can always
//! be constructed from a well-formed file.
//!
//! The trial total is supplied independently and is not required to equal
//! the sum of either family's counts.

use serde::{Deserialize, Serialize};

/// One of the four door choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Door {
    Left,
    Up,
    Right,
    Down,
}

impl Door {
    /// All doors in canonical reporting order.
    pub const ALL: [Door; 4] = [Door::Left, Door::Up, Door::Right, Door::Down];
}

/// One of the eight movement directions, clockwise from Left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    Left,
    #[display("Up-Left")]
    UpLeft,
    Up,
    #[display("Up-Right")]
    UpRight,
    Right,
    #[display("Down-Right")]
    DownRight,
    Down,
    #[display("Down-Left")]
    DownLeft,
}

impl Direction {
    /// All directions in canonical reporting order.
    pub const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
    ];

    /// The axis-aligned subgroup, compared only among itself.
    pub const STRAIGHT: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// The diagonal subgroup, compared only among itself.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Whether this direction belongs to the diagonal subgroup.
    #[must_use]
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownRight | Direction::DownLeft
        )
    }
}

/// Counts for the door family. Field names match the wire labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DoorCounts {
    #[serde(rename = "Left", default)]
    pub left: u64,
    #[serde(rename = "Up", default)]
    pub up: u64,
    #[serde(rename = "Right", default)]
    pub right: u64,
    #[serde(rename = "Down", default)]
    pub down: u64,
}

impl DoorCounts {
    /// Count recorded for one door.
    #[must_use]
    pub fn get(self, door: Door) -> u64 {
        match door {
            Door::Left => self.left,
            Door::Up => self.up,
            Door::Right => self.right,
            Door::Down => self.down,
        }
    }
}

/// Counts for the direction family. Field names match the wire labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectionCounts {
    #[serde(rename = "Left", default)]
    pub left: u64,
    #[serde(rename = "Up-Left", default)]
    pub up_left: u64,
    #[serde(rename = "Up", default)]
    pub up: u64,
    #[serde(rename = "Up-Right", default)]
    pub up_right: u64,
    #[serde(rename = "Right", default)]
    pub right: u64,
    #[serde(rename = "Down-Right", default)]
    pub down_right: u64,
    #[serde(rename = "Down", default)]
    pub down: u64,
    #[serde(rename = "Down-Left", default)]
    pub down_left: u64,
}

impl DirectionCounts {
    /// Count recorded for one direction.
    #[must_use]
    pub fn get(self, direction: Direction) -> u64 {
        match direction {
            Direction::Left => self.left,
            Direction::UpLeft => self.up_left,
            Direction::Up => self.up,
            Direction::UpRight => self.up_right,
            Direction::Right => self.right,
            Direction::DownRight => self.down_right,
            Direction::Down => self.down,
            Direction::DownLeft => self.down_left,
        }
    }
}

/// Wire shape of one experiment entry in a `.dat` file, without its id.
///
/// Every part is optional in the file; whatever is missing defaults to zero
/// counts rather than failing the load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChoiceCounts {
    #[serde(rename = "Doors", default)]
    pub doors: DoorCounts,
    #[serde(rename = "Total", default)]
    pub total: u64,
    #[serde(rename = "Directions", default)]
    pub directions: DirectionCounts,
}

/// One named experiment, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExperimentRecord {
    /// Experiment identifier, e.g. `"3b"`.
    pub id: String,
    /// Trial total used as the probability denominator. Independent of the
    /// per-family count sums.
    pub total: u64,
    /// Door family counts.
    pub doors: DoorCounts,
    /// Direction family counts.
    pub directions: DirectionCounts,
}

impl ExperimentRecord {
    /// Builds a record from an id and the wire-format counts.
    #[must_use]
    pub fn new(id: String, counts: ChoiceCounts) -> Self {
        Self {
            id,
            total: counts.total,
            doors: counts.doors,
            directions: counts.directions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_partition_is_disjoint_and_complete() {
        for direction in Direction::ALL {
            let in_straight = Direction::STRAIGHT.contains(&direction);
            let in_diagonal = Direction::DIAGONAL.contains(&direction);
            assert_ne!(in_straight, in_diagonal, "{direction} must be in exactly one subgroup");
            assert_eq!(direction.is_diagonal(), in_diagonal);
        }
    }

    #[test]
    fn test_labels_use_wire_spelling() {
        assert_eq!(Direction::UpLeft.to_string(), "Up-Left");
        assert_eq!(Direction::DownRight.to_string(), "Down-Right");
        assert_eq!(Door::Left.to_string(), "Left");
    }

    #[test]
    fn test_missing_labels_default_to_zero() {
        let counts: ChoiceCounts =
            serde_json::from_str(r#"{"Doors": {"Left": 3}, "Total": 10}"#).unwrap();
        assert_eq!(counts.doors.left, 3);
        assert_eq!(counts.doors.up, 0);
        assert_eq!(counts.total, 10);
        assert_eq!(counts.directions, DirectionCounts::default());
    }

    #[test]
    fn test_unknown_labels_ignored() {
        let counts: ChoiceCounts = serde_json::from_str(
            r#"{"Doors": {"Left": 3, "Trapdoor": 99}, "Total": 10, "Directions": {"Up-Left": 2}}"#,
        )
        .unwrap();
        assert_eq!(counts.doors.left, 3);
        assert_eq!(counts.directions.up_left, 2);
    }

    #[test]
    fn test_counts_lookup_matches_fields() {
        let doors = DoorCounts { left: 1, up: 2, right: 3, down: 4 };
        for (door, expected) in Door::ALL.into_iter().zip([1, 2, 3, 4]) {
            assert_eq!(doors.get(door), expected);
        }

        let directions = DirectionCounts {
            left: 1,
            up_left: 2,
            up: 3,
            up_right: 4,
            right: 5,
            down_right: 6,
            down: 7,
            down_left: 8,
        };
        for (direction, expected) in Direction::ALL.into_iter().zip(1..=8) {
            assert_eq!(directions.get(direction), expected);
        }
    }

    #[test]
    fn test_total_not_required_to_match_count_sums() {
        let record = ExperimentRecord::new(
            "7".to_owned(),
            ChoiceCounts {
                doors: DoorCounts { left: 9, up: 9, right: 9, down: 9 },
                total: 5,
                directions: DirectionCounts::default(),
            },
        );
        assert_eq!(record.total, 5);
        assert_eq!(record.doors.left, 9);
    }
}
