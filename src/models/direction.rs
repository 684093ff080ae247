use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::{FIELD_OF_VIEW, PITCH};

use super::CoordinateRow;

/// Compass direction sampled around each point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Front,
    Right,
    Back,
}

impl Direction {
    /// Fetch order for every row
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Front,
        Direction::Right,
        Direction::Back,
    ];

    /// Camera heading in degrees
    pub fn heading(&self) -> u16 {
        match self {
            Direction::Left => 270,
            Direction::Front => 0,
            Direction::Right => 90,
            Direction::Back => 180,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Front => "front",
            Direction::Right => "right",
            Direction::Back => "back",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a single imagery request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalRequest {
    pub row: CoordinateRow,
    pub direction: Direction,
    pub heading: u16,
    pub fov: u32,
    pub pitch: i32,
}

impl DirectionalRequest {
    pub fn new(row: CoordinateRow, direction: Direction) -> Self {
        Self {
            row,
            direction,
            heading: direction.heading(),
            fov: FIELD_OF_VIEW,
            pitch: PITCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_table_order() {
        let headings: Vec<u16> = Direction::ALL.iter().map(|d| d.heading()).collect();
        assert_eq!(headings, vec![270, 0, 90, 180]);

        let names: Vec<String> = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(names, vec!["left", "front", "right", "back"]);
    }

    #[test]
    fn test_directional_request_defaults() {
        let row = CoordinateRow::new(3, 1.0, 2.0);
        let request = DirectionalRequest::new(row, Direction::Right);
        assert_eq!(request.heading, 90);
        assert_eq!(request.fov, 90);
        assert_eq!(request.pitch, 0);
        assert_eq!(request.row.index, 3);
    }
}
