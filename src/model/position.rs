use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Planar coordinate, descriptive only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2.0, 1.0).to_string(), "(2.0, 1.0)");
        assert_eq!(Position::default().to_string(), "(0.0, 0.0)");
    }
}
