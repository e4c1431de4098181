//! Question category definitions

use serde::{Deserialize, Serialize};

/// VCBench reasoning task categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Angle,
    Calendar,
    Clock,
    Cube,
    Direction,
    Location,
    Move,
    Observe,
    Organize,
    Pattern,
    Place,
    Quad,
    Reasoning,
    Rectangular,
    Shape,
    Triangle,
    Weight,
}

impl Category {
    pub fn all() -> Vec<Category> {
        vec![
            Category::Angle,
            Category::Calendar,
            Category::Clock,
            Category::Cube,
            Category::Direction,
            Category::Location,
            Category::Move,
            Category::Observe,
            Category::Organize,
            Category::Pattern,
            Category::Place,
            Category::Quad,
            Category::Reasoning,
            Category::Rectangular,
            Category::Shape,
            Category::Triangle,
            Category::Weight,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Angle => "angle",
            Category::Calendar => "calendar",
            Category::Clock => "clock",
            Category::Cube => "cube",
            Category::Direction => "direction",
            Category::Location => "location",
            Category::Move => "move",
            Category::Observe => "observe",
            Category::Organize => "organize",
            Category::Pattern => "pattern",
            Category::Place => "place",
            Category::Quad => "quad",
            Category::Reasoning => "reasoning",
            Category::Rectangular => "rectangular",
            Category::Shape => "shape",
            Category::Triangle => "triangle",
            Category::Weight => "weight",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Exact, case-sensitive match on the dataset labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown question type: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
