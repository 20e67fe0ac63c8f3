use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Canonical task identifier type used throughout the crate.
pub type TaskId = String;

/// Canonical column identifier type.
pub type ColumnId = String;

/// Category tag shown as the task's icon on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Design,
    Code,
    Planning,
    Dependency,
    Requirements,
}

impl Default for Category {
    fn default() -> Self {
        Category::Planning
    }
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Design => "design",
            Category::Code => "code",
            Category::Planning => "planning",
            Category::Dependency => "dependency",
            Category::Requirements => "requirements",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "design" => Ok(Category::Design),
            "code" => Ok(Category::Code),
            "planning" => Ok(Category::Planning),
            "dependency" => Ok(Category::Dependency),
            "requirements" => Ok(Category::Requirements),
            other => Err(format!(
                "invalid category: {other} (expected one of design, code, planning, dependency, requirements)"
            )),
        }
    }
}

/// Direction in which ranks of the dependency diagram are laid out.
///
/// - `LeftToRight`: ranks are vertical lanes, edges leave a node on its right
///   side and enter the next node on its left side (default).
/// - `TopToBottom`: ranks are horizontal rows, edges leave from the bottom and
///   enter at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    LeftToRight,
    TopToBottom,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::LeftToRight
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left-to-right" | "lr" => Ok(Orientation::LeftToRight),
            "top-to-bottom" | "tb" => Ok(Orientation::TopToBottom),
            other => Err(format!(
                "invalid orientation: {other} (expected \"left-to-right\" or \"top-to-bottom\")"
            )),
        }
    }
}
