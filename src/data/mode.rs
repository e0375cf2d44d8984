use serde::{Deserialize, Serialize};

/// Which arrangement the elements are heading toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Loose cloud inside the scatter sphere
    #[default]
    Scattered,
    /// Assembled cone-shaped tree
    Arranged,
}

impl Mode {
    pub fn from_arranged(arranged: bool) -> Self {
        if arranged {
            Mode::Arranged
        } else {
            Mode::Scattered
        }
    }

    pub fn is_arranged(self) -> bool {
        self == Mode::Arranged
    }

    pub fn toggle(self) -> Self {
        match self {
            Mode::Scattered => Mode::Arranged,
            Mode::Arranged => Mode::Scattered,
        }
    }
}
