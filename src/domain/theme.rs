use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Named visual themes. Switching only changes presentation.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Darkly,
    #[default]
    Superhero,
    Flatly,
    Solar,
    Cyborg,
    Minty,
}

impl Theme {
    /// The next theme in declaration order, wrapping around.
    pub fn next(self) -> Self {
        let all: Vec<Theme> = Theme::iter().collect();
        let index = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}
