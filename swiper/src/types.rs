/// Which way a navigation action pages the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Page delta applied to the current page index.
    pub fn step(self) -> f64 {
        match self {
            Self::Prev => -1.0,
            Self::Next => 1.0,
        }
    }
}
