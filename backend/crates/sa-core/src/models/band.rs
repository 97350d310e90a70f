use serde::Serialize;

/// Classification of a frame bin relative to the carrier window at `L/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    InBand,
    OutOfBand,
}

impl Band {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InBand => "in_band",
            Self::OutOfBand => "out_of_band",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
