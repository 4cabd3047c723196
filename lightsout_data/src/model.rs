use serde::{Deserialize, Serialize};

/// Number of lamps on the start gantry.
pub const LIGHT_COUNT: usize = 5;

/// Milliseconds on the session clock.
pub type Millis = f64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "Normal")]
    Normal,
    #[serde(alias = "Pro", alias = "pro")]
    Hard,
    #[default]
    #[serde(alias = "Chaos")]
    Chaos,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Normal, Difficulty::Hard, Difficulty::Chaos];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Chaos => "chaos",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Difficulty::Normal),
            "hard" | "pro" => Ok(Difficulty::Hard),
            "chaos" => Ok(Difficulty::Chaos),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}
