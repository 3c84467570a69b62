//! Service line (schedule tier) types.

use std::fmt;
use std::str::FromStr;

use super::error::LookupError;

/// A Caltrain service line, i.e. which schedule tier a train runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Bullet,
    Limited,
    LimitedA,
    LimitedB,
    Local,
    Special,
}

impl Line {
    /// All known lines.
    pub const ALL: [Line; 6] = [
        Line::Bullet,
        Line::Limited,
        Line::LimitedA,
        Line::LimitedB,
        Line::Local,
        Line::Special,
    ];

    /// The display name, which doubles as the upstream `line_id`.
    pub fn name(self) -> &'static str {
        match self {
            Line::Bullet => "Bullet",
            Line::Limited => "Limited",
            Line::LimitedA => "Limited A",
            Line::LimitedB => "Limited B",
            Line::Local => "Local",
            Line::Special => "Special",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Line {
    type Err = LookupError;

    /// Accepts both the display names and the abbreviated forms the
    /// upstream uses in live feeds (`"Ltd A"`, `"Ltd B"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bullet" => Ok(Line::Bullet),
            "limited" => Ok(Line::Limited),
            "limited a" | "ltd a" => Ok(Line::LimitedA),
            "limited b" | "ltd b" => Ok(Line::LimitedB),
            "local" => Ok(Line::Local),
            "special" => Ok(Line::Special),
            _ => Err(LookupError::UnknownLine(s.to_string())),
        }
    }
}
