use core::{fmt, str::FromStr};

/// Cardinal orientation of a ship. `Unknown` marks unparseable input and is
/// never a valid placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bearing {
    North,
    South,
    East,
    West,
    Unknown,
}

impl Bearing {
    /// The four placeable bearings.
    pub const VALID: [Bearing; 4] = [Bearing::North, Bearing::South, Bearing::East, Bearing::West];

    /// Map a direction letter to a bearing. West is `o` (oeste), with `w`
    /// accepted too.
    pub fn from_char(ch: char) -> Self {
        match ch.to_ascii_lowercase() {
            'n' => Bearing::North,
            's' => Bearing::South,
            'e' => Bearing::East,
            'o' | 'w' => Bearing::West,
            _ => Bearing::Unknown,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Bearing::North => 'n',
            Bearing::South => 's',
            Bearing::East => 'e',
            Bearing::West => 'o',
            Bearing::Unknown => 'u',
        }
    }

    pub fn is_valid(self) -> bool {
        self != Bearing::Unknown
    }
}

impl FromStr for Bearing {
    type Err = core::convert::Infallible;

    /// Never fails: unrecognised input parses to `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = [
            ("north", Bearing::North),
            ("norte", Bearing::North),
            ("south", Bearing::South),
            ("sul", Bearing::South),
            ("east", Bearing::East),
            ("este", Bearing::East),
            ("west", Bearing::West),
            ("oeste", Bearing::West),
        ]
        .into_iter()
        .find(|(name, _)| s.eq_ignore_ascii_case(name))
        .map(|(_, bearing)| bearing);
        if let Some(bearing) = word {
            return Ok(bearing);
        }
        let mut chars = s.chars();
        Ok(match (chars.next(), chars.next()) {
            (Some(ch), None) => Bearing::from_char(ch),
            _ => Bearing::Unknown,
        })
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
