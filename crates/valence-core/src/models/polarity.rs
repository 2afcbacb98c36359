//! The binary classification label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A polarity label. Wire form is `"+"` / `"-"`, which is also what the
/// `documents.polarity` column stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Polarity {
    Plus,
    Minus,
}

impl Polarity {
    /// Both labels, in scoring order.
    pub const ALL: [Polarity; 2] = [Polarity::Plus, Polarity::Minus];

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Plus => "+",
            Polarity::Minus => "-",
        }
    }

    /// The other label.
    pub fn opposite(&self) -> Polarity {
        match self {
            Polarity::Plus => Polarity::Minus,
            Polarity::Minus => Polarity::Plus,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Polarity::Plus),
            "-" => Ok(Polarity::Minus),
            other => Err(format!("invalid polarity {other:?}, expected \"+\" or \"-\"")),
        }
    }
}

impl TryFrom<String> for Polarity {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Polarity> for String {
    fn from(p: Polarity) -> String {
        p.as_str().to_string()
    }
}
