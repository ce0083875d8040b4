use serde::{Deserialize, Serialize};
use std::fmt;

/// Cabin a seat belongs to. Each class has its own independent seat sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FareClass {
    Economy,
    Business,
    First,
}

impl FareClass {
    pub const ALL: [FareClass; 3] = [FareClass::Economy, FareClass::Business, FareClass::First];

    pub fn label(&self) -> &'static str {
        match self {
            FareClass::Economy => "Economy",
            FareClass::Business => "Business",
            FareClass::First => "First",
        }
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&FareClass::Business).unwrap(), "\"BUSINESS\"");
        let parsed: FareClass = serde_json::from_str("\"FIRST\"").unwrap();
        assert_eq!(parsed, FareClass::First);
    }
}
