use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product line stocked by the machine.
///
/// The set is closed: catalog keys that don't name one of these variants are
/// rejected by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    Soda,
    DietSoda,
    Chips,
    Cookie,
    Sandwich,
    Wrap,
    CandyBar,
    PopTart,
    Water,
    FruitJuice,
    SportsDrink,
    Gum,
}

impl Selection {
    /// Every selection in catalog order.
    pub const ALL: [Selection; 12] = [
        Selection::Soda,
        Selection::DietSoda,
        Selection::Chips,
        Selection::Cookie,
        Selection::Sandwich,
        Selection::Wrap,
        Selection::CandyBar,
        Selection::PopTart,
        Selection::Water,
        Selection::FruitJuice,
        Selection::SportsDrink,
        Selection::Gum,
    ];

    /// The catalog key for this selection.
    pub fn key(&self) -> &'static str {
        match self {
            Selection::Soda => "soda",
            Selection::DietSoda => "dietSoda",
            Selection::Chips => "chips",
            Selection::Cookie => "cookie",
            Selection::Sandwich => "sandwich",
            Selection::Wrap => "wrap",
            Selection::CandyBar => "candyBar",
            Selection::PopTart => "popTart",
            Selection::Water => "water",
            Selection::FruitJuice => "fruitJuice",
            Selection::SportsDrink => "sportsDrink",
            Selection::Gum => "gum",
        }
    }

    /// The kebab-case spelling of the catalog key, e.g. `diet-soda`.
    pub fn alias(&self) -> &'static str {
        match self {
            Selection::DietSoda => "diet-soda",
            Selection::CandyBar => "candy-bar",
            Selection::PopTart => "pop-tart",
            Selection::FruitJuice => "fruit-juice",
            Selection::SportsDrink => "sports-drink",
            other => other.key(),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string names no selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSelection(pub String);

impl fmt::Display for UnknownSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown selection '{}'", self.0)
    }
}

impl std::error::Error for UnknownSelection {}

impl FromStr for Selection {
    type Err = UnknownSelection;

    /// Accepts exactly the camelCase catalog key or its kebab-case alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selection::ALL
            .into_iter()
            .find(|selection| selection.key() == s || selection.alias() == s)
            .ok_or_else(|| UnknownSelection(s.to_string()))
    }
}
