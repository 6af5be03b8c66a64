use serde::{Deserialize, Serialize};

/// Spending category assigned to a receipt. The set is closed: every record
/// carries exactly one of these values, with `Other` as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Grocery,
    Restaurant,
    Drogerie,
    GasStation,
    Clothing,
    Electronics,
    Other,
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Grocery => write!(f, "grocery"),
            Category::Restaurant => write!(f, "restaurant"),
            Category::Drogerie => write!(f, "drogerie"),
            Category::GasStation => write!(f, "gas_station"),
            Category::Clothing => write!(f, "clothing"),
            Category::Electronics => write!(f, "electronics"),
            Category::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grocery" => Ok(Category::Grocery),
            "restaurant" => Ok(Category::Restaurant),
            "drogerie" => Ok(Category::Drogerie),
            "gas_station" => Ok(Category::GasStation),
            "clothing" => Ok(Category::Clothing),
            "electronics" => Ok(Category::Electronics),
            "other" => Ok(Category::Other),
            other => Err(format!("Unknown category: '{other}'")),
        }
    }
}
