use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Lifestyle,
    Luxury,
    Urban,
    Rural,
    Suburban,
    Coastal,
    Historic,
}

impl Category {
    pub fn all() -> [Category; 7] {
        [
            Self::Lifestyle,
            Self::Luxury,
            Self::Urban,
            Self::Rural,
            Self::Suburban,
            Self::Coastal,
            Self::Historic,
        ]
    }

    pub fn value(&self) -> &str {
        match *self {
            Self::Lifestyle => "Lifestyle",
            Self::Luxury => "Luxury",
            Self::Urban => "Urban",
            Self::Rural => "Rural",
            Self::Suburban => "Suburban",
            Self::Coastal => "Coastal",
            Self::Historic => "Historic",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all().into_iter().find(|c| c.value() == s).ok_or(())
    }
}
