//! Mass measurement for weight events

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

const GRAMS_PER_POUND: f64 = 453.592_37;
const OUNCES_PER_POUND: f64 = 16.0;

/// Unit a mass was recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[default]
    Kilograms,
    Pounds,
    Ounces,
}

impl MassUnit {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lb",
            Self::Ounces => "oz",
        }
    }

    fn grams_per_unit(self) -> f64 {
        match self {
            Self::Kilograms => 1000.0,
            Self::Pounds => GRAMS_PER_POUND,
            Self::Ounces => GRAMS_PER_POUND / OUNCES_PER_POUND,
        }
    }
}

impl FromStr for MassUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(Self::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Pounds),
            "oz" | "ounce" | "ounces" => Ok(Self::Ounces),
            other => Err(Error::InvalidInput(format!("Unknown mass unit: {other}"))),
        }
    }
}

/// A mass value with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    pub value: f64,
    pub unit: MassUnit,
}

impl Mass {
    #[must_use]
    pub const fn new(value: f64, unit: MassUnit) -> Self {
        Self { value, unit }
    }

    /// Express this mass in another unit
    #[must_use]
    pub fn converted(self, unit: MassUnit) -> Self {
        if unit == self.unit {
            return self;
        }
        let grams = self.value * self.unit.grams_per_unit();
        Self::new(grams / unit.grams_per_unit(), unit)
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit.symbol())
    }
}
