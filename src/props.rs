//! Validated inputs for the chai components.
//!
//! Every prop is checked once, at the boundary of the component that takes
//! it. Past that point rendering cannot fail on a bad quantity.

use std::fmt::{self, Display, Formatter};

use crate::{RenderError, Result};

/// Number of people a recipe is made for. Non-negative and finite.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Drinkers(f64);

impl Drinkers {
    #[inline(always)]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Derived amounts, recomputed on every call.
    pub fn quantities(self) -> Quantities {
        let half = 0.5 * self.0;
        Quantities {
            water_cups: self.0,
            tea_spoons: self.0,
            spice_spoons: half,
            milk_cups: half,
        }
    }
}

impl TryFrom<f64> for Drinkers {
    type Error = RenderError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(RenderError::invalid("drinkers", format!("{value} is not finite")));
        }
        if value < 0.0 {
            return Err(RenderError::invalid("drinkers", format!("{value} is negative")));
        }
        // abs folds -0.0 into 0.0
        Ok(Drinkers(value.abs()))
    }
}

impl From<u32> for Drinkers {
    fn from(value: u32) -> Self {
        Drinkers(value as f64)
    }
}

impl Display for Drinkers {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quantities {
    pub water_cups: f64,
    pub tea_spoons: f64,
    pub spice_spoons: f64,
    pub milk_cups: f64,
}

/// Position of a guest, used as the cup's label.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Guest(u32);

impl Guest {
    #[inline(always)]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Guest {
    fn from(value: u32) -> Self {
        Guest(value)
    }
}

impl TryFrom<i64> for Guest {
    type Error = RenderError;

    fn try_from(value: i64) -> Result<Self> {
        non_negative_u32("guest", value).map(Guest)
    }
}

impl Display for Guest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many cups a collection renders.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct GuestCount(u32);

impl GuestCount {
    #[inline(always)]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Guests numbered `1..=count`, in ascending order.
    pub fn guests(self) -> impl Iterator<Item = Guest> {
        (1..=self.0).map(Guest)
    }
}

impl From<u32> for GuestCount {
    fn from(value: u32) -> Self {
        GuestCount(value)
    }
}

impl TryFrom<i64> for GuestCount {
    type Error = RenderError;

    fn try_from(value: i64) -> Result<Self> {
        non_negative_u32("count", value).map(GuestCount)
    }
}

impl TryFrom<f64> for GuestCount {
    type Error = RenderError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(RenderError::invalid("count", format!("{value} is not finite")));
        }
        if value.fract() != 0.0 {
            return Err(RenderError::invalid("count", format!("{value} is not an integer")));
        }
        if value < 0.0 {
            return Err(RenderError::invalid("count", format!("{value} is negative")));
        }
        if value > u32::MAX as f64 {
            return Err(RenderError::invalid("count", format!("{value} is too large")));
        }
        Ok(GuestCount(value as u32))
    }
}

fn non_negative_u32(name: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(RenderError::invalid(name, format!("{value} is negative")));
    }
    u32::try_from(value).map_err(|_| RenderError::invalid(name, format!("{value} is too large")))
}
