use crate::prelude::Real;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::ops::{Add, Index, Mul};

/// Compartments of the SIRD model. Each one is a mutually exclusive category
/// of the population.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Compartment {
    Susceptible,
    Infected,
    Recovered,
    Dead,
}

impl Compartment {
    pub const CARDINALITY: usize = 4;
    pub const CSV_HEADER: &'static str = "S,I,R,D";
    pub const S: usize = 0;
    pub const I: usize = 1;
    pub const R: usize = 2;
    pub const D: usize = 3;
    pub const ALL: [Compartment; 4] = [
        Compartment::Susceptible,
        Compartment::Infected,
        Compartment::Recovered,
        Compartment::Dead,
    ];

    /// Position of the compartment in the (S, I, R, D) tuple.
    pub fn index(&self) -> usize {
        match self {
            Self::Susceptible => Self::S,
            Self::Infected => Self::I,
            Self::Recovered => Self::R,
            Self::Dead => Self::D,
        }
    }

    /// Lowercase compartment name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Susceptible => "susceptible",
            Self::Infected => "infected",
            Self::Recovered => "recovered",
            Self::Dead => "dead",
        }
    }
}

impl Debug for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Susceptible => write!(f, "S"),
            Self::Infected => write!(f, "I"),
            Self::Recovered => write!(f, "R"),
            Self::Dead => write!(f, "D"),
        }
    }
}

/// Distribution of a normalized population over the four compartments.
///
/// The same type is used for derivatives, in which case components may be
/// negative.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct SIRD {
    pub susceptible: Real,
    pub infected: Real,
    pub recovered: Real,
    pub dead: Real,
}

impl SIRD {
    pub fn new(susceptible: Real, infected: Real, recovered: Real, dead: Real) -> Self {
        SIRD {
            susceptible,
            infected,
            recovered,
            dead,
        }
    }

    /// Sum of all compartments. Stays at 1.0 for a normalized population.
    pub fn total(&self) -> Real {
        self.susceptible + self.infected + self.recovered + self.dead
    }

    /// Components in (S, I, R, D) order.
    pub fn as_array(&self) -> [Real; 4] {
        [self.susceptible, self.infected, self.recovered, self.dead]
    }

    /// Render as a CSV fragment following Compartment::CSV_HEADER.
    pub fn csv(&self) -> String {
        format!(
            "{},{},{},{}",
            self.susceptible, self.infected, self.recovered, self.dead
        )
    }
}

impl From<[Real; 4]> for SIRD {
    fn from([s, i, r, d]: [Real; 4]) -> Self {
        SIRD::new(s, i, r, d)
    }
}

impl Index<Compartment> for SIRD {
    type Output = Real;

    fn index(&self, c: Compartment) -> &Real {
        match c {
            Compartment::Susceptible => &self.susceptible,
            Compartment::Infected => &self.infected,
            Compartment::Recovered => &self.recovered,
            Compartment::Dead => &self.dead,
        }
    }
}

impl Add for SIRD {
    type Output = SIRD;

    fn add(self, other: SIRD) -> SIRD {
        SIRD {
            susceptible: self.susceptible + other.susceptible,
            infected: self.infected + other.infected,
            recovered: self.recovered + other.recovered,
            dead: self.dead + other.dead,
        }
    }
}

impl Mul<Real> for SIRD {
    type Output = SIRD;

    fn mul(self, k: Real) -> SIRD {
        SIRD {
            susceptible: self.susceptible * k,
            infected: self.infected * k,
            recovered: self.recovered * k,
            dead: self.dead * k,
        }
    }
}
