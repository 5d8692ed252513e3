use crate::{
    models::{Compartment, SIRD},
    prelude::{Real, Time},
};
use getset::Getters;
use ndarray::Array2;
use paste::paste;
use serde::Serialize;
use std::{io, path::Path};

/// Per-period history of compartment states and effective reproduction
/// numbers, indexed by period 0..T-1.
#[derive(Getters, Debug, Clone, PartialEq, Default)]
#[getset(get = "pub")]
pub struct TimeSeries {
    states: Vec<SIRD>,

    /// Effective reproduction number at each period.
    rt: Vec<Real>,
}

#[derive(Serialize)]
struct Row {
    t: usize,
    #[serde(rename = "S")]
    s: Real,
    #[serde(rename = "I")]
    i: Real,
    #[serde(rename = "R")]
    r: Real,
    #[serde(rename = "D")]
    d: Real,
    #[serde(rename = "Rt")]
    rt: Real,
}

macro_rules! curve {
    ($($name:ident: $c:ident),*) => {
        paste! {
            $(
                #[doc = "Fraction of " $name " population at each period."]
                pub fn [<$name _curve>](&self) -> Vec<Real> {
                    self.curve(Compartment::$c)
                }
            )*
        }
    };
}

impl TimeSeries {
    pub(crate) fn with_capacity(n: usize) -> Self {
        TimeSeries {
            states: Vec::with_capacity(n),
            rt: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, state: SIRD, rt: Real) {
        self.states.push(state);
        self.rt.push(rt);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State and reproduction number at period t.
    pub fn get(&self, t: usize) -> Option<(SIRD, Real)> {
        Some((*self.states.get(t)?, *self.rt.get(t)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SIRD, Real)> + '_ {
        self.states.iter().cloned().zip(self.rt.iter().cloned())
    }

    /// Period indices 0..T-1.
    pub fn time_grid(&self) -> Vec<Time> {
        (0..self.len() as Time).collect()
    }

    /// Values of a single compartment over time.
    pub fn curve(&self, c: Compartment) -> Vec<Real> {
        self.states.iter().map(|s| s[c]).collect()
    }

    curve!(susceptible: Susceptible, infected: Infected, recovered: Recovered, dead: Dead);

    /// Last state of the run, or an empty state for an empty series.
    pub fn final_state(&self) -> SIRD {
        self.states.last().cloned().unwrap_or_default()
    }

    /// Period and value of the maximum infected fraction. Ties resolve to the
    /// earliest period.
    pub fn peak_infections(&self) -> (Time, Real) {
        let mut peak = (0, 0.0);
        for (t, state) in self.states.iter().enumerate() {
            if t == 0 || state.infected > peak.1 {
                peak = (t as Time, state.infected);
            }
        }
        peak
    }

    /// States as a (T x 4) matrix with columns S, I, R, D.
    pub fn to_array(&self) -> Array2<Real> {
        Array2::from_shape_fn((self.len(), Compartment::CARDINALITY), |(t, j)| {
            self.states[t].as_array()[j]
        })
    }

    /// Write the series as CSV with columns t,S,I,R,D,Rt.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> csv::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for (t, (state, rt)) in self.iter().enumerate() {
            wtr.serialize(Row {
                t,
                s: state.susceptible,
                i: state.infected,
                r: state.recovered,
                d: state.dead,
                rt,
            })?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Save CSV data to path.
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> csv::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }

    /// Render the series as a CSV string.
    pub fn render_csv(&self) -> csv::Result<String> {
        let mut data = vec![];
        self.write_csv(&mut data)?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}
