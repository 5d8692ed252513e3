//! Discrete-time SIR model with mortality and an optional lockdown window.
//!
//! The population is split into Susceptible, Infected, Recovered and Dead
//! fractions. [`epidemic::transition`] computes the flows between
//! compartments and [`sim::run`] integrates them with unit forward-Euler steps.
pub mod config;
pub mod epidemic;
pub mod error;
pub mod models;
pub mod params;
pub mod prelude;
pub mod sim;
pub mod utils;
