//! Fair values of European call and put options under the
//! Black-Scholes-Merton closed-form model.
//!
//! The pricing engine is a pure function of five market parameters; input
//! parsing and output formatting live in the `cli` workspace member.

pub mod analytic;
pub mod common;
pub mod error;
