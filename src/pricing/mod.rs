mod calculator;
pub(crate) mod registry;

pub(crate) use calculator::{CalculationResult, calculate};
