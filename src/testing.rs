//! Shared test contracts.

pub mod stage_contract;
