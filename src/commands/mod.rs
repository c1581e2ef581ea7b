//! Command handlers: run a use case, print its result.

pub mod lookup;
pub mod recent;
