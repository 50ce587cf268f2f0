//! Command implementations for the acknowledgements CLI

pub mod generate;
