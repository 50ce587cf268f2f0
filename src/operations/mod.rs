//! Operations module for generating the settings bundle
//!
//! This module provides the high-level workflow that coordinates:
//! - Resolver: License resolution from a package cache or GitHub (from resolver module)
//! - Bundle: Property list generation (from bundle module)
//! - Localization: Per-language strings files (from localization module)

pub mod generate;

pub use generate::{GenerateConfig, GenerateOperation, GenerateSummary};
