//! Shared test utilities.
//!
//! - `fixtures`: deterministic trees and disk points
//! - `helpers`: assertions over laid-out trees

pub mod fixtures;
pub mod helpers;
