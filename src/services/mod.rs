// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod compliance;
pub mod content;
pub mod password;

pub use compliance::ComplianceStatus;
pub use content::ContentLibrary;
