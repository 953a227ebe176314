// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod content;
pub mod goal;
pub mod reminder;
pub mod user;

pub use content::HealthInfo;
pub use goal::WellnessGoal;
pub use reminder::Reminder;
pub use user::{User, UserRole};
