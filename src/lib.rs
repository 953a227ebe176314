// SPDX-License-Identifier: MIT

//! HealthWell: patient/provider wellness-tracking portal API
//!
//! This crate provides the backend API for the wellness portal: account
//! registration and login, daily goal logging with history, patient
//! profiles, provider roster views with compliance status, and public
//! health content.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::MemoryStore;
use services::ContentLibrary;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MemoryStore,
    pub content: ContentLibrary,
}
