// SPDX-License-Identifier: MIT

//! Static educational content models.

use serde::{Deserialize, Serialize};

/// A category-tagged health information article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
}
