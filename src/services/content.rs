// SPDX-License-Identifier: MIT

//! Static educational content: health articles, daily tips, privacy policy.

use crate::models::HealthInfo;
use rand::Rng;

/// Fixed catalog of public content plus the daily-tip pool.
///
/// Lives in [`crate::AppState`]; the tip picker takes the RNG as an
/// argument so tests can pin the selection.
pub struct ContentLibrary {
    health_info: Vec<HealthInfo>,
    tips: Vec<&'static str>,
    privacy_policy: &'static str,
}

impl Default for ContentLibrary {
    fn default() -> Self {
        Self {
            health_info: health_info_catalog(),
            tips: HEALTH_TIPS.to_vec(),
            privacy_policy: PRIVACY_POLICY,
        }
    }
}

impl ContentLibrary {
    /// The category-tagged article catalog.
    pub fn health_info(&self) -> &[HealthInfo] {
        &self.health_info
    }

    /// The privacy policy document (markdown).
    pub fn privacy_policy(&self) -> &'static str {
        self.privacy_policy
    }

    /// Pick one tip uniformly at random.
    pub fn random_tip<R: Rng>(&self, rng: &mut R) -> &'static str {
        self.tips[rng.gen_range(0..self.tips.len())]
    }

    /// Whether a string is one of the known tips.
    pub fn is_known_tip(&self, tip: &str) -> bool {
        self.tips.contains(&tip)
    }
}

const HEALTH_TIPS: [&str; 5] = [
    "Take a 5-minute stretch break every hour to improve circulation and reduce muscle tension.",
    "Try to include a variety of colorful vegetables in your meals for optimal nutrition.",
    "Practice deep breathing exercises for 5 minutes daily to reduce stress levels.",
    "Set a consistent bedtime and wake-up time to improve your sleep quality.",
    "Replace one sugary drink with water today for better hydration and health.",
];

fn health_info_catalog() -> Vec<HealthInfo> {
    let articles = [
        (
            "h1",
            "Stay Active Daily",
            "Aim for at least 30 minutes of moderate exercise each day. Walking, swimming, \
             or cycling are excellent choices for maintaining cardiovascular health.",
            "lifestyle",
        ),
        (
            "h2",
            "Get Your Flu Shot",
            "Annual flu vaccination is recommended for everyone 6 months and older. It's \
             the best protection against seasonal influenza.",
            "flu",
        ),
        (
            "h3",
            "Prioritize Sleep",
            "Adults need 7-9 hours of quality sleep per night. Good sleep improves immune \
             function, memory, and overall well-being.",
            "lifestyle",
        ),
        (
            "h4",
            "Mental Health Matters",
            "Take time for self-care activities. Practice mindfulness, stay connected with \
             loved ones, and don't hesitate to seek professional help when needed.",
            "mental health",
        ),
        (
            "h5",
            "Stay Hydrated",
            "Drink at least 8 glasses of water daily. Proper hydration supports digestion, \
             skin health, and cognitive function.",
            "lifestyle",
        ),
        (
            "h6",
            "Regular Health Screenings",
            "Schedule regular check-ups and age-appropriate screenings. Early detection is \
             key to preventing serious health conditions.",
            "preventive care",
        ),
    ];

    articles
        .into_iter()
        .map(|(id, title, description, category)| HealthInfo {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        })
        .collect()
}

const PRIVACY_POLICY: &str = r#"# Privacy Policy

Last updated: December 2024

## Introduction

HealthWell ("we", "our", or "us") is committed to protecting your personal information and your right to privacy. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you use our preventive healthcare and wellness portal.

## Information We Collect

We collect information that you provide directly to us, including:
- Personal identification information (name, email address, age, gender)
- Health-related information (wellness goals, medications, allergies)
- Usage data and preferences

## How We Use Your Information

We use the information we collect to:
- Provide and maintain our wellness tracking services
- Personalize your experience and health recommendations
- Communicate with you about your health goals and reminders
- Improve our services and develop new features

## Data Security

We implement appropriate technical and organizational security measures to protect your personal information. However, no method of transmission over the Internet is 100% secure.

## Your Rights

You have the right to:
- Access your personal data
- Correct inaccurate data
- Request deletion of your data
- Withdraw consent at any time

## Contact Us

If you have questions about this Privacy Policy, please contact us at privacy@healthwell.com.
"#;
