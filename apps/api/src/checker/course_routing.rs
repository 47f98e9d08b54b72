//! Course platforms and the rule that routes a skill domain to one of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a recommended course lives.
///
/// The model is asked for one of the four canonical labels. Anything else is
/// matched by provider name, and kept verbatim as `Other` when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Coursera,
    Udemy,
    DataCamp,
    LinkedInLearning,
    Other(String),
}

impl Platform {
    pub const CANONICAL: [Platform; 4] = [
        Platform::Coursera,
        Platform::Udemy,
        Platform::DataCamp,
        Platform::LinkedInLearning,
    ];

    pub fn label(&self) -> &str {
        match self {
            Platform::Coursera => "Coursera Professional Certificate",
            Platform::Udemy => "Udemy Best-Seller Course",
            Platform::DataCamp => "DataCamp Career Track",
            Platform::LinkedInLearning => "LinkedIn Learning",
            Platform::Other(label) => label,
        }
    }

    pub fn provider(&self) -> &str {
        match self {
            Platform::Coursera => "Coursera",
            Platform::Udemy => "Udemy",
            Platform::DataCamp => "DataCamp",
            Platform::LinkedInLearning => "LinkedIn Learning",
            Platform::Other(label) => label,
        }
    }
}

/// Lowercased alphanumerics only, so "Linked-In learning" matches "LinkedIn Learning".
fn fold(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl From<String> for Platform {
    /// The provider named first in the label wins, so a label that mentions
    /// another provider in passing still routes to its own.
    fn from(raw: String) -> Self {
        let folded = fold(&raw);

        Platform::CANONICAL
            .into_iter()
            .filter_map(|p| {
                let provider = fold(p.provider());
                folded
                    .find(&provider)
                    .map(|at| (at, std::cmp::Reverse(provider.len()), p))
            })
            .min_by_key(|(at, len, _)| (*at, *len))
            .map(|(_, _, p)| p)
            .unwrap_or_else(|| Platform::Other(raw.trim().to_string()))
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the routing rule: skills of `domain` go to `platform`.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRoute {
    pub domain: &'static str,
    pub platform: Platform,
}

pub fn course_routes() -> [CourseRoute; 4] {
    [
        CourseRoute {
            domain: "Technical/Business",
            platform: Platform::Coursera,
        },
        CourseRoute {
            domain: "Niche/Software",
            platform: Platform::Udemy,
        },
        CourseRoute {
            domain: "Data/AI",
            platform: Platform::DataCamp,
        },
        CourseRoute {
            domain: "General",
            platform: Platform::LinkedInLearning,
        },
    ]
}

/// Renders the routing rule as the prompt states it, e.g.
/// `Technical/Business -> Coursera, ..., General -> LinkedIn Learning`.
pub fn routing_clause() -> String {
    course_routes()
        .iter()
        .map(|route| format!("{} -> {}", route.domain, route.platform.provider()))
        .collect::<Vec<_>>()
        .join(", ")
}
