//! Learning resources — templated search links for each missing skill.
//!
//! Pure string templating, no network call. A real search backend can replace
//! `generate_resources` without changing its signature.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Only the first few skills get links, to keep the list readable.
pub const MAX_SKILLS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Documentation,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

/// Two resources per skill (docs, then video), in skill order.
pub fn generate_resources(skills: &[String]) -> Vec<LearningResource> {
    skills
        .iter()
        .take(MAX_SKILLS)
        .flat_map(|skill| {
            [
                LearningResource {
                    title: format!("Learn {skill} - Official Docs"),
                    url: format!(
                        "https://www.google.com/search?q={}+documentation",
                        encode_query(skill)
                    ),
                    kind: ResourceKind::Documentation,
                },
                LearningResource {
                    title: format!("{skill} Crash Course"),
                    url: format!(
                        "https://www.youtube.com/results?search_query={}+tutorial",
                        encode_query(skill)
                    ),
                    kind: ResourceKind::Video,
                },
            ]
        })
        .collect()
}

fn encode_query(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_resources_per_skill_docs_first() {
        let resources = generate_resources(&skills(&["Rust"]));
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].kind, ResourceKind::Documentation);
        assert_eq!(resources[0].title, "Learn Rust - Official Docs");
        assert_eq!(
            resources[0].url,
            "https://www.google.com/search?q=Rust+documentation"
        );
        assert_eq!(resources[1].kind, ResourceKind::Video);
        assert_eq!(resources[1].title, "Rust Crash Course");
        assert_eq!(
            resources[1].url,
            "https://www.youtube.com/results?search_query=Rust+tutorial"
        );
    }

    #[test]
    fn test_only_first_five_skills_are_used() {
        let resources =
            generate_resources(&skills(&["s1", "s2", "s3", "s4", "s5", "s6", "s7"]));
        assert_eq!(resources.len(), 2 * MAX_SKILLS);
        assert!(resources.iter().all(|r| !r.title.contains("s6")));
    }

    #[test]
    fn test_skill_order_is_kept() {
        let resources = generate_resources(&skills(&["Go", "Kafka"]));
        assert!(resources[0].title.contains("Go"));
        assert!(resources[2].title.contains("Kafka"));
    }

    #[test]
    fn test_skill_is_query_encoded() {
        let resources = generate_resources(&skills(&["C++ & CI/CD"]));
        assert_eq!(
            resources[0].url,
            "https://www.google.com/search?q=C%2B%2B+%26+CI%2FCD+documentation"
        );
        assert_eq!(resources[0].title, "Learn C++ & CI/CD - Official Docs");
    }

    #[test]
    fn test_empty_skills_yield_no_resources() {
        assert!(generate_resources(&[]).is_empty());
    }

    #[test]
    fn test_kind_serializes_under_type_key() {
        let json = serde_json::to_value(&generate_resources(&skills(&["SQL"]))[1]).unwrap();
        assert_eq!(json["type"], "Video");
    }
}
