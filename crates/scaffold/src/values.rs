//! Placeholder values and literal `{Token}` substitution.

use build_skill_config::ScaffoldDefaults;

use crate::{git::GitIdentity, input::SkillInput};

/// Directory name that is renamed to the concrete skill name.
pub const SKILL_NAME_PLACEHOLDER: &str = "{Skill_Name}";

/// The closed set of values substituted into a template tree.
///
/// Values must not themselves contain placeholder tokens; the result of
/// substitution is unspecified if they do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues {
    pub brand_name: String,
    pub skill_name: String,
    pub skill_description: String,
    pub creator_name: String,
    pub creator_email: String,
    pub license: String,
    pub homepage: String,
    pub repository: String,
    pub category: String,
    /// Keyword list serialized as a JSON array, e.g. `["ai","agent"]`.
    pub keywords: String,
}

/// Optional per-invocation values that take precedence over config defaults.
#[derive(Debug, Clone, Default)]
pub struct ValueOverrides {
    pub license: Option<String>,
    pub homepage: Option<String>,
    pub repository: Option<String>,
    pub category: Option<String>,
    /// Comma-separated.
    pub keywords: Option<String>,
}

impl TemplateValues {
    pub fn new(
        input: &SkillInput,
        identity: &GitIdentity,
        overrides: &ValueOverrides,
        defaults: &ScaffoldDefaults,
    ) -> Self {
        let pick = |value: &Option<String>, fallback: &str| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        let fallback_or = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };

        let repository = overrides
            .repository
            .clone()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| format!("{}/agent-skills", input.brand_name));

        Self {
            brand_name: input.brand_name.clone(),
            skill_name: input.skill_name.clone(),
            skill_description: input.skill_description.clone(),
            creator_name: fallback_or(&identity.name, &defaults.creator_name),
            creator_email: fallback_or(&identity.email, &defaults.creator_email),
            license: pick(&overrides.license, &defaults.license),
            homepage: pick(&overrides.homepage, &defaults.homepage),
            repository,
            category: pick(&overrides.category, &defaults.category),
            keywords: keywords_json(&pick(&overrides.keywords, &defaults.keywords)),
        }
    }

    /// `(key, value)` pairs; each key appears in templates as `{key}`.
    pub fn entries(&self) -> [(&str, &str); 10] {
        [
            ("Brand_Name", self.brand_name.as_str()),
            ("Skill_Name", self.skill_name.as_str()),
            ("Skill_Description", self.skill_description.as_str()),
            ("Creator_Name", self.creator_name.as_str()),
            ("Creator_Email", self.creator_email.as_str()),
            ("Skill_License", self.license.as_str()),
            ("Skill_Homepage", self.homepage.as_str()),
            ("Skill_Repository", self.repository.as_str()),
            ("Skill_Category", self.category.as_str()),
            ("Skill_Keywords", self.keywords.as_str()),
        ]
    }

    pub fn substitute(&self, content: &str) -> String {
        substitute(content, self.entries())
    }
}

/// Replace every literal `{key}` in `content` with its value.
///
/// Braces are plain characters, not pattern syntax. Tokens without a matching
/// key are left untouched.
pub fn substitute<'a>(
    content: &str,
    values: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut out = content.to_string();
    for (key, value) in values {
        let token = format!("{{{key}}}");
        if out.contains(&token) {
            out = out.replace(&token, value);
        }
    }
    out
}

/// Split a comma-separated keyword list and serialize it as a JSON array.
fn keywords_json(raw: &str) -> String {
    let keywords: Vec<serde_json::Value> = raw
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| serde_json::Value::String(k.to_string()))
        .collect();
    serde_json::Value::Array(keywords).to_string()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> SkillInput {
        SkillInput {
            brand_name: "acme".into(),
            skill_name: "my-skill".into(),
            skill_description: "An awesome skill".into(),
        }
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = substitute("{Name} said hello to {Name}", [("Name", "Alice")]);
        assert_eq!(out, "Alice said hello to Alice");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let out = substitute("Hello {Name}, {Unknown}", [("Name", "World")]);
        assert_eq!(out, "Hello World, {Unknown}");
    }

    #[test]
    fn braces_are_literal() {
        let out = substitute("{a.b} {a*b} {ab}", [("a.b", "dot"), ("a*b", "star")]);
        assert_eq!(out, "dot star {ab}");
    }

    #[test]
    fn value_with_dollar_signs_is_inserted_verbatim() {
        let out = substitute("price: {Cost}", [("Cost", "$1 and $0")]);
        assert_eq!(out, "price: $1 and $0");
    }

    #[test]
    fn substitution_is_idempotent() {
        let values = TemplateValues::new(
            &input(),
            &GitIdentity::default(),
            &ValueOverrides::default(),
            &ScaffoldDefaults::default(),
        );
        let content = "# {Brand_Name}\n{Skill_Name}: {Skill_Description} {Other}\n";
        let once = values.substitute(content);
        assert_eq!(values.substitute(&once), once);
        assert_eq!(once, "# acme\nmy-skill: An awesome skill {Other}\n");
    }

    #[test]
    fn defaults_fill_missing_values() {
        let values = TemplateValues::new(
            &input(),
            &GitIdentity::default(),
            &ValueOverrides::default(),
            &ScaffoldDefaults::default(),
        );
        assert_eq!(values.creator_name, "Your Name");
        assert_eq!(values.creator_email, "your.email@example.com");
        assert_eq!(values.license, "MIT");
        assert_eq!(values.homepage, "https://example.com");
        assert_eq!(values.repository, "acme/agent-skills");
        assert_eq!(values.category, "general");
        assert_eq!(values.keywords, r#"["ai","agent","skill"]"#);
    }

    #[test]
    fn overrides_and_identity_win() {
        let identity = GitIdentity {
            name: "Ada".into(),
            email: "ada@example.org".into(),
        };
        let overrides = ValueOverrides {
            license: Some("Apache-2.0".into()),
            homepage: Some("https://acme.dev".into()),
            repository: Some("acme/skills".into()),
            category: Some("devtools".into()),
            keywords: Some(" pdf ,, docs ".into()),
        };
        let values =
            TemplateValues::new(&input(), &identity, &overrides, &ScaffoldDefaults::default());
        assert_eq!(values.creator_name, "Ada");
        assert_eq!(values.creator_email, "ada@example.org");
        assert_eq!(values.license, "Apache-2.0");
        assert_eq!(values.homepage, "https://acme.dev");
        assert_eq!(values.repository, "acme/skills");
        assert_eq!(values.category, "devtools");
        assert_eq!(values.keywords, r#"["pdf","docs"]"#);
    }

    #[test]
    fn entries_cover_every_key() {
        let values = TemplateValues::default();
        let keys: Vec<&str> = values.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), 10);
        assert!(keys.contains(&"Skill_Category"));
        assert!(keys.contains(&"Skill_Keywords"));
    }
}
