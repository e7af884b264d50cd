//! Validation of the brand/name/description triple before anything touches disk.

use crate::{
    error::{Error, Result},
    normalize::normalize_name,
};

/// Longest accepted skill description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Validated, normalized user input for a new repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillInput {
    pub brand_name: String,
    pub skill_name: String,
    pub skill_description: String,
}

impl SkillInput {
    /// Validate raw values and normalize the brand and skill names.
    ///
    /// The brand falls back to the skill name when absent. The description is
    /// kept verbatim.
    pub fn resolve(
        brand: Option<&str>,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(Error::MissingField { field: "name" })?;
        let description = description
            .filter(|d| !d.is_empty())
            .ok_or(Error::MissingField {
                field: "description",
            })?;
        let brand = brand.filter(|b| !b.is_empty()).unwrap_or(name);

        let skill_name = validate_name(name, "name")?;
        let brand_name = validate_name(brand, "brand name")?;
        validate_description(description)?;

        Ok(Self {
            brand_name,
            skill_name,
            skill_description: description.to_string(),
        })
    }
}

/// Check that `value` is present and normalizes to a non-empty slug, returning
/// the slug.
pub fn validate_name(value: &str, field: &'static str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::MissingField { field });
    }
    let normalized = normalize_name(value);
    if normalized.is_empty() {
        return Err(Error::EmptyName { field });
    }
    Ok(normalized)
}

pub fn validate_description(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingField {
            field: "description",
        });
    }
    if value.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(Error::DescriptionTooLong {
            max: MAX_DESCRIPTION_LENGTH,
        });
    }
    Ok(())
}
