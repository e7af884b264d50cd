//! CLI commands that maintain an existing skills repository.

use std::path::PathBuf;

use {
    build_skill_config::SyncDefaults,
    build_skill_skills::{SyncPaths, add_skill, sync},
};

pub fn handle_sync(root: PathBuf, defaults: &SyncDefaults) -> anyhow::Result<()> {
    let report = sync(&SyncPaths::for_root(&root), defaults)?;
    println!("{report}");
    Ok(())
}

pub fn handle_add(
    root: PathBuf,
    name: &str,
    description: &[String],
    defaults: &SyncDefaults,
) -> anyhow::Result<()> {
    let description = description.join(" ");
    let added = add_skill(&root, name, &description, defaults)?;

    println!("Created skills/{}/SKILL.md", added.name);
    println!();
    println!("{}", added.report);
    println!();
    println!("Skill \"{}\" created successfully!", added.name);
    println!();
    println!("Next steps:");
    println!("  1. Edit skills/{}/SKILL.md to add your skill content", added.name);
    println!("  2. Add keywords to the SKILL.md frontmatter for better discoverability");
    Ok(())
}
