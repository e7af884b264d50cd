//! The default action: create a new skills repository from the template.

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use {
    build_skill_config::BuildSkillConfig,
    build_skill_scaffold::{
        SkillInput, TemplateValues, ValueOverrides, build,
        git::GitIdentity,
        input::{validate_description, validate_name},
        target_dir_for,
    },
    clap::Args,
};

/// Template tree shipped alongside the binary.
pub const BUNDLED_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/template");

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Skill name.
    #[arg(value_name = "NAME")]
    pub name_arg: Option<String>,
    /// Skill description.
    #[arg(value_name = "DESCRIPTION")]
    pub description_arg: Option<String>,
    /// Brand/organization name (defaults to the skill name).
    #[arg(short, long)]
    pub brand: Option<String>,
    /// Skill name.
    #[arg(short, long)]
    pub name: Option<String>,
    /// Skill description.
    #[arg(short, long)]
    pub description: Option<String>,
    /// License for the skill.
    #[arg(short, long)]
    pub license: Option<String>,
    /// Website URL (e.g. docs) for the skill.
    #[arg(short, long, value_name = "URL")]
    pub website: Option<String>,
    /// GitHub repository (owner/repo).
    #[arg(short, long, value_name = "REPO")]
    pub repository: Option<String>,
    /// Skill category.
    #[arg(short, long)]
    pub category: Option<String>,
    /// Comma-separated keywords.
    #[arg(short, long)]
    pub keywords: Option<String>,
    /// Output directory.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
    /// Template directory (overrides the bundled template).
    #[arg(short, long, value_name = "DIR")]
    pub template: Option<PathBuf>,
    /// Suppress interactive prompts and visual output.
    #[arg(short, long)]
    pub quiet: bool,
    /// Overwrite existing directory.
    #[arg(short, long)]
    pub force: bool,
}

impl CreateArgs {
    fn overrides(&self) -> ValueOverrides {
        ValueOverrides {
            license: self.license.clone(),
            homepage: self.website.clone(),
            repository: self.repository.clone(),
            category: self.category.clone(),
            keywords: self.keywords.clone(),
        }
    }
}

pub async fn handle_create(args: CreateArgs, config: BuildSkillConfig) -> anyhow::Result<()> {
    if !args.quiet {
        println!("build-skill {}\n", env!("CARGO_PKG_VERSION"));
    }

    let identity = GitIdentity::detect().await;
    if !identity.is_complete() && !args.quiet {
        eprintln!("warning: could not detect git user.name or user.email, using placeholders");
    }

    let brand = args.brand.clone();
    let name = args.name.clone().or_else(|| args.name_arg.clone());
    let description = args.description.clone().or_else(|| args.description_arg.clone());

    let input = if args.quiet {
        quiet_input(brand, name, description)?
    } else {
        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        let mut out = std::io::stdout();
        prompt_input(&mut reader, &mut out, brand, name, description)?
    };

    let output_dir = std::path::absolute(
        args.output
            .as_deref()
            .unwrap_or(config.defaults.output_dir.as_path()),
    )?;
    let target_dir = target_dir_for(&output_dir, &input.brand_name);
    let template_dir =
        config.resolve_template_dir(args.template.clone(), PathBuf::from(BUNDLED_TEMPLATE_DIR));
    let values = TemplateValues::new(&input, &identity, &args.overrides(), &config.defaults);

    tracing::debug!(template = ?template_dir, target = ?target_dir, "building repository");
    build(&template_dir, &target_dir, &values, args.force)?;

    print_success(&target_dir, &input, args.quiet);
    Ok(())
}

/// Validate arguments without prompting.
fn quiet_input(
    brand: Option<String>,
    name: Option<String>,
    description: Option<String>,
) -> anyhow::Result<SkillInput> {
    if name.as_deref().is_none_or(str::is_empty) {
        anyhow::bail!("--name is required in quiet mode");
    }
    if description.as_deref().is_none_or(str::is_empty) {
        anyhow::bail!("--description is required in quiet mode");
    }
    Ok(SkillInput::resolve(
        brand.as_deref(),
        name.as_deref(),
        description.as_deref(),
    )?)
}

/// Prompt for every value not already supplied, re-asking until it validates.
fn prompt_input<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    brand: Option<String>,
    name: Option<String>,
    description: Option<String>,
) -> anyhow::Result<SkillInput> {
    let brand = match brand.filter(|b| !b.is_empty()) {
        Some(b) => b,
        None => ask(
            reader,
            out,
            "What is your brand/organization name? (e.g. acme-corp)",
            |v| validate_name(v, "brand name").map(drop),
        )?,
    };
    let name = match name.filter(|n| !n.is_empty()) {
        Some(n) => n,
        None => ask(
            reader,
            out,
            "What is the name of your first skill? (e.g. my-skill)",
            |v| validate_name(v, "name").map(drop),
        )?,
    };
    let description = match description.filter(|d| !d.is_empty()) {
        Some(d) => d,
        None => ask(
            reader,
            out,
            "Describe what this skill does and when to use it:",
            validate_description,
        )?,
    };

    Ok(SkillInput::resolve(
        Some(&brand),
        Some(&name),
        Some(&description),
    )?)
}

fn ask<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    message: &str,
    validate: impl Fn(&str) -> build_skill_scaffold::Result<()>,
) -> anyhow::Result<String> {
    loop {
        writeln!(out, "{message}")?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            anyhow::bail!("operation cancelled");
        }
        let value = line.trim_end_matches(['\r', '\n']);
        match validate(value) {
            Ok(()) => return Ok(value.to_string()),
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

fn print_success(target_dir: &Path, input: &SkillInput, quiet: bool) {
    if quiet {
        println!("{}", target_dir.display());
        return;
    }

    let brand = &input.brand_name;
    let skill = &input.skill_name;
    println!("Created {}", target_dir.display());
    println!();
    println!("Next steps:");
    println!("  cd {brand}-skills");
    println!("  git init");
    println!("  git remote add origin <YOUR_REPO_URL>");
    println!("  git branch -M main");
    println!("  git add .");
    println!("  git commit -m \"Initial release of {skill} skill\"");
    println!("  git push -u origin main");
    println!();
    println!("Edit your skill at:");
    println!("  skills/{skill}/SKILL.md");
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        super::*,
        build_skill_config::ScaffoldDefaults,
        build_skill_skills::{SyncPaths, sync},
        std::io::Cursor,
    };

    #[test]
    fn quiet_mode_requires_name_and_description() {
        let err = quiet_input(None, None, Some("d".into())).unwrap_err();
        assert_eq!(err.to_string(), "--name is required in quiet mode");
        let err = quiet_input(None, Some("n".into()), None).unwrap_err();
        assert_eq!(err.to_string(), "--description is required in quiet mode");

        let input = quiet_input(None, Some("My Skill".into()), Some("d".into())).unwrap();
        assert_eq!(input.brand_name, "my-skill");
    }

    #[test]
    fn prompts_only_for_missing_values_and_retries() {
        let mut reader = Cursor::new("!!!\nAcme Corp\nDoes things\n");
        let mut out = Vec::new();
        let input =
            prompt_input(&mut reader, &mut out, None, Some("pdf".into()), None).unwrap();

        assert_eq!(input.brand_name, "acme-corp");
        assert_eq!(input.skill_name, "pdf");
        assert_eq!(input.skill_description, "Does things");

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("brand/organization").count(), 2);
        assert!(transcript.contains("brand name must contain at least one letter or number"));
        assert!(!transcript.contains("first skill"));
    }

    #[test]
    fn prompting_stops_at_end_of_input() {
        let mut reader = Cursor::new("");
        let mut out = Vec::new();
        let err = prompt_input(&mut reader, &mut out, None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "operation cancelled");
    }

    #[test]
    fn bundled_template_builds_and_syncs() {
        let tmp = tempfile::tempdir().unwrap();
        let input = SkillInput::resolve(Some("acme"), Some("my-skill"), Some("Does X")).unwrap();
        let identity = GitIdentity {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        let overrides = ValueOverrides {
            license: Some("Apache-2.0".into()),
            ..Default::default()
        };
        let values =
            TemplateValues::new(&input, &identity, &overrides, &ScaffoldDefaults::default());
        let target = target_dir_for(tmp.path(), "acme");

        build(Path::new(BUNDLED_TEMPLATE_DIR), &target, &values, false).unwrap();
        assert!(target.join("skills/my-skill/SKILL.md").is_file());
        assert!(!target.join("skills/{Skill_Name}").exists());

        let report = sync(
            &SyncPaths::for_root(&target),
            &build_skill_config::SyncDefaults::default(),
        )
        .unwrap();
        assert_eq!(report.skills, vec!["my-skill"]);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert_eq!(report.descriptors_updated, 0);

        let plugin = std::fs::read_to_string(target.join(".cursor-plugin/plugin.json")).unwrap();
        assert!(plugin.contains("\"license\": \"Apache-2.0\""));
        let readme = std::fs::read_to_string(target.join("README.md")).unwrap();
        assert!(readme.contains("| [my-skill](./skills/my-skill) | Does X |"));
    }
}
