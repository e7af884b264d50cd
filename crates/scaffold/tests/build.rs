#![allow(clippy::unwrap_used, clippy::expect_used)]

use {
    build_skill_scaffold::{SKILL_NAME_PLACEHOLDER, TemplateValues, build, target_dir_for},
    walkdir::WalkDir,
};

#[test]
fn materializes_skill_directory_from_template() {
    let tmp = tempfile::tempdir().unwrap();
    let template = tmp.path().join("template");
    std::fs::create_dir_all(template.join(SKILL_NAME_PLACEHOLDER)).unwrap();
    std::fs::write(
        template.join(SKILL_NAME_PLACEHOLDER).join("SKILL.md"),
        "name: {Skill_Name}\ndescription: {Skill_Description}",
    )
    .unwrap();
    std::fs::write(template.join("README.md"), "# {Brand_Name} Skills").unwrap();

    let values = TemplateValues {
        brand_name: "acme".into(),
        skill_name: "my-skill".into(),
        skill_description: "An awesome skill".into(),
        ..Default::default()
    };
    let target = target_dir_for(tmp.path(), &values.brand_name);
    build(&template, &target, &values, false).unwrap();

    assert_eq!(
        std::fs::read_to_string(target.join("my-skill/SKILL.md")).unwrap(),
        "name: my-skill\ndescription: An awesome skill"
    );
    assert_eq!(
        std::fs::read_to_string(target.join("README.md")).unwrap(),
        "# acme Skills"
    );
    let leftover = WalkDir::new(&target)
        .into_iter()
        .filter_map(Result::ok)
        .any(|e| e.file_name() == SKILL_NAME_PLACEHOLDER);
    assert!(!leftover);
    assert_eq!(target, tmp.path().join("acme-skills"));
}

#[test]
fn rebuilding_with_force_is_repeatable() {
    let tmp = tempfile::tempdir().unwrap();
    let template = tmp.path().join("template");
    std::fs::create_dir_all(template.join("skills").join(SKILL_NAME_PLACEHOLDER)).unwrap();
    std::fs::write(
        template.join("skills").join(SKILL_NAME_PLACEHOLDER).join("SKILL.md"),
        "---\nname: {Skill_Name}\n---\n",
    )
    .unwrap();

    let target = tmp.path().join("out");
    let first = TemplateValues {
        skill_name: "first".into(),
        ..Default::default()
    };
    build(&template, &target, &first, false).unwrap();
    assert!(target.join("skills/first/SKILL.md").is_file());

    let second = TemplateValues {
        skill_name: "second".into(),
        ..Default::default()
    };
    build(&template, &target, &second, true).unwrap();
    assert!(target.join("skills/second/SKILL.md").is_file());
    assert!(!target.join("skills/first").exists());
}
