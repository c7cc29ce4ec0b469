use anyhow::{Context, Result};
use jewel_core::{AlternateAddition, AlternateSkill, JewelError, PassiveSkill, rezip};
use log::info;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

type Rezipper = fn(&Path, &Path) -> Result<(), JewelError>;

/// Source tables and the shape each one is validated against.
pub const SOURCE_TABLES: [(&str, Rezipper); 7] = [
    (
        "alternate_passive_additions.json",
        rezip::<Vec<AlternateAddition>>,
    ),
    ("alternate_passive_skills.json", rezip::<Vec<AlternateSkill>>),
    ("alternate_tree_versions.json", rezip::<Vec<Value>>),
    ("passive_skills.json", rezip::<Vec<PassiveSkill>>),
    ("stats.json", rezip::<Vec<Value>>),
    ("SkillTree.json", rezip::<Map<String, Value>>),
    ("passive_skill.min.json", rezip::<Vec<Value>>),
];

/// Re-encode every source table into `<data_dir>/<name>.gz`.
pub fn rezip_all(source_dir: &Path, data_dir: &Path) -> Result<usize> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("creating data dir {}", data_dir.display()))?;

    for (name, rezipper) in SOURCE_TABLES {
        let source = source_dir.join(name);
        let dest = data_dir.join(format!("{name}.gz"));
        rezipper(&source, &dest).with_context(|| format!("re-zipping {name}"))?;
        info!("wrote {}", dest.display());
    }

    Ok(SOURCE_TABLES.len())
}
