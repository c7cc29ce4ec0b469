use anyhow::{Context, Result};
use jewel_core::{PassiveSkill, PassiveSkillCatalog, TableEvaluator, read_zipped};
use log::{debug, warn};
use std::path::Path;

pub const PASSIVES_FILE: &str = "passive_skills.json.gz";
pub const EVALUATIONS_FILE: &str = "evaluations.json.gz";

/// Static data a sweep or dump works from, loaded once per run.
#[derive(Debug, Clone)]
pub struct DumpAssets {
    pub skills: Vec<PassiveSkill>,
    pub evaluator: TableEvaluator,
}

impl DumpAssets {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let passives_path = data_dir.join(PASSIVES_FILE);
        let catalog: PassiveSkillCatalog = read_zipped(&passives_path)
            .with_context(|| format!("loading passive skills from {}", passives_path.display()))?;
        let skills = catalog.applicable();
        if skills.is_empty() {
            warn!("{} has no applicable passive skills", passives_path.display());
        }

        let evaluations_path = data_dir.join(EVALUATIONS_FILE);
        let evaluator = TableEvaluator::load(&evaluations_path).with_context(|| {
            format!("loading evaluations from {}", evaluations_path.display())
        })?;

        debug!(
            "loaded {} applicable skills and {} evaluations",
            skills.len(),
            evaluator.len()
        );
        Ok(Self { skills, evaluator })
    }
}
