use anyhow::{Context, Result};
use jewel_core::{
    Conqueror, Evaluator, JewelType, PassiveSkill, StatFrequencyMap, StatSweep, write_zipped,
};
use std::fs;
use std::path::Path;

/// Options for a full stat sweep.
#[derive(Debug, Clone)]
pub struct FindPlan {
    pub jewel_types: Vec<JewelType>,
    pub conquerors: Vec<Conqueror>,
    pub progress_every: u32,
    pub parallel: bool,
}

pub fn run_find<E: Evaluator + Sync>(
    plan: &FindPlan,
    evaluator: &E,
    skills: &[PassiveSkill],
) -> StatFrequencyMap {
    let sweep = plan
        .conquerors
        .iter()
        .fold(
            StatSweep::new(evaluator, skills).progress_every(plan.progress_every),
            |sweep, &conqueror| sweep.with_conqueror(conqueror),
        );

    if plan.parallel {
        sweep.run_parallel(&plan.jewel_types)
    } else {
        sweep.run(&plan.jewel_types)
    }
}

pub fn write_found(output: &Path, found: &StatFrequencyMap) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output dir {}", parent.display()))?;
    }
    write_zipped(output, found).with_context(|| format!("writing {}", output.display()))
}
