use anyhow::{Context, Result};
use jewel_core::{
    Conqueror, DumpNaming, DumpReport, DumpTarget, Evaluator, JewelType, PassiveSkill, export_one,
    parse_seed, write_dump,
};
use log::warn;
use std::path::{Path, PathBuf};

/// A validated single-configuration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpRequest {
    pub seed: u32,
    pub jewel_type: JewelType,
    pub conqueror: Conqueror,
}

impl DumpRequest {
    /// Parse the positional arguments, rejecting unknown spellings before
    /// anything is loaded or evaluated.
    pub fn parse(seed: &str, jewel_type: &str, conqueror: &str) -> Result<Self> {
        let seed = parse_seed(seed)?;
        let jewel_type: JewelType = jewel_type.parse()?;
        let conqueror: Conqueror = conqueror.parse()?;

        let range = jewel_type.seed_range();
        if !range.contains(seed) {
            warn!(
                "seed {seed} is outside the {jewel_type} range {}..={}",
                range.real_min(),
                range.real_max()
            );
        }
        if conqueror.jewel_type() != jewel_type {
            warn!(
                "{conqueror} belongs to {}, not {jewel_type}",
                conqueror.jewel_type()
            );
        }

        Ok(Self {
            seed,
            jewel_type,
            conqueror,
        })
    }
}

pub fn run_dump<E: Evaluator>(
    request: DumpRequest,
    evaluator: &E,
    skills: &[PassiveSkill],
    out_dir: &Path,
    naming: DumpNaming,
) -> Result<(DumpReport, PathBuf)> {
    let report = export_one(
        evaluator,
        skills,
        request.seed,
        request.jewel_type,
        request.conqueror,
    );
    let target = DumpTarget {
        dir: out_dir,
        naming,
    };
    let path = write_dump(
        target,
        &report,
        request.seed,
        request.jewel_type,
        request.conqueror,
    )
    .with_context(|| format!("writing dump to {}", out_dir.display()))?;
    Ok((report, path))
}
