//! Per-configuration export of every result a single jewel produces.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::data::{AdditionInfo, AlternateSkill, PassiveSkill};
use crate::error::JewelError;
use crate::evaluator::Evaluator;
use crate::jewel::{Conqueror, JewelType};

/// Results of one seed/jewel/conqueror, keyed by passive skill index.
///
/// Each section is omitted from the serialized form when empty, so a jewel
/// that changes nothing serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpReport {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub alternate: BTreeMap<u32, AlternateSkill>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additive: BTreeMap<u32, Vec<AdditionInfo>>,
}

impl DumpReport {
    #[must_use]
    pub fn alternate_count(&self) -> usize {
        self.alternate.len()
    }

    #[must_use]
    pub fn additive_count(&self) -> usize {
        self.additive.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alternate.is_empty() && self.additive.is_empty()
    }
}

/// Evaluate every non-keystone skill for one jewel configuration.
pub fn export_one<E: Evaluator>(
    evaluator: &E,
    skills: &[PassiveSkill],
    seed: u32,
    jewel_type: JewelType,
    conqueror: Conqueror,
) -> DumpReport {
    let mut report = DumpReport::default();

    for skill in skills.iter().filter(|skill| !skill.is_keystone) {
        let result = evaluator.evaluate(skill.index, seed, jewel_type, conqueror);

        if let Some(alternate) = result.alternate_skill {
            report.alternate.insert(skill.index, alternate);
        }
        if !result.addition_infos.is_empty() {
            report.additive.insert(skill.index, result.addition_infos);
        }
    }

    report
}

/// How dump files are named inside the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpNaming {
    /// `<JewelType>_<seed>.json.gz`. Dumps of the same seed with different
    /// conquerors overwrite each other.
    #[default]
    SeedOnly,
    /// `<JewelType>_<seed>_<Conqueror>.json.gz`.
    WithConqueror,
}

impl DumpNaming {
    #[must_use]
    pub fn file_name(self, jewel_type: JewelType, seed: u32, conqueror: Conqueror) -> String {
        match self {
            DumpNaming::SeedOnly => format!("{jewel_type}_{seed}.json.gz"),
            DumpNaming::WithConqueror => format!("{jewel_type}_{seed}_{conqueror}.json.gz"),
        }
    }

    /// Warning logged when a dump replaces an existing file.
    #[must_use]
    pub fn overwrite_warning(self, path: &Path) -> String {
        match self {
            DumpNaming::SeedOnly => format!(
                "overwriting {} (file names do not include the conqueror)",
                path.display()
            ),
            DumpNaming::WithConqueror => format!("overwriting {}", path.display()),
        }
    }
}

/// Where a dump goes and what it is called.
#[derive(Debug, Clone, Copy)]
pub struct DumpTarget<'a> {
    pub dir: &'a Path,
    pub naming: DumpNaming,
}

impl DumpTarget<'_> {
    #[must_use]
    pub fn path_for(&self, jewel_type: JewelType, seed: u32, conqueror: Conqueror) -> PathBuf {
        self.dir
            .join(self.naming.file_name(jewel_type, seed, conqueror))
    }
}

/// Write `report` into `target`, returning the file path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the report cannot
/// be written.
pub fn write_dump(
    target: DumpTarget<'_>,
    report: &DumpReport,
    seed: u32,
    jewel_type: JewelType,
    conqueror: Conqueror,
) -> Result<PathBuf, JewelError> {
    fs::create_dir_all(target.dir).map_err(|err| JewelError::io(target.dir, err))?;

    let path = target.path_for(jewel_type, seed, conqueror);
    if path.exists() {
        warn!("{}", target.naming.overwrite_warning(&path));
    }

    codec::write_zipped(&path, report)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AlternateAddition, EvaluationResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn skills() -> Vec<PassiveSkill> {
        vec![
            PassiveSkill::new(10, false),
            PassiveSkill::new(20, true),
            PassiveSkill::new(30, false),
        ]
    }

    fn addition_only(_: u32, _: u32, _: JewelType, _: Conqueror) -> EvaluationResult {
        EvaluationResult {
            addition_infos: vec![AdditionInfo::with_addition(AlternateAddition {
                stats_keys: vec![1],
                ..AlternateAddition::default()
            })],
            ..EvaluationResult::default()
        }
    }

    #[test]
    fn additions_only_omit_alternate_section() {
        let report = export_one(
            &addition_only,
            &skills(),
            2_000,
            JewelType::GloriousVanity,
            Conqueror::Xibaqua,
        );
        assert!(report.alternate.is_empty());
        assert_eq!(report.additive.keys().copied().collect::<Vec<_>>(), vec![10, 30]);

        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("alternate").is_none());
        assert!(value.get("additive").is_some());
    }

    #[test]
    fn empty_results_give_empty_report() {
        let evaluator = |_: u32, _: u32, _: JewelType, _: Conqueror| EvaluationResult::empty();
        let report = export_one(
            &evaluator,
            &skills(),
            4_433,
            JewelType::MilitantFaith,
            Conqueror::Maxarius,
        );
        assert!(report.is_empty());
        assert_eq!(serde_json::to_string(&report).unwrap(), "{}");
    }

    #[test]
    fn alternate_results_keyed_by_skill() {
        let evaluator = |skill: u32, _: u32, _: JewelType, _: Conqueror| EvaluationResult {
            alternate_skill: Some(AlternateSkill {
                index: skill * 2,
                ..AlternateSkill::default()
            }),
            ..EvaluationResult::default()
        };
        let report = export_one(
            &evaluator,
            &skills(),
            53_740,
            JewelType::ElegantHubris,
            Conqueror::Caspiro,
        );
        assert_eq!(report.alternate_count(), 2);
        assert_eq!(report.additive_count(), 0);
        assert_eq!(report.alternate[&30].index, 60);
    }

    #[test]
    fn keystones_are_skipped_and_arguments_forwarded() {
        let calls = AtomicUsize::new(0);
        let evaluator = |skill: u32, seed: u32, jewel: JewelType, conqueror: Conqueror| {
            calls.fetch_add(1, Ordering::Relaxed);
            assert_ne!(skill, 20);
            assert_eq!(seed, 12_000);
            assert_eq!(jewel, JewelType::LethalPride);
            assert_eq!(conqueror, Conqueror::Akoya);
            EvaluationResult::empty()
        };
        let _ = export_one(
            &evaluator,
            &skills(),
            12_000,
            JewelType::LethalPride,
            Conqueror::Akoya,
        );
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn file_names_follow_naming_policy() {
        assert_eq!(
            DumpNaming::SeedOnly.file_name(JewelType::GloriousVanity, 2_000, Conqueror::Xibaqua),
            "GloriousVanity_2000.json.gz"
        );
        assert_eq!(
            DumpNaming::WithConqueror.file_name(
                JewelType::GloriousVanity,
                2_000,
                Conqueror::Xibaqua
            ),
            "GloriousVanity_2000_Xibaqua.json.gz"
        );
    }

    #[test]
    fn overwrite_warning_blames_names_only_without_conqueror() {
        let path = Path::new("jewels/LethalPride_10000.json.gz");
        let seed_only = DumpNaming::SeedOnly.overwrite_warning(path);
        assert!(seed_only.contains("do not include the conqueror"), "{seed_only}");
        assert_eq!(
            DumpNaming::WithConqueror.overwrite_warning(path),
            "overwriting jewels/LethalPride_10000.json.gz"
        );
    }

    #[test]
    fn seed_only_names_collide_across_conquerors() {
        let dir = std::env::temp_dir().join(format!(
            "jewel-dump-collide-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let target = DumpTarget {
            dir: &dir,
            naming: DumpNaming::SeedOnly,
        };
        let first = write_dump(
            target,
            &DumpReport::default(),
            2_000,
            JewelType::BrutalRestraint,
            Conqueror::Deshret,
        )
        .unwrap();
        let report = export_one(
            &addition_only,
            &skills(),
            2_000,
            JewelType::BrutalRestraint,
            Conqueror::Nasima,
        );
        let second = write_dump(
            target,
            &report,
            2_000,
            JewelType::BrutalRestraint,
            Conqueror::Nasima,
        )
        .unwrap();
        assert_eq!(first, second);

        let back: DumpReport = codec::read_zipped(&second).unwrap();
        assert_eq!(back, report);
    }
}
