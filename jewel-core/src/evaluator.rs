//! The seam between enumeration and the jewel calculation itself.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::codec;
use crate::data::EvaluationResult;
use crate::error::JewelError;
use crate::jewel::{Conqueror, JewelType};

/// Pure, deterministic calculation of what a jewel does to one passive.
///
/// Implementations must return the same result for the same arguments and
/// must not have side effects; sweeps call this in any order and may call
/// it from several threads.
pub trait Evaluator {
    fn evaluate(
        &self,
        skill_index: u32,
        seed: u32,
        jewel_type: JewelType,
        conqueror: Conqueror,
    ) -> EvaluationResult;
}

impl<F> Evaluator for F
where
    F: Fn(u32, u32, JewelType, Conqueror) -> EvaluationResult,
{
    fn evaluate(
        &self,
        skill_index: u32,
        seed: u32,
        jewel_type: JewelType,
        conqueror: Conqueror,
    ) -> EvaluationResult {
        self(skill_index, seed, jewel_type, conqueror)
    }
}

/// One precomputed evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub skill: u32,
    pub seed: u32,
    pub jewel_type: JewelType,
    pub conqueror: Conqueror,
    pub result: EvaluationResult,
}

type EvaluationKey = (u32, u32, JewelType, Conqueror);

/// Evaluator backed by a table of precomputed results.
///
/// Configurations missing from the table evaluate to an empty result.
#[derive(Debug, Clone, Default)]
pub struct TableEvaluator {
    entries: HashMap<EvaluationKey, EvaluationResult>,
}

impl TableEvaluator {
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = EvaluationRecord>) -> Self {
        let entries = records
            .into_iter()
            .map(|record| {
                (
                    (record.skill, record.seed, record.jewel_type, record.conqueror),
                    record.result,
                )
            })
            .collect();
        Self { entries }
    }

    /// Load a gzip-compressed list of [`EvaluationRecord`]s.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load(path: &Path) -> Result<Self, JewelError> {
        let records: Vec<EvaluationRecord> = codec::read_zipped(path)?;
        Ok(Self::from_records(records))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Evaluator for TableEvaluator {
    fn evaluate(
        &self,
        skill_index: u32,
        seed: u32,
        jewel_type: JewelType,
        conqueror: Conqueror,
    ) -> EvaluationResult {
        self.entries
            .get(&(skill_index, seed, jewel_type, conqueror))
            .cloned()
            .unwrap_or_default()
    }
}
