//! Stat frequency sweeps across whole seed ranges.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::data::{EvaluationResult, PassiveSkill};
use crate::evaluator::Evaluator;
use crate::jewel::{Conqueror, JewelType};
use crate::seed::seeds;

/// Occurrences of each stat key within one jewel family.
pub type StatCounts = BTreeMap<u32, u64>;

/// Seeds between liveness log lines when none is configured.
pub const DEFAULT_PROGRESS_EVERY: u32 = 500;

/// Stat key occurrence counts per jewel family.
///
/// Counts only grow, and merging two maps adds their counts, so the result
/// of a sweep is independent of evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatFrequencyMap {
    buckets: BTreeMap<JewelType, StatCounts>,
}

impl StatFrequencyMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `jewel_type` has a bucket, even if nothing is ever counted.
    pub fn touch(&mut self, jewel_type: JewelType) -> &mut StatCounts {
        self.buckets.entry(jewel_type).or_default()
    }

    /// Count every stat key the result references.
    pub fn record(&mut self, jewel_type: JewelType, result: &EvaluationResult) {
        let bucket = self.touch(jewel_type);
        for key in result.stat_keys() {
            *bucket.entry(key).or_default() += 1;
        }
    }

    /// Add every count of `other` into `self`.
    pub fn merge(&mut self, other: StatFrequencyMap) {
        for (jewel_type, counts) in other.buckets {
            let bucket = self.touch(jewel_type);
            for (key, count) in counts {
                *bucket.entry(key).or_default() += count;
            }
        }
    }

    #[must_use]
    pub fn count(&self, jewel_type: JewelType, key: u32) -> u64 {
        self.buckets
            .get(&jewel_type)
            .and_then(|bucket| bucket.get(&key))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn bucket(&self, jewel_type: JewelType) -> Option<&StatCounts> {
        self.buckets.get(&jewel_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (JewelType, &StatCounts)> {
        self.buckets.iter().map(|(jewel, counts)| (*jewel, counts))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Sweep driver: every seed of every requested jewel, against every
/// non-keystone applicable skill, using one conqueror per jewel.
pub struct StatSweep<'a, E> {
    evaluator: &'a E,
    skills: &'a [PassiveSkill],
    progress_every: u32,
    conquerors: BTreeMap<JewelType, Conqueror>,
}

impl<'a, E: Evaluator> StatSweep<'a, E> {
    pub fn new(evaluator: &'a E, skills: &'a [PassiveSkill]) -> Self {
        Self {
            evaluator,
            skills,
            progress_every: DEFAULT_PROGRESS_EVERY,
            conquerors: BTreeMap::new(),
        }
    }

    /// Log the real seed whenever it is a multiple of `every`. Zero disables.
    #[must_use]
    pub fn progress_every(mut self, every: u32) -> Self {
        self.progress_every = every;
        self
    }

    /// Sweep `conqueror`'s family with `conqueror` instead of the default
    /// representative.
    #[must_use]
    pub fn with_conqueror(mut self, conqueror: Conqueror) -> Self {
        self.conquerors.insert(conqueror.jewel_type(), conqueror);
        self
    }

    /// Conqueror this sweep evaluates `jewel_type` with.
    #[must_use]
    pub fn conqueror_for(&self, jewel_type: JewelType) -> Conqueror {
        self.conquerors
            .get(&jewel_type)
            .copied()
            .unwrap_or_else(|| jewel_type.representative_conqueror())
    }

    /// Count stats for a single jewel family.
    #[must_use]
    pub fn sweep_jewel(&self, jewel_type: JewelType) -> StatFrequencyMap {
        let conqueror = self.conqueror_for(jewel_type);
        info!("sweeping {jewel_type} with {conqueror}");

        let mut found = StatFrequencyMap::new();
        found.touch(jewel_type);

        for seed in seeds(jewel_type.seed_range()) {
            if self.progress_every != 0 && seed % self.progress_every == 0 {
                info!("{jewel_type}: seed {seed}");
            }

            for skill in self.skills.iter().filter(|skill| !skill.is_keystone) {
                let result = self
                    .evaluator
                    .evaluate(skill.index, seed, jewel_type, conqueror);
                found.record(jewel_type, &result);
            }
        }

        found
    }

    /// Sweep each jewel family in turn.
    #[must_use]
    pub fn run(&self, jewel_types: &[JewelType]) -> StatFrequencyMap {
        let mut found = StatFrequencyMap::new();
        for &jewel_type in jewel_types {
            found.merge(self.sweep_jewel(jewel_type));
        }
        found
    }
}

impl<E: Evaluator + Sync> StatSweep<'_, E> {
    /// Sweep jewel families concurrently, one shard per family.
    #[must_use]
    pub fn run_parallel(&self, jewel_types: &[JewelType]) -> StatFrequencyMap {
        jewel_types
            .par_iter()
            .map(|&jewel_type| self.sweep_jewel(jewel_type))
            .reduce(StatFrequencyMap::new, |mut acc, shard| {
                acc.merge(shard);
                acc
            })
    }
}

/// Sweep `jewel_types` with the default conqueror policy.
pub fn aggregate<E: Evaluator>(
    evaluator: &E,
    jewel_types: &[JewelType],
    skills: &[PassiveSkill],
) -> StatFrequencyMap {
    StatSweep::new(evaluator, skills).run(jewel_types)
}
