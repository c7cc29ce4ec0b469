use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node of the passive tree considered for transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PassiveSkill {
    pub index: u32,
    #[serde(default, rename = "ID")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_keystone: bool,
    #[serde(default)]
    pub is_notable: bool,
    #[serde(default)]
    pub is_jewel_socket: bool,
}

impl PassiveSkill {
    #[must_use]
    pub fn new(index: u32, is_keystone: bool) -> Self {
        Self {
            index,
            is_keystone,
            ..Self::default()
        }
    }
}

/// The passive table a run works from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct PassiveSkillCatalog {
    pub skills: Vec<PassiveSkill>,
}

impl PassiveSkillCatalog {
    #[must_use]
    pub fn from_skills(skills: Vec<PassiveSkill>) -> Self {
        Self { skills }
    }

    /// Load the table from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a list of passive skills.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Skills a jewel can act on, in table order. Sockets never transform.
    #[must_use]
    pub fn applicable(&self) -> Vec<PassiveSkill> {
        self.skills
            .iter()
            .filter(|skill| !skill.is_jewel_socket)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Replacement passive granted by a jewel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct AlternateSkill {
    pub index: u32,
    #[serde(rename = "ID")]
    pub id: String,
    pub alternate_tree_versions_key: u32,
    pub name: String,
    pub passive_type: Vec<u32>,
    pub stats_keys: Vec<u32>,
    pub stat1_min: u32,
    pub stat1_max: u32,
    pub stat2_min: u32,
    pub stat2_max: u32,
    pub stat3_min: u32,
    pub stat3_max: u32,
    pub stat4_min: u32,
    pub stat4_max: u32,
    pub spawn_weight: u32,
    pub conqueror_index: u32,
    pub random_min: u32,
    pub random_max: u32,
    pub conqueror_version: u32,
}

/// Extra modifier added on top of an untouched passive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct AlternateAddition {
    pub index: u32,
    #[serde(rename = "ID")]
    pub id: String,
    pub alternate_tree_versions_key: u32,
    pub spawn_weight: u32,
    pub stats_keys: Vec<u32>,
    pub stat1_min: u32,
    pub stat1_max: u32,
    pub stat2_min: u32,
    pub stat2_max: u32,
    pub passive_type: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdditionInfo {
    #[serde(rename = "AlternatePassiveAddition")]
    pub alternate_addition: Option<AlternateAddition>,
    pub stat_rolls: BTreeMap<u32, u32>,
}

impl AdditionInfo {
    #[must_use]
    pub fn with_addition(addition: AlternateAddition) -> Self {
        Self {
            alternate_addition: Some(addition),
            stat_rolls: BTreeMap::new(),
        }
    }
}

/// Outcome of evaluating one passive under one jewel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct EvaluationResult {
    #[serde(rename = "AlternatePassiveSkill")]
    pub alternate_skill: Option<AlternateSkill>,
    pub stat_rolls: BTreeMap<u32, u32>,
    #[serde(rename = "AlternatePassiveAdditionInformations")]
    pub addition_infos: Vec<AdditionInfo>,
}

impl EvaluationResult {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every stat key referenced by the alternate skill and by each present
    /// addition, with repeats.
    pub fn stat_keys(&self) -> impl Iterator<Item = u32> + '_ {
        let skill_keys = self
            .alternate_skill
            .iter()
            .flat_map(|skill| skill.stats_keys.iter().copied());
        let addition_keys = self
            .addition_infos
            .iter()
            .filter_map(|info| info.alternate_addition.as_ref())
            .flat_map(|addition| addition.stats_keys.iter().copied());
        skill_keys.chain(addition_keys)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alternate_skill.is_none() && self.addition_infos.is_empty()
    }
}
