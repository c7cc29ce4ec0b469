//! Timeless Jewel Analysis Core
//!
//! Enumerates the seed space of each timeless jewel family, drives an
//! external evaluator over it and shapes the results into two reports: stat
//! frequency maps across whole seed ranges and full dumps of one jewel
//! configuration. Nothing here touches the terminal; the `jewel-dump` binary
//! provides the command surface.

pub mod codec;
pub mod data;
pub mod dump;
pub mod error;
pub mod evaluator;
pub mod jewel;
pub mod seed;
pub mod stats;

// Re-export commonly used types
pub use codec::{read_zipped, rezip, write_zipped};
pub use data::{
    AdditionInfo, AlternateAddition, AlternateSkill, EvaluationResult, PassiveSkill,
    PassiveSkillCatalog,
};
pub use dump::{DumpNaming, DumpReport, DumpTarget, export_one, write_dump};
pub use error::JewelError;
pub use evaluator::{EvaluationRecord, Evaluator, TableEvaluator};
pub use jewel::{Conqueror, JewelType, SeedRange};
pub use seed::{SEED_SCALE, parse_seed, seeds};
pub use stats::{StatCounts, StatFrequencyMap, StatSweep, aggregate};
