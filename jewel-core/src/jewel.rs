//! Jewel families, their conquerors and seed ranges.
//!
//! Names are the canonical spellings used on the command line, in output
//! file names and as JSON keys. Parsing is derived from the same table that
//! formatting uses, so the two directions cannot drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::JewelError;
use crate::seed::SEED_SCALE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JewelType {
    GloriousVanity,
    LethalPride,
    BrutalRestraint,
    MilitantFaith,
    ElegantHubris,
}

impl JewelType {
    pub const ALL: [JewelType; 5] = [
        JewelType::GloriousVanity,
        JewelType::LethalPride,
        JewelType::BrutalRestraint,
        JewelType::MilitantFaith,
        JewelType::ElegantHubris,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            JewelType::GloriousVanity => "GloriousVanity",
            JewelType::LethalPride => "LethalPride",
            JewelType::BrutalRestraint => "BrutalRestraint",
            JewelType::MilitantFaith => "MilitantFaith",
            JewelType::ElegantHubris => "ElegantHubris",
        }
    }

    /// Conquerors valid for this jewel, in declaration order.
    #[must_use]
    pub const fn conquerors(self) -> &'static [Conqueror; 4] {
        match self {
            JewelType::GloriousVanity => &[
                Conqueror::Xibaqua,
                Conqueror::Zerphi,
                Conqueror::Ahuana,
                Conqueror::Doryani,
            ],
            JewelType::LethalPride => &[
                Conqueror::Kaom,
                Conqueror::Rakiata,
                Conqueror::Kiloava,
                Conqueror::Akoya,
            ],
            JewelType::BrutalRestraint => &[
                Conqueror::Deshret,
                Conqueror::Balbala,
                Conqueror::Asenath,
                Conqueror::Nasima,
            ],
            JewelType::MilitantFaith => &[
                Conqueror::Venarius,
                Conqueror::Maxarius,
                Conqueror::Dominus,
                Conqueror::Avarius,
            ],
            JewelType::ElegantHubris => &[
                Conqueror::Cadiro,
                Conqueror::Victario,
                Conqueror::Chitus,
                Conqueror::Caspiro,
            ],
        }
    }

    /// The conqueror used when a sweep has to stand in for the whole family.
    #[must_use]
    pub const fn representative_conqueror(self) -> Conqueror {
        self.conquerors()[0]
    }

    /// Seed range for this jewel. Elegant Hubris is stored in reduced units.
    #[must_use]
    pub const fn seed_range(self) -> SeedRange {
        match self {
            JewelType::GloriousVanity => SeedRange::fixed(100, 8_000, false),
            JewelType::LethalPride => SeedRange::fixed(10_000, 18_000, false),
            JewelType::BrutalRestraint => SeedRange::fixed(500, 8_000, false),
            JewelType::MilitantFaith => SeedRange::fixed(2_000, 10_000, false),
            JewelType::ElegantHubris => SeedRange::fixed(100, 8_000, true),
        }
    }
}

impl fmt::Display for JewelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JewelType {
    type Err = JewelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JewelType::ALL
            .into_iter()
            .find(|jewel| jewel.name() == s)
            .ok_or_else(|| JewelError::invalid("jewel type", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Conqueror {
    Xibaqua,
    Zerphi,
    Ahuana,
    Doryani,

    Kaom,
    Rakiata,
    Kiloava,
    Akoya,

    Deshret,
    Balbala,
    Asenath,
    Nasima,

    Venarius,
    Maxarius,
    Dominus,
    Avarius,

    Cadiro,
    Victario,
    Chitus,
    Caspiro,
}

impl Conqueror {
    pub const ALL: [Conqueror; 20] = [
        Conqueror::Xibaqua,
        Conqueror::Zerphi,
        Conqueror::Ahuana,
        Conqueror::Doryani,
        Conqueror::Kaom,
        Conqueror::Rakiata,
        Conqueror::Kiloava,
        Conqueror::Akoya,
        Conqueror::Deshret,
        Conqueror::Balbala,
        Conqueror::Asenath,
        Conqueror::Nasima,
        Conqueror::Venarius,
        Conqueror::Maxarius,
        Conqueror::Dominus,
        Conqueror::Avarius,
        Conqueror::Cadiro,
        Conqueror::Victario,
        Conqueror::Chitus,
        Conqueror::Caspiro,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Conqueror::Xibaqua => "Xibaqua",
            Conqueror::Zerphi => "Zerphi",
            Conqueror::Ahuana => "Ahuana",
            Conqueror::Doryani => "Doryani",
            Conqueror::Kaom => "Kaom",
            Conqueror::Rakiata => "Rakiata",
            Conqueror::Kiloava => "Kiloava",
            Conqueror::Akoya => "Akoya",
            Conqueror::Deshret => "Deshret",
            Conqueror::Balbala => "Balbala",
            Conqueror::Asenath => "Asenath",
            Conqueror::Nasima => "Nasima",
            Conqueror::Venarius => "Venarius",
            Conqueror::Maxarius => "Maxarius",
            Conqueror::Dominus => "Dominus",
            Conqueror::Avarius => "Avarius",
            Conqueror::Cadiro => "Cadiro",
            Conqueror::Victario => "Victario",
            Conqueror::Chitus => "Chitus",
            Conqueror::Caspiro => "Caspiro",
        }
    }

    /// The jewel family this conqueror belongs to.
    #[must_use]
    pub fn jewel_type(self) -> JewelType {
        JewelType::ALL
            .into_iter()
            .find(|jewel| jewel.conquerors().contains(&self))
            .unwrap_or(JewelType::GloriousVanity)
    }
}

impl fmt::Display for Conqueror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Conqueror {
    type Err = JewelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Conqueror::ALL
            .into_iter()
            .find(|conqueror| conqueror.name() == s)
            .ok_or_else(|| JewelError::invalid("conqueror", s))
    }
}

/// Inclusive seed bounds for a jewel family.
///
/// When `scaled` is set the bounds are in reduced units: every raw value in
/// `min..=max` maps to the real seed `raw * SEED_SCALE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeedRangeFields")]
pub struct SeedRange {
    min: u32,
    max: u32,
    scaled: bool,
}

#[derive(Deserialize)]
struct SeedRangeFields {
    min: u32,
    max: u32,
    scaled: bool,
}

impl TryFrom<SeedRangeFields> for SeedRange {
    type Error = JewelError;

    fn try_from(fields: SeedRangeFields) -> Result<Self, Self::Error> {
        Self::new(fields.min, fields.max, fields.scaled)
    }
}

impl SeedRange {
    /// # Errors
    ///
    /// Returns [`JewelError::InvalidRange`] when `min > max` or when a scaled
    /// range would produce seeds beyond `u32::MAX`.
    pub fn new(min: u32, max: u32, scaled: bool) -> Result<Self, JewelError> {
        let overflows = scaled && max.checked_mul(SEED_SCALE).is_none();
        if min > max || overflows {
            return Err(JewelError::InvalidRange { min, max });
        }
        Ok(Self { min, max, scaled })
    }

    const fn fixed(min: u32, max: u32, scaled: bool) -> Self {
        Self { min, max, scaled }
    }

    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub const fn is_scaled(&self) -> bool {
        self.scaled
    }

    #[must_use]
    pub const fn real_min(&self) -> u32 {
        if self.scaled {
            self.min * SEED_SCALE
        } else {
            self.min
        }
    }

    #[must_use]
    pub const fn real_max(&self) -> u32 {
        if self.scaled {
            self.max * SEED_SCALE
        } else {
            self.max
        }
    }

    /// Number of seeds the range enumerates.
    #[must_use]
    pub const fn len(&self) -> u64 {
        (self.max - self.min) as u64 + 1
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `seed` is one of the real seeds this range enumerates.
    #[must_use]
    pub const fn contains(&self, seed: u32) -> bool {
        if seed < self.real_min() || seed > self.real_max() {
            return false;
        }
        !self.scaled || seed % SEED_SCALE == 0
    }
}
