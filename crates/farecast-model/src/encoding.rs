//! Fixed categorical encodings shared by training and serving.
//!
//! These tables are part of the model contract: the batch pipeline encodes
//! historical records with them and the synthesizer encodes user selections
//! with them, so a label maps to the same code on both sides.
//!
//! Labels unseen at training fall back to code 0. That is an intentional
//! "unknown maps to the baseline category" policy, not an error — and it
//! means a 0 is only distinguishable from the legitimately-encoded first
//! entry by knowing the input label out of band.

use serde::{Deserialize, Serialize};

/// A fixed label → small-integer lookup table.
#[derive(Debug, Clone, Copy)]
pub struct EncodingMap {
    entries: &'static [(&'static str, i64)],
}

impl EncodingMap {
    /// Code for `label`, falling back to 0 for unknown labels.
    pub fn encode(&self, label: &str) -> i64 {
        self.entries
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, code)| *code)
            .unwrap_or(0)
    }

    /// Exact-match code, `None` when the label is outside the table.
    pub fn get(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, code)| *code)
    }

    /// Labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }
}

/// Cab vendor encoding used at train time.
pub const CAB_TYPE_MAP: EncodingMap = EncodingMap {
    entries: &[("Uber", 0), ("Lyft", 1)],
};

/// Product tier encoding used at train time.
pub const PRODUCT_GROUP_MAP: EncodingMap = EncodingMap {
    entries: &[("Shared", 0), ("Standard", 1), ("Premium", 2)],
};

/// Coarse product tier derived from a raw product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductTier {
    Shared,
    Standard,
    Premium,
}

impl ProductTier {
    /// Keyword classification of a raw product name.
    ///
    /// "pool"/"shared" mark pooled rides, "black"/"lux" mark premium ones,
    /// anything else is the standard tier.
    pub fn from_product_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("pool") || name.contains("shared") {
            ProductTier::Shared
        } else if name.contains("black") || name.contains("lux") {
            ProductTier::Premium
        } else {
            ProductTier::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductTier::Shared => "Shared",
            ProductTier::Standard => "Standard",
            ProductTier::Premium => "Premium",
        }
    }

    /// The fixed code of this tier in [`PRODUCT_GROUP_MAP`].
    pub fn code(&self) -> i64 {
        PRODUCT_GROUP_MAP.encode(self.as_str())
    }
}
