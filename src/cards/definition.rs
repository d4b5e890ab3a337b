//! Cards and the source records they are drawn from.
//!
//! A `CandidateRecord` is whatever the content source hands over. A `Card`
//! is the immutable, normalized form a round holds.

use serde::{Deserialize, Serialize};

/// Normalized card identifier.
///
/// Normalization lowercases the name, keeps only the first face of split
/// cards (`"Fire // Ice"` → `"fire"`), drops everything except ASCII
/// letters, digits, hyphens and spaces, and joins words with hyphens.
///
/// ```
/// use asmrandle::cards::CardId;
///
/// assert_eq!(CardId::normalize("Sol Ring").as_str(), "sol-ring");
/// assert_eq!(CardId::normalize("Fire // Ice").as_str(), "fire");
/// assert_eq!(CardId::normalize("Jace, the Mind Sculptor").as_str(), "jace-the-mind-sculptor");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Normalize a raw name into an identifier.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let face = lowered.split("//").next().unwrap_or_default();

        let kept: String = face
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == ' ')
            .collect();

        Self(kept.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>().join("-"))
    }

    /// Wrap an already-normalized identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a card's display asset (typically an image URL).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(pub String);

impl AssetRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A raw record from the content source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Card name as the source spells it.
    pub identifier: String,

    /// Display asset reference.
    pub asset_reference: String,

    /// Value of the comparison attribute.
    pub comparable_value: i64,
}

impl CandidateRecord {
    pub fn new(
        identifier: impl Into<String>,
        asset_reference: impl Into<String>,
        comparable_value: i64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            asset_reference: asset_reference.into(),
            comparable_value,
        }
    }
}

/// An immutable card as held by a round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Normalized identifier, unique within a candidate pool.
    pub id: CardId,

    /// Display asset reference.
    pub asset: AssetRef,

    /// Value of the comparison attribute.
    pub value: i64,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, asset: AssetRef, value: i64) -> Self {
        Self { id, asset, value }
    }

    /// Normalize a source record into a card.
    ///
    /// Returns `None` if the identifier normalizes to nothing.
    #[must_use]
    pub fn from_record(record: &CandidateRecord) -> Option<Self> {
        let id = CardId::normalize(&record.identifier);
        if id.is_empty() {
            return None;
        }
        Some(Self {
            id,
            asset: AssetRef::new(record.asset_reference.clone()),
            value: record.comparable_value,
        })
    }
}
