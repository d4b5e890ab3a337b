//! Daily record wire format and rendering.
//!
//! Wire form: `o1,o2,...,o10|score` where each `oN` is `true` or `false`
//! and `score` is a decimal integer 0–10. The stored score is authoritative:
//! it is kept verbatim on decode and rendered as-is, even when it disagrees
//! with the outcomes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result, ROUND_COUNT};

const CORRECT_GLYPH: char = '\u{1F7E9}';
const INCORRECT_GLYPH: char = '\u{1F7E5}';

/// Persisted summary of a completed Daily session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Round outcomes in round order.
    pub outcomes: [bool; ROUND_COUNT],
    /// Score as stored.
    pub score: u8,
}

impl DailyRecord {
    #[must_use]
    pub const fn new(outcomes: [bool; ROUND_COUNT], score: u8) -> Self {
        Self { outcomes, score }
    }

    /// Build a record whose score is derived from the outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: [bool; ROUND_COUNT]) -> Self {
        let score = outcomes.iter().filter(|&&o| o).count() as u8;
        Self { outcomes, score }
    }

    /// Whether the stored score matches the outcomes.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        usize::from(self.score) == self.outcomes.iter().filter(|&&o| o).count()
    }
}

impl FromStr for DailyRecord {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        ResultCodec::decode(s)
    }
}

/// Encoder, decoder and renderer for [`DailyRecord`].
///
/// ```
/// use asmrandle::persistence::ResultCodec;
///
/// let record = ResultCodec::decode("true,true,true,true,true,false,false,false,false,false|5").unwrap();
/// assert_eq!(ResultCodec::render(&record), "🟩🟩🟩🟩🟩🟥🟥🟥🟥🟥 5/10");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ResultCodec;

impl ResultCodec {
    /// Serialize a record into the cookie wire form.
    #[must_use]
    pub fn encode(record: &DailyRecord) -> String {
        let outcomes: Vec<&str> = record
            .outcomes
            .iter()
            .map(|&o| if o { "true" } else { "false" })
            .collect();
        format!("{}|{}", outcomes.join(","), record.score)
    }

    /// Parse the cookie wire form.
    ///
    /// Anything other than exactly ten `true`/`false` tokens, one `|` and a
    /// plain decimal score in 0..=10 (no leading zeros) is a `CorruptRecord`.
    pub fn decode(value: &str) -> Result<DailyRecord> {
        let (outcome_part, score_part) = value
            .split_once('|')
            .ok_or_else(|| EngineError::corrupt("missing score separator"))?;

        let tokens: Vec<&str> = outcome_part.split(',').collect();
        if tokens.len() != ROUND_COUNT {
            return Err(EngineError::corrupt(format!(
                "expected {ROUND_COUNT} outcomes, found {}",
                tokens.len()
            )));
        }

        let mut outcomes = [false; ROUND_COUNT];
        for (slot, token) in outcomes.iter_mut().zip(tokens) {
            *slot = match token {
                "true" => true,
                "false" => false,
                other => return Err(EngineError::corrupt(format!("bad outcome token {other:?}"))),
            };
        }

        let canonical = !score_part.is_empty()
            && score_part.bytes().all(|b| b.is_ascii_digit())
            && (score_part == "0" || !score_part.starts_with('0'));
        if !canonical {
            return Err(EngineError::corrupt(format!("bad score {score_part:?}")));
        }
        let score: u8 = score_part
            .parse()
            .map_err(|_| EngineError::corrupt(format!("bad score {score_part:?}")))?;
        if usize::from(score) > ROUND_COUNT {
            return Err(EngineError::corrupt(format!("score {score} out of range")));
        }

        Ok(DailyRecord { outcomes, score })
    }

    /// Render the emoji summary line, e.g. `🟩🟥… 7/10`.
    #[must_use]
    pub fn render(record: &DailyRecord) -> String {
        let glyphs: String = record
            .outcomes
            .iter()
            .map(|&o| if o { CORRECT_GLYPH } else { INCORRECT_GLYPH })
            .collect();
        format!("{glyphs} {}/{ROUND_COUNT}", record.score)
    }
}
