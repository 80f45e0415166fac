//! Telemetry verbosity levels.
//!
//! The level controls how much internal instrumentation the collector emits
//! about itself. Levels are totally ordered:
//!
//! `None < Basic < Normal < Detailed`
//!
//! `Basic` sits at zero so that an unset level behaves as the default rather
//! than disabling telemetry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TelemetryError;

/// Level of telemetry data to be generated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(i8)]
pub enum Level {
    /// No telemetry data is collected.
    None = -1,
    /// The basics of the service telemetry.
    #[default]
    Basic = 0,
    /// Adds other indicators on top of basic.
    Normal = 1,
    /// Adds dimensions and views to the previous levels.
    Detailed = 2,
}

impl Level {
    /// Every level, lowest first.
    pub const ALL: [Level; 4] = [Level::None, Level::Basic, Level::Normal, Level::Detailed];

    /// Resolves a raw level string.
    ///
    /// Matching is case-insensitive and exact: surrounding whitespace is not
    /// trimmed and numeric levels are not accepted. The empty string resolves
    /// to [`Level::Basic`].
    ///
    /// Case is folded one character at a time, so a character never expands
    /// into several (`'İ'` folds to `'i'`).
    pub fn resolve(raw: &str) -> Result<Self, TelemetryError> {
        let folded: String = raw
            .chars()
            .map(|c| c.to_lowercase().next().unwrap_or(c))
            .collect();
        match folded.as_str() {
            "none" => Ok(Level::None),
            "" | "basic" => Ok(Level::Basic),
            "normal" => Ok(Level::Normal),
            "detailed" => Ok(Level::Detailed),
            _ => Err(TelemetryError::UnrecognizedLevel(folded)),
        }
    }

    /// Whether telemetry gated at `required` should be emitted at this level.
    pub fn allows(self, required: Level) -> bool {
        self != Level::None && self >= required
    }

    /// Upper-case keyword for the level, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "NONE",
            Level::Basic => "BASIC",
            Level::Normal => "NORMAL",
            Level::Detailed => "DETAILED",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::resolve(s)
    }
}

impl TryFrom<String> for Level {
    type Error = TelemetryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Level::resolve(&value)
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_owned()
    }
}

impl From<Level> for i8 {
    fn from(level: Level) -> Self {
        level as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn resolves_known_keywords() {
        assert_eq!(Level::resolve("none"), Ok(Level::None));
        assert_eq!(Level::resolve("basic"), Ok(Level::Basic));
        assert_eq!(Level::resolve("normal"), Ok(Level::Normal));
        assert_eq!(Level::resolve("detailed"), Ok(Level::Detailed));
    }

    #[test]
    fn empty_string_is_basic() {
        assert_eq!(Level::resolve(""), Ok(Level::Basic));
        assert_eq!(Level::default(), Level::Basic);
    }

    #[test]
    fn unknown_level_names_the_value() {
        let err = Level::resolve("bogus").unwrap_err();
        assert_eq!(err, TelemetryError::UnrecognizedLevel("bogus".into()));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn error_carries_folded_value() {
        let err = Level::resolve("LOUD").unwrap_err();
        assert_eq!(err, TelemetryError::UnrecognizedLevel("loud".into()));
    }

    #[test]
    fn folds_one_char_at_a_time() {
        assert_eq!(Level::resolve("BASİC"), Ok(Level::Basic));
        assert_eq!(Level::resolve("DETAİLED"), Ok(Level::Detailed));
    }

    #[test]
    fn no_trimming_prefixes_or_numbers() {
        for raw in [" basic", "basic ", " ", "\t", "norm", "detail", "0", "-1", "2"] {
            assert!(Level::resolve(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn ordering_is_fixed() {
        assert!(Level::None < Level::Basic);
        assert!(Level::Basic < Level::Normal);
        assert!(Level::Normal < Level::Detailed);
        assert_eq!(Level::ALL.map(i8::from), [-1, 0, 1, 2]);
    }

    #[test]
    fn allows_respects_none() {
        assert!(!Level::None.allows(Level::None));
        assert!(Level::Basic.allows(Level::Basic));
        assert!(!Level::Basic.allows(Level::Normal));
        assert!(Level::Detailed.allows(Level::Normal));
    }

    #[test]
    fn display_round_trips_through_resolve() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn deserializes_from_string() {
        use serde::de::value::{Error, StrDeserializer};
        use serde::de::IntoDeserializer;

        let de: StrDeserializer<'_, Error> = "Detailed".into_deserializer();
        assert_eq!(Level::deserialize(de), Ok(Level::Detailed));

        let de: StrDeserializer<'_, Error> = "loud".into_deserializer();
        assert!(Level::deserialize(de).is_err());
    }

    fn keyword() -> impl Strategy<Value = (&'static str, Level)> {
        prop::sample::select(vec![
            ("none", Level::None),
            ("basic", Level::Basic),
            ("normal", Level::Normal),
            ("detailed", Level::Detailed),
        ])
    }

    proptest! {
        #[test]
        fn case_variants_resolve_alike(
            (word, level) in keyword(),
            mask in prop::collection::vec(any::<bool>(), 8),
        ) {
            let mixed: String = word
                .chars()
                .zip(mask.iter().cycle())
                .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert_eq!(Level::resolve(&mixed), Ok(level));
        }

        #[test]
        fn resolve_is_idempotent(raw in "\\PC{0,12}") {
            prop_assert_eq!(Level::resolve(&raw), Level::resolve(&raw));
        }

        #[test]
        fn other_words_are_rejected(raw in "[a-z]{1,12}") {
            prop_assume!(!["none", "basic", "normal", "detailed"].contains(&raw.as_str()));
            prop_assert_eq!(
                Level::resolve(&raw),
                Err(TelemetryError::UnrecognizedLevel(raw.clone()))
            );
        }
    }
}
