//! Target part to compiler flag resolution
//!
//! The table is an ordered list of `(pattern, flags)` pairs. Patterns are
//! anchored at the start of the part identifier and the first matching
//! entry wins; user-supplied rules are placed ahead of the built-in ones.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{St2MakeError, St2MakeResult};

/// Built-in STM32 family table, in precedence order.
pub const BUILTIN_TARGETS: &[(&str, &str)] = &[
    ("STM32(F|L)0", "-mthumb -mcpu=cortex-m0"),
    (".*Cortex-M0", "-mthumb -mcpu=cortex-m0"),
    ("STM32(F|L)1", "-mthumb -mcpu=cortex-m3"),
    ("STM32(F|L)2", "-mthumb -mcpu=cortex-m3"),
    (
        "STM32(F|L)3",
        "-mthumb -mcpu=cortex-m4 -mfpu=fpv4-sp-d16 -mfloat-abi=softfp",
    ),
    (
        "STM32(F|L)4",
        "-mthumb -mcpu=cortex-m4 -mfpu=fpv4-sp-d16 -mfloat-abi=softfp",
    ),
];

/// A user-configured table entry (`[[targets]]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRule {
    pub pattern: String,
    pub flags: String,
}

/// Compiled table entry.
#[derive(Debug, Clone)]
pub struct TargetPattern {
    source: String,
    regex: Regex,
    flags: String,
}

impl TargetPattern {
    pub fn new(pattern: &str, flags: impl Into<String>) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{pattern})"))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
            flags: flags.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn is_match(&self, part: &str) -> bool {
        self.regex.is_match(part)
    }
}

/// A rule whose pattern failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTargetRule {
    pub pattern: String,
    pub message: String,
}

/// Ordered target table.
#[derive(Debug, Clone)]
pub struct TargetResolver {
    entries: Vec<TargetPattern>,
}

impl Default for TargetResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TargetResolver {
    /// The built-in STM32 table.
    pub fn builtin() -> Self {
        let entries = BUILTIN_TARGETS
            .iter()
            .filter_map(|(pattern, flags)| TargetPattern::new(pattern, *flags).ok())
            .collect();
        Self { entries }
    }

    /// Built-in table preceded by `rules`. Rules whose pattern does not
    /// compile are skipped and returned so the caller can report them.
    pub fn with_rules(rules: &[TargetRule]) -> (Self, Vec<InvalidTargetRule>) {
        let mut entries = Vec::with_capacity(rules.len() + BUILTIN_TARGETS.len());
        let mut invalid = Vec::new();

        for rule in rules {
            match TargetPattern::new(&rule.pattern, rule.flags.clone()) {
                Ok(entry) => entries.push(entry),
                Err(e) => invalid.push(InvalidTargetRule {
                    pattern: rule.pattern.clone(),
                    message: e.to_string(),
                }),
            }
        }
        entries.extend(Self::builtin().entries);

        (Self { entries }, invalid)
    }

    pub fn entries(&self) -> &[TargetPattern] {
        &self.entries
    }

    /// Every entry matching `part`, in table order.
    pub fn matches<'a>(&'a self, part: &'a str) -> impl Iterator<Item = &'a TargetPattern> + 'a {
        self.entries.iter().filter(move |e| e.is_match(part))
    }

    /// Flags of the first entry matching `part`.
    pub fn resolve(&self, part: &str) -> St2MakeResult<&str> {
        self.entries
            .iter()
            .find(|e| e.is_match(part))
            .map(TargetPattern::flags)
            .ok_or_else(|| St2MakeError::UnknownTarget {
                part: part.to_string(),
            })
    }

    /// True when more than one entry matches `part` with different flags.
    pub fn is_ambiguous(&self, part: &str) -> bool {
        let mut flags = self.matches(part).map(TargetPattern::flags);
        match flags.next() {
            Some(first) => flags.any(|f| f != first),
            None => false,
        }
    }
}
