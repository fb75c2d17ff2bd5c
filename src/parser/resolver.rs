//! Keyword to canonical unit resolution
//!
//! A [`SynonymTable`] maps every canonical unit to the keywords that name it.
//! Lookups are exact matches on the whole lowercased keyword; there is no
//! prefix inference, so "sec" and "second" must both be listed to be accepted.

use std::collections::{BTreeMap, HashMap};
use crate::error::{Result, TimestringError};
use crate::models::Unit;

/// Mapping from canonical unit to accepted keyword spellings
#[derive(Debug, Clone, PartialEq)]
pub struct SynonymTable {
    entries: BTreeMap<Unit, Vec<String>>,
}

impl SynonymTable {
    /// Table with the built-in English keywords
    pub fn new() -> Self {
        let entries = Unit::ALL
            .iter()
            .map(|unit| {
                let words = unit.default_keywords().iter().map(|w| w.to_string()).collect();
                (*unit, words)
            })
            .collect();
        SynonymTable { entries }
    }

    /// Defaults with the caller's lists swapped in
    ///
    /// Each unit present in `overrides` gets exactly the caller's keywords;
    /// units not mentioned keep their defaults.
    pub fn with_overrides(overrides: &HashMap<Unit, Vec<String>>) -> Self {
        let mut table = Self::new();
        for (unit, words) in overrides {
            table.replace(*unit, words);
        }
        table
    }

    /// Replace the keyword list of `unit`
    pub fn replace<S: AsRef<str>>(&mut self, unit: Unit, words: &[S]) {
        let list = self.entries.entry(unit).or_default();
        list.clear();
        for word in words {
            push_keyword(list, word.as_ref());
        }
    }

    /// Append keywords to `unit`, keeping the ones already registered
    pub fn extend<S: AsRef<str>>(&mut self, unit: Unit, words: &[S]) {
        let list = self.entries.entry(unit).or_default();
        for word in words {
            push_keyword(list, word.as_ref());
        }
    }

    pub fn keywords(&self, unit: Unit) -> &[String] {
        self.entries.get(&unit).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate units with their keywords, smallest unit first
    pub fn iter(&self) -> impl Iterator<Item = (Unit, &[String])> {
        self.entries.iter().map(|(unit, words)| (*unit, words.as_slice()))
    }

    /// Find the canonical unit for an already-lowercased keyword
    ///
    /// Units are searched smallest first and the first hit wins. When no list
    /// contains the keyword, the short codes are tried so every unit stays
    /// reachable even after its list was replaced.
    pub fn lookup(&self, keyword: &str) -> Option<Unit> {
        self.entries
            .iter()
            .find(|(_, words)| words.iter().any(|w| w == keyword))
            .map(|(unit, _)| *unit)
            .or_else(|| Unit::from_code(keyword))
    }

    /// Resolve an input keyword
    pub fn resolve(&self, keyword: &str) -> Result<Unit> {
        self.lookup(keyword)
            .ok_or_else(|| TimestringError::UnknownUnit(keyword.to_string()))
    }

    /// Resolve a requested output unit (code or any known keyword)
    pub fn resolve_output(&self, selector: &str) -> Result<Unit> {
        let selector_lower = selector.trim().to_lowercase();
        self.lookup(&selector_lower)
            .ok_or_else(|| TimestringError::InvalidUnit(selector.to_string()))
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::new()
    }
}

fn push_keyword(list: &mut Vec<String>, word: &str) {
    let word = word.trim().to_lowercase();
    if !word.is_empty() && !list.contains(&word) {
        list.push(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let table = SynonymTable::new();
        assert_eq!(table.resolve("s"), Ok(Unit::Second));
        assert_eq!(table.resolve("second"), Ok(Unit::Second));
        assert_eq!(table.resolve("hours"), Ok(Unit::Hour));
        assert_eq!(table.resolve("day"), Ok(Unit::Day));
        assert_eq!(table.resolve("mon"), Ok(Unit::Month));
        assert_eq!(table.resolve("milli"), Ok(Unit::Millisecond));
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let table = SynonymTable::new();
        assert_eq!(table.resolve("hou"), Err(TimestringError::UnknownUnit("hou".to_string())));
        assert!(table.resolve("secondss").is_err());
        assert!(table.resolve("invalid").is_err());
    }

    #[test]
    fn test_replace_policy() {
        let mut overrides = HashMap::new();
        overrides.insert(Unit::Day, vec!["tag".to_string(), "Tage".to_string()]);
        let table = SynonymTable::with_overrides(&overrides);

        assert_eq!(table.resolve("tag"), Ok(Unit::Day));
        assert_eq!(table.resolve("tage"), Ok(Unit::Day));
        assert!(table.resolve("days").is_err());
        // Short codes survive replacement
        assert_eq!(table.resolve("d"), Ok(Unit::Day));
        // Other units untouched
        assert_eq!(table.resolve("hours"), Ok(Unit::Hour));
    }

    #[test]
    fn test_overrides_do_not_touch_defaults() {
        let mut overrides = HashMap::new();
        overrides.insert(Unit::Second, vec!["sekunde".to_string()]);
        let _ = SynonymTable::with_overrides(&overrides);

        let fresh = SynonymTable::new();
        assert!(fresh.resolve("sekunde").is_err());
        assert_eq!(fresh.resolve("seconds"), Ok(Unit::Second));
    }

    #[test]
    fn test_extend_appends() {
        let mut table = SynonymTable::new();
        table.extend(Unit::Second, &["sekunde", "SEKUNDEN", "s"]);
        assert_eq!(table.resolve("sekunden"), Ok(Unit::Second));
        assert_eq!(table.resolve("seconds"), Ok(Unit::Second));
        assert_eq!(table.keywords(Unit::Second).iter().filter(|w| *w == "s").count(), 1);
    }

    #[test]
    fn test_overlap_smallest_unit_wins() {
        let mut table = SynonymTable::new();
        table.extend(Unit::Year, &["m"]);
        assert_eq!(table.resolve("m"), Ok(Unit::Minute));
    }

    #[test]
    fn test_resolve_output() {
        let table = SynonymTable::new();
        assert_eq!(table.resolve_output("h"), Ok(Unit::Hour));
        assert_eq!(table.resolve_output("minutes"), Ok(Unit::Minute));
        assert_eq!(table.resolve_output("MTH"), Ok(Unit::Month));
        assert_eq!(
            table.resolve_output("fortnight"),
            Err(TimestringError::InvalidUnit("fortnight".to_string()))
        );
    }
}
