//! Static lookup from timezone abbreviation to IANA zone identifiers.

mod table;

use std::collections::HashMap;

/// Read-only mapping from a timezone abbreviation to the IANA zone
/// identifiers that share it.
///
/// Built once at startup, never mutated afterwards. An abbreviation may
/// cover several real-world zones; only the first identifier in each list
/// is used for time computation, the rest are alternate names carried for
/// reference.
pub struct ZoneTable {
    entries: HashMap<&'static str, &'static [&'static str]>,
}

impl ZoneTable {
    /// Build the table from the built-in abbreviation data.
    pub fn new() -> Self {
        let entries = table::ZONES.iter().copied().collect();
        Self { entries }
    }

    /// Resolve an abbreviation to its zone identifier list.
    ///
    /// Comparison is exact, case-sensitive string equality; there is no
    /// fuzzy matching or normalization. Unknown codes return `None`.
    pub fn resolve(&self, code: &str) -> Option<&'static [&'static str]> {
        self.entries.get(code).copied()
    }

    /// Number of abbreviations in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_abbreviation() {
        let zones = ZoneTable::new()
            .resolve("PST")
            .expect("PST should be in the table");

        assert_eq!(zones[0], "America/Dawson");
        assert!(zones.contains(&"America/Los_Angeles"));
    }

    #[test]
    fn unknown_code_is_absent() {
        let table = ZoneTable::new();

        assert!(table.resolve("NOPE").is_none());
        assert!(table.resolve("").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = ZoneTable::new();

        assert!(table.resolve("pst").is_none());
        // "ChST" (Guam) is the one mixed-case key in the table.
        assert!(table.resolve("ChST").is_some());
        assert!(table.resolve("CHST").is_none());
    }

    #[test]
    fn every_entry_has_zones() {
        for (code, zones) in table::ZONES {
            assert!(!zones.is_empty(), "{code} has no zone identifiers");
        }
    }

    #[test]
    fn abbreviations_are_unique() {
        // A duplicate key in the data would silently drop an entry when
        // the HashMap is built.
        assert_eq!(ZoneTable::new().len(), table::ZONES.len());
    }

    #[test]
    fn every_first_zone_parses() {
        // Only the first identifier of each list is ever loaded at request
        // time; later identifiers may be aliases dropped from the tzdb.
        for (code, zones) in table::ZONES {
            assert!(
                zones[0].parse::<chrono_tz::Tz>().is_ok(),
                "{code}: first zone {} is not a known IANA identifier",
                zones[0]
            );
        }
    }
}
