use crate::libs::error::CplxError;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;

lazy_static! {
    static ref RE_BNUM: Regex = Regex::new(r"^(b\d{4})").unwrap();
}

/// First E. coli locus in `ecoli.txt`; rows before it are the document header.
const ECOLI_FIRST_ID: &str = "b0001";

//----------------------------
// IdMap
//----------------------------
/// A set-valued mapping from identifiers of one namespace to another.
///
/// One source identifier may resolve to several targets, e.g. a protein
/// belonging to more than one ortholog group.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct IdMap {
    map: BTreeMap<String, BTreeSet<String>>,
}

impl IdMap {
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, source: &str, target: &str) {
        self.map
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string());
    }

    pub fn get(&self, source: &str) -> Option<&BTreeSet<String>> {
        self.map.get(source)
    }

    pub fn contains(&self, source: &str) -> bool {
        self.map.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Two columns of a table, values split on commas.
    ///
    /// Rows containing a tab are split on tabs, so empty cells keep their
    /// position; other rows are split on runs of whitespace. `key_col` and
    /// `value_col` are 0-based. Empty values are dropped, so a key whose value
    /// cell is empty does not appear in the map.
    ///
    /// ```
    /// # use cplx::libs::idmap::IdMap;
    /// let map = IdMap::from_tsv("tests/cplx/og.tsv", 0, 1, true).unwrap();
    /// assert_eq!(map.get("P1").unwrap().len(), 1);
    /// assert!(map.get("P1").unwrap().contains("OG1"));
    /// assert_eq!(map.get("P3").unwrap().len(), 2);
    /// ```
    pub fn from_tsv(
        input: &str,
        key_col: usize,
        value_col: usize,
        header: bool,
    ) -> Result<IdMap, CplxError> {
        let reader = crate::reader(input)?;
        let mut idmap = IdMap::new();
        let min_fields = key_col.max(value_col) + 1;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| CplxError::malformed(input, idx + 1, e.to_string()))?;
            if (header && idx == 0) || line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = if line.contains('\t') {
                line.split('\t').collect()
            } else {
                line.split_whitespace().collect()
            };
            if fields.len() < min_fields {
                return Err(CplxError::malformed(
                    input,
                    idx + 1,
                    format!("expected at least {} fields, found {}", min_fields, fields.len()),
                ));
            }

            let key = fields[key_col].trim();
            for value in fields[value_col].split(',') {
                let value = value.trim();
                if !value.is_empty() {
                    idmap.insert(key, value);
                }
            }
        }
        log::info!("Loaded {} identifiers from {}", idmap.len(), input);

        Ok(idmap)
    }

    /// The UniProt `ecoli.txt` cross-reference document, mapping b-numbers and
    /// JW codes to UniProt accessions.
    ///
    /// ```
    /// # use cplx::libs::idmap::IdMap;
    /// let map = IdMap::from_ecoli("tests/cplx/ecoli.txt").unwrap();
    /// assert!(map.get("b0002").unwrap().contains("P00561"));
    /// assert!(map.get("JW0001").unwrap().contains("P00561"));
    /// assert!(!map.contains("NA"));
    /// ```
    pub fn from_ecoli(input: &str) -> Result<IdMap, CplxError> {
        let reader = crate::reader(input)?;
        let mut idmap = IdMap::new();
        let mut capturing = false;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| CplxError::malformed(input, idx + 1, e.to_string()))?;
            if !capturing {
                if !line.contains(ECOLI_FIRST_ID) {
                    continue;
                }
                capturing = true;
            }
            if line.trim().is_empty() {
                break;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let bnum = match RE_BNUM.captures(fields[0]) {
                Some(caps) => caps[1].to_string(),
                None => {
                    log::debug!("{}:{} is not a locus row", input, idx + 1);
                    continue;
                }
            };

            let has_jw = fields.len() > 1 && fields[1].starts_with("JW");
            let accession_col = if has_jw { 3 } else { 2 };
            if fields.len() <= accession_col {
                return Err(CplxError::malformed(
                    input,
                    idx + 1,
                    format!("locus {} lacks an accession column", bnum),
                ));
            }

            let accession = fields[accession_col];
            idmap.insert(&bnum, accession);
            if has_jw {
                idmap.insert(fields[1], accession);
            }
        }
        log::info!("Mapped {} E. coli identifiers", idmap.len());

        Ok(idmap)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for IdMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut idmap = IdMap::new();
        for (k, v) in iter {
            idmap.insert(k.as_ref(), v.as_ref());
        }
        idmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_valued() {
        let map: IdMap = vec![("P1", "OG1"), ("P1", "OG2"), ("P2", "OG1")]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 2);
        let groups: Vec<_> = map.get("P1").unwrap().iter().cloned().collect();
        assert_eq!(groups, vec!["OG1".to_string(), "OG2".to_string()]);
        assert!(map.get("P9").is_none());
    }

    #[test]
    fn test_from_tsv_value_columns() {
        let map = IdMap::from_tsv("tests/cplx/og_taxa.tsv", 1, 5, false).unwrap();
        let taxa = map.get("OG1").unwrap();
        assert!(taxa.contains("562"));
        assert!(taxa.contains("9606"));
        assert!(map.contains("OG9"));
        assert!(!map.contains("OG8"));
    }

    #[test]
    fn test_from_tsv_short_row() {
        let err = IdMap::from_tsv("tests/cplx/og.tsv", 0, 5, true).unwrap_err();
        assert!(matches!(err, CplxError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_from_tsv_space_separated() {
        let map = IdMap::from_tsv("tests/cplx/og_space.txt", 0, 1, true).unwrap();
        assert!(map.get("P1").unwrap().contains("OG1"));
        assert_eq!(map.get("P3").unwrap().len(), 2);
    }

    #[test]
    fn test_from_tsv_invalid_utf8() {
        let err = IdMap::from_tsv("tests/cplx/og_bad_utf8.tsv", 0, 1, true).unwrap_err();
        match err {
            CplxError::MalformedInput { path, line, .. } => {
                assert_eq!(path, "tests/cplx/og_bad_utf8.tsv");
                assert_eq!(line, 3);
            }
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn test_from_ecoli_invalid_utf8() {
        let err = IdMap::from_ecoli("tests/cplx/ecoli_bad_utf8.txt").unwrap_err();
        assert!(matches!(err, CplxError::MalformedInput { line: 3, .. }));
    }

    #[test]
    fn test_from_ecoli_no_jw() {
        let map = IdMap::from_ecoli("tests/cplx/ecoli.txt").unwrap();
        assert!(map.get("b0004").unwrap().contains("P00934"));
        // stops at the first blank line after the table
        assert!(!map.contains("b9999"));
    }

    #[test]
    fn test_missing_file() {
        let err = IdMap::from_ecoli("tests/cplx/missing.txt").unwrap_err();
        assert!(matches!(err, CplxError::NotFound { .. }));
    }
}
