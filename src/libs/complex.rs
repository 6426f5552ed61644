use crate::libs::error::CplxError;
use crate::libs::idmap::IdMap;
use std::collections::{BTreeMap, BTreeSet};

//----------------------------
// ComplexSet
//----------------------------
/// Complex names mapped to their member lists.
///
/// Members are kept in load order and duplicates are tolerated. Iteration is
/// ordered by complex name.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct ComplexSet {
    complexes: BTreeMap<String, Vec<String>>,
}

impl ComplexSet {
    pub fn new() -> Self {
        Self {
            complexes: BTreeMap::new(),
        }
    }

    /// Appends `member` to `complex`, creating the complex if needed
    pub fn insert(&mut self, complex: &str, member: &str) {
        self.complexes
            .entry(complex.to_string())
            .or_default()
            .push(member.to_string());
    }

    /// Registers a complex with no members yet
    pub fn insert_empty(&mut self, complex: &str) {
        self.complexes.entry(complex.to_string()).or_default();
    }

    pub fn members(&self, complex: &str) -> Option<&Vec<String>> {
        self.complexes.get(complex)
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.complexes.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.complexes.iter()
    }

    pub fn len(&self) -> usize {
        self.complexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.complexes.is_empty()
    }

    /// All distinct members across every complex
    pub fn components(&self) -> BTreeSet<&str> {
        self.complexes
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Loads a long-format table, one `member label` pair per row.
    ///
    /// The header line is discarded. Complex names become
    /// `<prefix>_<label>`.
    ///
    /// ```
    /// # use cplx::libs::complex::ComplexSet;
    /// let set = ComplexSet::from_long_file("tests/cplx/exp.tsv", "exp").unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.members("exp_A").unwrap(), &vec!["P1".to_string(), "P2".to_string()]);
    /// ```
    pub fn from_long_file(input: &str, prefix: &str) -> Result<ComplexSet, CplxError> {
        let mut set = ComplexSet::new();

        for row in crate::data_rows(input)? {
            let (line, fields) = row?;
            if fields.len() < 2 {
                return Err(CplxError::malformed(
                    input,
                    line,
                    format!("expected member and complex label, found {:?}", fields),
                ));
            }
            set.insert(&format!("{}_{}", prefix, fields[1]), &fields[0]);
        }
        log::info!("Loaded {} complexes from {}", set.len(), input);

        Ok(set)
    }

    /// Loads a short-format table, one `label member...` complex per row.
    ///
    /// Labels are kept as they are. A label repeated on several rows gathers
    /// the members of all of them.
    ///
    /// ```
    /// # use cplx::libs::complex::ComplexSet;
    /// let set = ComplexSet::from_short_file("tests/cplx/short.tsv").unwrap();
    /// assert_eq!(set.members("1").unwrap().len(), 3);
    /// ```
    pub fn from_short_file(input: &str) -> Result<ComplexSet, CplxError> {
        let mut set = ComplexSet::new();

        for row in crate::data_rows(input)? {
            let (line, fields) = row?;
            if fields.len() < 2 {
                return Err(CplxError::malformed(
                    input,
                    line,
                    format!("complex {} has no members", fields[0]),
                ));
            }
            for member in &fields[1..] {
                set.insert(&fields[0], member);
            }
        }

        Ok(set)
    }

    /// Renames every complex to `<prefix>_<name>`, as the long-format loader
    /// names them
    pub fn with_prefix(&self, prefix: &str) -> ComplexSet {
        let complexes = self
            .complexes
            .iter()
            .map(|(name, members)| (format!("{}_{}", prefix, name), members.clone()))
            .collect();

        ComplexSet { complexes }
    }

    /// Replaces every member by its targets in `idmap`.
    ///
    /// Members without an entry are kept unchanged. A member with several
    /// targets contributes all of them, in sorted order.
    pub fn translate(&self, idmap: &IdMap) -> ComplexSet {
        let mut set = ComplexSet::new();
        let mut missed = 0;

        for (name, members) in &self.complexes {
            set.insert_empty(name);
            for member in members {
                match idmap.get(member) {
                    Some(targets) => {
                        for target in targets {
                            set.insert(name, target);
                        }
                    }
                    None => {
                        missed += 1;
                        set.insert(name, member);
                    }
                }
            }
        }
        if missed > 0 {
            log::info!("{} members had no identifier conversion", missed);
        }

        set
    }
}

impl<C: AsRef<str>, M: AsRef<str>> FromIterator<(C, M)> for ComplexSet {
    fn from_iter<I: IntoIterator<Item = (C, M)>>(iter: I) -> Self {
        let mut set = ComplexSet::new();
        for (c, m) in iter {
            set.insert(c.as_ref(), m.as_ref());
        }
        set
    }
}
