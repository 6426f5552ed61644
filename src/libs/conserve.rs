use crate::libs::complex::ComplexSet;
use crate::libs::error::CplxError;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Conservation of one experimental complex within the model set
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct ConservationRecord {
    /// Best single model complex: matched members over that model complex's size
    pub max_complex_overlap: f64,
    /// Fraction of the experimental complex found anywhere in the model set
    pub set_coverage: f64,
}

/// Result of comparing an experimental set against a model set
#[derive(Default, Clone, Debug)]
pub struct Comparison {
    pub records: BTreeMap<String, ConservationRecord>,
    /// Experimental complexes without members, left out of `records`
    pub invalid: Vec<String>,
}

impl Comparison {
    pub fn get(&self, complex: &str) -> Option<&ConservationRecord> {
        self.records.get(complex)
    }
}

/// Model complexes indexed by member, so each experimental complex only
/// visits the model complexes it shares a member with.
struct ModelIndex<'a> {
    sizes: Vec<usize>,
    containing: HashMap<&'a str, Vec<usize>>,
}

impl<'a> ModelIndex<'a> {
    fn build(model: &'a ComplexSet) -> Result<Self, CplxError> {
        let mut sizes = vec![];
        let mut containing: HashMap<&str, Vec<usize>> = HashMap::new();

        for (i, (name, members)) in model.iter().enumerate() {
            let distinct: BTreeSet<&str> = members.iter().map(String::as_str).collect();
            if distinct.is_empty() {
                return Err(CplxError::InvalidComplex(format!(
                    "model complex {} has no members",
                    name
                )));
            }
            sizes.push(distinct.len());
            for member in distinct {
                containing.entry(member).or_default().push(i);
            }
        }

        Ok(Self { sizes, containing })
    }

    /// None for an experimental complex without members
    fn score(&self, members: &[String]) -> Option<ConservationRecord> {
        let distinct: BTreeSet<&str> = members.iter().map(String::as_str).collect();
        if distinct.is_empty() {
            return None;
        }

        let mut matched: HashMap<usize, usize> = HashMap::new();
        let mut covered = 0usize;
        for member in &distinct {
            if let Some(hits) = self.containing.get(*member) {
                covered += 1;
                for &c in hits {
                    *matched.entry(c).or_insert(0) += 1;
                }
            }
        }

        let max_complex_overlap = matched
            .iter()
            .map(|(&c, &n)| n as f64 / self.sizes[c] as f64)
            .fold(0.0, f64::max);

        Some(ConservationRecord {
            max_complex_overlap,
            set_coverage: covered as f64 / distinct.len() as f64,
        })
    }
}

/// Scores every experimental complex against the model set.
///
/// Ratios count distinct members. A model complex without members fails the
/// whole comparison before any record is produced; an experimental complex
/// without members is skipped and listed in [`Comparison::invalid`].
///
/// ```
/// # use cplx::libs::complex::ComplexSet;
/// # use cplx::libs::conserve::compare;
/// let exp: ComplexSet = vec![("A", "P1"), ("A", "P2"), ("B", "P3")].into_iter().collect();
/// let model: ComplexSet = vec![("X", "P1"), ("X", "P2"), ("X", "P4"), ("Y", "P3")]
///     .into_iter()
///     .collect();
///
/// let comparison = compare(&exp, &model).unwrap();
/// let a = comparison.get("A").unwrap();
/// assert!((a.max_complex_overlap - 2.0 / 3.0).abs() < 1e-9);
/// assert_eq!(a.set_coverage, 1.0);
/// ```
pub fn compare(experimental: &ComplexSet, model: &ComplexSet) -> Result<Comparison, CplxError> {
    let index = ModelIndex::build(model)?;
    let mut comparison = Comparison::default();

    for (name, members) in experimental.iter() {
        match index.score(members) {
            Some(record) => {
                comparison.records.insert(name.clone(), record);
            }
            None => {
                log::warn!("Skipping complex {}: it has no members", name);
                comparison.invalid.push(name.clone());
            }
        }
    }

    Ok(comparison)
}
