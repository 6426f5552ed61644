use crate::libs::complex::ComplexSet;
use crate::libs::error::CplxError;
use crate::libs::idmap::IdMap;
use std::collections::{BTreeMap, BTreeSet};

//----------------------------
// PresenceMatrix
//----------------------------
/// Sparse boolean matrix: row labels mapped to the column labels they are
/// present in. Every matrix carries the full column set, so rows with no
/// presence still print as all zeros.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct PresenceMatrix {
    rows: BTreeMap<String, BTreeSet<String>>,
    columns: BTreeSet<String>,
}

impl PresenceMatrix {
    pub fn new(columns: BTreeSet<String>) -> Self {
        Self {
            rows: BTreeMap::new(),
            columns,
        }
    }

    /// Adds `present` to a row. Labels outside the column set are ignored.
    pub fn extend_row<'a, I>(&mut self, row: &str, present: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        let cells = self.rows.entry(row.to_string()).or_default();
        for col in present {
            if self.columns.contains(col) {
                cells.insert(col.clone());
            }
        }
    }

    pub fn is_present(&self, row: &str, col: &str) -> bool {
        self.rows.get(row).is_some_and(|cells| cells.contains(col))
    }

    pub fn row(&self, row: &str) -> Option<&BTreeSet<String>> {
        self.rows.get(row)
    }

    pub fn rows(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.rows.iter()
    }

    pub fn columns(&self) -> &BTreeSet<String> {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Component- and complex-level presence across taxa
#[derive(Default, Clone, Debug)]
pub struct TaxaComparison {
    /// One row per ortholog group reached from the experimental components
    pub components: PresenceMatrix,
    /// One row per experimental complex
    pub complexes: PresenceMatrix,
    /// Components absent from the group map, kept as self-named groups
    pub unmapped: BTreeSet<String>,
}

/// Projects an experimental set onto taxa through ortholog groups.
///
/// Components missing from `id_to_og` stand for themselves as a
/// single-member group and are listed in [`TaxaComparison::unmapped`].
/// Groups missing from `og_to_taxa` add no columns.
///
/// ```
/// # use cplx::libs::complex::ComplexSet;
/// # use cplx::libs::idmap::IdMap;
/// # use cplx::libs::ortholog::compare_across_taxa;
/// let exp: ComplexSet = vec![("A", "P1"), ("A", "P2")].into_iter().collect();
/// let id_to_og: IdMap = vec![("P1", "OG1")].into_iter().collect();
/// let og_to_taxa: IdMap = vec![("OG1", "562"), ("OG1", "9606")].into_iter().collect();
///
/// let taxa = compare_across_taxa(&exp, &id_to_og, &og_to_taxa).unwrap();
/// assert_eq!(taxa.complexes.columns().len(), 2);
/// assert!(taxa.complexes.is_present("A", "562"));
/// assert!(taxa.unmapped.contains("P2"));
/// assert!(taxa.components.row("P2").unwrap().is_empty());
/// ```
pub fn compare_across_taxa(
    experimental: &ComplexSet,
    id_to_og: &IdMap,
    og_to_taxa: &IdMap,
) -> Result<TaxaComparison, CplxError> {
    if experimental.is_empty() {
        return Err(CplxError::InvalidComplex(
            "experimental set has no complexes".to_string(),
        ));
    }

    // component -> group tokens
    let mut unmapped = BTreeSet::new();
    let mut groups_of: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for component in experimental.components() {
        let groups = match id_to_og.get(component) {
            Some(groups) => groups.clone(),
            None => {
                unmapped.insert(component.to_string());
                BTreeSet::from([component.to_string()])
            }
        };
        groups_of.insert(component, groups);
    }

    // group -> taxa, and the column set
    let empty = BTreeSet::new();
    let mut taxa_of: BTreeMap<&str, &BTreeSet<String>> = BTreeMap::new();
    let mut columns: BTreeSet<String> = BTreeSet::new();
    for group in groups_of.values().flatten() {
        let taxa = og_to_taxa.get(group).unwrap_or(&empty);
        columns.extend(taxa.iter().cloned());
        taxa_of.insert(group.as_str(), taxa);
    }

    let mut components = PresenceMatrix::new(columns.clone());
    for (group, taxa) in &taxa_of {
        components.extend_row(group, taxa.iter());
    }

    let mut complexes = PresenceMatrix::new(columns);
    for (name, members) in experimental.iter() {
        complexes.extend_row(name, std::iter::empty());
        for member in members {
            for group in &groups_of[member.as_str()] {
                complexes.extend_row(name, taxa_of[group.as_str()].iter());
            }
        }
    }

    if !unmapped.is_empty() {
        log::warn!(
            "{} of {} components have no ortholog group",
            unmapped.len(),
            groups_of.len()
        );
    }
    log::info!(
        "{} groups and {} complexes across {} taxa",
        components.len(),
        complexes.len(),
        complexes.columns().len()
    );

    Ok(TaxaComparison {
        components,
        complexes,
        unmapped,
    })
}
