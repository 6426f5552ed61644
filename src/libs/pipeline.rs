use crate::libs::complex::ComplexSet;
use crate::libs::conserve::{compare, Comparison};
use crate::libs::convert::convert_to_long;
use crate::libs::error::CplxError;
use crate::libs::idmap::IdMap;
use crate::libs::ortholog::{compare_across_taxa, TaxaComparison};
use std::path::PathBuf;
use std::str::FromStr;

/// How member identifiers are unified before comparison
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdConversion {
    #[default]
    None,
    /// E. coli b-numbers and JW codes to UniProt accessions
    Ecoli,
}

impl FromStr for IdConversion {
    type Err = CplxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(IdConversion::None),
            "ecoli" => Ok(IdConversion::Ecoli),
            _ => Err(CplxError::Config(format!("unknown ID conversion mode {}", s))),
        }
    }
}

/// The steps of one run, decided up front
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub convert_short_to_long: bool,
    pub compare_to_model: bool,
    pub compare_across_taxa: bool,
    pub id_conversion: IdConversion,
}

/// Already-loaded inputs of one run
#[derive(Default, Clone, Debug)]
pub struct RunData {
    /// Short-format table to reshape, required by `convert_short_to_long`
    pub short_file: Option<String>,
    pub experimental: ComplexSet,
    pub model: Option<ComplexSet>,
    /// Locus IDs to uniform IDs, required by [`IdConversion::Ecoli`]
    pub uniform: Option<IdMap>,
    pub id_to_og: Option<IdMap>,
    pub og_to_taxa: Option<IdMap>,
}

#[derive(Default, Debug)]
pub struct RunReport {
    /// Long-format table written next to the short one
    pub long_file: Option<PathBuf>,
    pub comparison: Option<Comparison>,
    pub taxa: Option<TaxaComparison>,
}

impl RunConfig {
    /// Checks that `data` carries what the requested steps need
    pub fn validate(&self, data: &RunData) -> Result<(), CplxError> {
        if self.convert_short_to_long && data.short_file.is_none() {
            return Err(CplxError::Config(
                "short-to-long conversion requested without a short-format file".to_string(),
            ));
        }
        if self.compare_to_model && data.model.is_none() {
            return Err(CplxError::Config(
                "model comparison requested without a model set".to_string(),
            ));
        }
        if self.compare_across_taxa && (data.id_to_og.is_none() || data.og_to_taxa.is_none()) {
            return Err(CplxError::Config(
                "taxon comparison requires both ortholog group and taxon tables".to_string(),
            ));
        }
        if self.id_conversion == IdConversion::Ecoli && data.uniform.is_none() {
            return Err(CplxError::Config(
                "ecoli ID conversion requested without a conversion table".to_string(),
            ));
        }

        Ok(())
    }
}

/// Runs the enabled steps over `data`.
///
/// Short-to-long conversion is the only step that touches the filesystem: it
/// writes the long-format table and reports its path. The engines work on the
/// sets already in `data`.
pub fn orchestrate(config: &RunConfig, data: RunData) -> Result<RunReport, CplxError> {
    config.validate(&data)?;

    let mut report = RunReport::default();

    if config.convert_short_to_long {
        if let Some(short_file) = &data.short_file {
            report.long_file = Some(convert_to_long(short_file)?);
        }
    }

    let (experimental, model) = match (config.id_conversion, &data.uniform) {
        (IdConversion::Ecoli, Some(uniform)) => (
            data.experimental.translate(uniform),
            data.model.as_ref().map(|m| m.translate(uniform)),
        ),
        _ => (data.experimental, data.model),
    };

    if config.compare_to_model {
        if let Some(model) = &model {
            report.comparison = Some(compare(&experimental, model)?);
        }
    }

    if config.compare_across_taxa {
        if let (Some(id_to_og), Some(og_to_taxa)) = (&data.id_to_og, &data.og_to_taxa) {
            report.taxa = Some(compare_across_taxa(&experimental, id_to_og, og_to_taxa)?);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    fn data() -> RunData {
        RunData {
            short_file: None,
            experimental: vec![("e_A", "b0001"), ("e_A", "b0002")].into_iter().collect(),
            model: Some(
                vec![("m_X", "P0AD86"), ("m_X", "P00561")]
                    .into_iter()
                    .collect(),
            ),
            uniform: Some(
                vec![("b0001", "P0AD86"), ("b0002", "P00561")]
                    .into_iter()
                    .collect(),
            ),
            id_to_og: Some(vec![("P0AD86", "OG1")].into_iter().collect()),
            og_to_taxa: Some(vec![("OG1", "562")].into_iter().collect()),
        }
    }

    #[test]
    fn test_config_steps() {
        let config = RunConfig {
            compare_to_model: true,
            ..Default::default()
        };
        let report = orchestrate(&config, data()).unwrap();
        assert!(report.taxa.is_none());

        // no conversion: locus IDs never meet accessions
        let record = report.comparison.unwrap().records["e_A"];
        assert_relative_eq!(record.set_coverage, 0.0);
    }

    #[test]
    fn test_ecoli_conversion() {
        let config = RunConfig {
            compare_to_model: true,
            compare_across_taxa: true,
            id_conversion: IdConversion::Ecoli,
            ..Default::default()
        };
        let report = orchestrate(&config, data()).unwrap();

        let record = report.comparison.unwrap().records["e_A"];
        assert_relative_eq!(record.max_complex_overlap, 1.0);
        assert_relative_eq!(record.set_coverage, 1.0);

        let taxa = report.taxa.unwrap();
        assert!(taxa.complexes.is_present("e_A", "562"));
        assert!(taxa.unmapped.contains("P00561"));
    }

    #[test]
    fn test_missing_inputs() {
        let config = RunConfig {
            compare_across_taxa: true,
            ..Default::default()
        };
        let mut data = data();
        data.og_to_taxa = None;
        assert!(matches!(
            orchestrate(&config, data),
            Err(CplxError::Config(_))
        ));
    }

    #[test]
    fn test_short_to_long_step() {
        let temp = TempDir::new().unwrap();
        let short = temp.path().join("hu2009.txt");
        std::fs::copy("tests/cplx/short.tsv", &short).unwrap();

        let config = RunConfig {
            convert_short_to_long: true,
            ..Default::default()
        };
        let data = RunData {
            short_file: Some(short.to_string_lossy().to_string()),
            ..Default::default()
        };
        let report = orchestrate(&config, data).unwrap();

        let long_file = report.long_file.unwrap();
        assert_eq!(long_file, temp.path().join("hu2009_long.txt"));
        assert!(long_file.is_file());
        assert!(report.comparison.is_none());

        // the step is skipped unless configured
        let data = RunData {
            short_file: Some(short.to_string_lossy().to_string()),
            ..Default::default()
        };
        let report = orchestrate(&RunConfig::default(), data).unwrap();
        assert!(report.long_file.is_none());
    }

    #[test]
    fn test_short_to_long_without_file() {
        let config = RunConfig {
            convert_short_to_long: true,
            ..Default::default()
        };
        assert!(matches!(
            orchestrate(&config, RunData::default()),
            Err(CplxError::Config(_))
        ));
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("ECOLI".parse::<IdConversion>().unwrap(), IdConversion::Ecoli);
        assert_eq!("none".parse::<IdConversion>().unwrap(), IdConversion::None);
        assert!("yeast".parse::<IdConversion>().is_err());
    }
}
