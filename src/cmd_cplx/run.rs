use clap::*;
use cplx::libs::complex::ComplexSet;
use cplx::libs::error::CplxError;
use cplx::libs::idmap::IdMap;
use cplx::libs::pipeline::{orchestrate, IdConversion, RunConfig, RunData};
use cplx::libs::report;
use std::path::Path;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("run")
        .about("Run the configured comparison steps")
        .after_help(
            r###"
Every step is chosen up front by flags:
* --to-long FILE    convert a short-format file first; the result is the
                    experimental set unless --exp is given
* --compare         compare the experimental set to --model
* --taxa            compare the experimental set across taxa
* --id-mode ecoli   translate E. coli locus IDs with --ecoli before any step

Outputs, written into --outdir:
* complexes_compared_<exp>_vs_<model>.txt
* <exp>_taxa_complexes.tsv, <exp>_taxa_components.tsv, <exp>_unmapped.txt

The paths of the written files are printed, one per line.

Examples:
1. Model comparison:
   cplx run --exp hu.txt --exp-name hu --model cyc.txt --model-name cyc --compare

2. Everything:
   cplx run --to-long hu2009.txt --exp-name hu --model cyc.txt --model-name cyc \
       --compare --taxa --og hu_og.tsv --og-taxa members.tsv \
       --id-mode ecoli --ecoli ecoli.txt --outdir results
"###,
        )
        .arg(
            Arg::new("to_long")
                .long("to-long")
                .num_args(1)
                .help("Short-format file to convert"),
        )
        .arg(
            Arg::new("exp")
                .long("exp")
                .num_args(1)
                .help("Experimental complex file"),
        )
        .arg(
            Arg::new("exp_name")
                .long("exp-name")
                .num_args(1)
                .default_value("exp")
                .help("Short name of the experimental set"),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .num_args(1)
                .help("Model complex file"),
        )
        .arg(
            Arg::new("model_name")
                .long("model-name")
                .num_args(1)
                .default_value("model")
                .help("Short name of the model set"),
        )
        .arg(
            Arg::new("compare")
                .long("compare")
                .action(ArgAction::SetTrue)
                .help("Compare to the model set"),
        )
        .arg(
            Arg::new("taxa")
                .long("taxa")
                .action(ArgAction::SetTrue)
                .help("Compare across taxa"),
        )
        .arg(
            Arg::new("id_mode")
                .long("id-mode")
                .num_args(1)
                .default_value("none")
                .value_parser([
                    builder::PossibleValue::new("none"),
                    builder::PossibleValue::new("ecoli"),
                ])
                .help("Identifier conversion"),
        )
        .arg(
            Arg::new("ecoli")
                .long("ecoli")
                .num_args(1)
                .help("UniProt ecoli.txt"),
        )
        .arg(
            Arg::new("og")
                .long("og")
                .num_args(1)
                .help("Member to ortholog group table"),
        )
        .arg(
            Arg::new("og_taxa")
                .long("og-taxa")
                .num_args(1)
                .help("Ortholog group to taxa table"),
        )
        .arg(
            Arg::new("taxa_key")
                .long("taxa-key")
                .num_args(1)
                .default_value("1")
                .value_parser(value_parser!(usize))
                .help("Group column of --og-taxa"),
        )
        .arg(
            Arg::new("taxa_value")
                .long("taxa-value")
                .num_args(1)
                .default_value("5")
                .value_parser(value_parser!(usize))
                .help("Taxon list column of --og-taxa"),
        )
        .arg(
            Arg::new("outdir")
                .long("outdir")
                .num_args(1)
                .default_value(".")
                .help("Output directory"),
        )
}

pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let config = RunConfig {
        convert_short_to_long: args.contains_id("to_long"),
        compare_to_model: args.get_flag("compare"),
        compare_across_taxa: args.get_flag("taxa"),
        id_conversion: args.get_one::<String>("id_mode").unwrap().parse()?,
    };
    let exp_name = args.get_one::<String>("exp_name").unwrap();
    let model_name = args.get_one::<String>("model_name").unwrap();
    let outdir = Path::new(args.get_one::<String>("outdir").unwrap());

    //----------------------------
    // Inputs
    //----------------------------
    let short_file = args.get_one::<String>("to_long").cloned();
    let exp_file = args.get_one::<String>("exp");

    // without --exp, the short table converted by this run is the experimental set
    let (experimental, exp_file) = match (exp_file, &short_file) {
        (Some(exp_file), _) => (ComplexSet::from_long_file(exp_file, exp_name)?, exp_file),
        (None, Some(short_file)) => (
            ComplexSet::from_short_file(short_file)?.with_prefix(exp_name),
            short_file,
        ),
        (None, None) => {
            return Err(CplxError::Config("no experimental complex file given".to_string()).into());
        }
    };

    let mut data = RunData {
        short_file: short_file.clone(),
        experimental,
        ..Default::default()
    };

    if let Some(model_file) = args.get_one::<String>("model") {
        if cplx::same_file(model_file, exp_file) {
            return Err(
                CplxError::DuplicateInput(format!("can't compare {} to itself", exp_file)).into(),
            );
        }
        if config.compare_to_model {
            data.model = Some(ComplexSet::from_long_file(model_file, model_name)?);
        }
    }
    if let Some(ecoli) = args.get_one::<String>("ecoli") {
        if config.id_conversion == IdConversion::Ecoli {
            data.uniform = Some(IdMap::from_ecoli(ecoli)?);
        }
    }
    if config.compare_across_taxa {
        if let Some(og_file) = args.get_one::<String>("og") {
            data.id_to_og = Some(IdMap::from_tsv(og_file, 0, 1, true)?);
        }
        if let Some(og_taxa_file) = args.get_one::<String>("og_taxa") {
            data.og_to_taxa = Some(IdMap::from_tsv(
                og_taxa_file,
                *args.get_one::<usize>("taxa_key").unwrap(),
                *args.get_one::<usize>("taxa_value").unwrap(),
                false,
            )?);
        }
    }

    //----------------------------
    // Steps
    //----------------------------
    let run = orchestrate(&config, data)?;

    //----------------------------
    // Outputs
    //----------------------------
    if let Some(long_file) = &run.long_file {
        println!("{}", long_file.display());
    }

    if run.comparison.is_some() || run.taxa.is_some() {
        std::fs::create_dir_all(outdir)?;
    }

    if let Some(comparison) = &run.comparison {
        let path = outdir.join(format!("complexes_compared_{}_vs_{}.txt", exp_name, model_name));
        let mut writer = cplx::writer(&path.to_string_lossy())?;
        report::write_conservation(&mut writer, exp_name, comparison)?;
        println!("{}", path.display());
    }

    if let Some(taxa) = &run.taxa {
        let path = outdir.join(format!("{}_taxa_complexes.tsv", exp_name));
        let mut writer = cplx::writer(&path.to_string_lossy())?;
        report::write_matrix(&mut writer, &format!("{}_Complex", exp_name), &taxa.complexes)?;
        println!("{}", path.display());

        let path = outdir.join(format!("{}_taxa_components.tsv", exp_name));
        let mut writer = cplx::writer(&path.to_string_lossy())?;
        report::write_matrix(&mut writer, "OG", &taxa.components)?;
        println!("{}", path.display());

        let path = outdir.join(format!("{}_unmapped.txt", exp_name));
        let mut writer = cplx::writer(&path.to_string_lossy())?;
        report::write_list(&mut writer, &taxa.unmapped)?;
        println!("{}", path.display());
    }

    Ok(())
}
