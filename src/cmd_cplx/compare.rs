use clap::*;
use cplx::libs::complex::ComplexSet;
use cplx::libs::conserve;
use cplx::libs::error::CplxError;
use cplx::libs::idmap::IdMap;
use cplx::libs::report;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("compare")
        .about("Compare experimental complexes to a model set")
        .after_help(
            r###"
For each experimental complex, reports:
* MaxComplexCon - the best single model complex, as matched members over
                  the size of that model complex
* SetCon        - the fraction of its members found in any model complex

Notes:
* Both inputs are long-format tables: <member> <complex-label>, with a header.
* Complex names are prefixed by the set names: <name>_<label>.
* Scores count distinct members and are printed with 4 decimals.
* Complexes without members are skipped with a warning.
* --ecoli translates b-numbers and JW codes to UniProt accessions using the
  UniProt ecoli.txt document before comparing.

Examples:
1. Compare two sets:
   cplx compare complexes_hu.txt complexes_cyc.txt --exp-name hu --model-name cyc

2. With E. coli ID conversion:
   cplx compare hu.txt cyc.txt --exp-name hu --model-name cyc --ecoli ecoli.txt
"###,
        )
        .arg(
            Arg::new("experimental")
                .required(true)
                .index(1)
                .help("Experimental complex file"),
        )
        .arg(
            Arg::new("model")
                .required(true)
                .index(2)
                .help("Model complex file"),
        )
        .arg(
            Arg::new("exp_name")
                .long("exp-name")
                .num_args(1)
                .default_value("exp")
                .help("Short name of the experimental set"),
        )
        .arg(
            Arg::new("model_name")
                .long("model-name")
                .num_args(1)
                .default_value("model")
                .help("Short name of the model set"),
        )
        .arg(
            Arg::new("ecoli")
                .long("ecoli")
                .num_args(1)
                .help("UniProt ecoli.txt for ID conversion"),
        )
        .arg(
            Arg::new("outfile")
                .short('o')
                .long("outfile")
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let exp_file = args.get_one::<String>("experimental").unwrap();
    let model_file = args.get_one::<String>("model").unwrap();
    let exp_name = args.get_one::<String>("exp_name").unwrap();
    let model_name = args.get_one::<String>("model_name").unwrap();
    let outfile = args.get_one::<String>("outfile").unwrap();

    if cplx::same_file(exp_file, model_file) {
        return Err(
            CplxError::DuplicateInput(format!("can't compare {} to itself", exp_file)).into(),
        );
    }

    let mut exp = ComplexSet::from_long_file(exp_file, exp_name)?;
    let mut model = ComplexSet::from_long_file(model_file, model_name)?;

    if let Some(ecoli) = args.get_one::<String>("ecoli") {
        let uniform = IdMap::from_ecoli(ecoli)?;
        exp = exp.translate(&uniform);
        model = model.translate(&uniform);
    }

    let comparison = conserve::compare(&exp, &model)?;

    let mut writer = cplx::writer(outfile)?;
    report::write_conservation(&mut writer, exp_name, &comparison)?;

    Ok(())
}
