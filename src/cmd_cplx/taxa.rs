use clap::*;
use cplx::libs::complex::ComplexSet;
use cplx::libs::idmap::IdMap;
use cplx::libs::ortholog;
use cplx::libs::report;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("taxa")
        .about("Presence of experimental complexes across taxa")
        .after_help(
            r###"
Maps every complex member to ortholog groups, then groups to taxa, and writes
a 0/1 presence matrix.

Notes:
* --og is a table of <member> <group>[,<group>...] with a header line.
  Rows with a tab are split on tabs, other rows on whitespace.
* --og-taxa is an eggNOG-style members table without header. By default the
  group is column 1 and the comma-separated taxon list is column 5 (0-based);
  see --taxa-key and --taxa-value.
* --level complex: one row per complex; --level component: one row per group.
* Members with no group stay in the component matrix under their own name
  and are counted as unmapped.

Examples:
1. Complex-level matrix:
   cplx taxa complexes_hu.txt --name hu --og hu_og.tsv --og-taxa members.tsv

2. Group-level matrix, listing unmapped members:
   cplx taxa hu.txt --og hu_og.tsv --og-taxa members.tsv --level component --unmapped un.txt
"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Experimental complex file"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .num_args(1)
                .default_value("exp")
                .help("Short name of the experimental set"),
        )
        .arg(
            Arg::new("og")
                .long("og")
                .required(true)
                .num_args(1)
                .help("Member to ortholog group table"),
        )
        .arg(
            Arg::new("og_taxa")
                .long("og-taxa")
                .required(true)
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
            Arg::new("ecoli")
                .long("ecoli")
                .num_args(1)
                .help("UniProt ecoli.txt for ID conversion"),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .num_args(1)
                .default_value("complex")
                .value_parser([
                    builder::PossibleValue::new("complex"),
                    builder::PossibleValue::new("component"),
                ])
                .help("Rows of the matrix"),
        )
        .arg(
            Arg::new("unmapped")
                .long("unmapped")
                .num_args(1)
                .help("Write members without ortholog group to this file"),
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
    let infile = args.get_one::<String>("infile").unwrap();
    let name = args.get_one::<String>("name").unwrap();
    let og_file = args.get_one::<String>("og").unwrap();
    let og_taxa_file = args.get_one::<String>("og_taxa").unwrap();
    let taxa_key = *args.get_one::<usize>("taxa_key").unwrap();
    let taxa_value = *args.get_one::<usize>("taxa_value").unwrap();
    let level = args.get_one::<String>("level").unwrap();
    let outfile = args.get_one::<String>("outfile").unwrap();

    let mut exp = ComplexSet::from_long_file(infile, name)?;
    if let Some(ecoli) = args.get_one::<String>("ecoli") {
        exp = exp.translate(&IdMap::from_ecoli(ecoli)?);
    }

    let id_to_og = IdMap::from_tsv(og_file, 0, 1, true)?;
    let og_to_taxa = IdMap::from_tsv(og_taxa_file, taxa_key, taxa_value, false)?;

    let taxa = ortholog::compare_across_taxa(&exp, &id_to_og, &og_to_taxa)?;

    let mut writer = cplx::writer(outfile)?;
    match level.as_str() {
        "component" => report::write_matrix(&mut writer, "OG", &taxa.components)?,
        _ => report::write_matrix(&mut writer, &format!("{}_Complex", name), &taxa.complexes)?,
    }

    if let Some(unmapped) = args.get_one::<String>("unmapped") {
        let mut writer = cplx::writer(unmapped)?;
        report::write_list(&mut writer, &taxa.unmapped)?;
    }

    Ok(())
}
