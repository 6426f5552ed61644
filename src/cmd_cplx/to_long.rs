use clap::*;
use cplx::libs::complex::ComplexSet;
use cplx::libs::convert;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("to-long")
        .about("Convert a short complex table to long format")
        .after_help(
            r###"
Reshapes a complex-per-row table into a member-per-row table.

Notes:
* Input rows: <complex-label> <member-1> <member-2> ...
* The first line is a header and is discarded.
* Output rows: <member>\t<complex-label>, under the header
  ProteinID\tComplexMembership
* Without --outfile, writes <stem>_long.txt next to the input.
* Row order is not preserved.

Examples:
1. Convert next to the input:
   cplx to-long hu2009.txt

2. Write to screen:
   cplx to-long hu2009.txt -o stdout
"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input short-format file. [stdin] for standard input"),
        )
        .arg(
            Arg::new("outfile")
                .short('o')
                .long("outfile")
                .num_args(1)
                .help("Output filename. [stdout] for screen"),
        )
}

pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let infile = args.get_one::<String>("infile").unwrap();

    match args.get_one::<String>("outfile") {
        Some(outfile) => {
            let set = ComplexSet::from_short_file(infile)?;
            let mut writer = cplx::writer(outfile)?;
            convert::write_long(&set, &mut writer)?;
        }
        None => {
            convert::convert_to_long(infile)?;
        }
    }

    Ok(())
}
