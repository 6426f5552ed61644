extern crate clap;
use clap::*;

mod cmd_cplx;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = Command::new("cplx")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`cplx` - Protein complex conservation")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_cplx::to_long::make_subcommand())
        .subcommand(cmd_cplx::compare::make_subcommand())
        .subcommand(cmd_cplx::taxa::make_subcommand())
        .subcommand(cmd_cplx::run::make_subcommand())
        .after_help(
            r###"Subcommands:

* Formats:
    * to-long - Short (one complex per row) to long (one member per row)

* Conservation:
    * compare - Experimental complexes against a model set
    * taxa    - Experimental complexes across taxa via ortholog groups
    * run     - Configurable pipeline of the steps above

Input tables are tab/whitespace separated and the first line is always a header.
Set RUST_LOG=info to see progress messages.

"###,
        );

    match app.get_matches().subcommand() {
        Some(("to-long", sub_matches)) => cmd_cplx::to_long::execute(sub_matches),
        Some(("compare", sub_matches)) => cmd_cplx::compare::execute(sub_matches),
        Some(("taxa", sub_matches)) => cmd_cplx::taxa::execute(sub_matches),
        Some(("run", sub_matches)) => cmd_cplx::run::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
