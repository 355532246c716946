use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the output formats registered by mdconv-core.
// Build scripts can't reach the library, so the names are duplicated here.
const AVAILABLE_FORMATS: &[&str] = &["html", "html-document"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdconv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdconv.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert Markdown to HTML (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input Markdown file, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        ))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("list-formats").about("List the available output formats"))
        .subcommand(
            Command::new("generate-css").about("Output the baseline CSS used for HTML documents"),
        );

    generate_to(Bash, &mut cmd, "mdconv", &outdir)?;
    generate_to(Zsh, &mut cmd, "mdconv", &outdir)?;
    generate_to(Fish, &mut cmd, "mdconv", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
