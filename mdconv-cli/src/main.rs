// Command-line interface for mdconv
//
// The mdconv program turns Markdown into HTML, either as a bare fragment or as a
// standalone document. All conversion logic lives in mdconv-core; this binary
// only deals with arguments, configuration, files and streams.
//
// Usage:
//  mdconv <input> [--to <format>] [--output <file>]          - Convert (default command)
//  mdconv convert <input> [--to <format>] [--output <file>]  - Same as above (explicit)
//  mdconv list-formats                                       - List output formats
//  mdconv generate-css                                       - Print the baseline stylesheet
//
// Use `-` as the input path to read Markdown from stdin.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Parameters that map onto configuration
// (shield-fences, title, theme, css) update the loaded config; everything else is
// handed to the format, which rejects keys it does not know.
// Example:
//  mdconv notes.md -o notes.html --extra-theme serif --extra-shield-fences

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, ValueHint};
use mdconv_config::{Loader, MdconvConfig};
use mdconv_core::formats::options::parse_bool_flag;
use mdconv_core::formats::{default_css, HtmlDocumentFormat, HtmlFormat};
use mdconv_core::{DocumentOptions, FormatError, FormatRegistry, HtmlTheme, RenderOptions};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "list-formats", "generate-css", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mdconv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to HTML")
        .long_about(
            "mdconv converts Markdown text into HTML.\n\n\
            Commands:\n  \
            - convert:      Render Markdown as an HTML fragment or document (default)\n  \
            - list-formats: Show the available output formats\n  \
            - generate-css: Print the stylesheet embedded in HTML documents\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdconv notes.md                          # HTML fragment on stdout\n  \
            mdconv notes.md -o notes.html            # Standalone document\n  \
            cat notes.md | mdconv - --to html        # Read from stdin\n  \
            mdconv notes.md --extra-shield-fences    # Leave code blocks untouched",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Render a Markdown file as HTML.\n\n\
                    Formats:\n  \
                    - html:          HTML fragment, no <html>/<head> shell\n  \
                    - html-document: Standalone HTML5 document with embedded CSS\n\n\
                    Without --to, the format is taken from the output file extension\n\
                    (.html/.htm select html-document), falling back to the configured\n\
                    default format.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
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
                        .help("Output format (see list-formats)")
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
            Command::new("generate-css")
                .about("Output the baseline CSS used for HTML documents")
                .long_about(
                    "Outputs the baseline CSS embedded in html-document output.\n\n\
                    Save it to a file, edit it, and pass it back via --extra-css\n\
                    (or convert.document.custom_css) to extend the default styles.",
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Without a subcommand the arguments belong to the default convert command
            if should_inject_convert(&cleaned_args, e.kind()) {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_count("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    if let Err(e) = apply_config_overrides(&mut config, &mut extra_params) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .map(|s| s.as_str())
                .unwrap_or("-");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &extra_params, &config);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn should_inject_convert(args: &[String], kind: ErrorKind) -> bool {
    let wants_help = matches!(
        kind,
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    args.len() > 1
        && !wants_help
        && !args[1..]
            .iter()
            .any(|arg| SUBCOMMANDS.contains(&arg.as_str()))
}

fn init_logging(verbosity: u8) {
    let default_directives = match verbosity {
        0 => "warn",
        1 => "mdconv=debug,mdconv_core=debug,mdconv_config=debug",
        _ => "mdconv=trace,mdconv_core=trace,mdconv_config=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MdconvConfig,
) {
    let registry = build_registry(config);
    let format = resolve_format(&registry, to, output, config);

    if let Err(e) = registry.get(&format) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });

    debug!(input, format = %format, bytes = source.len(), "converting");

    let html = registry
        .render(&source, &format, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            debug!(path, "wrote output");
        }
        None => print!("{html}"),
    }
}

/// Handle the list-formats command
///
/// Names and descriptions do not depend on configuration, so no document
/// assets are loaded here.
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {name:<15} {}", format.description());
        }
    }
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", default_css());
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

/// Pick the output format: explicit --to, then the output file extension,
/// then the configured default.
fn resolve_format(
    registry: &FormatRegistry,
    to: Option<&str>,
    output: Option<&str>,
    config: &MdconvConfig,
) -> String {
    if let Some(to) = to {
        return to.to_string();
    }
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.convert.default_format.clone())
}

/// Register the built-in formats with their defaults taken from configuration.
fn build_registry(config: &MdconvConfig) -> FormatRegistry {
    let render = RenderOptions::from(&config.render);
    let document = document_options_from_config(config);

    let mut registry = FormatRegistry::new();
    registry.register(HtmlFormat::new(render.clone()));
    registry.register(HtmlDocumentFormat::new(render, document));
    registry
}

fn document_options_from_config(config: &MdconvConfig) -> DocumentOptions {
    let cfg = &config.convert.document;

    let theme = HtmlTheme::from_name(&cfg.theme).unwrap_or_else(|| {
        eprintln!(
            "Unknown theme '{}' (expected 'modern' or 'serif')",
            cfg.theme
        );
        std::process::exit(1);
    });

    let custom_css = cfg.custom_css.as_deref().map(|path| {
        fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading CSS file '{path}': {e}");
            std::process::exit(1);
        })
    });

    DocumentOptions {
        title: cfg.title.clone(),
        theme,
        custom_css,
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdconvConfig {
    let loader = Loader::new().with_optional_file("mdconv.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(
    config: &mut MdconvConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<(), FormatError> {
    config.render.shield_code_fences = parse_bool_flag(
        extra_params,
        "shield-fences",
        config.render.shield_code_fences,
    )?;
    extra_params.remove("shield-fences");

    if let Some(raw) = take_override(extra_params, &["theme"]) {
        config.convert.document.theme = raw;
    }

    if let Some(raw) = take_override(extra_params, &["title"]) {
        config.convert.document.title = Some(raw);
    }

    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.convert.document.custom_css = Some(path);
    }

    Ok(())
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}
