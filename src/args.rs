// Copyright (c) 2025 Nicholas D. Crosbie
use clap::{Arg, ArgAction, Command};

pub struct Args {
    pub input_file: Option<String>,
    pub output_file: Option<String>,
    pub filter: Option<String>,
    pub verbose: bool,
    pub markdown_help: bool,
}

/// Immutable run configuration handed to the traversal controller.
#[derive(Debug, Clone)]
pub struct Config {
    pub filter: Option<String>,
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            filter: self.filter.clone(),
            verbose: self.verbose,
        }
    }
}

// Add this new function that returns the Command definition
pub fn command() -> Command {
    Command::new("declcsv")
        .about("Tabulate the members of parsed C/C++ declarations as pipe-delimited CSV")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .after_help("Copyright (c) 2025 Nicholas D. Crosbie")
        .arg(
            Arg::new("input")
                .help("The serialized declaration tree (JSON) to tabulate")
                .required_unless_present("markdown_help")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Write rows to the specified file instead of stdout")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .help("Only emit the class/struct with this exact name (last occurrence wins)")
                .value_name("NAME")
                .action(ArgAction::Set)
                .overrides_with("filter"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print progress messages to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("markdown_help")
                .long("markdown-help")
                .help("Generate a markdown version of the help text")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> Args {
    let matches = command().get_matches();

    Args {
        input_file: matches.get_one::<String>("input").cloned(),
        output_file: matches.get_one::<String>("output").cloned(),
        filter: matches.get_one::<String>("filter").cloned(),
        verbose: matches.get_flag("verbose"),
        markdown_help: matches.get_flag("markdown_help"),
    }
}
