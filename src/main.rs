// Copyright (c) 2025 Nicholas D. Crosbie
use chrono::Local;
use declcsv::analysis::{emit_children, CsvCollector};
use declcsv::args;
use declcsv::utils::load_tree;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;

fn main() -> Result<(), Box<dyn Error>> {
    let args = args::parse_args();

    if args.markdown_help {
        println!("{}", clap_markdown::help_markdown_command(&args::command()));
        return Ok(());
    }

    let config = args.config();

    if config.verbose {
        if let Some(filter) = &config.filter {
            eprintln!("Filtering container {}", filter);
        }
    }

    // clap enforces the positional unless --markdown-help was given
    let input_file = args.input_file.ok_or("an input tree is required")?;
    let tree = load_tree(Path::new(&input_file))?;

    // The sink is opened once for the whole run; failing to open it is the
    // only fatal condition in the generator itself
    let sink: Box<dyn Write> = match &args.output_file {
        Some(path) => {
            if config.verbose {
                eprintln!("Opening output file {}", path);
            }
            match File::create(path) {
                Ok(file) => Box::new(BufWriter::new(file)),
                Err(err) => {
                    eprintln!("Error: cannot open output file '{}': {}", path, err);
                    process::exit(1);
                }
            }
        }
        None => Box::new(io::stdout()),
    };

    let mut collector = CsvCollector::new(&config, sink);
    emit_children(&tree, &mut collector)?;

    if config.verbose {
        eprintln!("Emitted {} container(s)", collector.containers_emitted());
    }

    let mut sink = collector.into_sink();
    sink.flush()?;

    if config.verbose {
        let now = Local::now();
        eprintln!(
            "Code generation complete at {}",
            now.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}
