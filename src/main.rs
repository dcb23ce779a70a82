use std::{env, fs::read_to_string, process::exit, rc::Rc, time::Instant};

use log::LevelFilter;

use frappe::{
    format_error,
    lexer::{lexer::tokenize, stream::TokenStream},
    parser::parser::{parse_with, ParserOptions},
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let (file_path, options, trace) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            eprintln!(
                "Usage: {} <file> [--max-depth N] [--trace]",
                args.first().map(String::as_str).unwrap_or("frappe")
            );
            exit(2);
        }
    };

    init_logger(trace);

    let file_name = file_path.rsplit('/').next().unwrap_or(file_path).to_string();

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", format_error(&error, &source, file_path));
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let stream = TokenStream::new(tokens, Rc::new(file_name));
    let (_, program) = parse_with(stream, options);

    println!("Parsed in {:?}", parse_start.elapsed());

    match program {
        Ok(program) => println!("{:#?}", program),
        Err(error) => {
            eprint!("{}", format_error(&error, &source, file_path));
            exit(1);
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG`. `--trace` shows every grammar routine entered.
fn init_logger(trace: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if trace {
        builder.filter_level(LevelFilter::Trace);
    }

    let _ = builder.format_timestamp_millis().try_init();
}

fn parse_args(args: &[String]) -> Option<(&str, ParserOptions, bool)> {
    let mut options = ParserOptions::default();
    let mut file_path = None;
    let mut trace = false;

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if arg == "--max-depth" {
            options.max_depth = rest.next()?.parse().ok()?;
        } else if arg == "--trace" {
            trace = true;
        } else if file_path.is_none() {
            file_path = Some(arg.as_str());
        } else {
            return None;
        }
    }

    Some((file_path?, options, trace))
}
