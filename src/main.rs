use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use tdop::{
    ast::printer::dump,
    lexer::lexer::{tokenize, OperatorChars},
    parser::parser::parse,
    render_error,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "tdop")]
#[command(about = "Parse a source file and print its syntax tree")]
struct Args {
    /// Path to the source file
    file: PathBuf,

    /// Print the token list instead of the tree
    #[arg(long)]
    tokens: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tdop=warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(err) => {
            error!("Failed to read '{}': {}", args.file.display(), err);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let tokens = match tokenize(&source, &OperatorChars::default()) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", render_error(&err, &args.file, &source));
            process::exit(1);
        }
    };
    info!("Tokenized in {:?}", start.elapsed());

    if args.tokens {
        for token in &tokens {
            println!("{}", token);
        }
        return;
    }

    let parse_start = Instant::now();
    let statements = match parse(tokens) {
        Ok(statements) => statements,
        Err(err) => {
            eprintln!("{}", render_error(&err, &args.file, &source));
            process::exit(1);
        }
    };
    info!("Parsed in {:?}", parse_start.elapsed());

    print!("{}", dump(&statements));
}
