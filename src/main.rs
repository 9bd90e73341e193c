use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser as ClapParser;
use exprlang::{
    format_error,
    lexer::lexer::Lexer,
    parser::parser::{Parser, ParserConfig},
};

#[derive(ClapParser, Debug)]
#[command(version, about = "Parses a source file and prints its canonical form", long_about = None)]
struct Args {
    /// Source file, or `-` to read standard input
    file: PathBuf,
    /// Print the token stream instead of the parsed program
    #[arg(short, long)]
    tokens: bool,
    /// Reject expressions nested deeper than this
    #[arg(long)]
    max_depth: Option<usize>,
}

fn read_source(path: &PathBuf) -> io::Result<(String, String)> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok((source, String::from("<stdin>")));
    }

    let file_name = path
        .file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
        .into_owned();

    Ok((fs::read_to_string(path)?, file_name))
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let (source, file_name) = match read_source(&args.file) {
        Ok(read) => read,
        Err(error) => {
            eprintln!("Failed to read {}: {}", args.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let lexer = Lexer::new(source.clone(), Some(file_name));

    if args.tokens {
        for token in lexer {
            println!("{}", token);
        }
        return ExitCode::SUCCESS;
    }

    let config = ParserConfig {
        max_depth: args.max_depth,
    };

    let start = Instant::now();
    let mut parser = Parser::with_config(lexer, config);
    let program = parser.parse_program();
    log::info!("Parsed in {:?}", start.elapsed());

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            eprintln!("{}", error);
            eprintln!("{}\n", format_error(error, &source));
        }
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}
