use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
    time::Instant,
};

use clap::Parser;
use cminus::{
    display_error,
    lexer::lexer::{Lexer, LexerConfig},
};

#[derive(Parser)]
#[command(name = "cminus", about = "Tokenizes a C- source file and prints its tokens")]
struct Cli {
    /// Source file to tokenize; prompted for on stdin when omitted
    file: Option<PathBuf>,
    /// Fail on string or char literals left open at end of input
    #[arg(long)]
    strict: bool,
    /// Drop the token still open at end of input
    #[arg(long)]
    legacy_eof: bool,
    /// Do not echo the file contents before the tokens
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    println!("C- {}!\n", env!("CARGO_PKG_VERSION"));

    let path = match cli.file {
        Some(path) => path,
        None => match prompt_path() {
            Ok(path) => path,
            Err(err) => {
                eprintln!("Could not read the path: {}", err);
                process::exit(1);
            }
        },
    };

    let contents = match read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => {
            eprintln!("Could not open the file - '{}'", path.display());
            process::exit(1);
        }
    };

    if !cli.quiet {
        println!("\n\n--== File ==--\n\n{}\n\n", contents);
    }

    println!("\n\n--== Lexer ==--\n\n");

    let config = LexerConfig {
        close_trailing_token: !cli.legacy_eof,
        reject_unterminated: cli.strict,
    };

    let start = Instant::now();
    let tokens = match Lexer::new().config(config).scan(&contents) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", err);
            display_error(&err, &contents, &path);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    for token in &tokens {
        token.info();
    }

    println!("\nTokenized in {:?}", elapsed);
}

fn prompt_path() -> io::Result<PathBuf> {
    print!("C- Path> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(PathBuf::from(line.trim_end_matches(['\n', '\r'])))
}
