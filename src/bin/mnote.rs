//! Mathnote CLI - bracketed math shorthand to MathML converter

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};

#[cfg(feature = "cli")]
use mathnote::{convert, generate_examples, resolve_expression};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mnote")]
#[command(version)]
#[command(about = "Mathnote - bracketed math shorthand to MathML converter", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Convert a bare expression (no bracket syntax), e.g. "pow(x,2)+1"
    #[arg(short, long)]
    expr: Option<String>,

    /// Print the worked-example table as JSON and exit
    #[arg(long)]
    examples: bool,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.examples {
        let examples = generate_examples();
        let json = serde_json::to_string_pretty(&examples)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        return write_output(cli.output.as_deref(), &json);
    }

    if let Some(ref expr) = cli.expr {
        return match resolve_expression(expr) {
            Ok(fragment) => write_output(cli.output.as_deref(), &fragment),
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        };
    }

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    write_output(cli.output.as_deref(), &convert(&input))
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, content),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mathnote --features cli");
    eprintln!("  mnote [OPTIONS] [INPUT_FILE]");
}
