//! folio - rich text pipeline tool

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use folio::{Block, LayoutOptions, Result, paginate, sanitize, to_document_html, to_plaintext};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Rich text sanitization, conversion, and pagination", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio sanitize draft.html           Sanitize HTML to the restricted model
    folio export draft.html             Project document HTML to plaintext
    folio import notes.txt              Reconstitute plaintext into HTML
    folio paginate blocks.json -m 900   Pack measured blocks into pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sanitize HTML to the restricted document model
    Sanitize {
        /// Input file (stdin if omitted)
        input: Option<String>,
    },
    /// Convert document HTML to the plaintext dialect
    Export {
        /// Input file (stdin if omitted)
        input: Option<String>,
    },
    /// Convert plaintext dialect to document HTML
    Import {
        /// Input file (stdin if omitted)
        input: Option<String>,
    },
    /// Print the stylesheet for rendered page frames and callouts
    Styles,
    /// Pack measured blocks (JSON array of {id, height}) into pages
    Paginate {
        /// Input file (stdin if omitted)
        input: Option<String>,

        /// Maximum usable content height per page, in pixels
        #[arg(short, long, default_value_t = 900.0)]
        max_height: f32,

        /// Safe-margin inset subtracted from the budget
        #[arg(short, long, default_value_t = 0.0)]
        inset: f32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Sanitize { input } => {
            let html = read_input(input.as_deref())?;
            println!("{}", sanitize(&html));
        }
        Command::Export { input } => {
            let html = read_input(input.as_deref())?;
            println!("{}", to_plaintext(&html));
        }
        Command::Import { input } => {
            let text = read_input(input.as_deref())?;
            println!("{}", to_document_html(&text));
        }
        Command::Styles => {
            println!("{}", folio::theme::page_stylesheet());
        }
        Command::Paginate {
            input,
            max_height,
            inset,
        } => {
            let json = read_input(input.as_deref())?;
            let blocks: Vec<Block> = serde_json::from_str(&json)?;
            let opts = LayoutOptions::new(max_height).with_inset(inset);
            let pages = paginate(&blocks, &opts);
            println!("{}", serde_json::to_string_pretty(&pages)?);
        }
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
