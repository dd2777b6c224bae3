//! mkdb - compile the authoring TSV into the semitra table document

use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use semitra::compile_tsv;

#[derive(Parser)]
#[command(name = "mkdb")]
#[command(version)]
#[command(about = "Compile a transliteration authoring TSV into the JSON table document", long_about = None)]
struct Cli {
    /// Input TSV file (reads stdin when omitted)
    input: Option<String>,

    /// Output JSON file (writes stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let source = match cli.input {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let table = match compile_tsv(&source) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let json = serde_json::to_string_pretty(&table).expect("table serializes");
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", json)?;
            eprintln!("✓ Table written to: {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
