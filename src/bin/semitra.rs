//! Semitra CLI - rule-table driven transliteration between scripts

use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::process;

use semitra::Transliterator;

#[derive(Parser)]
#[command(name = "semitra")]
#[command(version)]
#[command(about = "Transliterate text between Semitic-family scripts", long_about = None)]
struct Cli {
    /// Text to transliterate (reads stdin when neither this nor --input is given)
    #[arg(short, long, value_name = "TEXT")]
    text: Option<String>,

    /// Input file path
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Input script as ISO 15924 code (auto-detected when omitted)
    #[arg(short, long, value_name = "SCRIPT")]
    script: Option<String>,

    /// Output script as ISO 15924 code
    #[arg(short = 'o', long, value_name = "SCRIPT", default_value = "Latn")]
    to_script: String,

    /// List supported scripts and exit
    #[arg(long)]
    stats: bool,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();

    let tr = match Transliterator::new() {
        Ok(tr) => tr,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    if cli.stats {
        let all: Vec<&str> = tr.table().scripts().collect();
        println!(
            "{} scripts: {}",
            tr.supported_scripts().len(),
            all.join(" ")
        );
        return Ok(());
    }

    let text = match (cli.input, cli.text) {
        (Some(path), _) => fs::read_to_string(&path)?,
        (None, Some(text)) => text,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer.trim_end().to_string()
        }
    };

    let result = tr.transliterate(&text, cli.script.as_deref(), &cli.to_script);
    println!("{}", result);

    Ok(())
}
