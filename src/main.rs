//! Sleevies CLI
//!
//! Usage:
//!   sleevies [OPTIONS] [FILE]
//!
//! Options:
//!   -s, --stylesheet <FILE>  Stylesheet file for the diagram palette (TOML format)
//!   -u, --units <UNITS>      Reinterpret the session in another unit system
//!       --summary            Print derived pattern parameters instead of SVG
//!   -d, --debug              Enable debug logging
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use sleevies::{
    render_session, PatternType, RenderConfig, SeamAllowance, SessionFile, Stylesheet, UnitSystem,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitsArg {
    Inches,
    #[value(alias = "cm")]
    Centimeters,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Inches => UnitSystem::Inches,
            UnitsArg::Centimeters => UnitSystem::Centimeters,
        }
    }
}

#[derive(Parser)]
#[command(name = "sleevies")]
#[command(about = "Arm diagram and pattern parameters from sleeve wizard measurements")]
struct Cli {
    /// Session file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Stylesheet file for the diagram palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Reinterpret entered values in this unit system (numbers are not converted)
    #[arg(short, long, value_enum)]
    units: Option<UnitsArg>,

    /// Print derived pattern parameters instead of the SVG diagram
    #[arg(long)]
    summary: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "sleevies=debug" } else { "sleevies=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut session = match SessionFile::from_str(&source) {
        Ok(file) => file.into_session(),
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    if let Some(units) = cli.units {
        session.set_unit(units.into());
    }

    let config = RenderConfig::new().with_stylesheet(stylesheet);

    if cli.summary {
        print!("{}", session.summary(&config.diagram));
    } else {
        println!("{}", render_session(&session, &config));
    }
}

fn print_intro() {
    println!(
        r#"Sleevies - arm diagram and pattern parameters from wizard measurements

USAGE:
    sleevies [OPTIONS] [FILE]
    echo '<session toml>' | sleevies

OPTIONS:
    -s, --stylesheet   Custom diagram palette (TOML file)
    -u, --units        inches | cm (reinterprets, does not convert)
    --summary          Print derived parameters instead of SVG
    -d, --debug        Enable debug logging
    -h, --help         Print help

SESSION FILE:
    units = "inches"
    pattern = "basic-sleeve"

    [arm]
    shoulder_to_elbow = "13"
    shoulder_to_wrist = "24"

    [sleeve_cap]
    mode = "bust"          # or "manual" with width/height
    bust = "36"

    [ease]
    choice = "stretch"     # fitted | regular | loose | stretch
    negative_ease_percent = "10"

    [finishing]
    seam_allowance = "half-inch"
    cutting_layout_guide = true

QUICK START:
    printf '[arm]\nshoulder_to_elbow = "13"\nshoulder_to_wrist = "24"\n' | sleevies > arm.svg"#
    );

    println!("\nPATTERNS:");
    for pattern in PatternType::ALL {
        println!("    {:<16}{}", pattern.name(), pattern.description());
    }

    println!("\nSEAM ALLOWANCES:");
    for allowance in SeamAllowance::ALL {
        println!(
            "    {:<16}{}",
            allowance.label(UnitSystem::Inches),
            allowance.label(UnitSystem::Centimeters)
        );
    }
}
