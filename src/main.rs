//! thgen CLI
//!
//! Usage:
//!   thgen [OPTIONS] [SETTINGS]
//!
//! Reads a settings file (TOML, all fields optional) and writes the two
//! Therion documents it describes: a layout file and a thconfig.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use thgen::{generate, Settings, Theme, DEFAULT_CONFIG_FILE, DEFAULT_LAYOUT_FILE};

#[derive(Parser)]
#[command(name = "thgen")]
#[command(about = "Generate Therion layout and thconfig files from a settings description")]
struct Cli {
    /// Settings file in TOML format (reads from stdin if not provided)
    settings: Option<PathBuf>,

    /// Apply a built-in color theme before generating (see --list-themes)
    #[arg(short, long)]
    theme: Option<String>,

    /// Directory the layout and thconfig files are written into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// File name for the layout document (also used by the thconfig's input line)
    #[arg(long, default_value = DEFAULT_LAYOUT_FILE)]
    layout_name: String,

    /// Print both documents to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// List the built-in color themes
    #[arg(long)]
    list_themes: bool,

    /// List the built-in drawing-routine modules
    #[arg(long)]
    list_modules: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list_themes {
        print_themes();
        return;
    }

    if cli.list_modules {
        print_modules();
        return;
    }

    // With no settings file and an interactive terminal there is nothing to
    // read; generate from defaults in that case
    let mut settings = match &cli.settings {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None if io::stdin().is_terminal() => Settings::default(),
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            match Settings::from_toml_str(&buffer) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error parsing settings from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if let Some(theme_id) = &cli.theme {
        match Theme::find(theme_id) {
            Some(theme) => theme.apply(&mut settings),
            None => {
                eprintln!(
                    "Unknown theme '{}'; run --list-themes for the available ids",
                    theme_id
                );
                std::process::exit(1);
            }
        }
    }

    let docs = generate(&settings, &cli.layout_name);

    if cli.stdout {
        println!("# --- {} ---", cli.layout_name);
        println!("{}", docs.layout);
        println!("# --- {} ---", DEFAULT_CONFIG_FILE);
        println!("{}", docs.config);
        return;
    }

    let layout_path = cli.out_dir.join(&cli.layout_name);
    let config_path = cli.out_dir.join(DEFAULT_CONFIG_FILE);

    if let Err(e) = fs::write(&layout_path, &docs.layout) {
        eprintln!("Error writing '{}': {}", layout_path.display(), e);
        std::process::exit(1);
    }
    if let Err(e) = fs::write(&config_path, &docs.config) {
        eprintln!("Error writing '{}': {}", config_path.display(), e);
        std::process::exit(1);
    }

    println!(
        "Wrote {} and {}",
        layout_path.display(),
        config_path.display()
    );
}

fn print_themes() {
    for theme in thgen::themes::THEMES {
        println!(
            "{:<16} {} ({} / {} / {})",
            theme.id, theme.name, theme.bg_color, theme.fg_color, theme.survey_color
        );
        println!("{:<16} {}", "", theme.description);
    }
}

fn print_modules() {
    for module in thgen::modules::BUILTIN_MODULES {
        println!("{:<20} {}", module.id, module.name);
        println!("{:<20} {}", "", module.description);
    }
}
