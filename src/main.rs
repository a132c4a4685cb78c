//! Text Enhancer CLI
//!
//! Usage:
//!   text-enhancer [OPTIONS] [FILE]
//!
//! Options:
//!   --measured-width <PX>     Measured width of the placed text block
//!   --measured-height <PX>    Measured height of the placed text block
//!   --content-width <PX>      Summed width of the text fragments
//!   --host-width <PX>         Width of the host area
//!   --host-height <PX>        Height of the host area
//!   --layout                  Print the layout result instead of HTML
//!   --enumerate <OBJECT>      Print the resolved values of a settings object
//!   --compact                 No indentation in the HTML output
//!   -d, --debug               Debug logging and layout dump
//!   -h, --help                Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use text_enhancer::{
    compute, render_with_config, Document, HtmlConfig, LayoutConfig, Measurement, RenderConfig,
    SettingsObject,
};

#[derive(Parser)]
#[command(name = "text-enhancer")]
#[command(about = "Render a rotatable label and data value as an HTML fragment")]
struct Cli {
    /// Settings document (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Measured width of the placed text block, in px
    #[arg(long, default_value_t = 0.0)]
    measured_width: f64,

    /// Measured height of the placed text block, in px
    #[arg(long, default_value_t = 0.0)]
    measured_height: f64,

    /// Summed width of the text fragments, in px (defaults to the measured width)
    #[arg(long)]
    content_width: Option<f64>,

    /// Width of the host area, in px
    #[arg(long, default_value_t = 300.0)]
    host_width: f64,

    /// Height of the host area, in px
    #[arg(long, default_value_t = 150.0)]
    host_height: f64,

    /// Print the layout result instead of HTML
    #[arg(long)]
    layout: bool,

    /// Print the resolved values of a settings object (text, static_text, dynamic_text)
    #[arg(long, value_name = "OBJECT")]
    enumerate: Option<SettingsObject>,

    /// Compact output without indentation
    #[arg(long)]
    compact: bool,

    /// Debug mode: debug logging and a layout dump on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
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

    let doc = match Document::from_str(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    if let Some(object) = cli.enumerate {
        match doc.settings.export(object) {
            Ok(text) => print!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut measurement = Measurement::new(cli.measured_width, cli.measured_height);
    if let Some(content_width) = cli.content_width {
        measurement = measurement.with_content_width(content_width);
    }

    if cli.layout {
        let result = compute(&doc.settings.layout_settings(), &measurement);
        println!("{:#?}", result);
        return;
    }

    let config = RenderConfig::new()
        .with_layout(LayoutConfig::default().with_host_size(cli.host_width, cli.host_height))
        .with_html(HtmlConfig::default().with_pretty_print(!cli.compact))
        .with_debug(cli.debug);
    print!(
        "{}",
        render_with_config(&doc.settings, &doc.data, &measurement, &config)
    );
}

fn print_intro() {
    println!(
        r#"Text Enhancer - rotatable label and data value as HTML

USAGE:
    text-enhancer [OPTIONS] [FILE]
    cat settings.toml | text-enhancer --measured-width 120 --measured-height 24

OPTIONS:
    --measured-width <PX>    Measured width of the placed block
    --measured-height <PX>   Measured height of the placed block
    --content-width <PX>     Summed fragment width (center alignment)
    --host-width <PX>        Host area width (default 300)
    --host-height <PX>       Host area height (default 150)
    --layout                 Print the layout result instead of HTML
    --enumerate <OBJECT>     Export text, static_text or dynamic_text settings
    --compact                No indentation in the HTML output
    -d, --debug              Debug logging and layout dump
    -h, --help               Print help

SETTINGS:
    [text]          direction, alignment, alignment_v, text_rotate, skew_x, ...
    [static_text]   post_text, show_colon, text_position, font and shadow
    [dynamic_text]  font and shadow of the value
    [data]          categories / values columns with one row"#
    );
}
