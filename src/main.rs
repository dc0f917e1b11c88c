// ABOUTME: Main entry point for the m2s program.
// ABOUTME: Provides CLI interface and runs the markdown-to-slides conversion from the library.

use anyhow::Context;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Turn a Markdown file into a self-contained HTML slide deck", long_about = None)]
struct Cli {
    /// Path to the markdown file
    input: PathBuf,

    /// Path to output HTML file (defaults to the input with an .html extension)
    output: Option<PathBuf>,

    /// Custom page template
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Stylesheet replacing the bundled presentation styles
    #[arg(long, value_name = "PATH")]
    screen_css: Option<PathBuf>,

    /// Stylesheet replacing the bundled outline styles
    #[arg(long, value_name = "PATH")]
    outline_css: Option<PathBuf>,

    /// Stylesheet replacing the bundled print styles
    #[arg(long, value_name = "PATH")]
    print_css: Option<PathBuf>,

    /// Script replacing the bundled navigation script
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Don't add id anchors to headings inside slides
    #[arg(long)]
    no_heading_ids: bool,

    /// Open absolute links in the same tab
    #[arg(long)]
    same_tab_links: bool,

    /// Log debug output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Environment configuration with command-line flags layered on top
    fn config(&self) -> anyhow::Result<m2s::Config> {
        let mut config = m2s::Config::from_env().context("Invalid environment configuration")?;

        if let Some(path) = &self.template {
            config.template_path = Some(path.clone());
        }
        if let Some(path) = &self.screen_css {
            config.screen_css = Some(path.clone());
        }
        if let Some(path) = &self.outline_css {
            config.outline_css = Some(path.clone());
        }
        if let Some(path) = &self.print_css {
            config.print_css = Some(path.clone());
        }
        if let Some(path) = &self.script {
            config.script = Some(path.clone());
        }
        if self.no_heading_ids {
            config.markdown.heading_ids = false;
        }
        if self.same_tab_links {
            config.markdown.external_links_new_tab = false;
        }

        Ok(config)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config()?;
    debug!("Using configuration: {:?}", config);

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| m2s::utils::default_output_path(&cli.input));

    let html_content = m2s::generate_html(&cli.input, &config)
        .with_context(|| format!("Failed to convert {:?}", cli.input))?;
    m2s::write_html_to_file(&html_content, &output)
        .with_context(|| format!("Failed to write output file {:?}", output))?;

    if !cli.quiet {
        println!("HTML generated successfully: {:?}", output);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
