//! CLI command structure using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vitae_core::Section;

#[derive(Parser)]
#[command(name = "vitae")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a résumé (.json or .toml) to LaTeX
    Render {
        /// Résumé file
        resume: PathBuf,

        /// Layout name (builtin or under ./layouts)
        #[arg(short, long, env = "VITAE_LAYOUT")]
        layout: Option<String>,

        /// Layout template file; wins over --layout
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a layout template for errors
    Check {
        /// Template file
        template: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available layouts
    Layouts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find a section marker in a rendered document
    Locate {
        /// Rendered .tex file
        document: PathBuf,

        /// Section to find
        #[arg(value_enum)]
        section: SectionArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SectionArg {
    Heading,
    Education,
    Experience,
    Projects,
    Skills,
    Certifications,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Heading => Section::Heading,
            SectionArg::Education => Section::Education,
            SectionArg::Experience => Section::Experience,
            SectionArg::Projects => Section::Projects,
            SectionArg::Skills => Section::Skills,
            SectionArg::Certifications => Section::Certifications,
        }
    }
}
