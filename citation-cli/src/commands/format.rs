use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use citation_formatter::{BibliographyFormatter, CitationStyle, articles_from_json};
use clap::Args;

#[derive(Args, Debug)]
pub struct Format {
    /// JSON file with an array of article records (default: stdin)
    pub input: Option<PathBuf>,

    /// Citation style (gost, apa, vancouver); unknown values fall back to gost
    #[arg(short, long, env = "CITATION_STYLE", default_value = "gost")]
    pub style: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit the numbered entries as a JSON array instead of text lines
    #[arg(long)]
    pub json: bool,
}

impl Format {
    pub fn execute(&self) -> Result<()> {
        let input = self.read_input()?;
        let rendered = self.render(&input)?;

        if let Some(ref output_path) = self.output {
            fs::write(output_path, &rendered)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            tracing::info!(path = %output_path.display(), "Wrote bibliography");
        } else {
            write!(io::stdout(), "{rendered}")?;
        }

        Ok(())
    }

    /// Resolve the requested style, warning when it falls back to GOST
    pub fn citation_style(&self) -> CitationStyle {
        match self.style.parse::<CitationStyle>() {
            Ok(style) => style,
            Err(err) => {
                tracing::warn!("{err}; using gost");
                CitationStyle::Gost
            }
        }
    }

    /// Turn JSON article records into the command's output text
    pub fn render(&self, input: &str) -> Result<String> {
        let articles = articles_from_json(input).context("Failed to decode article records")?;
        let style = self.citation_style();

        tracing::info!(articles = articles.len(), style = %style, "Formatting citations");

        let formatter = BibliographyFormatter::new(style);
        if self.json {
            let entries = formatter.format(&articles);
            Ok(format!("{}\n", serde_json::to_string_pretty(&entries)?))
        } else if articles.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("{}\n", formatter.render(&articles)))
        }
    }

    fn read_input(&self) -> Result<String> {
        match self.input {
            Some(ref path) if path.as_os_str() != "-" => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            _ => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}
