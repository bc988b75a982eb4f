use std::io::{self, Write};

use anyhow::Result;
use citation_formatter::CitationStyle;
use clap::Args;

#[derive(Args, Debug)]
pub struct Styles {}

impl Styles {
    pub fn execute(&self) -> Result<()> {
        write!(io::stdout(), "{}", self.listing())?;
        Ok(())
    }

    fn listing(&self) -> String {
        CitationStyle::ALL
            .iter()
            .map(|style| {
                let marker = if *style == CitationStyle::default() {
                    " (default)"
                } else {
                    ""
                };
                format!("{}{marker}\n", style.name())
            })
            .collect()
    }
}
