//! Argument groups shared by the text commands

use crate::core::search::MatchOptions;
use clap::Args;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where the text to search comes from
#[derive(Args, Debug, Default)]
pub struct TextArgs {
    /// Text to search (reads stdin when neither --text nor --file is given)
    #[arg(long, short = 't', conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl TextArgs {
    pub fn read(&self) -> io::Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return fs::read_to_string(path);
        }

        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Match flags; unset flags keep the configured value
#[derive(Args, Debug, Default)]
pub struct MatchArgs {
    /// Match case-insensitively
    #[arg(long, short = 'i', conflicts_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Match case-sensitively
    #[arg(long, short = 'c')]
    pub case_sensitive: bool,

    /// Only match whole words
    #[arg(long, short = 'w', conflicts_with = "no_word_boundary")]
    pub word_boundary: bool,

    /// Match inside words too
    #[arg(long)]
    pub no_word_boundary: bool,
}

impl MatchArgs {
    /// Apply the given flags over `base`
    pub fn apply(&self, mut base: MatchOptions) -> MatchOptions {
        if self.ignore_case {
            base.ignore_case = true;
        } else if self.case_sensitive {
            base.ignore_case = false;
        }

        if self.word_boundary {
            base.word_boundary = true;
        } else if self.no_word_boundary {
            base.word_boundary = false;
        }

        base
    }
}
