use std::io::{BufRead, BufReader, Stdin, Write};

use crate::constants::NEXT_PAGE_PROMPT;
use crate::error::DriveError;

/// Decides whether a listing moves on to the next page
pub trait PagePrompt: Send {
    /// true to fetch the next page, false to stop walking the current root
    fn next_page(&mut self, out: &mut dyn Write) -> Result<bool, DriveError>;
}

/// Prints `---Next---` and reads one line, a line starting with "q" stops.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead + Send> LinePrompt<R> {
    pub fn new(reader: R) -> LinePrompt<R> {
        LinePrompt { reader }
    }
}

impl LinePrompt<BufReader<Stdin>> {
    pub fn stdin() -> LinePrompt<BufReader<Stdin>> {
        LinePrompt::new(BufReader::new(std::io::stdin()))
    }
}

impl<R: BufRead + Send> PagePrompt for LinePrompt<R> {
    fn next_page(&mut self, out: &mut dyn Write) -> Result<bool, DriveError> {
        write!(out, "{NEXT_PAGE_PROMPT}")?;
        out.flush()?;

        // EOF reads as an empty answer
        let mut input = String::new();
        self.reader.read_line(&mut input)?;
        Ok(!is_quit(&input))
    }
}

/// Fetches every page without asking
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysContinue;

impl PagePrompt for AlwaysContinue {
    fn next_page(&mut self, _out: &mut dyn Write) -> Result<bool, DriveError> {
        Ok(true)
    }
}

pub fn is_quit(input: &str) -> bool {
    input
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'q'))
}
