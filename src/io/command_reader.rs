//! Console command reader with iterator interface
//!
//! Wraps any `BufRead` source and yields one [`Command`] per input line.
//! Lines are normalized (trimmed, lower-cased) before they are matched against
//! the stop word and the command grammar.
//!
//! ```
//! use courier_inventory::io::{Command, CommandReader};
//! use courier_inventory::lexicon::Lexicon;
//! use std::io::Cursor;
//!
//! let input = Cursor::new("deliver 3 cookies from store to shop\nstop\n");
//! let commands: Vec<_> = CommandReader::new(input, Lexicon::english()).collect();
//!
//! assert!(matches!(commands[0], Ok(Command::Transfer(_))));
//! assert!(matches!(commands[1], Ok(Command::Stop)));
//! ```
//!
//! # Error Handling
//!
//! - Grammar mismatches are yielded as `ParseError` / `InvalidQuantity`
//! - Read failures are yielded as `IoError`
//! - End of input ends the iteration

use crate::core::parser::{normalize, CommandParser};
use crate::lexicon::Lexicon;
use crate::types::{InventoryError, TransferRequest};
use std::io::{BufRead, Lines};

/// A console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The stop word: end the session
    Stop,

    /// A well-formed delivery request
    Transfer(TransferRequest),
}

/// Reads console lines and parses them into commands
#[derive(Debug)]
pub struct CommandReader<R> {
    lines: Lines<R>,
    parser: CommandParser,
    stop_word: &'static str,
    line_num: usize,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(input: R, lexicon: Lexicon) -> Self {
        CommandReader {
            lines: input.lines(),
            parser: CommandParser::new(lexicon),
            stop_word: lexicon.stop_word(),
            line_num: 0,
        }
    }

    /// Number of lines read so far
    pub fn line_num(&self) -> usize {
        self.line_num
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = Result<Command, InventoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        self.line_num += 1;

        let text = normalize(&line);
        if text == self.stop_word {
            return Some(Ok(Command::Stop));
        }

        Some(self.parser.parse(&text).map(Command::Transfer))
    }
}
