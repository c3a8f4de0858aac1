//! Command parsing
//!
//! Turns one normalized console line into a [`TransferRequest`]. The grammar is
//! a single anchored pattern supplied by the active [`Lexicon`]; there is no
//! partial matching or recovery.

use crate::lexicon::Lexicon;
use crate::types::{InventoryError, Quantity, TransferRequest};

/// Normalize a raw console line: trim surrounding whitespace and lower-case it
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Parser for the `deliver` command of one lexicon
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser {
    lexicon: Lexicon,
}

impl CommandParser {
    pub fn new(lexicon: Lexicon) -> Self {
        CommandParser { lexicon }
    }

    /// Parse a normalized line into a transfer request
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The line does not match the command grammar (`ParseError`)
    /// - The quantity is zero or does not fit in a `u32` (`InvalidQuantity`)
    pub fn parse(&self, line: &str) -> Result<TransferRequest, InventoryError> {
        let captures = self
            .lexicon
            .command_pattern()
            .captures(line)
            .ok_or_else(|| InventoryError::parse_error(line))?;

        let quantity_text = &captures[1];
        let quantity = quantity_text
            .parse::<Quantity>()
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or_else(|| InventoryError::invalid_quantity(quantity_text))?;

        Ok(TransferRequest::new(
            quantity,
            &captures[2],
            &captures[3],
            &captures[4],
        ))
    }
}
