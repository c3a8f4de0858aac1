//! Interactive console session
//!
//! Each iteration prints both inventories, prompts for a request and handles
//! one line of input. Recoverable errors (bad grammar, bad route, missing stock,
//! refused goods) are reported and the loop continues; console I/O errors end
//! the session.
//!
//! # Courier messages
//!
//! | Outcome                | Lines printed                               |
//! |------------------------|---------------------------------------------|
//! | Delivered              | fetching, carrying, delivered               |
//! | Insufficient stock     | fetching, no such item                      |
//! | Refused by destination | fetching, carrying, did not fit             |
//! | Refused return         | fetching, carrying, could not return        |
//! | Bad grammar or route   | invalid request                             |

use crate::cli::ReportFormat;
use crate::core::{BulkInventory, Inventory, LimitedInventory, TransferCoordinator};
use crate::io::{write_stock_report, Command, CommandReader};
use crate::lexicon::Lexicon;
use crate::types::{InventoryError, TransferRequest};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Console read-eval-print loop over a transfer coordinator
#[derive(Debug, Clone)]
pub struct ConsoleSession<S = BulkInventory, D = LimitedInventory> {
    coordinator: TransferCoordinator<S, D>,
    format: ReportFormat,
}

impl ConsoleSession {
    /// Create a session with the lexicon's initial stock
    pub fn new(lexicon: Lexicon, format: ReportFormat) -> Result<Self, InventoryError> {
        Ok(Self::with_coordinator(
            TransferCoordinator::seeded(lexicon)?,
            format,
        ))
    }
}

impl<S: Inventory, D: Inventory> ConsoleSession<S, D> {
    pub fn with_coordinator(
        coordinator: TransferCoordinator<S, D>,
        format: ReportFormat,
    ) -> Self {
        ConsoleSession {
            coordinator,
            format,
        }
    }

    pub fn coordinator(&self) -> &TransferCoordinator<S, D> {
        &self.coordinator
    }

    /// Run the session until the stop word or end of input
    ///
    /// # Errors
    ///
    /// Returns `IoError` or `ReportError` if the console cannot be read or
    /// written. Every other error is reported to the user and the loop goes on.
    pub fn run<R: BufRead>(
        &mut self,
        input: R,
        output: &mut dyn Write,
    ) -> Result<(), InventoryError> {
        let lexicon = self.coordinator.lexicon();
        let mut commands = CommandReader::new(input, lexicon);

        writeln!(output, "{}", lexicon.greeting())?;

        loop {
            write_stock_report(&self.coordinator, self.format, output)?;
            writeln!(output, "\n{}", lexicon.prompt())?;
            output.flush()?;

            match commands.next() {
                None => {
                    debug!("input closed");
                    break;
                }
                Some(Ok(Command::Stop)) => break,
                Some(Ok(Command::Transfer(request))) => self.deliver(&request, output)?,
                Some(Err(e)) if e.is_retype() => {
                    debug!(line = commands.line_num(), error = %e, "rejected command line");
                    writeln!(output, "{}\n", lexicon.invalid_request())?;
                }
                Some(Err(e)) => return Err(e),
            }
        }

        info!(lines = commands.line_num(), "session finished");
        Ok(())
    }

    /// Execute one transfer and report the courier's progress
    fn deliver(
        &mut self,
        request: &TransferRequest,
        output: &mut dyn Write,
    ) -> Result<(), InventoryError> {
        let lexicon = self.coordinator.lexicon();
        let quantity = request.quantity();
        let product = request.product();
        let source = request.source();
        let destination = request.destination();

        debug!(request = %request, "received transfer request");
        let result = self.coordinator.execute_transfer(request);

        if matches!(&result, Err(e) if e.is_retype()) {
            writeln!(output, "{}\n", lexicon.invalid_request())?;
            return Ok(());
        }

        writeln!(output, "{}", lexicon.courier_fetching(quantity, product, source))?;

        match result {
            Ok(()) => {
                writeln!(
                    output,
                    "{}",
                    lexicon.courier_carrying(quantity, product, source, destination)
                )?;
                writeln!(
                    output,
                    "{}",
                    lexicon.courier_delivered(quantity, product, destination)
                )?;
            }
            Err(InventoryError::InsufficientStock { .. }) => {
                writeln!(output, "{}", lexicon.insufficient_stock())?;
            }
            Err(e) if e.is_rejected_by_destination() => {
                writeln!(
                    output,
                    "{}",
                    lexicon.courier_carrying(quantity, product, source, destination)
                )?;
                writeln!(output, "{}", lexicon.did_not_fit())?;
            }
            Err(InventoryError::CompensationFailed { .. }) => {
                writeln!(
                    output,
                    "{}",
                    lexicon.courier_carrying(quantity, product, source, destination)
                )?;
                writeln!(output, "{}", lexicon.return_failed(source))?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }
}
