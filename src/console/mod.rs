//! Console session module
//!
//! Drives the read-eval-print loop: show stock, prompt, read a command, run the
//! transfer, report the courier's progress. The session is generic over its
//! input so it can be run against stdin or in-memory buffers.

pub mod session;

pub use session::ConsoleSession;

use crate::cli::CliArgs;
use crate::lexicon::Lexicon;
use crate::types::InventoryError;

/// Create a console session configured from command-line arguments
///
/// # Errors
///
/// Returns `InvalidSeed` if the lexicon's initial stock cannot be loaded.
pub fn create_session(args: &CliArgs) -> Result<ConsoleSession, InventoryError> {
    ConsoleSession::new(Lexicon::new(args.lexicon), args.format)
}
