//! Stock report rendering
//!
//! Prints the contents of both locations, store first. Two formats exist:
//! - `Text`: a heading per location followed by `item quantity` lines
//! - `Csv`: a `location,item,quantity` header and one row per held item
//!
//! Items are listed in the order they were stocked.

use crate::cli::ReportFormat;
use crate::core::{Inventory, TransferCoordinator};
use crate::types::{InventoryError, Location, Quantity};
use serde::Serialize;
use std::io::Write;

const LOCATIONS: [Location; 2] = [Location::Store, Location::Shop];

/// One CSV row of the stock report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockRow<'a> {
    pub location: &'a str,
    pub item: &'a str,
    pub quantity: Quantity,
}

/// Write the current contents of both locations in the requested format
///
/// # Errors
///
/// Returns `IoError` or `ReportError` if the output cannot be written.
pub fn write_stock_report<S: Inventory, D: Inventory>(
    coordinator: &TransferCoordinator<S, D>,
    format: ReportFormat,
    output: &mut dyn Write,
) -> Result<(), InventoryError> {
    match format {
        ReportFormat::Text => write_stock_text(coordinator, output),
        ReportFormat::Csv => write_stock_csv(coordinator, output),
    }
}

fn write_stock_text<S: Inventory, D: Inventory>(
    coordinator: &TransferCoordinator<S, D>,
    output: &mut dyn Write,
) -> Result<(), InventoryError> {
    let lexicon = coordinator.lexicon();

    for location in LOCATIONS {
        writeln!(output, "\n{}", lexicon.contents_heading(location))?;
        for (item, quantity) in coordinator.inventory(location).items() {
            writeln!(output, "{} {}", item, quantity)?;
        }
    }

    Ok(())
}

fn write_stock_csv<S: Inventory, D: Inventory>(
    coordinator: &TransferCoordinator<S, D>,
    output: &mut dyn Write,
) -> Result<(), InventoryError> {
    use csv::Writer;

    let lexicon = coordinator.lexicon();
    let mut writer = Writer::from_writer(output);

    let mut wrote_row = false;
    for location in LOCATIONS {
        for (item, quantity) in coordinator.inventory(location).items() {
            writer.serialize(StockRow {
                location: lexicon.location_name(location),
                item: item.as_str(),
                quantity: *quantity,
            })?;
            wrote_row = true;
        }
    }

    // serialize() only emits the header together with the first row
    if !wrote_row {
        writer.write_record(["location", "item", "quantity"])?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BulkInventory, LimitedInventory};
    use crate::lexicon::Lexicon;

    fn render(coordinator: &TransferCoordinator, format: ReportFormat) -> String {
        let mut output = Vec::new();
        write_stock_report(coordinator, format, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn small_coordinator(lexicon: Lexicon) -> TransferCoordinator {
        TransferCoordinator::new(
            BulkInventory::with_items([("tree", 59), ("apple", 6)]).unwrap(),
            LimitedInventory::with_items([("dog", 5)]).unwrap(),
            lexicon,
        )
    }

    #[test]
    fn test_text_report_lists_both_locations() {
        let output = render(&small_coordinator(Lexicon::english()), ReportFormat::Text);

        assert_eq!(
            output,
            "\nThe store currently holds:\ntree 59\napple 6\n\nThe shop currently holds:\ndog 5\n"
        );
    }

    #[test]
    fn test_text_report_uses_lexicon_headings() {
        let output = render(&small_coordinator(Lexicon::russian()), ReportFormat::Text);

        assert!(output.contains("На складе сейчас имеется:"));
        assert!(output.contains("В магазине сейчас имеется:"));
    }

    #[test]
    fn test_csv_report_rows() {
        let output = render(&small_coordinator(Lexicon::english()), ReportFormat::Csv);

        assert_eq!(
            output,
            "location,item,quantity\nstore,tree,59\nstore,apple,6\nshop,dog,5\n"
        );
    }

    #[test]
    fn test_csv_report_of_empty_inventories_has_header_only() {
        let coordinator = TransferCoordinator::new(
            BulkInventory::new(),
            LimitedInventory::new(),
            Lexicon::english(),
        );

        let output = render(&coordinator, ReportFormat::Csv);

        assert_eq!(output, "location,item,quantity\n");
    }
}
