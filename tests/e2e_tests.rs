//! End-to-end integration tests
//!
//! These tests drive complete console sessions using predefined fixtures.
//! Each fixture test:
//! 1. Feeds input.txt to a console session line by line
//! 2. Writes the console transcript to a temporary file
//! 3. Renders the final stock of both locations as CSV
//! 4. Compares it with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Successful deliveries in both directions
//! - Refusals by capacity and by variety limit (with rollback)
//! - Malformed requests, invalid routes and missing stock
//! - The Russian lexicon
//! - Sessions ending at end of input instead of the stop word

#[cfg(test)]
mod tests {
    use courier_inventory::cli::{LexiconType, ReportFormat};
    use courier_inventory::io::write_stock_report;
    use courier_inventory::{ConsoleSession, Inventory, Lexicon};
    use rstest::rstest;
    use std::fs;
    use std::io::{BufReader, Write};
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a console session over a fixture's input and return (final stock CSV, transcript)
    fn run_fixture(fixture_name: &str, lexicon: LexiconType) -> (String, String) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.txt", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let mut session = ConsoleSession::new(Lexicon::new(lexicon), ReportFormat::Text)
            .expect("Failed to seed session");

        let input = fs::File::open(&input_path)
            .unwrap_or_else(|e| panic!("Failed to open {}: {}", input_path, e));
        let mut transcript = NamedTempFile::new().expect("Failed to create temp file");

        session
            .run(BufReader::new(input), &mut transcript)
            .unwrap_or_else(|e| panic!("Session failed: {}", e));
        transcript.flush().expect("Failed to flush temp file");

        let transcript = fs::read_to_string(transcript.path())
            .unwrap_or_else(|e| panic!("Failed to read transcript: {}", e));

        let mut stock = Vec::new();
        write_stock_report(session.coordinator(), ReportFormat::Csv, &mut stock)
            .expect("Failed to render stock");

        (String::from_utf8(stock).expect("Stock report is not UTF-8"), transcript)
    }

    /// End-to-end test comparing the final stock with expected.csv
    #[rstest]
    #[case("happy_path", LexiconType::English)]
    #[case("capacity_overflow", LexiconType::English)]
    #[case("variety_limit", LexiconType::English)]
    #[case("invalid_requests", LexiconType::English)]
    #[case("end_of_input", LexiconType::English)]
    #[case("fill_shop_exactly", LexiconType::English)]
    #[case("russian_lexicon", LexiconType::Russian)]
    fn test_fixtures(#[case] fixture: &str, #[case] lexicon: LexiconType) {
        let expected_path = format!("tests/fixtures/{}/expected.csv", fixture);
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        let (actual, transcript) = run_fixture(fixture, lexicon);

        assert_eq!(
            actual, expected,
            "\n\nStock mismatch for fixture: {}\n\nActual stock:\n{}\n\nExpected stock:\n{}\n\nTranscript:\n{}\n",
            fixture, actual, expected, transcript
        );
    }

    #[test]
    fn test_russian_transcript() {
        let (_, transcript) = run_fixture("russian_lexicon", LexiconType::Russian);

        assert!(transcript.starts_with("Если хотите остановить перемещения, то напишите \"стоп\"\n"));
        assert!(transcript.contains("\nНа складе сейчас имеется:\n"));
        assert!(transcript.contains("Курьер идёт за 3 печеньки из склад\n"));
        assert!(transcript.contains("Курьер везёт 3 печеньки с склад в магазин\n"));
        assert!(transcript.contains("Курьер доставил 3 печеньки в магазин\n"));
    }

    #[test]
    fn test_invalid_requests_transcript() {
        let (_, transcript) = run_fixture("invalid_requests", LexiconType::English);

        // hello, zero quantity, same location, unknown location, empty line
        assert_eq!(
            transcript
                .matches("Invalid request, please type it again")
                .count(),
            5
        );
        // missing dog stock in the shop, unknown pear in the store
        assert_eq!(
            transcript
                .matches("There is no such item or not enough of it")
                .count(),
            2
        );
        assert!(!transcript.contains("Courier delivered"));
    }

    #[test]
    fn test_variety_limit_transcript() {
        let (_, transcript) = run_fixture("variety_limit", LexiconType::English);

        assert_eq!(transcript.matches("Courier delivered").count(), 3);
        assert!(transcript.contains(
            "Courier is carrying 1 tree from the store to the shop\nThe goods did not fit :(\nCourier took them back\n"
        ));
    }

    #[test]
    fn test_conservation_across_session() {
        let mut session =
            ConsoleSession::new(Lexicon::english(), ReportFormat::Text).expect("Failed to seed");
        let total = |session: &ConsoleSession, item: &str| {
            let coordinator = session.coordinator();
            coordinator.store().quantity_of(item) + coordinator.shop().quantity_of(item)
        };
        let dogs_before = total(&session, "dog");
        let trees_before = total(&session, "tree");

        let mut transcript = Vec::new();
        session
            .run(
                "deliver 5 dog from shop to store\n\
                 deliver 3 dog from shop to store\n\
                 deliver 59 tree from store to shop\n\
                 stop\n"
                    .as_bytes(),
                &mut transcript,
            )
            .expect("Session failed");
        let transcript = String::from_utf8(transcript).expect("Transcript is not UTF-8");

        // the store holds 97 of 100, so 5 dogs are refused and 3 fit
        assert_eq!(transcript.matches("The goods did not fit :(").count(), 2);
        assert_eq!(transcript.matches("Courier delivered").count(), 1);
        assert_eq!(total(&session, "dog"), dogs_before);
        assert_eq!(total(&session, "tree"), trees_before);
        assert_eq!(session.coordinator().store().quantity_of("dog"), 7);
        assert_eq!(session.coordinator().shop().quantity_of("dog"), 2);
    }

    #[test]
    fn test_report_keeps_stocking_order() {
        let (stock, _) = run_fixture("capacity_overflow", LexiconType::English);

        // refused goods are returned after the rest of the store's items
        let store_items: Vec<&str> = stock
            .lines()
            .filter_map(|row| row.strip_prefix("store,"))
            .filter_map(|row| row.split(',').next())
            .collect();
        assert_eq!(
            store_items,
            ["cookies", "dog", "box", "apple", "tree", "orange"]
        );
    }
}
