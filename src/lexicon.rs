//! Console lexicons
//!
//! The command language is fixed per session. A lexicon supplies the grammar
//! words of the `deliver` command, the names of both locations, the stop word,
//! the initial stock and every line of console text.
//!
//! Two lexicons are available:
//!
//! | Lexicon   | Command                                     | Stop   |
//! |-----------|---------------------------------------------|--------|
//! | `english` | `deliver 3 cookies from store to shop`      | `stop` |
//! | `russian` | `доставить 3 печеньки из склад в магазин`   | `стоп` |

use crate::cli::LexiconType;
use crate::types::{Location, Quantity};
use once_cell::sync::Lazy;
use regex::Regex;

static ENGLISH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^deliver ([0-9]+) ([a-z]+) from ([a-z]+) to ([a-z]+)$")
        .expect("english command pattern is valid")
});

static RUSSIAN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^доставить ([0-9]+) ([а-я]+) из ([а-я]+) в ([а-я]+)$")
        .expect("russian command pattern is valid")
});

const ENGLISH_STORE_SEED: &[(&str, Quantity)] = &[
    ("cookies", 3),
    ("dog", 4),
    ("box", 5),
    ("apple", 6),
    ("tree", 59),
    ("orange", 20),
];

const ENGLISH_SHOP_SEED: &[(&str, Quantity)] = &[("cookies", 2), ("dog", 5)];

const RUSSIAN_STORE_SEED: &[(&str, Quantity)] = &[
    ("печеньки", 3),
    ("собака", 4),
    ("коробка", 5),
    ("яблоко", 6),
    ("дерево", 59),
    ("апельсин", 20),
];

const RUSSIAN_SHOP_SEED: &[(&str, Quantity)] = &[("печеньки", 2), ("собака", 5)];

/// Vocabulary and console text of one command language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicon {
    kind: LexiconType,
}

impl Lexicon {
    pub fn new(kind: LexiconType) -> Self {
        Lexicon { kind }
    }

    pub fn english() -> Self {
        Self::new(LexiconType::English)
    }

    pub fn russian() -> Self {
        Self::new(LexiconType::Russian)
    }

    pub fn kind(&self) -> LexiconType {
        self.kind
    }

    /// Anchored pattern of the `deliver` command
    ///
    /// Captures, in order: quantity, product, source, destination.
    pub fn command_pattern(&self) -> &'static Regex {
        match self.kind {
            LexiconType::English => &*ENGLISH_PATTERN,
            LexiconType::Russian => &*RUSSIAN_PATTERN,
        }
    }

    /// Word that ends the session
    pub fn stop_word(&self) -> &'static str {
        match self.kind {
            LexiconType::English => "stop",
            LexiconType::Russian => "стоп",
        }
    }

    /// User-facing name of a location, as typed in commands
    pub fn location_name(&self, location: Location) -> &'static str {
        match (self.kind, location) {
            (LexiconType::English, Location::Store) => "store",
            (LexiconType::English, Location::Shop) => "shop",
            (LexiconType::Russian, Location::Store) => "склад",
            (LexiconType::Russian, Location::Shop) => "магазин",
        }
    }

    /// Location called `name` in this lexicon, if any
    pub fn location_named(&self, name: &str) -> Option<Location> {
        [Location::Store, Location::Shop]
            .into_iter()
            .find(|location| self.location_name(*location) == name)
    }

    /// Initial contents of a location
    pub fn seed(&self, location: Location) -> &'static [(&'static str, Quantity)] {
        match (self.kind, location) {
            (LexiconType::English, Location::Store) => ENGLISH_STORE_SEED,
            (LexiconType::English, Location::Shop) => ENGLISH_SHOP_SEED,
            (LexiconType::Russian, Location::Store) => RUSSIAN_STORE_SEED,
            (LexiconType::Russian, Location::Shop) => RUSSIAN_SHOP_SEED,
        }
    }

    pub fn greeting(&self) -> String {
        match self.kind {
            LexiconType::English => format!("To stop deliveries, type \"{}\"", self.stop_word()),
            LexiconType::Russian => {
                format!("Если хотите остановить перемещения, то напишите \"{}\"", self.stop_word())
            }
        }
    }

    /// Heading printed above a location's contents
    pub fn contents_heading(&self, location: Location) -> &'static str {
        match (self.kind, location) {
            (LexiconType::English, Location::Store) => "The store currently holds:",
            (LexiconType::English, Location::Shop) => "The shop currently holds:",
            (LexiconType::Russian, Location::Store) => "На складе сейчас имеется:",
            (LexiconType::Russian, Location::Shop) => "В магазине сейчас имеется:",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.kind {
            LexiconType::English => "Enter a request like \"Deliver 3 cookies from store to shop\"",
            LexiconType::Russian => "Введите запрос в формате, \"Доставить 3 печеньки из склад в магазин\"",
        }
    }

    pub fn invalid_request(&self) -> &'static str {
        match self.kind {
            LexiconType::English => "Invalid request, please type it again",
            LexiconType::Russian => "Не верный запрос, напишите заново",
        }
    }

    pub fn courier_fetching(&self, quantity: Quantity, product: &str, source: &str) -> String {
        match self.kind {
            LexiconType::English => {
                format!("Courier is fetching {} {} from the {}", quantity, product, source)
            }
            LexiconType::Russian => format!("Курьер идёт за {} {} из {}", quantity, product, source),
        }
    }

    pub fn insufficient_stock(&self) -> &'static str {
        match self.kind {
            LexiconType::English => "There is no such item or not enough of it",
            LexiconType::Russian => "Такого товара нет или не хватает",
        }
    }

    pub fn courier_carrying(
        &self,
        quantity: Quantity,
        product: &str,
        source: &str,
        destination: &str,
    ) -> String {
        match self.kind {
            LexiconType::English => format!(
                "Courier is carrying {} {} from the {} to the {}",
                quantity, product, source, destination
            ),
            LexiconType::Russian => format!(
                "Курьер везёт {} {} с {} в {}",
                quantity, product, source, destination
            ),
        }
    }

    pub fn did_not_fit(&self) -> &'static str {
        match self.kind {
            LexiconType::English => "The goods did not fit :(\nCourier took them back",
            LexiconType::Russian => "Товар не поместился :(\nКурьер отвёз его обратно",
        }
    }

    pub fn return_failed(&self, source: &str) -> String {
        match self.kind {
            LexiconType::English => format!("Courier could not return the goods to the {}", source),
            LexiconType::Russian => format!("Курьер не смог вернуть товар в {}", source),
        }
    }

    pub fn courier_delivered(&self, quantity: Quantity, product: &str, destination: &str) -> String {
        match self.kind {
            LexiconType::English => {
                format!("Courier delivered {} {} to the {}", quantity, product, destination)
            }
            LexiconType::Russian => {
                format!("Курьер доставил {} {} в {}", quantity, product, destination)
            }
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}
