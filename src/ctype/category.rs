use std::fmt;

use if_chain::if_chain;
use phf::phf_map;

use super::{
    is_alpha, is_alphanumeric, is_ascii_7bit, is_blank, is_control, is_digit, is_graphic,
    is_hex_digit, is_lower, is_printable, is_punctuation, is_space, is_upper,
};

/// POSIX class names, as used in `[:name:]` bracket expressions.
const CATEGORY_NAMES: phf::Map<&'static str, Category> = phf_map! {
    "digit" => Category::Digit,
    "xdigit" => Category::HexDigit,
    "lower" => Category::Lower,
    "upper" => Category::Upper,
    "alpha" => Category::Alpha,
    "alnum" => Category::AlphaNumeric,
    "punct" => Category::Punctuation,
    "graph" => Category::Graphic,
    "blank" => Category::Blank,
    "space" => Category::Space,
    "print" => Category::Printable,
    "cntrl" => Category::Control,
    "ascii" => Category::Ascii,
};

/// A character class, one per predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Digit,
    HexDigit,
    Lower,
    Upper,
    Alpha,
    AlphaNumeric,
    Punctuation,
    Graphic,
    Blank,
    Space,
    Printable,
    Control,
    Ascii,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Digit,
        Category::HexDigit,
        Category::Lower,
        Category::Upper,
        Category::Alpha,
        Category::AlphaNumeric,
        Category::Punctuation,
        Category::Graphic,
        Category::Blank,
        Category::Space,
        Category::Printable,
        Category::Control,
        Category::Ascii,
    ];

    /// Looks up a class by its POSIX name, either bare (`alpha`) or in
    /// bracket form (`[:alpha:]`). Names are case sensitive.
    pub fn from_name(name: &str) -> Option<Category> {
        let name = unbracket(name).unwrap_or(name);
        CATEGORY_NAMES.get(name).copied()
    }

    /// The POSIX name of this class
    pub const fn name(self) -> &'static str {
        match self {
            Category::Digit => "digit",
            Category::HexDigit => "xdigit",
            Category::Lower => "lower",
            Category::Upper => "upper",
            Category::Alpha => "alpha",
            Category::AlphaNumeric => "alnum",
            Category::Punctuation => "punct",
            Category::Graphic => "graph",
            Category::Blank => "blank",
            Category::Space => "space",
            Category::Printable => "print",
            Category::Control => "cntrl",
            Category::Ascii => "ascii",
        }
    }

    pub const fn contains(self, c: i32) -> bool {
        match self {
            Category::Digit => is_digit(c),
            Category::HexDigit => is_hex_digit(c),
            Category::Lower => is_lower(c),
            Category::Upper => is_upper(c),
            Category::Alpha => is_alpha(c),
            Category::AlphaNumeric => is_alphanumeric(c),
            Category::Punctuation => is_punctuation(c),
            Category::Graphic => is_graphic(c),
            Category::Blank => is_blank(c),
            Category::Space => is_space(c),
            Category::Printable => is_printable(c),
            Category::Control => is_control(c),
            Category::Ascii => is_ascii_7bit(c),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Every class containing `c`, in `Category::ALL` order.
pub fn classify(c: i32) -> impl Iterator<Item = Category> {
    let all: &'static [Category] = &Category::ALL;
    all.iter().copied().filter(move |category| category.contains(c))
}

// "[:name:]" => "name"
fn unbracket(name: &str) -> Option<&str> {
    if_chain! {
        if let Some(inner) = name.strip_prefix("[:");
        if let Some(inner) = inner.strip_suffix(":]");
        then {
            Some(inner)
        } else {
            None
        }
    }
}
