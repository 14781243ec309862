/// Largest value the standard Roman notation can express.
pub const MAX_ROMAN: i64 = 3999;

/// Descending `(value, numeral)` pairs used by the greedy encoder.
const NUMERALS: [(i64, &str); 13] = [(1000, "M"),
                                     (900, "CM"),
                                     (500, "D"),
                                     (400, "CD"),
                                     (100, "C"),
                                     (90, "XC"),
                                     (50, "L"),
                                     (40, "XL"),
                                     (10, "X"),
                                     (9, "IX"),
                                     (5, "V"),
                                     (4, "IV"),
                                     (1, "I")];

/// The only tokens accepted by the lookup grammar.
const LOOKUP: [(&str, i64); 10] = [("I", 1),
                                   ("II", 2),
                                   ("III", 3),
                                   ("IV", 4),
                                   ("V", 5),
                                   ("VI", 6),
                                   ("VII", 7),
                                   ("VIII", 8),
                                   ("IX", 9),
                                   ("X", 10)];

/// `(one, five, ten, unit)` symbols of the hundreds, tens and ones places.
const PLACES: [(u8, u8, u8, i64); 3] = [(b'C', b'D', b'M', 100),
                                        (b'X', b'L', b'C', 10),
                                        (b'I', b'V', b'X', 1)];

/// Errors raised by the Roman numeral codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RomanError {
    /// The token is not a well formed Roman numeral.
    Invalid(String),
    /// Zero and negative values have no Roman representation.
    NonPositive(i64),
    /// The value is larger than [`MAX_ROMAN`].
    TooLarge(i64),
}

impl std::fmt::Display for RomanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(token) => write!(f, "Invalid Roman numeral '{token}'."),
            Self::NonPositive(value) => write!(f,
                                               "Roman numerals have no representation for zero or negative values, found {value}."),
            Self::TooLarge(value) => {
                write!(f, "Roman numerals stop at {MAX_ROMAN}, found {value}.")
            },
        }
    }
}

impl std::error::Error for RomanError {}

/// Selects how Roman numeral operands are recognized.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RomanGrammar {
    /// Full subtractive notation, `I` through `MMMCMXCIX`.
    #[default]
    Subtractive,
    /// Only the ten tokens `I` through `X`.
    Lookup,
}

impl RomanGrammar {
    /// Decodes `token` with this grammar.
    ///
    /// # Example
    /// ```
    /// use duocalc::util::roman::RomanGrammar;
    ///
    /// assert_eq!(RomanGrammar::Subtractive.decode("XIV"), Ok(14));
    /// assert!(RomanGrammar::Lookup.decode("XIV").is_err());
    /// ```
    pub fn decode(self, token: &str) -> Result<i64, RomanError> {
        match self {
            Self::Subtractive => decode(token),
            Self::Lookup => decode_lookup(token),
        }
    }
}

/// Decodes a Roman numeral written in standard subtractive notation.
///
/// The token is scanned place by place: up to three `M`, then one digit each
/// for the hundreds, tens and ones. Within a place the two-character pairs
/// (`CM`, `CD`, `XC`, `XL`, `IX`, `IV`) win over single symbols. This accepts
/// exactly the language of
/// `M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})`, minus the empty
/// string.
///
/// # Errors
/// Returns [`RomanError::Invalid`] if the token is empty, contains an
/// unknown symbol or breaks the ordering rules (`IIII`, `IM`, `VX`, ...).
///
/// # Example
/// ```
/// use duocalc::util::roman::decode;
///
/// assert_eq!(decode("MCMXCIV"), Ok(1994));
/// assert!(decode("IIII").is_err());
/// ```
pub fn decode(token: &str) -> Result<i64, RomanError> {
    let bytes = token.as_bytes();
    if bytes.is_empty() {
        return Err(RomanError::Invalid(token.to_string()));
    }

    let thousands = count_run(bytes, b'M', 3);
    let mut pos = thousands;
    let mut total = 1000 * place_value(thousands);

    for (one, five, ten, unit) in PLACES {
        let (digit, width) = scan_digit(&bytes[pos..], one, five, ten);
        total += digit * unit;
        pos += width;
    }

    if pos == bytes.len() {
        Ok(total)
    } else {
        Err(RomanError::Invalid(token.to_string()))
    }
}

/// Decodes one of the ten tokens `I` through `X`.
///
/// # Errors
/// Returns [`RomanError::Invalid`] for every other token, including valid
/// numerals above ten.
pub fn decode_lookup(token: &str) -> Result<i64, RomanError> {
    LOOKUP.iter()
          .find(|(numeral, _)| *numeral == token)
          .map(|(_, value)| *value)
          .ok_or_else(|| RomanError::Invalid(token.to_string()))
}

/// Encodes a positive integer as a Roman numeral.
///
/// Greedily subtracts the largest table value that still fits and appends
/// its numeral until nothing is left.
///
/// # Errors
/// - [`RomanError::NonPositive`] for zero and negative values.
/// - [`RomanError::TooLarge`] for values above [`MAX_ROMAN`].
///
/// # Example
/// ```
/// use duocalc::util::roman::{RomanError, encode};
///
/// assert_eq!(encode(9).unwrap(), "IX");
/// assert_eq!(encode(0), Err(RomanError::NonPositive(0)));
/// ```
pub fn encode(value: i64) -> Result<String, RomanError> {
    if value < 1 {
        return Err(RomanError::NonPositive(value));
    }
    if value > MAX_ROMAN {
        return Err(RomanError::TooLarge(value));
    }

    let mut remainder = value;
    let mut numeral = String::new();
    for (unit, symbols) in NUMERALS {
        while remainder >= unit {
            remainder -= unit;
            numeral.push_str(symbols);
        }
    }
    Ok(numeral)
}

/// Scans one decimal place and returns its digit and the bytes consumed.
fn scan_digit(rest: &[u8], one: u8, five: u8, ten: u8) -> (i64, usize) {
    match rest {
        [a, b, ..] if *a == one && *b == ten => (9, 2),
        [a, b, ..] if *a == one && *b == five => (4, 2),
        [a, ..] if *a == five => {
            let ones = count_run(&rest[1..], one, 3);
            (5 + place_value(ones), 1 + ones)
        },
        _ => {
            let ones = count_run(rest, one, 3);
            (place_value(ones), ones)
        },
    }
}

/// Counts leading `symbol` bytes, stopping after `max`.
fn count_run(bytes: &[u8], symbol: u8, max: usize) -> usize {
    bytes.iter().take(max).take_while(|&&b| b == symbol).count()
}

/// Converts a run length of at most three into a digit.
fn place_value(run: usize) -> i64 {
    match run {
        0 => 0,
        1 => 1,
        2 => 2,
        _ => 3,
    }
}
