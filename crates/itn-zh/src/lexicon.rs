// Lexicon tables: the declared numeral alphabet and its values.
//
// Pure data, loaded once and read-only afterwards. Lookup tables are
// hash-backed; iteration always goes through the const source tables so
// grammar construction order is deterministic.

use hashbrown::HashMap;
use itn_core::ItnError;

/// The zero symbol.
pub const ZERO: char = '零';
/// The negative marker.
pub const NEGATIVE: char = '负';
/// The spoken decimal point.
pub const DECIMAL_POINT: char = '点';
/// The ordinal prefix morpheme.
pub const ORDINAL_PREFIX: char = '第';

/// Digit symbols in value order.
const DIGIT_TABLE: [(char, u32); 9] = [
    ('一', 1),
    ('二', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
];

/// Scale symbols in magnitude order.
const SCALE_TABLE: [(char, u64); 6] = [
    ('十', 10),
    ('百', 100),
    ('千', 1_000),
    ('万', 10_000),
    ('亿', 100_000_000),
    ('兆', 1_000_000_000_000),
];

/// Standalone quantity suffixes recognized after a decimal value.
pub const QUANTITY_SUFFIXES: [&str; 8] =
    ["万", "十万", "百万", "千万", "亿", "十亿", "百亿", "千亿"];

/// What role a symbol plays in the numeral alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    Digit,
    Zero,
    Scale,
    NegativeMarker,
    DecimalPoint,
    OrdinalPrefix,
}

/// The numeral lexicon: finite symbol-to-value mappings.
///
/// Constructed once at cascade initialization; immutable afterwards.
#[derive(Debug)]
pub struct Lexicon {
    digit_values: HashMap<char, u32>,
    scale_multipliers: HashMap<char, u64>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            digit_values: DIGIT_TABLE.iter().copied().collect(),
            scale_multipliers: SCALE_TABLE.iter().copied().collect(),
        }
    }

    /// The value of a digit symbol, if `symbol` is one.
    pub fn digit_value(&self, symbol: char) -> Option<u32> {
        self.digit_values.get(&symbol).copied()
    }

    /// The power-of-ten multiplier of a scale symbol, if `symbol` is one.
    pub fn scale_multiplier(&self, symbol: char) -> Option<u64> {
        self.scale_multipliers.get(&symbol).copied()
    }

    pub fn is_zero_symbol(&self, symbol: char) -> bool {
        symbol == ZERO
    }

    pub fn is_negative_marker(&self, symbol: char) -> bool {
        symbol == NEGATIVE
    }

    /// Classify a symbol, failing with [`ItnError::UnknownSymbol`] for
    /// anything outside the declared alphabet.
    pub fn classify(&self, symbol: char) -> Result<SymbolClass, ItnError> {
        if self.digit_values.contains_key(&symbol) {
            Ok(SymbolClass::Digit)
        } else if symbol == ZERO {
            Ok(SymbolClass::Zero)
        } else if self.scale_multipliers.contains_key(&symbol) {
            Ok(SymbolClass::Scale)
        } else if symbol == NEGATIVE {
            Ok(SymbolClass::NegativeMarker)
        } else if symbol == DECIMAL_POINT {
            Ok(SymbolClass::DecimalPoint)
        } else if symbol == ORDINAL_PREFIX {
            Ok(SymbolClass::OrdinalPrefix)
        } else {
            Err(ItnError::UnknownSymbol { symbol })
        }
    }

    /// Digit symbol to written digit character, in value order.
    pub fn digit_pairs(&self) -> impl Iterator<Item = (char, char)> {
        DIGIT_TABLE.iter().map(|&(symbol, value)| {
            (symbol, char::from_digit(value, 10).unwrap_or('0'))
        })
    }

    /// The closed teen table: 十 through 十九 as full spoken strings.
    pub fn teen_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("十".to_string(), "10".to_string())];
        for &(symbol, value) in &DIGIT_TABLE {
            pairs.push((format!("十{symbol}"), format!("1{value}")));
        }
        pairs
    }

    /// Spoken forms of the small numbers 0..=12 that carry a dedicated
    /// lexical form, paired with their written values.
    pub fn small_number_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![(ZERO.to_string(), "0".to_string())];
        for &(symbol, value) in &DIGIT_TABLE {
            pairs.push((symbol.to_string(), value.to_string()));
        }
        pairs.push(("十".to_string(), "10".to_string()));
        pairs.push(("十一".to_string(), "11".to_string()));
        pairs.push(("十二".to_string(), "12".to_string()));
        pairs
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_values() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.digit_value('一'), Some(1));
        assert_eq!(lexicon.digit_value('九'), Some(9));
        assert_eq!(lexicon.digit_value('十'), None);
    }

    #[test]
    fn scale_multipliers() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.scale_multiplier('十'), Some(10));
        assert_eq!(lexicon.scale_multiplier('万'), Some(10_000));
        assert_eq!(lexicon.scale_multiplier('亿'), Some(100_000_000));
        assert_eq!(lexicon.scale_multiplier('兆'), Some(1_000_000_000_000));
        assert_eq!(lexicon.scale_multiplier('一'), None);
    }

    #[test]
    fn marker_predicates() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_zero_symbol('零'));
        assert!(!lexicon.is_zero_symbol('一'));
        assert!(lexicon.is_negative_marker('负'));
        assert!(!lexicon.is_negative_marker('零'));
    }

    #[test]
    fn classify_alphabet() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.classify('三').unwrap(), SymbolClass::Digit);
        assert_eq!(lexicon.classify('零').unwrap(), SymbolClass::Zero);
        assert_eq!(lexicon.classify('万').unwrap(), SymbolClass::Scale);
        assert_eq!(lexicon.classify('负').unwrap(), SymbolClass::NegativeMarker);
        assert_eq!(lexicon.classify('点').unwrap(), SymbolClass::DecimalPoint);
        assert_eq!(lexicon.classify('第').unwrap(), SymbolClass::OrdinalPrefix);
    }

    #[test]
    fn classify_rejects_unknown() {
        let lexicon = Lexicon::new();
        let err = lexicon.classify('x').unwrap_err();
        assert_eq!(err, ItnError::UnknownSymbol { symbol: 'x' });
    }

    #[test]
    fn teen_table_is_closed() {
        let lexicon = Lexicon::new();
        let teens = lexicon.teen_pairs();
        assert_eq!(teens.len(), 10);
        assert_eq!(teens[0], ("十".to_string(), "10".to_string()));
        assert_eq!(teens[9], ("十九".to_string(), "19".to_string()));
    }

    #[test]
    fn small_numbers_cover_zero_through_twelve() {
        let lexicon = Lexicon::new();
        let smalls = lexicon.small_number_pairs();
        assert_eq!(smalls.len(), 13);
        assert_eq!(smalls[0].1, "0");
        assert_eq!(smalls[12], ("十二".to_string(), "12".to_string()));
    }
}
