use crate::composition::CompositionElement;
use crate::elements_db::atomic_number_of;
use crate::engine::Engine;
use crate::error::{AlloyDbError, Result};
use crate::prediction::PredictionResult;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Name(String),
    Num(f64),
    Eos,
}

struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
}

impl Tokenizer {
    fn new(input: &str) -> Self {
        Tokenizer {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn next_token(&mut self) -> std::result::Result<Token, String> {
        if self.pos >= self.chars.len() {
            return Ok(Token::Eos);
        }

        let ch = self.chars[self.pos];

        if ch.is_ascii_digit() || ch == '.' {
            return self.read_number();
        }

        // Element symbol: uppercase letter followed by lowercase letters
        if ch.is_ascii_uppercase() {
            let start = self.pos;
            self.pos += 1;
            while self.pos < self.chars.len() && self.chars[self.pos].is_ascii_lowercase() {
                self.pos += 1;
            }
            let name: String = self.chars[start..self.pos].iter().collect();
            return Ok(Token::Name(name));
        }

        Err(format!(
            "unrecognized character '{}' at position {}",
            ch, self.pos
        ))
    }

    fn read_number(&mut self) -> std::result::Result<Token, String> {
        let start = self.pos;

        while self.pos < self.chars.len() && self.chars[self.pos].is_ascii_digit() {
            self.pos += 1;
        }

        if self.pos < self.chars.len() && self.chars[self.pos] == '.' {
            self.pos += 1;
            while self.pos < self.chars.len() && self.chars[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
        }

        let s: String = self.chars[start..self.pos].iter().collect();
        s.parse::<f64>()
            .map(Token::Num)
            .map_err(|_| format!("invalid number '{s}'"))
    }
}

/// Parse a weight-percent composition such as `"Fe70Cr18Ni8Mn2C0.08"`.
///
/// Every symbol is followed by its percentage, except at most one "balance"
/// element whose share is `100 - sum(others)`. Repeated symbols are merged into
/// their first occurrence. Whitespace and a leading dot (`C.08`) are accepted.
///
/// # Examples
/// ```
/// let parts = alloydb::compparser::parse_composition("FeCr18Ni8").unwrap();
/// assert_eq!(parts[0].symbol, "Fe");
/// assert_eq!(parts[0].percentage, 74.0);
/// ```
pub fn parse_composition(input: &str) -> Result<Vec<CompositionElement>> {
    let input = preprocess(input);
    if input.is_empty() {
        return Err(AlloyDbError::InvalidComposition(
            "empty composition string".to_string(),
        ));
    }

    let mut tokenizer = Tokenizer::new(&input);
    let mut current = tokenizer
        .next_token()
        .map_err(AlloyDbError::InvalidComposition)?;

    let mut parts: Vec<CompositionElement> = Vec::new();
    let mut balance: Option<usize> = None;

    loop {
        match current {
            Token::Name(symbol) => {
                let atomic_number = atomic_number_of(&symbol).ok_or_else(|| {
                    AlloyDbError::InvalidComposition(format!("'{symbol}' is not an element symbol"))
                })?;
                current = tokenizer
                    .next_token()
                    .map_err(AlloyDbError::InvalidComposition)?;

                let percentage = if let Token::Num(n) = current {
                    current = tokenizer
                        .next_token()
                        .map_err(AlloyDbError::InvalidComposition)?;
                    Some(n)
                } else {
                    None
                };

                let existing = parts.iter().position(|p| p.symbol == symbol);
                match (existing, percentage) {
                    (Some(idx), Some(pct)) if balance != Some(idx) => {
                        parts[idx].percentage += pct;
                    }
                    (Some(_), _) => {
                        return Err(AlloyDbError::InvalidComposition(format!(
                            "balance element '{symbol}' repeated"
                        )));
                    }
                    (None, Some(pct)) => {
                        parts.push(CompositionElement::new(symbol, atomic_number, pct));
                    }
                    (None, None) => {
                        if balance.is_some() {
                            return Err(AlloyDbError::InvalidComposition(
                                "more than one balance element".to_string(),
                            ));
                        }
                        balance = Some(parts.len());
                        parts.push(CompositionElement::new(symbol, atomic_number, 0.0));
                    }
                }
            }
            Token::Num(n) => {
                return Err(AlloyDbError::InvalidComposition(format!(
                    "number {n} without an element"
                )));
            }
            Token::Eos => break,
        }
    }

    if let Some(idx) = balance {
        let others: f64 = parts
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != idx)
            .map(|(_, p)| p.percentage)
            .sum();
        let remainder = 100.0 - others;
        if remainder < 0.0 {
            return Err(AlloyDbError::InvalidComposition(format!(
                "explicit percentages sum to {others}, leaving no balance"
            )));
        }
        parts[idx].percentage = remainder;
    }

    Ok(parts)
}

/// Returns true if the composition string parses.
pub fn validate_composition(input: &str) -> bool {
    parse_composition(input).is_ok()
}

fn preprocess(input: &str) -> String {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let chars: Vec<char> = compact.chars().collect();
    let mut result = String::with_capacity(compact.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '.' && (i == 0 || !chars[i - 1].is_ascii_digit()) {
            result.push('0');
        }
        result.push(ch);
    }

    result
}

impl Engine {
    /// Parse a composition string and predict its properties.
    ///
    /// Parse errors become an invalid result, like any other bad input.
    pub fn predict_formula(&self, input: &str) -> PredictionResult {
        match parse_composition(input) {
            Ok(parts) => self.predict(&parts),
            Err(err) => PredictionResult::invalid(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(parts: &[CompositionElement], symbol: &str) -> f64 {
        parts.iter().find(|p| p.symbol == symbol).unwrap().percentage
    }

    #[test]
    fn stainless_304() {
        let parts = parse_composition("Fe70Cr18Ni8Mn2C0.08").unwrap();
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[0].symbol, "Fe");
        assert_eq!(parts[0].atomic_number, 26);
        assert_eq!(pct(&parts, "Cr"), 18.0);
        assert_eq!(pct(&parts, "C"), 0.08);
    }

    #[test]
    fn balance_element() {
        let parts = parse_composition("Ti Al6 V4").unwrap();
        assert_eq!(pct(&parts, "Ti"), 90.0);
        assert_eq!(parts[0].symbol, "Ti");
    }

    #[test]
    fn leading_dot_decimal() {
        let parts = parse_composition("Fe99.2C.8").unwrap();
        assert!((pct(&parts, "C") - 0.8).abs() < 1e-12);
    }

    #[test]
    fn repeated_symbols_merge() {
        let parts = parse_composition("Cu30Zn20Cu50").unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(pct(&parts, "Cu"), 80.0);
    }

    #[test]
    fn co_vs_c_o() {
        let cobalt = parse_composition("Co100").unwrap();
        assert_eq!(cobalt[0].symbol, "Co");
        let co = parse_composition("C50O50").unwrap();
        assert_eq!(co.len(), 2);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(!validate_composition(""));
        assert!(!validate_composition("fe50"));
        assert!(!validate_composition("Xx50"));
        assert!(!validate_composition("50Fe"));
        assert!(!validate_composition("FeCr"));
        assert!(!validate_composition("FeCr80Ni30"));
        assert!(!validate_composition("Fe(Cr)"));
    }

    #[test]
    fn predict_formula_reports_parse_errors() {
        let r = Engine::new().predict_formula("Qq10");
        assert!(!r.is_valid);
        assert!(r.validation_message.unwrap().contains("Qq"));
    }
}
