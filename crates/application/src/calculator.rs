//! Arithmetic expression evaluation
//!
//! A small recursive-descent evaluator for numeric expressions. It knows
//! numbers, `+ - * / %`, `**` or `^` for powers, unary signs, and parentheses.
//! Anything else, including names and function calls, is rejected.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr    := term (("+" | "-") term)*
//! term    := unary (("*" | "/" | "%") unary)*
//! unary   := ("+" | "-") unary | power
//! power   := primary (("**" | "^") unary)?
//! primary := number | "(" expr ")"
//! ```
//!
//! Powers bind tighter than a leading sign and associate to the right, so
//! `-2 ** 2` is `-4` and `2 ^ 3 ^ 2` is `512`.

use thiserror::Error;

/// Parentheses and signs may nest this deep
const MAX_DEPTH: usize = 64;

/// Why an expression could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("unexpected {found} at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NonFinite,

    #[error("expression nested too deeply")]
    TooDeep,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Power,
    LParen,
    RParen,
}

impl Token {
    fn describe(self) -> String {
        match self {
            Self::Number(n) => format!("number {n}"),
            Self::Plus => "'+'".to_string(),
            Self::Minus => "'-'".to_string(),
            Self::Star => "'*'".to_string(),
            Self::Slash => "'/'".to_string(),
            Self::Percent => "'%'".to_string(),
            Self::Power => "power operator".to_string(),
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, CalculatorError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let start = i;
        let token = match ch {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            },
            '+' => Token::Plus,
            '-' => Token::Minus,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Power,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                Token::Power
            },
            '*' => Token::Star,
            c if c.is_ascii_digit() || c == '.' => {
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // Optional exponent: e, E, followed by an optionally signed integer
                if matches!(chars.get(i), Some('e' | 'E')) {
                    let mut j = i + 1;
                    if matches!(chars.get(j), Some('+' | '-')) {
                        j += 1;
                    }
                    if chars.get(j).is_some_and(char::is_ascii_digit) {
                        i = j;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let literal: String = chars[start..i].iter().collect();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| CalculatorError::InvalidNumber(literal.clone()))?;
                tokens.push((Token::Number(value), start));
                continue;
            },
            c => {
                return Err(CalculatorError::UnexpectedCharacter {
                    ch: c,
                    position: start,
                });
            },
        };
        tokens.push((token, start));
        i += 1;
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(t, _)| *t)
    }

    fn next(&mut self) -> Option<(Token, usize)> {
        let token = self.tokens.get(self.pos).copied();
        self.pos += 1;
        token
    }

    fn descend(&mut self) -> Result<(), CalculatorError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalculatorError::TooDeep);
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<f64, CalculatorError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == Token::Plus { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalculatorError> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash | Token::Percent)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = match op {
                Token::Star => value * rhs,
                _ if rhs == 0.0 => return Err(CalculatorError::DivisionByZero),
                Token::Slash => value / rhs,
                // Floored modulo: the result takes the sign of the divisor
                _ => value - rhs * (value / rhs).floor(),
            };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, CalculatorError> {
        match self.peek() {
            Some(op @ (Token::Plus | Token::Minus)) => {
                self.pos += 1;
                self.descend()?;
                let value = self.unary()?;
                self.depth -= 1;
                Ok(if op == Token::Minus { -value } else { value })
            },
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, CalculatorError> {
        let base = self.primary()?;
        if self.peek() == Some(Token::Power) {
            self.pos += 1;
            self.descend()?;
            let exponent = self.unary()?;
            self.depth -= 1;
            if base == 0.0 && exponent < 0.0 {
                return Err(CalculatorError::DivisionByZero);
            }
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, CalculatorError> {
        match self.next() {
            Some((Token::Number(n), _)) => Ok(n),
            Some((Token::LParen, _)) => {
                self.descend()?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.next() {
                    Some((Token::RParen, _)) => Ok(value),
                    Some((token, position)) => Err(CalculatorError::UnexpectedToken {
                        found: token.describe(),
                        position,
                    }),
                    None => Err(CalculatorError::UnexpectedEnd),
                }
            },
            Some((token, position)) => Err(CalculatorError::UnexpectedToken {
                found: token.describe(),
                position,
            }),
            None => Err(CalculatorError::UnexpectedEnd),
        }
    }
}

/// Evaluate an arithmetic expression
pub fn evaluate(expression: &str) -> Result<f64, CalculatorError> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(CalculatorError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;

    if let Some((token, position)) = parser.next() {
        return Err(CalculatorError::UnexpectedToken {
            found: token.describe(),
            position,
        });
    }
    if !value.is_finite() {
        return Err(CalculatorError::NonFinite);
    }
    Ok(value)
}

/// Render a result; integral values print without a fractional part
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        // Adding zero turns -0.0 into 0.0
        format!("{:.0}", value + 0.0)
    } else {
        value.to_string()
    }
}
