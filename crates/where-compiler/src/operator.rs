use crate::compare::{as_text, loose_cmp, loose_eq};
use model::Value;
use std::{cmp::Ordering, fmt, str::FromStr};

/// Comparison operator of a `Basic` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
    NotLike,
}

impl Operator {
    pub fn test(&self, actual: &Value, target: &Value) -> bool {
        match self {
            Operator::Equal => loose_eq(actual, target),
            Operator::NotEqual => !loose_eq(actual, target),

            Operator::GreaterThan => matches!(loose_cmp(actual, target), Some(Ordering::Greater)),
            Operator::GreaterThanOrEqual => matches!(
                loose_cmp(actual, target),
                Some(Ordering::Greater) | Some(Ordering::Equal)
            ),
            Operator::LessThan => matches!(loose_cmp(actual, target), Some(Ordering::Less)),
            Operator::LessThanOrEqual => matches!(
                loose_cmp(actual, target),
                Some(Ordering::Less) | Some(Ordering::Equal)
            ),

            Operator::Like => like(actual, target),
            Operator::NotLike => !like(actual, target),
        }
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Operator::Equal),
            "!=" | "<>" => Ok(Operator::NotEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            _ => {
                let keyword = s.split_whitespace().collect::<Vec<_>>().join(" ");
                match keyword.to_ascii_lowercase().as_str() {
                    "like" => Ok(Operator::Like),
                    "not like" => Ok(Operator::NotLike),
                    _ => Err(format!("Unsupported operator: {s}")),
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::Like => "like",
            Operator::NotLike => "not like",
        };
        f.write_str(op)
    }
}

fn like(actual: &Value, pattern: &Value) -> bool {
    match (as_text(actual), as_text(pattern)) {
        (Some(text), Some(pattern)) => like_match(&text, &pattern),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LikeToken {
    AnyRun,
    AnyOne,
    Literal(char),
}

fn tokenize(pattern: &str) -> Vec<LikeToken> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => LikeToken::AnyRun,
            '_' => LikeToken::AnyOne,
            '\\' => LikeToken::Literal(chars.next().unwrap_or('\\')),
            c => LikeToken::Literal(c),
        });
    }
    tokens
}

/// Case-insensitive SQL `LIKE`.
///
/// `%` matches any run of characters, `_` exactly one; `\%` and `\_` match
/// the literal character.
pub fn like_match(value: &str, pattern: &str) -> bool {
    let text: Vec<char> = value.to_lowercase().chars().collect();
    let tokens = tokenize(&pattern.to_lowercase());

    let (mut t, mut p) = (0, 0);
    // Position after the last `%` and the text index it is currently covering.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if let Some(token) = tokens.get(p) {
            match *token {
                LikeToken::AnyRun => {
                    backtrack = Some((p + 1, t));
                    p += 1;
                    continue;
                }
                LikeToken::AnyOne => {
                    p += 1;
                    t += 1;
                    continue;
                }
                LikeToken::Literal(c) if c == text[t] => {
                    p += 1;
                    t += 1;
                    continue;
                }
                LikeToken::Literal(_) => {}
            }
        }

        match backtrack {
            Some((after_run, covered)) => {
                p = after_run;
                t = covered + 1;
                backtrack = Some((after_run, covered + 1));
            }
            None => return false,
        }
    }

    tokens[p..].iter().all(|token| *token == LikeToken::AnyRun)
}
