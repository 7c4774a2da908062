//! Lexical analysis for untyped lambda calculus expressions: a parenthesis
//! balance pre-check, then a single left-to-right scan that validates every
//! character and desugars dot notation into explicit groups.

use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

/// Represents a single token of the language.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Token {
    Identifier(String),
    Lambda,
    Open,
    Close,
}

/// Display trait implementation for Token. Renders the literal token text.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => {
                return write!(f, "{}", name);
            }

            Self::Lambda => {
                return write!(f, "\\");
            }

            Self::Open => {
                return write!(f, "(");
            }

            Self::Close => {
                return write!(f, ")");
            }
        }
    }
}

/// Reasons a line may be rejected. Every `idx` is a 0-based character index
/// into the original line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum RejectionReason {
    UnmatchedClose { idx: usize },
    UnmatchedOpen { idx: usize },
    InvalidLambdaSpacing { idx: usize },
    DigitLeadingIdentifier { idx: usize },
    InvalidDotPlacement { idx: usize },
    EmptyGroup { idx: usize },
    LambdaMissingParameter { idx: usize },
    IllegalCharacter { character: char, idx: usize },
}

impl RejectionReason {
    /// The index of the character that caused the rejection.
    pub fn idx(&self) -> usize {
        match self {
            Self::UnmatchedClose { idx }
            | Self::UnmatchedOpen { idx }
            | Self::InvalidLambdaSpacing { idx }
            | Self::DigitLeadingIdentifier { idx }
            | Self::InvalidDotPlacement { idx }
            | Self::EmptyGroup { idx }
            | Self::LambdaMissingParameter { idx }
            | Self::IllegalCharacter { idx, .. } => {
                return *idx;
            }
        }
    }
}

/// Display trait implementation for RejectionReason.
impl Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedClose { idx } => {
                return write!(f, "Bracket ) at index {} is not matched with a (.", idx);
            }

            Self::UnmatchedOpen { idx } => {
                return write!(f, "Bracket ( at index {} is not matched with a ).", idx);
            }

            Self::InvalidLambdaSpacing { idx } => {
                return write!(f, "Invalid whitespace after \\ at index {}.", idx);
            }

            Self::DigitLeadingIdentifier { idx } => {
                return write!(
                    f,
                    "Error at index {}, variables cannot begin with digits.",
                    idx
                );
            }

            Self::InvalidDotPlacement { idx } => {
                return write!(
                    f,
                    "Dot at index {} must directly follow a variable name.",
                    idx
                );
            }

            Self::EmptyGroup { idx } => {
                return write!(f, "Missing expression for parenthesis at index {}.", idx);
            }

            Self::LambdaMissingParameter { idx } => {
                return write!(
                    f,
                    "Backslash at index {} is not followed by a single-letter variable name.",
                    idx
                );
            }

            Self::IllegalCharacter { character, idx } => {
                return write!(f, "Illegal character {:?} at index {}.", character, idx);
            }
        }
    }
}

// Shape of a valid variable name.
lazy_static! {
    static ref identifier_regex: Regex =
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*$").expect("Unable to compile identifier regex.");
}

/// Returns true if the name starts with an ASCII letter and contains only
/// ASCII letters and digits.
pub fn is_valid_identifier(name: &str) -> bool {
    return identifier_regex.is_match(name);
}

/// Scans the explicit parentheses of a line and checks that they nest
/// properly. Dot sugar is not considered here, so errors are reported against
/// indices of the raw line.
pub fn check_paren_balance(line: &str) -> Result<(), RejectionReason> {
    let mut unmatched_open_idxs: Vec<usize> = Vec::new();

    for (idx, character) in line.chars().enumerate() {
        match character {
            '(' => {
                unmatched_open_idxs.push(idx);
            }

            ')' => {
                if unmatched_open_idxs.pop().is_none() {
                    return Err(RejectionReason::UnmatchedClose { idx });
                }
            }

            _ => {}
        }
    }

    match unmatched_open_idxs.last() {
        Some(&idx) => return Err(RejectionReason::UnmatchedOpen { idx }),
        None => return Ok(()),
    }
}

// How a group still open during the scan was introduced.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum GroupKind {
    Explicit,
    DotSugar,
}

/// Validates a line and converts it into its token sequence.
///
/// `\x.BODY` is sugar for `\x(BODY`: the dot becomes an `Open` token, and its
/// `Close` is supplied either by the next explicit `)` or, failing that, by
/// padding at the end of the line.
pub fn validate_and_tokenize(line: &str) -> Result<Vec<Token>, RejectionReason> {
    check_paren_balance(line)?;

    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut open_groups: Vec<GroupKind> = Vec::new();
    let mut curr_idx: usize = 0;

    while curr_idx < chars.len() {
        let curr_char = chars[curr_idx];
        let next_char = chars.get(curr_idx + 1).copied();

        match curr_char {
            '\\' => match next_char {
                Some(param_char) if param_char.is_whitespace() => {
                    return Err(RejectionReason::InvalidLambdaSpacing { idx: curr_idx });
                }

                Some(param_char) if is_valid_identifier(param_char.encode_utf8(&mut [0; 4])) => {
                    tokens.push(Token::Lambda);
                    tokens.push(Token::Identifier(String::from(param_char)));
                    curr_idx += 2;
                }

                _ => {
                    return Err(RejectionReason::LambdaMissingParameter { idx: curr_idx });
                }
            },

            _ if curr_char.is_whitespace() => {
                curr_idx += 1;
            }

            _ if curr_char.is_ascii_digit() => {
                return Err(RejectionReason::DigitLeadingIdentifier { idx: curr_idx });
            }

            '.' => {
                let follows_identifier =
                    curr_idx > 0 && chars[curr_idx - 1].is_ascii_alphanumeric();

                if !follows_identifier {
                    return Err(RejectionReason::InvalidDotPlacement { idx: curr_idx });
                }

                tokens.push(Token::Open);
                open_groups.push(GroupKind::DotSugar);
                curr_idx += 1;
            }

            '(' => {
                if next_char == Some(')') {
                    return Err(RejectionReason::EmptyGroup { idx: curr_idx });
                }

                tokens.push(Token::Open);
                open_groups.push(GroupKind::Explicit);
                curr_idx += 1;
            }

            ')' => {
                // Closes the innermost group, whichever way it was opened.
                tokens.push(Token::Close);
                open_groups.pop();
                curr_idx += 1;
            }

            _ if curr_char.is_ascii_alphabetic() => {
                let start_idx = curr_idx;

                while curr_idx < chars.len() && chars[curr_idx].is_ascii_alphanumeric() {
                    curr_idx += 1;
                }

                let name: String = chars[start_idx..curr_idx].iter().collect();
                debug_assert!(is_valid_identifier(name.as_str()));

                tokens.push(Token::Identifier(name));
            }

            _ => {
                return Err(RejectionReason::IllegalCharacter {
                    character: curr_char,
                    idx: curr_idx,
                });
            }
        }
    }

    // Pad with one close per group still pending, innermost first.
    while open_groups.pop().is_some() {
        tokens.push(Token::Close);
    }

    debug_assert_eq!(
        tokens.iter().filter(|token| **token == Token::Open).count(),
        tokens.iter().filter(|token| **token == Token::Close).count()
    );

    return Ok(tokens);
}

/// Joins the literal text of each token with underscores, e.g. `\_x_(_x_)`.
pub fn token_stream_to_string(tokens: &[Token]) -> String {
    return tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<String>>()
        .join("_");
}
