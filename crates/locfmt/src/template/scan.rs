//! Single-pass token scanner.
//!
//! Walks a value left to right, trying the token grammar at every character
//! that can open a token. Text that does not form a complete token is kept
//! as a literal, so scanning never fails.

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, separated_pair, terminated};
use winnow::prelude::*;
use winnow::token::{one_of, take_till, take_while};

use super::ast::{Case, NameToken, Number, PREFIX_CHARS, PluralityToken, Segment};

/// Split text into literal runs and name tokens.
pub fn scan_names(text: &str) -> Vec<Segment<'_, NameToken>> {
    scan(text, name_token, |c| c == '{' || PREFIX_CHARS.contains(&c))
}

/// Split text into literal runs and plurality tokens.
pub fn scan_plurality(text: &str) -> Vec<Segment<'_, PluralityToken>> {
    scan(text, plurality_token, |c| c == '{')
}

fn scan<'a, T>(
    text: &'a str,
    mut token: impl FnMut(&mut &'a str) -> ModalResult<T>,
    opens_token: impl Fn(char) -> bool,
) -> Vec<Segment<'a, T>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        let matched = if opens_token(c) {
            try_token(&mut token, rest)
        } else {
            None
        };
        match matched {
            Some((parsed, after)) => {
                let offset = text.len() - rest.len();
                if literal_start < offset {
                    segments.push(Segment::Literal(&text[literal_start..offset]));
                }
                segments.push(Segment::Token(parsed));
                rest = after;
                literal_start = text.len() - rest.len();
            }
            None => rest = &rest[c.len_utf8()..],
        }
    }

    if literal_start < text.len() {
        segments.push(Segment::Literal(&text[literal_start..]));
    }
    segments
}

/// Run `token` on a copy of `input`, returning the token and what follows it.
fn try_token<'a, T>(
    token: &mut impl FnMut(&mut &'a str) -> ModalResult<T>,
    input: &'a str,
) -> Option<(T, &'a str)> {
    let mut attempt = input;
    token(&mut attempt).ok().map(|parsed| (parsed, attempt))
}

/// Parse `[prefix]{namespace.key}`, also accepting `{prefix namespace.key}`.
fn name_token(input: &mut &str) -> ModalResult<NameToken> {
    let outer = opt(one_of(PREFIX_CHARS)).parse_next(input)?;
    '{'.parse_next(input)?;
    let prefix = match outer {
        Some(prefix) => Some(prefix),
        None => opt(one_of(PREFIX_CHARS)).parse_next(input)?,
    };
    let (case, number) = terminated(namespace, '.').parse_next(input)?;
    let key = terminated(take_while(1.., is_key_char), '}').parse_next(input)?;
    Ok(NameToken {
        prefix,
        case,
        number,
        key: key.to_string(),
    })
}

/// Parse a namespace word. The `_multiple` forms come first so the shorter
/// words don't claim their prefix.
fn namespace(input: &mut &str) -> ModalResult<(Case, Number)> {
    alt((
        "name_multiple".value((Case::Lower, Number::Plural)),
        "Name_multiple".value((Case::AsStored, Number::Plural)),
        "NAME_MULTIPLE".value((Case::Upper, Number::Plural)),
        "name".value((Case::Lower, Number::Singular)),
        "Name".value((Case::AsStored, Number::Singular)),
        "NAME".value((Case::Upper, Number::Singular)),
    ))
    .parse_next(input)
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Parse `{index:options}`. The option body runs to the first `}` and must
/// not be empty.
fn plurality_token(input: &mut &str) -> ModalResult<PluralityToken> {
    let (index, body) =
        delimited('{', separated_pair(digit1, ':', take_till(1.., '}')), '}').parse_next(input)?;
    Ok(PluralityToken {
        index: index.parse().unwrap_or(u64::MAX),
        options: body.split('|').map(str::to_string).collect(),
    })
}
