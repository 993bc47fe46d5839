//! Deterministic family rendering and the inverse parser.
//!
//! One rendered family per output line; members ordered by size, then by
//! lexicographic element tuple. The parser accepts the same syntax back
//! (whitespace-tolerant) and is used by the CLI `canon` subcommand.

use crate::error::ParseFamilyError;

use super::types::{decode, encode, Code, Family};

/// Renders a family as `{{1}, {1, 2}}`, members ordered by
/// (size ascending, then lexicographic element tuple ascending).
/// The empty family renders as `{}`.
pub fn render_family(family: &Family, n: usize) -> String {
    if family.is_empty() {
        return "{}".to_string();
    }
    let mut sets: Vec<Vec<usize>> = family.iter().map(|code| decode(code, n)).collect();
    sets.sort_by(|a, b| (a.len(), a).cmp(&(b.len(), b)));
    let rendered: Vec<String> = sets
        .iter()
        .map(|s| {
            let inner: Vec<String> = s.iter().map(|e| e.to_string()).collect();
            format!("{{{}}}", inner.join(", "))
        })
        .collect();
    format!("{{{}}}", rendered.join(", "))
}

/// Parses a family literal such as `{{1, 2}, {1, 3}}` into a [`Family`].
/// Elements are range-checked against `n`.
pub fn parse_family(input: &str, n: usize) -> Result<Family, ParseFamilyError> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or(ParseFamilyError::MissingOuterBraces)?
        .trim();
    if inner.is_empty() {
        return Ok(Family::empty());
    }

    let mut codes: Vec<Code> = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for ch in inner.chars() {
        match ch {
            '{' => {
                depth += 1;
                current.push(ch);
            }
            '}' => {
                depth = depth.checked_sub(1).ok_or(ParseFamilyError::UnbalancedBraces)?;
                current.push(ch);
                if depth == 0 {
                    codes.push(parse_set(&current, n)?);
                    current.clear();
                }
            }
            ',' | ' ' if depth == 0 => {}
            _ if depth > 0 => current.push(ch),
            _ => return Err(ParseFamilyError::MissingSetBraces(ch.to_string())),
        }
    }
    if depth != 0 || !current.is_empty() {
        return Err(ParseFamilyError::UnbalancedBraces);
    }
    Ok(Family::from_codes(codes))
}

/// Parses a single set literal such as `{1, 2, 3}` into a code.
fn parse_set(input: &str, n: usize) -> Result<Code, ParseFamilyError> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| ParseFamilyError::MissingSetBraces(trimmed.to_string()))?
        .trim();
    if inner.is_empty() {
        return Err(ParseFamilyError::EmptySet);
    }
    let mut elements = Vec::new();
    for part in inner.split(',') {
        let element: usize = part
            .trim()
            .parse()
            .map_err(|_| ParseFamilyError::InvalidElement(part.trim().to_string()))?;
        if element == 0 || element > n {
            return Err(ParseFamilyError::ElementOutOfRange { element, n });
        }
        elements.push(element);
    }
    Ok(encode(&elements))
}

/// Infers the ground-set size from a family: the highest element present.
pub fn infer_size(family: &Family) -> usize {
    family
        .iter()
        .map(|code| code.bits() as usize)
        .max()
        .unwrap_or(0)
}
