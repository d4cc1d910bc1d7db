//! Endpoint validation
//!
//! Guarantees an endpoint won't blow up when served: it must have a name and a
//! handler, and every path must be a POSIX extended regular expression.

use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult, PatternError};
use regex::Regex;
use regex_syntax::ast::{
    self, parse::Parser, Assertion, AssertionKind, Ast, ClassSetItem, GroupKind,
    RepetitionKind, RepetitionRange, Visitor,
};

/// Largest count allowed in a `{m,n}` bound
const MAX_REPEAT: u32 = 1000;

/// Validate an endpoint.
///
/// Checks run in order (presence, name, paths, handler) and stop at the first failure.
pub fn validate(endpoint: Option<&Endpoint>) -> ApiResult<()> {
    validate_endpoint(endpoint.ok_or(ApiError::MissingEndpoint)?)
}

pub(crate) fn validate_endpoint(endpoint: &Endpoint) -> ApiResult<()> {
    if endpoint.name.is_empty() {
        return Err(ApiError::MissingName);
    }

    for pattern in &endpoint.path {
        compile_posix(pattern).map_err(|source| ApiError::MalformedPath {
            pattern: pattern.clone(),
            source,
        })?;
    }

    if endpoint.handler.is_empty() {
        return Err(ApiError::MissingHandler);
    }

    Ok(())
}

/// Compile a pattern, rejecting syntax outside the POSIX ERE dialect
fn compile_posix(pattern: &str) -> Result<Regex, PatternError> {
    let pattern = escape_literal_braces(pattern);
    let regex = Regex::new(&pattern)?;

    let ast = Parser::new()
        .parse(&pattern)
        .map_err(|e| PatternError::NotPosix(e.to_string()))?;
    ast::visit(&ast, PosixDialect)?;

    Ok(regex)
}

/// Escape every `{` that does not open a `{m}`, `{m,}` or `{m,n}` bound.
///
/// POSIX treats such a brace as a literal character, so `/items/{id}` is a
/// plain path. Braces belonging to an escape (`\{`, `\x{41}`, `\p{L}`) are kept.
fn escape_literal_braces(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        match c {
            '\\' => {
                out.push(c);
                let Some(next) = rest.chars().next() else {
                    break;
                };
                out.push(next);
                rest = &rest[next.len_utf8()..];
                if matches!(next, 'x' | 'p' | 'P') && rest.starts_with('{') {
                    let end = rest.find('}').map_or(rest.len(), |i| i + 1);
                    out.push_str(&rest[..end]);
                    rest = &rest[end..];
                }
            }
            '{' if !starts_repeat_bound(rest) => out.push_str("\\{"),
            _ => out.push(c),
        }
    }

    out
}

/// Whether `rest` (the text after a `{`) is `m}`, `m,}` or `m,n}`
fn starts_repeat_bound(rest: &str) -> bool {
    fn number(s: &str) -> Option<&str> {
        let len = s.bytes().take_while(u8::is_ascii_digit).count();
        // Leading zeros make the brace literal
        if len == 0 || (len > 1 && s.starts_with('0')) {
            return None;
        }
        Some(&s[len..])
    }

    let Some(rest) = number(rest) else {
        return false;
    };
    if rest.starts_with('}') {
        return true;
    }
    let Some(rest) = rest.strip_prefix(',') else {
        return false;
    };
    if rest.starts_with('}') {
        return true;
    }
    number(rest).is_some_and(|r| r.starts_with('}'))
}

/// Rejects Perl and Unicode extensions the ERE grammar has no room for
struct PosixDialect;

impl Visitor for PosixDialect {
    type Output = ();
    type Err = PatternError;

    fn finish(self) -> Result<(), PatternError> {
        Ok(())
    }

    fn visit_pre(&mut self, ast: &Ast) -> Result<(), PatternError> {
        match ast {
            Ast::Flags(_) => not_posix("inline flags"),
            Ast::ClassPerl(_) => not_posix("Perl character class"),
            Ast::ClassUnicode(_) => not_posix("Unicode character class"),
            Ast::Repetition(rep) if !rep.greedy => not_posix("non-greedy repetition"),
            Ast::Repetition(rep) => match &rep.op.kind {
                RepetitionKind::Range(range) => check_range(range),
                _ => Ok(()),
            },
            Ast::Group(group) => match &group.kind {
                GroupKind::CaptureIndex(_) => Ok(()),
                GroupKind::CaptureName { .. } => not_posix("named group"),
                GroupKind::NonCapturing(_) => not_posix("non-capturing group"),
            },
            Ast::Assertion(assertion) => check_assertion(assertion),
            _ => Ok(()),
        }
    }

    fn visit_class_set_item_pre(&mut self, item: &ClassSetItem) -> Result<(), PatternError> {
        match item {
            ClassSetItem::Perl(_) => not_posix("Perl character class"),
            ClassSetItem::Unicode(_) => not_posix("Unicode character class"),
            _ => Ok(()),
        }
    }
}

fn check_assertion(assertion: &Assertion) -> Result<(), PatternError> {
    match assertion.kind {
        AssertionKind::StartLine | AssertionKind::EndLine => Ok(()),
        _ => not_posix("assertion other than ^ or $"),
    }
}

fn check_range(range: &RepetitionRange) -> Result<(), PatternError> {
    let max = match *range {
        RepetitionRange::Exactly(n) | RepetitionRange::AtLeast(n) => n,
        RepetitionRange::Bounded(m, n) => m.max(n),
    };
    if max > MAX_REPEAT {
        return Err(PatternError::NotPosix(format!(
            "repeat count {} exceeds {}",
            max, MAX_REPEAT
        )));
    }
    Ok(())
}

fn not_posix(what: &str) -> Result<(), PatternError> {
    Err(PatternError::NotPosix(what.to_string()))
}
