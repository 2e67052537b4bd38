//! Placeholder parsing and substitution for deployment variables.
//!
//! Descriptor strings may reference values that are only known at deploy
//! time. This module splits strings into literal and placeholder segments and
//! substitutes the placeholders a [`Resolver`] knows about.
//!
//! # Placeholder Formats
//!
//! - `${stage}` - the deployment stage
//! - `${region}` - the target region
//! - `${projectName}` - the project's name
//! - `${<name>}` - any other variable (custom or from variable files)
//!
//! # Literal Dollars
//!
//! A `$` not followed by `{` passes through unchanged, as does an unclosed
//! `${`. Placeholders the resolver has no value for are kept verbatim, so
//! substitution never fails.
//!
//! # Example
//!
//! ```
//! use slsproj_lib::placeholder::{parse, Placeholder, Segment};
//!
//! let segments = parse("${stage}-api costs $5").unwrap_or_default();
//! assert_eq!(segments, vec![
//!     Segment::Placeholder(Placeholder::Stage),
//!     Segment::Literal("-api costs $5".to_string()),
//! ]);
//! ```

/// A parsed placeholder reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
  /// `${stage}`
  Stage,

  /// `${region}`
  Region,

  /// `${projectName}`
  ProjectName,

  /// `${<name>}` - any other name
  Variable(String),
}

impl Placeholder {
  fn from_content(content: &str) -> Self {
    match content {
      "stage" => Placeholder::Stage,
      "region" => Placeholder::Region,
      "projectName" => Placeholder::ProjectName,
      other => Placeholder::Variable(other.to_string()),
    }
  }

  /// The name between the braces.
  pub fn name(&self) -> &str {
    match self {
      Placeholder::Stage => "stage",
      Placeholder::Region => "region",
      Placeholder::ProjectName => "projectName",
      Placeholder::Variable(name) => name,
    }
  }

  /// The placeholder as written, e.g. `${stage}`.
  pub fn token(&self) -> String {
    format!("${{{}}}", self.name())
  }
}

/// A segment of parsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  /// Literal text (no placeholders)
  Literal(String),

  /// A placeholder to be resolved
  Placeholder(Placeholder),
}

/// Supplies values for placeholders.
///
/// Returning `None` leaves the placeholder in place.
pub trait Resolver {
  fn resolve_stage(&self) -> Option<&str>;

  fn resolve_region(&self) -> Option<&str>;

  fn resolve_project_name(&self) -> Option<&str>;

  fn resolve_variable(&self, name: &str) -> Option<&str>;
}

/// Parse a string into literal and placeholder segments.
///
/// Returns `None` when the input contains no placeholder at all, so callers
/// can skip plain strings without allocating.
pub fn parse(input: &str) -> Option<Vec<Segment>> {
  if !input.contains("${") {
    return None;
  }

  let mut segments = Vec::new();
  let mut literal = String::new();
  let mut rest = input;

  while let Some(start) = rest.find("${") {
    let after = &rest[start + 2..];
    let Some(end) = after.find('}') else {
      // unclosed: everything from here on is literal
      break;
    };

    // a stray `${` before a real token is literal; rescan from the inner one
    if let Some(inner) = after[..end].find("${") {
      literal.push_str(&rest[..start + 2 + inner]);
      rest = &after[inner..];
      continue;
    }

    literal.push_str(&rest[..start]);
    if !literal.is_empty() {
      segments.push(Segment::Literal(std::mem::take(&mut literal)));
    }
    segments.push(Segment::Placeholder(Placeholder::from_content(&after[..end])));
    rest = &after[end + 1..];
  }

  literal.push_str(rest);
  if !literal.is_empty() {
    segments.push(Segment::Literal(literal));
  }

  Some(segments)
}

/// Substitute every known placeholder in `input`.
///
/// Unknown placeholders are kept as written.
pub fn substitute(input: &str, resolver: &impl Resolver) -> String {
  match parse(input) {
    Some(segments) => substitute_segments(&segments, resolver),
    None => input.to_string(),
  }
}

/// Substitute placeholders in pre-parsed segments.
pub fn substitute_segments(segments: &[Segment], resolver: &impl Resolver) -> String {
  let mut result = String::new();

  for segment in segments {
    match segment {
      Segment::Literal(s) => result.push_str(s),
      Segment::Placeholder(p) => {
        let value = match p {
          Placeholder::Stage => resolver.resolve_stage(),
          Placeholder::Region => resolver.resolve_region(),
          Placeholder::ProjectName => resolver.resolve_project_name(),
          Placeholder::Variable(name) => resolver.resolve_variable(name),
        };
        match value {
          Some(value) => result.push_str(value),
          None => result.push_str(&p.token()),
        }
      }
    }
  }

  result
}
