use crate::error::{ParseErrors, ParseResult};
use fluent_syntax::ast::{Entry, Resource};
use tracing::debug;

/// Parse Fluent resource text, failing if the parser had to recover from
/// any syntax error.
pub fn parse(source: &str) -> ParseResult<Resource<&str>> {
    match fluent_syntax::parser::parse(source) {
        Ok(resource) => {
            debug!(entries = resource.body.len(), "Parsed resource");
            Ok(resource)
        }
        Err((_, errors)) => Err(ParseErrors::from(errors.as_slice())),
    }
}

/// Parse Fluent resource text, keeping whatever the parser recovered.
///
/// Broken entries end up as `Entry::Junk` in the returned tree and are
/// reported alongside it.
pub fn parse_lenient(source: &str) -> (Resource<&str>, ParseErrors) {
    match fluent_syntax::parser::parse(source) {
        Ok(resource) => (resource, ParseErrors::new()),
        Err((resource, errors)) => {
            debug!(errors = errors.len(), "Recovered from syntax errors");
            (resource, ParseErrors::from(errors.as_slice()))
        }
    }
}

/// Number of message entries in a parsed resource
pub fn message_count<S>(resource: &Resource<S>) -> usize {
    resource
        .body
        .iter()
        .filter(|entry| matches!(entry, Entry::Message(_)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_resource() {
        let resource = parse("hello = Hello, { $name }!\n").unwrap();
        assert_eq!(message_count(&resource), 1);
    }

    #[test]
    fn test_parse_rejects_junk() {
        let errors = parse("hello = { $name\n").unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_parse_lenient_keeps_valid_entries() {
        let source = "\
broken = { $name
hello = Hello!
";
        let (resource, errors) = parse_lenient(source);
        assert!(!errors.is_empty());
        assert_eq!(message_count(&resource), 1);
        assert!(resource
            .body
            .iter()
            .any(|entry| matches!(entry, Entry::Junk { .. })));
    }

    #[test]
    fn test_terms_and_comments_are_not_messages() {
        let source = "\
# A comment
-brand = Firefox
about = About { -brand }
";
        let resource = parse(source).unwrap();
        assert_eq!(message_count(&resource), 1);
    }
}
