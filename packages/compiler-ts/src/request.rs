use crate::compiler::{CompileError, CompileResult};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

const LOCALE_PARAM: &str = "locale";

/// A resource as requested by a host, e.g. `./messages.ftl?locale=en-US`
///
/// The locale selects one translation of a logical resource. It has no
/// effect on the inferred types; it is only re-exported as a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub path: String,
    pub locale: Option<LanguageIdentifier>,
}

impl ResourceRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: LanguageIdentifier) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Parse `path[?locale=<tag>]`
    pub fn parse(request: &str) -> CompileResult<Self> {
        let (path, query) = match request.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (request, None),
        };

        if path.is_empty() {
            return Err(CompileError::EmptyPath {
                request: request.to_string(),
            });
        }

        let mut resource = ResourceRequest::new(path);

        let Some(query) = query else {
            return Ok(resource);
        };

        if query.is_empty() {
            return Err(CompileError::MalformedQuery {
                request: request.to_string(),
                reason: "empty query".to_string(),
            });
        }

        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                return Err(CompileError::MalformedQuery {
                    request: request.to_string(),
                    reason: format!("expected key=value, found '{pair}'"),
                });
            };

            if key != LOCALE_PARAM {
                return Err(CompileError::UnknownParameter {
                    request: request.to_string(),
                    key: key.to_string(),
                });
            }

            if resource.locale.is_some() {
                return Err(CompileError::MalformedQuery {
                    request: request.to_string(),
                    reason: "locale given more than once".to_string(),
                });
            }

            if value.is_empty() {
                return Err(CompileError::MissingLocale {
                    path: path.to_string(),
                });
            }

            let locale = value
                .parse::<LanguageIdentifier>()
                .map_err(|_| CompileError::InvalidLocale {
                    path: path.to_string(),
                    tag: value.to_string(),
                })?;
            resource = resource.with_locale(locale);
        }

        Ok(resource)
    }

    /// Fail unless the request carries a locale
    pub fn require_locale(&self) -> CompileResult<&LanguageIdentifier> {
        self.locale.as_ref().ok_or_else(|| CompileError::MissingLocale {
            path: self.path.clone(),
        })
    }

    /// Last path segment, used in generated headers
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.path)
    }
}

impl FromStr for ResourceRequest {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.locale {
            Some(locale) => write!(f, "{}?{}={}", self.path, LOCALE_PARAM, locale),
            None => f.write_str(&self.path),
        }
    }
}
