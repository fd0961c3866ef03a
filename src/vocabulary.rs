//! The keyword table and recognized `set` option names a [`Parser`](crate::Parser)
//! works from.

use crate::command::CommandType;
use crate::error::VocabularyError;
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Option names accepted after `set` by the default vocabulary.
pub const DEFAULT_SET_OPTIONS: &[&str] = &[
    "fontfamily",
    "fontsize",
    "framerate",
    "height",
    "lineheight",
    "padding",
    "theme",
    "width",
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Keyword {
    text: Cow<'static, str>,
    kind: CommandType,
}

/// An ordered keyword table plus the set of option names valid after `set`.
///
/// Keywords are tried in insertion order and the first prefix match wins.
/// Construction rejects tables where an earlier keyword is a prefix of a
/// later one, since the later keyword could never be reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: Vec<Keyword>,
    set_options: BTreeSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            keywords: CommandType::ALL
                .iter()
                .map(|&kind| Keyword {
                    text: Cow::Borrowed(kind.keyword()),
                    kind,
                })
                .collect(),
            set_options: DEFAULT_SET_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    /// Start an empty vocabulary.
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    /// Return a copy of this vocabulary that also accepts `options` after `set`.
    pub fn with_options<I, S>(mut self, options: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in options {
            let name = name.into();
            validate_option(&name)?;
            self.set_options.insert(name);
        }
        Ok(self)
    }

    /// Find the first keyword, in priority order, that prefixes `line`.
    pub fn classify<'a>(&'a self, line: &str) -> Option<(&'a str, CommandType)> {
        self.keywords
            .iter()
            .find(|k| line.starts_with(&*k.text))
            .map(|k| (&*k.text, k.kind))
    }

    /// Whether `name` is accepted after `set`; exact, case-sensitive match.
    pub fn contains_option(&self, name: &str) -> bool {
        self.set_options.contains(name)
    }

    /// Keywords in match priority order.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, CommandType)> {
        self.keywords.iter().map(|k| (&*k.text, k.kind))
    }

    /// Recognized `set` option names, sorted.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.set_options.iter().map(String::as_str)
    }
}

/// Builds a [`Vocabulary`] from an explicit keyword order.
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    keywords: Vec<Keyword>,
    set_options: Vec<String>,
}

impl VocabularyBuilder {
    /// Add a command type under its canonical keyword.
    pub fn command(mut self, kind: CommandType) -> Self {
        self.keywords.push(Keyword {
            text: Cow::Borrowed(kind.keyword()),
            kind,
        });
        self
    }

    /// Add an extra spelling that parses as `kind`.
    pub fn alias(mut self, keyword: impl Into<String>, kind: CommandType) -> Self {
        self.keywords.push(Keyword {
            text: Cow::Owned(keyword.into()),
            kind,
        });
        self
    }

    /// Accept `name` after `set`.
    pub fn option(mut self, name: impl Into<String>) -> Self {
        self.set_options.push(name.into());
        self
    }

    pub fn options<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_options.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validate the table and produce the vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError`] for an empty keyword, a keyword shadowed by
    /// an earlier prefix, or an option name that could never match a token.
    pub fn build(self) -> Result<Vocabulary, VocabularyError> {
        for (i, later) in self.keywords.iter().enumerate() {
            if later.text.is_empty() {
                return Err(VocabularyError::EmptyKeyword(later.kind));
            }
            if let Some(earlier) = self.keywords[..i]
                .iter()
                .find(|earlier| later.text.starts_with(&*earlier.text))
            {
                return Err(VocabularyError::Shadowed {
                    keyword: later.text.to_string(),
                    by: earlier.text.to_string(),
                });
            }
        }
        for name in &self.set_options {
            validate_option(name)?;
        }
        Ok(Vocabulary {
            keywords: self.keywords,
            set_options: self.set_options.into_iter().collect(),
        })
    }
}

fn validate_option(name: &str) -> Result<(), VocabularyError> {
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(VocabularyError::InvalidOption(name.to_string()));
    }
    Ok(())
}
