//! # Tapescript
//!
//! A parser for terminal-recording scripts.
//!
//! A tape script is a list of directives such as "type this text", "sleep
//! this long", or "set this option". Tapescript turns the script into typed
//! [`Command`] values for a runner to play back against a terminal session,
//! and collects a [`ParseError`] for every line it could not understand.
//!
//! ## Quick start
//!
//! ```
//! use tapescript::{CommandType, parse_str};
//!
//! let script = r#"
//! ## Configure the recording
//! set fontsize 22
//! set theme "Dracula"
//!
//! type @slow echo hello
//! enter
//! sleep 1s
//! "#;
//!
//! let commands = parse_str(script).into_result()?;
//! assert_eq!(commands.len(), 5);
//! assert_eq!(commands[2].kind, CommandType::Type);
//! assert_eq!(commands[2].options, "slow");
//! # Ok::<(), tapescript::ParseErrors>(())
//! ```
//!
//! ## Script syntax
//!
//! | Line | Meaning |
//! |------|---------|
//! | `type text` | Type `text` into the terminal (text is required) |
//! | `type @tag text` | Same, with an option tag for the runner |
//! | `sleep 500ms` | Pause; the value is passed through untouched |
//! | `set <option> <value>` | Change a recording option |
//! | `enter`, `space`, `backspace` | Press a key; optional argument text |
//! | `up`, `down`, `left`, `right` | Press an arrow key; optional argument text |
//! | `# comment` | Full-line comment |
//!
//! Keywords are matched as literal prefixes in a fixed priority order and
//! only one space after the keyword is consumed; the rest of the line is kept
//! exactly as written.
//!
//! ## Diagnostics
//!
//! Parsing never stops at a bad line. Every rejected line produces one
//! [`ParseError`] carrying its 1-based line number and text; its `Display`
//! gives a ready-made report:
//!
//! ```
//! let out = tapescript::parse_str("type hello\nset badopt 1");
//! assert_eq!(out.errors[0].to_string(), "unknown options\n2 | set badopt 1");
//! ```
//!
//! ## Custom vocabularies
//!
//! The keyword order and the options accepted after `set` live in a
//! [`Vocabulary`] handed to a [`Parser`]:
//!
//! ```
//! use tapescript::{CommandType, Parser, Vocabulary};
//!
//! let vocab = Vocabulary::default().with_options(["cursorblink"])?;
//! let out = Parser::new(vocab).parse("set cursorblink false");
//! assert_eq!(out.commands[0].kind, CommandType::Set);
//! # Ok::<(), tapescript::VocabularyError>(())
//! ```

pub mod command;
pub mod error;
pub mod parser;
pub mod report;
pub mod vocabulary;

pub use command::{Command, CommandType, ParseMode};
pub use error::{ParseError, ParseErrorKind, ParseErrors, VocabularyError};
pub use parser::{ParseOutput, Parser, parse_file, parse_str};
pub use vocabulary::{DEFAULT_SET_OPTIONS, Vocabulary, VocabularyBuilder};
