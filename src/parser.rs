//! Script parser for tape scripts.
//!
//! The top-level entry points are [`parse_str`], [`parse_file`], and
//! [`Parser::parse`] for callers that bring their own [`Vocabulary`].

use crate::command::{Command, CommandType, ParseMode};
use crate::error::{ParseError, ParseErrorKind, ParseErrors};
use crate::vocabulary::Vocabulary;
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, trace};

const COMMENT_PREFIX: char = '#';
const OPTIONS_PREFIX: char = '@';

/// The result of one pass over a script.
///
/// Commands and errors are each in source order. A non-skipped line shows up
/// in exactly one of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutput {
    pub commands: Vec<Command>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// Whether every non-skipped line became a command.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Hand out the commands only if every line parsed.
    ///
    /// # Errors
    ///
    /// Returns all diagnostics when at least one line was rejected, so a
    /// runner never starts a partially defined recording.
    pub fn into_result(self) -> std::result::Result<Vec<Command>, ParseErrors> {
        if self.errors.is_empty() {
            Ok(self.commands)
        } else {
            Err(ParseErrors(self.errors))
        }
    }
}

/// Parses scripts against a fixed [`Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    vocabulary: Vocabulary,
}

impl Parser {
    /// Create a parser that matches against `vocabulary`.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The keyword table and option set this parser uses.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parse a whole script.
    ///
    /// Lines are split on `\n` only. Blank lines and lines starting with `#`
    /// are skipped; every other line yields either one command or one error,
    /// and a bad line never stops the pass.
    ///
    /// # Example
    ///
    /// ```
    /// use tapescript::{CommandType, Parser};
    ///
    /// let out = Parser::default().parse("type @speaker hello world\nfrobnicate 5");
    /// assert_eq!(out.commands[0].kind, CommandType::Type);
    /// assert_eq!(out.commands[0].options, "speaker");
    /// assert_eq!(out.errors[0].line_number, 2);
    /// ```
    pub fn parse(&self, script: &str) -> ParseOutput {
        let mut out = ParseOutput::default();
        for (i, line) in script.split('\n').enumerate() {
            let line_number = i + 1;
            if should_skip(line) {
                trace!(line_number, "skipping line");
                continue;
            }
            match self.parse_line(line) {
                Ok(command) => {
                    debug!(line_number, kind = %command.kind, "parsed command");
                    out.commands.push(command);
                }
                Err(kind) => {
                    debug!(line_number, %kind, "rejected line");
                    out.errors.push(ParseError::new(kind, line_number, line));
                }
            }
        }
        debug!(
            commands = out.commands.len(),
            errors = out.errors.len(),
            "parsed script"
        );
        out
    }

    /// Classify a single non-skipped line and extract its arguments.
    fn parse_line(&self, line: &str) -> std::result::Result<Command, ParseErrorKind> {
        let (keyword, kind) = self
            .vocabulary
            .classify(line)
            .ok_or(ParseErrorKind::UnknownCommand)?;
        let rest = &line[keyword.len()..];
        let rest = rest.strip_prefix(' ').unwrap_or(rest);
        let (options, arguments) = match kind.mode() {
            ParseMode::KeyValue => self.parse_key_value(rest)?,
            ParseMode::Generic => parse_generic(kind, rest)?,
        };
        Ok(Command::new(kind, options, arguments))
    }

    /// `set <option> <value>`
    fn parse_key_value<'a>(
        &self,
        rest: &'a str,
    ) -> std::result::Result<(&'a str, &'a str), ParseErrorKind> {
        let (option, value) = rest
            .split_once(' ')
            .ok_or(ParseErrorKind::MissingArguments)?;
        if !self.vocabulary.contains_option(option) {
            return Err(ParseErrorKind::UnknownOptions);
        }
        Ok((option, value))
    }
}

/// `<keyword> [@<option> ]<arguments>`
fn parse_generic(
    kind: CommandType,
    rest: &str,
) -> std::result::Result<(&str, &str), ParseErrorKind> {
    let Some(tagged) = rest.strip_prefix(OPTIONS_PREFIX) else {
        if kind.requires_arguments() && rest.is_empty() {
            return Err(ParseErrorKind::MissingArguments);
        }
        return Ok(("", rest));
    };
    match tagged.split_once(' ') {
        Some((option, arguments)) if !arguments.is_empty() => Ok((option, arguments)),
        _ => Err(ParseErrorKind::MissingArguments),
    }
}

fn should_skip(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX) || line.trim().is_empty()
}

/// Parse a script from a string slice with the default vocabulary.
///
/// # Example
///
/// ```
/// use tapescript::parse_str;
///
/// let out = parse_str("sleep 500ms\ntype hello world\n");
/// assert_eq!(out.commands.len(), 2);
/// assert!(out.errors.is_empty());
/// ```
pub fn parse_str(script: &str) -> ParseOutput {
    Parser::default().parse(script)
}

/// Read a script file and parse it with `parser`.
///
/// # Errors
///
/// Returns an error only if the file cannot be read; malformed lines are
/// reported through [`ParseOutput::errors`].
pub fn parse_file(parser: &Parser, path: impl AsRef<Path>) -> Result<ParseOutput> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file: {}", path.display()))?;
    Ok(parser.parse(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_error(script: &str) -> ParseError {
        let out = parse_str(script);
        assert!(out.commands.is_empty(), "got commands: {:?}", out.commands);
        assert_eq!(out.errors.len(), 1, "got errors: {:?}", out.errors);
        out.errors.into_iter().next().unwrap()
    }

    fn single_command(script: &str) -> Command {
        let out = parse_str(script);
        assert!(out.errors.is_empty(), "got errors: {:?}", out.errors);
        assert_eq!(out.commands.len(), 1);
        out.commands.into_iter().next().unwrap()
    }

    #[test]
    fn test_parse_all_commands() {
        let out = parse_str(
            "backspace 3\ndown\nenter\nleft 2\nright\nset width 1200\nsleep 1s\nspace\ntype ls\nup",
        );
        assert!(out.errors.is_empty());
        let kinds: Vec<_> = out.commands.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, CommandType::ALL);
    }

    #[test]
    fn test_set_command() {
        let cmd = single_command("set fontsize 22");
        assert_eq!(cmd, Command::new(CommandType::Set, "fontsize", "22"));
    }

    #[test]
    fn test_set_value_kept_verbatim() {
        let cmd = single_command("set fontfamily  Fira  Code ");
        assert_eq!(cmd.options, "fontfamily");
        assert_eq!(cmd.arguments, " Fira  Code ");
    }

    #[test]
    fn test_set_unknown_option() {
        let err = single_error("set badopt value");
        assert_eq!(err.kind, ParseErrorKind::UnknownOptions);
    }

    #[test]
    fn test_set_option_is_case_sensitive() {
        assert_eq!(
            single_error("set FontSize 22").kind,
            ParseErrorKind::UnknownOptions
        );
    }

    #[test]
    fn test_set_missing_value() {
        assert_eq!(
            single_error("set fontsize").kind,
            ParseErrorKind::MissingArguments
        );
        assert_eq!(single_error("set").kind, ParseErrorKind::MissingArguments);
    }

    #[test]
    fn test_options_tag() {
        let cmd = single_command("type @speaker hello world");
        assert_eq!(cmd.options, "speaker");
        assert_eq!(cmd.arguments, "hello world");
    }

    #[test]
    fn test_options_tag_without_text() {
        assert_eq!(
            single_error("type @speaker").kind,
            ParseErrorKind::MissingArguments
        );
        assert_eq!(
            single_error("sleep @fast ").kind,
            ParseErrorKind::MissingArguments
        );
    }

    #[test]
    fn test_type_requires_text() {
        assert_eq!(single_error("type").kind, ParseErrorKind::MissingArguments);
        assert_eq!(single_error("type ").kind, ParseErrorKind::MissingArguments);
    }

    #[test]
    fn test_other_commands_accept_empty() {
        let cmd = single_command("enter");
        assert_eq!(cmd, Command::new(CommandType::Enter, "", ""));
    }

    #[test]
    fn test_only_one_leading_space_stripped() {
        let cmd = single_command("type   spaced  out");
        assert_eq!(cmd.arguments, "  spaced  out");
    }

    #[test]
    fn test_keyword_is_a_prefix_test() {
        let cmd = single_command("typed");
        assert_eq!(cmd.kind, CommandType::Type);
        assert_eq!(cmd.arguments, "d");
        assert_eq!(
            single_error("xtype hello").kind,
            ParseErrorKind::UnknownCommand
        );
    }

    #[test]
    fn test_unknown_command() {
        let out = parse_str("type ok\nfrobnicate 5");
        assert_eq!(out.commands.len(), 1);
        assert_eq!(
            out.errors,
            vec![ParseError::new(
                ParseErrorKind::UnknownCommand,
                2,
                "frobnicate 5"
            )]
        );
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let out = parse_str("# type hello\n\n   \n\t\n#frobnicate\n");
        assert_eq!(out, ParseOutput::default());
    }

    #[test]
    fn test_comment_inside_script_block() {
        let script = "\n# Configure the recording\nset fontsize 22\nset theme \"Dracula\"\n\ntype @slow echo hello\nenter\nsleep 1s\n";
        let commands = parse_str(script).into_result().unwrap();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[2], Command::new(CommandType::Type, "slow", "echo hello"));
    }

    #[test]
    fn test_indented_comment_is_not_skipped() {
        assert_eq!(
            single_error("  # note").kind,
            ParseErrorKind::UnknownCommand
        );
    }

    #[test]
    fn test_line_numbers_count_skipped_lines() {
        let out = parse_str("# header\n\ntype ok\nset nope 1\n\nbogus");
        let numbers: Vec<_> = out.errors.iter().map(|e| e.line_number).collect();
        assert_eq!(numbers, vec![4, 6]);
        assert_eq!(out.errors[1].line, "bogus");
    }

    #[test]
    fn test_carriage_return_kept_in_line() {
        let cmd = single_command("type hi\r");
        assert_eq!(cmd.arguments, "hi\r");
    }

    #[test]
    fn test_errors_do_not_stop_parsing() {
        let out = parse_str("nope\ntype a\nset x y\ntype b\ntype");
        assert_eq!(out.commands.len(), 2);
        assert_eq!(out.errors.len(), 3);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(parse_str("enter").into_result().unwrap().len(), 1);
        let errs = parse_str("enter\nnope").into_result().unwrap_err();
        assert_eq!(errs.errors().len(), 1);
    }

    #[test]
    fn test_injected_vocabulary() {
        let vocab = Vocabulary::builder()
            .command(CommandType::Set)
            .alias("t", CommandType::Type)
            .option("speed")
            .build()
            .unwrap();
        let out = Parser::new(vocab).parse("t hi\nset speed 2\nset fontsize 22\ntype hi");
        assert_eq!(
            out.commands,
            vec![
                Command::new(CommandType::Type, "", "hi"),
                Command::new(CommandType::Set, "speed", "2"),
                // "type" is not in this vocabulary, so the alias "t" matches.
                Command::new(CommandType::Type, "", "ype hi"),
            ]
        );
        let kinds: Vec<_> = out.errors.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ParseErrorKind::UnknownOptions]);
    }

    #[test]
    fn test_display_reparses() {
        let script = "set theme \"Dracula\"\ntype @fast echo  hi\nsleep 2s\nenter";
        let out = parse_str(script);
        let rendered: Vec<_> = out.commands.iter().map(ToString::to_string).collect();
        assert_eq!(rendered.join("\n"), script);
        assert_eq!(parse_str(&rendered.join("\n")), out);
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.tape");
        std::fs::write(&path, "type hello\nsleep 1s\n").unwrap();
        let out = parse_file(&Parser::default(), &path).unwrap();
        assert_eq!(out.commands.len(), 2);
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(&Parser::default(), "/nonexistent/demo.tape").unwrap_err();
        assert!(err.to_string().contains("Failed to read script file"));
    }
}
