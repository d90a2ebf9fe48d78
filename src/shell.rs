//! A tiny line-oriented command language for poking at a `BoundedStack<i64>`.

use std::fmt::{self, Display};
use std::io::{self, Write};

use crossterm::{
    style::{Print, Stylize},
    QueueableCommand,
};
use thiserror::Error;

use crate::error::{Result, StackError};
use crate::stack::BoundedStack;

pub const HELP: &str = "\
commands:
  push <int>      push a value
  pop             remove and print the top value
  peek            print the top value
  size            print the number of values
  empty           is the stack empty?
  full            is the stack full?
  contains <int>  is the value anywhere in the stack?
  show            print the stack, bottom to top
  help            print this message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Push(i64),
    Pop,
    Peek,
    Size,
    Empty,
    Full,
    Contains(i64),
    Show,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),
    #[error("`{0}` needs an integer argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not an integer")]
    BadInteger(String),
    #[error("unexpected argument `{0}`")]
    TrailingArgument(String),
}

impl Command {
    /// `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let keyword = match words.next() {
            None => return Ok(None),
            Some(word) if word.starts_with('#') => return Ok(None),
            Some(word) => word,
        };

        let cmd = match keyword.to_ascii_lowercase().as_str() {
            "push" => Self::Push(int_arg("push", words.next())?),
            "pop" => Self::Pop,
            "peek" => Self::Peek,
            "size" => Self::Size,
            "empty" => Self::Empty,
            "full" => Self::Full,
            "contains" => Self::Contains(int_arg("contains", words.next())?),
            "show" => Self::Show,
            "help" => Self::Help,
            _ => return Err(ParseError::UnknownCommand(keyword.to_string())),
        };

        if let Some(extra) = words.next() {
            return Err(ParseError::TrailingArgument(extra.to_string()));
        }

        Ok(Some(cmd))
    }
}

fn int_arg(keyword: &'static str, word: Option<&str>) -> Result<i64, ParseError> {
    let word = word.ok_or(ParseError::MissingArgument(keyword))?;
    word.parse()
        .map_err(|_| ParseError::BadInteger(word.to_string()))
}

/// What a successfully executed command has to say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Ok,
    Value(i64),
    Count(usize),
    Flag(bool),
    Text(String),
}

impl Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Value(v) => write!(f, "{v}"),
            Self::Count(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// The result of feeding one input line to a [`Shell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(Reply),
    Rejected(StackError),
    Invalid(ParseError),
}

impl Outcome {
    /// Write one line for this outcome. Errors are coloured only when `color`
    /// is set, so piped output stays free of escape codes.
    pub fn write_to(&self, out: &mut impl Write, color: bool) -> io::Result<()> {
        match self {
            Self::Reply(reply) => {
                out.queue(Print(format!("{reply}\n")))?;
            }
            Self::Rejected(e) => {
                let line = format!("error: {e}\n");
                if color {
                    out.queue(Print(line.red()))?;
                } else {
                    out.queue(Print(line))?;
                }
            }
            Self::Invalid(e) => {
                let line = format!("{e}\n");
                if color {
                    out.queue(Print(line.yellow()))?;
                } else {
                    out.queue(Print(line))?;
                }
            }
        }
        out.flush()
    }
}

/// Owns the stack a session operates on.
#[derive(Debug)]
pub struct Shell {
    stack: BoundedStack<i64>,
}

impl Shell {
    pub fn new(limit: usize) -> Self {
        Self {
            stack: BoundedStack::new(limit),
        }
    }

    pub fn stack(&self) -> &BoundedStack<i64> {
        &self.stack
    }

    /// `None` for lines with nothing to run.
    pub fn handle_line(&mut self, line: &str) -> Option<Outcome> {
        let outcome = match Command::parse(line) {
            Ok(None) => return None,
            Ok(Some(cmd)) => match self.execute(cmd) {
                Ok(reply) => Outcome::Reply(reply),
                Err(e) => Outcome::Rejected(e),
            },
            Err(e) => Outcome::Invalid(e),
        };
        Some(outcome)
    }

    /// Stack errors are returned to the caller; the session can carry on.
    pub fn execute(&mut self, cmd: Command) -> Result<Reply> {
        log::debug!("executing {cmd:?}");

        let reply = match cmd {
            Command::Push(v) => {
                self.stack.push(v)?;
                Reply::Ok
            }
            Command::Pop => Reply::Value(self.stack.pop()?),
            Command::Peek => Reply::Value(*self.stack.peek()?),
            Command::Size => Reply::Count(self.stack.size()),
            Command::Empty => Reply::Flag(self.stack.is_empty()),
            Command::Full => Reply::Flag(self.stack.is_full()),
            Command::Contains(v) => Reply::Flag(self.stack.contains(&v)),
            Command::Show => Reply::Text(self.stack.to_string()),
            Command::Help => Reply::Text(HELP.to_string()),
        };

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(shell: &mut Shell, line: &str) -> Result<Reply> {
        let cmd = Command::parse(line).unwrap().unwrap();
        shell.execute(cmd)
    }

    fn render(outcome: &Outcome, color: bool) -> String {
        let mut out = Vec::new();
        outcome.write_to(&mut out, color).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("push 5"), Ok(Some(Command::Push(5))));
        assert_eq!(Command::parse("  PUSH  -12 "), Ok(Some(Command::Push(-12))));
        assert_eq!(Command::parse("contains 3"), Ok(Some(Command::Contains(3))));
        assert_eq!(Command::parse("Pop"), Ok(Some(Command::Pop)));
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse(" \t "), Ok(None));
        assert_eq!(Command::parse("   # a comment"), Ok(None));
        assert_eq!(Command::parse("#push 1"), Ok(None));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Command::parse("shove 1"),
            Err(ParseError::UnknownCommand("shove".into()))
        );
        assert_eq!(
            Command::parse("push"),
            Err(ParseError::MissingArgument("push"))
        );
        assert_eq!(
            Command::parse("contains x"),
            Err(ParseError::BadInteger("x".into()))
        );
        assert_eq!(
            Command::parse("pop now"),
            Err(ParseError::TrailingArgument("now".into()))
        );
    }

    #[test]
    fn session() {
        let mut sh = Shell::new(2);
        assert_eq!(run(&mut sh, "empty"), Ok(Reply::Flag(true)));
        assert_eq!(run(&mut sh, "pop"), Err(StackError::Underflow));
        assert_eq!(run(&mut sh, "push 4"), Ok(Reply::Ok));
        assert_eq!(run(&mut sh, "push 9"), Ok(Reply::Ok));
        assert_eq!(
            run(&mut sh, "push 1"),
            Err(StackError::Overflow { limit: 2 })
        );
        assert_eq!(run(&mut sh, "full"), Ok(Reply::Flag(true)));
        assert_eq!(run(&mut sh, "show"), Ok(Reply::Text("[4,9]".into())));
        assert_eq!(run(&mut sh, "contains 4"), Ok(Reply::Flag(true)));
        assert_eq!(run(&mut sh, "peek"), Ok(Reply::Value(9)));
        assert_eq!(run(&mut sh, "pop"), Ok(Reply::Value(9)));
        assert_eq!(run(&mut sh, "size"), Ok(Reply::Count(1)));
    }

    #[test]
    fn handle_lines() {
        let mut sh = Shell::new(1);
        assert_eq!(sh.handle_line("   "), None);
        assert_eq!(sh.handle_line("# nothing"), None);
        assert_eq!(sh.handle_line("push 3"), Some(Outcome::Reply(Reply::Ok)));
        assert_eq!(
            sh.handle_line("push 4"),
            Some(Outcome::Rejected(StackError::Overflow { limit: 1 }))
        );
        assert_eq!(
            sh.handle_line("push"),
            Some(Outcome::Invalid(ParseError::MissingArgument("push")))
        );
        assert_eq!(sh.stack().to_string(), "[3]");
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let rejected = Outcome::Rejected(StackError::Underflow);
        assert_eq!(render(&rejected, false), "error: stack underflow: stack is empty\n");

        let invalid = Outcome::Invalid(ParseError::BadInteger("q".into()));
        assert_eq!(render(&invalid, false), "`q` is not an integer\n");

        assert_eq!(render(&Outcome::Reply(Reply::Value(-3)), false), "-3\n");
        assert!(!render(&rejected, false).contains('\x1b'));
    }

    #[test]
    fn colored_output_keeps_message() {
        let rendered = render(&Outcome::Rejected(StackError::Underflow), true);
        assert!(rendered.contains("error: stack underflow: stack is empty"));
    }

    #[test]
    fn reply_display() {
        assert_eq!(Reply::Ok.to_string(), "ok");
        assert_eq!(Reply::Value(-3).to_string(), "-3");
        assert_eq!(Reply::Flag(false).to_string(), "false");
    }
}
