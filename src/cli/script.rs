//! Interaction script parser
//!
//! One command per line. Blank lines and lines starting with `#` are
//! skipped. Text arguments run to the end of the line; `\n` inside them
//! stands for a line break.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::events::{ClipboardEventKind, Modifier};

/// Script parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' needs <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{command}': invalid <{argument}> '{value}'")]
    InvalidArgument {
        command: &'static str,
        argument: &'static str,
        value: String,
    },

    #[error("'{command}': unexpected '{value}'")]
    UnexpectedArgument { command: &'static str, value: String },
}

/// A parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Insert { canvas: String, index: usize, text: String },
    Remove { canvas: String, index: usize },
    Focus { canvas: String },
    Blur,
    Select { canvas: String, indices: Vec<usize> },
    /// Platform clipboard event
    Clipboard {
        kind: ClipboardEventKind,
        trusted: bool,
        data: Option<String>,
    },
    /// Clipboard operation triggered from in-app UI
    MenuClipboard { kind: ClipboardEventKind },
    ContextMenu {
        x: f64,
        y: f64,
        modifier: Option<Modifier>,
        on_menu: bool,
    },
    LongPress { x: f64, y: f64, held_ms: u64 },
    MouseUp { on_menu: bool },
    Choose { action: String },
    DragStart { element: String },
    Drop { canvas: String, text: String },
    ClipboardChange { text: String },
    Sync,
    Show { canvas: String },
    State,
}

impl ScriptCommand {
    /// Name used when reporting the command's result
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::Remove { .. } => "remove",
            Self::Focus { .. } => "focus",
            Self::Blur => "blur",
            Self::Select { .. } => "select",
            Self::Clipboard { kind, .. } => kind.as_str(),
            Self::MenuClipboard { kind } => match kind {
                ClipboardEventKind::Cut => "menu-cut",
                ClipboardEventKind::Copy => "menu-copy",
                ClipboardEventKind::Paste => "menu-paste",
            },
            Self::ContextMenu { .. } => "contextmenu",
            Self::LongPress { .. } => "longpress",
            Self::MouseUp { .. } => "mouseup",
            Self::Choose { .. } => "choose",
            Self::DragStart { .. } => "dragstart",
            Self::Drop { .. } => "drop",
            Self::ClipboardChange { .. } => "clipboardchange",
            Self::Sync => "sync",
            Self::Show { .. } => "show",
            Self::State => "state",
        }
    }
}

/// Parse one line. Blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = split_word(line);
    let command = match word {
        "insert" => {
            let (canvas, rest) = required(rest, "insert", "canvas")?;
            let (index, rest) = required(rest, "insert", "index")?;
            ScriptCommand::Insert {
                canvas: canvas.to_string(),
                index: number(index, "insert", "index")?,
                text: text(rest, "insert")?,
            }
        }
        "remove" => {
            let (canvas, rest) = required(rest, "remove", "canvas")?;
            let (index, rest) = required(rest, "remove", "index")?;
            no_more(rest, "remove")?;
            ScriptCommand::Remove {
                canvas: canvas.to_string(),
                index: number(index, "remove", "index")?,
            }
        }
        "focus" => {
            let (canvas, rest) = required(rest, "focus", "canvas")?;
            no_more(rest, "focus")?;
            ScriptCommand::Focus {
                canvas: canvas.to_string(),
            }
        }
        "blur" => {
            no_more(rest, "blur")?;
            ScriptCommand::Blur
        }
        "select" => {
            let (canvas, rest) = required(rest, "select", "canvas")?;
            let indices = rest
                .split_whitespace()
                .map(|value| number(value, "select", "index"))
                .collect::<Result<Vec<usize>, _>>()?;
            ScriptCommand::Select {
                canvas: canvas.to_string(),
                indices,
            }
        }
        "copy" => clipboard(ClipboardEventKind::Copy, "copy", rest)?,
        "cut" => clipboard(ClipboardEventKind::Cut, "cut", rest)?,
        "paste" => clipboard(ClipboardEventKind::Paste, "paste", rest)?,
        "menu-copy" | "menu-cut" | "menu-paste" => {
            let kind = match word {
                "menu-copy" => ClipboardEventKind::Copy,
                "menu-cut" => ClipboardEventKind::Cut,
                _ => ClipboardEventKind::Paste,
            };
            let command = ScriptCommand::MenuClipboard { kind };
            no_more(rest, command.name())?;
            command
        }
        "contextmenu" => {
            let (x, rest) = required(rest, "contextmenu", "x")?;
            let (y, mut rest) = required(rest, "contextmenu", "y")?;
            let mut modifier = None;
            let mut on_menu = false;
            loop {
                let (word, tail) = split_word(rest);
                match word {
                    "" => break,
                    "on-menu" => on_menu = true,
                    other => {
                        modifier = Some(Modifier::from_str(other).map_err(|_| {
                            ScriptError::InvalidArgument {
                                command: "contextmenu",
                                argument: "modifier",
                                value: other.to_string(),
                            }
                        })?);
                    }
                }
                rest = tail;
            }
            ScriptCommand::ContextMenu {
                x: number(x, "contextmenu", "x")?,
                y: number(y, "contextmenu", "y")?,
                modifier,
                on_menu,
            }
        }
        "longpress" => {
            let (x, rest) = required(rest, "longpress", "x")?;
            let (y, rest) = required(rest, "longpress", "y")?;
            let (held, rest) = required(rest, "longpress", "ms")?;
            no_more(rest, "longpress")?;
            ScriptCommand::LongPress {
                x: number(x, "longpress", "x")?,
                y: number(y, "longpress", "y")?,
                held_ms: number(held, "longpress", "ms")?,
            }
        }
        "mouseup" => match rest {
            "" => ScriptCommand::MouseUp { on_menu: false },
            "on-menu" => ScriptCommand::MouseUp { on_menu: true },
            other => {
                return Err(ScriptError::UnexpectedArgument {
                    command: "mouseup",
                    value: other.to_string(),
                })
            }
        },
        "choose" => ScriptCommand::Choose {
            action: text(rest, "choose")?,
        },
        "dragstart" => {
            let (element, rest) = required(rest, "dragstart", "element")?;
            no_more(rest, "dragstart")?;
            ScriptCommand::DragStart {
                element: element.to_string(),
            }
        }
        "drop" => {
            let (canvas, rest) = required(rest, "drop", "canvas")?;
            ScriptCommand::Drop {
                canvas: canvas.to_string(),
                text: text(rest, "drop")?,
            }
        }
        "clipboardchange" => ScriptCommand::ClipboardChange {
            text: text(rest, "clipboardchange")?,
        },
        "sync" => {
            no_more(rest, "sync")?;
            ScriptCommand::Sync
        }
        "show" => {
            let (canvas, rest) = required(rest, "show", "canvas")?;
            no_more(rest, "show")?;
            ScriptCommand::Show {
                canvas: canvas.to_string(),
            }
        }
        "state" => {
            no_more(rest, "state")?;
            ScriptCommand::State
        }
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// `copy|cut|paste [untrusted] [data <text>]`
fn clipboard(
    kind: ClipboardEventKind,
    command: &'static str,
    rest: &str,
) -> Result<ScriptCommand, ScriptError> {
    let mut trusted = true;
    let mut data = None;
    let mut rest = rest;

    loop {
        let (word, tail) = split_word(rest);
        match word {
            "" => break,
            "untrusted" => trusted = false,
            "data" => {
                data = Some(text(tail, command)?);
                break;
            }
            other => {
                return Err(ScriptError::UnexpectedArgument {
                    command,
                    value: other.to_string(),
                })
            }
        }
        rest = tail;
    }

    Ok(ScriptCommand::Clipboard {
        kind,
        trusted,
        data,
    })
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], input[end..].trim_start()),
        None => (input, ""),
    }
}

fn required<'a>(
    input: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<(&'a str, &'a str), ScriptError> {
    match split_word(input) {
        ("", _) => Err(ScriptError::MissingArgument { command, argument }),
        found => Ok(found),
    }
}

fn no_more(input: &str, command: &'static str) -> Result<(), ScriptError> {
    let input = input.trim();
    if input.is_empty() {
        Ok(())
    } else {
        Err(ScriptError::UnexpectedArgument {
            command,
            value: input.to_string(),
        })
    }
}

fn number<T: FromStr>(
    value: &str,
    command: &'static str,
    argument: &'static str,
) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidArgument {
        command,
        argument,
        value: value.to_string(),
    })
}

fn text(input: &str, command: &'static str) -> Result<String, ScriptError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ScriptError::MissingArgument {
            command,
            argument: "text",
        });
    }
    Ok(input.replace("\\n", "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ScriptCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# setup").unwrap(), None);
    }

    #[test]
    fn insert_keeps_spaces_in_text() {
        assert_eq!(
            parse("insert left 2 hello  world"),
            ScriptCommand::Insert {
                canvas: "left".into(),
                index: 2,
                text: "hello  world".into()
            }
        );
    }

    #[test]
    fn select_reads_every_index() {
        assert_eq!(
            parse("select right 0 2 3"),
            ScriptCommand::Select {
                canvas: "right".into(),
                indices: vec![0, 2, 3]
            }
        );
    }

    #[test]
    fn clipboard_flags_and_data() {
        assert_eq!(
            parse("paste untrusted data one\\ntwo"),
            ScriptCommand::Clipboard {
                kind: ClipboardEventKind::Paste,
                trusted: false,
                data: Some("one\ntwo".into())
            }
        );
        assert_eq!(
            parse("copy"),
            ScriptCommand::Clipboard {
                kind: ClipboardEventKind::Copy,
                trusted: true,
                data: None
            }
        );
    }

    #[test]
    fn contextmenu_with_modifier_and_target() {
        assert_eq!(
            parse("contextmenu 120 80 ctrl on-menu"),
            ScriptCommand::ContextMenu {
                x: 120.0,
                y: 80.0,
                modifier: Some(Modifier::Ctrl),
                on_menu: true
            }
        );
    }

    #[test]
    fn contextmenu_rejects_unknown_modifier() {
        let err = parse_line("contextmenu 1 2 hyper").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidArgument { argument: "modifier", .. }));
    }

    #[test]
    fn menu_clipboard_commands() {
        assert_eq!(
            parse("menu-cut"),
            ScriptCommand::MenuClipboard {
                kind: ClipboardEventKind::Cut
            }
        );
        assert_eq!(parse("menu-paste").name(), "menu-paste");
    }

    #[test]
    fn missing_and_invalid_arguments() {
        assert_eq!(
            parse_line("longpress 1 2").unwrap_err(),
            ScriptError::MissingArgument {
                command: "longpress",
                argument: "ms"
            }
        );
        assert!(matches!(
            parse_line("remove left two").unwrap_err(),
            ScriptError::InvalidArgument { argument: "index", .. }
        ));
        assert!(matches!(
            parse_line("blur now").unwrap_err(),
            ScriptError::UnexpectedArgument { command: "blur", .. }
        ));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse_line("undo").unwrap_err(),
            ScriptError::UnknownCommand("undo".into())
        );
    }
}
