#![forbid(unsafe_code)]

//! Demo session: one edit field driven by input lines.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use autoedit_text::{
    ChangeObserver, DiagnosticTags, TextContainer, TextError, TracingSink, WeakTextContainer,
};
use autoedit_widgets::{DisplayMetrics, DrawList, EditField, FieldStyle};

use crate::cli::Opts;

/// Tag for the field text read back through the container.
pub const CONTENT_TAG: &str = "field.content";
/// Tag for the text handed to the observer callback.
pub const CALLBACK_TAG: &str = "field.callback";

/// Errors from running the demo.
#[derive(Debug)]
pub enum AppError {
    /// The style file could not be read.
    StyleRead { path: PathBuf, source: io::Error },
    /// The style file is not valid style JSON.
    StyleParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A text mutation was rejected.
    Text(TextError),
    /// Reading input or writing output failed.
    Io(io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StyleRead { path, source } => {
                write!(f, "cannot read style {}: {source}", path.display())
            }
            Self::StyleParse { path, source } => {
                write!(f, "invalid style {}: {source}", path.display())
            }
            Self::Text(err) => write!(f, "text error: {err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::StyleRead { source, .. } => Some(source),
            Self::StyleParse { source, .. } => Some(source),
            Self::Text(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<TextError> for AppError {
    fn from(err: TextError) -> Self {
        Self::Text(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Logs the field text after every change, once as read back from the
/// container and once as passed to the callback.
///
/// Holds a weak handle so the logger does not keep its own container alive.
pub struct ContentLogger {
    text: WeakTextContainer,
}

impl ContentLogger {
    #[must_use]
    pub fn new(text: &TextContainer) -> Self {
        Self {
            text: text.downgrade(),
        }
    }
}

impl ChangeObserver for ContentLogger {
    fn after_change(&mut self, content: &str) {
        if let Some(text) = self.text.upgrade() {
            let current = text.content();
            tracing::info!(tag = CONTENT_TAG, "{current}");
        }
        tracing::info!(tag = CALLBACK_TAG, "{content}");
    }
}

/// Load the field style from `opts`: the JSON style file if given, then the
/// label override.
pub fn load_style(opts: &Opts) -> Result<FieldStyle, AppError> {
    let mut style = match &opts.style_path {
        Some(path) => read_style(path)?,
        None => FieldStyle::default(),
    };
    if let Some(label) = &opts.label {
        style.left_text = Some(label.clone());
    }
    Ok(style)
}

fn read_style(path: &Path) -> Result<FieldStyle, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::StyleRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AppError::StyleParse {
        path: path.to_path_buf(),
        source,
    })
}

/// What the session should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep reading; print these lines.
    Continue(Vec<String>),
    Quit,
}

/// One edit field with a content logger attached.
#[derive(Debug)]
pub struct DemoApp {
    field: EditField,
}

impl DemoApp {
    /// Build the field, attach the logger and the diagnostic sink.
    #[must_use]
    pub fn new(style: FieldStyle, opts: &Opts) -> Self {
        let mut field = EditField::new(style, DisplayMetrics::new(opts.density));
        field.layout(opts.width, opts.height, 0.0);

        let text = field.text();
        text.subscribe(ContentLogger::new(text));
        text.set_diagnostics(
            TracingSink::new(),
            DiagnosticTags::new("field.before", "field.after"),
        );
        Self { field }
    }

    #[must_use]
    pub fn field(&self) -> &EditField {
        &self.field
    }

    /// Apply one input line: a `:command` or new field text.
    pub fn handle_line(&mut self, line: &str) -> Result<Step, AppError> {
        let Some(command) = line.strip_prefix(':') else {
            self.field.set_text(line)?;
            return Ok(Step::Continue(Vec::new()));
        };

        let output = match command.trim() {
            "quit" | "q" => return Ok(Step::Quit),
            "focus" => focus_report(self.field.set_focused(true)),
            "blur" => focus_report(self.field.set_focused(false)),
            "clear" => {
                self.field.text().clear()?;
                Vec::new()
            }
            "draw" => {
                let mut list = DrawList::new();
                self.field.draw(&mut list);
                list.commands().iter().map(ToString::to_string).collect()
            }
            other => {
                tracing::warn!(command = other, "unknown command");
                vec![format!("unknown command: :{other}")]
            }
        };
        Ok(Step::Continue(output))
    }
}

fn focus_report(redraw: bool) -> Vec<String> {
    if redraw {
        vec!["redraw".to_owned()]
    } else {
        Vec::new()
    }
}

/// Run a session until `:quit` or end of input.
pub fn run<R: BufRead, W: Write>(opts: &Opts, input: R, mut output: W) -> Result<(), AppError> {
    let style = load_style(opts)?;
    let mut app = DemoApp::new(style, opts);
    tracing::debug!(padding_left = app.field().padding().left, "demo field ready");

    for line in input.lines() {
        let line = line?;
        match app.handle_line(&line)? {
            Step::Continue(lines) => {
                for out in lines {
                    writeln!(output, "{out}")?;
                }
            }
            Step::Quit => break,
        }
    }
    output.flush()?;
    Ok(())
}
