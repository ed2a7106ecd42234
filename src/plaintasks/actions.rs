//! Line actions and tag suggestions
//!
//! Text-level edits an editor offers on a todo line: completing, cancelling
//! and reopening tasks, turning a plain line into a task and opening a new
//! task below. Actions are computed from the parsed document and returned as
//! [`LineEdit`]s against the source; nothing here talks to an editor.

use crate::plaintasks::ast::{
    push_segment, Comment, Document, EmptyLine, LineEnding, Node, Segment, Status, Tag, Task,
};
use crate::plaintasks::formats::ToTodoString;
use crate::plaintasks::parser::{parse_document, scan_content};
use crate::plaintasks::settings::PlainTasksConfig;
use chrono::{DateTime, Local, TimeZone};
use std::collections::BTreeSet;
use std::fmt::{self, Write};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("line {line} is out of range (document has {lines} lines)")]
    LineOutOfRange { line: usize, lines: usize },
    #[error("invalid timestamp format '{0}'")]
    InvalidTimestampFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    MarkDone,
    MarkCancelled,
    RevertToPending,
    ConvertToTask,
    InsertTaskBelow,
}

impl ActionKind {
    pub fn title(&self) -> &'static str {
        match self {
            ActionKind::MarkDone => "Mark as Done",
            ActionKind::MarkCancelled => "Mark as Cancelled",
            ActionKind::RevertToPending => "Revert to Pending",
            ActionKind::ConvertToTask => "Convert to Todo item",
            ActionKind::InsertTaskBelow => "Insert new Todo item below",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A change to the source, addressed by zero-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// Replace the content of `line`, keeping its terminator
    Replace { line: usize, text: String },
    /// Insert `text` (terminator included) before `line`; `line` may be one
    /// past the last line to append
    Insert { line: usize, text: String },
}

impl LineEdit {
    pub fn line(&self) -> usize {
        match self {
            LineEdit::Replace { line, .. } | LineEdit::Insert { line, .. } => *line,
        }
    }

    /// Apply the edit to `source`
    pub fn apply(&self, source: &str) -> Result<String, ActionError> {
        let mut lines: Vec<String> = source.split_inclusive('\n').map(str::to_string).collect();
        let count = lines.len();
        match self {
            LineEdit::Replace { line, text } => {
                let current = lines
                    .get_mut(*line)
                    .ok_or(ActionError::LineOutOfRange { line: *line, lines: count })?;
                let ending = terminator_of(current);
                *current = format!("{}{}", text, ending);
            }
            LineEdit::Insert { line, text } => {
                if *line > count {
                    return Err(ActionError::LineOutOfRange { line: *line, lines: count });
                }
                if *line == count {
                    if let Some(last) = lines.last_mut() {
                        if !last.ends_with('\n') {
                            last.push('\n');
                        }
                    }
                }
                lines.insert(*line, text.clone());
            }
        }
        Ok(lines.concat())
    }
}

fn terminator_of(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAction {
    pub kind: ActionKind,
    pub edit: LineEdit,
}

impl LineAction {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

impl Task {
    /// This task completed at `stamp`: `✔ content @done(stamp)`
    pub fn mark_done(&self, stamp: &str, tag_name: &str) -> Task {
        self.close(Status::Done, stamp, tag_name)
    }

    /// This task cancelled at `stamp`: `✘ content @cancelled(stamp)`
    pub fn mark_cancelled(&self, stamp: &str, tag_name: &str) -> Task {
        self.close(Status::Cancelled, stamp, tag_name)
    }

    fn close(&self, status: Status, stamp: &str, tag_name: &str) -> Task {
        let mut content = trim_segments(&self.content, false, true);
        if !content.is_empty() {
            push_segment(&mut content, Segment::text(" "));
        }
        content.push(Segment::Tag(Tag::with_value(tag_name, stamp)));
        Task {
            status,
            separator: " ".to_string(),
            content,
            ..self.clone()
        }
    }

    /// This task reopened. Valued `@tag_name(...)` tags are dropped together
    /// with the whitespace before them, and the content is trimmed.
    pub fn revert_to_pending(&self, tag_name: &str) -> Task {
        let mut kept: Vec<Segment> = Vec::new();
        for segment in &self.content {
            match segment {
                Segment::Tag(tag) if tag.name == tag_name && tag.value.is_some() => {
                    if let Some(Segment::Text { text }) = kept.last_mut() {
                        let trimmed = text.trim_end().len();
                        text.truncate(trimmed);
                        if text.is_empty() {
                            kept.pop();
                        }
                    }
                }
                other => push_segment(&mut kept, other.clone()),
            }
        }
        Task {
            status: Status::Pending,
            separator: " ".to_string(),
            content: trim_segments(&kept, true, true),
            ..self.clone()
        }
    }
}

impl Comment {
    /// The comment line as a pending task, its text scanned for tags
    pub fn to_task(&self) -> Task {
        Task {
            status: Status::Pending,
            indent: self.indent.clone(),
            separator: " ".to_string(),
            content: scan_content(&self.text),
            location: self.location,
            ending: self.ending,
        }
    }
}

impl EmptyLine {
    /// An empty pending task keeping the line's whitespace as indentation
    pub fn to_task(&self) -> Task {
        Task {
            status: Status::Pending,
            indent: self.whitespace.clone(),
            separator: " ".to_string(),
            content: Vec::new(),
            location: self.location,
            ending: self.ending,
        }
    }
}

/// Trim whitespace at the start and/or end of a segment list
fn trim_segments(segments: &[Segment], start: bool, end: bool) -> Vec<Segment> {
    let mut trimmed = segments.to_vec();
    if start {
        if let Some(Segment::Text { text }) = trimmed.first_mut() {
            *text = text.trim_start().to_string();
            if text.is_empty() {
                trimmed.remove(0);
            }
        }
    }
    if end {
        if let Some(Segment::Text { text }) = trimmed.last_mut() {
            let len = text.trim_end().len();
            text.truncate(len);
            if text.is_empty() {
                trimmed.pop();
            }
        }
    }
    trimmed
}

/// A task rendered as line text, without terminator
fn line_text(task: &Task) -> String {
    task.clone().with_ending(LineEnding::None).to_todo_string()
}

/// Format `at` with a strftime `format`
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, format: &str) -> Result<String, ActionError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut stamp = String::new();
    write!(stamp, "{}", at.format(format))
        .map_err(|_| ActionError::InvalidTimestampFormat(format.to_string()))?;
    Ok(stamp)
}

/// The current local time in the configured stamp format
pub fn timestamp(config: &PlainTasksConfig) -> Result<String, ActionError> {
    format_timestamp(&Local::now(), &config.actions.timestamp_format)
}

/// Tag names to suggest: every tag used in the document plus the configured
/// common tags, sorted and deduplicated
pub fn tag_suggestions(doc: &Document, config: &PlainTasksConfig) -> Vec<String> {
    doc.tags()
        .map(|tag| tag.name.clone())
        .chain(config.tags.common.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The actions available on `line` of `source`, in display order
pub fn actions_for_line(
    source: &str,
    line: usize,
    stamp: &str,
    config: &PlainTasksConfig,
) -> Result<Vec<LineAction>, ActionError> {
    let doc = parse_document(source);
    let node = doc.items.get(line).ok_or(ActionError::LineOutOfRange {
        line,
        lines: doc.len(),
    })?;
    let tags = &config.actions;
    let replace = |kind: ActionKind, task: Task| LineAction {
        kind,
        edit: LineEdit::Replace {
            line,
            text: line_text(&task),
        },
    };

    let mut actions = Vec::new();
    match node {
        Node::Task(task) => match task.status {
            Status::Pending => {
                actions.push(replace(
                    ActionKind::MarkDone,
                    task.mark_done(stamp, &tags.done_tag),
                ));
                actions.push(replace(
                    ActionKind::MarkCancelled,
                    task.mark_cancelled(stamp, &tags.cancelled_tag),
                ));
            }
            Status::Done => actions.push(replace(
                ActionKind::RevertToPending,
                task.revert_to_pending(&tags.done_tag),
            )),
            Status::Cancelled => actions.push(replace(
                ActionKind::RevertToPending,
                task.revert_to_pending(&tags.cancelled_tag),
            )),
        },
        // A line ending in `:` reads as a project header even when it does
        // not parse as one
        Node::Comment(comment) if !comment.text.trim_end().ends_with(':') => {
            actions.push(replace(ActionKind::ConvertToTask, comment.to_task()))
        }
        Node::Comment(_) => {}
        Node::EmptyLine(empty) => actions.push(replace(ActionKind::ConvertToTask, empty.to_task())),
        Node::Project(_) => {}
    }

    let below = Task::new(Status::Pending, Vec::new()).with_indent(node.indent());
    actions.push(LineAction {
        kind: ActionKind::InsertTaskBelow,
        edit: LineEdit::Insert {
            line: line + 1,
            text: below.to_todo_string(),
        },
    });

    debug!(line, actions = actions.len(), "line actions");
    Ok(actions)
}
