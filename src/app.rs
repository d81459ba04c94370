//! Interactive selection session
//!
//! The operator adjusts the search selection, runs searches and forwards
//! MSBs from the latest result set to the queue, one command per line.

use std::io::{self, BufRead, Write};

use crate::cli::{HELP, SessionCommand};
use crate::error::AppError;
use crate::msb::MsbRow;
use crate::output::{render_choices, render_dates, render_search, render_selection};
use crate::queue::QueueSubmitter;
use crate::snapshot::{Band, Choice, Instrument, QueryType, Selection, SnapshotTree};
use crate::utils::{Timezone, parse_date};

pub(crate) const TITLE: &str = "Backup MSB Selection Tool";

const REMAINING_WARNING: &str = "Note: sending an MSB does not update its remaining count; \
track observations per MSB ID manually if the database stays offline.";

/// Source of the time used to pick a snapshot slot
#[derive(Debug, Clone)]
pub(crate) enum ReferenceTime {
    Clock(Timezone),
    Fixed(String),
}

impl ReferenceTime {
    pub(crate) fn time_slot(&self) -> String {
        match self {
            ReferenceTime::Clock(tz) => tz.current_time_slot(),
            ReferenceTime::Fixed(slot) => slot.clone(),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

pub(crate) struct Session<'a, Q: QueueSubmitter> {
    tree: &'a SnapshotTree,
    queue: &'a Q,
    dates: Vec<String>,
    selection: Selection,
    reference: ReferenceTime,
    use_color: bool,
    results: Option<Vec<MsbRow>>,
}

impl<'a, Q: QueueSubmitter> Session<'a, Q> {
    pub(crate) fn new(
        tree: &'a SnapshotTree,
        queue: &'a Q,
        dates: Vec<String>,
        selection: Selection,
        reference: ReferenceTime,
        use_color: bool,
    ) -> Self {
        Self {
            tree,
            queue,
            dates,
            selection,
            reference,
            use_color,
            results: None,
        }
    }

    /// Read commands from `input` until `quit` or end of input.
    pub(crate) fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{REMAINING_WARNING}")?;
        writeln!(out, "{}", render_selection(&self.selection))?;
        writeln!(out, "Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let command = SessionCommand::parse(&line);
            tracing::debug!("Command: {:?}", command);
            if let Flow::Quit = self.execute(command, out)? {
                break;
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> io::Result<Flow> {
        match command {
            SessionCommand::Empty => {}
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Show => writeln!(out, "{}", render_selection(&self.selection))?,
            SessionCommand::Dates | SessionCommand::Date(None) => {
                writeln!(out, "{}", render_dates(&self.dates, &self.selection.date))?
            }
            SessionCommand::Date(Some(value)) => match self.pick_date(&value) {
                Ok(date) => {
                    self.selection.date = date;
                    writeln!(out, "{}", render_selection(&self.selection))?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            SessionCommand::Band(value) => {
                select(&mut self.selection.band, value.as_deref(), out)?
            }
            SessionCommand::Instrument(value) => {
                select(&mut self.selection.instrument, value.as_deref(), out)?
            }
            SessionCommand::Query(value) => {
                select(&mut self.selection.query, value.as_deref(), out)?
            }
            SessionCommand::Search => self.search(out)?,
            SessionCommand::Send(value) => self.send(value.as_deref(), out)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
            SessionCommand::Unknown(word) => {
                writeln!(out, "Unknown command \"{word}\". Type 'help' for commands.")?
            }
        }
        Ok(Flow::Continue)
    }

    /// A date given as YYYY-MM-DD or as its number in the `dates` list
    fn pick_date(&self, value: &str) -> Result<String, AppError> {
        if let Ok(index) = value.trim().parse::<usize>()
            && let Some(date) = index.checked_sub(1).and_then(|i| self.dates.get(i))
        {
            return Ok(date.clone());
        }
        let date = parse_date(value)?;
        if self.dates.contains(&date) {
            Ok(date)
        } else {
            Err(AppError::UnavailableDate { input: date })
        }
    }

    fn search<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let reference = self.reference.time_slot();
        // Old results are dropped even when the new search fails
        self.results = None;
        match self.tree.search(&self.selection, &reference) {
            Ok(outcome) => {
                writeln!(out, "{}", render_search(&outcome, self.use_color))?;
                self.results = Some(outcome.rows);
            }
            Err(e) => writeln!(out, "{e}")?,
        }
        Ok(())
    }

    fn send<W: Write>(&self, value: Option<&str>, out: &mut W) -> io::Result<()> {
        let Some(results) = &self.results else {
            writeln!(out, "No results to send from; run 'search' first.")?;
            return Ok(());
        };
        let Some(value) = value else {
            writeln!(out, "Usage: send <row>")?;
            return Ok(());
        };
        let Ok(number) = value.parse::<usize>() else {
            writeln!(out, "Row must be a number: {value}")?;
            return Ok(());
        };
        let Some(row) = results.iter().find(|row| row.number == number) else {
            if results.is_empty() {
                writeln!(out, "The current search has no results.")?;
            } else {
                writeln!(out, "No row {number} in the current results (1-{}).", results.len())?;
            }
            return Ok(());
        };

        tracing::info!("Sending {} to queue", row.definition.display());
        match self.queue.submit(&row.definition) {
            Ok(()) => writeln!(out, "Sent {} to queue.", row.file_name)?,
            Err(e) => {
                tracing::error!("Submission of {} failed: {}", row.definition.display(), e);
                writeln!(out, "Error sending to queue")?;
                writeln!(out, "{e}")?;
            }
        }
        Ok(())
    }
}

/// List the choices without a value, otherwise change the current choice
fn select<C: Choice, W: Write>(current: &mut C, value: Option<&str>, out: &mut W) -> io::Result<()> {
    match value {
        None => writeln!(out, "{}", render_choices(*current)),
        Some(value) => match C::parse(value) {
            Ok(choice) => {
                *current = choice;
                writeln!(out, "{}: {}", capitalize(C::KIND), choice.label())
            }
            Err(e) => writeln!(out, "{e}"),
        },
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Startup selection: requested values where given, otherwise the defaults
pub(crate) fn initial_selection(
    dates: &[String],
    date: Option<&str>,
    band: Option<&str>,
    instrument: Option<&str>,
    query: Option<&str>,
) -> Result<Selection, AppError> {
    let date = match date {
        Some(value) => {
            let date = parse_date(value)?;
            if !dates.contains(&date) {
                return Err(AppError::UnavailableDate { input: date });
            }
            date
        }
        None => dates.last().cloned().unwrap_or_default(),
    };

    Ok(Selection {
        date,
        band: band.map(Band::parse).transpose()?.unwrap_or_default(),
        instrument: instrument.map(Instrument::parse).transpose()?.unwrap_or_default(),
        query: query.map(QueryType::parse).transpose()?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SubmitError, ToolError};
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct RecordingQueue {
        sent: RefCell<Vec<PathBuf>>,
        fail: bool,
    }

    impl QueueSubmitter for RecordingQueue {
        fn submit(&self, definition: &Path) -> Result<(), SubmitError> {
            if self.fail {
                return Err(SubmitError::Translate(ToolError::NotFound {
                    name: "the JCMT translator",
                    program: "jcmttranslator".to_string(),
                    hint: String::new(),
                }));
            }
            self.sent.borrow_mut().push(definition.to_path_buf());
            Ok(())
        }
    }

    fn backup_tree() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        let slot = root.path().join("2024-03-01/14-00-00/band_1/scuba-2/jls");
        fs::create_dir_all(&slot).unwrap();
        fs::write(slot.join("m1.xml"), "<SpProg/>").unwrap();
        fs::write(slot.join("m2.xml"), "<SpProg/>").unwrap();
        fs::write(slot.join("m2.info"), "<msb><msbid>m2id</msbid></msb>").unwrap();
        fs::create_dir_all(root.path().join("2024-03-01/10-00-00")).unwrap();
        fs::create_dir_all(root.path().join("2024-02-29")).unwrap();
        root
    }

    fn run_session(root: &Path, queue: &RecordingQueue, script: &str) -> String {
        let tree = SnapshotTree::new(root);
        let dates = tree.dates().unwrap();
        let selection = initial_selection(&dates, None, None, None, None).unwrap();
        let mut session = Session::new(
            &tree,
            queue,
            dates,
            selection,
            ReferenceTime::Fixed("12-00-00".to_string()),
            false,
        );
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn search_then_send_submits_row_definition() {
        let root = backup_tree();
        let queue = RecordingQueue::default();
        let out = run_session(root.path(), &queue, "search\nsend 2\nquit\n");

        assert!(out.starts_with(TITLE));
        assert!(out.contains("Time: 14-00-00"));
        assert!(out.contains("m2id"));
        assert!(out.contains("Sent m2.xml to queue."));
        let sent = queue.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].ends_with("2024-03-01/14-00-00/band_1/scuba-2/jls/m2.xml"));
    }

    #[test]
    fn send_before_search_is_refused() {
        let root = backup_tree();
        let queue = RecordingQueue::default();
        let out = run_session(root.path(), &queue, "send 1\n");
        assert!(out.contains("run 'search' first"));
        assert!(queue.sent.borrow().is_empty());
    }

    #[test]
    fn send_out_of_range_is_refused() {
        let root = backup_tree();
        let queue = RecordingQueue::default();
        let out = run_session(root.path(), &queue, "search\nsend 7\nsend x\n");
        assert!(out.contains("No row 7 in the current results (1-2)."));
        assert!(out.contains("Row must be a number: x"));
        assert!(queue.sent.borrow().is_empty());
    }

    #[test]
    fn failed_submission_keeps_session_alive() {
        let root = backup_tree();
        let queue = RecordingQueue {
            fail: true,
            ..RecordingQueue::default()
        };
        let out = run_session(root.path(), &queue, "search\nsend 1\nshow\n");
        assert!(out.contains("Error sending to queue\nCould not translate observation."));
        assert!(out.contains("Query type: JLS"));
    }

    #[test]
    fn new_search_replaces_results() {
        let root = backup_tree();
        let queue = RecordingQueue::default();
        let out = run_session(root.path(), &queue, "search\nband 2\nsearch\nsend 1\n");
        assert!(out.contains("Band: Band 2"));
        assert!(out.contains("No results"));
        assert!(out.contains("The current search has no results."));
        assert!(queue.sent.borrow().is_empty());
    }

    #[test]
    fn date_with_no_slots_shows_no_results() {
        let root = backup_tree();
        let queue = RecordingQueue::default();
        let out = run_session(root.path(), &queue, "date 2024-02-29\nsearch\n");
        assert!(out.contains("Date: 2024-02-29"));
        assert!(out.contains("Time: 12-00-00"));
        assert!(out.contains("No results"));
    }

    #[test]
    fn date_by_index_and_unknown_date() {
        let root = backup_tree();
        let queue = RecordingQueue::default();
        let out = run_session(root.path(), &queue, "dates\ndate 1\ndate 2023-01-01\n");
        assert!(out.contains("*   2  2024-03-01"));
        assert!(out.contains("Date: 2024-02-29"));
        assert!(out.contains("Date 2023-01-01 has no snapshot directory"));
    }

    #[test]
    fn choice_commands_list_and_select() {
        let root = backup_tree();
        let queue = RecordingQueue::default();
        let out = run_session(
            root.path(),
            &queue,
            "instrument\ninstrument harp\nquery nl\nband 9\nfly\n",
        );
        assert!(out.contains("*   3  SCUBA-2"));
        assert!(out.contains("Instrument: HARP"));
        assert!(out.contains("Query type: Nothing left"));
        assert!(out.contains(r#"Unknown band "9""#));
        assert!(out.contains(r#"Unknown command "fly""#));
    }

    #[test]
    fn initial_selection_defaults() {
        let dates = vec!["2024-02-29".to_string(), "2024-03-01".to_string()];
        let selection = initial_selection(&dates, None, None, None, None).unwrap();
        assert_eq!(selection.date, "2024-03-01");
        assert_eq!(selection.band, Band::One);
        assert_eq!(selection.instrument, Instrument::Scuba2);
        assert_eq!(selection.query, QueryType::Jls);
    }

    #[test]
    fn initial_selection_rejects_unknown_values() {
        let dates = vec!["2024-03-01".to_string()];
        assert!(matches!(
            initial_selection(&dates, Some("2024-03-02"), None, None, None),
            Err(AppError::UnavailableDate { .. })
        ));
        assert!(matches!(
            initial_selection(&dates, None, None, Some("SCUBA"), None),
            Err(AppError::UnknownChoice { .. })
        ));
    }

    #[test]
    fn capitalize_kind() {
        assert_eq!(capitalize("query type"), "Query type");
        assert_eq!(capitalize(""), "");
    }
}
