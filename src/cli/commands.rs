//! Interactive session commands
//!
//! One command per input line; the first word selects the command and the
//! rest of the line is its argument.

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionCommand {
    Help,
    Show,
    Dates,
    Date(Option<String>),
    Band(Option<String>),
    Instrument(Option<String>),
    Query(Option<String>),
    Search,
    Send(Option<String>),
    Quit,
    Empty,
    Unknown(String),
}

impl SessionCommand {
    pub(crate) fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        match word.to_ascii_lowercase().as_str() {
            "" => SessionCommand::Empty,
            "help" | "?" => SessionCommand::Help,
            "show" => SessionCommand::Show,
            "dates" => SessionCommand::Dates,
            "date" => SessionCommand::Date(arg),
            "band" => SessionCommand::Band(arg),
            "instrument" | "inst" => SessionCommand::Instrument(arg),
            "query" => SessionCommand::Query(arg),
            "search" | "s" => SessionCommand::Search,
            "send" => SessionCommand::Send(arg),
            "quit" | "exit" | "q" => SessionCommand::Quit,
            _ => SessionCommand::Unknown(word.to_string()),
        }
    }
}

pub(crate) const HELP: &str = "\
Commands:
  show                      current date, band, instrument and query type
  dates                     list available dates
  date <YYYY-MM-DD|n>       select a date
  band [value]              select a band, or list bands
  instrument [value]        select an instrument, or list instruments
  query [value]             select a query type, or list query types
  search                    find MSBs for the next available time slot
  send <row>                translate an MSB from the results and add it to the queue
  help                      show this help
  quit                      leave";
