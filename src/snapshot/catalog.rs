//! Search dimensions of the snapshot tree
//!
//! The folder segments are fixed by the tool that fetches the backup MSBs and
//! must match its layout exactly.

use crate::error::AppError;

/// One of the fixed menus offered to the operator
pub(crate) trait Choice: Copy + PartialEq + 'static {
    /// Name used in prompts and error messages
    const KIND: &'static str;

    /// All choices in menu order
    const ALL: &'static [Self];

    /// Label shown to the operator
    fn label(self) -> &'static str;

    /// Directory name used by the snapshot tree
    fn segment(self) -> &'static str;

    /// Match a label (case-insensitive), a folder segment or a 1-based menu index
    fn parse(input: &str) -> Result<Self, AppError> {
        let wanted = input.trim();
        if let Ok(index) = wanted.parse::<usize>()
            && let Some(choice) = index.checked_sub(1).and_then(|i| Self::ALL.get(i))
        {
            return Ok(*choice);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted) || c.segment() == wanted)
            .ok_or_else(|| AppError::UnknownChoice {
                kind: Self::KIND,
                input: wanted.to_string(),
                choices: Self::choices(),
            })
    }

    fn choices() -> String {
        Self::ALL
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Band {
    #[default]
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Choice for Band {
    const KIND: &'static str = "band";
    const ALL: &'static [Self] = &[Band::One, Band::Two, Band::Three, Band::Four, Band::Five];

    fn label(self) -> &'static str {
        match self {
            Band::One => "Band 1",
            Band::Two => "Band 2",
            Band::Three => "Band 3",
            Band::Four => "Band 4",
            Band::Five => "Band 5",
        }
    }

    fn segment(self) -> &'static str {
        match self {
            Band::One => "band_1",
            Band::Two => "band_2",
            Band::Three => "band_3",
            Band::Four => "band_4",
            Band::Five => "band_5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Instrument {
    Harp,
    RxA3,
    #[default]
    Scuba2,
}

impl Choice for Instrument {
    const KIND: &'static str = "instrument";
    const ALL: &'static [Self] = &[Instrument::Harp, Instrument::RxA3, Instrument::Scuba2];

    fn label(self) -> &'static str {
        match self {
            Instrument::Harp => "HARP",
            Instrument::RxA3 => "RxA3",
            Instrument::Scuba2 => "SCUBA-2",
        }
    }

    fn segment(self) -> &'static str {
        match self {
            Instrument::Harp => "harp",
            Instrument::RxA3 => "rxa3",
            Instrument::Scuba2 => "scuba-2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum QueryType {
    #[default]
    Jls,
    NothingLeft,
    Pi,
}

impl Choice for QueryType {
    const KIND: &'static str = "query type";
    const ALL: &'static [Self] = &[QueryType::Jls, QueryType::NothingLeft, QueryType::Pi];

    fn label(self) -> &'static str {
        match self {
            QueryType::Jls => "JLS",
            QueryType::NothingLeft => "Nothing left",
            QueryType::Pi => "PI projects",
        }
    }

    fn segment(self) -> &'static str {
        match self {
            QueryType::Jls => "jls",
            QueryType::NothingLeft => "nl",
            QueryType::Pi => "pi",
        }
    }
}
