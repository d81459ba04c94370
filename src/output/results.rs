use comfy_table::{Cell, Color};

use crate::snapshot::{Choice, SearchOutcome, Selection};

use super::format::{create_styled_table, header_cell, right_cell, styled_cell, tint};

const COLUMNS: [&str; 11] = [
    "#",
    "MSB file",
    "Coords",
    "RA",
    "Dec",
    "Az",
    "Airmass",
    "Type",
    "Time",
    "ID",
    "Remaining",
];

pub(crate) fn render_selection(selection: &Selection) -> String {
    format!(
        "Date: {}   Band: {}   Instrument: {}   Query type: {}",
        selection.date,
        selection.band.label(),
        selection.instrument.label(),
        selection.query.label()
    )
}

/// Numbered list of dates with the current one marked
pub(crate) fn render_dates(dates: &[String], current: &str) -> String {
    dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let marker = if date == current { '*' } else { ' ' };
            format!("{marker} {:>3}  {date}", i + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered menu of one search dimension with the current choice marked
pub(crate) fn render_choices<C: Choice>(current: C) -> String {
    C::ALL
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let marker = if *choice == current { '*' } else { ' ' };
            format!("{marker} {:>3}  {:<14}({})", i + 1, choice.label(), choice.segment())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn render_search(outcome: &SearchOutcome, use_color: bool) -> String {
    let mut out = format!(
        "Directory: {}\nTime: {}\n",
        outcome.directory.display(),
        outcome.time_slot
    );

    if outcome.rows.is_empty() {
        out.push_str("No results");
        return out;
    }

    let mut table = create_styled_table();
    table.set_header(
        COLUMNS
            .iter()
            .map(|c| header_cell(c, use_color))
            .collect::<Vec<_>>(),
    );

    for row in &outcome.rows {
        let info = row.metadata();
        let remaining_color = if info.remaining == "0" {
            tint(Color::Yellow, use_color)
        } else {
            None
        };

        let mut cells: Vec<Cell> = vec![
            right_cell(&row.number.to_string(), None),
            styled_cell(&row.file_name, tint(Color::Green, use_color), false),
        ];
        cells.extend([
            Cell::new(&info.coordstype),
            Cell::new(&info.ra),
            Cell::new(&info.dec),
            right_cell(&info.az, None),
            right_cell(&info.airmass, None),
            Cell::new(&info.obstype),
            right_cell(&info.timeest, None),
            Cell::new(&info.msbid),
            right_cell(&info.remaining, remaining_color),
        ]);
        table.add_row(cells);
    }

    out.push_str(&table.to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msb::{MsbInfo, MsbRow};
    use crate::snapshot::{Band, Instrument, QueryType};
    use std::path::PathBuf;

    fn outcome(rows: Vec<MsbRow>) -> SearchOutcome {
        SearchOutcome {
            directory: PathBuf::from("/backup/2024-03-01/14-00-00/band_1/scuba-2/jls"),
            time_slot: "14-00-00".to_string(),
            rows,
        }
    }

    #[test]
    fn empty_outcome_says_no_results() {
        let text = render_search(&outcome(Vec::new()), false);
        assert_eq!(
            text,
            "Directory: /backup/2024-03-01/14-00-00/band_1/scuba-2/jls\nTime: 14-00-00\nNo results"
        );
    }

    #[test]
    fn rows_render_metadata() {
        let rows = vec![
            MsbRow {
                number: 1,
                definition: PathBuf::from("/x/m1.xml"),
                file_name: "m1.xml".to_string(),
                info: Some(MsbInfo {
                    msbid: "abc123".to_string(),
                    ra: "05:35:17".to_string(),
                    remaining: "4".to_string(),
                    ..MsbInfo::default()
                }),
            },
            MsbRow {
                number: 2,
                definition: PathBuf::from("/x/m2.xml"),
                file_name: "m2.xml".to_string(),
                info: None,
            },
        ];
        let text = render_search(&outcome(rows), false);
        assert!(text.contains("Time: 14-00-00"));
        assert!(text.contains("Remaining"));
        assert!(text.contains("m1.xml"));
        assert!(text.contains("abc123"));
        assert!(text.contains("05:35:17"));
        assert!(text.contains("m2.xml"));
        assert!(!text.contains("No results"));
    }

    #[test]
    fn selection_line() {
        let selection = Selection {
            date: "2024-03-01".to_string(),
            band: Band::Three,
            instrument: Instrument::RxA3,
            query: QueryType::NothingLeft,
        };
        assert_eq!(
            render_selection(&selection),
            "Date: 2024-03-01   Band: Band 3   Instrument: RxA3   Query type: Nothing left"
        );
    }

    #[test]
    fn dates_mark_current() {
        let dates = vec!["2024-03-01".to_string(), "2024-03-02".to_string()];
        let text = render_dates(&dates, "2024-03-02");
        assert_eq!(text, "    1  2024-03-01\n*   2  2024-03-02");
    }

    #[test]
    fn choices_mark_current() {
        let text = render_choices(QueryType::Pi);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("    1  JLS"));
        assert!(lines[2].starts_with("*   3  PI projects"));
        assert!(lines[2].ends_with("(pi)"));
    }
}
