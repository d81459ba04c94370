use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::consts::TIME_SLOT_FORMAT;
use crate::error::AppError;

/// Zone in which "now" is read when picking a time slot
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    /// Wall-clock time of `utc` in this zone, as a time-slot label
    pub(crate) fn time_slot_at(self, utc: DateTime<Utc>) -> String {
        self.to_fixed_offset(utc)
            .format(TIME_SLOT_FORMAT)
            .to_string()
    }

    pub(crate) fn current_time_slot(self) -> String {
        self.time_slot_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_local_string_returns_local() {
        assert!(matches!(
            Timezone::parse(Some("LOCAL")).unwrap(),
            Timezone::Local
        ));
        assert!(matches!(
            Timezone::parse(Some("  ")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_utc_variants() {
        let tz = Timezone::parse(Some("utc")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));

        let tz = Timezone::parse(Some("Z")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("Pacific/Honolulu")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::Pacific::Honolulu)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mauna/Kea")).unwrap_err();
        assert!(err.to_string().contains("Mauna/Kea"));
    }

    #[test]
    fn time_slot_at_utc() {
        let utc = "2026-02-12T06:05:09Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::Named(chrono_tz::UTC);
        assert_eq!(tz.time_slot_at(utc), "06-05-09");
    }

    #[test]
    fn time_slot_at_honolulu_crosses_midnight() {
        // HST is UTC-10 all year
        let utc = "2026-06-15T04:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("Pacific/Honolulu")).unwrap();
        assert_eq!(tz.time_slot_at(utc), "18-30-00");
    }

    #[test]
    fn current_time_slot_is_a_label() {
        let slot = Timezone::Local.current_time_slot();
        assert!(crate::utils::is_time_slot_label(&slot));
    }
}
