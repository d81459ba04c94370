use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

/// Summary fields written next to each MSB definition by the fetch tool.
///
/// Every field is display-only text; absent elements read as empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct MsbInfo {
    pub(crate) msbid: String,
    pub(crate) coordstype: String,
    pub(crate) ra: String,
    pub(crate) dec: String,
    pub(crate) az: String,
    pub(crate) airmass: String,
    pub(crate) obstype: String,
    pub(crate) timeest: String,
    pub(crate) remaining: String,
}

/// Sidecar elements as written; a repeated element keeps every occurrence
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawInfo {
    msbid: Vec<String>,
    coordstype: Vec<String>,
    ra: Vec<String>,
    dec: Vec<String>,
    az: Vec<String>,
    airmass: Vec<String>,
    #[serde(rename = "type")]
    obstype: Vec<String>,
    timeest: Vec<String>,
    remaining: Vec<String>,
}

fn first(values: Vec<String>) -> String {
    values.into_iter().next().unwrap_or_default()
}

impl From<RawInfo> for MsbInfo {
    fn from(raw: RawInfo) -> Self {
        Self {
            msbid: first(raw.msbid),
            coordstype: first(raw.coordstype),
            ra: first(raw.ra),
            dec: first(raw.dec),
            az: first(raw.az),
            airmass: first(raw.airmass),
            obstype: first(raw.obstype),
            timeest: first(raw.timeest),
            remaining: first(raw.remaining),
        }
    }
}

/// Metadata shown for definitions without a usable sidecar
pub(crate) static BLANK_INFO: MsbInfo = MsbInfo {
    msbid: String::new(),
    coordstype: String::new(),
    ra: String::new(),
    dec: String::new(),
    az: String::new(),
    airmass: String::new(),
    obstype: String::new(),
    timeest: String::new(),
    remaining: String::new(),
};

impl MsbInfo {
    /// Parse sidecar XML. The first occurrence of a repeated element wins.
    pub(crate) fn parse(xml: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str::<RawInfo>(xml).map(Self::from)
    }

    /// Load a sidecar file.
    ///
    /// A missing file is normal and yields `None`. An unreadable or malformed
    /// file is logged and also yields `None` so the row still renders.
    pub(crate) fn load(path: &Path) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                return None;
            }
        };
        match Self::parse(&content) {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::warn!("Could not parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// The nine display fields, in table column order
    pub(crate) fn fields(&self) -> [&str; 9] {
        [
            self.coordstype.as_str(),
            self.ra.as_str(),
            self.dec.as_str(),
            self.az.as_str(),
            self.airmass.as_str(),
            self.obstype.as_str(),
            self.timeest.as_str(),
            self.msbid.as_str(),
            self.remaining.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIDECAR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<msb>
  <msbid>a1b2c3d4e5</msbid>
  <coordstype>RADEC</coordstype>
  <ra>05:35:17.3</ra>
  <dec>-05:23:28</dec>
  <az>134.2</az>
  <airmass>1.21</airmass>
  <type>Science</type>
  <timeest>1800</timeest>
  <remaining>3</remaining>
</msb>
"#;

    #[test]
    fn parse_full_sidecar() {
        let info = MsbInfo::parse(SIDECAR).unwrap();
        assert_eq!(info.msbid, "a1b2c3d4e5");
        assert_eq!(info.coordstype, "RADEC");
        assert_eq!(info.ra, "05:35:17.3");
        assert_eq!(info.dec, "-05:23:28");
        assert_eq!(info.az, "134.2");
        assert_eq!(info.airmass, "1.21");
        assert_eq!(info.obstype, "Science");
        assert_eq!(info.timeest, "1800");
        assert_eq!(info.remaining, "3");
    }

    #[test]
    fn missing_elements_are_blank() {
        let info = MsbInfo::parse("<msb><msbid>x1</msbid><ra>12:00:00</ra></msb>").unwrap();
        assert_eq!(info.msbid, "x1");
        assert_eq!(info.ra, "12:00:00");
        assert_eq!(info.dec, "");
        assert_eq!(info.remaining, "");
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let info =
            MsbInfo::parse("<msb><project>M24AP001</project><az>200</az></msb>").unwrap();
        assert_eq!(info.az, "200");
    }

    #[test]
    fn repeated_element_keeps_first() {
        let info = MsbInfo::parse("<msb><ra>1</ra><ra>2</ra></msb>").unwrap();
        assert_eq!(info.ra, "1");
    }

    #[test]
    fn repeated_element_apart_keeps_first() {
        let info =
            MsbInfo::parse("<msb><az>10</az><msbid>m9</msbid><az>20</az></msb>").unwrap();
        assert_eq!(info.az, "10");
        assert_eq!(info.msbid, "m9");
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MsbInfo::load(&dir.path().join("absent.info")).is_none());
    }

    #[test]
    fn load_malformed_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.info");
        fs::write(&path, "<msb><ra>12:00</dec></msb>").unwrap();
        assert!(MsbInfo::load(&path).is_none());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("good.info");
        fs::write(&path, SIDECAR).unwrap();
        assert_eq!(MsbInfo::load(&path).unwrap().timeest, "1800");
    }

    #[test]
    fn blank_info_fields_are_empty() {
        assert!(BLANK_INFO.fields().iter().all(|f| f.is_empty()));
        assert_eq!(BLANK_INFO, MsbInfo::default());
    }
}
