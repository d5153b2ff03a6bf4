use std::{fmt, fs, path::Path};

use indexmap::IndexMap;
use regex::Regex;

use crate::error::{Error, Result};

/// One manifest record: a named rectangle in sheet coordinates, plus any
/// extra integer attributes the line carried. Extras are kept in line order
/// and are not interpreted by the rest of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteRegion {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub extra: IndexMap<String, i64>,
}

impl fmt::Display for SpriteRegion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SpriteRegion(name={}, x={}, y={}, w={}, h={})",
            self.name, self.x, self.y, self.w, self.h
        )
    }
}

/// Which manifest records to keep.
#[derive(Debug)]
pub enum NameFilter {
    All,
    /// Keeps a record when the pattern matches at the start of its name
    /// (prefix match, not full match).
    Matching(Regex),
}

impl NameFilter {
    /// The manifest convention: the literal `"all"` disables filtering,
    /// anything else compiles as a regex.
    pub fn parse(pattern: &str) -> Result<NameFilter> {
        if pattern == "all" {
            return Ok(NameFilter::All);
        }
        Ok(NameFilter::Matching(Regex::new(pattern)?))
    }

    pub fn keeps(&self, name: &str) -> bool {
        match self {
            NameFilter::All => true,
            // The leftmost match starts at 0 exactly when some match does,
            // so this is a true anchored-at-start test.
            NameFilter::Matching(regex) => {
                regex.find(name).map_or(false, |found| found.start() == 0)
            }
        }
    }
}

/// Reads a coordinate manifest: one record per line, tab-separated fields,
/// the first field being the record name and the rest `key=integer` pairs.
/// Records are returned in file order; records the filter rejects are
/// skipped entirely (their fields are never parsed). Any malformed field on
/// a kept line fails the whole read.
///
/// With `debug` set, each kept record is echoed through `log::debug!`.
pub fn read_regions(path: &Path, filter: &NameFilter, debug: bool) -> Result<Vec<SpriteRegion>> {
    let text = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;

    let mut regions = Vec::new();
    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let name = fields.next().unwrap_or_default();
        if !filter.keeps(name) {
            continue;
        }

        let mut pairs = IndexMap::new();
        for field in fields {
            let (key, value) = field
                .split_once('=')
                .ok_or_else(|| parse_error(path, index, field))?;
            let value = value
                .parse::<i64>()
                .map_err(|_| parse_error(path, index, field))?;
            pairs.insert(key.to_owned(), value);
        }

        let region = SpriteRegion {
            name: name.to_owned(),
            x: require_coord(&mut pairs, "x", path, index)?,
            y: require_coord(&mut pairs, "y", path, index)?,
            w: require_coord(&mut pairs, "w", path, index)?,
            h: require_coord(&mut pairs, "h", path, index)?,
            extra: pairs,
        };
        if debug {
            log::debug!("{region}");
        }
        regions.push(region);
    }

    Ok(regions)
}

/// Pulls a required rectangle coordinate out of the parsed field bag.
/// Negative or oversized values are malformed: sheet coordinates are u32.
fn require_coord(
    pairs: &mut IndexMap<String, i64>,
    key: &str,
    path: &Path,
    index: usize,
) -> Result<u32> {
    let value = pairs
        .shift_remove(key)
        .ok_or_else(|| parse_error(path, index, key))?;
    u32::try_from(value).map_err(|_| parse_error(path, index, &format!("{key}={value}")))
}

fn parse_error(path: &Path, index: usize, field: &str) -> Error {
    Error::ManifestParse {
        path: path.to_owned(),
        line: index + 1,
        field: field.to_owned(),
    }
}
