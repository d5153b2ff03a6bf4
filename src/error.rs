use std::{io, path::PathBuf, result};

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}, line {line}: malformed manifest field {field:?}", .path.display())]
    ManifestParse {
        path: PathBuf,
        line: usize,
        field: String,
    },
    #[error(
        "region {name:?} ({x},{y} {w}x{h}) exceeds the {sheet_w}x{sheet_h} bounds of the sheet"
    )]
    OutOfBounds {
        name: String,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        sheet_w: u32,
        sheet_h: u32,
    },
    #[error("no images given to compose a strip from")]
    EmptyStrip,
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{0}")]
    Image(#[from] image::ImageError),
    #[error("{0}")]
    Regex(#[from] regex::Error),
    #[error("invalid tint color {0:?}")]
    Color(String),
}

impl Error {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Error {
        Error::Io {
            path: path.to_owned(),
            source,
        }
    }
}
