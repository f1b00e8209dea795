// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// List of all errors.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Error {
    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// Failed to open the provided file.
    FileOpenFailed,

    /// Failed to write to the provided file.
    FileWriteFailed,

    /// Only files with `svg` and `svgz` suffixes are supported.
    InvalidFileSuffix,

    /// Compressed SVG must use the GZip algorithm.
    MalformedGZip,

    /// Failed to parse an SVG data.
    ParsingFailed,

    /// Failed to allocate the canvas.
    ///
    /// Probably because it's too big or there is not enough memory.
    NoCanvas,
}

impl From<usvg::Error> for Error {
    fn from(e: usvg::Error) -> Self {
        match e {
            usvg::Error::NotAnUtf8Str => Error::NotAnUtf8Str,
            usvg::Error::MalformedGZip => Error::MalformedGZip,
            usvg::Error::ElementsLimitReached => Error::ParsingFailed,
            usvg::Error::InvalidSize => Error::ParsingFailed,
            usvg::Error::ParsingFailed(_) => Error::ParsingFailed,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotAnUtf8Str => {
                write!(f, "The SVG content has not an UTF-8 encoding.")
            }
            Error::FileOpenFailed => {
                write!(f, "Failed to open the file.")
            }
            Error::FileWriteFailed => {
                write!(f, "Failed to write to the file.")
            }
            Error::InvalidFileSuffix => {
                write!(f, "Invalid file suffix.")
            }
            Error::MalformedGZip => {
                write!(f, "Not a GZip compressed data.")
            }
            Error::ParsingFailed => {
                write!(f, "Failed to parse an SVG data.")
            }
            Error::NoCanvas => {
                write!(f, "Failed to allocate the canvas.")
            }
        }
    }
}

impl std::error::Error for Error {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::NotAnUtf8Str.to_string(),
            "The SVG content has not an UTF-8 encoding."
        );
        assert_eq!(Error::FileOpenFailed.to_string(), "Failed to open the file.");
        assert_eq!(
            Error::FileWriteFailed.to_string(),
            "Failed to write to the file."
        );
        assert_eq!(Error::InvalidFileSuffix.to_string(), "Invalid file suffix.");
        assert_eq!(
            Error::MalformedGZip.to_string(),
            "Not a GZip compressed data."
        );
        assert_eq!(
            Error::ParsingFailed.to_string(),
            "Failed to parse an SVG data."
        );
        assert_eq!(Error::NoCanvas.to_string(), "Failed to allocate the canvas.");
    }

    #[test]
    fn from_engine() {
        assert_eq!(Error::from(usvg::Error::NotAnUtf8Str), Error::NotAnUtf8Str);
        assert_eq!(Error::from(usvg::Error::MalformedGZip), Error::MalformedGZip);
        assert_eq!(Error::from(usvg::Error::InvalidSize), Error::ParsingFailed);
        assert_eq!(
            Error::from(usvg::Error::ElementsLimitReached),
            Error::ParsingFailed
        );
    }
}
