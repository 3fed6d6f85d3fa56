// crates/engine/src/source.rs
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Name used for standard input in diagnostics.
pub const STDIN_NAME: &str = "standard input";

/// One input as resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceDescriptor {
    Stdin,
    Path(PathBuf),
}

impl SourceDescriptor {
    /// `-` designates standard input; anything else is a path.
    #[must_use]
    pub fn from_arg(arg: impl AsRef<Path>) -> Self {
        let arg = arg.as_ref();
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::Path(arg.to_path_buf())
        }
    }

    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// Label printed next to the counts.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Self::Stdin => Cow::Borrowed("-"),
            Self::Path(path) => path.to_string_lossy(),
        }
    }

    /// Name used in error messages.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        match self {
            Self::Stdin => Cow::Borrowed(STDIN_NAME),
            Self::Path(path) => path.to_string_lossy(),
        }
    }
}

/// Turns a descriptor into a byte stream.
///
/// `open` is called on the worker thread that will consume the reader, so the
/// reader itself need not be `Send`.
pub trait SourceOpener: Sync {
    /// # Errors
    /// Returns the io error that prevented the source from being opened.
    fn open(&self, source: &SourceDescriptor) -> io::Result<Box<dyn Read + '_>>;
}

/// Opens real files and the process's standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOpener;

impl SourceOpener for FsOpener {
    fn open(&self, source: &SourceDescriptor) -> io::Result<Box<dyn Read + '_>> {
        match source {
            SourceDescriptor::Stdin => Ok(Box::new(io::stdin().lock())),
            SourceDescriptor::Path(path) => {
                let file = File::open(path)?;
                // Directories open fine on Unix and only fail on the first read.
                if file.metadata()?.is_dir() {
                    return Err(io::Error::from(io::ErrorKind::IsADirectory));
                }
                Ok(Box::new(file))
            }
        }
    }
}
