use crate::block::Document;
use crate::output::{PlainWriter, PlainWriterOptions, SerializableDoc};
use crate::run::cli::OutputFormat;
use crate::run::RunOptions;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::{env, io};

/// The run's overall possible error.
///
/// Note that parsing itself can't fail: every input produces some [`Document`]. The only failures are I/O.
#[derive(Debug)]
pub enum Error {
    /// Couldn't read an input file (or stdin).
    FileReadError(Input, io::Error),

    /// Couldn't write the output.
    WriteError(io::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError(_, err) | Error::WriteError(err) => Some(err),
        }
    }
}

/// Stdin or an input file by path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Input {
    Stdin,
    FilePath(String),
}

impl Error {
    pub(crate) fn from_io_error(error: io::Error, file: Input) -> Self {
        Error::FileReadError(file, error)
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Stdin => f.write_str("stdin"),
            Input::FilePath(file) => write!(f, "file {file:?}"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let portable = !env::var("QUAKE_PORTABLE_ERRORS").unwrap_or_default().is_empty();
        match self {
            Error::FileReadError(file, err) => {
                if portable {
                    writeln!(f, "{} while reading {file}", err.kind())
                } else {
                    writeln!(f, "{err} while reading {file}")
                }
            }
            Error::WriteError(err) => {
                if portable {
                    writeln!(f, "{} while writing output", err.kind())
                } else {
                    writeln!(f, "{err} while writing output")
                }
            }
        }
    }
}

/// A simple facade for handling I/O.
///
/// This trait lets you do "I/O-y stuff" like mocking out stdin or reading files. The [`run`] method uses it.
pub trait OsFacade {
    /// Read stdin (or your mock of it) to a `String`.
    fn read_stdin(&self) -> io::Result<String>;

    /// Read a file path (or your mock of one) to a `String`.
    fn read_file(&self, path: &str) -> io::Result<String>;

    /// Get a writer for stdout (or your mock of it).
    fn stdout(&mut self) -> impl Write;

    /// Handle an error.
    fn write_error(&mut self, err: Error);

    /// Read a slice of file paths into a single, concatenated `String`.
    ///
    /// The default implementation (which you should feel free to use) treats the file path `"-"` as stdin. The first
    /// `"-"` reads all of stdin (via [`Self::read_stdin`]), and subsequent `"-"`s get silently ignored.
    fn read_all(&self, input_file_paths: &[String]) -> Result<String, Error> {
        if input_file_paths.is_empty() {
            return self.read_stdin().map_err(|err| Error::from_io_error(err, Input::Stdin));
        }
        let mut contents = String::new();
        let mut have_read_stdin = false;
        for path in input_file_paths {
            if path == "-" {
                if !have_read_stdin {
                    contents.push_str(
                        &self
                            .read_stdin()
                            .map_err(|err| Error::from_io_error(err, Input::Stdin))?,
                    );
                    have_read_stdin = true
                }
            } else {
                let path_contents = self
                    .read_file(path)
                    .map_err(|err| Error::from_io_error(err, Input::FilePath(path.to_string())))?;
                contents.push_str(&path_contents);
            }
            contents.push('\n');
        }
        Ok(contents)
    }
}

/// Runs quake-gen end to end.
///
/// This uses the provided [RunOptions] and [OsFacade] to read the input, parses it into a [`Document`], and then
/// writes it to the given [`OsFacade`] in the format specified by [`RunOptions::output`].
///
/// Returns whether the document had any blocks. Errors are handed to [`OsFacade::write_error`], and also result in
/// `false`.
pub fn run(cli: &RunOptions, os: &mut impl OsFacade) -> bool {
    match run_or_error(cli, os) {
        Ok(ok) => ok,
        Err(err) => {
            log::error!("run failed: {err:?}");
            os.write_error(err);
            false
        }
    }
}

fn run_or_error(cli: &RunOptions, os: &mut impl OsFacade) -> Result<bool, Error> {
    let contents_str = os.read_all(&cli.input_file_paths)?;
    log::info!("read {} bytes of input", contents_str.len());
    let doc = Document::gen(&contents_str);

    let found_any = !doc.is_empty();

    if !cli.quiet {
        let mut stdout = os.stdout();
        match cli.output {
            OutputFormat::Json => {
                let serializable = SerializableDoc::new(&doc);
                let result = if cli.pretty {
                    serde_json::to_writer_pretty(&mut stdout, &serializable)
                } else {
                    serde_json::to_writer(&mut stdout, &serializable)
                };
                result.map_err(|err| Error::WriteError(err.into()))?;
                writeln!(stdout).map_err(Error::WriteError)?;
            }
            OutputFormat::Plain => {
                PlainWriter::with_options(PlainWriterOptions { include_breaks: cli.br })
                    .write(&doc.blocks, &mut stdout)
                    .map_err(Error::WriteError)?;
            }
        }
    }

    Ok(found_any)
}
