//! The named pipe that samples arrive through.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{
    collection::Sample,
    utils::error::{PipetopError, Result},
};

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        fn mkfifo(path: &Path) -> Result<()> {
            use std::{ffi::CString, os::unix::ffi::OsStrExt};

            let c_path = CString::new(path.as_os_str().as_bytes())
                .map_err(|err| PipetopError::ChannelUnavailable(err.to_string()))?;

            if unsafe { libc::mkfifo(c_path.as_ptr(), 0o644) } != 0 {
                let err = std::io::Error::last_os_error();
                if err.kind() != std::io::ErrorKind::AlreadyExists {
                    return Err(PipetopError::ChannelUnavailable(err.to_string()));
                }
            }

            Ok(())
        }

        fn open_writer_impl(path: &Path) -> Result<File> {
            use std::os::unix::fs::OpenOptionsExt;

            // O_NONBLOCK makes the open fail with ENXIO while no reader has
            // the pipe open, rather than waiting for one.
            std::fs::OpenOptions::new()
                .write(true)
                .custom_flags(libc::O_NONBLOCK)
                .open(path)
                .map_err(|err| PipetopError::ChannelUnavailable(err.to_string()))
        }
    } else {
        fn mkfifo(_path: &Path) -> Result<()> {
            Err(PipetopError::ChannelUnavailable(
                "named pipes are not supported on this platform".to_owned(),
            ))
        }

        fn open_writer_impl(_path: &Path) -> Result<File> {
            Err(PipetopError::ChannelUnavailable(
                "named pipes are not supported on this platform".to_owned(),
            ))
        }
    }
}

/// A named pipe at a well-known path that an external producer writes one
/// sample line to per interval.
///
/// The pipe is opened and closed on every single read rather than held open
/// across ticks: lines written between reads are lost with the closed
/// handle, and an open with no writer attached blocks until one appears.
#[derive(Debug)]
pub struct PipeSource {
    path: PathBuf,
}

impl PipeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PipeSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the pipe if nothing exists at the path yet.
    pub fn create_if_missing(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        mkfifo(&self.path)
    }

    /// Opens the pipe and reads exactly one line, blocking until a writer
    /// produces one.
    pub fn read_sample(&self) -> Result<Sample> {
        let file = File::open(&self.path)
            .map_err(|err| PipetopError::ChannelUnavailable(err.to_string()))?;

        let mut line = String::new();
        let bytes_read = BufReader::new(file)
            .read_line(&mut line)
            .map_err(|err| PipetopError::ChannelUnavailable(err.to_string()))?;
        if bytes_read == 0 {
            return Err(PipetopError::MalformedSample(
                "the pipe returned no data".to_owned(),
            ));
        }

        Sample::from_line(&line)
    }

    /// Opens the pipe for writing without blocking; fails while no reader
    /// has the pipe open. Used by the producer side.
    pub fn open_writer(&self) -> Result<File> {
        open_writer_impl(&self.path)
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::PipeSource;
    use crate::utils::error::PipetopError;

    // Regular files satisfy the same open/read-one-line contract without
    // the blocking semantics, which keeps these tests deterministic.

    #[test]
    fn reads_one_sample_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "12.5 34.2 0.75 87").unwrap();

        let source = PipeSource::new(file.path());
        let sample = source.read_sample().unwrap();
        assert_eq!(sample.cpu, 12.5);
        assert_eq!(sample.proc_count, 87);
    }

    #[test]
    fn missing_path_is_channel_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = PipeSource::new(dir.path().join("not_there"));
        assert!(matches!(
            source.read_sample(),
            Err(PipetopError::ChannelUnavailable(_))
        ));
    }

    #[test]
    fn empty_read_is_a_malformed_sample() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = PipeSource::new(file.path());
        assert!(matches!(
            source.read_sample(),
            Err(PipetopError::MalformedSample(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn creates_the_pipe_when_missing() {
        use std::os::unix::fs::FileTypeExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample_pipe");
        let source = PipeSource::new(&path);

        source.create_if_missing().unwrap();
        let file_type = std::fs::metadata(&path).unwrap().file_type();
        assert!(file_type.is_fifo());

        // A second call is a no-op rather than an error.
        source.create_if_missing().unwrap();
    }
}
