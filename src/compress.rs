use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;

use crate::StageError;

/// Gzip everything `reader` yields into `writer` and write the trailer.
///
/// Returns the number of uncompressed bytes consumed. The header carries no
/// file name and a zero mtime, so equal inputs give equal outputs.
pub fn compress_stream<R: Read, W: Write>(mut reader: R, writer: W) -> io::Result<u64> {
    let mut encoder = GzEncoder::new(writer, Compression::default());
    let copied = io::copy(&mut reader, &mut encoder)?;
    let mut writer = encoder.finish()?;
    writer.flush()?;
    Ok(copied)
}

/// Remembers whether the wrapped reader failed, so a copy error can be
/// blamed on the right file.
struct SourceReader<R> {
    inner: R,
    failed: bool,
}

impl<R: Read> Read for SourceReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).map_err(|e| {
            if e.kind() != io::ErrorKind::Interrupted {
                self.failed = true;
            }
            e
        })
    }
}

fn stream_between<R: Read, W: Write>(
    reader: R,
    source: &Path,
    writer: W,
    target: &Path,
) -> Result<u64, StageError> {
    let mut reader = SourceReader {
        inner: reader,
        failed: false,
    };
    compress_stream(&mut reader, writer).map_err(|e| {
        if reader.failed {
            StageError::io("reading source", source, e)
        } else {
            StageError::io("writing target", target, e)
        }
    })
}

/// Compress `source` into a gzip file at `target`.
///
/// The source is opened before the target is created, so a missing source
/// leaves the tree untouched. The target's parent directory must exist.
/// Output goes straight to `target`; a failure mid-stream leaves a truncated
/// file behind.
pub fn compress_file(source: &Path, target: &Path) -> Result<(), StageError> {
    let input = File::open(source).map_err(|e| StageError::io("opening source", source, e))?;
    let output =
        File::create(target).map_err(|e| StageError::io("creating target", target, e))?;

    let copied = stream_between(BufReader::new(input), source, output, target)?;
    debug!(
        "compressed {} bytes from {} into {}",
        copied,
        source.display(),
        target.display()
    );
    Ok(())
}
