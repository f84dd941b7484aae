use std::io::{self, BufRead};
use std::path::Path;

use crate::decompression::{open_decompressed, Compression};
use crate::error::LogstatError;

/// Lines of one input file, fully loaded before any processing starts
#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub lines: Vec<String>,
    pub compression: Compression,
}

/// Collect every line from a reader, stripping `\n` and `\r\n` endings
///
/// Invalid UTF-8 surfaces as an `InvalidData` error.
pub fn read_lines_from<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Read a whole log file, decompressing gzip/zstd input transparently
///
/// Any failure aborts here, before a single line is aggregated.
pub fn read_log_file<P: AsRef<Path>>(path: P) -> Result<LoadedInput, LogstatError> {
    let path = path.as_ref();
    let input_error = |source: io::Error| LogstatError::Input {
        path: path.to_path_buf(),
        source,
    };

    let (compression, reader) = open_decompressed(path).map_err(input_error)?;
    let lines = read_lines_from(reader).map_err(input_error)?;

    Ok(LoadedInput {
        lines,
        compression,
    })
}
