use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Chain, Cursor, Read};
use std::path::Path;

/// Larger read buffer for whole-file ingestion
const READ_BUFFER_SIZE: usize = 256 * 1024;

/// Compression formats recognised by their leading magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// 1F 8B 08
    Gzip,
    /// 28 B5 2F FD
    Zstd,
    Plain,
}

impl Compression {
    /// Classify a file from its first (up to four) bytes
    pub fn detect(head: &[u8]) -> Self {
        match head {
            [0x1F, 0x8B, 0x08, ..] => Compression::Gzip,
            [0x28, 0xB5, 0x2F, 0xFD, ..] => Compression::Zstd,
            _ => Compression::Plain,
        }
    }
}

/// Wrap `reader` in the decoder matching its magic bytes
///
/// The peeked bytes are chained back in front so nothing is lost.
pub fn maybe_decompress<R: Read + 'static>(
    mut reader: R,
) -> io::Result<(Compression, Box<dyn BufRead>)> {
    let mut head = [0u8; 4];
    let n = read_head(&mut reader, &mut head)?;

    let prefix = Cursor::new(head[..n].to_vec());
    let chained: Chain<Cursor<Vec<u8>>, R> = prefix.chain(reader);

    let compression = Compression::detect(&head[..n]);
    let boxed: Box<dyn BufRead> = match compression {
        Compression::Gzip => Box::new(BufReader::with_capacity(
            READ_BUFFER_SIZE,
            MultiGzDecoder::new(chained),
        )),
        Compression::Zstd => Box::new(BufReader::with_capacity(
            READ_BUFFER_SIZE,
            zstd::Decoder::new(chained)?,
        )),
        Compression::Plain => Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, chained)),
    };

    Ok((compression, boxed))
}

/// Open a file and decompress it if needed
pub fn open_decompressed<P: AsRef<Path>>(
    path: P,
) -> io::Result<(Compression, Box<dyn BufRead>)> {
    let file = File::open(path)?;
    maybe_decompress(file)
}

// A single read may return fewer bytes than are available
fn read_head<R: Read>(reader: &mut R, head: &mut [u8; 4]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < head.len() {
        match reader.read(&mut head[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
