//! 文件读写：按扩展名（`.gz`）决定是否经过 gzip 编解码，整文件读入内存。

pub mod fasta;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Result;

/// True when the file name ends in `.gz`. Compression is never sniffed from content.
pub fn is_gzip_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .to_str()
        .map_or(false, |s| s.ends_with(".gz"))
}

/// Read a whole file into memory, decompressing when the name ends in `.gz`.
pub fn read_all<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut fh = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    if is_gzip_path(path) {
        MultiGzDecoder::new(fh).read_to_end(&mut buf)?;
    } else {
        fh.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

/// Like [`read_all`], but the content must be valid UTF-8.
pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = read_all(path)?;
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// Write `data` to `path` in one go, gzip-compressed when the name ends in `.gz`.
pub fn write_all<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let mut fh = BufWriter::new(File::create(path)?);
    if is_gzip_path(path) {
        let mut enc = GzEncoder::new(fh, Compression::default());
        enc.write_all(data)?;
        enc.finish()?.flush()?;
    } else {
        fh.write_all(data)?;
        fh.flush()?;
    }
    Ok(())
}
