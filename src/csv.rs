//! CSV persistence for [`Matrix`].
//!
//! Reading is streamed one record at a time so large inputs never need a
//! second in-memory copy; the first record fixes the column count and
//! every later record must match it. Writing is buffered and emits
//! scientific notation with 14 fractional digits, comma-separated fields,
//! newline-separated records, and no trailing newline.

use crate::error::{Error, Result};
use crate::primitives::Matrix;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

impl Matrix {
    /// Reads a matrix from a CSV stream, one record at a time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on a read failure, [`Error::ParseError`] on
    /// a field that is not a 64-bit float, [`Error::JaggedInput`] when a
    /// record's width disagrees with the first record's, and
    /// [`Error::EmptyInput`] when the stream holds no records.
    pub fn from_csv<R: BufRead>(reader: R) -> Result<Matrix> {
        let mut data = Vec::new();
        let mut cols = 0;
        let mut rows = 0;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let mut width = 0;
            for field in line.split(',') {
                let value: f64 = field.trim().parse().map_err(|_| Error::ParseError {
                    line: line_no + 1,
                    value: field.to_string(),
                })?;
                data.push(value);
                width += 1;
            }
            if rows == 0 {
                cols = width;
            } else if width != cols {
                return Err(Error::JaggedInput {
                    row: rows,
                    expected: cols,
                    actual: width,
                });
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(Error::EmptyInput { what: "csv stream" });
        }
        Matrix::from_vec(rows, cols, data)
    }

    /// Writes the matrix as CSV to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on a write failure.
    pub fn to_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        let (rows, cols) = self.shape();
        let data = self.as_slice();
        for i in 0..rows {
            if i > 0 {
                writer.write_all(b"\n")?;
            }
            for j in 0..cols {
                if j > 0 {
                    writer.write_all(b",")?;
                }
                write!(writer, "{:.14e}", data[i * cols + j])?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Reads a matrix from a CSV file at `path`.
    ///
    /// # Errors
    ///
    /// As for [`Matrix::from_csv`], plus [`Error::Io`] when the file
    /// cannot be opened.
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Matrix> {
        let file = File::open(path)?;
        Matrix::from_csv(BufReader::new(file))
    }

    /// Writes the matrix as a CSV file at `path`.
    ///
    /// # Errors
    ///
    /// As for [`Matrix::to_csv`], plus [`Error::Io`] when the file
    /// cannot be created.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.to_csv(BufWriter::new(file))
    }
}
