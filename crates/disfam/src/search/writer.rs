//! Distinguishing filter and batched artifact writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::family::{render_family, Family};

/// Element `p` is distinguished iff for every `q != p` some member contains
/// exactly one of `p, q`.
pub fn is_distinguished(family: &Family, p: usize, n: usize) -> bool {
    let p_bit = (p - 1) as u64;
    (1..=n).filter(|&q| q != p).all(|q| {
        let q_bit = (q - 1) as u64;
        family
            .iter()
            .any(|code| code.bit(p_bit) != code.bit(q_bit))
    })
}

/// A family passes iff every element is distinguished against every other.
pub fn has_all_distinguished(family: &Family, n: usize) -> bool {
    (1..=n).all(|p| is_distinguished(family, p, n))
}

/// Owns the output artifact for one run: truncated at creation, appended in
/// batches, one rendered family per line. The only component performing I/O.
pub struct BatchWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl BatchWriter {
    /// Creates (truncating) the artifact at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Filters `pending` through [`has_all_distinguished`], appends the
    /// survivors, clears the list, and returns how many passed. A call with
    /// an empty list is a no-op.
    pub fn flush_batch(&mut self, pending: &mut Vec<Family>, n: usize) -> io::Result<usize> {
        if pending.is_empty() {
            return Ok(0);
        }
        let batch = pending.len();
        let mut passed = 0usize;
        for family in pending.iter() {
            if has_all_distinguished(family, n) {
                writeln!(self.out, "{}", render_family(family, n))?;
                passed += 1;
            }
        }
        pending.clear();
        tracing::debug!(batch, passed, "flushed batch");
        Ok(passed)
    }

    /// Flushes and releases the artifact, returning its path.
    pub fn finish(mut self) -> io::Result<PathBuf> {
        self.out.flush()?;
        Ok(self.path)
    }
}
