use std::{fs::File, path::Path};

use memmap::{Mmap, MmapOptions};

use crate::error::Result;

/// Raw bytes of a volume file, owned or memory mapped
pub enum DataSource {
    Vec(Vec<u8>),
    Mmap(Mmap),
}

impl DataSource {
    pub fn get_slice(&self) -> &[u8] {
        match self {
            DataSource::Vec(v) => v.as_slice(),
            DataSource::Mmap(m) => &m[..],
        }
    }

    pub fn from_vec(vec: Vec<u8>) -> DataSource {
        DataSource::Vec(vec)
    }

    /// Map file into memory, read only
    pub fn from_file<P>(path: P) -> Result<DataSource>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path.as_ref())?;

        // Empty files cannot be mapped on every platform
        if file.metadata()?.len() == 0 {
            return Ok(DataSource::Vec(vec![]));
        }

        let mmap = unsafe { MmapOptions::new().map(&file)? };
        Ok(DataSource::Mmap(mmap))
    }
}

impl std::fmt::Debug for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Vec(v) => write!(f, "DataSource::Vec({} bytes)", v.len()),
            DataSource::Mmap(m) => write!(f, "DataSource::Mmap({} bytes)", m.len()),
        }
    }
}
