//! Dataset loader for the department directory.
//!
//! The backing store is a static JSON object mapping display names to
//! record attributes. Loading happens exactly once at process start;
//! every fault here is startup-fatal (see [`LoadError`]).

use crate::domain::assign_slugs;
use crate::error::{LoadError, LoadResult};
use crate::models::Department;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Decode the department mapping from a byte source.
///
/// Keys become display names, values the record attributes; records are
/// returned sorted by name ascending with unique slugs assigned. The
/// `BTreeMap` decode step is what fixes the slug claim order, so the
/// same dataset always yields the same slugs.
pub fn load_from_reader(reader: impl Read) -> LoadResult<Vec<Department>> {
    let raw: BTreeMap<String, Department> = serde_json::from_reader(reader)?;

    if raw.is_empty() {
        return Err(LoadError::EmptyDataset);
    }

    let mut departments = Vec::with_capacity(raw.len());
    for (name, mut dept) in raw {
        if name.trim().is_empty() {
            return Err(LoadError::EmptyName);
        }
        dept.name = name;
        departments.push(dept);
    }

    assign_slugs(&mut departments);
    Ok(departments)
}

/// Load the department mapping from a file on disk.
pub fn load_from_path(path: impl AsRef<Path>) -> LoadResult<Vec<Department>> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}
