// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;

use crate::error::{Error, Result};
use crate::splitter::types::PageRange;

/// Partition `total_pages` into consecutive ranges of at most `chunk_size` pages
pub fn plan_chunks(total_pages: usize, chunk_size: usize) -> Result<Vec<PageRange>> {
    validate_chunk_size(chunk_size)?;

    let ranges = (0..total_pages)
        .step_by(chunk_size)
        .map(|start| PageRange {
            start,
            end: (start + chunk_size).min(total_pages),
        })
        .collect();

    Ok(ranges)
}

pub fn validate_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(Error::InvalidInput(
            "chunk size must be a positive number of pages".to_string(),
        ));
    }
    Ok(())
}

/// File name with its last extension removed: `a.b.pdf` -> `a.b`
pub fn base_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name,
    }
}

pub fn chunk_file_name(base_name: &str, range: &PageRange) -> String {
    let (first, last) = range.display_bounds();
    format!("{}-pages-{}-to-{}.pdf", base_name, first, last)
}
