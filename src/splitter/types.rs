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

use std::fmt;
use std::path::PathBuf;

use crate::error::Error;

/// Half-open page range `[start, end)` over zero-based page indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// One-based inclusive bounds, as shown to users and used in file names
    pub fn display_bounds(&self) -> (usize, usize) {
        (self.start + 1, self.end)
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, last) = self.display_bounds();
        write!(f, "pages {}-{}", first, last)
    }
}

/// A chunk that has been written to disk
#[derive(Debug, Clone)]
pub struct ChunkOutput {
    pub range: PageRange,
    pub path: PathBuf,
}

/// An input that could not be fully split
#[derive(Debug)]
pub struct FailedSplit {
    pub input: PathBuf,
    /// Chunks already on disk when the error occurred
    pub written: Vec<ChunkOutput>,
    pub error: Error,
}

/// Outcome of splitting several input files
#[derive(Debug, Default)]
pub struct SplitReport {
    pub succeeded: Vec<(PathBuf, Vec<ChunkOutput>)>,
    pub failed: Vec<FailedSplit>,
}

impl SplitReport {
    /// Every chunk on disk, including those of inputs that later failed
    pub fn chunks_written(&self) -> usize {
        let complete: usize = self.succeeded.iter().map(|(_, chunks)| chunks.len()).sum();
        let partial: usize = self.failed.iter().map(|f| f.written.len()).sum();
        complete + partial
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
