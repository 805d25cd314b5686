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

use lopdf::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::error::{Error, Result};
use crate::splitter::ranges::{base_name, chunk_file_name, plan_chunks, validate_chunk_size};
use crate::splitter::types::{ChunkOutput, FailedSplit, PageRange, SplitReport};

/// Split one PDF into files of at most `chunk_size` pages each, written to `output_dir`
pub fn split_pdf_into_chunks(
    input: &Path,
    output_dir: &Path,
    chunk_size: usize,
) -> Result<Vec<ChunkOutput>> {
    let mut outputs = Vec::new();
    split_pdf_with(input, output_dir, chunk_size, |chunk| outputs.push(chunk.clone()))?;
    Ok(outputs)
}

/// Like [`split_pdf_into_chunks`], handing each chunk to `on_chunk` as soon as
/// its file is on disk. Returns the number of chunks written.
pub fn split_pdf_with<F>(
    input: &Path,
    output_dir: &Path,
    chunk_size: usize,
    mut on_chunk: F,
) -> Result<usize>
where
    F: FnMut(&ChunkOutput),
{
    validate_chunk_size(chunk_size)?;

    let source = Document::load(input).map_err(|source| Error::PdfRead {
        path: input.to_path_buf(),
        source,
    })?;

    let total_pages = source.get_pages().len();
    let ranges = plan_chunks(total_pages, chunk_size)?;
    let base_name = base_name(input);

    let mut written = 0;
    for range in ranges {
        let path = output_dir.join(chunk_file_name(&base_name, &range));
        let mut chunk = extract_range(&source, &range);
        write_document(&mut chunk, &path)?;

        info!(
            pages = %range,
            page_count = range.len(),
            path = %path.display(),
            "Chunk written"
        );
        on_chunk(&ChunkOutput { range, path });
        written += 1;
    }

    Ok(written)
}

/// Split each input in turn. A failing input is recorded, with any chunks it
/// had already written, and skipped so the remaining inputs are still processed.
pub fn split_many<F>(
    inputs: &[PathBuf],
    output_dir: &Path,
    chunk_size: usize,
    mut on_chunk: F,
) -> SplitReport
where
    F: FnMut(&Path, &ChunkOutput),
{
    let mut report = SplitReport::default();

    for input in inputs {
        let mut written = Vec::new();
        let result = split_pdf_with(input, output_dir, chunk_size, |chunk| {
            on_chunk(input.as_path(), chunk);
            written.push(chunk.clone());
        });

        match result {
            Ok(_) => report.succeeded.push((input.clone(), written)),
            Err(error) => {
                error!("Skipping {}: {}", input.display(), error);
                report.failed.push(FailedSplit {
                    input: input.clone(),
                    written,
                    error,
                });
            }
        }
    }

    report
}

/// Copy of `source` keeping only the pages in `range`
fn extract_range(source: &Document, range: &PageRange) -> Document {
    debug_assert!(!range.is_empty());
    let mut chunk = source.clone();

    // get_pages() is keyed by one-based page number
    let doomed: Vec<u32> = chunk
        .get_pages()
        .keys()
        .copied()
        .filter(|&number| {
            let index = number as usize - 1;
            index < range.start || index >= range.end
        })
        .collect();

    if !doomed.is_empty() {
        chunk.delete_pages(&doomed);
        chunk.prune_objects();
    }

    chunk
}

fn write_document(document: &mut Document, path: &Path) -> Result<()> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    document
        .save_to(&mut writer)
        .map_err(|e| write_err(std::io::Error::other(e)))?;
    writer.flush().map_err(write_err)?;

    Ok(())
}
