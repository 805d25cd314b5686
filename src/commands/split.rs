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

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::splitter::{self, ranges::validate_chunk_size};

/// Split every input into `output_dir`. Errors if any input failed, after
/// all inputs have been attempted.
pub fn execute(pdf_files: &[PathBuf], chunk_size: usize, output_dir: &Path) -> Result<()> {
    // A bad size aborts the run before any file is touched
    validate_chunk_size(chunk_size)?;

    let report = splitter::split_many(pdf_files, output_dir, chunk_size, |_, chunk| {
        println!("Saved chunk: {}", chunk.path.display());
    });

    info!(
        files = report.succeeded.len(),
        chunks = report.chunks_written(),
        "Splitting finished"
    );

    for failure in &report.failed {
        eprintln!(
            "Failed to split {}: {}",
            failure.input.display(),
            failure.error
        );
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} files could not be split",
            report.failed.len(),
            pdf_files.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::split_tests::tests::write_sample_pdf;
    use tempfile::TempDir;

    #[test]
    fn test_failed_input_fails_the_run_after_the_rest() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let broken = input_dir.path().join("broken.pdf");
        std::fs::write(&broken, b"not a pdf").unwrap();
        let good = input_dir.path().join("good.pdf");
        write_sample_pdf(&good, 3);

        let err = execute(&[broken, good], 2, output_dir.path()).unwrap_err();

        assert!(err.to_string().contains("1 of 2 files"));
        assert!(output_dir.path().join("good-pages-1-to-2.pdf").exists());
        assert!(output_dir.path().join("good-pages-3-to-3.pdf").exists());
    }

    #[test]
    fn test_all_inputs_split_is_success() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let good = input_dir.path().join("good.pdf");
        write_sample_pdf(&good, 3);

        execute(&[good], 5, output_dir.path()).unwrap();
        assert!(output_dir.path().join("good-pages-1-to-3.pdf").exists());
    }

    #[test]
    fn test_zero_chunk_size_aborts_before_any_input() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let good = input_dir.path().join("good.pdf");
        write_sample_pdf(&good, 3);

        assert!(execute(&[good], 0, output_dir.path()).is_err());
        assert_eq!(std::fs::read_dir(output_dir.path()).unwrap().count(), 0);
    }
}
