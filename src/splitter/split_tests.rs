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

#[cfg(test)]
pub(crate) mod tests {
    use lopdf::{dictionary, Document, Object, Stream};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    use crate::error::ErrorKind;
    use crate::splitter::pdf::{split_many, split_pdf_into_chunks, split_pdf_with};
    use crate::splitter::types::ChunkOutput;

    fn marker(page: usize) -> String {
        format!("page-marker-{:04}", page)
    }

    /// Writes a PDF whose page N draws the text `page-marker-000N`
    pub(crate) fn write_sample_pdf(path: &Path, pages: usize) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut kids: Vec<Object> = Vec::new();
        for page in 1..=pages {
            let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", marker(page));
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages as i64,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    /// Markers of every page in the file, in page order
    pub(crate) fn page_markers(path: &Path) -> Vec<String> {
        let doc = Document::load(path).unwrap();
        doc.get_pages()
            .values()
            .map(|&page_id| {
                let content = doc.get_page_content(page_id).unwrap();
                let text = String::from_utf8_lossy(&content);
                let start = text.find("page-marker-").unwrap();
                text[start..start + "page-marker-0000".len()].to_string()
            })
            .collect()
    }

    fn sample(dir: &TempDir, name: &str, pages: usize) -> PathBuf {
        let path = dir.path().join(name);
        write_sample_pdf(&path, pages);
        path
    }

    #[test]
    fn test_split_250_pages_into_three_files() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let input = sample(&input_dir, "manual.pdf", 250);

        let chunks = split_pdf_into_chunks(&input, output_dir.path(), 100).unwrap();

        let names: Vec<_> = chunks
            .iter()
            .map(|c| c.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "manual-pages-1-to-100.pdf",
                "manual-pages-101-to-200.pdf",
                "manual-pages-201-to-250.pdf",
            ]
        );
        for chunk in &chunks {
            assert!(chunk.path.exists());
            assert_eq!(chunk.path.parent().unwrap(), output_dir.path());
        }
        assert_eq!(page_markers(&chunks[2].path).len(), 50);
    }

    #[test]
    fn test_single_chunk_when_pages_equal_chunk_size() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let input = sample(&input_dir, "guide.pdf", 100);

        let chunks = split_pdf_into_chunks(&input, output_dir.path(), 100).unwrap();

        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].path.ends_with("guide-pages-1-to-100.pdf"));
        assert_eq!(page_markers(&chunks[0].path).len(), 100);
    }

    #[test]
    fn test_chunks_preserve_page_order_without_gaps() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let input = sample(&input_dir, "seven.pdf", 7);

        let chunks = split_pdf_into_chunks(&input, output_dir.path(), 3).unwrap();
        assert_eq!(chunks.len(), 3);

        let rebuilt: Vec<String> = chunks
            .iter()
            .flat_map(|c| page_markers(&c.path))
            .collect();
        let expected: Vec<String> = (1..=7).map(marker).collect();
        assert_eq!(rebuilt, expected);

        assert_eq!(page_markers(&chunks[1].path), vec![marker(4), marker(5), marker(6)]);
        assert_eq!(page_markers(&chunks[2].path), vec![marker(7)]);
    }

    #[test]
    fn test_zero_chunk_size_is_rejected_before_reading() {
        let output_dir = TempDir::new().unwrap();
        let err = split_pdf_into_chunks(Path::new("does-not-matter.pdf"), output_dir.path(), 0)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_invalid_pdf_is_a_read_error() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let input = input_dir.path().join("broken.pdf");
        std::fs::write(&input, b"this is not a pdf").unwrap();

        let err = split_pdf_into_chunks(&input, output_dir.path(), 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert!(err.to_string().contains("broken.pdf"));
    }

    #[test]
    fn test_missing_output_directory_is_a_write_error() {
        let input_dir = TempDir::new().unwrap();
        let input = sample(&input_dir, "small.pdf", 2);
        let missing = input_dir.path().join("no-such-dir");

        let err = split_pdf_into_chunks(&input, &missing, 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_split_many_continues_after_failure() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let broken = input_dir.path().join("broken.pdf");
        std::fs::write(&broken, b"%PDF-garbage").unwrap();
        let good = sample(&input_dir, "good.pdf", 5);

        let mut announced = Vec::new();
        let report = split_many(
            &[broken.clone(), good.clone()],
            output_dir.path(),
            2,
            |input, chunk| announced.push((input.to_path_buf(), chunk.path.clone())),
        );

        assert!(!report.is_success());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].input, broken);
        assert!(report.failed[0].written.is_empty());
        assert_eq!(report.succeeded.len(), 1);
        assert_eq!(report.succeeded[0].0, good);
        assert_eq!(report.chunks_written(), 3);
        assert_eq!(announced.len(), 3);
        assert!(announced.iter().all(|(input, _)| *input == good));
    }

    #[test]
    fn test_chunks_written_before_a_failure_are_reported() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let input = sample(&input_dir, "m.pdf", 4);
        // A directory where the second chunk should go makes its write fail
        std::fs::create_dir(output_dir.path().join("m-pages-3-to-4.pdf")).unwrap();

        let mut announced: Vec<ChunkOutput> = Vec::new();
        let err = split_pdf_with(&input, output_dir.path(), 2, |chunk| {
            announced.push(chunk.clone())
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert_eq!(announced.len(), 1);
        assert!(announced[0].path.ends_with("m-pages-1-to-2.pdf"));

        let report = split_many(&[input.clone()], output_dir.path(), 2, |_, _| {});
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].written.len(), 1);
        assert!(report.failed[0].written[0].path.exists());
        assert_eq!(
            page_markers(&report.failed[0].written[0].path),
            vec![marker(1), marker(2)]
        );
        assert_eq!(report.chunks_written(), 1);
    }
}
