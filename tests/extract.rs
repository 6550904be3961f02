// tests/extract.rs
//! End-to-end extraction against fake TrID/ExifTool scripts.

mod common;

use std::time::{Duration, Instant};

use common::ToolWorkspace;
use metaextract::{ErrorKind, MetaExtractError, MetaExtractor, Metadata, Options, TagValue, ToolError};

#[test]
fn empty_path_is_no_file_specified() {
    let failure = MetaExtractor::default().extract("").unwrap_err();
    assert_eq!(failure.kind(), ErrorKind::NoFileSpecified);
    assert!(matches!(failure.error(), MetaExtractError::NoFileSpecified));
    assert_eq!(failure.metadata(), &Metadata::default());
}

#[test]
fn nonexistent_path_is_file_not_found() {
    let workspace = ToolWorkspace::new();
    let failure = MetaExtractor::default().extract(workspace.path().join("nonexistent_file")).unwrap_err();
    assert_eq!(failure.kind(), ErrorKind::FileNotFound);
    assert_eq!(failure.to_string(), failure.error().to_string());
}

#[cfg(unix)]
mod with_fake_tools {
    use super::*;

    #[test]
    fn extracts_an_mp3() {
        let workspace = ToolWorkspace::new();
        workspace
            .trid_reports(&[
                " 83.3% (.MP3) MP3 audio (ID3 v2.x tag) (5/1)",
                "        Mime type       : audio/mpeg",
                " 16.6% (.MP3) MP3 audio (1/1)",
            ])
            .exiftool_reports(r#"[{"SourceFile":"sample.mp3","FileType":"MP3","Duration":"0:00:01 (approx)"}]"#);
        let file = workspace.write_file("sample.mp3", b"ID3\x03\x00");

        let meta = workspace.extractor().extract(&file).expect("extracts");

        assert_eq!(meta.name(), "sample.mp3");
        assert_eq!(meta.extension(), ".mp3");
        assert_eq!(meta.size().bytes(), 5);
        assert!(!meta.ext_mismatch());
        assert_eq!(meta.types().len(), 2);
        assert_eq!(meta.top_type().map(|t| t.mime_type.as_str()), Some("audio/mpeg"));
        assert_eq!(meta.tag("FileType"), Some(&TagValue::from("MP3")));
    }

    #[test]
    fn flags_a_pdf_named_doc() {
        let workspace = ToolWorkspace::new();
        workspace
            .trid_reports(&[" 100.0% (.PDF) Adobe Portable Document Format (5000/1/1)"])
            .exiftool_reports(r#"[{"FileType":"PDF"}]"#);
        let file = workspace.write_file("sample.doc", b"%PDF-1.4\n");

        let meta = workspace.extractor().extract(&file).expect("extracts");
        assert_eq!(meta.extension(), ".doc");
        assert!(meta.ext_mismatch());
        assert_eq!(meta.tags()["FileType"], "PDF");
    }

    #[test]
    fn extension_without_dot_matches() {
        let workspace = ToolWorkspace::new();
        workspace.trid_reports(&[" 90.0% (doc) Word document (10/1)"]);

        let doc = workspace.write_file("sample.doc", b"\xd0\xcf\x11\xe0");
        let txt = workspace.write_file("sample.txt", b"\xd0\xcf\x11\xe0");
        let extractor = workspace.extractor();

        assert!(!extractor.extract(&doc).unwrap().ext_mismatch());
        assert!(extractor.extract(&txt).unwrap().ext_mismatch());
    }

    #[test]
    fn jpeg_alternatives() {
        let workspace = ToolWorkspace::new();
        workspace.trid_reports(&[" 100.0% (.JPG/JPEG) JFIF JPEG Bitmap (4003/3)"]);

        let jpeg = workspace.write_file("photo.JPEG", b"\xff\xd8\xff");
        let png = workspace.write_file("photo.png", b"\xff\xd8\xff");
        let extractor = workspace.extractor();

        let meta = extractor.extract(&jpeg).unwrap();
        assert_eq!(meta.extension(), ".jpeg");
        assert!(!meta.ext_mismatch());
        assert!(extractor.extract(&png).unwrap().ext_mismatch());
    }

    #[test]
    fn unknown_file_without_extension() {
        let workspace = ToolWorkspace::new();
        let file = workspace.write_file("empty", &[0u8; 1044]);

        let meta = workspace.extractor().extract(&file).expect("nothing extracted is not an error");
        assert_eq!(meta.extension(), "");
        assert!(!meta.ext_mismatch());
        assert!(meta.types().is_empty());
        assert!(meta.tags().is_empty());
        assert!(meta.time().modified.is_some());
        assert!(meta.time().accessed.is_some());
    }

    #[test]
    fn trid_timeout_returns_stat_fields() {
        let workspace = ToolWorkspace::new();
        workspace.trid_script("exec sleep 5");
        let file = workspace.write_file("slow.bin", b"1234");
        let extractor = MetaExtractor::new(Options { trid_timeout: Duration::from_millis(200), ..workspace.options() });

        let started = Instant::now();
        let failure = extractor.extract(&file).unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(4));
        assert_eq!(failure.kind(), ErrorKind::TypeIdentification);
        assert!(failure.error().tool_error().is_some_and(ToolError::is_timeout));
        assert_eq!(failure.metadata().name(), "slow.bin");
        assert_eq!(failure.metadata().size().bytes(), 4);
        assert!(failure.metadata().types().is_empty());
    }

    #[test]
    fn exiftool_error_returns_types() {
        let workspace = ToolWorkspace::new();
        workspace
            .trid_reports(&[" 100.0% (.PNG) Portable Network Graphics (16000/1)"])
            .exiftool_script("echo '[{\"Error\":\"File format error\"}]'\nexit 1");
        let file = workspace.write_file("broken.png", b"\x89PNG");

        let (meta, error) = workspace.extractor().extract(&file).unwrap_err().into_parts();
        assert_eq!(error.kind(), ErrorKind::TagExtraction);
        assert!(matches!(error.tool_error(), Some(ToolError::FileError { .. })));
        assert_eq!(meta.types().len(), 1);
        assert!(!meta.ext_mismatch());
    }

    #[test]
    fn matches_are_requested_and_capped() {
        let workspace = ToolWorkspace::new();
        let args = workspace.path().join("trid-args");
        workspace.trid_script(&format!(
            "echo \"$2\" > '{}'\necho ' 40.0% (.A) a (1/1)'\necho ' 30.0% (.B) b (1/1)'\necho ' 30.0% (.C) c (1/1)'",
            args.display()
        ));
        let file = workspace.write_file("x.a", b"a");
        let extractor = MetaExtractor::new(Options { trid_matches: 2, ..workspace.options() });

        let meta = extractor.extract(&file).unwrap();
        assert_eq!(meta.types().len(), 2);
        assert_eq!(std::fs::read_to_string(args).unwrap().trim(), "-n:2");
    }

    #[test]
    fn batch_keeps_input_order() {
        let workspace = ToolWorkspace::new();
        let first = workspace.write_file("one.bin", b"1");
        let missing = workspace.path().join("data").join("missing.bin");
        let last = workspace.write_file("three.bin", b"333");

        let results = workspace.extractor().extract_batch([&first, &missing, &last]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().name(), "one.bin");
        assert_eq!(results[1].as_ref().unwrap_err().kind(), ErrorKind::FileNotFound);
        assert_eq!(results[2].as_ref().unwrap().size().bytes(), 3);
    }

    #[test]
    fn shared_across_threads() {
        let workspace = ToolWorkspace::new();
        workspace.trid_reports(&[" 100.0% (.TXT) Text (1/1)"]);
        let files: Vec<_> = (0..4).map(|i| workspace.write_file(&format!("f{i}.txt"), b"hi")).collect();
        let extractor = workspace.extractor();

        std::thread::scope(|scope| {
            for file in &files {
                let extractor = &extractor;
                scope.spawn(move || {
                    let meta = extractor.extract(file).unwrap();
                    assert!(!meta.ext_mismatch());
                });
            }
        });
    }

    #[test]
    fn result_serializes_to_json() {
        let workspace = ToolWorkspace::new();
        workspace
            .trid_reports(&[" 100.0% (.PDF) Adobe Portable Document Format (5000/1/1)"])
            .exiftool_reports(r#"[{"PageCount":3}]"#);
        let file = workspace.write_file("report.pdf", b"%PDF");

        let meta = workspace.extractor().extract(&file).unwrap();
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["ext_mismatch"], false);
        assert_eq!(json["tags"]["PageCount"], 3);
        assert!(json["time"]["modified"].is_string());
    }
}
