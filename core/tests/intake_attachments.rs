use proposal_core::error::CoreError;
use proposal_core::intake::attachments::{
    collect_dir, extension_of, is_allowed, partition_batch, Attachment,
    UNSUPPORTED_UPLOAD_NOTICE,
};
use proposal_core::intake::draft::{IntakeDraft, MAX_TEXT_CHARS};

fn names(draft: &IntakeDraft) -> Vec<&str> {
    draft
        .attachments()
        .iter()
        .map(|a| a.filename.as_str())
        .collect()
}

#[test]
fn extension_match_is_case_insensitive_on_last_segment() {
    assert_eq!(extension_of("Deck.PPTX"), "pptx");
    assert_eq!(extension_of("archive.pdf.zip"), "zip");
    assert!(is_allowed("brief.DOCX"));
    assert!(is_allowed("x.tar.pdf"));
    assert!(!is_allowed("notes.pdf.exe"));
    assert!(!is_allowed("trailing."));
}

#[test]
fn name_without_dot_is_its_own_extension() {
    assert_eq!(extension_of("README"), "readme");
    assert!(is_allowed("pdf"));
    assert!(is_allowed("DOCX"));
    assert!(!is_allowed("README"));

    let mut draft = IntakeDraft::new();
    let outcome = draft
        .add_files(vec![Attachment::new("pdf", b"%PDF".to_vec())])
        .unwrap();
    assert_eq!(outcome.added, 1);
    assert_eq!(names(&draft), vec!["pdf"]);
    assert_eq!(draft.attachments()[0].mime_type(), "application/pdf");
}

#[test]
fn mixed_batch_adds_only_allowed_files() {
    let mut draft = IntakeDraft::new();
    let outcome = draft
        .add_files(vec![Attachment::new("a.pdf", b"%PDF".to_vec()), Attachment::new("b.exe", b"MZ".to_vec())])
        .unwrap();
    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.rejected, vec!["b.exe".to_string()]);
    assert_eq!(names(&draft), vec!["a.pdf"]);
}

#[test]
fn batch_without_allowed_files_is_rejected_whole() {
    let mut draft = IntakeDraft::new();
    draft.add_files(vec![Attachment::new("keep.doc", b"d".to_vec())]).unwrap();

    let err = draft
        .add_files(vec![Attachment::new("b.exe", b"MZ".to_vec())])
        .unwrap_err();
    match err {
        CoreError::Validation(msg) => assert_eq!(msg, UNSUPPORTED_UPLOAD_NOTICE),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(names(&draft), vec!["keep.doc"]);
}

#[test]
fn accepted_files_append_in_order_without_dedup() {
    let mut draft = IntakeDraft::new();
    draft
        .add_files(vec![Attachment::new("one.pdf", vec![1]), Attachment::new("two.ppt", vec![2])])
        .unwrap();
    draft
        .add_files(vec![
            Attachment::new("one.pdf", vec![3]),
            Attachment::new("skip.txt", vec![4]),
            Attachment::new("three.DOCX", vec![5]),
        ])
        .unwrap();
    assert_eq!(names(&draft), vec!["one.pdf", "two.ppt", "one.pdf", "three.DOCX"]);
}

#[test]
fn partition_accepts_exactly_the_allowed_subset() {
    let candidates = [
        "a.pdf", "b.PDF", "c.ppt", "d.pptx", "e.doc", "f.docx", "g.txt", "h", "i.pdfx", "j.Doc",
    ];
    let batch = candidates
        .iter()
        .map(|n| Attachment::new(*n, Vec::new()))
        .collect();
    let p = partition_batch(batch);
    let accepted: Vec<&str> = p.accepted.iter().map(|a| a.filename.as_str()).collect();
    assert_eq!(accepted, vec!["a.pdf", "b.PDF", "c.ppt", "d.pptx", "e.doc", "f.docx", "j.Doc"]);
    assert_eq!(p.rejected, vec!["g.txt", "h", "i.pdfx"]);
}

#[test]
fn remove_file_drops_one_and_ignores_bad_index() {
    let mut draft = IntakeDraft::new();
    draft
        .add_files(vec![
            Attachment::new("a.pdf", vec![]),
            Attachment::new("b.pdf", vec![]),
            Attachment::new("c.pdf", vec![]),
        ])
        .unwrap();

    assert!(draft.remove_file(3).is_none());
    assert_eq!(draft.attachments().len(), 3);

    let removed = draft.remove_file(1).unwrap();
    assert_eq!(removed.filename, "b.pdf");
    assert_eq!(names(&draft), vec!["a.pdf", "c.pdf"]);

    for _ in 0..2 {
        draft.remove_file(0);
    }
    assert!(draft.remove_file(0).is_none());
    assert!(draft.attachments().is_empty());
}

#[test]
fn text_is_capped_at_limit() {
    let mut draft = IntakeDraft::new();
    let short = draft.set_text("hello");
    assert!(!short.truncated);
    assert_eq!(draft.counter_label(), "5/2000");

    let long: String = "é".repeat(MAX_TEXT_CHARS + 10);
    let update = draft.set_text(&long);
    assert!(update.truncated);
    assert_eq!(update.accepted_chars, MAX_TEXT_CHARS);
    assert_eq!(draft.char_count(), MAX_TEXT_CHARS);

    let exact: String = "x".repeat(MAX_TEXT_CHARS);
    assert!(!draft.set_text(&exact).truncated);
}

#[test]
fn blank_draft_detection_ignores_whitespace() {
    let mut draft = IntakeDraft::new();
    assert!(draft.is_blank());
    draft.set_text("   \n\t");
    assert!(draft.is_blank());
    draft.add_files(vec![Attachment::new("a.pdf", vec![])]).unwrap();
    assert!(draft.is_submittable());
    draft.clear();
    assert!(draft.is_blank());
}

#[test]
fn collect_dir_reads_files_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.docx"), b"bb").unwrap();
    std::fs::write(dir.path().join("a.pdf"), b"a").unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("nested").join("c.txt"), b"c").unwrap();

    let batch = collect_dir(dir.path()).unwrap();
    let got: Vec<&str> = batch.iter().map(|a| a.filename.as_str()).collect();
    assert_eq!(got, vec!["a.pdf", "b.docx", "c.txt"]);
    assert_eq!(batch[1].content, b"bb");

    let mut draft = IntakeDraft::new();
    let outcome = draft.add_files(batch).unwrap();
    assert_eq!(outcome.added, 2);
    assert_eq!(outcome.rejected, vec!["c.txt".to_string()]);
}

#[test]
fn attachment_fingerprint_and_mime() {
    let a = Attachment::new("deck.pptx", b"abc".to_vec());
    assert_eq!(
        a.sha256_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert!(a.mime_type().contains("presentationml"));
    assert_eq!(Attachment::new("x.pdf", vec![]).mime_type(), "application/pdf");
}
