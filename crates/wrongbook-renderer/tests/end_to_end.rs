//! End-to-end render: JSON record in, self-contained document out.

use std::fs;

use wrongbook_record::Notebook;
use wrongbook_renderer::{GroupingMode, RenderOptions, render_notebook};

#[test]
fn missing_asset_in_embed_mode_degrades_to_placeholder() {
    // One question points at a file that does not exist; embedding must
    // substitute a "not found" placeholder and still produce the document.
    let notebook = Notebook::from_json(
        r#"{
            "student_id": "001",
            "name": "测试",
            "questions": [{
                "question_id": "0",
                "exam_name": "2025-03-16 Homework",
                "question_image_path": "definitely_missing_asset.jpg",
                "student_answer_text": "B,C,D",
                "knowledge_points": ["momentum", ""],
                "review_count": 0,
                "created_at": "2025-03-19 09:16:11"
            }]
        }"#,
    )
    .unwrap();

    let options = RenderOptions {
        embed_images: true,
        grouping: GroupingMode::Tabbed,
        generated_at: "2025-03-19 09:16:11".to_owned(),
    };
    let html = render_notebook(&notebook, &options);

    // The placeholder names the failure and the offending file.
    assert!(html.contains("not%20found"));
    assert!(html.contains("definitely_missing_asset.jpg"));
    // The rest of the card is unaffected.
    assert!(html.contains("测试"));
    assert!(html.contains("<p>B,C,D</p>"));
    assert!(html.contains(">momentum</span>"));

    // The document writes out and round-trips intact.
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("notebook.html");
    fs::write(&output, &html).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), html);
}

#[test]
fn embedded_asset_is_inlined_as_data_uri() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("q0.png");
    fs::write(&image, [137u8, 80, 78, 71, 0, 0, 0, 0, 0, 0]).unwrap();

    let json = format!(
        r#"{{"name": "Alice", "questions": [{{"question_id": "0", "question_image_path": {}}}]}}"#,
        serde_json::to_string(image.to_str().unwrap()).unwrap(),
    );
    let notebook = Notebook::from_json(&json).unwrap();

    let options = RenderOptions {
        embed_images: true,
        ..RenderOptions::default()
    };
    let html = render_notebook(&notebook, &options);

    assert!(html.contains("data:image/png;base64,"));
    // The original path must not leak into an embedded document.
    assert!(!html.contains("q0.png"));
}

#[test]
fn external_mode_links_by_path_with_client_fallback() {
    let notebook = Notebook::from_json(
        r#"{"name": "Alice", "questions": [{"question_image_path": "figs/q0.jpg"}]}"#,
    )
    .unwrap();

    let html = render_notebook(&notebook, &RenderOptions::default());

    assert!(html.contains(r#"src="figs/q0.jpg""#));
    assert!(html.contains("onerror="));
    assert!(html.contains("image%20not%20found"));
    assert!(!html.contains("base64,"));
}

#[test]
fn both_layouts_render_the_same_records() {
    let json = r#"{"name": "Alice", "questions": [
        {"question_id": "1", "exam_name": "B"},
        {"question_id": "2", "exam_name": "A"},
        {"question_id": "3"}
    ]}"#;
    let notebook = Notebook::from_json(json).unwrap();

    let tabbed = render_notebook(
        &notebook,
        &RenderOptions {
            grouping: GroupingMode::Tabbed,
            ..RenderOptions::default()
        },
    );
    let flat = render_notebook(
        &notebook,
        &RenderOptions {
            grouping: GroupingMode::Flat,
            ..RenderOptions::default()
        },
    );

    for html in [&tabbed, &flat] {
        assert!(html.contains("Question 1"));
        assert!(html.contains("Question 2"));
        assert!(html.contains("Question 3"));
        assert!(html.contains("Unclassified"));
    }
    // Tabbed keeps first-seen order; flat sorts, putting A before B.
    assert!(tabbed.find(">B</button>").unwrap() < tabbed.find(">A</button>").unwrap());
    assert!(flat.find(">A</div>").unwrap() < flat.find(">B</div>").unwrap());
}
