// src/tests/render_tests/content_tests.rs

use std::thread;

use crate::tests::utils::SAMPLE_JSON;
use crate::{render_body, render_content, render_header, PageRenderer, Vorgang};

#[test]
fn content_is_header_blank_line_body() {
    let v = Vorgang::from_json(SAMPLE_JSON).unwrap();

    let content = render_content(&v).unwrap();
    let expected = format!("{}\n{}", render_header(&v).unwrap(), render_body(&v).unwrap());

    assert_eq!(content, expected);
    assert!(content.contains("+++\n\n# Beratungsverlauf\n"));
}

#[test]
fn rendering_does_not_touch_the_record() {
    let v = Vorgang::from_json(SAMPLE_JSON).unwrap();
    let before = v.clone();

    render_content(&v).unwrap();

    assert_eq!(v, before);
}

#[test]
fn renderer_can_be_shared_across_threads() {
    let renderer = PageRenderer::default();
    let v = Vorgang::from_json(SAMPLE_JSON).unwrap();
    let expected = renderer.content(&v).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| renderer.content(&v).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
