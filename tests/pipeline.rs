//! End-to-end pipeline tests: render snapshot -> canonical tree -> JSON ->
//! rebuilt scene graph. Everything here runs on synthetic snapshots; the
//! browser-backed test at the bottom needs Chrome and is ignored by default.

use dom2scene::extract::extract;
use dom2scene::plugin::{self, InboundMessage, OutboundMessage};
use dom2scene::scene::{FontCatalog, FontResolver, SceneNode};
use dom2scene::{Color, Fill, Kind, RenderElement};

fn red_card() -> RenderElement {
    RenderElement::new("div")
        .with_rect(0.0, 0.0, 100.0, 40.0)
        .with_style("background-color", "rgb(255, 0, 0)")
        .with_child(
            RenderElement::new("span")
                .with_rect(8.0, 10.0, 20.0, 16.0)
                .with_inner_text("Hi")
                .with_style("color", "rgb(0, 0, 0)")
                .with_style("font-size", "14px"),
        )
}

#[test]
fn test_extract_red_card() {
    let tree = extract(&red_card()).expect("visible root should extract");

    assert!(matches!(tree.kind, Kind::Frame));
    assert_eq!((tree.width, tree.height), (100, 40));
    assert_eq!(tree.fills, vec![Fill::solid(Color::new(1.0, 0.0, 0.0))]);

    assert_eq!(tree.children.len(), 1);
    let child = &tree.children[0];
    assert!(child.children.is_empty());
    match &child.kind {
        Kind::Text(attrs) => assert_eq!(attrs.text, "Hi"),
        other => panic!("expected TEXT child, got {:?}", other),
    }
    assert!(child.x >= 0 && child.x <= tree.width);
}

#[tokio::test]
async fn test_round_trip_to_scene() {
    let tree = extract(&red_card()).unwrap();
    let payload = tree.to_json().unwrap();

    let fonts = FontResolver::new(FontCatalog::default());
    let scene = plugin::import(&payload, &fonts).await.unwrap();

    // Root canvas frame plus the frame and its text child
    assert_eq!(scene.count, 3);
    assert_eq!((scene.root.width, scene.root.height), (100.0, 40.0));

    let card = scene.root.children[0].as_frame().expect("card should be a frame");
    assert_eq!(card.fills, vec![Fill::solid(Color::new(1.0, 0.0, 0.0))]);
    match &card.children[0] {
        SceneNode::Text(text) => assert_eq!(text.characters, "Hi"),
        other => panic!("expected text, got {:?}", other),
    }
}

#[tokio::test]
async fn test_mixed_content_survives_the_boundary() {
    let snapshot = RenderElement::new("div")
        .with_rect(0.0, 0.0, 300.0, 60.0)
        .with_child(
            RenderElement::new("div")
                .with_rect(10.0, 10.0, 200.0, 40.0)
                .with_inner_text("Hello world")
                .with_text_run("Hello", dom2scene::Rect::new(10.0, 10.0, 40.0, 14.0))
                .with_child(
                    RenderElement::new("b")
                        .with_rect(54.0, 10.0, 40.0, 14.0)
                        .with_inner_text("world"),
                ),
        );

    let tree = extract(&snapshot).unwrap();
    let container = &tree.children[0];
    // Collapsed to one text node carrying the full rendered text
    assert_eq!(container.children.len(), 1);
    match &container.children[0].kind {
        Kind::Text(attrs) => assert_eq!(attrs.text, "Hello world"),
        other => panic!("expected TEXT, got {:?}", other),
    }

    let fonts = FontResolver::new(FontCatalog::default());
    let reply = plugin::handle_message(
        InboundMessage::Import { data: tree.to_json().unwrap() },
        &fonts,
    )
    .await;
    assert_eq!(reply, OutboundMessage::Success { count: 3 });
}

#[tokio::test]
async fn test_icon_button_keeps_vector_and_label() {
    let snapshot = RenderElement::new("button")
        .with_rect(0.0, 0.0, 120.0, 36.0)
        .with_inner_text("Save")
        .with_text_run("Save", dom2scene::Rect::new(40.0, 10.0, 34.0, 16.0))
        .with_style("color", "rgb(255, 255, 255)")
        .with_child(
            RenderElement::new("svg")
                .with_rect(12.0, 10.0, 16.0, 16.0)
                .with_attribute("viewBox", "0 0 16 16")
                .with_style("fill", "currentColor"),
        );

    let tree = extract(&snapshot).unwrap();
    // The text tag is forced to a frame so the vector survives
    assert!(matches!(tree.kind, Kind::Frame));
    assert_eq!(tree.children.len(), 2);
    match &tree.children[0].kind {
        Kind::Vector { svg_string } => assert!(svg_string.contains("fill=")),
        other => panic!("expected VECTOR, got {:?}", other),
    }

    let fonts = FontResolver::new(FontCatalog::default());
    let scene = plugin::import(&tree.to_json().unwrap(), &fonts).await.unwrap();
    assert_eq!(scene.count, 4);
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_live_page_extraction() {
    use dom2scene::{BrowserSession, LaunchOptions};

    let session = BrowserSession::launch(LaunchOptions::new().headless(true))
        .expect("Failed to launch browser");

    session
        .navigate("data:text/html,<html><body><div style='width:100px;height:40px;background:rgb(255,0,0)'><span>Hi</span></div></body></html>")
        .expect("Failed to navigate");
    session.wait_for_navigation().expect("Failed to wait for navigation");

    let tree = session.extract_scene_tree().expect("Failed to extract");

    let json = tree.to_json().expect("Failed to serialize");
    assert!(json.contains("\"kind\":\"FRAME\""));
    assert!(json.contains("Hi"));
}
