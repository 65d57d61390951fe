use serde_json::{Map, Value, json};
use story_engine::{Action, Animation, Element, ElementKind, EngineError, Page, Story, reduce};

// Helper: p1 = [background, e1, e2, e3], p2 = [background, e4]
// e2 and e4 share the media resource r1.
fn create_test_story() -> Story {
    let p1 = Page::with_id("p1")
        .with_element(
            Element::with_id("e1", ElementKind::Text).with_geometry(10.0, 20.0, 100.0, 40.0),
        )
        .with_element(
            Element::with_id("e2", ElementKind::Image)
                .with_prop("resource", json!({ "id": "r1", "src": "one.jpg" })),
        )
        .with_element(Element::with_id("e3", ElementKind::Shape));
    let p2 = Page::with_id("p2").with_element(
        Element::with_id("e4", ElementKind::Image)
            .with_prop("resource", json!({ "id": "r1", "src": "one.jpg" })),
    );
    Story::from_pages(vec![p1, p2])
}

fn element_ids(story: &Story, page_id: &str) -> Vec<String> {
    story.page(page_id).unwrap().element_ids().cloned().collect()
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|id| id.to_string()).collect()
}

fn properties(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("properties must be an object"),
    }
}

fn add(story: &Story, elements: Vec<Element>) -> Story {
    reduce(
        story,
        Action::AddElements {
            elements,
            page_id: None,
            update_selection: true,
        },
    )
    .unwrap()
}

fn select(story: &Story, list: &[&str]) -> Story {
    reduce(story, Action::SetSelectedElements { element_ids: ids(list) }).unwrap()
}

fn update(story: &Story, targets: Option<&[&str]>, patch: Value) -> Story {
    reduce(
        story,
        Action::UpdateElements {
            element_ids: targets.map(ids),
            properties: properties(patch),
        },
    )
    .unwrap()
}

fn delete(story: &Story, targets: Option<&[&str]>) -> Story {
    reduce(story, Action::DeleteElements { element_ids: targets.map(ids) }).unwrap()
}

fn set_background(story: &Story, element_id: &str) -> Story {
    reduce(
        story,
        Action::SetBackgroundElement {
            element_id: Some(element_id.to_string()),
        },
    )
    .unwrap()
}

#[test]
fn test_add_elements_appends_and_selects() {
    let story = create_test_story();
    let next = add(
        &story,
        vec![
            Element::with_id("n1", ElementKind::Text),
            Element::with_id("n2", ElementKind::Sticker),
        ],
    );

    assert_eq!(element_ids(&next, "p1"), ids(&["p1-background", "e1", "e2", "e3", "n1", "n2"]));
    assert_eq!(next.selection.ids(), ids(&["n1", "n2"]).as_slice());
}

#[test]
fn test_add_elements_without_selection_update() {
    let story = select(&create_test_story(), &["e1"]);
    let next = reduce(
        &story,
        Action::AddElements {
            elements: vec![Element::with_id("n1", ElementKind::Text)],
            page_id: None,
            update_selection: false,
        },
    )
    .unwrap();

    assert!(next.page("p1").unwrap().contains("n1"));
    assert_eq!(next.selection.ids(), ids(&["e1"]).as_slice());
}

#[test]
fn test_add_elements_to_other_page_leaves_selection() {
    let story = select(&create_test_story(), &["e1"]);
    let next = reduce(
        &story,
        Action::AddElements {
            elements: vec![Element::with_id("n1", ElementKind::Text)],
            page_id: Some("p2".to_string()),
            update_selection: true,
        },
    )
    .unwrap();

    assert_eq!(element_ids(&next, "p2"), ids(&["p2-background", "e4", "n1"]));
    assert_eq!(next.selection.ids(), ids(&["e1"]).as_slice());
}

#[test]
fn test_add_elements_skips_duplicates() {
    let story = create_test_story();
    let next = add(
        &story,
        vec![
            Element::with_id("e1", ElementKind::Video),
            Element::with_id("n1", ElementKind::Text),
            Element::with_id("n1", ElementKind::Shape),
        ],
    );

    assert_eq!(element_ids(&next, "p1"), ids(&["p1-background", "e1", "e2", "e3", "n1"]));
    assert_eq!(next.page("p1").unwrap().element("e1").unwrap().kind, ElementKind::Text);
    assert_eq!(next.page("p1").unwrap().element("n1").unwrap().kind, ElementKind::Text);
}

#[test]
fn test_add_elements_drops_unknown_group() {
    let story = create_test_story();
    let mut element = Element::with_id("n1", ElementKind::Text);
    element.group_id = Some("ghost".to_string());

    let next = add(&story, vec![element]);
    assert_eq!(next.page("p1").unwrap().element("n1").unwrap().group_id, None);
}

#[test]
fn test_add_background_element_replaces_default() {
    let story = create_test_story();
    let mut photo = Element::with_id("photo", ElementKind::Image);
    photo.is_background = true;

    let next = add(&story, vec![photo]);
    let page = next.page("p1").unwrap();

    assert_eq!(element_ids(&next, "p1"), ids(&["photo", "e1", "e2", "e3"]));
    assert!(page.elements[0].is_background);
    assert!(!page.elements[0].is_default_background);
    // The placeholder is kept for later
    let parked = page.default_background_element.as_ref().unwrap();
    assert_eq!(parked.id, "p1-background");
}

#[test]
fn test_delete_elements_by_id() {
    let story = create_test_story();
    let next = delete(&story, Some(&["e1", "e3", "unknown"]));
    assert_eq!(element_ids(&next, "p1"), ids(&["p1-background", "e2"]));
}

#[test]
fn test_delete_elements_uses_selection() {
    let story = select(&create_test_story(), &["e1", "e2"]);
    let next = delete(&story, None);

    assert_eq!(element_ids(&next, "p1"), ids(&["p1-background", "e3"]));
    assert!(next.selection.is_empty());
}

#[test]
fn test_delete_default_background_is_refused() {
    let story = create_test_story();
    let next = delete(&story, Some(&["p1-background"]));
    assert_eq!(next, story);
}

#[test]
fn test_delete_real_background_restores_default() {
    let story = set_background(&create_test_story(), "e2");
    assert_eq!(element_ids(&story, "p1"), ids(&["e2", "e1", "e3"]));

    let next = delete(&story, Some(&["e2"]));
    let page = next.page("p1").unwrap();

    assert_eq!(element_ids(&next, "p1"), ids(&["p1-background", "e1", "e3"]));
    assert!(page.elements[0].is_default_background);
    assert!(page.default_background_element.is_none());
}

#[test]
fn test_delete_elements_cleans_animations() {
    let story = reduce(
        &create_test_story(),
        Action::AddAnimations {
            animations: vec![
                Animation::new("a1", "fade-in", ids(&["e1"])),
                Animation::new("a2", "bounce", ids(&["e1", "e3"])),
                Animation::new("a3", "pulse", Vec::new()),
            ],
        },
    )
    .unwrap();

    let next = delete(&story, Some(&["e1"]));
    let animations = &next.page("p1").unwrap().animations;

    let remaining: Vec<&str> = animations.iter().map(|a| a.id.as_str()).collect();
    // a1 lost its only target; a3 never had one and is left alone
    assert_eq!(remaining, vec!["a2", "a3"]);
    assert_eq!(animations[0].targets, ids(&["e3"]));
}

#[test]
fn test_delete_elements_removes_empty_groups() {
    let story = reduce(
        &create_test_story(),
        Action::AddGroup {
            group_id: "g1".to_string(),
            name: "Title".to_string(),
            is_locked: false,
        },
    )
    .unwrap();
    let story = update(&story, Some(&["e1", "e3"]), json!({ "groupId": "g1" }));

    let next = delete(&story, Some(&["e1"]));
    assert!(next.page("p1").unwrap().groups.contains_key("g1"));

    let next = delete(&next, Some(&["e3"]));
    assert!(next.page("p1").unwrap().groups.is_empty());
}

#[test]
fn test_update_elements_merges_properties() {
    let story = create_test_story();
    let next = update(
        &story,
        Some(&["e1"]),
        json!({ "x": 50, "content": "Hello", "id": "other", "isBackground": true }),
    );

    let element = next.page("p1").unwrap().element("e1").unwrap();
    assert_eq!(element.x, 50.0);
    assert_eq!(element.y, 20.0);
    assert_eq!(element.prop("content"), Some(&json!("Hello")));
    // Identity and background flags are protected
    assert!(!element.is_background);
    assert!(next.page("p1").unwrap().element("other").is_none());
}

#[test]
fn test_update_elements_uses_selection() {
    let story = select(&create_test_story(), &["e1", "e3"]);
    let next = update(&story, None, json!({ "opacity": 40 }));

    let page = next.page("p1").unwrap();
    assert_eq!(page.element("e1").unwrap().opacity, 40.0);
    assert_eq!(page.element("e3").unwrap().opacity, 40.0);
    assert_eq!(page.element("e2").unwrap().opacity, 100.0);
}

#[test]
fn test_update_elements_refuses_unknown_group() {
    let story = create_test_story();
    let next = update(&story, Some(&["e1"]), json!({ "groupId": "ghost", "x": 1 }));

    let element = next.page("p1").unwrap().element("e1").unwrap();
    assert_eq!(element.group_id, None);
    assert_eq!(element.x, 1.0);
}

#[test]
fn test_update_background_keeps_flag() {
    let story = set_background(&create_test_story(), "e2");
    let next = update(&story, Some(&["e2"]), json!({ "isBackground": false, "x": 5 }));

    let page = next.page("p1").unwrap();
    assert!(page.elements[0].is_background);
    assert_eq!(page.elements[0].x, 5.0);
}

#[test]
fn test_update_elements_with_invalid_value_fails() {
    let story = create_test_story();
    let result = reduce(
        &story,
        Action::UpdateElements {
            element_ids: Some(ids(&["e1"])),
            properties: properties(json!({ "opacity": "opaque" })),
        },
    );
    assert!(matches!(result, Err(EngineError::InvalidProperties { .. })));
}

#[test]
fn test_update_elements_by_resource_id_spans_pages() {
    let story = create_test_story();
    let next = reduce(
        &story,
        Action::UpdateElementsByResourceId {
            id: "r1".to_string(),
            properties: properties(json!({ "src": "two.jpg", "id": "r2" })),
        },
    )
    .unwrap();

    let expected = json!({ "id": "r1", "src": "two.jpg" });
    assert_eq!(next.page("p1").unwrap().element("e2").unwrap().prop("resource"), Some(&expected));
    assert_eq!(next.page("p2").unwrap().element("e4").unwrap().prop("resource"), Some(&expected));
    // Elements without that resource are untouched
    assert_eq!(next.page("p1").unwrap().element("e1"), story.page("p1").unwrap().element("e1"));
}

#[test]
fn test_arrange_element_clamps_above_background() {
    let story = create_test_story();

    let next = reduce(
        &story,
        Action::ArrangeElement {
            element_id: Some("e3".to_string()),
            position: 0,
            group_id: None,
        },
    )
    .unwrap();
    assert_eq!(element_ids(&next, "p1"), ids(&["p1-background", "e3", "e1", "e2"]));

    let next = reduce(
        &story,
        Action::ArrangeElement {
            element_id: Some("e1".to_string()),
            position: 99,
            group_id: None,
        },
    )
    .unwrap();
    assert_eq!(element_ids(&next, "p1"), ids(&["p1-background", "e2", "e3", "e1"]));
}

#[test]
fn test_arrange_selected_element() {
    let story = select(&create_test_story(), &["e2"]);
    let next = reduce(
        &story,
        Action::ArrangeElement {
            element_id: None,
            position: 1,
            group_id: None,
        },
    )
    .unwrap();
    assert_eq!(element_ids(&next, "p1"), ids(&["p1-background", "e2", "e1", "e3"]));

    // Ambiguous with several elements selected
    let story = select(&story, &["e2", "e3"]);
    let next = reduce(
        &story,
        Action::ArrangeElement {
            element_id: None,
            position: 1,
            group_id: None,
        },
    )
    .unwrap();
    assert_eq!(next, story);
}

#[test]
fn test_arrange_background_is_pinned() {
    let story = create_test_story();
    let next = reduce(
        &story,
        Action::ArrangeElement {
            element_id: Some("p1-background".to_string()),
            position: 2,
            group_id: None,
        },
    )
    .unwrap();
    assert_eq!(next, story);
}
