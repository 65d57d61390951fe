use serde_json::{Map, Value, json};
use story_engine::{Action, Element, ElementKind, EngineError, Page, Paint, Rgba, Story, reduce};

// Helper: three empty pages, the first one current
fn create_test_story() -> Story {
    Story::from_pages(vec![
        Page::with_id("p1").with_element(Element::with_id("e1", ElementKind::Text)),
        Page::with_id("p2"),
        Page::with_id("p3"),
    ])
}

fn page_ids(story: &Story) -> Vec<&str> {
    story.pages.iter().map(|page| page.id.as_str()).collect()
}

fn properties(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("properties must be an object"),
    }
}

fn set_current(story: &Story, page_id: &str) -> Story {
    reduce(
        story,
        Action::SetCurrentPage {
            page_id: page_id.to_string(),
        },
    )
    .unwrap()
}

#[test]
fn test_add_page_appends_and_becomes_current() {
    let story = create_test_story();
    let story = reduce(
        &story,
        Action::SetSelectedElements {
            element_ids: vec!["e1".to_string()],
        },
    )
    .unwrap();
    assert_eq!(story.selection.len(), 1);

    let next = reduce(
        &story,
        Action::AddPage {
            page: Page::with_id("p4"),
            position: None,
        },
    )
    .unwrap();

    assert_eq!(page_ids(&next), vec!["p1", "p2", "p3", "p4"]);
    assert_eq!(next.current.as_deref(), Some("p4"));
    // Selection belonged to the old page
    assert!(next.selection.is_empty());
}

#[test]
fn test_add_page_at_position() {
    let story = create_test_story();

    let next = reduce(
        &story,
        Action::AddPage {
            page: Page::with_id("p0"),
            position: Some(0),
        },
    )
    .unwrap();
    assert_eq!(page_ids(&next), vec!["p0", "p1", "p2", "p3"]);

    // Out-of-range positions append
    let next = reduce(
        &story,
        Action::AddPage {
            page: Page::with_id("p9"),
            position: Some(42),
        },
    )
    .unwrap();
    assert_eq!(page_ids(&next), vec!["p1", "p2", "p3", "p9"]);
}

#[test]
fn test_add_page_with_existing_id_is_ignored() {
    let story = create_test_story();
    let next = reduce(
        &story,
        Action::AddPage {
            page: Page::with_id("p2"),
            position: None,
        },
    )
    .unwrap();
    assert_eq!(next, story);
}

#[test]
fn test_add_page_without_background_gets_default() {
    let story = create_test_story();
    let page = Page::empty("p4").with_element(Element::with_id("t1", ElementKind::Text));

    let next = reduce(
        &story,
        Action::AddPage {
            page,
            position: None,
        },
    )
    .unwrap();

    let added = next.page("p4").unwrap();
    assert_eq!(added.elements.len(), 2);
    assert_eq!(added.elements[0].id, "p4-background");
    assert!(added.elements[0].is_background);
    assert!(added.elements[0].is_default_background);
    assert_eq!(added.elements[1].id, "t1");
}

#[test]
fn test_add_page_keeps_only_one_background() {
    let story = create_test_story();
    let mut photo = Element::with_id("photo", ElementKind::Image);
    photo.is_background = true;
    let mut stray = Element::with_id("stray", ElementKind::Shape);
    stray.is_background = true;
    let page = Page::empty("p4").with_element(stray).with_element(photo);

    let next = reduce(
        &story,
        Action::AddPage {
            page,
            position: None,
        },
    )
    .unwrap();

    let added = next.page("p4").unwrap();
    let backgrounds: Vec<_> = added.elements.iter().filter(|e| e.is_background).collect();
    assert_eq!(backgrounds.len(), 1);
    assert_eq!(added.elements[0].id, "stray");
}

#[test]
fn test_delete_current_page_moves_to_following() {
    let story = set_current(&create_test_story(), "p2");

    let next = reduce(
        &story,
        Action::DeletePage {
            page_id: Some("p2".to_string()),
        },
    )
    .unwrap();

    assert_eq!(page_ids(&next), vec!["p1", "p3"]);
    assert_eq!(next.current.as_deref(), Some("p3"));
}

#[test]
fn test_delete_last_current_page_moves_to_preceding() {
    let story = set_current(&create_test_story(), "p3");

    // No id means the current page
    let next = reduce(&story, Action::DeletePage { page_id: None }).unwrap();

    assert_eq!(page_ids(&next), vec!["p1", "p2"]);
    assert_eq!(next.current.as_deref(), Some("p2"));
}

#[test]
fn test_delete_other_page_keeps_current() {
    let story = create_test_story();
    let next = reduce(
        &story,
        Action::DeletePage {
            page_id: Some("p3".to_string()),
        },
    )
    .unwrap();

    assert_eq!(page_ids(&next), vec!["p1", "p2"]);
    assert_eq!(next.current.as_deref(), Some("p1"));
}

#[test]
fn test_delete_only_page_is_refused() {
    let story = Story::from_pages(vec![Page::with_id("solo")]);

    let next = reduce(
        &story,
        Action::DeletePage {
            page_id: Some("solo".to_string()),
        },
    )
    .unwrap();

    assert_eq!(next, story);
    assert_eq!(next.pages.len(), 1);
}

#[test]
fn test_update_page_merges_properties() {
    let story = create_test_story();

    let next = reduce(
        &story,
        Action::UpdatePage {
            page_id: Some("p2".to_string()),
            properties: properties(json!({
                "id": "hijacked",
                "backgroundColor": { "color": { "r": 0, "g": 0, "b": 0 } },
                "pageTemplateType": "cover"
            })),
        },
    )
    .unwrap();

    let page = next.page("p2").unwrap();
    assert_eq!(page.background_color, Paint::solid(Rgba::BLACK));
    assert_eq!(page.props.get("pageTemplateType"), Some(&json!("cover")));
    assert!(next.page("hijacked").is_none());

    // null removes a key
    let next = reduce(
        &next,
        Action::UpdatePage {
            page_id: Some("p2".to_string()),
            properties: properties(json!({ "pageTemplateType": null })),
        },
    )
    .unwrap();
    assert!(next.page("p2").unwrap().props.get("pageTemplateType").is_none());
}

#[test]
fn test_update_page_with_invalid_value_fails() {
    let story = create_test_story();

    let result = reduce(
        &story,
        Action::UpdatePage {
            page_id: None,
            properties: properties(json!({ "backgroundColor": 12 })),
        },
    );

    assert!(matches!(result, Err(EngineError::InvalidProperties { .. })));
}

#[test]
fn test_update_page_removing_groups_ungroups_elements() {
    let story = reduce(
        &create_test_story(),
        Action::AddGroup {
            group_id: "g1".to_string(),
            name: "Heading".to_string(),
            is_locked: false,
        },
    )
    .unwrap();
    let story = reduce(
        &story,
        Action::AddElements {
            elements: vec![Element::with_id("e2", ElementKind::Text)],
            page_id: None,
            update_selection: false,
        },
    )
    .unwrap();
    let story = reduce(
        &story,
        Action::UpdateElements {
            element_ids: Some(vec!["e1".to_string(), "e2".to_string()]),
            properties: properties(json!({ "groupId": "g1" })),
        },
    )
    .unwrap();

    for groups in [json!(null), json!({})] {
        let next = reduce(
            &story,
            Action::UpdatePage {
                page_id: None,
                properties: properties(json!({ "groups": groups })),
            },
        )
        .unwrap();
        let page = next.page("p1").unwrap();
        assert!(page.groups.is_empty());
        assert!(page.elements.iter().all(|element| element.group_id.is_none()));
    }

    // Replacing the map keeps members of groups that are still there
    let next = reduce(
        &story,
        Action::UpdatePage {
            page_id: None,
            properties: properties(json!({ "groups": { "g1": { "name": "Renamed" } } })),
        },
    )
    .unwrap();
    let page = next.page("p1").unwrap();
    assert_eq!(page.groups.get("g1").unwrap().name, "Renamed");
    assert_eq!(page.element("e2").unwrap().group_id.as_deref(), Some("g1"));
}

#[test]
fn test_update_page_cannot_replace_parked_background() {
    let story = create_test_story();

    let next = reduce(
        &story,
        Action::UpdatePage {
            page_id: None,
            properties: properties(json!({
                "defaultBackgroundElement": { "id": "x", "type": "shape", "groupId": "nope" }
            })),
        },
    )
    .unwrap();

    assert_eq!(next, story);
}

#[test]
fn test_arrange_page() {
    let story = create_test_story();

    let next = reduce(
        &story,
        Action::ArrangePage {
            page_id: "p1".to_string(),
            position: 2,
        },
    )
    .unwrap();
    assert_eq!(page_ids(&next), vec!["p2", "p3", "p1"]);

    let next = reduce(
        &next,
        Action::ArrangePage {
            page_id: "p3".to_string(),
            position: 0,
        },
    )
    .unwrap();
    assert_eq!(page_ids(&next), vec!["p3", "p2", "p1"]);
    // Reordering never changes the current page
    assert_eq!(next.current.as_deref(), Some("p1"));
}

#[test]
fn test_set_current_page() {
    let story = create_test_story();
    let story = reduce(
        &story,
        Action::SelectElement {
            element_id: "e1".to_string(),
        },
    )
    .unwrap();

    // Unknown pages are ignored
    let next = set_current(&story, "nope");
    assert_eq!(next, story);

    let next = set_current(&story, "p2");
    assert_eq!(next.current.as_deref(), Some("p2"));
    assert!(next.selection.is_empty());
}
