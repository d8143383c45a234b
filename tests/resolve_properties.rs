use pizzeria::resolve::{resolve_field, Field, ImageRef, ImageResolver, Record};
use serde_json::{json, Value};

const BASE: &str = "https://pizza.example.com";
const PLACEHOLDER: &str = "/static/placeholder.svg";

fn resolver() -> ImageResolver {
    ImageResolver::new(BASE, PLACEHOLDER)
}

fn resolve(value: Value) -> String {
    resolver().resolve_value(Some(&value))
}

fn as_record(value: Value) -> Record {
    value.as_object().cloned().expect("object")
}

#[test]
fn test_first_present_candidate_wins_regardless_of_other_matches() {
    let candidates = ["a", "b", "c"];
    let cases = [
        (json!({"a": 1, "b": 2, "c": 3}), Some(json!(1))),
        (json!({"c": 3, "b": 2}), Some(json!(2))),
        (json!({"c": 3}), Some(json!(3))),
        (json!({"a": null, "c": 3}), Some(json!(3))),
        (json!({"z": 1}), None),
    ];

    for (value, expected) in cases {
        let record = as_record(value);
        assert_eq!(resolve_field(Some(&record), &candidates).cloned(), expected);
    }
}

#[test]
fn test_absent_record_is_absent_for_every_field() {
    for field in Field::ALL {
        assert_eq!(resolve_field(None, field.candidates()), None);
    }
}

#[test]
fn test_candidate_lists_are_stable() {
    assert_eq!(Field::Id.candidates(), ["id", "pizza_id", "_id", "pk"]);
    assert_eq!(Field::Name.candidates(), ["name", "nev", "title"]);
    assert_eq!(Field::Description.candidates(), ["description", "leiras", "desc"]);
    assert_eq!(Field::Price.candidates(), ["price", "ar", "cost"]);
    assert_eq!(
        Field::Image.candidates(),
        ["image", "imageUrl", "image_url", "kep", "img", "photo"]
    );
}

#[test]
fn test_image_resolution_examples() {
    assert_eq!(resolver().resolve(ImageRef::Absent), PLACEHOLDER);
    assert_eq!(resolve(json!("foo.jpg")), format!("{BASE}/foo.jpg"));
    assert_eq!(resolve(json!("/foo.jpg")), format!("{BASE}/foo.jpg"));
    assert_eq!(resolve(json!("https://x.test/a.png")), "https://x.test/a.png");
    assert_eq!(resolve(json!([])), PLACEHOLDER);
    assert_eq!(resolve(json!(["a.png", "b.png"])), resolve(json!("a.png")));
    assert_eq!(resolve(json!({"photo": "a.png"})), resolve(json!("a.png")));
    assert_eq!(
        resolve(json!({"url": "u.png", "photo": "p.png"})),
        resolve(json!("u.png"))
    );
    assert_eq!(resolve(json!({})), PLACEHOLDER);
}

#[test]
fn test_resolved_urls_are_never_empty() {
    let inputs = [
        json!(null),
        json!(""),
        json!(" "),
        json!(0),
        json!(false),
        json!([[]]),
        json!({"url": {}}),
        json!([{"src": ""}]),
    ];
    for input in inputs {
        assert!(!resolve(input).is_empty());
    }
}

#[test]
fn test_resolved_absolute_urls_are_fixed_points() {
    let inputs = [
        json!("https://x.test/a.png"),
        json!("relative/b.png"),
        json!({"img": "/c.png"}),
        json!(null),
    ];
    for input in inputs {
        let once = resolve(input);
        assert_eq!(resolve(json!(once.clone())), once);
    }
}

#[test]
fn test_image_field_then_image_resolver() {
    let record = as_record(json!({
        "imageUrl": null,
        "kep": [{"path": "uploads/songoku.jpg"}],
        "photo": "ignored.png"
    }));
    let url = resolver().resolve_value(Field::Image.resolve(Some(&record)));
    assert_eq!(url, format!("{BASE}/uploads/songoku.jpg"));
}
