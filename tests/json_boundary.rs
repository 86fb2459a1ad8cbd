use serde_json::json;
use topo_views::prelude::*;

fn hypergraph() -> Result<ColoredRegistry<String, AttrMap>, ViewError> {
    let mut reg = ColoredRegistry::new();
    let edge = SetKey::new(["x".to_string(), "y".to_string()]);
    reg.insert_keyed(edge.clone(), 1, 0, attr_map([("w", 0.5)]))?;
    reg.insert_keyed(edge, 1, 3, attr_map([("w", 1.5)]))?;
    Ok(reg)
}

#[test]
fn decoded_pairs_address_colored_records() -> Result<(), Box<dyn std::error::Error>> {
    let reg = hypergraph()?;
    let view = ColoredHyperEdgeView::new(&reg);
    let query = MultiKeyInput::<String>::from_json(&json!([["y", "x"], 3]))?;
    assert_eq!(view.get(query)?, &attr_map([("w", 1.5)]));
    let elements: KeyInput<String, SetKey<String>> = KeyInput::from_json(&json!(["x", "y"]))?;
    assert!(view.contains(elements));
    Ok(())
}

#[test]
fn malformed_json_is_an_invalid_key_shape() {
    for bad in [json!([["x", "y"], "three"]), json!(["x", 3]), json!({"x": 1})] {
        let err = MultiKeyInput::<String>::from_json(&bad).unwrap_err();
        assert!(matches!(err, ViewError::InvalidKeyShape(_)), "{bad}");
    }
    let err = KeyInput::<String, SetKey<String>>::from_json(&json!([["nested"]])).unwrap_err();
    assert!(matches!(err, ViewError::InvalidKeyShape(_)));
}

#[test]
fn keys_serialize_as_plain_label_lists() -> Result<(), Box<dyn std::error::Error>> {
    let set: SetKey<u32> = serde_json::from_value(json!([3, 1, 2, 1]))?;
    assert_eq!(serde_json::to_value(&set)?, json!([1, 2, 3]));
    let seq: SeqKey<u32> = serde_json::from_value(json!([3, 1, 3]))?;
    assert_eq!(serde_json::to_value(&seq)?, json!([3, 1, 3]));
    Ok(())
}
