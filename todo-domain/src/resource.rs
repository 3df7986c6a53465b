//! Resource-to-JSON serialization.
//!
//! Any type exposing an ordered attribute map can be rendered either alone
//! or as a `{"data": [...]}` collection. Key order follows map insertion
//! order (`serde_json` is built with `preserve_order`), so output is stable
//! byte-for-byte across calls with identical input.

use serde_json::{Map, Value};

/// A resource that can be rendered as a JSON attribute map.
pub trait Serializable {
    /// The attribute map, in the order keys should appear on the wire.
    fn attributes(&self) -> Map<String, Value>;
}

/// JSON document for one resource: its attribute map, verbatim.
pub fn single<T: Serializable>(resource: &T) -> Value {
    Value::Object(resource.attributes())
}

/// JSON document for a collection: `{"data": [...]}` in input order.
pub fn collection<T: Serializable>(resources: &[T]) -> Value {
    let data: Vec<Value> = resources
        .iter()
        .map(|r| Value::Object(r.attributes()))
        .collect();
    let mut map = Map::new();
    map.insert("data".to_string(), Value::Array(data));
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Status, Todo};

    #[test]
    fn single_renders_keys_in_declaration_order() {
        let todo = Todo::with_identifier("1234".into(), "Write talk", Status::Completed);
        let body = serde_json::to_string(&single(&todo)).unwrap();
        assert_eq!(
            body,
            r#"{"identifier":"1234","title":"Write talk","status":"Completed"}"#
        );
    }

    #[test]
    fn single_is_byte_stable_across_calls() {
        let todo = Todo::new("Task", Status::Outstanding);
        let a = serde_json::to_vec(&single(&todo)).unwrap();
        let b = serde_json::to_vec(&single(&todo)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_round_trips_the_attribute_triple() {
        let todo = Todo::new("Present talk", Status::Outstanding);
        let body = serde_json::to_vec(&single(&todo)).unwrap();
        let parsed: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["identifier"], todo.identifier().as_str());
        assert_eq!(parsed["title"], "Present talk");
        assert_eq!(parsed["status"], "Outstanding");
    }

    #[test]
    fn collection_wraps_data_in_input_order() {
        let todos = vec![
            Todo::with_identifier("1".into(), "A", Status::Outstanding),
            Todo::with_identifier("2".into(), "B", Status::Completed),
        ];
        let doc = collection(&todos);
        let data = doc["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["identifier"], "1");
        assert_eq!(data[1]["identifier"], "2");
    }

    #[test]
    fn empty_collection_is_empty_data_array() {
        let doc = collection::<Todo>(&[]);
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"data":[]}"#);
    }
}
