
use schemagen_core::{
    ArrayKind, Catalog, CatalogError, DefaultValue, Field, FieldType, Primitive, SchemaKind,
    SchemaRef,
};
use test_helpers::*;

const DOCUMENT: &str = r#"{
  "enums": [
    {
      "name": "Shape",
      "description": "Kind of shape",
      "parent_schema": "Marker",
      "protobuf_enum_name": "Type",
      "values": [
        { "name": "CUBE", "value": 0, "description": "A cube" },
        { "name": "SPHERE", "value": 1 }
      ]
    }
  ],
  "messages": [
    {
      "name": "Marker",
      "description": "A marker",
      "fields": [
        { "name": "shape", "description": "Shape", "type": { "enum": "Shape" } },
        { "name": "points", "description": "Points", "type": { "nested": "Point" }, "array": true },
        { "name": "scale", "description": "Scale", "type": { "primitive": "float64" }, "array": 3, "protobuf_field_number": 7 },
        { "name": "alpha", "description": "Alpha", "type": { "primitive": "float64" }, "default": 1 }
      ]
    },
    {
      "name": "Point",
      "description": "A point",
      "ros_equivalent": "geometry_msgs/Point",
      "fields": [
        { "name": "x", "description": "x", "type": { "primitive": "float64" } }
      ]
    }
  ]
}"#;

#[test]
fn from_json_parses_document() {
    let catalog = Catalog::from_json(DOCUMENT).expect("catalog should load");

    assert_eq!(catalog.len(), 3);
    let marker = catalog.message("Marker").expect("Marker should exist");
    assert_eq!(marker.fields.len(), 4);
    assert_eq!(marker.fields[0].ty, FieldType::Enum("Shape".to_string()));
    assert_eq!(marker.fields[1].array, Some(ArrayKind::Variable));
    assert_eq!(marker.fields[2].array, Some(ArrayKind::Fixed(3)));
    assert_eq!(marker.fields[2].protobuf_field_number, Some(7));
    assert_eq!(marker.fields[3].default, Some(DefaultValue::Number(1.0)));
    assert_eq!(
        catalog.message("Point").expect("Point should exist").ros_equivalent.as_deref(),
        Some("geometry_msgs/Point")
    );

    let shape = catalog.enum_schema("Shape").expect("Shape should exist");
    assert_eq!(shape.values[0].description.as_deref(), Some("A cube"));
    assert_eq!(shape.values[1].description, None);
}

#[test]
fn iteration_is_sorted_messages_then_enums() {
    let catalog = Catalog::from_json(DOCUMENT).expect("catalog should load");
    let names: Vec<_> = catalog.schemas().map(|s| (s.kind(), s.name())).collect();
    assert_eq!(
        names,
        vec![
            (SchemaKind::Message, "Marker"),
            (SchemaKind::Message, "Point"),
            (SchemaKind::Enum, "Shape"),
        ]
    );
}

#[test]
fn schema_lookup_covers_both_kinds() {
    let catalog = Catalog::from_json(DOCUMENT).expect("catalog should load");
    assert!(matches!(catalog.schema("Point"), Some(SchemaRef::Message(_))));
    assert!(matches!(catalog.schema("Shape"), Some(SchemaRef::Enum(_))));
    assert!(catalog.schema("Missing").is_none());
    assert_eq!(catalog.enums_of("Marker").count(), 1);
    assert_eq!(catalog.enums_of("Point").count(), 0);
}

#[test]
fn array_false_is_rejected() {
    let doc = r#"{ "messages": [ { "name": "A", "description": "a", "fields": [
        { "name": "x", "description": "x", "type": { "primitive": "string" }, "array": false }
    ] } ] }"#;
    let err = Catalog::from_json(doc).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)), "{err}");
}

#[test]
fn unknown_primitive_is_rejected() {
    let doc = r#"{ "messages": [ { "name": "A", "description": "a", "fields": [
        { "name": "x", "description": "x", "type": { "primitive": "int64" } }
    ] } ] }"#;
    assert!(matches!(
        Catalog::from_json(doc),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn duplicate_names_are_rejected() {
    let err = Catalog::new(vec![message("A", vec![]), message("A", vec![])], vec![]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateMessage { name } if name == "A"));

    let err = Catalog::new(
        vec![message("A", vec![])],
        vec![enum_schema("E", "A", &[("X", 0)]), enum_schema("E", "A", &[("X", 0)])],
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateEnum { name } if name == "E"));
}

#[test]
fn message_and_enum_cannot_share_a_name() {
    let err = Catalog::new(
        vec![message("Mode", vec![])],
        vec![enum_schema("Mode", "Mode", &[("A", 0)])],
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::NameClash { ref name } if name == "Mode"));
    assert_eq!(
        err.to_string(),
        "name 'Mode' is used by both a message and an enum"
    );

    let doc = r#"{
      "enums": [{ "name": "Mode", "description": "", "parent_schema": "Mode", "protobuf_enum_name": "Mode", "values": [] }],
      "messages": [{ "name": "Mode", "description": "", "fields": [] }]
    }"#;
    assert!(matches!(
        Catalog::from_json(doc),
        Err(CatalogError::NameClash { .. })
    ));
}

#[test]
fn unknown_parent_is_rejected() {
    let catalog = Catalog::new(
        vec![message("A", vec![])],
        vec![enum_schema("E", "Missing", &[("X", 0)])],
    )
    .expect("indexing should succeed");
    let err = catalog.validate().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnknownParent { enum_name, parent } if enum_name == "E" && parent == "Missing"
    ));
}

#[test]
fn unknown_references_are_rejected() {
    let catalog = Catalog::new(vec![message("A", vec![nested_field("b", "B")])], vec![])
        .expect("indexing should succeed");
    let err = catalog.validate().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnknownReference { kind: SchemaKind::Message, ref name, .. } if name == "B"
    ));
    assert_eq!(
        err.to_string(),
        "field 'A.b' references unknown message 'B'"
    );

    let catalog = Catalog::new(vec![message("A", vec![enum_field("e", "E")])], vec![])
        .expect("indexing should succeed");
    assert!(matches!(
        catalog.validate(),
        Err(CatalogError::UnknownReference { kind: SchemaKind::Enum, .. })
    ));
}

#[test]
fn multi_line_schema_description_is_rejected() {
    let mut a = message("A", vec![float_field("x")]);
    a.description = "first\nsecond".to_string();
    let catalog = Catalog::new(vec![a], vec![]).expect("indexing should succeed");
    assert!(matches!(
        catalog.validate(),
        Err(CatalogError::MultiLineDescription { name }) if name == "A"
    ));
}

#[test]
fn multi_line_field_description_is_allowed() {
    let mut field = float_field("x");
    field.description = "first\n\nsecond".to_string();
    let catalog = Catalog::new(vec![message("A", vec![field])], vec![])
        .expect("indexing should succeed");
    catalog.validate().expect("multi-line field descriptions are valid");
}

#[test]
fn comment_terminator_in_description_is_rejected() {
    let mut field = float_field("x");
    field.description = "ends a comment */ early".to_string();
    let catalog = Catalog::new(vec![message("A", vec![field])], vec![])
        .expect("indexing should succeed");
    assert!(matches!(
        catalog.validate(),
        Err(CatalogError::InvalidDescription { name }) if name == "A.x"
    ));
}

#[test]
fn enum_shape_is_checked() {
    let catalog = Catalog::new(vec![message("A", vec![])], vec![enum_schema("E", "A", &[])])
        .expect("indexing should succeed");
    assert!(matches!(
        catalog.validate(),
        Err(CatalogError::EmptyEnum { name }) if name == "E"
    ));

    let catalog = Catalog::new(
        vec![message("A", vec![])],
        vec![enum_schema("E", "A", &[("X", 0), ("X", 1)])],
    )
    .expect("indexing should succeed");
    assert!(matches!(
        catalog.validate(),
        Err(CatalogError::DuplicateEnumValue { value, .. }) if value == "X"
    ));
}

#[test]
fn field_shape_is_checked() {
    let catalog = Catalog::new(
        vec![message("A", vec![float_field("x"), float_field("x")])],
        vec![],
    )
    .expect("indexing should succeed");
    assert!(matches!(
        catalog.validate(),
        Err(CatalogError::DuplicateField { field, .. }) if field == "x"
    ));

    let catalog = Catalog::new(
        vec![message("A", vec![float_field("x").with_array(ArrayKind::Fixed(0))])],
        vec![],
    )
    .expect("indexing should succeed");
    assert!(matches!(
        catalog.validate(),
        Err(CatalogError::InvalidArrayLength { .. })
    ));
}

#[test]
fn cycles_are_reported_with_path() {
    let catalog = Catalog::new(
        vec![
            message("A", vec![nested_field("b", "B")]),
            message("B", vec![nested_field("c", "C")]),
            message("C", vec![nested_field("a", "A"), float_field("x")]),
        ],
        vec![],
    )
    .expect("indexing should succeed");
    let err = catalog.validate().unwrap_err();
    match err {
        CatalogError::Cycle { path } => assert_eq!(path, vec!["A", "B", "C", "A"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn shared_nested_message_is_not_a_cycle() {
    let catalog = Catalog::new(
        vec![
            message("A", vec![nested_field("b", "B"), nested_field("c", "C")]),
            message("B", vec![nested_field("c", "C")]),
            message("C", vec![Field::primitive("s", "s", Primitive::String)]),
        ],
        vec![],
    )
    .expect("indexing should succeed");
    catalog.validate().expect("diamond is acyclic");
}
