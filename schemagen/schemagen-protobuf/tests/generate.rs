use prost_types::{FileDescriptorProto, field_descriptor_proto::Label};
use schemagen_catalog::{example_catalog, foxglove_catalog};
use schemagen_core::{
    Catalog, EnumSchema, EnumValue, Field, FieldType, MessageSchema, Primitive, RenderError,
    Renderer, SchemaRef,
};
use schemagen_protobuf::{ProtobufRenderer, field_numbers, generate_proto};

fn render(catalog: &Catalog, name: &str) -> String {
    let schema = catalog.schema(name).expect("schema should exist");
    generate_proto(catalog, schema).expect("rendering should succeed")
}

fn parse(name: &str, text: &str) -> FileDescriptorProto {
    protox_parse::parse(&format!("foxglove/{name}.proto"), text)
        .unwrap_or_else(|e| panic!("{name}.proto should parse: {e:?}\n{text}"))
}

#[test]
fn nested_message_file() {
    let catalog = example_catalog().expect("example catalog should load");
    let expected = "\
// Generated by https://github.com/foxglove/schemas

syntax = \"proto3\";

package foxglove;

// An example nested message
message NestedMessage {
  // An enum field
  fixed32 field_enum = 1;
}
";
    assert_eq!(render(&catalog, "NestedMessage"), expected);
}

#[test]
fn example_message_parses() {
    let catalog = example_catalog().expect("example catalog should load");
    let text = render(&catalog, "ExampleMessage");
    let file = parse("ExampleMessage", &text);

    assert_eq!(file.package(), "foxglove");
    assert_eq!(file.syntax(), "proto3");
    assert_eq!(
        file.dependency,
        vec![
            "foxglove/NestedMessage.proto",
            "google/protobuf/duration.proto",
            "google/protobuf/timestamp.proto",
        ]
    );

    let [message] = file.message_type.as_slice() else {
        panic!("expected exactly one message");
    };
    assert_eq!(message.name(), "ExampleMessage");
    assert_eq!(message.field.len(), 25);

    let [nested_enum] = message.enum_type.as_slice() else {
        panic!("expected exactly one nested enum");
    };
    assert_eq!(nested_enum.name(), "ExampleProtoEnum");
    let values: Vec<_> = nested_enum
        .value
        .iter()
        .map(|v| (v.name(), v.number()))
        .collect();
    assert_eq!(values, vec![("A", 0), ("B", 1)]);

    let first = &message.field[0];
    assert_eq!((first.name(), first.number()), ("field_duration", 1));
    let enum_field = &message.field[21];
    assert_eq!((enum_field.name(), enum_field.number()), ("field_enum", 22));
    assert!(enum_field.type_name().ends_with("ExampleProtoEnum"));

    let nested_array = &message.field[24];
    assert_eq!(nested_array.name(), "field_nested_array");
    assert_eq!(nested_array.number(), 50);
    assert_eq!(nested_array.label(), Label::Repeated);
    assert!(nested_array.type_name().ends_with("NestedMessage"));
}

#[test]
fn example_message_text_details() {
    let catalog = example_catalog().expect("example catalog should load");
    let text = render(&catalog, "ExampleMessage");

    assert!(text.contains(
        "  // An example enum\n  enum ExampleProtoEnum {\n    // Value A\n    A = 0;\n\n    // Value B\n    B = 1;\n  }\n"
    ));
    assert!(text.contains("  // uint32 field\n  fixed32 field_uint32 = 6;"));
    assert!(text.contains("  repeated google.protobuf.Timestamp field_time_array = 9;"));
    assert!(text.contains("  repeated double field_float64_fixed_array = 19; // length 3"));
    assert!(text.contains(
        "  // A nested array field\n  // With\n  // a\n  // very\n  // long\n  // description\n  repeated foxglove.NestedMessage field_nested_array = 50;\n}\n"
    ));
}

#[test]
fn pinned_numbers_do_not_advance_counter() {
    let message = MessageSchema::new(
        "Pinned",
        "Pinned",
        vec![
            Field::primitive("a", "a", Primitive::String),
            Field::primitive("b", "b", Primitive::String).with_protobuf_field_number(10),
            Field::primitive("c", "c", Primitive::String),
        ],
    );
    assert_eq!(
        field_numbers(&message).expect("numbering should succeed"),
        vec![1, 10, 2]
    );
}

#[test]
fn duplicate_field_number_fails() {
    let message = MessageSchema::new(
        "Clash",
        "Clash",
        vec![
            Field::primitive("a", "a", Primitive::String),
            Field::primitive("b", "b", Primitive::String),
            Field::primitive("c", "c", Primitive::String).with_protobuf_field_number(2),
        ],
    );
    let err = field_numbers(&message).unwrap_err();
    assert!(matches!(
        err,
        RenderError::DuplicateFieldNumber { schema, number: 2 } if schema == "Clash"
    ));
}

fn shapes_catalog() -> Catalog {
    let shape = EnumSchema {
        name: "ShapeType".to_string(),
        description: "Kind of shape".to_string(),
        parent_schema: "Shape".to_string(),
        protobuf_enum_name: "Type".to_string(),
        values: vec![
            EnumValue::new("BOX", 0),
            EnumValue::new("CUBE", 0).with_description("Alias for BOX"),
            EnumValue::new("SPHERE", 1),
        ],
    };
    Catalog::new(
        vec![
            MessageSchema::new(
                "Shape",
                "A shape",
                vec![Field::new("type", "Type", FieldType::Enum("ShapeType".into()))],
            ),
            MessageSchema::new(
                "Marker",
                "A marker",
                vec![Field::new("shape", "Shape kind", FieldType::Enum("ShapeType".into()))],
            ),
        ],
        vec![shape],
    )
    .expect("indexing should succeed")
}

#[test]
fn aliased_enum_allows_alias() {
    let catalog = shapes_catalog();
    let text = render(&catalog, "Shape");
    assert!(text.contains("  enum Type {\n    option allow_alias = true;\n\n    BOX = 0;\n"));

    let file = parse("Shape", &text);
    let options = file.message_type[0].enum_type[0]
        .options
        .as_ref()
        .expect("enum options should be set");
    // The parser keeps options uninterpreted.
    let option = &options.uninterpreted_option[0];
    assert_eq!(option.name[0].name_part, "allow_alias");
    assert_eq!(option.identifier_value.as_deref(), Some("true"));
}

#[test]
fn enum_from_other_parent_is_imported() {
    let catalog = shapes_catalog();
    let text = render(&catalog, "Marker");
    assert!(text.contains("import \"foxglove/Shape.proto\";"));
    assert!(text.contains("  foxglove.Shape.Type shape = 1;"));
    assert!(!text.contains("enum "));

    let file = parse("Marker", &text);
    assert_eq!(file.dependency, vec!["foxglove/Shape.proto"]);
}

#[test]
fn standalone_enum_file() {
    let catalog = shapes_catalog();
    let text = render(&catalog, "ShapeType");
    assert!(text.ends_with(
        "// Kind of shape\nenum ShapeType {\n  option allow_alias = true;\n\n  BOX = 0;\n\n  // Alias for BOX\n  CUBE = 0;\n\n  SPHERE = 1;\n}\n"
    ));
    parse("ShapeType", &text);
}

#[test]
fn every_foxglove_message_parses() {
    let catalog = foxglove_catalog().expect("bundled catalog should load");
    let renderer = ProtobufRenderer::new();
    for message in catalog.messages() {
        let text = renderer
            .render(&catalog, SchemaRef::Message(message))
            .expect("rendering should succeed");
        let file = parse(&message.name, &text);
        assert_eq!(file.message_type[0].name(), message.name);
        assert_eq!(file.message_type[0].field.len(), message.fields.len());
    }
}

#[test]
fn compressed_image_keeps_pinned_number() {
    let catalog = foxglove_catalog().expect("bundled catalog should load");
    let text = render(&catalog, "CompressedImage");
    let file = parse("CompressedImage", &text);
    let frame_id = file.message_type[0]
        .field
        .iter()
        .find(|f| f.name() == "frame_id")
        .expect("frame_id should exist");
    assert_eq!(frame_id.number(), 4);
}
