
use std::collections::HashMap;

use schemagen_core::{
    Catalog, Dependency, ExternalLibrary, RenderError, nested_enums, resolve_dependencies,
};
use test_helpers::*;

struct FakeLibrary(HashMap<&'static str, Vec<&'static str>>);

impl ExternalLibrary for FakeLibrary {
    fn complex_dependencies(&self, name: &str) -> Option<Vec<String>> {
        self.0
            .get(name)
            .map(|deps| deps.iter().map(|d| d.to_string()).collect())
    }
}

fn geometry_library() -> FakeLibrary {
    FakeLibrary(HashMap::from([
        ("geometry_msgs/Pose", vec!["geometry_msgs/Point", "geometry_msgs/Quaternion"]),
        ("geometry_msgs/Point", vec![]),
        ("geometry_msgs/Quaternion", vec![]),
    ]))
}

fn local(name: &str) -> Dependency {
    Dependency::Local(name.to_string())
}

fn external(name: &str) -> Dependency {
    Dependency::External(name.to_string())
}

#[test]
fn dependencies_are_preorder_and_deduplicated() {
    let catalog = Catalog::new(
        vec![
            message(
                "Root",
                vec![
                    nested_field("a", "B"),
                    float_field("x"),
                    nested_field("b", "C"),
                    nested_field("c", "B"),
                ],
            ),
            message("B", vec![nested_field("d", "D")]),
            message("C", vec![nested_field("d", "D"), nested_field("e", "E")]),
            message("D", vec![float_field("x")]),
            message("E", vec![float_field("x")]),
        ],
        vec![],
    )
    .expect("indexing should succeed");
    let root = catalog.message("Root").expect("Root should exist");

    let deps = resolve_dependencies(&catalog, root, None).expect("resolution should succeed");
    assert_eq!(deps, vec![local("B"), local("D"), local("C"), local("E")]);
}

#[test]
fn leaf_message_has_no_dependencies() {
    let catalog = Catalog::new(vec![message("Leaf", vec![float_field("x")])], vec![])
        .expect("indexing should succeed");
    let leaf = catalog.message("Leaf").expect("Leaf should exist");
    assert!(
        resolve_dependencies(&catalog, leaf, None)
            .expect("resolution should succeed")
            .is_empty()
    );
}

#[test]
fn external_equivalents_replace_local_schemas() {
    let catalog = Catalog::new(
        vec![
            message("Root", vec![nested_field("pose", "Pose"), nested_field("color", "Color")]),
            message("Pose", vec![nested_field("position", "Point")])
                .with_ros_equivalent("geometry_msgs/Pose"),
            message("Point", vec![float_field("x")]).with_ros_equivalent("geometry_msgs/Point"),
            message("Color", vec![float_field("r")]),
        ],
        vec![],
    )
    .expect("indexing should succeed");
    let root = catalog.message("Root").expect("Root should exist");
    let library = geometry_library();

    let deps = resolve_dependencies(&catalog, root, Some(&library))
        .expect("resolution should succeed");
    assert_eq!(
        deps,
        vec![
            external("geometry_msgs/Pose"),
            external("geometry_msgs/Point"),
            external("geometry_msgs/Quaternion"),
            local("Color"),
        ]
    );
}

#[test]
fn equivalents_are_ignored_without_library() {
    let catalog = Catalog::new(
        vec![
            message("Root", vec![nested_field("pose", "Pose")]),
            message("Pose", vec![nested_field("position", "Point")])
                .with_ros_equivalent("geometry_msgs/Pose"),
            message("Point", vec![float_field("x")]).with_ros_equivalent("geometry_msgs/Point"),
        ],
        vec![],
    )
    .expect("indexing should succeed");
    let root = catalog.message("Root").expect("Root should exist");

    let deps = resolve_dependencies(&catalog, root, None).expect("resolution should succeed");
    assert_eq!(deps, vec![local("Pose"), local("Point")]);
}

#[test]
fn unknown_external_is_an_error() {
    let catalog = Catalog::new(
        vec![
            message("Root", vec![nested_field("t", "Twist")]),
            message("Twist", vec![float_field("x")]).with_ros_equivalent("geometry_msgs/Twist"),
        ],
        vec![],
    )
    .expect("indexing should succeed");
    let root = catalog.message("Root").expect("Root should exist");
    let library = geometry_library();

    let err = resolve_dependencies(&catalog, root, Some(&library)).unwrap_err();
    assert!(matches!(err, RenderError::UnknownExternal { name } if name == "geometry_msgs/Twist"));
}

#[test]
fn dangling_reference_is_an_error() {
    let catalog = Catalog::new(vec![message("Root", vec![nested_field("m", "Missing")])], vec![])
        .expect("indexing should succeed");
    let root = catalog.message("Root").expect("Root should exist");

    let err = resolve_dependencies(&catalog, root, None).unwrap_err();
    assert_eq!(err.to_string(), "unknown message schema 'Missing'");
}

#[test]
fn cycles_fail_instead_of_recursing() {
    let catalog = Catalog::new(
        vec![
            message("Root", vec![nested_field("a", "A")]),
            message("A", vec![nested_field("b", "B")]),
            message("B", vec![nested_field("a", "A")]),
        ],
        vec![],
    )
    .expect("indexing should succeed");
    let root = catalog.message("Root").expect("Root should exist");

    let err = resolve_dependencies(&catalog, root, None).unwrap_err();
    match err {
        RenderError::Cycle { path } => assert_eq!(path, vec!["A", "B", "A"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn self_reference_is_a_cycle() {
    let catalog = Catalog::new(vec![message("Node", vec![nested_field("next", "Node")])], vec![])
        .expect("indexing should succeed");
    let node = catalog.message("Node").expect("Node should exist");

    assert!(matches!(
        resolve_dependencies(&catalog, node, None),
        Err(RenderError::Cycle { .. })
    ));
}

#[test]
fn nested_enums_are_scoped_by_parent() {
    let catalog = Catalog::new(
        vec![message("A", vec![enum_field("k", "Kind")]), message("B", vec![])],
        vec![
            enum_schema("Kind", "A", &[("X", 0)]),
            enum_schema("Flavor", "A", &[("Y", 0)]),
            enum_schema("Other", "B", &[("Z", 0)]),
        ],
    )
    .expect("indexing should succeed");
    let a = catalog.message("A").expect("A should exist");

    let names: Vec<_> = nested_enums(&catalog, a).iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Flavor", "Kind"]);
}
