//! Flattening of a realistic nested schema.
use parquet_codec::schema::{PhysicalType, PrimitiveNode, SchemaDescriptor, SchemaNode};
use parquet_codec::{Compression, Encoding};
use parquet_format_safe::{ConvertedType, FieldRepetitionType, Type};

fn primitive(name: &str, physical_type: PhysicalType) -> PrimitiveNode {
    PrimitiveNode::new(name.to_string(), physical_type)
}

/// A document store record:
/// ```text
/// message taxi_trips {
///   required int64 trip_id;
///   optional double fare (PLAIN);
///   required byte_array vendor (dictionary);
///   optional group tags (LIST) { repeated group list { required byte_array element } }
///   required group attributes (MAP) {
///     repeated group key_value { required byte_array key; optional int64 value (delta) }
///   }
///   optional group location { optional double lat; optional double lon; }
/// }
/// ```
fn taxi_trips() -> Vec<SchemaNode> {
    vec![
        SchemaNode::Primitive(primitive("trip_id", PhysicalType::Int64)),
        SchemaNode::Primitive(primitive("fare", PhysicalType::Double).with_optional(true)),
        SchemaNode::Primitive(
            primitive("vendor", PhysicalType::ByteArray)
                .with_encoding(Encoding::RleDictionary)
                .with_compression(Compression::Snappy),
        ),
        SchemaNode::List {
            name: "tags".to_string(),
            optional: true,
            element: Box::new(SchemaNode::Primitive(primitive(
                "tag",
                PhysicalType::ByteArray,
            ))),
        },
        SchemaNode::Map {
            name: "attributes".to_string(),
            optional: false,
            key: Box::new(SchemaNode::Primitive(primitive(
                "k",
                PhysicalType::ByteArray,
            ))),
            value: Box::new(SchemaNode::Primitive(
                primitive("v", PhysicalType::Int64)
                    .with_optional(true)
                    .with_encoding(Encoding::DeltaBinaryPacked),
            )),
        },
        SchemaNode::Struct {
            name: "location".to_string(),
            optional: true,
            fields: vec![
                SchemaNode::Primitive(primitive("lat", PhysicalType::Double).with_optional(true)),
                SchemaNode::Primitive(primitive("lon", PhysicalType::Double).with_optional(true)),
            ],
        },
    ]
}

#[test]
fn document_order_and_levels() {
    let schema = SchemaDescriptor::try_new("taxi_trips".to_string(), &taxi_trips()).unwrap();

    let columns = schema.columns();
    assert_eq!(schema.num_columns(), 8);

    let paths: Vec<Vec<&str>> = columns
        .iter()
        .map(|column| {
            column
                .path_in_schema()
                .iter()
                .map(|segment| segment.as_str())
                .collect()
        })
        .collect();
    assert_eq!(
        paths,
        vec![
            vec!["trip_id"],
            vec!["fare"],
            vec!["vendor"],
            vec!["tags", "list", "element"],
            vec!["attributes", "key_value", "key"],
            vec!["attributes", "key_value", "value"],
            vec!["location", "lat"],
            vec!["location", "lon"],
        ]
    );

    // (max_rep, max_def) per leaf, per the nesting rules
    let levels: Vec<(i16, i16)> = columns
        .iter()
        .map(|column| (column.max_rep_level(), column.max_def_level()))
        .collect();
    assert_eq!(
        levels,
        vec![
            (0, 0), // trip_id: required, flat
            (0, 1), // fare: optional
            (0, 0), // vendor: required
            (1, 2), // tags element: optional list (+1), repeated (+1)
            (1, 1), // key: required map (+0), repeated (+1)
            (1, 2), // value: repeated (+1), optional value (+1)
            (0, 2), // lat: optional struct (+1), optional (+1)
            (0, 2), // lon
        ]
    );

    assert!(columns[0].is_flat());
    assert_eq!(columns[2].compression(), Compression::Snappy);
    assert_eq!(columns[5].encoding(), Encoding::DeltaBinaryPacked);
}

#[test]
fn elements_for_metadata() {
    let schema = SchemaDescriptor::try_new("taxi_trips".to_string(), &taxi_trips()).unwrap();
    let elements = schema.elements();

    // root + 6 fields + list group/element + map group/key/value + 2 struct fields
    assert_eq!(elements.len(), 14);

    let root = &elements[0];
    assert_eq!(root.name, "taxi_trips");
    assert_eq!(root.num_children, Some(6));
    assert_eq!(root.repetition_type, None);

    let names: Vec<&str> = elements.iter().map(|element| element.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "taxi_trips",
            "trip_id",
            "fare",
            "vendor",
            "tags",
            "list",
            "element",
            "attributes",
            "key_value",
            "key",
            "value",
            "location",
            "lat",
            "lon",
        ]
    );

    let tags = elements.iter().find(|element| element.name == "tags").unwrap();
    assert_eq!(tags.converted_type, Some(ConvertedType::LIST));
    assert_eq!(tags.num_children, Some(1));

    let attributes = elements
        .iter()
        .find(|element| element.name == "attributes")
        .unwrap();
    assert_eq!(attributes.converted_type, Some(ConvertedType::MAP));

    let key = elements.iter().find(|element| element.name == "key").unwrap();
    assert_eq!(key.repetition_type, Some(FieldRepetitionType::REQUIRED));
    assert_eq!(key.type_, Some(Type::BYTE_ARRAY));

    // leaves carry no children; groups carry no physical type
    for element in elements {
        assert_eq!(element.type_.is_some(), element.num_children.is_none());
    }
}
