use parquet_format_safe::{ConvertedType, LogicalType};

use super::PhysicalType;
use crate::parquet_bridge::{Compression, Encoding};

/// The description of a leaf column before flattening.
///
/// `logical_type` and `converted_type` are carried into metadata untouched;
/// they never affect the physical codecs.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveNode {
    pub name: String,
    pub optional: bool,
    pub physical_type: PhysicalType,
    pub logical_type: Option<LogicalType>,
    pub converted_type: Option<ConvertedType>,
    pub encoding: Encoding,
    pub compression: Compression,
}

impl PrimitiveNode {
    /// A required, `PLAIN`-encoded, uncompressed leaf.
    pub fn new(name: String, physical_type: PhysicalType) -> Self {
        Self {
            name,
            optional: false,
            physical_type,
            logical_type: None,
            converted_type: None,
            encoding: Encoding::Plain,
            compression: Compression::Uncompressed,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_logical_type(mut self, logical_type: LogicalType) -> Self {
        self.logical_type = Some(logical_type);
        self
    }

    pub fn with_converted_type(mut self, converted_type: ConvertedType) -> Self {
        self.converted_type = Some(converted_type);
        self
    }
}

/// A node of the nested schema handed to the writer. The tree owns its
/// children exclusively; no sharing, no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Primitive(PrimitiveNode),
    Struct {
        name: String,
        optional: bool,
        fields: Vec<SchemaNode>,
    },
    List {
        name: String,
        optional: bool,
        element: Box<SchemaNode>,
    },
    Map {
        name: String,
        optional: bool,
        key: Box<SchemaNode>,
        value: Box<SchemaNode>,
    },
}

impl SchemaNode {
    /// This node's field name.
    pub fn name(&self) -> &str {
        match self {
            SchemaNode::Primitive(primitive) => &primitive.name,
            SchemaNode::Struct { name, .. } => name,
            SchemaNode::List { name, .. } => name,
            SchemaNode::Map { name, .. } => name,
        }
    }

    /// Whether this node may be null.
    pub fn is_optional(&self) -> bool {
        match self {
            SchemaNode::Primitive(primitive) => primitive.optional,
            SchemaNode::Struct { optional, .. } => *optional,
            SchemaNode::List { optional, .. } => *optional,
            SchemaNode::Map { optional, .. } => *optional,
        }
    }
}
