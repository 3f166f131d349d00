use crate::parquet_bridge::{Compression, Encoding};
use crate::schema::{PhysicalType, PrimitiveNode};

/// A descriptor of a leaf-level primitive column, carrying the maximum
/// definition and repetition levels needed to re-assemble nested data.
#[derive(Debug, PartialEq, Clone)]
pub struct ColumnDescriptor {
    // The "leaf" primitive type of this column
    primitive: PrimitiveNode,

    // The maximum definition level for this column
    max_def_level: i16,

    // The maximum repetition level for this column
    max_rep_level: i16,

    // The path of this column in the schema, e.g. ["a", "b", "c"], the
    // root element excluded.
    path_in_schema: Vec<String>,
}

impl ColumnDescriptor {
    /// Creates new descriptor for leaf-level column.
    pub fn new(
        primitive: PrimitiveNode,
        max_def_level: i16,
        max_rep_level: i16,
        path_in_schema: Vec<String>,
    ) -> Self {
        Self {
            primitive,
            max_def_level,
            max_rep_level,
            path_in_schema,
        }
    }

    /// Returns maximum definition level for this column.
    pub fn max_def_level(&self) -> i16 {
        self.max_def_level
    }

    /// Returns maximum repetition level for this column.
    pub fn max_rep_level(&self) -> i16 {
        self.max_rep_level
    }

    pub fn path_in_schema(&self) -> &[String] {
        &self.path_in_schema
    }

    /// The primitive description of this leaf.
    pub fn primitive(&self) -> &PrimitiveNode {
        &self.primitive
    }

    pub fn physical_type(&self) -> &PhysicalType {
        &self.primitive.physical_type
    }

    /// The declared length iff this leaf is a `FixedLenByteArray`.
    pub fn type_length(&self) -> Option<usize> {
        match self.primitive.physical_type {
            PhysicalType::FixedLenByteArray(size) => Some(size),
            _ => None,
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.primitive.encoding
    }

    pub fn compression(&self) -> Compression {
        self.primitive.compression
    }

    /// Returns column name.
    pub fn name(&self) -> &str {
        &self.primitive.name
    }

    /// Whether this leaf has no level streams at all.
    pub fn is_flat(&self) -> bool {
        self.max_def_level == 0 && self.max_rep_level == 0
    }
}
