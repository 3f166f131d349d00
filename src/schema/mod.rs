mod flatten;
mod node;
mod physical_type;

pub use flatten::SchemaDescriptor;
pub use node::{PrimitiveNode, SchemaNode};
pub use physical_type::PhysicalType;

pub use parquet_format_safe::{ConvertedType, LogicalType, SchemaElement};
