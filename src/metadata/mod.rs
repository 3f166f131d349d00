mod column_descriptor;

pub use column_descriptor::ColumnDescriptor;
