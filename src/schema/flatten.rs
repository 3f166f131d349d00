use std::collections::HashSet;

use parquet_format_safe::{ConvertedType, SchemaElement};

use super::node::{PrimitiveNode, SchemaNode};
use super::physical_type::physical_type_to_type;
use super::PhysicalType;
use crate::error::{Error, Result};
use crate::metadata::ColumnDescriptor;
use crate::parquet_bridge::{can_encode, Repetition};

/// A flattened schema: the ordered [`SchemaElement`]s for the file
/// metadata, and one [`ColumnDescriptor`] per leaf column, in depth-first
/// document order.
#[derive(Debug, Clone)]
pub struct SchemaDescriptor {
    name: String,
    elements: Vec<SchemaElement>,
    leaves: Vec<ColumnDescriptor>,
}

impl SchemaDescriptor {
    /// Lowers a nested schema into flat elements and leaf descriptors.
    pub fn try_new(name: String, fields: &[SchemaNode]) -> Result<Self> {
        if fields.is_empty() {
            return Err(Error::InvalidSchema(
                "a schema must have at least one field".to_string(),
            ));
        }
        check_unique_names(fields.iter().map(|field| field.name()))?;

        let mut elements = Vec::with_capacity(fields.len() + 1);
        elements.push(SchemaElement {
            type_: None,
            type_length: None,
            // the root element carries no repetition
            repetition_type: None,
            name: name.clone(),
            num_children: Some(fields.len() as i32),
            converted_type: None,
            scale: None,
            precision: None,
            field_id: None,
            logical_type: None,
        });

        let mut leaves = vec![];
        let mut path = vec![];
        for field in fields {
            flatten_node(field, None, 0, 0, &mut path, &mut elements, &mut leaves)?;
            debug_assert!(path.is_empty());
        }

        Ok(Self {
            name,
            elements,
            leaves,
        })
    }

    /// Returns schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The flat elements, root first, suitable for the file metadata.
    pub fn elements(&self) -> &[SchemaElement] {
        &self.elements
    }

    /// Returns slice of [`ColumnDescriptor`].
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.leaves
    }

    /// Returns [`ColumnDescriptor`] for a leaf position.
    pub fn column(&self, i: usize) -> &ColumnDescriptor {
        &self.leaves[i]
    }

    /// Returns number of leaf-level columns.
    pub fn num_columns(&self) -> usize {
        self.leaves.len()
    }
}

fn check_unique_names<'a, I: Iterator<Item = &'a str>>(names: I) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(Error::InvalidSchema(format!(
                "duplicate field name \"{}\"",
                name
            )));
        }
    }
    Ok(())
}

fn group_element(
    name: String,
    num_children: usize,
    repetition: Repetition,
    converted_type: Option<ConvertedType>,
) -> SchemaElement {
    SchemaElement {
        type_: None,
        type_length: None,
        repetition_type: Some(repetition.into()),
        name,
        num_children: Some(num_children as i32),
        converted_type,
        scale: None,
        precision: None,
        field_id: None,
        logical_type: None,
    }
}

fn leaf_element(primitive: &PrimitiveNode, name: &str) -> SchemaElement {
    let (type_, type_length) = physical_type_to_type(&primitive.physical_type);
    let repetition = if primitive.optional {
        Repetition::Optional
    } else {
        Repetition::Required
    };
    SchemaElement {
        type_: Some(type_),
        type_length,
        repetition_type: Some(repetition.into()),
        name: name.to_string(),
        num_children: None,
        converted_type: primitive.converted_type,
        scale: None,
        precision: None,
        field_id: None,
        logical_type: primitive.logical_type.clone(),
    }
}

fn repetition_of(optional: bool) -> Repetition {
    if optional {
        Repetition::Optional
    } else {
        Repetition::Required
    }
}

/// Depth-first lowering. `rep_level` and `def_level` are the maxima
/// accumulated from the ancestors of `node`; `rename` overrides the
/// node's own name (list elements and map entries have mandated names).
fn flatten_node(
    node: &SchemaNode,
    rename: Option<&str>,
    rep_level: i16,
    def_level: i16,
    path: &mut Vec<String>,
    elements: &mut Vec<SchemaElement>,
    leaves: &mut Vec<ColumnDescriptor>,
) -> Result<()> {
    let name = rename.unwrap_or_else(|| node.name());
    path.push(name.to_string());
    match node {
        SchemaNode::Primitive(primitive) => {
            check_primitive(primitive)?;
            elements.push(leaf_element(primitive, name));

            let max_def_level = def_level + primitive.optional as i16;
            let mut primitive = primitive.clone();
            primitive.name = name.to_string();
            leaves.push(ColumnDescriptor::new(
                primitive,
                max_def_level,
                rep_level,
                path.clone(),
            ));
        }
        SchemaNode::Struct {
            optional, fields, ..
        } => {
            if fields.is_empty() {
                return Err(Error::InvalidSchema(format!(
                    "struct \"{}\" has no fields",
                    name
                )));
            }
            check_unique_names(fields.iter().map(|field| field.name()))?;
            elements.push(group_element(
                name.to_string(),
                fields.len(),
                repetition_of(*optional),
                None,
            ));
            let def_level = def_level + *optional as i16;
            for field in fields {
                flatten_node(field, None, rep_level, def_level, path, elements, leaves)?;
            }
        }
        SchemaNode::List {
            optional, element, ..
        } => {
            elements.push(group_element(
                name.to_string(),
                1,
                repetition_of(*optional),
                Some(ConvertedType::LIST),
            ));
            elements.push(group_element(
                "list".to_string(),
                1,
                Repetition::Repeated,
                None,
            ));
            path.push("list".to_string());
            flatten_node(
                element,
                Some("element"),
                rep_level + 1,
                def_level + 1 + *optional as i16,
                path,
                elements,
                leaves,
            )?;
            path.pop();
        }
        SchemaNode::Map {
            optional,
            key,
            value,
            ..
        } => {
            if key.is_optional() {
                return Err(Error::InvalidSchema(format!(
                    "the key of map \"{}\" cannot be optional",
                    name
                )));
            }
            elements.push(group_element(
                name.to_string(),
                1,
                repetition_of(*optional),
                Some(ConvertedType::MAP),
            ));
            elements.push(group_element(
                "key_value".to_string(),
                2,
                Repetition::Repeated,
                None,
            ));
            path.push("key_value".to_string());
            let rep_level = rep_level + 1;
            let def_level = def_level + 1 + *optional as i16;
            flatten_node(key, Some("key"), rep_level, def_level, path, elements, leaves)?;
            flatten_node(value, Some("value"), rep_level, def_level, path, elements, leaves)?;
            path.pop();
        }
    }
    path.pop();
    Ok(())
}

fn check_primitive(primitive: &PrimitiveNode) -> Result<()> {
    if let PhysicalType::FixedLenByteArray(0) = primitive.physical_type {
        return Err(Error::InvalidSchema(format!(
            "fixed length field \"{}\" must have a non-zero length",
            primitive.name
        )));
    }
    if !can_encode(&primitive.physical_type, primitive.encoding) {
        return Err(Error::InvalidSchema(format!(
            "field \"{}\" cannot be encoded as {:?}",
            primitive.name, primitive.encoding
        )));
    }
    Ok(())
}
