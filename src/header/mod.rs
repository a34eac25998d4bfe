mod field_map;
mod field_name;
mod field_value;

pub use field_map::*;
pub use field_name::*;
pub use field_value::*;

#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub struct Field<'b> {
    pub name: FieldName<'b>,
    pub value: FieldValue<'b>,
}
