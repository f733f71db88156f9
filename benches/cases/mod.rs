pub mod attributes;
pub mod function_values;
