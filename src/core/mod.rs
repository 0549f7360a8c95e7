//! Domain data and text helpers shared across layers.

pub mod commands;
pub mod text_utils;

pub use commands::{
    BuiltinCommand, builtin_command, is_command_definition, is_definition,
    is_definition_or_redefinition, is_environment_definition, is_include_command, is_redefinition,
    sectioning_level,
};
