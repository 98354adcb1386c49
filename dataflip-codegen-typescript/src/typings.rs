//! TypeScript typings generator.

use dataflip_codegen::{
    builder::{CodeWriter, EmitError},
    language::{Backend, TypeMapper},
};
use dataflip_core::to_client_casing;
use dataflip_ir::{Context, Method, ReturnShape};

use crate::TypeScriptTypeMapper;

/// Renders typings only: no executable bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypingsGenerator {
    camel_case: bool,
}

impl TypingsGenerator {
    pub fn new(camel_case: bool) -> Self {
        Self { camel_case }
    }
}

impl Backend for TypingsGenerator {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render(&self, context: &Context) -> Result<String, EmitError> {
        let mut code = CodeWriter::typescript();

        code.emit_fmt(format_args!("export namespace {}", context.name()))?;
        code.emit("{")?;
        for (index, method) in context.methods().iter().enumerate() {
            if index > 0 {
                code.blank();
            }
            self.render_method(&mut code, method)?;
        }
        code.emit("}")?;

        Ok(code.build())
    }
}

impl TypingsGenerator {
    fn render_method(&self, code: &mut CodeWriter, method: &Method) -> Result<(), EmitError> {
        let mapper = TypeScriptTypeMapper;

        code.emit_fmt(format_args!("export class {}_Result", method.name()))?;
        code.emit("{")?;
        match method.shape() {
            ReturnShape::RowSequence(columns) => {
                for column in columns {
                    code.emit_fmt(format_args!(
                        "{}: {};",
                        to_client_casing(&column.name, self.camel_case),
                        mapper.map_type(column.ty)
                    ))?;
                }
            }
            ReturnShape::Scalar(_) | ReturnShape::AffectedCount => {
                code.emit("/* Method returns a basic type. */")?;
            }
        }
        code.emit("}")?;

        code.emit_fmt(format_args!("export class {}_Parameters", method.name()))?;
        code.emit("{")?;
        if method.parameters().is_empty() {
            code.emit("/* No parameters. */")?;
        }
        for parameter in method.parameters() {
            code.emit_fmt(format_args!(
                "{}: {};",
                to_client_casing(&parameter.name, self.camel_case),
                mapper.map_type(parameter.ty)
            ))?;
        }
        code.emit("}")?;
        Ok(())
    }
}
