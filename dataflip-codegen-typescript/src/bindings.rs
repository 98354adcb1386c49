//! Angular template scaffolding generator.

use dataflip_codegen::{
    builder::{CodeWriter, EmitError},
    language::Backend,
};
use dataflip_core::to_client_casing;
use dataflip_ir::{Context, Method, ReturnShape};

/// Renders placeholder Angular markup for each method's typings.
///
/// The output is a starting point to copy from; it has no behaviour.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindingsGenerator {
    camel_case: bool,
}

impl BindingsGenerator {
    pub fn new(camel_case: bool) -> Self {
        Self { camel_case }
    }
}

impl Backend for BindingsGenerator {
    fn name(&self) -> &'static str {
        "angular"
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, context: &Context) -> Result<String, EmitError> {
        let mut code = CodeWriter::typescript();

        code.emit_fmt(format_args!("<!-- Angular bindings for {} -->", context.name()))?;
        for method in context.methods() {
            code.blank();
            self.render_method(&mut code, method)?;
        }

        Ok(code.build())
    }
}

impl BindingsGenerator {
    fn render_method(&self, code: &mut CodeWriter, method: &Method) -> Result<(), EmitError> {
        code.emit_fmt(format_args!("<!-- Bindings for {}_Result -->", method.name()))?;
        match method.shape() {
            ReturnShape::RowSequence(columns) => {
                code.emit("<table>")?;
                code.indent();
                code.emit_fmt(format_args!(
                    "<tr *ngFor=\"let item of {}\">",
                    to_client_casing(method.name(), true)
                ))?;
                code.indent();
                for column in columns {
                    code.emit_fmt(format_args!(
                        "<td>{{{{item.{}}}}}</td>",
                        to_client_casing(&column.name, self.camel_case)
                    ))?;
                }
                code.dedent()?;
                code.emit("</tr>")?;
                code.dedent()?;
                code.emit("</table>")?;
            }
            ReturnShape::Scalar(_) | ReturnShape::AffectedCount => {
                code.emit("<!-- Method returns a basic type. -->")?;
            }
        }

        code.emit_fmt(format_args!(
            "<!-- Bindings for {}_Parameters -->",
            method.name()
        ))?;
        if method.parameters().is_empty() {
            code.emit("<!-- Method expects no parameters. -->")?;
        }
        for parameter in method.parameters() {
            let field = to_client_casing(&parameter.name, self.camel_case);
            code.emit_fmt(format_args!(
                "<input name=\"{}\" [(ngModel)]=\"parameters.{}\" />",
                field, field
            ))?;
        }
        Ok(())
    }
}
