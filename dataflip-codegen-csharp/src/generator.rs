//! C# context class generator.

use dataflip_codegen::{
    builder::{CodeWriter, EmitError},
    language::{Backend, TypeMapper},
};
use dataflip_ir::{Context, Method, ReturnShape};

use crate::CSharpTypeMapper;

const MAPPER: CSharpTypeMapper = CSharpTypeMapper;

/// Renders a [`Context`] as a C# data-access class.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Backend for Generator {
    fn name(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn render(&self, context: &Context) -> Result<String, EmitError> {
        let mut code = CodeWriter::csharp();

        code.emit("using System;")?;
        code.emit("using System.Collections.Generic;")?;
        code.emit("using System.Linq;")?;
        code.emit("using Dataflip;")?;
        code.blank();

        code.emit_fmt(format_args!("namespace {}", context.namespace()))?;
        code.emit("{")?;
        render_class(&mut code, context)?;
        code.emit("}")?;

        Ok(code.build())
    }
}

fn render_class(code: &mut CodeWriter, context: &Context) -> Result<(), EmitError> {
    let name = context.name();
    code.emit_fmt(format_args!("public class {} : DataflipContext", name))?;
    code.emit("{")?;

    code.emit_fmt(format_args!(
        "public {}(DataflipSettings settings) : base(settings)",
        name
    ))?;
    code.emit("{}")?;
    code.blank();
    code.emit_fmt(format_args!("public {}() : base(\"{}\")", name, name))?;
    code.emit("{}")?;
    code.blank();

    code.emit("#region Result Classes")?;
    for method in context.methods() {
        if let ReturnShape::RowSequence(columns) = method.shape() {
            code.emit_fmt(format_args!("public class {}Result", method.name()))?;
            code.emit("{")?;
            for column in columns {
                code.emit_fmt(format_args!(
                    "public {} {} {{ get; set; }}",
                    MAPPER.map_optional_type(column.ty),
                    column.name
                ))?;
            }
            code.emit("}")?;
            code.blank();
        }
    }
    code.emit("#endregion")?;
    code.blank();

    for method in context.methods() {
        render_method(code, method)?;
        code.blank();
    }

    code.emit("}")?;
    Ok(())
}

fn render_method(code: &mut CodeWriter, method: &Method) -> Result<(), EmitError> {
    let name = method.name();
    code.emit_fmt(format_args!("#region {}", method.procedure()))?;

    code.emit_fmt(format_args!("public class {}Parameters", name))?;
    code.emit("{")?;
    for parameter in method.parameters() {
        code.emit_fmt(format_args!(
            "public {} {} {{ get; set; }}",
            MAPPER.map_optional_type(parameter.ty),
            parameter.field_name()
        ))?;
    }
    code.emit("}")?;

    if let Some(doc) = method.doc() {
        code.emit("///<summary>")?;
        for line in doc.lines() {
            code.emit_fmt(format_args!("///{}", line.trim()))?;
        }
        code.emit("///</summary>")?;
    }

    let argument = if method.parameters().is_empty() {
        String::new()
    } else {
        format!("{}Parameters parameters", name)
    };
    let (signature, call) = match method.shape() {
        ReturnShape::RowSequence(_) => (
            format!("public IEnumerable<{}Result> {}({})", name, name, argument),
            "return new SqlQuery(Settings).ExecuteObjectArray(".to_string(),
        ),
        ReturnShape::Scalar(ty) => {
            let ty = MAPPER.map_type(*ty);
            (
                format!("public {} {}({})", ty, name, argument),
                format!("return ({}) new SqlQuery(Settings).ExecuteScalar(", ty),
            )
        }
        ReturnShape::AffectedCount => (
            format!("public int {}({})", name, argument),
            "return new SqlQuery(Settings).ExecuteNonQuery(".to_string(),
        ),
    };

    code.emit(&signature)?;
    code.emit("{")?;
    code.emit(&call)?;
    code.indent();
    code.emit_fmt(format_args!("query : \"{}\",", method.procedure()))?;
    render_bindings(code, method)?;
    if let ReturnShape::RowSequence(columns) = method.shape() {
        code.emit_fmt(format_args!("mapping : reader => new {}Result()", name))?;
        code.emit("{")?;
        for (index, column) in columns.iter().enumerate() {
            let separator = if index + 1 < columns.len() { "," } else { "" };
            code.emit_fmt(format_args!(
                "{} = reader[\"{}\"] as {}{}",
                column.name,
                column.name,
                MAPPER.map_optional_type(column.ty),
                separator
            ))?;
        }
        code.emit("}")?;
    }
    code.dedent()?;
    code.emit(");")?;
    code.emit("}")?;

    code.emit("#endregion")?;
    Ok(())
}

/// The `parameters` argument of the runtime call. Parameters are bound by
/// their remote names, markers included.
fn render_bindings(code: &mut CodeWriter, method: &Method) -> Result<(), EmitError> {
    let trailing = match method.shape() {
        ReturnShape::RowSequence(_) => ",",
        ReturnShape::Scalar(_) | ReturnShape::AffectedCount => "",
    };

    if method.parameters().is_empty() {
        code.emit_fmt(format_args!("parameters : _ => {{}}{}", trailing))?;
        return Ok(());
    }

    code.emit("parameters : _ =>")?;
    code.emit("{")?;
    code.emit("if (parameters == null) return;")?;
    for parameter in method.parameters() {
        code.emit_fmt(format_args!(
            "_.AddWithValue(\"{}\", parameters.{});",
            parameter.name,
            parameter.field_name()
        ))?;
    }
    code.emit_fmt(format_args!("}}{}", trailing))?;
    Ok(())
}
