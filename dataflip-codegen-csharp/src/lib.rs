//! C# generator for Dataflip.
//!
//! Renders a context as a single C# source file: a class deriving from
//! `DataflipContext` with one method per procedure. Each method body is one
//! call into the Dataflip runtime (`ExecuteObjectArray`, `ExecuteScalar` or
//! `ExecuteNonQuery`), chosen by the method's return shape.
//!
//! ```ignore
//! use dataflip_codegen::language::Backend;
//! use dataflip_codegen_csharp::Generator;
//!
//! let source = Generator.render(&context)?;
//! ```

mod generator;
mod type_mapper;

pub use dataflip_codegen::language::Backend;
pub use generator::Generator;
pub use type_mapper::CSharpTypeMapper;
