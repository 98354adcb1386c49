//! Snapshot tests for typings and bindings generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use dataflip_codegen_typescript::{Backend, BindingsGenerator, TypingsGenerator};
use dataflip_core::HostType;
use dataflip_ir::{Context, Method, Parameter, ResultColumn, ReturnShape};

fn cool_context() -> Context {
    let mut context = Context::new("Hello.World", "CoolContext");
    context.push(
        Method::new(
            "GetUsers",
            "GetUsers",
            ReturnShape::RowSequence(vec![
                ResultColumn::new("Id", HostType::Int32),
                ResultColumn::new("CreatedAt", HostType::DateTime),
            ]),
        )
        .unwrap()
        .with_parameters(vec![Parameter::new("@UserId", HostType::Int64)]),
    );
    context.push(
        Method::new("CountUsers", "count_users", ReturnShape::Scalar(HostType::Int64)).unwrap(),
    );
    context
}

#[test]
fn test_typings_camel_case() {
    let source = TypingsGenerator::new(true).render(&cool_context()).unwrap();
    insta::assert_snapshot!(source, @r"
export namespace CoolContext
{
  export class GetUsers_Result
  {
    id: number;
    createdAt: Date;
  }
  export class GetUsers_Parameters
  {
    userId: number;
  }

  export class CountUsers_Result
  {
    /* Method returns a basic type. */
  }
  export class CountUsers_Parameters
  {
    /* No parameters. */
  }
}
");
}

#[test]
fn test_typings_keep_casing() {
    let source = TypingsGenerator::new(false).render(&cool_context()).unwrap();
    assert!(source.contains("    Id: number;\n"));
    assert!(source.contains("    CreatedAt: Date;\n"));
    assert!(source.contains("    UserId: number;\n"));
}

#[test]
fn test_bindings() {
    let source = BindingsGenerator::new(true).render(&cool_context()).unwrap();
    insta::assert_snapshot!(source, @r#"
<!-- Angular bindings for CoolContext -->

<!-- Bindings for GetUsers_Result -->
<table>
  <tr *ngFor="let item of getUsers">
    <td>{{item.id}}</td>
    <td>{{item.createdAt}}</td>
  </tr>
</table>
<!-- Bindings for GetUsers_Parameters -->
<input name="userId" [(ngModel)]="parameters.userId" />

<!-- Bindings for CountUsers_Result -->
<!-- Method returns a basic type. -->
<!-- Bindings for CountUsers_Parameters -->
<!-- Method expects no parameters. -->
"#);
}

#[test]
fn test_casing_flag_applies_to_every_field() {
    let context = cool_context();
    for camel_case in [true, false] {
        let typings = TypingsGenerator::new(camel_case).render(&context).unwrap();
        let bindings = BindingsGenerator::new(camel_case).render(&context).unwrap();
        let expected = if camel_case { "userId" } else { "UserId" };

        assert!(typings.contains(&format!("{expected}: number;")));
        assert!(bindings.contains(&format!("parameters.{expected}\"")));
        assert!(!typings.contains('@'));
        assert!(!bindings.contains('@'));
    }
}
