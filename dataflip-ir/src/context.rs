use serde::Serialize;

use crate::Method;

/// IR root: every resolved method of one configuration group.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    namespace: String,
    name: String,
    methods: Vec<Method>,
}

impl Context {
    /// Create an empty context.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Append a method. Methods keep declaration order.
    pub fn push(&mut self, method: Method) {
        self.methods.push(method);
    }

    /// The generated code namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The generated context (class) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReturnShape;

    #[test]
    fn test_methods_keep_insertion_order() {
        let mut ctx = Context::new("Hello.World", "CoolContext");
        for name in ["Zeta", "Alpha", "Mid"] {
            ctx.push(Method::new(name, name, ReturnShape::AffectedCount).unwrap());
        }

        let names: Vec<_> = ctx.methods().iter().map(|m| m.name()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
        assert_eq!(ctx.namespace(), "Hello.World");
        assert_eq!(ctx.name(), "CoolContext");
    }

    #[test]
    fn test_serializes_for_inspection() {
        let mut ctx = Context::new("App", "Db");
        ctx.push(Method::new("Ping", "sp_ping", ReturnShape::AffectedCount).unwrap());

        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["name"], "Db");
        assert_eq!(json["methods"][0]["procedure"], "sp_ping");
        assert_eq!(json["methods"][0]["shape"], "affected_count");
    }
}
