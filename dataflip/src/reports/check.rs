//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub contexts: Vec<ContextSummary>,
    /// Settings that are accepted but have no effect.
    pub warnings: Vec<String>,
}

/// One context group as it will be generated.
#[derive(Debug)]
pub struct ContextSummary {
    pub name: String,
    pub namespace: String,
    /// Connection source with credentials hidden.
    pub database: String,
    /// Artifact kind and configured path.
    pub outputs: Vec<(&'static str, String)>,
    pub procedures: Vec<ProcedureSummary>,
}

#[derive(Debug)]
pub struct ProcedureSummary {
    pub procedure: String,
    pub method: String,
    /// How the return shape will be resolved.
    pub resolution: String,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.success(&format!("{} is valid", self.config_path.display()));

        for context in &self.contexts {
            out.newline();
            out.section(&format!("{} ({})", context.name, context.namespace));
            out.key_value_indented("database", &context.database);
            for (kind, path) in &context.outputs {
                out.key_value_indented(kind, path);
            }

            let count = context.procedures.len();
            out.key_value_indented(
                "procedures",
                &format!("{} method{}", count, if count == 1 { "" } else { "s" }),
            );
            for procedure in &context.procedures {
                if procedure.method == procedure.procedure {
                    out.list_item(&format!("{} ({})", procedure.method, procedure.resolution));
                } else {
                    out.list_item(&format!(
                        "{} -> {} ({})",
                        procedure.procedure, procedure.method, procedure.resolution
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            config_path: PathBuf::from("dataflip.toml"),
            contexts: vec![ContextSummary {
                name: "CoolContext".into(),
                namespace: "Hello.World".into(),
                database: "$DATABASE_URL".into(),
                outputs: vec![("host", "CoolContext.cs".into())],
                procedures: vec![
                    ProcedureSummary {
                        procedure: "GetUsers".into(),
                        method: "GetUsers".into(),
                        resolution: "affected count".into(),
                    },
                    ProcedureSummary {
                        procedure: "count_users".into(),
                        method: "CountUsers".into(),
                        resolution: "scalar int".into(),
                    },
                ],
            }],
            warnings: vec![],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "ok dataflip.toml is valid",
                "",
                "[CoolContext (Hello.World)]",
                "  database: $DATABASE_URL",
                "  host: CoolContext.cs",
                "  procedures: 2 methods",
                "  - GetUsers (affected count)",
                "  - count_users -> CountUsers (scalar int)",
            ]
        );
    }
}
