//! Output formatting for plans and apply reports

use anyhow::{Context, Result};

use crate::plugin::{ApplyPlan, ApplyReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    Yaml,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_plan(&self, project: &str, plan: &ApplyPlan) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(plan).context("Failed to serialize plan to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(plan).context("Failed to serialize plan to YAML")
            }
            OutputFormat::Human => Ok(self.format_plan_human(project, plan)),
        }
    }

    pub fn format_report(&self, report: &ApplyReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize report to YAML")
            }
            OutputFormat::Human => Ok(self.format_report_human(report)),
        }
    }

    fn format_plan_human(&self, project: &str, plan: &ApplyPlan) -> String {
        let mut output = String::new();

        output.push_str(&format!("Project: {}\n\n", project));
        output.push_str("MapStruct dependencies:\n");
        for descriptor in &plan.required {
            output.push_str(&format!("  {}\n", descriptor));
        }

        for resolution in &plan.optional {
            output.push_str(&format!("\n{} dependencies:\n", resolution.ecosystem));
            for descriptor in &resolution.descriptors {
                output.push_str(&format!("  {}\n", descriptor));
            }
        }

        output.push_str(&format!("\nCompiler arguments ({}):\n", plan.compile_task));
        for arg in &plan.compiler_args {
            output.push_str(&format!("  {}\n", arg));
        }

        output
    }

    fn format_report_human(&self, report: &ApplyReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Applied MapStruct to {}: {} dependencies, {} compiler arguments\n",
            report.project,
            report.added.len(),
            report.compiler_args.len()
        ));
        for descriptor in &report.added {
            output.push_str(&format!("  + {}\n", descriptor));
        }
        output.push_str(&format!(
            "  {} <- {} arguments\n",
            report.compile_task,
            report.compiler_args.len()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MapstructOptions;
    use crate::plugin::MapstructPlugin;
    use crate::project::Project;

    fn plan() -> ApplyPlan {
        let mut project = Project::java("demo");
        project
            .declare_coordinate("implementation", "org.apache.camel:camel-core:4.11.0")
            .unwrap();
        MapstructPlugin::default()
            .plan(&project, &MapstructOptions::default())
            .unwrap()
    }

    #[test]
    fn test_human_plan_lists_sections() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format_plan("demo", &plan())
            .unwrap();

        assert!(output.contains("Project: demo"));
        assert!(output.contains("implementation org.mapstruct:mapstruct:1.6.3"));
        assert!(output.contains("Camel dependencies:"));
        assert!(output.contains("org.apache.camel:camel-mapstruct:4.11.0"));
        assert!(output.contains("Compiler arguments (compileJava):"));
        assert!(output.contains("-Amapstruct.verbose=false"));
    }

    #[test]
    fn test_json_plan_is_valid() {
        let output = OutputFormatter::new(OutputFormat::Json)
            .format_plan("demo", &plan())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["compile_task"], "compileJava");
        assert_eq!(value["required"][1]["scope"], "annotationProcessor");
        assert_eq!(value["optional"][0]["ecosystem"], "Camel");
        assert_eq!(value["compiler_args"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_yaml_report() {
        let report = MapstructPlugin::report("demo", &plan());
        let output = OutputFormatter::new(OutputFormat::Yaml)
            .format_report(&report)
            .unwrap();

        assert!(output.contains("project: demo"));
        assert!(output.contains("coordinate: org.apache.camel:camel-mapstruct:4.11.0"));
    }
}
