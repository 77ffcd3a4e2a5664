//! Project manifest files
//!
//! A manifest describes a [`Project`] as YAML or JSON:
//!
//! ```yaml
//! name: demo
//! buckets:
//!   - name: annotationProcessor
//!     dependencies: ["org.projectlombok:lombok:1.18.36"]
//!   - name: implementation
//!   - name: testImplementation
//!     extendsFrom: [implementation]
//! extensions: [quarkus]
//! compileTasks:
//!   - name: compileJava
//!     args: ["-parameters"]
//! mapstruct:
//!   defaultComponentModel: spring
//! ```

use super::Project;
use crate::error::{PluginError, Result};
use crate::options::MapstructOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(ManifestFormat::Yaml),
            Some("json") => Ok(ManifestFormat::Json),
            _ => Err(PluginError::manifest(
                "open",
                path,
                "unsupported extension, expected .yaml, .yml or .json",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    pub name: String,

    #[serde(default)]
    pub buckets: Vec<BucketManifest>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub compile_tasks: Vec<CompileTaskManifest>,

    #[serde(default)]
    pub mapstruct: MapstructOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketManifest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends_from: Vec<String>,

    #[serde(default)]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileTaskManifest {
    pub name: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl ProjectManifest {
    pub fn parse(content: &str, format: ManifestFormat) -> std::result::Result<Self, String> {
        match format {
            ManifestFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ManifestFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }

    pub fn render(&self, format: ManifestFormat) -> std::result::Result<String, String> {
        match format {
            ManifestFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
            ManifestFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
        }
    }

    /// Builds the project. Buckets are created before any dependency is
    /// declared, so declaration order in the file does not matter.
    pub fn into_project(self) -> Result<Project> {
        let mut project = Project::new(self.name);

        for bucket in &self.buckets {
            let parents: Vec<&str> = bucket.extends_from.iter().map(String::as_str).collect();
            project.add_bucket(&bucket.name, &parents);
        }

        for bucket in &self.buckets {
            for coordinate in &bucket.dependencies {
                project.declare_coordinate(&bucket.name, coordinate)?;
            }
        }

        for extension in &self.extensions {
            project.add_extension(extension);
        }

        for task in self.compile_tasks {
            project.add_compile_task(&task.name, task.args);
        }

        *project.options_mut() = self.mapstruct;
        Ok(project)
    }

    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name().to_string(),
            buckets: project
                .buckets()
                .iter()
                .map(|bucket| BucketManifest {
                    name: bucket.name().to_string(),
                    extends_from: bucket.extends_from().to_vec(),
                    dependencies: bucket
                        .coordinates()
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                })
                .collect(),
            extensions: project.extensions().to_vec(),
            compile_tasks: project
                .compile_tasks()
                .iter()
                .map(|task| CompileTaskManifest {
                    name: task.name().to_string(),
                    args: task.args().to_vec(),
                })
                .collect(),
            mapstruct: project.options().clone(),
        }
    }
}

impl Project {
    pub fn load(path: &Path) -> Result<Self> {
        let format = ManifestFormat::from_path(path)?;
        let content =
            fs::read_to_string(path).map_err(|e| PluginError::manifest("read", path, e))?;
        let manifest = ProjectManifest::parse(&content, format)
            .map_err(|e| PluginError::manifest("parse", path, e))?;

        debug!(path = %path.display(), project = %manifest.name, "Loaded project manifest");
        manifest.into_project()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let format = ManifestFormat::from_path(path)?;
        let content = ProjectManifest::from_project(self)
            .render(format)
            .map_err(|e| PluginError::manifest("serialize", path, e))?;

        fs::write(path, content).map_err(|e| PluginError::manifest("write", path, e))?;
        debug!(path = %path.display(), "Saved project manifest");
        Ok(())
    }
}
