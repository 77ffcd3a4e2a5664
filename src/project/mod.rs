//! In-memory model of a host build
//!
//! A [`Project`] holds named dependency buckets (which may inherit from other
//! buckets), installed build extensions, compile tasks with their argument
//! lists and the generator options. It is both the snapshot the resolver
//! reads and the sink the plugin writes to.

pub mod manifest;

pub use manifest::{ManifestFormat, ProjectManifest};

use crate::dependency::{Descriptor, Scope};
use crate::error::{PluginError, Result};
use crate::options::MapstructOptions;
use crate::plugin::{CompilerArgsSink, DependencySink};
use crate::resolution::BuildSnapshot;
use std::collections::HashSet;

pub const COMPILE_JAVA_TASK: &str = "compileJava";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    name: String,
    extends_from: Vec<String>,
    dependencies: Vec<Descriptor>,
}

impl Bucket {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extends_from(&self) -> &[String] {
        &self.extends_from
    }

    /// Dependencies declared directly in this bucket
    pub fn dependencies(&self) -> &[Descriptor] {
        &self.dependencies
    }

    pub fn coordinates(&self) -> Vec<&str> {
        self.dependencies.iter().map(|d| d.coordinate()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileTask {
    name: String,
    args: Vec<String>,
}

impl CompileTask {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    buckets: Vec<Bucket>,
    extensions: Vec<String>,
    compile_tasks: Vec<CompileTask>,
    options: MapstructOptions,
}

impl Project {
    /// Empty project: no buckets, no tasks
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buckets: Vec::new(),
            extensions: Vec::new(),
            compile_tasks: Vec::new(),
            options: MapstructOptions::default(),
        }
    }

    /// Project with the buckets and compile task of a plain Java build
    pub fn java(name: impl Into<String>) -> Self {
        let mut project = Self::new(name);
        project.add_bucket(Scope::AnnotationProcessor.as_str(), &[]);
        project.add_bucket(Scope::Implementation.as_str(), &[]);
        project.add_bucket(
            Scope::TestImplementation.as_str(),
            &[Scope::Implementation.as_str()],
        );
        project.add_compile_task(COMPILE_JAVA_TASK, Vec::new());
        project
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a bucket; an existing bucket of the same name is left as is
    pub fn add_bucket(&mut self, name: &str, extends_from: &[&str]) -> &mut Self {
        if self.bucket(name).is_none() {
            self.buckets.push(Bucket {
                name: name.to_string(),
                extends_from: extends_from.iter().map(|s| s.to_string()).collect(),
                dependencies: Vec::new(),
            });
        }
        self
    }

    pub fn add_extension(&mut self, name: &str) -> &mut Self {
        if !self.has_extension(name) {
            self.extensions.push(name.to_string());
        }
        self
    }

    pub fn add_compile_task(&mut self, name: &str, args: Vec<String>) -> &mut Self {
        if self.compile_task(name).is_none() {
            self.compile_tasks.push(CompileTask {
                name: name.to_string(),
                args,
            });
        }
        self
    }

    /// Declares a dependency in the bucket named by its scope
    pub fn declare(&mut self, descriptor: Descriptor) -> Result<()> {
        let bucket = self
            .buckets
            .iter_mut()
            .find(|b| b.name == descriptor.scope().as_str())
            .ok_or_else(|| PluginError::invalid_bucket(descriptor.scope().as_str()))?;
        bucket.dependencies.push(descriptor);
        Ok(())
    }

    /// Parses and declares `group:artifact:version` in `bucket`
    pub fn declare_coordinate(&mut self, bucket: &str, coordinate: &str) -> Result<()> {
        let descriptor = Descriptor::parse(Scope::from_literal(bucket), coordinate)?;
        self.declare(descriptor)
    }

    pub fn bucket(&self, name: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.name == name)
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn compile_task(&self, name: &str) -> Option<&CompileTask> {
        self.compile_tasks.iter().find(|t| t.name == name)
    }

    pub fn compile_tasks(&self) -> &[CompileTask] {
        &self.compile_tasks
    }

    pub fn options(&self) -> &MapstructOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut MapstructOptions {
        &mut self.options
    }

    /// Every dependency visible in `name`, own declarations first, then
    /// inherited ones. Each bucket is visited once even if reachable twice.
    pub fn all_dependencies(&self, name: &str) -> Result<Vec<&Descriptor>> {
        let mut visited = HashSet::new();
        let mut pending = vec![name];
        let mut dependencies = Vec::new();

        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }

            let bucket = self
                .bucket(current)
                .ok_or_else(|| PluginError::invalid_bucket(current))?;
            dependencies.extend(bucket.dependencies.iter());
            pending.extend(bucket.extends_from.iter().rev().map(String::as_str));
        }

        Ok(dependencies)
    }
}

impl BuildSnapshot for Project {
    fn has_bucket(&self, name: &str) -> bool {
        self.bucket(name).is_some()
    }

    fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e == name)
    }

    fn contains(&self, bucket: &str, group: &str, artifact: &str) -> Result<bool> {
        Ok(self
            .all_dependencies(bucket)?
            .iter()
            .any(|d| d.same_artifact(group, artifact)))
    }
}

impl DependencySink for Project {
    fn add_dependency(&mut self, descriptor: &Descriptor) -> Result<()> {
        self.declare(descriptor.clone())
    }
}

impl CompilerArgsSink for Project {
    fn has_compile_task(&self, task: &str) -> bool {
        self.compile_task(task).is_some()
    }

    fn append_compiler_args(&mut self, task: &str, args: &[String]) -> Result<()> {
        let task = self
            .compile_tasks
            .iter_mut()
            .find(|t| t.name == task)
            .ok_or_else(|| PluginError::CompileTaskNotFound {
                task: task.to_string(),
            })?;
        task.args.extend_from_slice(args);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_project_layout() {
        let project = Project::java("test-project");

        assert!(project.has_bucket("annotationProcessor"));
        assert!(project.has_bucket("implementation"));
        assert_eq!(
            project.bucket("testImplementation").unwrap().extends_from(),
            &["implementation".to_string()]
        );
        assert!(project.compile_task(COMPILE_JAVA_TASK).unwrap().args().is_empty());
    }

    #[test]
    fn test_inherited_dependency_is_visible() {
        let mut project = Project::java("test-project");
        project
            .declare_coordinate("implementation", "org.springframework:spring-core:6.2.5")
            .unwrap();

        assert!(project
            .contains("testImplementation", "org.springframework", "spring-core")
            .unwrap());
        assert!(!project
            .contains("annotationProcessor", "org.springframework", "spring-core")
            .unwrap());
    }

    #[test]
    fn test_missing_bucket_is_error_empty_bucket_is_not() {
        let project = Project::java("test-project");

        assert!(!project.contains("implementation", "g", "a").unwrap());
        assert!(matches!(
            project.contains("lombok", "g", "a"),
            Err(PluginError::InvalidScopeBucket { bucket }) if bucket == "lombok"
        ));
    }

    #[test]
    fn test_missing_parent_bucket_is_error() {
        let mut project = Project::new("test-project");
        project.add_bucket("testImplementation", &["implementation"]);

        assert!(matches!(
            project.contains("testImplementation", "g", "a"),
            Err(PluginError::InvalidScopeBucket { bucket }) if bucket == "implementation"
        ));
    }

    #[test]
    fn test_inheritance_cycle_terminates() {
        let mut project = Project::new("test-project");
        project.add_bucket("a", &["b"]).add_bucket("b", &["a"]);
        project.declare_coordinate("b", "g:x:1").unwrap();

        assert!(project.contains("a", "g", "x").unwrap());
        assert_eq!(project.all_dependencies("a").unwrap().len(), 1);
    }

    #[test]
    fn test_declare_into_missing_bucket_fails() {
        let mut project = Project::new("test-project");
        let err = project
            .declare_coordinate("implementation", "g:a:1")
            .unwrap_err();

        assert!(matches!(err, PluginError::InvalidScopeBucket { .. }));
    }

    #[test]
    fn test_declare_malformed_coordinate_fails() {
        let mut project = Project::java("test-project");
        let err = project.declare_coordinate("implementation", "g:a").unwrap_err();

        assert_eq!(err.to_string(), "Dependency id 'g:a' is invalid");
    }

    #[test]
    fn test_compiler_args_are_appended() {
        let mut project = Project::new("test-project");
        project.add_compile_task(COMPILE_JAVA_TASK, vec!["-parameters".to_string()]);

        project
            .append_compiler_args(COMPILE_JAVA_TASK, &["-Afoo=bar".to_string()])
            .unwrap();

        assert_eq!(
            project.compile_task(COMPILE_JAVA_TASK).unwrap().args(),
            &["-parameters".to_string(), "-Afoo=bar".to_string()]
        );
    }

    #[test]
    fn test_compiler_args_for_unknown_task() {
        let mut project = Project::new("test-project");
        let err = project.append_compiler_args("compileKotlin", &[]).unwrap_err();

        assert_eq!(err.to_string(), "Compile task 'compileKotlin' does not exist");
    }
}
