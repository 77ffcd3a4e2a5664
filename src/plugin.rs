//! Applies MapStruct to a build
//!
//! The plugin reads the build once, decides every dependency and compiler
//! argument to add, and only then writes. Required dependencies go first,
//! then optional ones in ecosystem order, then the compiler arguments are
//! appended after whatever arguments the compile task already has. A missing
//! compile task is reported before anything is written.

use crate::arguments::ArgumentSynthesizer;
use crate::config::PluginConfig;
use crate::dependency::Descriptor;
use crate::error::{PluginError, Result};
use crate::options::OptionSource;
use crate::project::COMPILE_JAVA_TASK;
use crate::resolution::{BuildSnapshot, DependencyResolver, EcosystemResolution, RuleTable};
use serde::Serialize;
use tracing::info;

/// Receives dependencies to declare in the host build
pub trait DependencySink {
    fn add_dependency(&mut self, descriptor: &Descriptor) -> Result<()>;
}

/// Receives arguments to append to a compile task
pub trait CompilerArgsSink {
    fn has_compile_task(&self, task: &str) -> bool;

    fn append_compiler_args(&mut self, task: &str, args: &[String]) -> Result<()>;
}

/// Everything one plugin pass will add
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyPlan {
    pub required: Vec<Descriptor>,
    pub optional: Vec<EcosystemResolution>,
    pub compile_task: String,
    pub compiler_args: Vec<String>,
}

impl ApplyPlan {
    /// All descriptors in the order they are applied
    pub fn descriptors(&self) -> Vec<&Descriptor> {
        self.required
            .iter()
            .chain(self.optional.iter().flat_map(|r| r.descriptors.iter()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub project: String,
    pub added: Vec<Descriptor>,
    pub compile_task: String,
    pub compiler_args: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MapstructPlugin {
    resolver: DependencyResolver,
    synthesizer: ArgumentSynthesizer,
    compile_task: String,
}

impl MapstructPlugin {
    pub fn new(rules: RuleTable, synthesizer: ArgumentSynthesizer, compile_task: &str) -> Self {
        Self {
            resolver: DependencyResolver::new(rules),
            synthesizer,
            compile_task: compile_task.to_string(),
        }
    }

    pub fn from_config(config: &PluginConfig) -> Self {
        Self::new(
            RuleTable::mapstruct(),
            ArgumentSynthesizer::with_prefix(&config.arg_prefix),
            &config.compile_task,
        )
    }

    pub fn resolver(&self) -> &DependencyResolver {
        &self.resolver
    }

    pub fn compile_task(&self) -> &str {
        &self.compile_task
    }

    /// Computes the plan without touching the build
    pub fn plan(&self, snapshot: &dyn BuildSnapshot, options: &dyn OptionSource) -> Result<ApplyPlan> {
        let required = self.resolver.resolve_required();
        let optional = self.resolver.resolve_ecosystems(snapshot)?;
        let compiler_args = self.synthesizer.synthesize(options)?;

        Ok(ApplyPlan {
            required,
            optional,
            compile_task: self.compile_task.clone(),
            compiler_args,
        })
    }

    /// Plans against the current state of `project`, then applies the plan
    pub fn apply<P>(&self, project: &mut P, options: &dyn OptionSource) -> Result<ApplyPlan>
    where
        P: BuildSnapshot + DependencySink + CompilerArgsSink,
    {
        let plan = self.plan(&*project, options)?;
        Self::apply_plan(&plan, project)?;
        Ok(plan)
    }

    pub fn apply_plan<P>(plan: &ApplyPlan, project: &mut P) -> Result<()>
    where
        P: DependencySink + CompilerArgsSink,
    {
        if !project.has_compile_task(&plan.compile_task) {
            return Err(PluginError::CompileTaskNotFound {
                task: plan.compile_task.clone(),
            });
        }

        info!("Adding {} dependencies", "MapStruct");
        add_all(&mut *project, &plan.required)?;

        for resolution in &plan.optional {
            info!("Adding {} dependencies", resolution.ecosystem);
            add_all(&mut *project, &resolution.descriptors)?;
        }

        project.append_compiler_args(&plan.compile_task, &plan.compiler_args)?;
        info!(
            task = %plan.compile_task,
            count = plan.compiler_args.len(),
            "Appended compiler arguments"
        );
        Ok(())
    }

    pub fn report(project_name: &str, plan: &ApplyPlan) -> ApplyReport {
        ApplyReport {
            project: project_name.to_string(),
            added: plan.descriptors().into_iter().cloned().collect(),
            compile_task: plan.compile_task.clone(),
            compiler_args: plan.compiler_args.clone(),
        }
    }
}

impl Default for MapstructPlugin {
    fn default() -> Self {
        Self::new(
            RuleTable::mapstruct(),
            ArgumentSynthesizer::new(),
            COMPILE_JAVA_TASK,
        )
    }
}

fn add_all(sink: &mut dyn DependencySink, descriptors: &[Descriptor]) -> Result<()> {
    for descriptor in descriptors {
        info!("- {}", descriptor.coordinate());
        sink.add_dependency(descriptor)?;
    }
    Ok(())
}
