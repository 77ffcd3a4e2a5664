//! Integration tests for applying the plugin to a project
//!
//! Covers ordering of added dependencies, compiler argument synthesis and
//! the guarantee that a failed plan leaves the project untouched.

use mapstruct_plugin::arguments::ArgumentSynthesizer;
use mapstruct_plugin::options::{ComponentModel, InjectionStrategy, ReportingPolicy};
use mapstruct_plugin::{
    CompilerArgsSink, DependencySink, Descriptor, GeneratorOption, MapstructOptions,
    MapstructPlugin, OptionReadError, OptionSource, OptionValue, PluginError, Project, RuleTable,
};
use std::cell::Cell;

const DEFAULT_ARGS: [&str; 10] = [
    "-Amapstruct.suppressGeneratorTimestamp=false",
    "-Amapstruct.verbose=false",
    "-Amapstruct.suppressGeneratorVersionInfoComment=false",
    "-Amapstruct.defaultComponentModel=default",
    "-Amapstruct.defaultInjectionStrategy=field",
    "-Amapstruct.unmappedTargetPolicy=WARN",
    "-Amapstruct.unmappedSourcePolicy=WARN",
    "-Amapstruct.disableBuilders=false",
    "-Amapstruct.nullValueIterableMappingStrategy=RETURN_NULL",
    "-Amapstruct.nullValueMapMappingStrategy=RETURN_NULL",
];

fn spring_lombok_project() -> Project {
    let mut project = Project::java("orders");
    project
        .declare_coordinate("annotationProcessor", "org.projectlombok:lombok:1.18.36")
        .unwrap();
    project
        .declare_coordinate("implementation", "org.springframework:spring-core:6.2.5")
        .unwrap();
    project
}

/// Fails when asked for one option, counting every read
struct BrokenOptions {
    broken: GeneratorOption,
    reads: Cell<usize>,
}

impl OptionSource for BrokenOptions {
    fn read(&self, option: GeneratorOption) -> Result<OptionValue, OptionReadError> {
        self.reads.set(self.reads.get() + 1);
        if option == self.broken {
            Err(OptionReadError::new("value not yet known"))
        } else {
            MapstructOptions::default().read(option)
        }
    }
}

/// Records every call in order
#[derive(Default)]
struct RecordingSink {
    calls: Vec<String>,
}

impl DependencySink for RecordingSink {
    fn add_dependency(&mut self, descriptor: &Descriptor) -> mapstruct_plugin::Result<()> {
        self.calls.push(format!("dep {}", descriptor));
        Ok(())
    }
}

impl CompilerArgsSink for RecordingSink {
    fn has_compile_task(&self, task: &str) -> bool {
        task == "compileJava"
    }

    fn append_compiler_args(&mut self, task: &str, args: &[String]) -> mapstruct_plugin::Result<()> {
        self.calls.push(format!("args {} {}", task, args.len()));
        Ok(())
    }
}

#[test]
fn test_apply_to_plain_project_adds_required_and_default_args() {
    let mut project = Project::java("plain");
    let options = project.options().clone();

    let plan = MapstructPlugin::default().apply(&mut project, &options).unwrap();

    assert_eq!(plan.descriptors().len(), 2);
    assert_eq!(
        project.bucket("implementation").unwrap().coordinates(),
        vec!["org.mapstruct:mapstruct:1.6.3"]
    );
    assert_eq!(
        project.bucket("annotationProcessor").unwrap().coordinates(),
        vec!["org.mapstruct:mapstruct-processor:1.6.3"]
    );
    assert_eq!(project.compile_task("compileJava").unwrap().args(), DEFAULT_ARGS);
}

#[test]
fn test_apply_orders_required_before_optional() {
    let project = spring_lombok_project();
    let plan = MapstructPlugin::default()
        .plan(&project, project.options())
        .unwrap();

    let mut sink = RecordingSink::default();
    MapstructPlugin::apply_plan(&plan, &mut sink).unwrap();

    assert_eq!(
        sink.calls,
        vec![
            "dep implementation org.mapstruct:mapstruct:1.6.3",
            "dep annotationProcessor org.mapstruct:mapstruct-processor:1.6.3",
            "dep annotationProcessor org.projectlombok:lombok-mapstruct-binding:0.2.0",
            "dep annotationProcessor org.mapstruct.extensions.spring:mapstruct-spring-extensions:1.1.3",
            "dep implementation org.mapstruct.extensions.spring:mapstruct-spring-annotations:1.1.3",
            "dep testImplementation org.mapstruct.extensions.spring:mapstruct-spring-test-extensions:1.1.3",
            "args compileJava 10",
        ]
    );
}

#[test]
fn test_apply_appends_after_existing_args() {
    let mut project = Project::new("legacy");
    project
        .add_bucket("annotationProcessor", &[])
        .add_bucket("implementation", &[])
        .add_compile_task("compileJava", vec!["-parameters".to_string(), "-Xlint:all".to_string()]);

    let options = project.options().clone();
    MapstructPlugin::default().apply(&mut project, &options).unwrap();

    let args = project.compile_task("compileJava").unwrap().args();
    assert_eq!(args.len(), 12);
    assert_eq!(args[0], "-parameters");
    assert_eq!(args[1], "-Xlint:all");
    assert_eq!(args[2], DEFAULT_ARGS[0]);
    assert_eq!(args[11], DEFAULT_ARGS[9]);
}

#[test]
fn test_plan_reflects_configured_options() {
    let mut project = Project::java("configured");
    {
        let options = project.options_mut();
        options.verbose = true;
        options.default_component_model = ComponentModel::Spring;
        options.default_injection_strategy = InjectionStrategy::Constructor;
        options.unmapped_target_policy = ReportingPolicy::Error;
    }

    let plan = MapstructPlugin::default()
        .plan(&project, project.options())
        .unwrap();

    assert_eq!(plan.compiler_args[1], "-Amapstruct.verbose=true");
    assert_eq!(plan.compiler_args[3], "-Amapstruct.defaultComponentModel=spring");
    assert_eq!(
        plan.compiler_args[4],
        "-Amapstruct.defaultInjectionStrategy=constructor"
    );
    assert_eq!(plan.compiler_args[5], "-Amapstruct.unmappedTargetPolicy=ERROR");
    assert_eq!(plan.compiler_args[6], "-Amapstruct.unmappedSourcePolicy=WARN");
}

#[test]
fn test_custom_prefix_and_task() {
    let mut project = Project::java("kotlin");
    project.add_compile_task("kaptKotlin", Vec::new());

    let plugin = MapstructPlugin::new(
        RuleTable::mapstruct(),
        ArgumentSynthesizer::with_prefix("-Amapstruct-custom"),
        "kaptKotlin",
    );
    let options = project.options().clone();
    plugin.apply(&mut project, &options).unwrap();

    assert!(project.compile_task("compileJava").unwrap().args().is_empty());
    assert_eq!(
        project.compile_task("kaptKotlin").unwrap().args()[0],
        "-Amapstruct-custom.suppressGeneratorTimestamp=false"
    );
}

#[test]
fn test_failed_option_read_leaves_project_unchanged() {
    let mut project = spring_lombok_project();
    let before = project.clone();
    let options = BrokenOptions {
        broken: GeneratorOption::DefaultComponentModel,
        reads: Cell::new(0),
    };

    let err = MapstructPlugin::default()
        .apply(&mut project, &options)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Can't fetch compiler argument for 'defaultComponentModel'"
    );
    assert!(matches!(err, PluginError::OptionReadFailure { .. }));
    assert_eq!(options.reads.get(), 4);
    assert_eq!(project, before);
}

#[test]
fn test_missing_compile_task_is_reported() {
    let mut project = spring_lombok_project();
    let before = project.clone();
    let plugin = MapstructPlugin::new(RuleTable::mapstruct(), ArgumentSynthesizer::new(), "kaptKotlin");
    let options = project.options().clone();

    let err = plugin.apply(&mut project, &options).unwrap_err();

    match err {
        PluginError::CompileTaskNotFound { task } => assert_eq!(task, "kaptKotlin"),
        other => panic!("Expected CompileTaskNotFound, got {:?}", other),
    }
    assert_eq!(project, before);
}

#[test]
fn test_missing_compile_task_writes_nothing_to_sink() {
    let project = Project::java("no-kapt");
    let plugin = MapstructPlugin::new(RuleTable::mapstruct(), ArgumentSynthesizer::new(), "kaptKotlin");
    let plan = plugin.plan(&project, project.options()).unwrap();

    let mut sink = RecordingSink::default();
    let err = MapstructPlugin::apply_plan(&plan, &mut sink).unwrap_err();

    assert!(matches!(err, PluginError::CompileTaskNotFound { .. }));
    assert!(sink.calls.is_empty());
}

#[test]
fn test_second_apply_skips_existing_binding() {
    let mut project = spring_lombok_project();
    let options = project.options().clone();
    let plugin = MapstructPlugin::default();

    plugin.apply(&mut project, &options).unwrap();
    let second = plugin.apply(&mut project, &options).unwrap();

    let binding_count = project
        .bucket("annotationProcessor")
        .unwrap()
        .coordinates()
        .iter()
        .filter(|c| c.contains("lombok-mapstruct-binding"))
        .count();
    assert_eq!(binding_count, 1);
    assert!(second
        .descriptors()
        .iter()
        .all(|d| d.artifact() != "lombok-mapstruct-binding"));
}

#[test]
fn test_report_lists_added_descriptors() {
    let mut project = spring_lombok_project();
    let options = project.options().clone();
    let plan = MapstructPlugin::default().apply(&mut project, &options).unwrap();

    let report = MapstructPlugin::report(project.name(), &plan);

    assert_eq!(report.project, "orders");
    assert_eq!(report.added.len(), 6);
    assert_eq!(report.compile_task, "compileJava");
    assert_eq!(report.compiler_args, DEFAULT_ARGS);
}

#[test]
fn test_plan_is_deterministic() {
    let project = spring_lombok_project();
    let plugin = MapstructPlugin::default();

    let first = plugin.plan(&project, project.options()).unwrap();
    let second = plugin.plan(&project, project.options()).unwrap();

    assert_eq!(first, second);
}
