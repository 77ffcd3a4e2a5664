//! Known artifacts and build markers
//!
//! Versions pin the releases the plugin was last verified against.

use super::{Descriptor, Scope};

/// Compile-time description of a published artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub scope: Scope,
    pub group: &'static str,
    pub artifact: &'static str,
    pub version: &'static str,
}

impl CatalogEntry {
    pub const fn new(
        scope: Scope,
        group: &'static str,
        artifact: &'static str,
        version: &'static str,
    ) -> Self {
        Self {
            scope,
            group,
            artifact,
            version,
        }
    }

    pub fn descriptor(&self) -> Descriptor {
        Descriptor::new(self.scope.clone(), self.group, self.artifact, self.version)
    }
}

// Added by the plugin

pub const MAPSTRUCT: CatalogEntry =
    CatalogEntry::new(Scope::Implementation, "org.mapstruct", "mapstruct", "1.6.3");

pub const MAPSTRUCT_PROCESSOR: CatalogEntry = CatalogEntry::new(
    Scope::AnnotationProcessor,
    "org.mapstruct",
    "mapstruct-processor",
    "1.6.3",
);

pub const LOMBOK_MAPSTRUCT_BINDING: CatalogEntry = CatalogEntry::new(
    Scope::AnnotationProcessor,
    "org.projectlombok",
    "lombok-mapstruct-binding",
    "0.2.0",
);

pub const MAPSTRUCT_SPRING_EXTENSIONS: CatalogEntry = CatalogEntry::new(
    Scope::AnnotationProcessor,
    "org.mapstruct.extensions.spring",
    "mapstruct-spring-extensions",
    "1.1.3",
);

pub const MAPSTRUCT_SPRING_ANNOTATIONS: CatalogEntry = CatalogEntry::new(
    Scope::Implementation,
    "org.mapstruct.extensions.spring",
    "mapstruct-spring-annotations",
    "1.1.3",
);

pub const MAPSTRUCT_SPRING_TEST_EXTENSIONS: CatalogEntry = CatalogEntry::new(
    Scope::TestImplementation,
    "org.mapstruct.extensions.spring",
    "mapstruct-spring-test-extensions",
    "1.1.3",
);

pub const CAMEL_MAPSTRUCT: CatalogEntry = CatalogEntry::new(
    Scope::Implementation,
    "org.apache.camel",
    "camel-mapstruct",
    "4.11.0",
);

pub const CAMEL_MAPSTRUCT_STARTER: CatalogEntry = CatalogEntry::new(
    Scope::Implementation,
    "org.apache.camel.springboot",
    "camel-mapstruct-starter",
    "4.11.0",
);

pub const CAMEL_QUARKUS_MAPSTRUCT: CatalogEntry = CatalogEntry::new(
    Scope::Implementation,
    "org.apache.camel.quarkus",
    "camel-quarkus-mapstruct",
    "3.20.0",
);

// Detected in the build, never added

pub const LOMBOK: CatalogEntry = CatalogEntry::new(
    Scope::AnnotationProcessor,
    "org.projectlombok",
    "lombok",
    "1.18.36",
);

pub const SPRING_CORE: CatalogEntry = CatalogEntry::new(
    Scope::Implementation,
    "org.springframework",
    "spring-core",
    "6.2.5",
);

pub const SPRING_BOOT: CatalogEntry = CatalogEntry::new(
    Scope::Implementation,
    "org.springframework.boot",
    "spring-boot",
    "3.4.4",
);

pub const CAMEL_CORE: CatalogEntry = CatalogEntry::new(
    Scope::Implementation,
    "org.apache.camel",
    "camel-core",
    "4.11.0",
);

pub const QUARKUS_CORE: CatalogEntry =
    CatalogEntry::new(Scope::Implementation, "io.quarkus", "quarkus-core", "3.21.1");

/// Bucket created by the Lombok build plugin
pub const LOMBOK_BUCKET: &str = "lombok";

/// Bucket created by the Spring Boot build plugin
pub const SPRING_BOOT_BUCKET: &str = "bootArchives";

/// Extension registered by the Quarkus build plugin
pub const QUARKUS_EXTENSION: &str = "quarkus";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_build_well_formed_descriptors() {
        for entry in [
            MAPSTRUCT,
            MAPSTRUCT_PROCESSOR,
            LOMBOK_MAPSTRUCT_BINDING,
            MAPSTRUCT_SPRING_EXTENSIONS,
            MAPSTRUCT_SPRING_ANNOTATIONS,
            MAPSTRUCT_SPRING_TEST_EXTENSIONS,
            CAMEL_MAPSTRUCT,
            CAMEL_MAPSTRUCT_STARTER,
            CAMEL_QUARKUS_MAPSTRUCT,
            LOMBOK,
            SPRING_CORE,
            SPRING_BOOT,
            CAMEL_CORE,
            QUARKUS_CORE,
        ] {
            let descriptor = entry.descriptor();
            let reparsed = Descriptor::parse(entry.scope.clone(), descriptor.coordinate()).unwrap();
            assert_eq!(descriptor, reparsed);
        }
    }

    #[test]
    fn test_processor_goes_to_annotation_processor_bucket() {
        assert_eq!(MAPSTRUCT_PROCESSOR.scope, Scope::AnnotationProcessor);
        assert_eq!(
            MAPSTRUCT_PROCESSOR.descriptor().coordinate(),
            "org.mapstruct:mapstruct-processor:1.6.3"
        );
    }
}
