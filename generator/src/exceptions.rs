//! Hand-maintained mapping rules for jars that cannot be inferred.
//!
//! Many jars in a server distribution are renamed or shipped without a
//! version. Nearly every Tomcat `catalina-foo.jar`, for example, is
//! published to Maven Central as `tomcat-foo`. The Eclipse compiler jar
//! that Tomcat bundles is never published at the bundled version at all.
//!
//! Exact-name rules form an immutable map, so a name can match at most one
//! of them. Prefix families are consulted only when no exact rule matches.
//! The families use disjoint prefixes, so their order does not matter.

use bomgen::GeneratorConfig;
use bomgen_common::{Coordinate, VersionSpec};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

const TOMCAT_GROUP: &str = "org.apache.tomcat";
const TOMEE_GROUP: &str = "org.apache.tomee";

/// Prefix of the Eclipse compiler jar (`ecj-4.12.jar` and friends).
const ECJ_PREFIX: &str = "ecj-";

/// Prefixes of jars built by this project.
const PROJECT_PREFIXES: [&str; 2] = ["openejb-", "tomee-"];

#[derive(Clone, Copy)]
enum Pin {
    Literal(&'static str),
    Project,
    Platform,
}

impl Pin {
    fn version(self) -> VersionSpec {
        match self {
            Self::Literal(version) => VersionSpec::literal(version),
            Self::Project => VersionSpec::project(),
            Self::Platform => VersionSpec::platform(),
        }
    }
}

/// `(file name, group, artifact, version)` for every exact-name rule.
const EXACT_RULES: &[(&str, &str, &str, Pin)] = &[
    ("commons-daemon.jar", "commons-daemon", "commons-daemon", Pin::Literal("1.1.0")),
    ("tomcat-juli.jar", TOMEE_GROUP, "tomee-juli", Pin::Project),
    ("openejb-javaagent.jar", TOMEE_GROUP, "openejb-javaagent", Pin::Project),
    ("catalina-ha.jar", TOMCAT_GROUP, "tomcat-catalina-ha", Pin::Platform),
    ("catalina-storeconfig.jar", TOMCAT_GROUP, "tomcat-storeconfig", Pin::Platform),
    ("catalina-tribes.jar", TOMCAT_GROUP, "tomcat-tribes", Pin::Platform),
    ("catalina-ssi.jar", TOMCAT_GROUP, "tomcat-ssi", Pin::Platform),
    ("catalina.jar", TOMCAT_GROUP, "tomcat-catalina", Pin::Platform),
    ("el-api.jar", TOMCAT_GROUP, "tomcat-el-api", Pin::Platform),
    ("jasper-el.jar", TOMCAT_GROUP, "tomcat-jasper-el", Pin::Platform),
    ("jasper.jar", TOMCAT_GROUP, "tomcat-jasper", Pin::Platform),
    ("jaspic-api.jar", TOMCAT_GROUP, "tomcat-jaspic-api", Pin::Platform),
    ("servlet-api.jar", TOMCAT_GROUP, "tomcat-servlet-api", Pin::Platform),
    ("websocket-api.jar", TOMCAT_GROUP, "tomcat-websocket-api", Pin::Platform),
    ("jsp-api.jar", TOMCAT_GROUP, "tomcat-jsp-api", Pin::Platform),
    ("tomcat-coyote.jar", TOMCAT_GROUP, "tomcat-coyote", Pin::Platform),
    ("tomcat-dbcp.jar", TOMCAT_GROUP, "tomcat-dbcp", Pin::Platform),
    ("tomcat-api.jar", TOMCAT_GROUP, "tomcat-api", Pin::Platform),
    ("tomcat-websocket.jar", TOMCAT_GROUP, "tomcat-websocket", Pin::Platform),
    ("tomcat-util.jar", TOMCAT_GROUP, "tomcat-util", Pin::Platform),
    ("tomcat-util-scan.jar", TOMCAT_GROUP, "tomcat-util-scan", Pin::Platform),
    ("tomcat-jni.jar", TOMCAT_GROUP, "tomcat-jni", Pin::Platform),
    ("tomcat-jdbc.jar", TOMCAT_GROUP, "tomcat-jdbc", Pin::Platform),
];

static EXACT: Lazy<HashMap<&'static str, Coordinate>> = Lazy::new(|| {
    EXACT_RULES
        .iter()
        .map(|&(name, group, artifact, pin)| {
            (name, Coordinate::new(group, artifact, pin.version()))
        })
        .collect()
});

/// The rule that produced a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// An exact file-name rule.
    ExactName,
    /// The Eclipse compiler family (`ecj-*`).
    EclipseCompiler,
    /// The project module family (`openejb-*`, `tomee-*`).
    ProjectModule,
}

/// Exact-name rules plus the prefix families, configured for one release.
#[derive(Debug, Clone)]
pub struct ExceptionTable {
    release_marker: String,
    binary_suffix: String,
    ecj: Coordinate,
}

impl ExceptionTable {
    /// Build the table for the configured release line.
    #[must_use]
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            release_marker: format!("-{}", config.release_line),
            binary_suffix: format!(".{}", config.binary_extension),
            ecj: Coordinate::new("org.eclipse.jdt", "ecj", config.ecj_version.as_str()),
        }
    }

    /// Look up `name` in the exact table, then the prefix families.
    ///
    /// # Examples
    ///
    /// ```
    /// use bomgen::GeneratorConfig;
    /// use bomgen_generator::exceptions::{ExceptionTable, Rule};
    ///
    /// let table = ExceptionTable::new(&GeneratorConfig::default());
    /// let (coordinate, rule) = table.lookup("openejb-core-8.0.6.jar").expect("project jar");
    /// assert_eq!(coordinate.to_string(), "org.apache.tomee:openejb-core:${project.version}");
    /// assert_eq!(rule, Rule::ProjectModule);
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<(Coordinate, Rule)> {
        if let Some(coordinate) = EXACT.get(name) {
            return Some((coordinate.clone(), Rule::ExactName));
        }

        if name.starts_with(ECJ_PREFIX) {
            return Some((self.ecj.clone(), Rule::EclipseCompiler));
        }

        if PROJECT_PREFIXES.iter().any(|prefix| name.starts_with(prefix)) {
            let artifact = self.trim_release(name);
            return Some((
                Coordinate::new(TOMEE_GROUP, artifact, VersionSpec::project()),
                Rule::ProjectModule,
            ));
        }

        None
    }

    /// Strip everything from the release marker onwards, or just the binary
    /// extension when the name carries no release version.
    fn trim_release<'a>(&self, name: &'a str) -> &'a str {
        match name.find(&self.release_marker) {
            Some(end) => name.get(..end).unwrap_or(name),
            None => name.strip_suffix(&self.binary_suffix).unwrap_or(name),
        }
    }
}
