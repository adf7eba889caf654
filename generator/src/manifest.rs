//! BOM rendering and emission.
//!
//! Each distribution becomes one `pom.xml` listing every mapped jar as a
//! dependency. In the default [`ManifestStyle::Bom`] every dependency
//! excludes all of its transitive dependencies, so the BOM is a one-to-one
//! image of the server zip.

use crate::distribution::Distribution;
use crate::error::{GeneratorError, Result};
use bomgen_common::Coordinate;
use camino::{Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use log::info;
use std::fs;

/// Template text replaced by the distribution's display name.
pub const DISPLAY_NAME_MARKER: &str = "TomEE MicroProfile";

/// Template text replaced by the distribution's short name.
pub const SHORT_NAME_MARKER: &str = "tomee-microprofile";

/// Template text replaced by the rendered dependency blocks.
pub const DEPENDENCIES_MARKER: &str = "<!--dependencies-->";

const BUILTIN_TEMPLATE: &str = include_str!("../templates/pom-template.xml");

/// How dependency blocks are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ManifestStyle {
    /// Pin each dependency and exclude all transitive dependencies.
    #[default]
    Bom,
    /// Version-only entries suitable for a parent's `dependencyManagement`.
    Managed,
}

/// Render one `<dependency>` block.
///
/// # Examples
///
/// ```
/// use bomgen_common::Coordinate;
/// use bomgen_generator::manifest::{ManifestStyle, render_dependency};
///
/// let block = render_dependency(&Coordinate::new("g", "a", "1"), ManifestStyle::Managed);
/// assert!(block.contains("<artifactId>a</artifactId>"));
/// assert!(!block.contains("<exclusions>"));
/// ```
#[must_use]
pub fn render_dependency(coordinate: &Coordinate, style: ManifestStyle) -> String {
    let mut block = format!(
        concat!(
            "    <dependency>\n",
            "      <groupId>{}</groupId>\n",
            "      <artifactId>{}</artifactId>\n",
            "      <version>{}</version>\n",
        ),
        coordinate.group_id(),
        coordinate.artifact_id(),
        coordinate.version()
    );
    if style == ManifestStyle::Bom {
        block.push_str(concat!(
            "      <exclusions>\n",
            "        <exclusion>\n",
            "          <artifactId>*</artifactId>\n",
            "          <groupId>*</groupId>\n",
            "        </exclusion>\n",
            "      </exclusions>\n",
        ));
    }
    block.push_str("    </dependency>\n");
    block
}

/// A POM template with display-name, short-name and dependency markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// The template compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_text(BUILTIN_TEMPLATE)
    }

    /// Wrap template text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a template from disk.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::TemplateRead`] if the file cannot be read.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        fs::read_to_string(path)
            .map(Self::from_text)
            .map_err(|source| GeneratorError::TemplateRead {
                path: path.to_owned(),
                source,
            })
    }

    /// Render the POM for `distribution`.
    ///
    /// Markers are replaced in order: display name, short name, then the
    /// dependency list.
    #[must_use]
    pub fn render(&self, distribution: &Distribution, style: ManifestStyle) -> String {
        let dependencies: String = distribution
            .coordinates()
            .iter()
            .map(|coordinate| render_dependency(coordinate, style))
            .collect();

        self.text
            .replace(DISPLAY_NAME_MARKER, distribution.name().display())
            .replace(SHORT_NAME_MARKER, distribution.name().short())
            .replace(DEPENDENCIES_MARKER, &dependencies)
    }
}

/// Writes rendered BOMs to `<output_dir>/<short name>/pom.xml`.
#[derive(Debug, Clone)]
pub struct ManifestWriter {
    output_dir: Utf8PathBuf,
    template: Template,
    style: ManifestStyle,
}

impl ManifestWriter {
    /// Create a writer rooted at `output_dir`.
    #[must_use]
    pub const fn new(output_dir: Utf8PathBuf, template: Template, style: ManifestStyle) -> Self {
        Self {
            output_dir,
            template,
            style,
        }
    }

    /// Path the BOM for `distribution` is written to.
    #[must_use]
    pub fn manifest_path(&self, distribution: &Distribution) -> Utf8PathBuf {
        self.output_dir
            .join(distribution.name().short())
            .join("pom.xml")
    }

    /// Render and write the BOM for `distribution`, overwriting any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::WriteFailed`] if the directory or file
    /// cannot be written.
    pub fn write(&self, distribution: &Distribution) -> Result<Utf8PathBuf> {
        let path = self.manifest_path(distribution);
        let pom = self.template.render(distribution, self.style);

        let write_failed = |source| GeneratorError::WriteFailed {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
        fs::write(&path, pom).map_err(write_failed)?;

        info!("wrote {path}");
        Ok(path)
    }
}
