//! iconwrap - wrap SVG icon sets as template code
//!
//! Every `.svg` file under an input directory becomes one generated file:
//! either an ES module exporting a function that returns the markup, or an
//! EJS partial. Size, class and style become parameters.

mod emit;
mod error;
mod format;
mod ident;
mod logger;
mod transform;
mod walk;

use std::collections::HashMap;
use std::path::PathBuf;

pub use emit::*;
pub use error::*;
pub use format::*;
pub use ident::*;
pub use logger::*;
pub use transform::*;
pub use walk::*;

/// Input directory used when none is given.
pub const DEFAULT_INDIR: &str = "../_sandbox/icons/icons";

/// Name prefix used when none is given.
pub const DEFAULT_PREFIX: &str = "bsIcon";

/// Icon sets whose square `viewBox` decides the default size.
pub const DEFAULT_SIZED_ICON_SETS: &[&str] = &["heroicons"];

/// Build configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the SVG source tree
    pub indir: PathBuf,
    /// Where generated files are written
    pub outdir: PathBuf,
    /// Name prefix (empty disables prefixing)
    pub prefix: String,
    /// Kind of artifact to generate
    pub format: OutputFormat,
    /// Fallback size (default: 16)
    pub default_size: u32,
    /// Substrings of `indir` that enable viewBox size inference
    pub sized_icon_sets: Vec<String>,
    /// Suppress informational output
    pub silent: bool,
}

impl Default for Config {
    fn default() -> Self {
        let format = OutputFormat::default();
        Self {
            indir: PathBuf::from(DEFAULT_INDIR),
            outdir: PathBuf::from(format.default_outdir()),
            prefix: DEFAULT_PREFIX.to_string(),
            format,
            default_size: DEFAULT_SIZE,
            sized_icon_sets: DEFAULT_SIZED_ICON_SETS.iter().map(|s| s.to_string()).collect(),
            silent: false,
        }
    }
}

impl Config {
    /// Whether `indir` belongs to an icon set sized by its viewBox.
    pub fn infers_size(&self) -> bool {
        let indir = self.indir.to_string_lossy();
        self.sized_icon_sets
            .iter()
            .any(|marker| !marker.is_empty() && indir.contains(marker.as_str()))
    }

    fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            format: self.format,
            default_size: self.default_size,
            infer_size: self.infers_size(),
        }
    }
}

/// Two source files that mapped to the same artifact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub name: String,
    /// Source whose output was overwritten
    pub overwritten: PathBuf,
    /// Source that won
    pub winner: PathBuf,
}

/// Outcome of a build.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub outdir: PathBuf,
    /// Every write, in order
    pub artifacts: Vec<TemplateArtifact>,
    pub collisions: Vec<Collision>,
}

/// Generate one artifact per SVG file under `config.indir`.
///
/// The first error aborts the build; files already written stay on disk.
pub fn build(config: &Config, logger: &Logger) -> Result<BuildReport, IconError> {
    let icons = discover(&config.indir)?;
    let emitter = Emitter::new(config.format)?;
    let options = config.transform_options();

    let mut report = BuildReport {
        outdir: config.outdir.clone(),
        ..BuildReport::default()
    };
    let mut sources: HashMap<String, PathBuf> = HashMap::new();

    for icon in icons {
        let icon = icon?;
        let name = artifact_name(&config.prefix, &derive_id(&icon.relative));

        if config.format == OutputFormat::Function && !is_js_identifier(&name) {
            logger.warn(format!(
                "    ! {name}: not a valid JavaScript identifier ({})",
                icon.path.display()
            ));
        }

        if let Some(previous) = sources.insert(name.clone(), icon.path.clone()) {
            logger.warn(format!(
                "    ! {name}: {} overwrites {}",
                icon.path.display(),
                previous.display()
            ));
            report.collisions.push(Collision {
                name: name.clone(),
                overwritten: previous,
                winner: icon.path.clone(),
            });
        }

        let body = transform(&icon.read()?, &options);
        let artifact = emitter.emit(&name, &body, &config.outdir)?;

        logger.info(format!("    ✔ {name}"));
        report.artifacts.push(artifact);
    }

    logger.info(format!("\nDone -> {}\n", config.outdir.display()));

    Ok(report)
}
