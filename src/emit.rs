//! Artifact rendering and writing.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment, context};

use crate::error::IconError;
use crate::format::OutputFormat;
use crate::transform::TemplateBody;

const FUNCTION_MODULE: &str = "// prettier-ignore
export const {{ name }} = (extraCls = null, size = {{ size }}, style = null) => `{{ markup }}`;
";

/// A generated file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateArtifact {
    /// Exported name, also the file stem.
    pub name: String,
    pub path: PathBuf,
}

/// Renders template bodies for one output format and writes them to disk.
pub struct Emitter {
    format: OutputFormat,
    env: Environment<'static>,
}

impl Emitter {
    pub fn new(format: OutputFormat) -> Result<Self, IconError> {
        let mut env = Environment::new();
        // Markup is emitted verbatim into source files.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.add_template("function", FUNCTION_MODULE)?;

        Ok(Self { format, env })
    }

    /// Render the file content for `body` exported as `name`.
    pub fn render(&self, name: &str, body: &TemplateBody) -> Result<String, IconError> {
        match self.format {
            OutputFormat::Function => {
                let tmpl = self.env.get_template("function")?;
                Ok(tmpl.render(context! {
                    name => name,
                    size => body.size,
                    markup => body.markup,
                })?)
            }
            OutputFormat::Ejs => Ok(format!("{}\n", body.markup)),
        }
    }

    /// Render and write `<outdir>/<name>.<ext>`, creating `outdir` as needed.
    /// An existing file at that path is overwritten.
    pub fn emit(
        &self,
        name: &str,
        body: &TemplateBody,
        outdir: &Path,
    ) -> Result<TemplateArtifact, IconError> {
        let content = self.render(name, body)?;

        fs::create_dir_all(outdir).map_err(|source| IconError::Write {
            path: outdir.to_path_buf(),
            source,
        })?;

        let path = outdir.join(format!("{name}.{}", self.format.extension()));
        fs::write(&path, &content).map_err(|source| IconError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(TemplateArtifact {
            name: name.to_string(),
            path,
        })
    }
}
