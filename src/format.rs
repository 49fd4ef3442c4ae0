//! Output formats and their placeholder syntax.

/// What a generated artifact looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// An ES module exporting one arrow function returning a template literal.
    #[default]
    Function,
    /// An EJS partial reading `locals.style`, `locals.extraCls` and `locals.size`.
    Ejs,
}

/// A runtime parameter of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Style,
    ExtraCls,
    Size,
}

impl Param {
    pub fn name(self) -> &'static str {
        match self {
            Param::Style => "style",
            Param::ExtraCls => "extraCls",
            Param::Size => "size",
        }
    }
}

impl OutputFormat {
    /// Placeholder expression for `param`, in the format's native syntax.
    ///
    /// `default_size` is only embedded by formats that resolve the fallback
    /// at the placeholder itself; function modules carry it in the signature.
    pub fn placeholder(self, param: Param, default_size: u32) -> String {
        let name = param.name();
        match (self, param) {
            (OutputFormat::Function, Param::Size) => format!("${{{name}}}"),
            (OutputFormat::Function, _) => format!("${{{name} || ''}}"),
            (OutputFormat::Ejs, Param::Size) => format!("<%= locals.{name} || {default_size} %>"),
            (OutputFormat::Ejs, _) => format!("<%= locals.{name} || '' %>"),
        }
    }

    /// File extension of emitted artifacts.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Function => "js",
            OutputFormat::Ejs => "ejs",
        }
    }

    /// Output directory used when none is given.
    pub fn default_outdir(self) -> &'static str {
        match self {
            OutputFormat::Function => "./build/bs-icons",
            OutputFormat::Ejs => "./build/bs-icons-ejs",
        }
    }
}
