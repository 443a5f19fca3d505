// src/registry/builtin.rs

use crate::core_types::ProcessingPath::{self, Code, Structured};

/// One row of the built-in table:
/// (extension, name, icon, highlight, path, mime type, description).
type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    ProcessingPath,
    &'static str,
    &'static str,
);

const PROGRAMMING_LANGUAGES: &[Row] = &[
    (".py", "Python", "🐍", "python", Code, "text/x-python", "Python source code"),
    (".java", "Java", "☕", "java", Code, "text/x-java-source", "Java source code"),
    (".js", "JavaScript", "🟨", "javascript", Code, "text/javascript", "JavaScript source code"),
    (".ts", "TypeScript", "🔷", "typescript", Code, "text/typescript", "TypeScript source code"),
    (".jsx", "JSX", "⚛️", "jsx", Code, "text/jsx", "JSX React component"),
    (".tsx", "TSX", "⚛️", "tsx", Code, "text/tsx", "TSX React component"),
    (".c", "C", "🔧", "c", Code, "text/x-c", "C source code"),
    (".cpp", "C++", "🔧", "cpp", Code, "text/x-c++", "C++ source code"),
    (".cc", "C++", "🔧", "cpp", Code, "text/x-c++", "C++ source code"),
    (".cxx", "C++", "🔧", "cpp", Code, "text/x-c++", "C++ source code"),
    (".h", "C Header", "📋", "c", Code, "text/x-c", "C header file"),
    (".hpp", "C++ Header", "📋", "cpp", Code, "text/x-c++", "C++ header file"),
    (".cs", "C#", "💎", "csharp", Code, "text/x-csharp", "C# source code"),
    (".go", "Go", "🐹", "go", Code, "text/x-go", "Go source code"),
    (".rs", "Rust", "🦀", "rust", Code, "text/x-rust", "Rust source code"),
    (".php", "PHP", "🐘", "php", Code, "text/x-php", "PHP source code"),
    (".rb", "Ruby", "💎", "ruby", Code, "text/x-ruby", "Ruby source code"),
    (".swift", "Swift", "🦉", "swift", Code, "text/x-swift", "Swift source code"),
    (".kt", "Kotlin", "🎯", "kotlin", Code, "text/x-kotlin", "Kotlin source code"),
    (".scala", "Scala", "🎼", "scala", Code, "text/x-scala", "Scala source code"),
    (".r", "R", "📊", "r", Code, "text/x-r", "R source code"),
    (".m", "MATLAB", "🧮", "matlab", Code, "text/x-matlab", "MATLAB source code"),
    (".pl", "Perl", "🐪", "perl", Code, "text/x-perl", "Perl source code"),
    (".lua", "Lua", "🌙", "lua", Code, "text/x-lua", "Lua source code"),
    (".sh", "Shell", "🐚", "bash", Code, "text/x-shellscript", "Shell script"),
    (".bash", "Bash", "🐚", "bash", Code, "text/x-shellscript", "Bash script"),
    (".zsh", "Zsh", "🐚", "zsh", Code, "text/x-shellscript", "Zsh script"),
    (".fish", "Fish", "🐠", "fish", Code, "text/x-shellscript", "Fish shell script"),
    (".ps1", "PowerShell", "🔵", "powershell", Code, "text/x-powershell", "PowerShell script"),
    (".sql", "SQL", "🗃️", "sql", Code, "text/x-sql", "SQL script"),
    (".vim", "Vim Script", "📝", "vim", Code, "text/x-vim", "Vim script"),
    (".el", "Emacs Lisp", "📝", "elisp", Code, "text/x-elisp", "Emacs Lisp"),
];

const WEB_TECHNOLOGIES: &[Row] = &[
    (".html", "HTML", "🌐", "html", Code, "text/html", "HTML document"),
    (".htm", "HTML", "🌐", "html", Code, "text/html", "HTML document"),
    (".css", "CSS", "🎨", "css", Code, "text/css", "CSS stylesheet"),
    (".scss", "SCSS", "🎨", "scss", Code, "text/x-scss", "SCSS stylesheet"),
    (".sass", "Sass", "🎨", "sass", Code, "text/x-sass", "Sass stylesheet"),
    (".less", "Less", "🎨", "less", Code, "text/x-less", "Less stylesheet"),
    (".vue", "Vue", "💚", "vue", Code, "text/x-vue", "Vue component"),
    (".svelte", "Svelte", "🧡", "svelte", Code, "text/x-svelte", "Svelte component"),
];

const STRUCTURED_FORMATS: &[Row] = &[
    (".json", "JSON", "📄", "json", Structured, "application/json", "JSON data"),
    (".xml", "XML", "📜", "xml", Structured, "application/xml", "XML document"),
    (".yaml", "YAML", "📋", "yaml", Structured, "text/yaml", "YAML configuration"),
    (".yml", "YAML", "📋", "yaml", Structured, "text/yaml", "YAML configuration"),
    (".toml", "TOML", "📋", "toml", Structured, "text/x-toml", "TOML configuration"),
    (".ini", "INI", "⚙️", "ini", Structured, "text/plain", "INI configuration"),
    (".cfg", "Config", "⚙️", "ini", Structured, "text/plain", "Configuration file"),
    (".conf", "Config", "⚙️", "apache", Structured, "text/plain", "Configuration file"),
    (".properties", "Properties", "⚙️", "properties", Structured, "text/plain", "Properties file"),
];

const DOCUMENTATION: &[Row] = &[
    (".md", "Markdown", "📝", "markdown", Code, "text/markdown", "Markdown document"),
    (".rst", "reStructuredText", "📝", "rst", Code, "text/x-rst", "reStructuredText document"),
    (".tex", "LaTeX", "📄", "latex", Code, "text/x-latex", "LaTeX document"),
    (".adoc", "AsciiDoc", "📝", "asciidoc", Code, "text/x-asciidoc", "AsciiDoc document"),
    (".org", "Org Mode", "📝", "org", Code, "text/x-org", "Org mode document"),
];

const TEMPLATES: &[Row] = &[
    (".expr", "Expression", "📝", "python", Code, "text/plain", "Expression library"),
    (".j2", "Jinja2", "🏷️", "jinja2", Code, "text/x-jinja2", "Jinja2 template"),
    (".jinja", "Jinja2", "🏷️", "jinja2", Code, "text/x-jinja2", "Jinja2 template"),
    (".hbs", "Handlebars", "🏷️", "handlebars", Code, "text/x-handlebars", "Handlebars template"),
    (".mustache", "Mustache", "🏷️", "mustache", Code, "text/x-mustache", "Mustache template"),
];

const BUILD_FILES: &[Row] = &[
    (".dockerfile", "Dockerfile", "🐳", "dockerfile", Code, "text/x-dockerfile", "Docker configuration"),
    (".makefile", "Makefile", "🔨", "makefile", Code, "text/x-makefile", "Make configuration"),
    (".cmake", "CMake", "🔨", "cmake", Code, "text/x-cmake", "CMake configuration"),
    (".gradle", "Gradle", "🐘", "gradle", Code, "text/x-gradle", "Gradle build script"),
    (".pom", "Maven POM", "📦", "xml", Structured, "application/xml", "Maven POM file"),
];

/// All built-in rows, grouped by family.
pub(super) fn rows() -> impl Iterator<Item = &'static Row> {
    PROGRAMMING_LANGUAGES
        .iter()
        .chain(WEB_TECHNOLOGIES)
        .chain(STRUCTURED_FORMATS)
        .chain(DOCUMENTATION)
        .chain(TEMPLATES)
        .chain(BUILD_FILES)
}
