use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;

/// Shebang lines are never documentation or code, in any language.
static SHEBANG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#!").unwrap());

/// Comment-syntax rules for one language.
///
/// The markers are stored as plain literals; the derived regex matchers are
/// compiled on first use and cached for the lifetime of the config. Every
/// pattern is built from `regex::escape`d literals, so compilation cannot
/// fail for any marker a registry entry or config file can supply.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub name: String,
    pub extensions: Vec<String>,
    pub line_comment: String,
    pub block_comment: Option<(String, String)>,
    pub doc_comment: Option<String>,
    matchers: OnceCell<Matchers>,
}

#[derive(Debug, Clone)]
struct Matchers {
    /// `^\s*{line_comment}\s?` - leading whitespace, marker, one optional space.
    single_line: Regex,
    /// `^\s*{block_start}\s?`
    block_open: Option<Regex>,
    /// `{block_end}`, anywhere in the line.
    block_close: Option<Regex>,
    /// `^\s*{doc_comment}` - suppressed lines, checked before everything else.
    doc_exclusion: Option<Regex>,
}

impl Matchers {
    fn compile(config: &LanguageConfig) -> Self {
        let prefix = |marker: &str| {
            Regex::new(&format!(r"^\s*{}\s?", regex::escape(marker)))
                .unwrap_or_else(|err| panic!("escaped marker pattern failed to compile: {err}"))
        };
        let anywhere = |marker: &str| {
            Regex::new(&regex::escape(marker))
                .unwrap_or_else(|err| panic!("escaped marker pattern failed to compile: {err}"))
        };
        let exclusion = |marker: &str| {
            Regex::new(&format!(r"^\s*{}", regex::escape(marker)))
                .unwrap_or_else(|err| panic!("escaped marker pattern failed to compile: {err}"))
        };

        Self {
            single_line: prefix(&config.line_comment),
            block_open: config
                .block_comment
                .as_ref()
                .map(|(start, _)| prefix(start)),
            block_close: config
                .block_comment
                .as_ref()
                .map(|(_, end)| anywhere(end)),
            doc_exclusion: config.doc_comment.as_deref().map(exclusion),
        }
    }
}

impl LanguageConfig {
    pub fn new(
        name: &str,
        extensions: Vec<&str>,
        line_comment: &str,
        block_comment: Option<(&str, &str)>,
        doc_comment: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|&s| s.to_string()).collect(),
            line_comment: line_comment.to_string(),
            block_comment: block_comment.map(|(s, e)| (s.to_string(), e.to_string())),
            doc_comment: doc_comment.map(str::to_string),
            matchers: OnceCell::new(),
        }
    }

    pub fn supports_extension(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }

    fn matchers(&self) -> &Matchers {
        self.matchers.get_or_init(|| Matchers::compile(self))
    }

    /// True for shebang lines and for lines starting with the language's
    /// doc-comment marker. Must be checked before the single-line matcher:
    /// for languages like Rust, `///` is a prefix-extension of `//` and would
    /// otherwise be taken for an ordinary comment.
    pub fn is_excluded(&self, line: &str) -> bool {
        if SHEBANG.is_match(line) {
            return true;
        }
        self.matchers()
            .doc_exclusion
            .as_ref()
            .is_some_and(|re| re.is_match(line))
    }

    /// Strips a single-line comment marker. Also removes a trailing
    /// block-close marker when the line happens to carry one, so shorthand
    /// one-line block forms come out clean.
    pub fn strip_line_comment<'a>(&self, line: &'a str) -> Option<&'a str> {
        let m = self.matchers().single_line.find(line)?;
        let rest = &line[m.end()..];
        Some(self.strip_close_suffix(rest))
    }

    /// Matches the degenerate block comment that opens and closes on the same
    /// line, e.g. `(* note *)`. Returns the inner text.
    pub fn strip_degenerate_block<'a>(&self, line: &'a str) -> Option<&'a str> {
        let matchers = self.matchers();
        let open = matchers.block_open.as_ref()?.find(line)?;
        let rest = &line[open.end()..];
        matchers.block_close.as_ref()?.find(rest)?;
        Some(self.strip_close_suffix(rest))
    }

    /// Matches a block-comment opener with no close on the same line.
    /// Returns the text after the start marker.
    pub fn strip_block_open<'a>(&self, line: &'a str) -> Option<&'a str> {
        let matchers = self.matchers();
        let open = matchers.block_open.as_ref()?.find(line)?;
        let rest = &line[open.end()..];
        if matchers
            .block_close
            .as_ref()
            .is_some_and(|re| re.is_match(rest))
        {
            return None;
        }
        Some(rest)
    }

    /// Inside an open block comment: returns the text before the close
    /// marker, right-trimmed, when this line closes the block.
    pub fn strip_block_close<'a>(&self, line: &'a str) -> Option<&'a str> {
        let close = self.matchers().block_close.as_ref()?.find(line)?;
        Some(line[..close.start()].trim_end())
    }

    fn strip_close_suffix<'a>(&self, text: &'a str) -> &'a str {
        let Some((_, end)) = &self.block_comment else {
            return text;
        };
        let trimmed = text.trim_end();
        match trimmed.strip_suffix(end.as_str()) {
            Some(before) => before.trim_end(),
            None => text,
        }
    }
}

// Built-in language definitions. Adding a language means adding one
// constructor here and listing it in the registry.
impl LanguageConfig {
    pub fn rust() -> Self {
        Self::new("rust", vec!["rs"], "//", Some(("/*", "*/")), Some("///"))
    }

    pub fn c() -> Self {
        Self::new("c", vec!["c", "h"], "//", Some(("/*", "*/")), None)
    }

    pub fn cpp() -> Self {
        Self::new(
            "cpp",
            vec!["cpp", "cc", "cxx", "hpp", "hh"],
            "//",
            Some(("/*", "*/")),
            None,
        )
    }

    pub fn go() -> Self {
        Self::new("go", vec!["go"], "//", Some(("/*", "*/")), None)
    }

    pub fn java() -> Self {
        Self::new("java", vec!["java"], "//", Some(("/*", "*/")), Some("/**"))
    }

    pub fn javascript() -> Self {
        Self::new(
            "javascript",
            vec!["js", "mjs", "cjs", "jsx"],
            "//",
            Some(("/*", "*/")),
            Some("/**"),
        )
    }

    pub fn typescript() -> Self {
        Self::new(
            "typescript",
            vec!["ts", "tsx", "mts", "cts"],
            "//",
            Some(("/*", "*/")),
            Some("/**"),
        )
    }

    pub fn python() -> Self {
        Self::new(
            "python",
            vec!["py", "pyw", "pyi"],
            "#",
            Some(("'''", "'''")),
            Some("\"\"\""),
        )
    }

    pub fn ruby() -> Self {
        Self::new(
            "ruby",
            vec!["rb", "rake", "gemspec"],
            "#",
            Some(("=begin", "=end")),
            None,
        )
    }

    pub fn shell() -> Self {
        Self::new("shell", vec!["sh", "bash", "zsh"], "#", None, None)
    }

    pub fn haskell() -> Self {
        Self::new("haskell", vec!["hs"], "--", Some(("{-", "-}")), None)
    }

    // Lua's block form shares the `--` prefix with its line marker, so only
    // the line form is configured.
    pub fn lua() -> Self {
        Self::new("lua", vec!["lua"], "--", None, None)
    }

    pub fn sql() -> Self {
        Self::new("sql", vec!["sql"], "--", Some(("/*", "*/")), None)
    }

    pub fn toml() -> Self {
        Self::new("toml", vec!["toml"], "#", None, None)
    }

    pub fn yaml() -> Self {
        Self::new("yaml", vec!["yaml", "yml"], "#", None, None)
    }

    pub fn elixir() -> Self {
        Self::new("elixir", vec!["ex", "exs"], "#", None, None)
    }

    pub fn php() -> Self {
        Self::new("php", vec!["php"], "//", Some(("/*", "*/")), Some("/**"))
    }

    pub fn swift() -> Self {
        Self::new("swift", vec!["swift"], "//", Some(("/*", "*/")), Some("///"))
    }

    pub fn make() -> Self {
        Self::new("make", vec!["mk", "make"], "#", None, None)
    }
}
