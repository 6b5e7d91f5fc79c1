use crate::languages::config::LanguageConfig;
use crate::models::section::Section;
use crate::segment::classifier::{ClassifierState, LineKind, classify};
use std::mem;

/// Running state of the fold over one file's lines.
#[derive(Debug, Default)]
struct Accumulator {
    sections: Vec<Section>,
    docs_buf: String,
    code_buf: String,
    /// Set once any code line landed in `code_buf` since the last flush, so
    /// the next documentation line starts a new section.
    has_code: bool,
}

impl Accumulator {
    fn append_docs(&mut self, text: &str) {
        if self.has_code {
            self.flush();
        }
        self.docs_buf.push_str(text);
        self.docs_buf.push('\n');
    }

    fn append_code(&mut self, text: &str) {
        self.code_buf.push_str(text);
        self.code_buf.push('\n');
        self.has_code = true;
    }

    fn flush(&mut self) {
        self.sections.push(Section::new(
            mem::take(&mut self.docs_buf),
            mem::take(&mut self.code_buf),
        ));
        self.has_code = false;
    }

    fn finish(mut self) -> Vec<Section> {
        // The pending buffers always become a final section, even when both
        // are empty: an empty file yields exactly one empty section.
        self.flush();
        self.sections
    }
}

/// Partitions a file's lines into alternating documentation/code sections.
///
/// Never fails: every line is classifiable, worst case as code. An
/// unterminated block comment is accepted silently and the remainder of the
/// file becomes documentation.
pub fn segment<'a, I>(config: &LanguageConfig, lines: I) -> Vec<Section>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = ClassifierState::default();
    let mut acc = Accumulator::default();

    for line in lines {
        match classify(config, &mut state, line) {
            LineKind::Documentation(text) => acc.append_docs(text),
            LineKind::ContinueMultiline(text) => acc.append_docs(text),
            LineKind::CloseMultiline(text) => {
                // A bare close marker contributes no text of its own.
                if !text.is_empty() {
                    acc.append_docs(text);
                }
            }
            LineKind::Excluded => {}
            LineKind::Code(text) => acc.append_code(text),
        }
    }

    acc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sections(config: &LanguageConfig, lines: &[&str]) -> Vec<Section> {
        segment(config, lines.iter().copied())
    }

    #[test]
    fn test_interleaved_comments_and_code() {
        let rust = LanguageConfig::rust();
        let result = sections(
            &rust,
            &[
                "/// ignore me",
                "// doc one",
                "code1",
                "/* ml",
                "ml2",
                "*/",
                "code2",
            ],
        );

        assert_eq!(
            result,
            vec![
                Section::new("doc one\n".into(), "code1\n".into()),
                Section::new("ml\nml2\n".into(), "code2\n".into()),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_one_empty_section() {
        let rust = LanguageConfig::rust();
        let result = sections(&rust, &[]);
        assert_eq!(result, vec![Section::default()]);
    }

    #[test]
    fn test_code_only_file() {
        let rust = LanguageConfig::rust();
        let result = sections(&rust, &["fn main() {", "    body();", "}"]);
        assert_eq!(
            result,
            vec![Section::new(String::new(), "fn main() {\n    body();\n}\n".into())]
        );
    }

    #[test]
    fn test_docs_only_file() {
        let rust = LanguageConfig::rust();
        let result = sections(&rust, &["// one", "// two"]);
        assert_eq!(result, vec![Section::new("one\ntwo\n".into(), String::new())]);
    }

    #[test]
    fn test_section_boundary_on_every_code_to_doc_transition() {
        let python = LanguageConfig::python();
        let result = sections(
            &python,
            &["# a", "code_a()", "# b", "code_b()", "# trailing"],
        );

        assert_eq!(
            result,
            vec![
                Section::new("a\n".into(), "code_a()\n".into()),
                Section::new("b\n".into(), "code_b()\n".into()),
                Section::new("trailing\n".into(), String::new()),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment_is_lenient() {
        let c = LanguageConfig::c();
        let result = sections(&c, &["int x;", "/* opened", "never", "closed"]);

        assert_eq!(
            result,
            vec![
                Section::new(String::new(), "int x;\n".into()),
                Section::new("opened\nnever\nclosed\n".into(), String::new()),
            ]
        );
    }

    #[test]
    fn test_one_line_block_between_code() {
        let c = LanguageConfig::c();
        let result = sections(&c, &["a();", "/* note */", "b();"]);

        assert_eq!(
            result,
            vec![
                Section::new(String::new(), "a();\n".into()),
                Section::new("note\n".into(), "b();\n".into()),
            ]
        );
    }

    #[test]
    fn test_excluded_lines_preserve_section_state() {
        // A doc-comment line between code lines must not open a new section.
        let rust = LanguageConfig::rust();
        let result = sections(&rust, &["code1();", "/// dropped", "code2();"]);

        assert_eq!(
            result,
            vec![Section::new(String::new(), "code1();\ncode2();\n".into())]
        );
    }

    #[test]
    fn test_close_line_with_trailing_prose() {
        let c = LanguageConfig::c();
        let result = sections(&c, &["/* first", "last */", "code();"]);

        assert_eq!(
            result,
            vec![Section::new("first\nlast\n".into(), "code();\n".into())]
        );
    }

    #[test]
    fn test_blank_comment_lines_keep_paragraph_breaks() {
        let rust = LanguageConfig::rust();
        let result = sections(&rust, &["// para one", "//", "// para two"]);
        assert_eq!(
            result,
            vec![Section::new("para one\n\npara two\n".into(), String::new())]
        );
    }
}
