/// One contiguous documentation block together with the code that follows
/// it, both still raw: the docs are Markdown-ready text with comment markers
/// removed, the code is untouched source. Built by the segmenter, consumed
/// once by rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub docs_text: String,
    pub code_text: String,
}

impl Section {
    pub fn new(docs_text: String, code_text: String) -> Self {
        Self {
            docs_text,
            code_text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.docs_text.is_empty() && self.code_text.is_empty()
    }
}
