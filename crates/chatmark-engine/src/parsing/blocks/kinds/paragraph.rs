/// Default block: non-blank lines joined with single spaces.
pub struct Paragraph;

impl Paragraph {
    pub fn append(text: &mut String, trimmed: &str) {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(trimmed);
    }
}
