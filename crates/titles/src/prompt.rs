use indoc::formatdoc;

/// Instruction sent to the model for a blog post
pub(crate) fn title_prompt(content: &str) -> String {
    formatdoc! {r#"
        Based on the following blog post content, generate exactly 3 creative, engaging, and SEO-friendly title suggestions.
        Return the output as a valid JSON object with a single key "titles" containing an array of 3 strings.
        Example output: {{"titles": ["Title 1", "Title 2", "Title 3"]}}

        Blog Content:
        ---
        {content}
        ---"#}
}
