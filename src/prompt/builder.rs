use crate::extract::{ContentBlock, ExtractionResult};
use crate::prompt::template::PromptTemplate;

/// At most this many images are listed in a prompt
pub const MAX_PROMPT_IMAGES: usize = 10;

const SECTION_RULE: &str = "=======================================";

/// Assemble the chat prompt for an extraction result.
///
/// Layout: a fixed header (title, URL, extraction time), the extracted
/// content with headings demoted below the prompt's own section headings,
/// an image list capped at [`MAX_PROMPT_IMAGES`], and finally the
/// template's instructions. An empty result still produces a usable prompt
/// from title and URL alone.
pub fn build_prompt(result: &ExtractionResult, template: &PromptTemplate) -> String {
    let mut prompt = String::new();

    prompt.push_str("Full web page analysis\n\n");
    prompt.push_str(&format!("**Title**: {}\n", result.title));
    prompt.push_str(&format!("**URL**: {}\n", result.url));
    prompt.push_str(&format!("**Extracted**: {}\n\n", result.timestamp.to_rfc3339()));
    prompt.push_str(SECTION_RULE);
    prompt.push_str("\n\n## Page content\n\n");

    for block in &result.blocks {
        match block {
            ContentBlock::Heading { level, text } => {
                // Demote below the prompt's own "##" section headings
                let depth = (*level as usize) + 2;
                prompt.push_str(&format!("{} {}\n\n", "#".repeat(depth), text));
            }
            ContentBlock::Text { text } => {
                prompt.push_str(text);
                prompt.push_str("\n\n");
            }
        }
    }

    if !result.images.is_empty() {
        prompt.push_str(&format!("## Page images ({} total)\n\n", result.images.len()));
        for (i, image) in result.images.iter().take(MAX_PROMPT_IMAGES).enumerate() {
            let label = if image.alt.is_empty() { "image" } else { image.alt.as_str() };
            prompt.push_str(&format!("{}. {}\n   {}\n\n", i + 1, label, image.src));
        }
    }

    prompt.push_str(SECTION_RULE);
    prompt.push_str("\n\n");
    prompt.push_str(&template.prompt_text);

    prompt
}
