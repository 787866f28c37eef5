/*!
 * Prompt template for dictionary lookups.
 *
 * The template is designed to produce a structured JSON reply with a fixed
 * set of keys, plus a well-known fallback object for unrecognized words.
 */

/// Base URL of the external lexicon site referenced in the prompt
const LEXICON_BASE_URL: &str = "https://logeion.uchicago.edu/";

/// Prompt template for dictionary lookups.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The default prompt for Latin-Turkish dictionary lookups.
    pub const DICTIONARY_TRANSLATOR: &'static str = r#"{reference_url}

You are a Latin-Turkish dictionary assistant. Translate the Latin word "{word}" into Turkish, using the reference page above.

If the word looks misspelled, correct it or pick the closest Latin word. This service is public, so people will submit random strings or words from other languages; for those reply with exactly:

{
  "latinWord": "{word}",
  "turkishWord": "Yanlış Kelime",
  "explanation": "Kelime Bulunamadı"
}

## Output Requirements
- Return ONLY a JSON object with exactly the keys latinWord, turkishWord and explanation
- latinWord: the Latin word being translated
- turkishWord: the direct Turkish translation
- explanation: senses, example sentences and usage notes from the reference page
- Do not include any text outside the JSON object and do not wrap it in a markdown code fence"#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default dictionary translator template.
    pub fn dictionary_translator() -> Self {
        Self::new(Self::DICTIONARY_TRANSLATOR)
    }

    /// Render the template for the given word.
    ///
    /// The word is embedded exactly as submitted.
    pub fn render(&self, word: &str) -> String {
        self.template
            .replace("{reference_url}", &Self::reference_url(word))
            .replace("{word}", word)
    }

    /// Lookup URL for the word on the external lexicon site.
    ///
    /// The word is concatenated without URL encoding, so words with special
    /// characters produce a malformed URL.
    pub fn reference_url(word: &str) -> String {
        format!("{}{}", LEXICON_BASE_URL, word)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::dictionary_translator()
    }
}
