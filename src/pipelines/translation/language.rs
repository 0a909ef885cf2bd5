// Copyright 2026 The madlad-adapter Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// # Target language code steering a MADLAD-400 model
///
/// MADLAD-400 selects the output language from a `<2xx>` token placed in front of the source
/// text, e.g. `<2es>` for Spanish or `<2fr>` for French.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLanguage {
    code: String,
}

impl TargetLanguage {
    /// Surrounding whitespace is trimmed from `code`, so `" es"` yields `<2es>`.
    /// Returns `None` for an empty or blank code.
    pub fn new<S: AsRef<str>>(code: S) -> Option<TargetLanguage> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            None
        } else {
            Some(TargetLanguage {
                code: code.to_string(),
            })
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Language tag token, e.g. `<2es>`
    pub fn tag(&self) -> String {
        format!("<2{}>", self.code)
    }

    /// Prepends the language tag and a space to `text`.
    pub fn prefix(&self, text: &str) -> String {
        format!("{} {}", self.tag(), text)
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Prefixes every text with the target language tag, or returns them unchanged.
pub fn prepare_source_texts(
    texts: Vec<String>,
    target_language: Option<&TargetLanguage>,
) -> Vec<String> {
    match target_language {
        Some(language) => texts.iter().map(|text| language.prefix(text)).collect(),
        None => texts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_texts() {
        let language = TargetLanguage::new("es").unwrap();
        let texts = vec!["Hello".to_string(), "How are you?".to_string()];

        assert_eq!(
            prepare_source_texts(texts, Some(&language)),
            vec!["<2es> Hello", "<2es> How are you?"]
        );
    }

    #[test]
    fn no_language_leaves_texts_untouched() {
        let texts = vec!["Hello".to_string()];
        assert_eq!(prepare_source_texts(texts.clone(), None), texts);
    }

    #[test]
    fn blank_codes_are_absent() {
        assert!(TargetLanguage::new("").is_none());
        assert!(TargetLanguage::new("  ").is_none());
        assert_eq!(TargetLanguage::new(" fr\n").unwrap().tag(), "<2fr>");
    }

    #[test]
    fn codes_are_trimmed() {
        let language = TargetLanguage::new(" es").unwrap();
        assert_eq!(language.prefix("Hello"), "<2es> Hello");
        assert_eq!(
            prepare_source_texts(vec!["Hello".to_string()], Some(&language)),
            vec!["<2es> Hello"]
        );
    }
}
