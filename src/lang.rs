use crate::prelude::*;

/// Languages the API localizes text fields into.
///
/// Threaded into requests as the `lang` query parameter by the
/// repositories whose resources carry localized text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Es,
    De,
    Fr,
    Zh,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Zh => "zh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn lang_codes() {
        assert_eq!(Language::default().as_str(), "en");
        assert_eq!(Language::Zh.as_str(), "zh");
    }
}
