//! Tokenizer. Turns one raw token into an option name and optional value.

/// Platform rewriting applied to option names before they are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Lowercase option names (values keep their case).
    pub fold_case: bool,
    /// Accept `/name` as a spelling of `-name`.
    pub slash_prefix: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            fold_case: cfg!(windows),
            slash_prefix: cfg!(windows),
        }
    }
}

impl ParseOptions {
    /// No rewriting on any platform.
    pub const fn verbatim() -> Self {
        Self {
            fold_case: false,
            slash_prefix: false,
        }
    }
}

/// A single option token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Option name; `--x` is recorded as `-x`.
    pub name: String,
    /// Text after the first `=`, if there was one. May be empty.
    pub value: Option<String>,
}

impl Token {
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// The recorded value: empty when no `=` was given.
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// Split a raw token into a [`Token`].
///
/// Returns `None` when the token is not an option; the caller treats that as
/// the end of option parsing.
pub fn tokenize(raw: &str, options: &ParseOptions) -> Option<Token> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, Some(value.to_string())),
        None => (raw, None),
    };

    let mut name = rewrite(name, options);
    if !name.starts_with('-') {
        return None;
    }

    // `--name` is `-name`; only one dash is dropped.
    if name.starts_with("--") {
        name.remove(0);
    }

    Some(Token { name, value })
}

/// Normalize a name given to an accessor so it matches recorded keys.
///
/// `--name` and bare `name` both become `-name`.
pub fn normalize_name(name: &str, options: &ParseOptions) -> String {
    let name = rewrite(name, options);
    if let Some(stripped) = name.strip_prefix("--") {
        format!("-{}", stripped)
    } else if name.starts_with('-') {
        name
    } else {
        format!("-{}", name)
    }
}

fn rewrite(name: &str, options: &ParseOptions) -> String {
    let mut name = if options.fold_case {
        name.to_lowercase()
    } else {
        name.to_string()
    };
    if options.slash_prefix && name.starts_with('/') {
        name.replace_range(..1, "-");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(raw: &str) -> Option<Token> {
        tokenize(raw, &ParseOptions::verbatim())
    }

    #[test]
    fn bare_flag_has_no_value() {
        let token = plain("-CTC").unwrap();
        assert_eq!(token.name, "-CTC");
        assert!(!token.has_value());
        assert_eq!(token.value_or_empty(), "");
    }

    #[test]
    fn splits_at_first_equals() {
        let token = plain("-CTC=a=b").unwrap();
        assert_eq!(token.name, "-CTC");
        assert_eq!(token.value.as_deref(), Some("a=b"));
    }

    #[test]
    fn empty_value_is_still_a_value() {
        let token = plain("-CTC=").unwrap();
        assert!(token.has_value());
        assert_eq!(token.value_or_empty(), "");
    }

    #[test]
    fn double_dash_drops_one_dash() {
        assert_eq!(plain("--CTC=1").unwrap().name, "-CTC");
        assert_eq!(plain("---CTC").unwrap().name, "--CTC");
    }

    #[test]
    fn non_option_stops() {
        assert!(plain("file.txt").is_none());
        assert!(plain("").is_none());
        assert!(plain("=-CTC").is_none());
        assert!(plain("/CTC").is_none());
    }

    #[test]
    fn windows_style_rewriting() {
        let options = ParseOptions {
            fold_case: true,
            slash_prefix: true,
        };
        let token = tokenize("/DataDir=C:\\Foo", &options).unwrap();
        assert_eq!(token.name, "-datadir");
        assert_eq!(token.value.as_deref(), Some("C:\\Foo"));
    }

    #[test]
    fn normalize_accessor_names() {
        let options = ParseOptions::verbatim();
        assert_eq!(normalize_name("-CTC", &options), "-CTC");
        assert_eq!(normalize_name("--CTC", &options), "-CTC");
        assert_eq!(normalize_name("CTC", &options), "-CTC");

        let folded = ParseOptions {
            fold_case: true,
            slash_prefix: false,
        };
        assert_eq!(normalize_name("-CTC", &folded), "-ctc");
    }
}
