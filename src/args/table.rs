//! Argument table: first-pass builder, negation resolver and accessors.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::args::token::{normalize_name, tokenize, ParseOptions, Token};

/// Parsed options, immutable once built.
///
/// `values` holds the first value seen for each name; `all_values` holds
/// every value in command-line order. Every key of `all_values` is a key of
/// `values`, and `values[k] == all_values[k][0]`. Names added by negation
/// resolution appear only in `values`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArgTable {
    values: BTreeMap<String, String>,
    all_values: BTreeMap<String, Vec<String>>,
    /// The stop token and everything after it.
    positionals: Vec<String>,
    #[serde(skip)]
    options: ParseOptions,
}

impl ArgTable {
    /// Build a table from tokens, not including the program path.
    pub fn parse<I, S>(tokens: I, options: ParseOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self {
            options,
            ..Self::default()
        };

        let mut tokens = tokens.into_iter();
        for raw in tokens.by_ref() {
            let raw = raw.as_ref();
            let Some(token) = tokenize(raw, &options) else {
                debug!(token = raw, "non-option token, argument parsing stopped");
                table.positionals.push(raw.to_string());
                break;
            };
            trace!(name = %token.name, has_value = token.has_value(), value = ?token.value, "option");
            table.record(token);
        }
        table
            .positionals
            .extend(tokens.map(|raw| raw.as_ref().to_string()));

        // Needs the complete first pass: explicit positives always win.
        table.resolve_negations();
        table
    }

    /// Build a table from a full argument vector; the first element is the
    /// program path and is skipped.
    pub fn from_argv<I, S>(argv: I, options: ParseOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse(argv.into_iter().skip(1), options)
    }

    /// Build a table from this process's arguments.
    pub fn from_env(options: ParseOptions) -> Self {
        Self::from_argv(std::env::args(), options)
    }

    fn record(&mut self, token: Token) {
        let value = token.value_or_empty();
        self.values
            .entry(token.name.clone())
            .or_insert_with(|| value.to_string());
        self.all_values
            .entry(token.name.clone())
            .or_default()
            .push(value.to_string());
    }

    /// `-noX` becomes `-X=0` (and `-noX=0` becomes `-X=1`) unless `-X` was
    /// given explicitly anywhere on the command line.
    fn resolve_negations(&mut self) {
        let resolved: Vec<(String, String)> = self
            .values
            .iter()
            .filter_map(|(name, value)| {
                let positive = format!("-{}", name.strip_prefix("-no")?);
                if self.values.contains_key(&positive) {
                    debug!(negated = %name, positive = %positive, "explicit option overrides negation");
                    return None;
                }
                let enabled = !interpret_bool(value);
                debug!(negated = %name, positive = %positive, enabled, "negation resolved");
                Some((positive, if enabled { "1" } else { "0" }.to_string()))
            })
            .collect();

        self.values.extend(resolved);
    }

    /// Raw value for `name`, if present.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values
            .get(&normalize_name(name, &self.options))
            .map(String::as_str)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// String value, or `default` when `name` is absent.
    ///
    /// A present flag without a value yields `""`, never the default.
    pub fn get_arg(&self, name: &str, default: &str) -> String {
        self.value(name).unwrap_or(default).to_string()
    }

    /// Integer value, or `default` when `name` is absent.
    ///
    /// A present value that is not a number yields `0`, not the default.
    pub fn get_int_arg(&self, name: &str, default: i64) -> i64 {
        self.value(name).map(parse_int).unwrap_or(default)
    }

    /// Boolean value, or `default` when `name` is absent.
    ///
    /// A bare flag or an empty value is `true`; only `=0` is `false`.
    pub fn get_bool_arg(&self, name: &str, default: bool) -> bool {
        self.value(name).map(interpret_bool).unwrap_or(default)
    }

    /// Every value given for `name`, in command-line order.
    pub fn get_multi_args(&self, name: &str) -> &[String] {
        self.all_values
            .get(&normalize_name(name, &self.options))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn all_values(&self) -> &BTreeMap<String, Vec<String>> {
        &self.all_values
    }

    /// Tokens left unparsed, starting with the one that stopped parsing.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }
}

fn interpret_bool(value: &str) -> bool {
    value != "0"
}

/// Parse a leading decimal integer the way C `atoi64` does.
///
/// Leading whitespace and one sign are accepted; the scan stops at the first
/// non-digit. No digits gives `0`. Out-of-range values saturate.
pub fn parse_int(text: &str) -> i64 {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}
