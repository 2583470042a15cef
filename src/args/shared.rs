//! Process-wide argument table.
//!
//! Readers take a snapshot; re-parsing builds a complete new table and swaps
//! it in under one write, so nobody observes a half-built table.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::args::table::ArgTable;
use crate::args::token::ParseOptions;

/// Cloneable handle to the current argument table.
#[derive(Clone, Default)]
pub struct SharedArgs {
    inner: Arc<RwLock<Arc<ArgTable>>>,
}

impl SharedArgs {
    /// Discard the current table and replace it with one built from `tokens`
    /// (program path not included).
    pub fn parse_parameters<I, S>(&self, tokens: I, options: ParseOptions)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let table = Arc::new(ArgTable::parse(tokens, options));
        *self.inner.write() = table;
    }

    /// The current table. Stays valid across later re-parses.
    pub fn snapshot(&self) -> Arc<ArgTable> {
        self.inner.read().clone()
    }

    pub fn get_arg(&self, name: &str, default: &str) -> String {
        self.snapshot().get_arg(name, default)
    }

    pub fn get_int_arg(&self, name: &str, default: i64) -> i64 {
        self.snapshot().get_int_arg(name, default)
    }

    pub fn get_bool_arg(&self, name: &str, default: bool) -> bool {
        self.snapshot().get_bool_arg(name, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn reparse_replaces_everything() {
        let args = SharedArgs::default();
        args.parse_parameters(["-CTC=11", "-bar"], ParseOptions::verbatim());
        assert_eq!(args.get_int_arg("-CTC", 0), 11);

        args.parse_parameters(["-other"], ParseOptions::verbatim());
        assert_eq!(args.get_int_arg("-CTC", 5), 5);
        assert!(!args.get_bool_arg("-bar", false));
        assert!(args.get_bool_arg("-other", false));
    }

    #[test]
    fn snapshot_survives_reparse() {
        let args = SharedArgs::default();
        args.parse_parameters(["-CTC=1"], ParseOptions::verbatim());
        let before = args.snapshot();

        args.parse_parameters(["-CTC=2"], ParseOptions::verbatim());
        assert_eq!(before.get_arg("-CTC", ""), "1");
        assert_eq!(args.get_arg("-CTC", ""), "2");
    }

    #[test]
    fn readers_see_whole_tables() {
        let args = SharedArgs::default();
        args.parse_parameters(["-a=1", "-b=1"], ParseOptions::verbatim());

        let reader = {
            let args = args.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    let table = args.snapshot();
                    assert_eq!(table.get_arg("-a", ""), table.get_arg("-b", ""));
                }
            })
        };

        for i in 0..1000 {
            let a = format!("-a={}", i);
            let b = format!("-b={}", i);
            args.parse_parameters([a, b], ParseOptions::verbatim());
        }

        reader.join().unwrap();
    }
}
