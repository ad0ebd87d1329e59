/// Protocol label marking rows that should not be plotted. Results files may
/// arrive with rows already carrying it; `ProtocolRules` rewrites further
/// labels to it at load time. Every search skips it.
pub const HIDDEN_PROTOCOL: &str = "1";

/// Label rewriting applied to the `Protocol` column when loading results.
///
/// A hide rule rewrites matching labels to `HIDDEN_PROTOCOL`, removing those
/// protocols from every chart; a rename rule re-badges a label prefix, which
/// merges protocol variants under a single legend entry.
#[derive(Debug, Clone, Default)]
pub struct ProtocolRules {
    hide: Vec<String>,
    rename: Vec<(String, String)>,
}

impl ProtocolRules {
    /// Creates an empty rule set: every labelled protocol is plotted as-is.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hides every protocol whose label starts with `prefix`.
    pub fn hide_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.hide.push(prefix.into());
        self
    }

    /// Rewrites the leading `from` of matching labels to `to`.
    pub fn rename_prefix(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.rename.push((from.into(), to.into()));
        self
    }

    /// Applies the rules to one protocol label. Hide rules win over renames.
    pub fn apply(&self, label: &str) -> String {
        if self.hide.iter().any(|prefix| label.starts_with(prefix)) {
            return String::from(HIDDEN_PROTOCOL);
        }
        for (from, to) in self.rename.iter() {
            if let Some(rest) = label.strip_prefix(from) {
                return format!("{}{}", to, rest);
            }
        }
        String::from(label)
    }
}
