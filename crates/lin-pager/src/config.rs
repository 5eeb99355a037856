//! Which pager program to run, and with what arguments.

use tracing::debug;

use crate::platform::Platform;

/// A resolved pager command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl PagerConfig {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PagerConfig {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a preference such as `"less -F"` into program and arguments.
    ///
    /// Quoting follows shell rules (`"my pager" --flag`). A string with
    /// unbalanced quotes is split on whitespace instead. Returns `None` for
    /// an empty or blank preference.
    ///
    /// ```rust
    /// use lin_pager::PagerConfig;
    ///
    /// let config = PagerConfig::parse("less -F").unwrap();
    /// assert_eq!(config.program, "less");
    /// assert_eq!(config.args, vec!["-F"]);
    ///
    /// assert!(PagerConfig::parse("   ").is_none());
    /// ```
    pub fn parse(command: &str) -> Option<PagerConfig> {
        let words = match shell_words::split(command) {
            Ok(words) => words,
            Err(err) => {
                debug!(command, %err, "pager preference is not valid shell syntax, splitting on whitespace");
                command.split_whitespace().map(str::to_string).collect()
            }
        };
        let (program, args) = words.split_first()?;
        Some(PagerConfig {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// The pager used when the user expressed no preference.
    pub fn platform_default(platform: Platform) -> PagerConfig {
        match platform {
            Platform::Unix => PagerConfig::new("less", ["-R", "-X"]),
            Platform::Windows => PagerConfig::new("more", Vec::<String>::new()),
        }
    }

    /// Pagers to try, in order, once the preferred one has failed.
    pub fn fallbacks(platform: Platform) -> Vec<PagerConfig> {
        match platform {
            Platform::Unix => vec![
                PagerConfig::platform_default(platform),
                PagerConfig::new("more", Vec::<String>::new()),
            ],
            Platform::Windows => vec![PagerConfig::platform_default(platform)],
        }
    }

    /// The user's preference when it parses, the platform default otherwise.
    pub fn resolve(preference: Option<&str>, platform: Platform) -> PagerConfig {
        preference
            .and_then(PagerConfig::parse)
            .unwrap_or_else(|| PagerConfig::platform_default(platform))
    }

    /// Make sure `less` passes escape codes through when output is colored.
    pub fn with_color(mut self, color: bool) -> PagerConfig {
        let raw = |a: &String| a == "-R" || a == "-r" || a == "--RAW-CONTROL-CHARS";
        if color && self.is_less() && !self.args.iter().any(raw) {
            self.args.push("-R".to_string());
        }
        self
    }

    fn is_less(&self) -> bool {
        std::path::Path::new(&self.program)
            .file_stem()
            .is_some_and(|stem| stem == "less")
    }

    /// The command line as it would be typed.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_program_and_args() {
        let config = PagerConfig::parse("less -F").unwrap();
        assert_eq!(config, PagerConfig::new("less", ["-F"]));
    }

    #[test]
    fn parse_program_only() {
        let config = PagerConfig::parse("most").unwrap();
        assert_eq!(config.program, "most");
        assert!(config.args.is_empty());
    }

    #[test]
    fn parse_quoted_program() {
        let config = PagerConfig::parse(r#""/opt/my pager/bin/pg" --wide "a b""#).unwrap();
        assert_eq!(config.program, "/opt/my pager/bin/pg");
        assert_eq!(config.args, vec!["--wide", "a b"]);
    }

    #[test]
    fn parse_unbalanced_quotes_falls_back_to_whitespace() {
        let config = PagerConfig::parse(r#"less -P"oops"#).unwrap();
        assert_eq!(config.program, "less");
        assert_eq!(config.args, vec![r#"-P"oops"#]);
    }

    #[test]
    fn parse_blank_is_none() {
        assert_eq!(PagerConfig::parse(""), None);
        assert_eq!(PagerConfig::parse("  \t "), None);
    }

    #[test]
    fn defaults_per_platform() {
        assert_eq!(
            PagerConfig::platform_default(Platform::Unix),
            PagerConfig::new("less", ["-R", "-X"])
        );
        assert_eq!(
            PagerConfig::platform_default(Platform::Windows).program,
            "more"
        );
    }

    #[test]
    fn fallback_lists() {
        let unix: Vec<String> = PagerConfig::fallbacks(Platform::Unix)
            .into_iter()
            .map(|c| c.program)
            .collect();
        assert_eq!(unix, vec!["less", "more"]);

        let windows: Vec<String> = PagerConfig::fallbacks(Platform::Windows)
            .into_iter()
            .map(|c| c.program)
            .collect();
        assert_eq!(windows, vec!["more"]);
    }

    #[test]
    fn resolve_prefers_user_choice() {
        let config = PagerConfig::resolve(Some("bat --paging=always"), Platform::Unix);
        assert_eq!(config.program, "bat");
    }

    #[test]
    fn resolve_empty_preference_uses_default() {
        let config = PagerConfig::resolve(Some(""), Platform::Unix);
        assert_eq!(config, PagerConfig::platform_default(Platform::Unix));

        let config = PagerConfig::resolve(None, Platform::Windows);
        assert_eq!(config, PagerConfig::platform_default(Platform::Windows));
    }

    #[test]
    fn color_adds_raw_flag_to_less() {
        let config = PagerConfig::new("less", ["-F"]).with_color(true);
        assert_eq!(config.args, vec!["-F", "-R"]);

        let config = PagerConfig::new("/usr/bin/less", Vec::<String>::new()).with_color(true);
        assert_eq!(config.args, vec!["-R"]);
    }

    #[test]
    fn color_keeps_existing_raw_flag() {
        let config = PagerConfig::new("less", ["-r"]).with_color(true);
        assert_eq!(config.args, vec!["-r"]);
    }

    #[test]
    fn color_leaves_other_pagers_alone() {
        let config = PagerConfig::new("more", Vec::<String>::new()).with_color(true);
        assert!(config.args.is_empty());

        let config = PagerConfig::new("lesspipe", Vec::<String>::new()).with_color(true);
        assert!(config.args.is_empty());
    }

    #[test]
    fn no_color_leaves_less_alone() {
        let config = PagerConfig::new("less", ["-F"]).with_color(false);
        assert_eq!(config.args, vec!["-F"]);
    }

    #[test]
    fn display_joins_words() {
        assert_eq!(
            PagerConfig::platform_default(Platform::Unix).display(),
            "less -R -X"
        );
    }
}
