/// Operating-system family, used only to pick default and fallback pagers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// The platform this binary was built for.
    #[cfg(windows)]
    pub fn current() -> Self {
        Platform::Windows
    }

    /// The platform this binary was built for.
    #[cfg(not(windows))]
    pub fn current() -> Self {
        Platform::Unix
    }
}
