use std::fmt;

/// One container/resolution constraint in the preferred-format chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPreference {
    pub container: &'static str,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for FormatPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})[width={}][height={}]",
            self.container, self.width, self.height
        )
    }
}

/// Resolutions the course player is known to serve, most preferred first.
const PREFERRED_RESOLUTIONS: &[(u32, u32)] =
    &[(960, 540), (966, 540), (854, 480), (852, 480), (720, 540)];

pub fn preferred_formats() -> Vec<FormatPreference> {
    PREFERRED_RESOLUTIONS
        .iter()
        .map(|&(width, height)| FormatPreference {
            container: "mp4",
            width,
            height,
        })
        .collect()
}

/// Renders the chain as a single `-f` selector; the downloader tries each
/// `/`-separated alternative in order.
pub fn selector_string(preferences: &[FormatPreference]) -> String {
    preferences
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("/")
}
