use serde::{Deserialize, Serialize};

/// Per-document display switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
    /// Draws "Government"/"Opposition" headers above the Westminster blocks.
    #[serde(default)]
    pub show_westminster_headers: bool,
    /// Draws the 50%+1 indicator across the arch.
    #[serde(default)]
    pub show_majority_line: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_legend: default_show_legend(),
            show_westminster_headers: false,
            show_majority_line: false,
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    #[must_use]
    pub fn with_westminster_headers(mut self, show: bool) -> Self {
        self.show_westminster_headers = show;
        self
    }

    #[must_use]
    pub fn with_majority_line(mut self, show: bool) -> Self {
        self.show_majority_line = show;
        self
    }
}

fn default_show_legend() -> bool {
    true
}
