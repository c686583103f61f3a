//! CSS variable output for the rendering layer

use crate::tokens::DesignTokens;

impl DesignTokens {
    /// CSS variable block with the six scalar token values, for embedding in
    /// an SVG or HTML template.
    pub fn to_css(&self) -> String {
        format!(
            ":root {{\n  --color: {};\n  --background: {};\n  --accent: {};\n  --font-family: {};\n  --radius: {}px;\n  --padding: {}px;\n}}\n",
            self.color, self.background, self.accent, self.font_family, self.radius, self.padding
        )
    }
}
