//! Layout tokens: spacing scale, card dimensions, and grid defaults

use serde::{Deserialize, Serialize};

/// Fixed spacing and dimension constants
///
/// Immutable after construction; `Default` is the single construction path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutTokens {
    // Spacing scale (8pt grid)
    pub space_xs: i32,
    pub space_s: i32,
    pub space_m: i32,
    pub space_l: i32,
    pub space_xl: i32,
    pub space_2xl: i32,

    // Card dimensions
    pub card_padding_left: i32,
    pub card_padding_right: i32,
    pub card_padding_top: i32,
    pub card_padding_bottom: i32,
    pub card_title_height: i32,
    pub card_icon_width: i32,
    pub card_icon_spacing: i32,
    pub card_header_padding: i32,

    // Component heights
    pub stat_card_height: i32,
    pub stat_card_height_trend: i32,
    pub trend_graph_min_height: i32,

    // Grid defaults
    pub default_grid_gap: f32,
    pub default_grid_width: f32,
    pub default_grid_columns: i32,
}

impl Default for LayoutTokens {
    fn default() -> Self {
        Self {
            space_xs: 4,
            space_s: 8,
            space_m: 16,
            space_l: 20,
            space_xl: 24,
            space_2xl: 32,

            card_padding_left: 20,
            card_padding_right: 20,
            card_padding_top: 20,
            card_padding_bottom: 20,
            card_title_height: 50,
            card_icon_width: 20,
            card_icon_spacing: 8,
            card_header_padding: 10,

            stat_card_height: 70,
            stat_card_height_trend: 84,
            trend_graph_min_height: 15,

            default_grid_gap: 8.0,
            default_grid_width: 1000.0,
            default_grid_columns: 3,
        }
    }
}
