use crate::config::KujiConfig;
use serde_json::json;

/// Merges the chart color defaults into a config. User-supplied values win;
/// only missing keys are filled in.
pub(crate) fn apply_theme_defaults(config: &mut KujiConfig) {
    let mut themed = KujiConfig::from_value(json!({
        "theme": {
            "groupColors": {
                "A": "#FFB6C1",
                "B": "#98FB98",
                "C": "#87CEEB",
                "D": "#DDA0DD",
                "E": "#F0E68C",
                "F": "#E0FFFF",
                "G": "#FFA07A",
                "H": "#FFE4B5",
                "I": "#B0E0E6",
                "J": "#DEB887",
                "K": "#98FF98"
            },
            "neutralFill": "#E3F2FD",
            "lineColor": "#1976D2",
            "seatOutline": "#1976D2",
            "numberColor": "#1976D2",
            "nameFill": "#FFFFFF",
            "nameOutline": "#1976D2",
            "nameTextColor": "#000000",
            "boardFill": "#2E7D32",
            "boardOutline": "#81C784",
            "boardTextColor": "#FFFFFF",
            "infoTextColor": "#1B5E20",
            "background": "#FFFFFF"
        }
    }));
    themed.deep_merge(config.as_value());
    *config = themed;
}
