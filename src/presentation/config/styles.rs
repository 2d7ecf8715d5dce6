use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"card.focused": "bold black on yellow"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// The style registered under `key`, or `fallback`
    pub fn get_or(&self, key: &str, fallback: Style) -> Style {
        self.0.get(key).copied().unwrap_or(fallback)
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, style)| {
                parse_style(&style)
                    .map(|style| (name, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

/// Parses `"[modifiers] [fg] [on bg]"`, e.g. `"bold italic white on #202020"`.
///
/// Colours accept anything [`Color::from_str`] does: names, `#rrggbb` and
/// palette indexes.
pub fn parse_style(line: &str) -> Result<Style, String> {
    let line = line.trim().to_lowercase();
    let (foreground, background) = match line.split_once(" on ") {
        Some((fg, bg)) => (fg.trim().to_string(), Some(bg.trim().to_string())),
        None => match line.strip_prefix("on ") {
            Some(bg) => (String::new(), Some(bg.trim().to_string())),
            None => (line.clone(), None),
        },
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else {
            let color = Color::from_str(word).map_err(|_| format!("Unknown color `{word}` in `{line}`"))?;
            style = style.fg(color);
        }
    }

    if let Some(background) = background {
        let color = Color::from_str(&background)
            .map_err(|_| format!("Unknown background color `{background}` in `{line}`"))?;
        style = style.bg(color);
    }

    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "crossed_out" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}
