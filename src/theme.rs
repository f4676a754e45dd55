use yew::prelude::*;
use web_sys::{window, MouseEvent};

use crate::config::THEME_STORAGE_KEY;

/// Displayed color scheme. The persisted local storage value and the `dark`
/// class on `<body>` always agree after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flip(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than a stored `"dark"` falls back to light, including
    /// a missing or garbage value.
    pub fn from_storage_value(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Font-awesome glyph shown on the toggle button: moon while light,
    /// sun while dark.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }
}

pub fn load_theme() -> Theme {
    let saved = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok())
        .flatten();
    Theme::from_storage_value(saved.as_deref())
}

pub fn store_theme(theme: Theme) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}

fn apply_body_class(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let class_list = body.class_list();
        let _ = match theme {
            Theme::Dark => class_list.add_1("dark"),
            Theme::Light => class_list.remove_1("dark"),
        };
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(load_theme);

    {
        let current = *theme;
        use_effect_with_deps(
            move |theme| {
                apply_body_class(*theme);
                || ()
            },
            current,
        );
    }

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = (*theme).flip();
            store_theme(next);
            theme.set(next);
        })
    };

    html! {
        <button class="theme-toggle" onclick={onclick} title="Toggle light/dark theme">
            <i class={classes!("fa", (*theme).icon_class())}></i>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_round_trips() {
        assert_eq!(Theme::Light.flip(), Theme::Dark);
        assert_eq!(Theme::Dark.flip(), Theme::Light);
        assert_eq!(Theme::Light.flip().flip(), Theme::Light);
    }

    #[test]
    fn storage_value_parsing() {
        assert_eq!(Theme::from_storage_value(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_storage_value(Some("light")), Theme::Light);
        assert_eq!(Theme::from_storage_value(Some("purple")), Theme::Light);
        assert_eq!(Theme::from_storage_value(None), Theme::Light);
    }

    #[test]
    fn storage_value_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_storage_value(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn icon_follows_theme() {
        assert_eq!(Theme::Light.icon_class(), "fa-moon");
        assert_eq!(Theme::Dark.icon_class(), "fa-sun");
    }
}
