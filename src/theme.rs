pub const THEME_COOKIE: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_TTL_DAYS: u32 = 365;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The browser surface the theme controller talks to.
///
/// Writes are best-effort: a rejected cookie or attribute write is absorbed by
/// the implementation and the page keeps its current theme.
pub trait ThemeHost {
    /// Raw `document.cookie` string.
    fn cookies(&self) -> String;
    fn write_cookie(&self, cookie: &str);
    /// RFC 1123 timestamp `ttl_days` from now.
    fn expiry_after_days(&self, ttl_days: u32) -> String;
    fn prefers_dark(&self) -> bool;
    fn root_theme(&self) -> Option<String>;
    fn set_root_theme(&self, theme: Theme);
}

/// Finds `name` in a `;`-separated cookie string. Leading spaces before a
/// pair are ignored.
pub fn read_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        pair.trim_start_matches(' ')
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

pub fn format_cookie(name: &str, value: &str, expires: &str) -> String {
    format!("{name}={value};expires={expires};path=/")
}

pub fn get_preference(host: &impl ThemeHost) -> Option<Theme> {
    let cookies = host.cookies();
    read_cookie(&cookies, THEME_COOKIE).and_then(Theme::parse)
}

pub fn set_preference(host: &impl ThemeHost, theme: Theme, ttl_days: u32) {
    let expires = host.expiry_after_days(ttl_days);
    host.write_cookie(&format_cookie(THEME_COOKIE, theme.as_str(), &expires));
}

pub fn resolve_theme(saved: Option<Theme>, prefers_dark: bool) -> Theme {
    saved.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

pub fn initialize(host: &impl ThemeHost) -> Theme {
    let theme = resolve_theme(get_preference(host), host.prefers_dark());
    host.set_root_theme(theme);
    theme
}

/// Flips the theme currently on the root element, applies and persists it.
pub fn toggle(host: &impl ThemeHost) -> Theme {
    let current = host
        .root_theme()
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or(Theme::Light);
    let next = current.toggled();

    host.set_root_theme(next);
    set_preference(host, next, THEME_TTL_DAYS);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeHost {
        cookies: RefCell<String>,
        prefers_dark: bool,
        root: RefCell<Option<String>>,
    }

    impl FakeHost {
        fn with_cookies(cookies: &str) -> Self {
            Self {
                cookies: RefCell::new(cookies.to_string()),
                ..Self::default()
            }
        }
    }

    impl ThemeHost for FakeHost {
        fn cookies(&self) -> String {
            self.cookies.borrow().clone()
        }

        fn write_cookie(&self, cookie: &str) {
            // Only the name=value pair survives into document.cookie.
            let pair = cookie.split(';').next().unwrap_or_default();
            *self.cookies.borrow_mut() = pair.to_string();
        }

        fn expiry_after_days(&self, ttl_days: u32) -> String {
            format!("+{ttl_days}d")
        }

        fn prefers_dark(&self) -> bool {
            self.prefers_dark
        }

        fn root_theme(&self) -> Option<String> {
            self.root.borrow().clone()
        }

        fn set_root_theme(&self, theme: Theme) {
            *self.root.borrow_mut() = Some(theme.as_str().to_string());
        }
    }

    #[test]
    fn read_cookie_skips_leading_spaces() {
        let cookies = "session=abc; theme=dark; other=1";

        assert_eq!(read_cookie(cookies, "theme"), Some("dark"));
        assert_eq!(read_cookie(cookies, "session"), Some("abc"));
        assert_eq!(read_cookie(cookies, "missing"), None);
    }

    #[test]
    fn read_cookie_requires_exact_name() {
        assert_eq!(read_cookie("themes=dark", "theme"), None);
        assert_eq!(read_cookie("theme=", "theme"), Some(""));
    }

    #[test]
    fn cookie_format_carries_expiry_and_root_path() {
        let cookie = format_cookie("theme", "dark", "Fri, 15 Oct 2027 00:00:00 GMT");

        assert_eq!(cookie, "theme=dark;expires=Fri, 15 Oct 2027 00:00:00 GMT;path=/");
    }

    #[test]
    fn saved_dark_preference_survives_reload() {
        let host = FakeHost::default();
        set_preference(&host, Theme::Dark, THEME_TTL_DAYS);

        assert_eq!(initialize(&host), Theme::Dark);
        assert_eq!(host.root_theme().as_deref(), Some("dark"));
    }

    #[test]
    fn system_signal_decides_without_cookie() {
        let dark = FakeHost {
            prefers_dark: true,
            ..FakeHost::default()
        };
        let light = FakeHost::default();

        assert_eq!(initialize(&dark), Theme::Dark);
        assert_eq!(initialize(&light), Theme::Light);
        assert_eq!(light.root_theme().as_deref(), Some("light"));
    }

    #[test]
    fn unknown_cookie_value_falls_back_to_system() {
        let host = FakeHost {
            prefers_dark: true,
            ..FakeHost::with_cookies("theme=sepia")
        };

        assert_eq!(initialize(&host), Theme::Dark);
    }

    #[test]
    fn toggling_twice_restores_attribute_and_cookie() {
        let host = FakeHost::with_cookies("theme=light");
        initialize(&host);

        assert_eq!(toggle(&host), Theme::Dark);
        assert_eq!(host.cookies(), "theme=dark");
        assert_eq!(toggle(&host), Theme::Light);
        assert_eq!(host.root_theme().as_deref(), Some("light"));
        assert_eq!(host.cookies(), "theme=light");
    }
}
