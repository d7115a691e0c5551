use serde::{Deserialize, Serialize};

/// Also emitted into the page for the browser-side check.
pub const NAME_PATTERN: &str = r"[a-zA-Z0-9._\-]+";

pub const NAME_ERROR: &str =
    "App name must only contain letters, numbers, and the characters `._-`";

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }

    /// Anything unknown falls back to the default.
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "private" => Visibility::Private,
            _ => Visibility::Public,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCheck {
    /// Nothing typed yet: no message, nothing to submit.
    Empty,
    Valid,
    Invalid,
}

impl NameCheck {
    pub fn of(name: &str) -> Self {
        if name.is_empty() {
            NameCheck::Empty
        } else if name.chars().all(is_name_char) {
            NameCheck::Valid
        } else {
            NameCheck::Invalid
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        match self {
            NameCheck::Invalid => Some(NAME_ERROR),
            _ => None,
        }
    }

    pub fn submit_enabled(&self) -> bool {
        matches!(self, NameCheck::Valid)
    }
}

/// Page-local mirror of the three inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
}

impl FormState {
    pub fn new(name: &str, description: &str, visibility: Visibility) -> Self {
        let mut s = Self::default();
        s.set_name(name);
        s.set_description(description);
        s.set_visibility(visibility);
        s
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn name_check(&self) -> NameCheck {
        NameCheck::of(&self.name)
    }

    pub fn name_error(&self) -> Option<&'static str> {
        self.name_check().error()
    }

    pub fn submit_enabled(&self) -> bool {
        self.name_check().submit_enabled()
    }
}

/// Optional pre-fill taken from the page's query string.
#[derive(Debug, Default, Deserialize)]
pub struct Prefill {
    pub name: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<String>,
}

impl From<Prefill> for FormState {
    fn from(p: Prefill) -> Self {
        FormState::new(
            p.name.as_deref().unwrap_or(""),
            p.description.as_deref().unwrap_or(""),
            p.visibility
                .as_deref()
                .map(Visibility::parse_or_default)
                .unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_enable_submit() {
        for n in ["my-app_1", "a", "A.b-c_D.9", "...", "---", "0"] {
            let s = FormState::new(n, "", Visibility::Public);
            assert!(s.submit_enabled(), "{n}");
            assert_eq!(s.name_error(), None, "{n}");
        }
    }

    #[test]
    fn invalid_names_show_error() {
        for n in ["my app!", " ", "app/1", "é", "tab\there", "a+b", "ünï"] {
            let s = FormState::new(n, "", Visibility::Public);
            assert!(!s.submit_enabled(), "{n}");
            assert_eq!(s.name_error(), Some(NAME_ERROR), "{n}");
        }
    }

    #[test]
    fn empty_name_is_silent_and_disabled() {
        let s = FormState::default();
        assert!(!s.submit_enabled());
        assert_eq!(s.name_error(), None);
        assert_eq!(s.visibility, Visibility::Public);
    }

    #[test]
    fn recomputed_on_every_keystroke() {
        let mut s = FormState::default();
        let steps = [
            ("m", true),
            ("my", true),
            ("my ", false),
            ("my a", false),
            ("my", true),
            ("", false),
        ];
        for (name, enabled) in steps {
            s.set_name(name);
            assert_eq!(s.submit_enabled(), enabled, "{name:?}");
        }
        assert_eq!(s.name_error(), None);
    }

    #[test]
    fn other_fields_do_not_affect_submit() {
        let mut s = FormState::new("my-app_1", "", Visibility::Public);
        s.set_visibility(Visibility::Private);
        assert_eq!(s.visibility, Visibility::Private);
        assert!(s.submit_enabled());
        s.set_description("anything at all!! <>");
        s.set_visibility(Visibility::Public);
        assert!(s.submit_enabled());

        let mut bad = FormState::new("my app!", "", Visibility::Public);
        bad.set_visibility(Visibility::Private);
        assert!(!bad.submit_enabled());
        assert_eq!(bad.name_error(), Some(NAME_ERROR));
    }

    #[test]
    fn prefill_falls_back_to_public() {
        let s: FormState = Prefill {
            name: Some("x".into()),
            description: None,
            visibility: Some("secret".into()),
        }
        .into();
        assert_eq!(s.visibility, Visibility::Public);
        assert_eq!(s.description, "");

        let s: FormState = Prefill {
            visibility: Some("private".into()),
            ..Prefill::default()
        }
        .into();
        assert_eq!(s.visibility, Visibility::Private);
        assert!(!s.submit_enabled());
    }
}
