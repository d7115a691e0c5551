use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{
    apps::App,
    form::{FormState, Visibility, NAME_ERROR, NAME_PATTERN},
};

// Unreserved characters stay as they are.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// One URL path segment, percent-encoded and then escaped for an attribute.
fn seg(s: &str) -> String {
    attr(&utf8_percent_encode(s, SEGMENT).to_string()).into_owned()
}

pub fn layout(title: &str, user: Option<&str>, body: &str) -> String {
    let who = match user {
        Some(u) => format!(r#"<span class="user">{}</span>"#, text(u)),
        None => String::new(),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>{}</title>
</head>
<body>
  <header><a href="/">Home</a> {}</header>
  <main>
{}
  </main>
</body>
</html>"#,
        text(title),
        who,
        body
    )
}

pub fn tabs(user: &str, current: &str) -> String {
    let mut items = String::new();
    for (label, suffix) in [("Apps", "apps"), ("Providers", "providers")] {
        let class = if label == current { r#" class="current""# } else { "" };
        items.push_str(&format!(
            r#"<li{}><a href="/{}/{}">{}</a></li>"#,
            class,
            seg(user),
            suffix,
            label
        ));
    }
    format!(r#"<nav><ul class="tabs">{}</ul></nav>"#, items)
}

pub fn button(id: &str, label: &str, enabled: bool) -> String {
    format!(
        r#"<button type="submit" id="{}"{}>{}</button>"#,
        attr(id),
        if enabled { "" } else { " disabled" },
        text(label)
    )
}

fn radio(v: Visibility, selected: Visibility, label: &str) -> String {
    format!(
        r#"<label><input type="radio" name="visibility" value="{}"{}/> {}</label>"#,
        v.as_str(),
        if v == selected { " checked" } else { "" },
        label
    )
}

fn apps_list(user: &str, apps: &[App]) -> String {
    if apps.is_empty() {
        return r#"<p class="empty">You have no apps yet.</p>"#.to_string();
    }

    let mut items = String::new();
    for a in apps {
        let desc = match a.description.as_deref() {
            Some(d) if !d.is_empty() => format!(" <small>{}</small>", text(d)),
            _ => String::new(),
        };
        items.push_str(&format!(
            r#"<li><a href="/{}/a/{}">{}</a> <em>{}</em>{}</li>"#,
            seg(user),
            seg(&a.s_id),
            text(&a.name),
            a.visibility.as_str(),
            desc
        ));
    }
    format!("<ul class=\"apps\">{}</ul>", items)
}

// Mirrors NameCheck: empty is silent, a mismatch shows the message.
fn name_script() -> String {
    format!(
        r#"<script>
(function () {{
  var re = /^{}$/;
  var input = document.getElementById("name");
  var err = document.getElementById("name-error");
  var btn = document.getElementById("create");
  input.addEventListener("input", function () {{
    var v = input.value;
    var ok = v.length > 0 && re.test(v);
    err.textContent = v.length > 0 && !ok ? {} : "";
    btn.disabled = !ok;
  }});
}})();
</script>"#,
        NAME_PATTERN,
        serde_json::Value::String(NAME_ERROR.to_string())
    )
}

pub fn new_app_page(user: &str, form: &FormState, apps: &[App]) -> String {
    let error = form.name_error().map(text).unwrap_or_default();

    let body = format!(
        r#"{tabs}
<h1>New App</h1>
<form action="/api/apps/{user_attr}" method="POST">
  <div>
    <label for="name">App name</label>
    <input type="text" id="name" name="name" value="{name}" pattern="{pattern}" required/>
    <p id="name-error" class="error">{error}</p>
  </div>
  <div>
    <label for="description">Description</label>
    <input type="text" id="description" name="description" value="{description}"/>
  </div>
  <fieldset>
    <legend>Visibility</legend>
    {public}
    {private}
  </fieldset>
  {button}
</form>
<section>
  <h2>Your apps</h2>
  {apps}
</section>
{script}"#,
        tabs = tabs(user, "Apps"),
        user_attr = seg(user),
        name = attr(&form.name),
        pattern = NAME_PATTERN,
        error = error,
        description = attr(&form.description),
        public = radio(Visibility::Public, form.visibility, "Public"),
        private = radio(Visibility::Private, form.visibility, "Private"),
        button = button("create", "Create", form.submit_enabled()),
        apps = apps_list(user, apps),
        script = name_script(),
    );

    layout("New App", Some(user), &body)
}

pub fn home_page() -> String {
    layout("Home", None, "<h1>Apps</h1>\n<p>Sign in to manage your apps.</p>")
}

pub fn not_found_page() -> String {
    layout("Not Found", None, "<h1>404</h1>\n<p>This page could not be found.</p>")
}

pub fn server_error_page() -> String {
    layout(
        "Server Error",
        None,
        "<h1>500</h1>\n<p>An internal server error occurred.</p>",
    )
}
