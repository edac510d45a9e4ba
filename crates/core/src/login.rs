//! Login form detection.
//!
//! A best-effort guess, not a security control. Forms whose action mentions
//! registration are never login forms; forms whose action mentions logging in
//! always are; anything else is judged by its input fields.

use ego_tree::NodeRef;
use scraper::Node;

const REGISTRATION_MARKERS: [&str; 2] = ["register", "signup"];
const LOGIN_MARKERS: [&str; 2] = ["login", "signin"];

/// Tally of the credential-like inputs inside a form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputTally {
    pub password: usize,
    pub username: usize,
}

impl InputTally {
    /// One username-ish field next to one password field.
    pub fn looks_like_login(&self) -> bool {
        self.password == 1 && self.username == 1
    }
}

/// Decides whether `form` is a login form.
///
/// Substring checks on `action` are literal and case-sensitive.
pub fn is_login_form(form: NodeRef<'_, Node>) -> bool {
    let action = form
        .value()
        .as_element()
        .and_then(|el| el.attr("action"))
        .unwrap_or_default();

    if REGISTRATION_MARKERS.iter().any(|m| action.contains(m)) {
        return false;
    }
    if LOGIN_MARKERS.iter().any(|m| action.contains(m)) {
        return true;
    }

    tally_inputs(form).looks_like_login()
}

/// Counts password and email/text inputs anywhere below `form`.
pub fn tally_inputs(form: NodeRef<'_, Node>) -> InputTally {
    input_types(form).fold(InputTally::default(), |mut tally, kind| {
        match kind {
            "password" => tally.password += 1,
            "email" | "text" => tally.username += 1,
            _ => {}
        }
        tally
    })
}

/// The `type` attribute of every `input` element below `node`, in document
/// order. Inputs without a `type` report an empty string.
pub fn input_types<'a>(node: NodeRef<'a, Node>) -> impl Iterator<Item = &'a str> {
    node.descendants().filter_map(|n| match n.value() {
        Node::Element(el) if el.name() == "input" => Some(el.attr("type").unwrap_or_default()),
        _ => None,
    })
}
