use yew::NodeRef;

use crate::content::Section;
use crate::preferences::{Language, Theme};
use crate::reveal::RevealOptions;

pub fn apply_theme(_theme: Theme) {}

pub fn apply_theme_with_transition(_theme: Theme) {}

pub fn apply_language(_language: Language) {}

pub fn scroll_into_view(_section: Section) -> bool {
    false
}

pub struct RevealHandle;

impl RevealHandle {
    pub fn dispose(&mut self) {}
}

pub fn attach_reveal(_root: &NodeRef, _options: &RevealOptions) -> RevealHandle {
    RevealHandle
}
