use crate::names::class;
use dom::{Document, Id};

/// Controls bar capability, resolved once at mount time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Controls {
    With(ControlHandles),
    Without,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ControlHandles {
    pub container: Id,
    pub next: Id,
    pub prev: Id,
    pub start: Id,
    pub fullscreen: Id,
    pub help: Id,
    pub captions: Option<Id>,
}

impl Controls {
    /// Look up the controls bar inside `gallery`. A bar missing any required
    /// button is treated as absent.
    pub fn resolve(doc: &Document, gallery: Id) -> Self {
        let Some(container) = doc.query_class(gallery, class::CONTROLS) else {
            return Controls::Without;
        };

        let find = |name: &str| doc.query_class(container, name);
        match (
            find(class::NEXT_BUTTON),
            find(class::PREV_BUTTON),
            find(class::START_BUTTON),
            find(class::FULLSCREEN_BUTTON),
            find(class::HELP_BUTTON),
        ) {
            (Some(next), Some(prev), Some(start), Some(fullscreen), Some(help)) => {
                Controls::With(ControlHandles {
                    container,
                    next,
                    prev,
                    start,
                    fullscreen,
                    help,
                    captions: find(class::CAPTIONS_BUTTON),
                })
            }
            _ => {
                log::warn!(
                    target: "carousel",
                    "controls bar {container:?} is missing a required button; keyboard and button controls disabled"
                );
                Controls::Without
            }
        }
    }

    pub fn handles(&self) -> Option<&ControlHandles> {
        match self {
            Controls::With(handles) => Some(handles),
            Controls::Without => None,
        }
    }

    pub fn has_captions(&self) -> bool {
        self.handles().is_some_and(|h| h.captions.is_some())
    }
}

/// Write a button label into its icon element (first child), or into the
/// button itself when it has no children.
pub(crate) fn set_label(doc: &mut Document, button: Id, text: &str) {
    let target = doc.first_child(button).unwrap_or(button);
    doc.set_text(target, text);
}
