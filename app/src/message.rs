use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::config::MESSAGE_HIDE_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

/// Transient message area. Every `show` replaces the visible message and
/// the pending hide; the replaced `Timeout` is dropped, which cancels it.
#[derive(Clone)]
pub struct FlashHandle {
    current: UseStateHandle<Option<Flash>>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl FlashHandle {
    pub fn show(&self, flash: Flash) {
        self.current.set(Some(flash));
        let current = self.current.clone();
        let hide = Timeout::new(MESSAGE_HIDE_MS, move || current.set(None));
        self.pending.borrow_mut().replace(hide);
    }

    pub fn current(&self) -> Option<&Flash> {
        (*self.current).as_ref()
    }
}

#[hook]
pub fn use_flash() -> FlashHandle {
    let current = use_state(|| None::<Flash>);
    let pending = use_mut_ref(|| None::<Timeout>);
    FlashHandle { current, pending }
}

#[derive(Properties, PartialEq)]
pub struct FlashAreaProps {
    pub flash: Option<Flash>,
}

#[function_component(FlashArea)]
pub fn flash_area(props: &FlashAreaProps) -> Html {
    match &props.flash {
        Some(f) => html! {
            <div id="message" class={classes!("message", f.class())}>{ f.text.clone() }</div>
        },
        None => html! { <div id="message" class="hidden"></div> },
    }
}
