//! # The `Placeholder` component
//!
//! The Display Host: renders its children once the caller declares them
//! ready, and one of the built-in filler shapes (or a caller-supplied custom
//! filler) until then.
//!
//! The component also plays the timer-adapter role for the
//! [`ReadinessMachine`](crate::machine::ReadinessMachine): prop changes are
//! fed into the machine, and the machine's directives are executed by
//! spawning or cancelling a single sleep task. The task is owned by this
//! component's scope, so an unmount can never leave a timer behind to mutate
//! dead state; an explicit `use_drop` cancellation makes that cleanup path
//! visible rather than implied.

use std::time::Duration;

use dioxus::prelude::*;

use crate::fillers::{render_config_error, CustomFiller, FillerKind, FillerOptions};
use crate::machine::{Directive, DisplayState, ReadinessMachine};
use crate::utils::{async_sleep, CCStr};

/// Shows a filler until `ready` is `true`, then the children.
///
/// `ready`, `delay` and `first_launch_only` drive the readiness state
/// machine and are re-evaluated whenever one of them changes:
///
/// - `delay` defers a content→filler transition by that many milliseconds,
///   absorbing brief readiness dips. The filler→content direction is never
///   delayed, and neither is the initial state.
/// - `first_launch_only` latches the display once content has been shown:
///   later `ready = false` signals are ignored for the rest of the
///   component's life.
///
/// The remaining props configure the filler: a built-in shape [`FillerKind`]
/// with its tint, class list and shape parameters, or a [`CustomFiller`]
/// that replaces the shapes entirely (mutually exclusive with `kind`; the
/// computed classes are merged after the custom node's own).
///
/// ## Example
///
/// ```rust
/// use dioxus::prelude::*;
/// use dioxus_placeholder::prelude::*;
///
/// #[component]
/// fn Profile(name: Option<String>) -> Element {
///     rsx! {
///         Placeholder {
///             ready: name.is_some(),
///             delay: 300u64,
///             kind: FillerKind::Media,
///             rows: 4,
///             div { class: "profile", {name.clone().unwrap_or_default()} }
///         }
///     }
/// }
/// ```
#[component]
pub fn Placeholder(
    /// Pass `true` when the content is ready and `false` while it is loading.
    ready: ReadOnlySignal<bool>,
    /// Delay in millis to wait when passing from ready to NOT ready.
    #[props(default = ReadOnlySignal::new(Signal::new(0)))] delay: ReadOnlySignal<u64>,
    /// If `true`, the filler is never rendered again once `ready` has been
    /// `true`, even if it becomes `false` again.
    #[props(default = ReadOnlySignal::new(Signal::new(false)))]
    first_launch_only: ReadOnlySignal<bool>,
    /// Built-in filler shape to render; defaults to [`FillerKind::Text`].
    kind: Option<FillerKind>,
    /// Filler tint; defaults to [`DEFAULT_COLOR`](crate::fillers::DEFAULT_COLOR).
    color: Option<CCStr>,
    /// Adds the `show-loading-animation` marker to the filler's class list.
    #[props(default = false)] show_loading_animation: bool,
    /// Appended to the filler's class list.
    class: Option<CCStr>,
    /// Appended to the filler root's inline style.
    style: Option<CCStr>,
    /// Row count for the `text` and `media` shapes.
    rows: Option<u32>,
    /// Replaces shape-based rendering entirely; mutually exclusive with `kind`.
    custom_placeholder: Option<CustomFiller>,
    /// The content to show when ready.
    children: Element,
) -> Element {
    let mut machine = use_signal(|| ReadinessMachine::new(*ready.peek()));
    let mut pending_hide = use_signal(|| None::<Task>);

    use_effect(move || {
        let directive = machine.write().evaluate(
            ready(),
            first_launch_only(),
            Duration::from_millis(delay()),
        );
        log::debug!("Placeholder evaluated: {directive:?}");
        match directive {
            Directive::Idle => {}
            Directive::CancelHide => {
                if let Some(task) = pending_hide.write().take() {
                    task.cancel();
                }
            }
            Directive::ScheduleHide(wait) => {
                if let Some(task) = pending_hide.write().take() {
                    task.cancel();
                }
                let task = spawn(async move {
                    async_sleep(wait.as_millis() as u64).await;
                    log::debug!("Placeholder hide delay elapsed");
                    machine.write().hide_timer_elapsed();
                });
                *pending_hide.write() = Some(task);
            }
        }
    });

    // Mandatory cleanup path: a timer must never outlive its instance.
    use_drop(move || {
        if let Some(task) = pending_hide.write().take() {
            log::debug!("Placeholder dropped with a pending hide; cancelling it");
            task.cancel();
        }
    });

    let showing_content = use_memo(move || machine.read().display() == DisplayState::Content);

    if showing_content() {
        return rsx! {
            {children}
        };
    }

    let options = FillerOptions {
        kind,
        custom: custom_placeholder,
        color,
        show_loading_animation,
        class,
        style,
        rows,
    };
    match options.resolve() {
        Ok(filler) => filler.render(),
        Err(error) => {
            log::error!("invalid placeholder configuration: {error}");
            render_config_error(&error)
        }
    }
}
