//! # Built-in filler shapes
//!
//! The filler renderer behind [`Placeholder`](crate::component::Placeholder):
//! a closed set of shape kinds ([`FillerKind`]) mapped to shape components,
//! plus the configuration-resolution step that merges class names, applies
//! the default tint and validates the caller's options before anything is
//! rendered.
//!
//! The state machine never sees any of this; it hands the Display Host a
//! resolved "show filler" decision and the filler renderer takes it from
//! there.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{join_class_names, CCStr};

/// Default filler tint, used when the caller does not pick a color.
pub const DEFAULT_COLOR: &str = "#CDCDCD";

/// Class marking an animated filler; styling it is up to the embedding app.
pub const LOADING_ANIMATION_CLASS: &str = "show-loading-animation";

/// The closed enumeration of built-in filler shapes.
///
/// Serialized with the historical camelCase names (`text`, `textRow`, `rect`,
/// `round`, `media`) so configuration files keep working across ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FillerKind {
    /// A block of text bar rows.
    #[default]
    Text,
    /// A single text bar row.
    TextRow,
    /// A filled rectangle.
    Rect,
    /// A filled circle.
    Round,
    /// A media block: round avatar next to text rows.
    Media,
}

impl FillerKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextRow => "textRow",
            Self::Rect => "rect",
            Self::Round => "round",
            Self::Media => "media",
        }
    }
}

impl core::fmt::Display for FillerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for FillerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "text" => Self::Text,
            "textRow" => Self::TextRow,
            "rect" => Self::Rect,
            "round" => Self::Round,
            "media" => Self::Media,
            other => return Err(ConfigError::UnknownShape(other.to_string())),
        })
    }
}

/// A configuration that cannot be rendered.
///
/// Reported at the configuration boundary; the state machine itself never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown filler shape `{0}` (expected one of: text, textRow, rect, round, media)")]
    UnknownShape(String),
    #[error("`kind` and `custom_placeholder` are mutually exclusive; supply only one of them")]
    AmbiguousFiller,
}

/// A caller-supplied filler node that replaces the built-in shapes.
///
/// Carries the node's own class list alongside the node so the Display Host
/// can merge the computed classes into it (own classes first, then computed)
/// without having to rewrite an opaque [`Element`].
#[derive(Clone, PartialEq)]
pub struct CustomFiller {
    class: Option<CCStr>,
    node: Element,
}

impl CustomFiller {
    pub fn new(node: Element) -> Self {
        Self { class: None, node }
    }

    /// Declares the classes the custom node considers its own.
    pub fn with_class(mut self, class: impl Into<CCStr>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Everything the caller specified about the filler, before resolution.
#[derive(Clone, PartialEq, Default)]
pub struct FillerOptions {
    pub kind: Option<FillerKind>,
    pub custom: Option<CustomFiller>,
    pub color: Option<CCStr>,
    pub show_loading_animation: bool,
    pub class: Option<CCStr>,
    pub style: Option<CCStr>,
    pub rows: Option<u32>,
}

impl FillerOptions {
    /// Validates the options and resolves defaults.
    ///
    /// Supplying both a shape kind and a custom filler is a configuration
    /// error; everything else resolves: the kind defaults to
    /// [`FillerKind::Text`], the color to [`DEFAULT_COLOR`], and the
    /// loading-animation marker is folded into the class list ahead of the
    /// caller's own `class`.
    pub fn resolve(self) -> Result<ResolvedFiller, ConfigError> {
        if self.kind.is_some() && self.custom.is_some() {
            return Err(ConfigError::AmbiguousFiller);
        }

        let marker = if self.show_loading_animation {
            LOADING_ANIMATION_CLASS
        } else {
            ""
        };
        let caller_class = self.class.as_deref().unwrap_or("");

        if let Some(custom) = self.custom {
            let classes = join_class_names(&[
                custom.class.as_deref().unwrap_or(""),
                marker,
                caller_class,
            ]);
            return Ok(ResolvedFiller::Custom {
                node: custom.node,
                classes,
            });
        }

        Ok(ResolvedFiller::Shape {
            kind: self.kind.unwrap_or_default(),
            color: self
                .color
                .unwrap_or_else(|| CCStr::from(DEFAULT_COLOR)),
            classes: join_class_names(&[marker, caller_class]),
            style: self.style.unwrap_or_default(),
            rows: self.rows,
        })
    }
}

/// A validated filler, ready to render.
#[derive(Clone, PartialEq)]
pub enum ResolvedFiller {
    Shape {
        kind: FillerKind,
        color: CCStr,
        classes: CCStr,
        style: CCStr,
        rows: Option<u32>,
    },
    Custom {
        node: Element,
        classes: CCStr,
    },
}

impl ResolvedFiller {
    pub fn render(self) -> Element {
        match self {
            Self::Shape {
                kind,
                color,
                classes,
                style,
                rows,
            } => match kind {
                FillerKind::Text => rsx! {
                    TextBlock { color, rows: rows.unwrap_or(4), class: classes, style }
                },
                FillerKind::TextRow => rsx! {
                    TextRow { color, class: classes, style }
                },
                FillerKind::Rect => rsx! {
                    RectShape { color, class: classes, style }
                },
                FillerKind::Round => rsx! {
                    RoundShape { color, class: classes, style }
                },
                FillerKind::Media => rsx! {
                    MediaBlock { color, rows: rows.unwrap_or(3), class: classes, style }
                },
            },
            Self::Custom { node, classes } => rsx! {
                span { class: "{classes}", {node} }
            },
        }
    }
}

/// Renders a configuration error inline, in place of the filler.
pub(crate) fn render_config_error(error: &ConfigError) -> Element {
    rsx! {
        span { class: "placeholder-config-error text-error", "{error}" }
    }
}

fn text_row(color: &CCStr, width: &str, margin_top: &str) -> Element {
    rsx! {
        div {
            class: "text-row",
            style: "background-color: {color}; width: {width}; height: 1em; margin-top: {margin_top};",
        }
    }
}

/// `rows` text bar rows; the last row is narrowed when there is more than one.
#[component]
pub fn TextBlock(
    color: CCStr,
    #[props(default = 4)] rows: u32,
    #[props(default)] class: CCStr,
    #[props(default)] style: CCStr,
) -> Element {
    let class = join_class_names(&["text-block", &class]);
    rsx! {
        div { class: "{class}", style: if !style.is_empty() { "{style}" },
            for i in 0..rows {
                {
                    text_row(
                        &color,
                        if rows > 1 && i == rows - 1 { "80%" } else { "100%" },
                        if i == 0 { "0" } else { "0.7em" },
                    )
                }
            }
        }
    }
}

/// A single text bar row.
#[component]
pub fn TextRow(
    color: CCStr,
    #[props(default)] class: CCStr,
    #[props(default)] style: CCStr,
) -> Element {
    let class = join_class_names(&["text-row", &class]);
    rsx! {
        div {
            class: "{class}",
            style: "background-color: {color}; width: 100%; height: 1em; {style}",
        }
    }
}

/// A filled rectangle that takes all the space its parent gives it.
#[component]
pub fn RectShape(
    color: CCStr,
    #[props(default)] class: CCStr,
    #[props(default)] style: CCStr,
) -> Element {
    let class = join_class_names(&["rect-shape", &class]);
    rsx! {
        div {
            class: "{class}",
            style: "background-color: {color}; width: 100%; height: 100%; {style}",
        }
    }
}

/// A filled circle that takes all the space its parent gives it.
#[component]
pub fn RoundShape(
    color: CCStr,
    #[props(default)] class: CCStr,
    #[props(default)] style: CCStr,
) -> Element {
    let class = join_class_names(&["round-shape", &class]);
    rsx! {
        div {
            class: "{class}",
            style: "background-color: {color}; width: 100%; height: 100%; border-radius: 500rem; {style}",
        }
    }
}

/// A round avatar next to a block of text rows.
#[component]
pub fn MediaBlock(
    color: CCStr,
    #[props(default = 3)] rows: u32,
    #[props(default)] class: CCStr,
    #[props(default)] style: CCStr,
) -> Element {
    let class = join_class_names(&["media-block", &class]);
    rsx! {
        div { class: "{class}", style: "display: flex; {style}",
            div {
                class: "round-shape",
                style: "background-color: {color}; width: 55px; height: 55px; border-radius: 500rem; margin-right: 10px; flex-shrink: 0;",
            }
            div { style: "flex: 1 1 auto;",
                TextBlock { color: color.clone(), rows }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_options() -> FillerOptions {
        FillerOptions::default()
    }

    #[test]
    fn defaults_resolve_to_gray_text() {
        let resolved = shape_options().resolve().unwrap();
        match resolved {
            ResolvedFiller::Shape {
                kind,
                color,
                classes,
                rows,
                ..
            } => {
                assert_eq!(kind, FillerKind::Text);
                assert_eq!(&*color, DEFAULT_COLOR);
                assert!(classes.is_empty());
                assert_eq!(rows, None);
            }
            ResolvedFiller::Custom { .. } => panic!("expected a shape filler"),
        }
    }

    #[test]
    fn marker_precedes_caller_class() {
        let resolved = FillerOptions {
            show_loading_animation: true,
            class: Some(CCStr::from("foo")),
            ..shape_options()
        }
        .resolve()
        .unwrap();
        match resolved {
            ResolvedFiller::Shape { classes, .. } => {
                assert_eq!(&*classes, "show-loading-animation foo");
            }
            ResolvedFiller::Custom { .. } => panic!("expected a shape filler"),
        }
    }

    #[test]
    fn custom_filler_merges_own_classes_first() {
        let resolved = FillerOptions {
            custom: Some(CustomFiller::new(VNode::empty()).with_class("own-class")),
            show_loading_animation: true,
            class: Some(CCStr::from("foo")),
            ..shape_options()
        }
        .resolve()
        .unwrap();
        match resolved {
            ResolvedFiller::Custom { classes, .. } => {
                assert_eq!(&*classes, "own-class show-loading-animation foo");
            }
            ResolvedFiller::Shape { .. } => panic!("expected a custom filler"),
        }
    }

    #[test]
    fn custom_filler_ignores_color() {
        // `color` only applies to shape fillers; a custom node paints itself.
        let resolved = FillerOptions {
            custom: Some(CustomFiller::new(VNode::empty())),
            color: Some(CCStr::from("#FF0000")),
            ..shape_options()
        }
        .resolve();
        assert!(matches!(resolved, Ok(ResolvedFiller::Custom { .. })));
    }

    #[test]
    fn kind_and_custom_are_mutually_exclusive() {
        let resolved = FillerOptions {
            kind: Some(FillerKind::Rect),
            custom: Some(CustomFiller::new(VNode::empty())),
            ..shape_options()
        }
        .resolve();
        assert_eq!(resolved.err(), Some(ConfigError::AmbiguousFiller));
    }

    #[test]
    fn shape_names_round_trip() {
        for kind in [
            FillerKind::Text,
            FillerKind::TextRow,
            FillerKind::Rect,
            FillerKind::Round,
            FillerKind::Media,
        ] {
            assert_eq!(kind.name().parse::<FillerKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_shape_name_is_rejected() {
        let err = "blob".parse::<FillerKind>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownShape("blob".to_string()));
        assert!(err.to_string().contains("textRow"));
    }
}
