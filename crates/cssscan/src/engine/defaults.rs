//! Browser-default computed values.
//!
//! A value is default when it is one of the strings listed for its property
//! in [`DEFAULT_VALUES`], or when it matches the generic all-zero-length
//! pattern (`0px`, `0% 0px`). The pattern applies to every property, listed
//! or not, so `column-gap: 0px` and `top: 0px` are both elided.

use phf::phf_map;

use crate::parser::values::is_zero_length;

/// Computed values a browser reports for an untouched property.
///
/// The first entry of each list doubles as the initial value used by the
/// test fixture's cascade.
pub static DEFAULT_VALUES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    // Box model
    "margin" => &["0px"],
    "margin-top" => &["0px"],
    "margin-right" => &["0px"],
    "margin-bottom" => &["0px"],
    "margin-left" => &["0px"],
    "padding" => &["0px"],
    "padding-top" => &["0px"],
    "padding-right" => &["0px"],
    "padding-bottom" => &["0px"],
    "padding-left" => &["0px"],
    "box-sizing" => &["content-box"],
    "width" => &["auto"],
    "height" => &["auto"],
    "min-width" => &["auto", "0px"],
    "min-height" => &["auto", "0px"],
    "max-width" => &["none"],
    "max-height" => &["none"],

    // Borders
    "border-top-width" => &["0px", "medium"],
    "border-right-width" => &["0px", "medium"],
    "border-bottom-width" => &["0px", "medium"],
    "border-left-width" => &["0px", "medium"],
    "border-top-style" => &["none"],
    "border-right-style" => &["none"],
    "border-bottom-style" => &["none"],
    "border-left-style" => &["none"],
    "border-top-color" => &["currentcolor"],
    "border-right-color" => &["currentcolor"],
    "border-bottom-color" => &["currentcolor"],
    "border-left-color" => &["currentcolor"],
    "border-image-source" => &["none"],
    "border-image-slice" => &["100%"],
    "border-image-width" => &["1"],
    "border-image-outset" => &["0", "0px"],
    "border-image-repeat" => &["stretch"],
    "border-radius" => &["0px"],
    "border-top-left-radius" => &["0px"],
    "border-top-right-radius" => &["0px"],
    "border-bottom-right-radius" => &["0px"],
    "border-bottom-left-radius" => &["0px"],
    "border-collapse" => &["separate"],
    "outline-style" => &["none"],
    "outline-width" => &["0px", "medium"],
    "outline-offset" => &["0px"],

    // Backgrounds
    "background-color" => &["rgba(0, 0, 0, 0)", "transparent"],
    "background-image" => &["none"],
    "background-repeat" => &["repeat"],
    "background-attachment" => &["scroll"],
    "background-position" => &["0% 0%"],
    "background-position-x" => &["0%"],
    "background-position-y" => &["0%"],
    "background-size" => &["auto", "auto auto"],
    "background-origin" => &["padding-box"],
    "background-clip" => &["border-box"],
    "background-blend-mode" => &["normal"],

    // Positioning and display
    "position" => &["static"],
    "top" => &["auto"],
    "right" => &["auto"],
    "bottom" => &["auto"],
    "left" => &["auto"],
    "z-index" => &["auto"],
    "float" => &["none"],
    "clear" => &["none"],
    "visibility" => &["visible"],
    "opacity" => &["1"],
    "overflow" => &["visible"],
    "overflow-x" => &["visible"],
    "overflow-y" => &["visible"],
    "transform" => &["none"],
    "filter" => &["none"],
    "box-shadow" => &["none"],
    "clip-path" => &["none"],
    "mix-blend-mode" => &["normal"],
    "isolation" => &["auto"],
    "will-change" => &["auto"],
    "cursor" => &["auto"],
    "pointer-events" => &["auto"],
    "user-select" => &["auto"],
    "resize" => &["none"],
    "content" => &["normal"],
    "object-fit" => &["fill"],

    // Flex and grid
    "flex-direction" => &["row"],
    "flex-wrap" => &["nowrap"],
    "flex-grow" => &["0"],
    "flex-shrink" => &["1"],
    "flex-basis" => &["auto"],
    "order" => &["0"],
    "justify-content" => &["normal"],
    "align-items" => &["normal"],
    "align-content" => &["normal"],
    "align-self" => &["auto"],
    "gap" => &["normal"],
    "row-gap" => &["normal"],
    "column-gap" => &["normal"],

    // Text
    "font-style" => &["normal"],
    "font-weight" => &["400", "normal"],
    "font-variant" => &["normal"],
    "letter-spacing" => &["normal"],
    "word-spacing" => &["0px"],
    "line-height" => &["normal"],
    "text-align" => &["start"],
    "text-indent" => &["0px"],
    "text-transform" => &["none"],
    "text-shadow" => &["none"],
    "text-decoration-line" => &["none"],
    "white-space" => &["normal"],
    "vertical-align" => &["baseline"],
    "list-style-type" => &["disc"],

    // Motion
    "transition-property" => &["all"],
    "transition-duration" => &["0s"],
    "transition-timing-function" => &["ease"],
    "transition-delay" => &["0s"],
    "animation-name" => &["none"],
    "animation-duration" => &["0s"],
    "animation-timing-function" => &["ease"],
    "animation-delay" => &["0s"],
    "animation-iteration-count" => &["1"],
    "animation-direction" => &["normal"],
    "animation-fill-mode" => &["none"],
    "animation-play-state" => &["running"],
};

/// Whether `value` is what a browser reports for an untouched `property`.
///
/// ```
/// use cssscan::is_default_value;
///
/// assert!(is_default_value("margin-top", "0px"));
/// assert!(is_default_value("opacity", "1"));
/// assert!(!is_default_value("color", "rgb(0, 0, 0)"));
/// ```
pub fn is_default_value(property: &str, value: &str) -> bool {
    if property.starts_with("--") {
        return false;
    }

    let value = value.trim();
    let listed = DEFAULT_VALUES
        .get(property)
        .is_some_and(|defaults| defaults.iter().any(|d| d.eq_ignore_ascii_case(value)));
    listed || is_zero_length(value)
}

/// The value the test fixture assumes for a property nothing declared.
pub fn initial_value(property: &str) -> Option<&'static str> {
    DEFAULT_VALUES
        .get(property)
        .and_then(|defaults| defaults.first().copied())
}
