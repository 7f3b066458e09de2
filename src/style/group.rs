//! Property-group classification for style tokens.
//!
//! A style token is a utility class such as `bg-blue-100`, optionally
//! prefixed by variant modifiers (`hover:`, `print:`, `focus:`) and an
//! important marker (`!`). Classification looks only at the token's own
//! syntax; nothing is resolved against a stylesheet.
//!
//! Tokens that match no known group are "miscellaneous": they never
//! conflict with anything and are passed through unchanged.

/// The semantic category a utility affects.
///
/// Two tokens conflict when they share a group under the same modifiers.
/// Some groups additionally shadow narrower ones (see [`PropertyGroup::shadows`]),
/// e.g. `p-0` overrides an earlier `px-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyGroup {
    Display,
    Visibility,
    Overflow,
    FlexDirection,
    FlexWrap,
    AlignItems,
    JustifyContent,
    GridCols,
    ListStyle,
    Gap,
    GapX,
    GapY,
    SpaceX,
    SpaceY,
    Padding,
    PaddingX,
    PaddingY,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginX,
    MarginY,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Size,
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    FontSize,
    FontWeight,
    FontFamily,
    TextColor,
    TextAlign,
    TextWrap,
    TextDecoration,
    BackgroundColor,
    BorderWidth,
    BorderStyle,
    BorderColor,
    BorderRadius,
    Shadow,
    Opacity,
    Outline,
    RingWidth,
    RingColor,
    RingOffsetWidth,
    RingOffsetColor,
    TransitionProperty,
    Duration,
    Ease,
    Delay,
    Scale,
}

impl PropertyGroup {
    /// Narrower groups that a later token of this group also overrides.
    pub fn shadows(self) -> &'static [PropertyGroup] {
        use PropertyGroup::*;
        match self {
            Padding => &[
                PaddingX,
                PaddingY,
                PaddingTop,
                PaddingRight,
                PaddingBottom,
                PaddingLeft,
            ],
            PaddingX => &[PaddingRight, PaddingLeft],
            PaddingY => &[PaddingTop, PaddingBottom],
            Margin => &[
                MarginX,
                MarginY,
                MarginTop,
                MarginRight,
                MarginBottom,
                MarginLeft,
            ],
            MarginX => &[MarginRight, MarginLeft],
            MarginY => &[MarginTop, MarginBottom],
            Gap => &[GapX, GapY],
            Size => &[Width, Height],
            _ => &[],
        }
    }
}

/// A token split into its modifier prefix and bare utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken<'a> {
    /// Variant modifiers in source order, e.g. `["hover"]` for `hover:bg-x`.
    pub modifiers: Vec<&'a str>,
    /// Set for `!bg-x` and `bg-x!`.
    pub important: bool,
    /// The utility with modifiers, important marker and negative sign removed.
    pub utility: &'a str,
}

/// Splits a token at top-level `:` separators.
///
/// Colons inside arbitrary values (`bg-[url(a:b)]`) are left alone.
pub fn parse_token(token: &str) -> ParsedToken<'_> {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in token.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&token[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    let mut utility = &token[start..];
    let mut important = false;
    if let Some(rest) = utility.strip_prefix('!') {
        utility = rest;
        important = true;
    } else if let Some(rest) = utility.strip_suffix('!') {
        utility = rest;
        important = true;
    }
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    ParsedToken {
        modifiers,
        important,
        utility,
    }
}

/// Returns the property group of a whole token, or `None` for miscellaneous.
pub fn classify(token: &str) -> Option<PropertyGroup> {
    classify_utility(parse_token(token).utility)
}

/// Returns the property group of a bare utility (no modifiers).
pub fn classify_utility(utility: &str) -> Option<PropertyGroup> {
    use PropertyGroup::*;

    match utility {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid"
        | "table" | "contents" | "flow-root" | "hidden" => return Some(Display),
        "visible" | "invisible" | "collapse" => return Some(Visibility),
        "underline" | "overline" | "line-through" | "no-underline" => return Some(TextDecoration),
        "border" => return Some(BorderWidth),
        "rounded" => return Some(BorderRadius),
        "shadow" => return Some(Shadow),
        "transition" => return Some(TransitionProperty),
        "ring" => return Some(RingWidth),
        _ => {}
    }

    if let Some(v) = utility.strip_prefix("text-") {
        return classify_text(v);
    }
    if let Some(v) = utility.strip_prefix("bg-") {
        return match v {
            "fixed" | "local" | "scroll" | "cover" | "contain" | "auto" | "center" | "top"
            | "bottom" | "left" | "right" | "repeat" | "no-repeat" | "none" => None,
            _ if v.starts_with("gradient-") || v.starts_with("clip-") => None,
            _ => Some(BackgroundColor),
        };
    }
    if let Some(v) = utility.strip_prefix("font-") {
        return match v {
            "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold"
            | "extrabold" | "black" => Some(FontWeight),
            "sans" | "serif" | "mono" => Some(FontFamily),
            _ => None,
        };
    }
    if let Some(v) = utility.strip_prefix("border-") {
        return classify_border(v);
    }
    if let Some(v) = utility.strip_prefix("rounded-") {
        let per_corner = ["t", "r", "b", "l", "s", "e", "tl", "tr", "br", "bl"]
            .iter()
            .any(|side| v == *side || v.starts_with(&format!("{side}-")));
        return if per_corner { None } else { Some(BorderRadius) };
    }
    if let Some(v) = utility.strip_prefix("shadow-") {
        return match v {
            "sm" | "md" | "lg" | "xl" | "2xl" | "inner" | "none" => Some(Shadow),
            _ => None,
        };
    }
    if let Some(v) = utility.strip_prefix("ring-offset-") {
        return Some(if is_length(v) {
            RingOffsetWidth
        } else {
            RingOffsetColor
        });
    }
    if let Some(v) = utility.strip_prefix("ring-") {
        return match v {
            "inset" => None,
            _ if is_length(v) => Some(RingWidth),
            _ => Some(RingColor),
        };
    }
    if let Some(v) = utility.strip_prefix("outline-") {
        return match v {
            "none" | "dashed" | "dotted" | "double" | "hidden" => Some(Outline),
            _ => None,
        };
    }
    if let Some(v) = utility.strip_prefix("flex-") {
        return match v {
            "row" | "row-reverse" | "col" | "col-reverse" => Some(FlexDirection),
            "wrap" | "wrap-reverse" | "nowrap" => Some(FlexWrap),
            _ => None,
        };
    }
    if let Some(v) = utility.strip_prefix("list-") {
        return match v {
            "inside" | "outside" => None,
            _ => Some(ListStyle),
        };
    }
    if let Some(v) = utility.strip_prefix("overflow-") {
        return if v.starts_with("x-") || v.starts_with("y-") {
            None
        } else {
            Some(Overflow)
        };
    }
    if let Some(v) = utility.strip_prefix("scale-") {
        return if v.starts_with("x-") || v.starts_with("y-") {
            None
        } else {
            Some(Scale)
        };
    }

    const PREFIXED: &[(&str, PropertyGroup)] = &[
        ("items-", AlignItems),
        ("justify-", JustifyContent),
        ("grid-cols-", GridCols),
        ("gap-x-", GapX),
        ("gap-y-", GapY),
        ("gap-", Gap),
        ("space-x-", SpaceX),
        ("space-y-", SpaceY),
        ("px-", PaddingX),
        ("py-", PaddingY),
        ("pt-", PaddingTop),
        ("pr-", PaddingRight),
        ("pb-", PaddingBottom),
        ("pl-", PaddingLeft),
        ("p-", Padding),
        ("mx-", MarginX),
        ("my-", MarginY),
        ("mt-", MarginTop),
        ("mr-", MarginRight),
        ("mb-", MarginBottom),
        ("ml-", MarginLeft),
        ("m-", Margin),
        ("size-", Size),
        ("min-w-", MinWidth),
        ("min-h-", MinHeight),
        ("max-w-", MaxWidth),
        ("max-h-", MaxHeight),
        ("w-", Width),
        ("h-", Height),
        ("opacity-", Opacity),
        ("transition-", TransitionProperty),
        ("duration-", Duration),
        ("ease-", Ease),
        ("delay-", Delay),
    ];

    PREFIXED
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

fn classify_text(value: &str) -> Option<PropertyGroup> {
    use PropertyGroup::*;
    let group = match value {
        "xs" | "sm" | "base" | "lg" | "xl" => FontSize,
        "left" | "center" | "right" | "justify" | "start" | "end" => TextAlign,
        "wrap" | "nowrap" | "balance" | "pretty" => TextWrap,
        "ellipsis" | "clip" => return None,
        _ if value.ends_with("xl") && value[..value.len() - 2].parse::<u8>().is_ok() => FontSize,
        _ if is_arbitrary_length(value) => FontSize,
        _ => TextColor,
    };
    Some(group)
}

fn classify_border(value: &str) -> Option<PropertyGroup> {
    use PropertyGroup::*;
    match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => Some(BorderStyle),
        "x" | "y" | "t" | "r" | "b" | "l" | "s" | "e" => None,
        _ if is_length(value) => Some(BorderWidth),
        _ => {
            let per_side = ["x-", "y-", "t-", "r-", "b-", "l-", "s-", "e-"]
                .iter()
                .any(|side| value.starts_with(side));
            if per_side {
                None
            } else {
                Some(BorderColor)
            }
        }
    }
}

/// Integer scale steps (`2`, `0.5`) or an arbitrary length (`[3px]`).
fn is_length(value: &str) -> bool {
    value.parse::<f32>().is_ok() || is_arbitrary_length(value)
}

fn is_arbitrary_length(value: &str) -> bool {
    let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) else {
        return false;
    };
    if let Some(rest) = inner.strip_prefix("length:") {
        return !rest.is_empty();
    }
    inner
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use PropertyGroup::*;

    #[test]
    fn test_parse_token_modifiers() {
        let parsed = parse_token("hover:focus:bg-primary/60");
        assert_eq!(parsed.modifiers, vec!["hover", "focus"]);
        assert_eq!(parsed.utility, "bg-primary/60");
        assert!(!parsed.important);
    }

    #[test]
    fn test_parse_token_important_and_negative() {
        assert!(parse_token("!mt-2").important);
        assert!(parse_token("mt-2!").important);
        assert_eq!(parse_token("-mt-2").utility, "mt-2");
    }

    #[test]
    fn test_parse_token_keeps_colons_inside_brackets() {
        let parsed = parse_token("print:bg-[url(a:b)]");
        assert_eq!(parsed.modifiers, vec!["print"]);
        assert_eq!(parsed.utility, "bg-[url(a:b)]");
    }

    #[test]
    fn test_text_tokens_split_by_form() {
        assert_eq!(classify("text-xs"), Some(FontSize));
        assert_eq!(classify("text-2xl"), Some(FontSize));
        assert_eq!(classify("text-[10px]"), Some(FontSize));
        assert_eq!(classify("text-blue-800"), Some(TextColor));
        assert_eq!(classify("text-primary-foreground"), Some(TextColor));
        assert_eq!(classify("text-center"), Some(TextAlign));
        assert_eq!(classify("text-nowrap"), Some(TextWrap));
        assert_eq!(classify("text-pretty"), Some(TextWrap));
    }

    #[test]
    fn test_border_tokens_split_by_form() {
        assert_eq!(classify("border"), Some(BorderWidth));
        assert_eq!(classify("border-2"), Some(BorderWidth));
        assert_eq!(classify("border-transparent"), Some(BorderColor));
        assert_eq!(classify("border-dashed"), Some(BorderStyle));
        assert_eq!(classify("border-t-2"), None);
    }

    #[test]
    fn test_ring_tokens() {
        assert_eq!(classify("focus:ring-2"), Some(RingWidth));
        assert_eq!(classify("focus:ring-ring"), Some(RingColor));
        assert_eq!(classify("focus:ring-offset-2"), Some(RingOffsetWidth));
    }

    #[test]
    fn test_spacing_prefixes_do_not_collide() {
        assert_eq!(classify("px-2"), Some(PaddingX));
        assert_eq!(classify("p-0"), Some(Padding));
        assert_eq!(classify("mt-auto"), Some(MarginTop));
        assert_eq!(classify("max-w-md"), Some(MaxWidth));
        assert_eq!(classify("min-h-0"), Some(MinHeight));
        assert_eq!(classify("gap-y-3"), Some(GapY));
    }

    #[test]
    fn test_transition_and_transform_tokens() {
        assert_eq!(classify("transition-colors"), Some(TransitionProperty));
        assert_eq!(classify("transition"), Some(TransitionProperty));
        assert_eq!(classify("duration-200"), Some(Duration));
        assert_eq!(classify("hover:scale-110"), Some(Scale));
    }

    #[test]
    fn test_unknown_tokens_are_miscellaneous() {
        assert_eq!(classify("card-title"), None);
        assert_eq!(classify("animate-pulse"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("font-[Inter]"), None);
    }

    #[test]
    fn test_shadows_cover_axes() {
        assert!(Padding.shadows().contains(&PaddingX));
        assert!(PaddingX.shadows().contains(&PaddingLeft));
        assert!(!PaddingX.shadows().contains(&PaddingTop));
        assert!(TextColor.shadows().is_empty());
    }
}
