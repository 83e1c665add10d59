//! Built-in utility-first ordering.
//!
//! Families follow the utility layer order: layout and position, box model,
//! sizing, flex and grid, spacing, borders, backgrounds, typography, effects,
//! filters, transitions. Variant-prefixed classes rank after every base
//! utility, heavier variants (responsive, arbitrary) last.

use std::path::Path;
use std::sync::Arc;

use regex::Regex;
use rustc_hash::FxHashMap;
use tailsort_core::errors::OracleError;

use super::traits::{OracleLoader, OrderContext, OrderOracle};

/// Utility families in canonical order. Entries ending in `-` match by
/// prefix; all others match exactly.
const UTILITY_FAMILIES: &[&[&str]] = &[
    &["container"],
    &["sr-only", "not-sr-only"],
    &["pointer-events-"],
    &["visible", "invisible", "collapse"],
    &["static", "fixed", "absolute", "relative", "sticky"],
    &["inset-"],
    &["inset-x-", "inset-y-"],
    &["start-", "end-"],
    &["top-", "right-", "bottom-", "left-"],
    &["isolate", "isolation-auto"],
    &["z-"],
    &["order-"],
    &["col-", "col-span-"],
    &["col-start-"],
    &["col-end-"],
    &["row-", "row-span-"],
    &["row-start-"],
    &["row-end-"],
    &["float-"],
    &["clear-"],
    &["m-"],
    &["mx-", "my-"],
    &["ms-", "me-", "mt-", "mr-", "mb-", "ml-"],
    &["box-border", "box-content"],
    &["line-clamp-"],
    &[
        "block",
        "inline-block",
        "inline",
        "flex",
        "inline-flex",
        "table",
        "inline-table",
        "table-caption",
        "table-cell",
        "table-column",
        "table-column-group",
        "table-footer-group",
        "table-header-group",
        "table-row-group",
        "table-row",
        "flow-root",
        "grid",
        "inline-grid",
        "contents",
        "list-item",
        "hidden",
    ],
    &["aspect-"],
    &["size-"],
    &["h-"],
    &["max-h-"],
    &["min-h-"],
    &["w-"],
    &["min-w-"],
    &["max-w-"],
    &["flex-1", "flex-auto", "flex-initial", "flex-none"],
    &["shrink", "shrink-", "flex-shrink", "flex-shrink-"],
    &["grow", "grow-", "flex-grow", "flex-grow-"],
    &["basis-"],
    &["table-auto", "table-fixed"],
    &["caption-"],
    &["border-collapse", "border-separate"],
    &["border-spacing-", "border-spacing-x-", "border-spacing-y-"],
    &["origin-"],
    &["translate-x-", "translate-y-"],
    &["rotate-"],
    &["skew-x-", "skew-y-"],
    &["scale-", "scale-x-", "scale-y-"],
    &["transform", "transform-cpu", "transform-gpu", "transform-none"],
    &["animate-"],
    &["cursor-"],
    &["touch-"],
    &["select-"],
    &["resize", "resize-"],
    &["snap-"],
    &["scroll-m-", "scroll-mx-", "scroll-my-", "scroll-mt-", "scroll-mr-", "scroll-mb-", "scroll-ml-"],
    &["scroll-p-", "scroll-px-", "scroll-py-", "scroll-pt-", "scroll-pr-", "scroll-pb-", "scroll-pl-"],
    &["list-inside", "list-outside"],
    &["list-"],
    &["appearance-"],
    &["columns-"],
    &["break-before-", "break-inside-", "break-after-"],
    &["auto-cols-"],
    &["grid-flow-"],
    &["auto-rows-"],
    &["grid-cols-"],
    &["grid-rows-"],
    &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"],
    &["flex-wrap", "flex-wrap-reverse", "flex-nowrap"],
    &["place-content-"],
    &["place-items-"],
    &["content-"],
    &["items-"],
    &["justify-"],
    &["justify-items-"],
    &["gap-"],
    &["gap-x-", "gap-y-"],
    &["space-x-", "space-y-"],
    &["divide-x", "divide-y", "divide-x-", "divide-y-"],
    &["divide-solid", "divide-dashed", "divide-dotted", "divide-double", "divide-none"],
    &["divide-"],
    &["place-self-"],
    &["self-"],
    &["justify-self-"],
    &["overflow-", "overflow-x-", "overflow-y-"],
    &["overscroll-"],
    &["scroll-auto", "scroll-smooth"],
    &["truncate", "text-ellipsis", "text-clip"],
    &["whitespace-"],
    &["break-normal", "break-words", "break-all", "break-keep"],
    &["rounded", "rounded-"],
    &[
        "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
        "rounded-s-", "rounded-e-", "rounded-t-", "rounded-r-", "rounded-b-", "rounded-l-",
    ],
    &["border", "border-0", "border-2", "border-4", "border-8"],
    &["border-x", "border-y", "border-x-", "border-y-"],
    &[
        "border-s", "border-e", "border-t", "border-r", "border-b", "border-l",
        "border-s-", "border-e-", "border-t-", "border-r-", "border-b-", "border-l-",
    ],
    &["border-solid", "border-dashed", "border-dotted", "border-double", "border-hidden", "border-none"],
    &["border-"],
    &["bg-"],
    &["bg-opacity-"],
    &["bg-gradient-to-", "bg-none"],
    &["from-"],
    &["via-"],
    &["to-"],
    &["box-decoration-slice", "box-decoration-clone"],
    &["bg-auto", "bg-cover", "bg-contain"],
    &["bg-clip-"],
    &["bg-fixed", "bg-local", "bg-scroll"],
    &[
        "bg-bottom", "bg-center", "bg-left", "bg-left-bottom", "bg-left-top",
        "bg-right", "bg-right-bottom", "bg-right-top", "bg-top",
    ],
    &["bg-repeat", "bg-no-repeat", "bg-repeat-x", "bg-repeat-y", "bg-repeat-round", "bg-repeat-space"],
    &["bg-origin-"],
    &["fill-"],
    &["stroke-"],
    &["object-contain", "object-cover", "object-fill", "object-none", "object-scale-down"],
    &["object-"],
    &["p-"],
    &["px-", "py-"],
    &["ps-", "pe-", "pt-", "pr-", "pb-", "pl-"],
    &["text-left", "text-center", "text-right", "text-justify", "text-start", "text-end"],
    &["indent-"],
    &["align-"],
    &["font-sans", "font-serif", "font-mono"],
    &[
        "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl",
        "text-4xl", "text-5xl", "text-6xl", "text-7xl", "text-8xl", "text-9xl",
    ],
    &[
        "font-thin", "font-extralight", "font-light", "font-normal", "font-medium",
        "font-semibold", "font-bold", "font-extrabold", "font-black",
    ],
    &["uppercase", "lowercase", "capitalize", "normal-case"],
    &["italic", "not-italic"],
    &[
        "normal-nums", "ordinal", "slashed-zero", "lining-nums", "oldstyle-nums",
        "proportional-nums", "tabular-nums", "diagonal-fractions", "stacked-fractions",
    ],
    &["leading-"],
    &["tracking-"],
    &["text-"],
    &["text-opacity-"],
    &["underline", "overline", "line-through", "no-underline"],
    &["decoration-"],
    &["underline-offset-"],
    &["antialiased", "subpixel-antialiased"],
    &["placeholder-"],
    &["caret-"],
    &["accent-"],
    &["opacity-"],
    &["bg-blend-"],
    &["mix-blend-"],
    &["shadow", "shadow-"],
    &["outline", "outline-none", "outline-dashed", "outline-dotted", "outline-double"],
    &["outline-"],
    &["ring", "ring-inset", "ring-"],
    &["ring-offset-"],
    &["blur", "blur-"],
    &["brightness-"],
    &["contrast-"],
    &["drop-shadow", "drop-shadow-"],
    &["grayscale", "grayscale-"],
    &["hue-rotate-"],
    &["invert", "invert-"],
    &["saturate-"],
    &["sepia", "sepia-"],
    &["filter", "filter-none"],
    &["backdrop-"],
    &["transition", "transition-"],
    &["delay-"],
    &["duration-"],
    &["ease-"],
    &["will-change-"],
    &["content-none"],
];

/// Value rank for named values (`auto`, `full`, colors), between numbers and
/// arbitrary values.
const NAMED_VALUE_RANK: u32 = u32::MAX / 2;
const ARBITRARY_VALUE_RANK: u32 = u32::MAX - 1;

/// Settings read from the class-order configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilitySettings {
    /// Prefix every utility carries (`tw-`), empty for none.
    pub prefix: String,
    /// Separator between variants and the utility. Default `:`.
    pub separator: String,
}

impl Default for UtilitySettings {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: ":".to_string(),
        }
    }
}

impl UtilitySettings {
    /// Read `prefix` and `separator` from a JavaScript/TypeScript config source.
    /// Settings that are absent keep their defaults.
    pub fn from_config_source(source: &str, path: &Path) -> Result<Self, OracleError> {
        let malformed = |message: String| OracleError::Malformed {
            path: path.to_path_buf(),
            message,
        };

        let mut settings = Self::default();
        if let Some(prefix) = string_setting(source, "prefix").map_err(|e| malformed(e.to_string()))? {
            if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
                return Err(malformed(format!("prefix {prefix:?} is not class-shaped")));
            }
            settings.prefix = prefix;
        }
        if let Some(separator) =
            string_setting(source, "separator").map_err(|e| malformed(e.to_string()))?
        {
            if separator.is_empty() || separator.chars().any(char::is_whitespace) {
                return Err(malformed(format!("separator {separator:?} is empty or has whitespace")));
            }
            settings.separator = separator;
        }
        Ok(settings)
    }
}

/// First string value assigned to `key` in an object literal.
fn string_setting(source: &str, key: &str) -> Result<Option<String>, regex::Error> {
    let pattern = format!(
        r#"(?:^|[\s,{{])['"]?{key}['"]?\s*:\s*(?:'([^']*)'|"([^"]*)"|`([^`]*)`)"#
    );
    let re = Regex::new(&pattern)?;
    Ok(re.captures(source).and_then(|caps| {
        (1..=3)
            .find_map(|i| caps.get(i))
            .map(|m| m.as_str().to_string())
    }))
}

/// Loads `UtilityOrder` contexts from configuration files.
#[derive(Debug, Default, Clone, Copy)]
pub struct UtilityOrderLoader;

impl OracleLoader for UtilityOrderLoader {
    fn load(&self, config_path: &Path) -> Result<OrderContext, OracleError> {
        let bytes = std::fs::read(config_path).map_err(|e| OracleError::Unreadable {
            path: config_path.to_path_buf(),
            message: e.to_string(),
        })?;
        let source = String::from_utf8(bytes).map_err(|e| OracleError::Malformed {
            path: config_path.to_path_buf(),
            message: format!("not valid UTF-8: {e}"),
        })?;
        let settings = UtilitySettings::from_config_source(&source, config_path)?;
        tracing::debug!(
            config = %config_path.display(),
            prefix = %settings.prefix,
            separator = %settings.separator,
            "utility order settings"
        );
        Ok(OrderContext::new(config_path, Arc::new(UtilityOrder::new(settings))))
    }
}

/// Ranks utility classes by family, value and variant chain.
#[derive(Debug)]
pub struct UtilityOrder {
    settings: UtilitySettings,
    exact: FxHashMap<&'static str, u16>,
    prefixes: FxHashMap<&'static str, u16>,
}

impl UtilityOrder {
    pub fn new(settings: UtilitySettings) -> Self {
        let mut exact = FxHashMap::default();
        let mut prefixes = FxHashMap::default();
        for (rank, family) in UTILITY_FAMILIES.iter().enumerate() {
            for entry in family.iter() {
                let map = if entry.ends_with('-') {
                    &mut prefixes
                } else {
                    &mut exact
                };
                map.entry(*entry).or_insert(rank as u16);
            }
        }
        Self {
            settings,
            exact,
            prefixes,
        }
    }

    pub fn settings(&self) -> &UtilitySettings {
        &self.settings
    }

    /// Rank a single class, `None` when it is not a known utility.
    pub fn rank(&self, class: &str) -> Option<u64> {
        let (variants, utility) = split_variants(class, &self.settings.separator);
        let utility = utility.strip_prefix('!').unwrap_or(utility);
        let utility = utility.strip_suffix('!').unwrap_or(utility);
        let utility = utility.strip_prefix('-').unwrap_or(utility);
        let base = if self.settings.prefix.is_empty() {
            utility
        } else {
            utility.strip_prefix(self.settings.prefix.as_str())?
        };

        let (family, value) = self.family_rank(base)?;
        let variant = variant_chain_rank(&variants);
        Some((u64::from(variant) << 48) | (u64::from(family) << 32) | u64::from(value))
    }

    fn family_rank(&self, base: &str) -> Option<(u16, u32)> {
        if let Some(rank) = self.exact.get(base) {
            return Some((*rank, 0));
        }
        // Longest matching prefix wins.
        for (i, _) in base.match_indices('-').rev() {
            let (prefix, value) = base.split_at(i + 1);
            if value.is_empty() {
                continue;
            }
            if let Some(rank) = self.prefixes.get(prefix) {
                return Some((*rank, value_rank(value)));
            }
        }
        // Arbitrary properties: `[mask-type:luminance]`.
        if base.starts_with('[') && base.ends_with(']') && base.contains(':') {
            return Some((UTILITY_FAMILIES.len() as u16, 0));
        }
        None
    }
}

impl OrderOracle for UtilityOrder {
    fn class_order(&self, classes: &[&str]) -> Vec<Option<u64>> {
        classes.iter().map(|class| self.rank(class)).collect()
    }

    fn name(&self) -> &'static str {
        "utility-order"
    }
}

/// Split `hover:md:p-4` into (`[hover, md]`, `p-4`), ignoring separators
/// inside brackets and parentheses.
fn split_variants<'a>(class: &'a str, separator: &str) -> (Vec<&'a str>, &'a str) {
    let mut variants = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in class.char_indices() {
        if i < start {
            continue;
        }
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            _ => {}
        }
        if depth == 0 && class[i..].starts_with(separator) {
            variants.push(&class[start..i]);
            start = i + separator.len();
        }
    }
    (variants, &class[start..])
}

/// Weight of a variant chain: 0 for none, otherwise above every base utility.
fn variant_chain_rank(variants: &[&str]) -> u16 {
    variants
        .iter()
        .map(|v| single_variant_rank(v) + 1)
        .max()
        .unwrap_or(0)
}

fn single_variant_rank(variant: &str) -> u16 {
    match variant {
        "sm" => return 1000,
        "md" => return 1001,
        "lg" => return 1002,
        "xl" => return 1003,
        "2xl" => return 1004,
        "group-open" => return 95,
        "group-odd" => return 99,
        "placeholder" | "selection" | "first" | "last" | "only" | "empty" => return 120,
        "before" => return 121,
        "after" => return 122,
        "open" => return 123,
        "odd" | "hover" => return 124,
        "even" | "focus-within" => return 125,
        "focus" => return 126,
        "focus-visible" => return 127,
        "active" => return 128,
        "visited" => return 129,
        "disabled" => return 130,
        "dark" => return 160,
        _ => {}
    }
    if variant.starts_with('[') && variant.ends_with(']') {
        1106
    } else if variant.starts_with('@') {
        980
    } else if variant.starts_with("max-") {
        995
    } else if variant.starts_with("min-") {
        1005
    } else if variant.starts_with("group-") {
        100
    } else if variant.starts_with("peer-") {
        101
    } else if variant.starts_with("supports-") {
        220
    } else {
        260
    }
}

/// Natural order of a utility value: numbers by magnitude, then named
/// values, then arbitrary values.
fn value_rank(value: &str) -> u32 {
    if value.starts_with('[') || value.starts_with('(') {
        return ARBITRARY_VALUE_RANK;
    }
    if value == "px" {
        return 1;
    }
    if let Ok(n) = value.parse::<f64>() {
        return ((n * 100.0).max(0.0) as u32).saturating_add(2).min(NAMED_VALUE_RANK - 1);
    }
    if let Some((num, den)) = value.split_once('/') {
        if let (Ok(n), Ok(d)) = (num.parse::<f64>(), den.parse::<f64>()) {
            if d > 0.0 {
                return ((n / d * 10_000.0) as u32).saturating_add(2).min(NAMED_VALUE_RANK - 1);
            }
        }
    }
    NAMED_VALUE_RANK
}
