//! # HTML Snippets
//!
//! Template specializations producing an HTML tag per row.

use std::fmt;
use std::str::FromStr;

use polars::prelude::Expr;

use super::template::{make_concat_str, TemplateOptions, DEFAULT_PLACEHOLDER};
use crate::config::ExprKitConfig;
use crate::core::error::{Error, Result};

/// Default output name of [`make_hyperlink`].
pub const DEFAULT_HYPERLINK_NAME: &str = "hyperlink";

/// Default output name of [`make_tooltip`].
pub const DEFAULT_TOOLTIP_NAME: &str = "tooltip";

/// Underline style of a tooltip label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDecoration {
    /// Solid underline
    Solid,
    /// Dotted underline
    #[default]
    Dotted,
    /// No underline
    None,
}

impl TextDecoration {
    const ALLOWED: &'static str = "'none', 'solid', or 'dotted'";

    /// CSS keyword of the style
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
            Self::None => "none",
        }
    }
}

impl fmt::Display for TextDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextDecoration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "solid" => Ok(Self::Solid),
            "dotted" => Ok(Self::Dotted),
            "none" => Ok(Self::None),
            other => Err(Error::InvalidOption {
                option: "text_decoration_style",
                value: other.to_string(),
                allowed: Self::ALLOWED.to_string(),
            }),
        }
    }
}

/// Text color of a tooltip label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipColor {
    /// Leave the color to the surrounding stylesheet
    None,
    /// Any CSS color value
    Css(String),
}

impl Default for TooltipColor {
    fn default() -> Self {
        Self::Css("blue".to_string())
    }
}

impl FromStr for TooltipColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Err(Error::InvalidOption {
                option: "color",
                value: s.to_string(),
                allowed: "a CSS color or 'none'".to_string(),
            }),
            "none" => Ok(Self::None),
            color => Ok(Self::Css(color.to_string())),
        }
    }
}

/// Options for [`make_tooltip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipOptions {
    pub text_decoration: TextDecoration,
    pub color: TooltipColor,
    pub name: String,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            text_decoration: TextDecoration::default(),
            color: TooltipColor::default(),
            name: DEFAULT_TOOLTIP_NAME.to_string(),
        }
    }
}

impl TooltipOptions {
    /// Options using the output name configured in `config`
    pub fn from_config(config: &ExprKitConfig) -> Self {
        Self {
            name: config.naming.tooltip.clone(),
            ..Self::default()
        }
    }

    /// Parse the decoration style and color from strings.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidOption`] on an unknown style or empty color.
    pub fn parse(text_decoration: &str, color: &str) -> Result<Self> {
        Ok(Self {
            text_decoration: text_decoration.parse()?,
            color: color.parse()?,
            ..Self::default()
        })
    }

    /// Set the output column name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    fn style(&self) -> String {
        let mut style = String::from("cursor: help; ");
        match self.text_decoration {
            TextDecoration::None => style.push_str("text-decoration: none; "),
            decoration => {
                style.push_str("text-decoration: underline; ");
                style.push_str(&format!("text-decoration-style: {}; ", decoration));
            },
        }
        if let TooltipColor::Css(color) = &self.color {
            style.push_str(&format!("color: {}; ", color));
        }
        style
    }
}

/// HTML anchor per row: `<a href="URL" target="...">TEXT</a>`.
///
/// `text` and `url` are column names. The link opens in a new tab
/// (`_blank`) when `new_tab` is set, in the current one (`_self`) otherwise.
pub fn make_hyperlink(text: &str, url: &str, new_tab: bool, name: &str) -> Result<Expr> {
    let target = if new_tab { "_blank" } else { "_self" };
    let template = format!(
        r#"<a href="{p}" target="{target}">{p}</a>"#,
        p = DEFAULT_PLACEHOLDER,
        target = target
    );
    make_concat_str(&template, [url, text], TemplateOptions::default().with_name(name))
}

/// [`make_hyperlink`] aliased to the configured `naming.hyperlink`.
pub fn make_hyperlink_from_config(
    config: &ExprKitConfig,
    text: &str,
    url: &str,
    new_tab: bool,
) -> Result<Expr> {
    make_hyperlink(text, url, new_tab, &config.naming.hyperlink)
}

/// HTML tooltip per row: `<abbr style="..." title="TOOLTIP">LABEL</abbr>`.
///
/// `label` and `tooltip` are column names.
pub fn make_tooltip(label: &str, tooltip: &str, options: TooltipOptions) -> Result<Expr> {
    let template = format!(
        r#"<abbr style="{style}" title="{p}">{p}</abbr>"#,
        style = options.style(),
        p = DEFAULT_PLACEHOLDER
    );
    make_concat_str(
        &template,
        [tooltip, label],
        TemplateOptions::default().with_name(options.name),
    )
}
