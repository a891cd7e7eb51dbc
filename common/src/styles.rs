//! Tailwind class tables for the UI primitives.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
  #[default]
  Default,
  Destructive,
  Outline,
  Secondary,
  Ghost,
  Link,
}

impl ButtonVariant {
  pub fn classes(&self) -> &'static str {
    match self {
      Self::Default => "bg-slate-900 text-white hover:bg-slate-800 dark:bg-slate-50 dark:text-slate-900 dark:hover:bg-slate-200",
      Self::Destructive => "bg-red-500 text-white hover:bg-red-600 dark:hover:bg-red-600",
      Self::Outline => "border border-slate-200 hover:bg-slate-100 dark:border-slate-700 dark:text-slate-100",
      Self::Secondary => "bg-slate-100 text-slate-900 hover:bg-slate-200 dark:bg-slate-700 dark:text-slate-100",
      Self::Ghost => "hover:bg-slate-100 hover:text-slate-900 dark:hover:bg-slate-800 dark:hover:text-slate-50",
      Self::Link => "text-slate-900 underline-offset-4 hover:underline dark:text-slate-100",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
  #[default]
  Default,
  Sm,
  Lg,
  Icon,
}

impl ButtonSize {
  pub fn classes(&self) -> &'static str {
    match self {
      Self::Default => "h-10 px-4 py-2",
      Self::Sm => "h-9 rounded-md px-3",
      Self::Lg => "h-11 rounded-md px-8",
      Self::Icon => "h-10 w-10",
    }
  }
}

pub const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors \
  focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-slate-400 \
  disabled:pointer-events-none disabled:opacity-50";

pub const INPUT_BASE: &str = "flex h-10 w-full rounded-md border border-slate-200 bg-white px-3 py-2 text-sm \
  placeholder:text-slate-500 focus:outline-none focus:ring-2 focus:ring-slate-400 \
  disabled:cursor-not-allowed disabled:opacity-50 dark:border-slate-700 \
  dark:bg-slate-900 dark:text-slate-50 dark:focus:ring-slate-400 dark:focus:ring-offset-slate-900";

pub const CARD_BASE: &str = "border rounded-lg shadow p-4";

/// Joins class lists, skipping empty ones.
pub fn class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
  parts
    .into_iter()
    .map(str::trim)
    .filter(|p| !p.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
  class_names([BUTTON_BASE, variant.classes(), size.classes(), extra.unwrap_or("")])
}

pub fn input_class(extra: Option<&str>) -> String {
  class_names([INPUT_BASE, extra.unwrap_or("")])
}
