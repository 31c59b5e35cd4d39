//! The built-in icon catalog.
//!
//! Every built-in icon has an [`IconId`], a slot that builds it on first
//! access, and a zero-argument accessor in [`icons`]. All accessors go
//! through [`icon`]:
//!
//! ```
//! use vecticon_pack::{icon, icons, IconId};
//!
//! let copy = icons::copy();
//! assert!(std::ptr::eq(copy, icon(IconId::Copy)));
//! assert_eq!(copy.name(), "Copy");
//! ```

mod account;
mod action;
mod alert;
mod content;
mod navigation;

use vecticon_graphics::{Color, VectorIcon};

use crate::slot::IconSlot;

/// Default foreground for monochrome icons.
pub(crate) const FOREGROUND: Color = Color::WHITE;
/// Destructive actions and errors.
pub(crate) const DANGER: Color = Color::from_argb32(0xFFFA3C3C);
/// Warnings.
pub(crate) const CAUTION: Color = Color::from_argb32(0xFFFFB020);
/// Confirmations.
pub(crate) const SUCCESS: Color = Color::from_argb32(0xFF2EB872);
/// Informational accents.
pub(crate) const ACCENT: Color = Color::from_argb32(0xFF3C8CFA);

macro_rules! icon_catalog {
    ($($variant:ident => $accessor:ident = $build:path;)*) => {
        /// Identifier of a built-in icon.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum IconId {
            $($variant,)*
        }

        impl IconId {
            /// Every built-in icon, in catalog order.
            pub const ALL: &'static [IconId] = &[$(IconId::$variant,)*];

            /// Number of built-in icons.
            pub const COUNT: usize = Self::ALL.len();

            /// The canonical PascalCase name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(IconId::$variant => stringify!($variant),)*
                }
            }

            fn build(self) -> VectorIcon {
                match self {
                    $(IconId::$variant => $build(),)*
                }
            }
        }

        /// One accessor per built-in icon.
        ///
        /// Each returns the same instance on every call.
        pub mod icons {
            use vecticon_graphics::VectorIcon;

            use super::{icon, IconId};

            $(
                #[doc = concat!("The `", stringify!($variant), "` icon.")]
                pub fn $accessor() -> &'static VectorIcon {
                    icon(IconId::$variant)
                }
            )*
        }
    };
}

icon_catalog! {
    // Account
    Account => account = account::account;
    AddAccount => add_account = account::add_account;
    Logout => logout = account::logout;

    // Actions
    Add => add = action::add;
    Copy => copy = action::copy;
    Delete => delete = action::delete;
    Download => download = action::download;
    Edit => edit = action::edit;
    Remove => remove = action::remove;
    Search => search = action::search;
    Settings => settings = action::settings;
    Share => share = action::share;
    Sync => sync = action::sync;
    Upload => upload = action::upload;

    // Alerts
    Cancel => cancel = alert::cancel;
    CheckCircle => check_circle = alert::check_circle;
    Info => info = alert::info;
    Report => report = alert::report;
    Warning => warning = alert::warning;

    // Content
    Badge => badge = content::badge;
    Bookmark => bookmark = content::bookmark;
    Calendar => calendar = content::calendar;
    Contrast => contrast = content::contrast;
    Favorite => favorite = content::favorite;
    Folder => folder = content::folder;
    Lock => lock = content::lock;
    Mail => mail = content::mail;
    Notifications => notifications = content::notifications;
    Star => star = content::star;
    Visibility => visibility = content::visibility;

    // Navigation
    ArrowBack => arrow_back = navigation::arrow_back;
    ArrowForward => arrow_forward = navigation::arrow_forward;
    ChevronDown => chevron_down = navigation::chevron_down;
    ChevronUp => chevron_up = navigation::chevron_up;
    Close => close = navigation::close;
    Home => home = navigation::home;
    Menu => menu = navigation::menu;
    MoreVertical => more_vertical = navigation::more_vertical;
}

static SLOTS: [IconSlot; IconId::COUNT] = [const { IconSlot::new() }; IconId::COUNT];

impl IconId {
    /// Look up an icon by name.
    ///
    /// The canonical name matches exactly. Otherwise the comparison ignores
    /// case, `-`, `_` and spaces, so `"add-account"` finds `AddAccount`.
    pub fn from_name(name: &str) -> Option<IconId> {
        if let Some(id) = Self::ALL.iter().find(|id| id.name() == name) {
            return Some(*id);
        }
        let wanted = normalize(name);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .find(|id| normalize(id.name()) == wanted)
            .copied()
    }

    /// Position of this id in [`IconId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for IconId {
    type Err = crate::PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::PackError::UnknownIcon(s.to_string()))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Get a built-in icon, building it on first access.
pub fn icon(id: IconId) -> &'static VectorIcon {
    SLOTS[id.index()].get_or_build(id.name(), || id.build())
}

/// Get a built-in icon by name. See [`IconId::from_name`].
pub fn icon_by_name(name: &str) -> Option<&'static VectorIcon> {
    IconId::from_name(name).map(icon)
}

/// Iterate over every built-in icon, building each as it is reached.
pub fn all() -> impl Iterator<Item = (IconId, &'static VectorIcon)> {
    IconId::ALL.iter().map(|&id| (id, icon(id)))
}

/// Returns whether the icon's slot has been populated.
pub fn is_initialized(id: IconId) -> bool {
    SLOTS[id.index()].is_initialized()
}
