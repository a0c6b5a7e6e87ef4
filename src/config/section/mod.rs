//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module     | TOML Section           | Purpose                           |
//! |------------|------------------------|-----------------------------------|
//! | `site`     | `[site]`               | Site metadata (title, logo, url)  |
//! | `theme`    | `[theme.appearance]`   | Color mode and switch settings    |
//! | `nav`      | `[[nav]]`              | Top navigation entries            |
//! | `sidebar`  | `[[sidebar]]`          | Sidebar groups and their links    |
//! | `markdown` | `[markdown]`           | Highlight theme, plugin registry  |

pub mod markdown;
pub mod nav;
pub mod sidebar;
pub mod site;
pub mod theme;

// Re-export section configs
pub use markdown::{MarkdownConfig, MarkdownTheme, PluginConfig};
pub use nav::NavItem;
pub use sidebar::SidebarGroup;
pub use site::SiteInfoConfig;
pub use theme::{AppearanceConfig, ColorMode, ThemeSectionConfig};
