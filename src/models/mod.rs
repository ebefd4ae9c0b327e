pub mod config;
pub mod role_map;
pub mod role_table;

pub use config::{PaletteStyle, RoleOverride, ThemeConfig};
pub use role_map::RoleMap;
pub use role_table::{RoleRow, RoleSpec, DARK_ROLES, LIGHT_ROLES};
