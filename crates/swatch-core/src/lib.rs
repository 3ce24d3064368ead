pub mod app_config;
pub mod cards;
pub mod config;
pub mod error;
pub mod options;
pub mod products;
pub mod selection;
pub mod variants;

pub use app_config::{AppConfig, Environment};
pub use cards::{load_card_configs, CardConfig, CardsFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use options::{normalize_option_name, Axis, RawSlotConfig, SlotConfig, SlotPosition};
pub use products::ProductData;
pub use selection::{Selection, SelectionKey, SlotValues};
pub use variants::{InventoryTracking, Variant};
