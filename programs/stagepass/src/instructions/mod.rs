pub mod initialize_registry;
pub mod update_registry;
pub mod treasury;
pub mod registry_views;
pub mod create_event;
pub mod setup_event;
pub mod define_ticket_type;
pub mod claim_ticket;
pub mod claim_zoned_ticket;
pub mod activate_ticket;
pub mod transfer_ticket;
pub mod toggle_sale;
pub mod increase_supply;
pub mod add_ticket_type;
pub mod update_metadata;
pub mod close_event;
pub mod rotate_keys;
pub mod event_views;

pub use initialize_registry::*;
pub use update_registry::*;
pub use treasury::*;
pub use registry_views::*;
pub use create_event::*;
pub use setup_event::*;
pub use define_ticket_type::*;
pub use claim_ticket::*;
pub use claim_zoned_ticket::*;
pub use activate_ticket::*;
pub use transfer_ticket::*;
pub use toggle_sale::*;
pub use increase_supply::*;
pub use add_ticket_type::*;
pub use update_metadata::*;
pub use close_event::*;
pub use rotate_keys::*;
pub use event_views::*;
