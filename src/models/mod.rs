//! Data models for the FreshService API.
//!
//! One module per resource family. Response types deserialize leniently:
//! missing fields fall back to their defaults. Request payloads skip unset
//! fields so partial updates only touch what the caller set.

mod agent;
mod announcement;
mod asset;
mod business_hours;
mod change;
mod common;
mod contract;
mod conversation;
mod custom_object;
mod department;
mod location;
mod note;
mod problem;
mod product;
mod purchase_order;
mod release;
mod requester;
mod service_catalog;
mod sla_policy;
mod software;
mod solution;
mod task;
mod ticket;
mod time_entry;
mod vendor;

pub use agent::*;
pub use announcement::*;
pub use asset::*;
pub use business_hours::*;
pub use common::*;
pub use contract::*;
pub use conversation::*;
pub use custom_object::*;
pub use department::*;
pub use location::*;
pub use note::*;
pub use problem::*;
pub use product::*;
pub use purchase_order::*;
pub use requester::*;
pub use service_catalog::*;
pub use sla_policy::*;
pub use software::*;
pub use solution::*;
pub use time_entry::*;
pub use vendor::*;

pub use change::{
    Change, ChangeEnvelope, Changes, CreateChangeModel, ListChangesOptions, UpdateChangeModel,
};
pub use release::{
    CreateReleaseModel, ListReleasesOptions, Release, ReleaseEnvelope, Releases, UpdateReleaseModel,
};
pub use task::{CreateTaskModel, Task, TaskEnvelope, Tasks, UpdateTaskModel};
pub use ticket::{
    CreateTicketModel, ListTicketsOptions, Ticket, TicketActivities, TicketActivity, TicketAttachment,
    TicketEnvelope, Tickets, UpdateTicketModel,
};

/// Code constants for changes.
pub mod changes {
    pub use super::change::{change_type, impact, priority, risk, status};
}

/// Code constants for releases.
pub mod releases {
    pub use super::release::{priority, release_type, status};
}

/// Code constants for tasks.
pub mod tasks {
    pub use super::task::status;
}

/// Code constants for tickets.
pub mod tickets {
    pub use super::ticket::{priority, source, status};
}
