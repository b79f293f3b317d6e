//! Resource services.
//!
//! Each service borrows a [`Client`] and maps one API operation onto one
//! transport primitive. Single-resource calls unwrap the JSON envelope
//! (`{"ticket": {...}}`) so callers get the resource itself; list calls
//! return the collection struct. Calls that return no body yield `true`.
//!
//! Obtain services through [`Freshservice`](crate::Freshservice) rather than
//! constructing them directly.

mod agents;
mod announcements;
mod assets;
mod business_hours;
mod changes;
mod children;
mod contracts;
mod custom_objects;
mod departments;
mod locations;
mod problems;
mod products;
mod purchase_orders;
mod releases;
mod requesters;
mod service_catalog;
mod sla_policies;
mod software;
mod solutions;
mod tickets;
mod vendors;

pub use agents::AgentService;
pub use announcements::AnnouncementService;
pub use assets::AssetService;
pub use business_hours::BusinessHoursService;
pub use changes::ChangeService;
pub use contracts::ContractService;
pub use custom_objects::CustomObjectService;
pub use departments::DepartmentService;
pub use locations::LocationService;
pub use problems::ProblemService;
pub use products::ProductService;
pub use purchase_orders::PurchaseOrderService;
pub use releases::ReleaseService;
pub use requesters::RequesterService;
pub use service_catalog::ServiceCatalogService;
pub use sla_policies::SlaPolicyService;
pub use software::SoftwareService;
pub use solutions::SolutionService;
pub use tickets::TicketService;
pub use vendors::VendorService;

use reqwest::Method;

use crate::client::{Client, Response, Result};

/// PUTs to an action endpoint (`restore`, `?operation=approve`, ...) that
/// takes no body and returns none.
pub(crate) async fn put_action(client: &Client, path: &str) -> Result<Response<bool>> {
    let response = client.execute(Method::PUT, path, None::<&()>).await?;
    Ok(response.map(|_| true))
}

/// Joins IDs for a comma-separated query parameter.
pub(crate) fn join_ids<I>(ids: I) -> String
where
    I: IntoIterator,
    I::Item: ToString,
{
    ids.into_iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids([4u64, 8, 15]), "4,8,15");
        assert_eq!(join_ids(Vec::<u64>::new()), "");
    }
}
